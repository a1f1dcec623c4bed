//! Debug rasterization of detected lines onto a color frame.

use lanedet::lane::LaneLine;
use lanedet::trig::float_tables;
use lanedet::Geometry;

/// Endpoints for drawing a Hough line across the frame: the point nearest
/// the origin is pushed 1000 pixels in both directions along the line and
/// translated out of centered coordinates. Clipping happens per plotted
/// pixel, so the endpoints may lie far outside the frame.
pub fn lane_endpoints(geom: &Geometry, line: &LaneLine) -> (i32, i32, i32, i32) {
    let tables = float_tables();
    let cos = tables.cos[line.theta_idx];
    let sin = tables.sin[line.theta_idx];

    let rho = ((line.rho_idx - geom.rhos as i32 / 2) * geom.rho_resolution() as i32) as f32;
    let (x0, y0) = (cos * rho, sin * rho);
    let (dx, dy) = (-sin, cos);

    let x1 = (x0 + 1000.0 * dx) as i32 + geom.center_x();
    let y1 = (y0 + 1000.0 * dy) as i32 + geom.center_y();
    let x2 = (x0 - 1000.0 * dx) as i32 + geom.center_x();
    let y2 = (y0 - 1000.0 * dy) as i32 + geom.center_y();
    (x1, y1, x2, y2)
}

/// Bresenham line over a packed B,G,R buffer. Out-of-frame points are
/// skipped, not clamped.
pub fn draw_line(
    bgr: &mut [u8],
    width: usize,
    height: usize,
    endpoints: (i32, i32, i32, i32),
    color: [u8; 3],
) {
    let (mut x, mut y, x_end, y_end) = endpoints;

    let dx = (x_end - x).abs();
    let sx = if x < x_end { 1 } else { -1 };
    let dy = -(y_end - y).abs();
    let sy = if y < y_end { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if (0..width as i32).contains(&x) && (0..height as i32).contains(&y) {
            let px = (y as usize * width + x as usize) * 3;
            bgr[px..px + 3].copy_from_slice(&color);
        }

        if x == x_end && y == y_end {
            break;
        }
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            x += sx;
        }
        if doubled <= dx {
            err += dx;
            y += sy;
        }
    }
}
