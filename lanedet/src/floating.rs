//! Floating reference variant of the accumulator and steering estimate.
//!
//! Mirrors the high-resolution reference deployment: every theta votes (no
//! angular gating), the projection runs in single precision and truncates to
//! a rho index, and steering works from the image bottom without the
//! center-line term. This path exists for bit-width sensitivity comparison
//! against the Q10 pipeline; it is never the authoritative output.

use crate::lane::LanePair;
use crate::trig::float_tables;
use crate::{Geometry, THETAS};

/// Lateral-offset steering gain of the reference.
pub const OFFSET_GAIN: f32 = 0.05;
/// Angle-error steering gain of the reference.
pub const ANGLE_GAIN: f32 = 0.3;

/// Floating Hough accumulation. Votes with an out-of-range rho index are
/// dropped, matching the integer path's failure semantics.
pub fn accumulate(geom: &Geometry, edges: &[u8], bins: &mut [u16]) -> u32 {
    assert_eq!(edges.len(), geom.pixel_count());
    assert_eq!(bins.len(), geom.accumulator_len());

    let tables = float_tables();
    bins.fill(0);

    let mut dropped = 0u32;
    for y in 0..geom.height {
        for x in 0..geom.width {
            if edges[y * geom.width + x] == 0 {
                continue;
            }

            let xs = ((x as i32 - geom.center_x()) >> geom.rho_res_log) as f32;
            let ys = ((y as i32 - geom.center_y()) >> geom.rho_res_log) as f32;

            for theta in 0..THETAS {
                let rho = (xs * tables.cos[theta] + ys * tables.sin[theta]) as i32;
                let rho_idx = rho + (geom.rhos as i32 >> 1);
                if (0..geom.rhos as i32).contains(&rho_idx) {
                    let bin = &mut bins[rho_idx as usize * THETAS + theta];
                    *bin = bin.saturating_add(1);
                } else {
                    dropped += 1;
                }
            }
        }
    }
    dropped
}

/// Floating steering estimate for a selected lane pair.
///
/// `x = rho / cos(theta)` per line, offset is the image center against the
/// lane midpoint, and the angle error is the raw theta difference. Returns
/// zero if either cosine is zero.
pub fn steering(geom: &Geometry, lanes: &LanePair) -> f32 {
    let tables = float_tables();
    let cos_l = tables.cos[lanes.left.theta_idx];
    let cos_r = tables.cos[lanes.right.theta_idx];
    if cos_l == 0.0 || cos_r == 0.0 {
        return 0.0;
    }

    let half_rhos = geom.rhos as i32 >> 1;
    let left_rho = ((lanes.left.rho_idx - half_rhos) * geom.rho_resolution() as i32) as f32;
    let right_rho = ((lanes.right.rho_idx - half_rhos) * geom.rho_resolution() as i32) as f32;

    let left_x = left_rho / cos_l;
    let right_x = right_rho / cos_r;

    let lane_center = (left_x + right_x) * 0.5;
    let offset = geom.center_x() as f32 - lane_center;
    let angle_error = (lanes.right.theta_idx as i32 - lanes.left.theta_idx as i32) as f32;

    offset * OFFSET_GAIN + angle_error * ANGLE_GAIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lane::LaneLine;
    use crate::LaneSectors;

    #[test]
    fn accumulates_every_theta() {
        let geom = Geometry::LOW_RES;
        let mut edges = vec![0u8; geom.pixel_count()];
        edges[60 * geom.width + 80] = 255;
        let mut bins = vec![0u16; geom.accumulator_len()];
        let dropped = accumulate(&geom, &edges, &mut bins);
        assert_eq!(dropped, 0);

        let zero_rho = geom.rhos / 2;
        for theta in 0..THETAS {
            assert_eq!(bins[zero_rho * THETAS + theta], 1);
        }
        assert_eq!(
            bins.iter().map(|&b| u32::from(b)).sum::<u32>(),
            THETAS as u32
        );
    }

    #[test]
    fn gated_bins_agree_with_the_integer_path() {
        // On the same edge map, every gated bin of the Q10 accumulator is
        // within one rho step of the floating one.
        let geom = Geometry::LOW_RES;
        let sectors = LaneSectors::DEFAULT;
        let mut edges = vec![0u8; geom.pixel_count()];
        for (i, px) in edges.iter_mut().enumerate() {
            *px = u8::from(i % 131 == 0) * 255;
        }

        let mut float_bins = vec![0u16; geom.accumulator_len()];
        let mut fixed_bins = vec![0u16; geom.accumulator_len()];
        accumulate(&geom, &edges, &mut float_bins);
        crate::hough::accumulate(&geom, &sectors, &edges, &mut fixed_bins);

        for theta in 0..THETAS {
            if !sectors.contains(theta as u16) {
                continue;
            }
            for rho in 0..geom.rhos {
                let fixed = fixed_bins[rho * THETAS + theta];
                if fixed == 0 {
                    continue;
                }
                let nearby: u32 = (rho.saturating_sub(1)..=(rho + 1).min(geom.rhos - 1))
                    .map(|r| u32::from(float_bins[r * THETAS + theta]))
                    .sum();
                assert!(
                    nearby >= u32::from(fixed),
                    "bin ({rho}, {theta}) diverged: fixed {fixed}, nearby float {nearby}"
                );
            }
        }
    }

    #[test]
    fn symmetric_lanes_center_on_the_image() {
        let geom = Geometry::HIGH_RES;
        let lanes = LanePair {
            left: LaneLine {
                rho_idx: geom.rhos as i32 / 2,
                theta_idx: 130,
            },
            right: LaneLine {
                rho_idx: geom.rhos as i32 / 2,
                theta_idx: 50,
            },
        };
        // Both lines pass through the center: the lane midpoint is zero and
        // the steering reduces to the offset gain times the image center
        // minus the angle term.
        let expected = geom.center_x() as f32 * OFFSET_GAIN + (50.0 - 130.0) * ANGLE_GAIN;
        assert_eq!(steering(&geom, &lanes), expected);
    }
}
