//! Hough line accumulator over the reduced (rho, theta) lattice.

use crate::quant::QUANT_VAL;
use crate::trig::{COS_TABLE, SIN_TABLE};
use crate::{Geometry, LaneSectors, THETAS};

/// Accumulates votes from every non-zero pixel of `edges` into `bins`.
///
/// Coordinates are translated to centered form and reduced by the rho
/// resolution with an arithmetic right shift; the projection onto the line
/// normal runs in 32-bit Q10 and truncates back to a rho index. Only theta
/// values inside one of the two lane sectors vote. Bins saturate at
/// `u16::MAX`; the tests never present inputs anywhere near that bound.
///
/// A vote whose rho index falls outside `[0, rhos)` is dropped, not fatal.
/// Returns the number of dropped votes.
pub fn accumulate(
    geom: &Geometry,
    sectors: &LaneSectors,
    edges: &[u8],
    bins: &mut [u16],
) -> u32 {
    assert_eq!(edges.len(), geom.pixel_count());
    assert_eq!(bins.len(), geom.accumulator_len());

    bins.fill(0);

    let mut dropped = 0u32;
    for y in 0..geom.height {
        for x in 0..geom.width {
            if edges[y * geom.width + x] == 0 {
                continue;
            }

            let xs = (x as i32 - geom.center_x()) >> geom.rho_res_log;
            let ys = (y as i32 - geom.center_y()) >> geom.rho_res_log;

            for theta in 0..THETAS {
                if !sectors.contains(theta as u16) {
                    continue;
                }

                let sum = xs * COS_TABLE[theta] as i32 + ys * SIN_TABLE[theta] as i32;
                let rho_idx = sum / QUANT_VAL + (geom.rhos as i32 >> 1);
                if (0..geom.rhos as i32).contains(&rho_idx) {
                    let bin = &mut bins[rho_idx as usize * THETAS + theta];
                    *bin = bin.saturating_add(1);
                } else {
                    dropped += 1;
                }
            }
        }
    }

    if dropped > 0 {
        tracing::debug!(dropped, "rho index out of range, votes dropped");
    }
    dropped
}
