//! Top-N peak extraction over the Hough accumulator.

use crate::THETAS;
use itertools::Itertools;

/// One accumulator peak: a (rho, theta) cell and its vote count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Peak {
    pub rho_idx: u16,
    pub theta_idx: u16,
    pub votes: u16,
}

/// Fills `top` with the strongest cells of the accumulator.
///
/// Sequential online min-replacement: the accumulator is scanned in
/// row-major order and a cell replaces the current minimum of the set only
/// if its votes strictly exceed it, which breaks ties in favor of the
/// first-seen cell. The order of the resulting set carries no meaning.
pub fn extract_top(bins: &[u16], rhos: usize, top: &mut [Peak]) {
    assert_eq!(bins.len(), rhos * THETAS);

    top.fill(Peak::default());
    for rho in 0..rhos {
        for theta in 0..THETAS {
            let votes = bins[rho * THETAS + theta];
            let Some(min_idx) = top.iter().position_min_by_key(|peak| peak.votes) else {
                return;
            };
            if votes > top[min_idx].votes {
                top[min_idx] = Peak {
                    rho_idx: rho as u16,
                    theta_idx: theta as u16,
                    votes,
                };
            }
        }
    }
}
