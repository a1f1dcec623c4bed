//! Lane selection over the top-N peaks and the Q10 steering estimate.

use crate::peaks::Peak;
use crate::quant::{q_mul, quantize_i, signed_trunc_div, BITS};
use crate::trig::{COS_TABLE, SIN_TABLE};
use crate::{Geometry, LaneSectors, Sector};
use snafu::Snafu;

/// Steering gain on the lateral offset, 0.05 in Q10.
pub const OFFSET_Q: i32 = 51;
/// Steering gain on the angle error, 0.3 in Q10.
pub const ANGLE_Q: i32 = 307;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneSide {
    Left,
    Right,
}

/// Lane selection failure. This is a structured result, not a fault: the
/// pipeline reports it and forces the steering word to zero.
#[derive(Debug, Snafu, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    #[snafu(display("no candidate line in the {side:?} sector"))]
    SectorEmpty { side: LaneSide },
    #[snafu(display("cosine is zero at theta index {theta_idx}"))]
    SingularCosine { theta_idx: u16 },
}

/// One selected line on the Hough lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneLine {
    pub rho_idx: i32,
    pub theta_idx: usize,
}

impl From<Peak> for LaneLine {
    fn from(peak: Peak) -> Self {
        Self {
            rho_idx: peak.rho_idx as i32,
            theta_idx: peak.theta_idx as usize,
        }
    }
}

/// The chosen left and right lane lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanePair {
    pub left: LaneLine,
    pub right: LaneLine,
}

/// How to pick one line per sector out of the peak set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Highest votes; equal votes go to the theta nearest the sector target.
    /// The hardware path.
    BestVote,
    /// First candidate per sector in peak order, as the floating reference
    /// does it.
    FirstMatch,
}

/// Picks one left and one right lane line from the peak set.
pub fn select_lanes(
    peaks: &[Peak],
    sectors: &LaneSectors,
    policy: SelectionPolicy,
) -> Result<LanePair, SelectError> {
    let pick = |sector: &Sector, side: LaneSide| -> Result<LaneLine, SelectError> {
        let mut candidates = peaks.iter().filter(|p| sector.contains(p.theta_idx));
        let best = match policy {
            SelectionPolicy::FirstMatch => candidates.next(),
            SelectionPolicy::BestVote => {
                let mut best: Option<&Peak> = None;
                for peak in candidates {
                    let better = match best {
                        None => true,
                        Some(current) => {
                            peak.votes > current.votes
                                || (peak.votes == current.votes
                                    && peak.theta_idx.abs_diff(sector.target)
                                        < current.theta_idx.abs_diff(sector.target))
                        }
                    };
                    if better {
                        best = Some(peak);
                    }
                }
                best
            }
        };
        best.map(|&p| p.into()).ok_or(SelectError::SectorEmpty { side })
    };

    Ok(LanePair {
        left: pick(&sectors.left, LaneSide::Left)?,
        right: pick(&sectors.right, LaneSide::Right)?,
    })
}

/// Computes the raw Q10 steering quantity for a selected lane pair.
///
/// Each line is intersected with the image bottom (`y = 0` there, so the
/// numerator carries the `center_y * sin(theta)` term), the lateral offset is
/// the negated midpoint of the two intersections, and the angle error is the
/// mean theta against 90 degrees:
///
/// ```plain
/// steering_q = (offset * OFFSET_Q + angle_error * ANGLE_Q) >> 10
/// ```
///
/// All shifts are arithmetic and the division truncates toward zero.
pub fn steering_q(geom: &Geometry, lanes: &LanePair) -> Result<i32, SelectError> {
    let cos_l = COS_TABLE[lanes.left.theta_idx] as i32;
    let cos_r = COS_TABLE[lanes.right.theta_idx] as i32;
    let sin_l = SIN_TABLE[lanes.left.theta_idx] as i32;
    let sin_r = SIN_TABLE[lanes.right.theta_idx] as i32;

    if cos_l == 0 {
        return Err(SelectError::SingularCosine {
            theta_idx: lanes.left.theta_idx as u16,
        });
    }
    if cos_r == 0 {
        return Err(SelectError::SingularCosine {
            theta_idx: lanes.right.theta_idx as u16,
        });
    }

    let half_rhos = geom.rhos as i32 >> 1;
    let left_rho_q = quantize_i((lanes.left.rho_idx - half_rhos) << geom.rho_res_log);
    let right_rho_q = quantize_i((lanes.right.rho_idx - half_rhos) << geom.rho_res_log);

    let numerator_l_q = left_rho_q + q_mul(quantize_i(geom.center_y()), sin_l);
    let numerator_r_q = right_rho_q + q_mul(quantize_i(geom.center_y()), sin_r);

    let left_x = signed_trunc_div(numerator_l_q, cos_l);
    let right_x = signed_trunc_div(numerator_r_q, cos_r);

    let lane_center = (left_x + right_x) >> 1;
    let offset = -lane_center;
    let angle_error = ((lanes.left.theta_idx + lanes.right.theta_idx) as i32 >> 1) - 90;

    Ok((offset * OFFSET_Q + angle_error * ANGLE_Q) >> BITS)
}

/// Narrows a steering quantity to the 10-bit output bus. Negative values
/// appear as two's-complement in the low 10 bits.
pub fn steering_word(steering_q: i32) -> u16 {
    (steering_q & 0x3ff) as u16
}
