//! Whole-frame composition of the detection stages.

use crate::lane::{self, LanePair, SelectError, SelectionPolicy};
use crate::peaks::{self, Peak};
use crate::{filter, hough, Geometry, LaneSectors};
use alloc::vec;
use alloc::vec::Vec;
use snafu::{ensure, Snafu};

#[derive(Debug, Snafu, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    #[snafu(display("frame buffer holds {actual} bytes, geometry needs {expected}"))]
    SizeMismatch { expected: usize, actual: usize },
}

/// Everything that parameterizes one deployment of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    pub geometry: Geometry,
    pub low_threshold: u8,
    pub high_threshold: u8,
    /// Last frame row kept by the region-of-interest mask.
    pub roi_split_row: usize,
    pub sectors: LaneSectors,
    pub top_n: usize,
    pub policy: SelectionPolicy,
}

impl PipelineConfig {
    /// The hardware-bound 160x120 profile. Authoritative for bit-for-bit
    /// comparison against the FPGA.
    pub const fn hardware() -> Self {
        Self {
            geometry: Geometry::LOW_RES,
            low_threshold: 60,
            high_threshold: 100,
            roi_split_row: Geometry::LOW_RES.height / 3,
            sectors: LaneSectors::DEFAULT,
            top_n: 16,
            policy: SelectionPolicy::BestVote,
        }
    }

    /// The 720x540 profile matching the floating reference deployment.
    pub const fn high_res() -> Self {
        Self {
            geometry: Geometry::HIGH_RES,
            low_threshold: 60,
            high_threshold: 100,
            roi_split_row: Geometry::HIGH_RES.height / 2,
            sectors: LaneSectors::DEFAULT,
            top_n: 32,
            policy: SelectionPolicy::FirstMatch,
        }
    }
}

/// All buffers and results of one analyzed frame.
///
/// Intermediate buffers are retained so a harness can rasterize each stage;
/// none of them are shared across frames.
#[derive(Debug)]
pub struct FrameAnalysis {
    pub grayscale: Vec<u8>,
    pub blurred: Vec<u8>,
    pub edges: Vec<u8>,
    pub nms: Vec<u8>,
    pub thresholded: Vec<u8>,
    pub roi: Vec<u8>,
    pub accumulator: Vec<u16>,
    pub dropped_votes: u32,
    pub peaks: Vec<Peak>,
    pub lanes: Result<LanePair, SelectError>,
    /// Raw Q10 steering quantity; zero whenever `lanes` is an error.
    pub steering_q: i32,
    /// The 10-bit steering word seen by the controller.
    pub steering: u16,
}

/// Runs the full pipeline over one packed B,G,R frame.
///
/// The only error is a frame buffer whose size disagrees with the configured
/// geometry; a lane-selection failure is reported inside the analysis with
/// the steering word forced to zero.
pub fn analyze_frame(config: &PipelineConfig, bgr: &[u8]) -> Result<FrameAnalysis, FrameError> {
    let geom = &config.geometry;
    let pixels = geom.pixel_count();
    ensure!(
        bgr.len() == pixels * 3,
        SizeMismatchSnafu {
            expected: pixels * 3,
            actual: bgr.len(),
        }
    );

    let mut grayscale = vec![0u8; pixels];
    let mut blurred = vec![0u8; pixels];
    let mut edges = vec![0u8; pixels];
    let mut nms = vec![0u8; pixels];
    let mut thresholded = vec![0u8; pixels];
    let mut roi = vec![0u8; pixels];

    filter::grayscale(bgr, &mut grayscale);
    filter::gaussian_blur(&grayscale, geom.width, geom.height, &mut blurred);
    filter::sobel(&blurred, geom.width, geom.height, &mut edges);
    filter::suppress_non_maxima(&edges, geom.width, geom.height, &mut nms);
    filter::hysteresis(
        &nms,
        geom.width,
        geom.height,
        config.low_threshold,
        config.high_threshold,
        &mut thresholded,
    );
    filter::roi_mask(
        &thresholded,
        geom.width,
        geom.height,
        config.roi_split_row,
        &mut roi,
    );

    let mut accumulator = vec![0u16; geom.accumulator_len()];
    let dropped_votes = hough::accumulate(geom, &config.sectors, &roi, &mut accumulator);

    let mut peaks = vec![Peak::default(); config.top_n];
    peaks::extract_top(&accumulator, geom.rhos, &mut peaks);

    let lanes = lane::select_lanes(&peaks, &config.sectors, config.policy)
        .and_then(|pair| lane::steering_q(geom, &pair).map(|q| (pair, q)));
    let (lanes, steering_q) = match lanes {
        Ok((pair, q)) => (Ok(pair), q),
        Err(error) => {
            tracing::debug!(%error, "steering forced to zero");
            (Err(error), 0)
        }
    };

    Ok(FrameAnalysis {
        grayscale,
        blurred,
        edges,
        nms,
        thresholded,
        roi,
        accumulator,
        dropped_votes,
        peaks,
        lanes,
        steering_q,
        steering: lane::steering_word(steering_q),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_misshapen_frames() {
        let config = PipelineConfig::hardware();
        let bgr = vec![0u8; 100];
        let error = analyze_frame(&config, &bgr).unwrap_err();
        assert_eq!(
            error,
            FrameError::SizeMismatch {
                expected: 160 * 120 * 3,
                actual: 100,
            }
        );
    }

    #[test]
    fn profiles_differ_where_documented() {
        let hw = PipelineConfig::hardware();
        let hi = PipelineConfig::high_res();
        assert_eq!(hw.roi_split_row, 40);
        assert_eq!(hi.roi_split_row, 270);
        assert_eq!(hw.top_n, 16);
        assert_eq!(hi.top_n, 32);
        assert_eq!(hw.policy, SelectionPolicy::BestVote);
        assert_eq!(hi.policy, SelectionPolicy::FirstMatch);
    }
}
