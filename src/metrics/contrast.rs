use crate::model::frame::ReferenceFrame;
use crate::model::profile::ScoringProfile;
use crate::model::scores::clip100;
use crate::simd::mean_std_f32;

/// Population std of luma, scaled so that `contrast_scale` maps to 100.
pub fn contrast_score(frame: &ReferenceFrame, profile: &ScoringProfile) -> f64 {
    let luma: Vec<f32> = frame.luma().iter().map(|&v| f32::from(v)).collect();
    let (_, std) = mean_std_f32(&luma);
    clip100(std / profile.contrast_scale * 100.0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/contrast.rs"]
mod tests;
