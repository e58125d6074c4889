use crate::model::frame::ReferenceFrame;
use crate::model::profile::ScoringProfile;
use crate::model::scores::clip100;
use crate::simd::mean_std_f32;

/// Opponent channel planes: `rg = |R - G|`, `yb = |(R + G)/2 - B|`.
pub fn opponent_planes(frame: &ReferenceFrame) -> (Vec<f32>, Vec<f32>) {
    let n = frame.pixel_count();
    let mut rg = Vec::with_capacity(n);
    let mut yb = Vec::with_capacity(n);
    for [r, g, b] in frame.pixels() {
        let (r, g, b) = (r as f32, g as f32, b as f32);
        rg.push((r - g).abs());
        yb.push((0.5 * (r + g) - b).abs());
    }
    (rg, yb)
}

/// Hasler–Süsstrunk style colorfulness before normalization.
pub fn raw_colorfulness(frame: &ReferenceFrame, mean_weight: f64) -> f64 {
    let (rg, yb) = opponent_planes(frame);
    let (mean_rg, std_rg) = mean_std_f32(&rg);
    let (mean_yb, std_yb) = mean_std_f32(&yb);
    (std_rg * std_rg + std_yb * std_yb).sqrt()
        + mean_weight * (mean_rg * mean_rg + mean_yb * mean_yb).sqrt()
}

pub fn colorfulness_score(frame: &ReferenceFrame, profile: &ScoringProfile) -> f64 {
    let raw = raw_colorfulness(frame, profile.colorfulness_mean_weight);
    clip100(raw / profile.colorfulness_scale * 100.0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/colorfulness.rs"]
mod tests;
