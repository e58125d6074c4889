use crate::model::frame::ReferenceFrame;
use crate::model::scores::clip100;
use crate::simd::mean_f32;

pub fn saturation_score(frame: &ReferenceFrame) -> f64 {
    let plane: Vec<f32> = frame.saturation().into_iter().map(f32::from).collect();
    clip100(mean_f32(&plane) / 255.0 * 100.0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/saturation.rs"]
mod tests;
