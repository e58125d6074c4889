use serde::Serialize;

pub const REFERENCE_SIDE: u32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricWeights {
    pub colorfulness: f64,
    pub saturation: f64,
    pub contrast: f64,
    pub edge_density: f64,
}

/// Calibration for the scorer. `default_v1` reproduces the reference scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringProfile {
    pub reference_side: u32,
    pub weights: MetricWeights,
    pub colorfulness_scale: f64,
    pub colorfulness_mean_weight: f64,
    pub contrast_scale: f64,
    pub edge_threshold: f32,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("reference side must be at least 3 pixels, got {0}")]
    ReferenceSide(u32),
    #[error("weight `{name}` must be finite and non-negative, got {value}")]
    Weight { name: &'static str, value: f64 },
    #[error("scale `{name}` must be finite and positive, got {value}")]
    Scale { name: &'static str, value: f64 },
    #[error("edge threshold must lie in [0, 255], got {0}")]
    EdgeThreshold(f32),
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            reference_side: REFERENCE_SIDE,
            weights: MetricWeights {
                colorfulness: 0.35,
                saturation: 0.25,
                contrast: 0.25,
                edge_density: 0.15,
            },
            colorfulness_scale: 60.0,
            colorfulness_mean_weight: 0.3,
            contrast_scale: 80.0,
            edge_threshold: 30.0,
        }
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.reference_side < 3 {
            return Err(ProfileError::ReferenceSide(self.reference_side));
        }
        let w = &self.weights;
        for (name, value) in [
            ("colorfulness", w.colorfulness),
            ("saturation", w.saturation),
            ("contrast", w.contrast),
            ("edge_density", w.edge_density),
            ("colorfulness_mean_weight", self.colorfulness_mean_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ProfileError::Weight { name, value });
            }
        }
        for (name, value) in [
            ("colorfulness_scale", self.colorfulness_scale),
            ("contrast_scale", self.contrast_scale),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ProfileError::Scale { name, value });
            }
        }
        if !(0.0..=255.0).contains(&self.edge_threshold) {
            return Err(ProfileError::EdgeThreshold(self.edge_threshold));
        }
        Ok(())
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/profile.rs"]
mod tests;
