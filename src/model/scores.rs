use serde::Serialize;

/// Sub-metric breakdown and combined score for one image, all in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreReport {
    pub colorfulness: f64,
    pub saturation: f64,
    pub contrast: f64,
    pub edge_density: f64,
    pub score: f64,
}

impl ScoreReport {
    /// Report used for undecodable input.
    pub const fn zero() -> Self {
        Self {
            colorfulness: 0.0,
            saturation: 0.0,
            contrast: 0.0,
            edge_density: 0.0,
            score: 0.0,
        }
    }

    pub fn metrics(&self) -> [(&'static str, f64); 4] {
        [
            ("colorfulness", self.colorfulness),
            ("saturation", self.saturation),
            ("contrast", self.contrast),
            ("edge_density", self.edge_density),
        ]
    }
}

/// Clamp into `[0, 100]`; NaN maps to 0.
pub fn clip100(x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        0.0
    } else if x > 100.0 {
        100.0
    } else {
        x
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/scores.rs"]
mod tests;
