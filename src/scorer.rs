use crate::input::decode::{DecodeError, decode_reference_frame};
use crate::metrics::{colorfulness_score, contrast_score, edge_density_score, saturation_score};
use crate::model::frame::ReferenceFrame;
use crate::model::profile::{ProfileError, ScoringProfile};
use crate::model::scores::{ScoreReport, clip100};

/// Deterministic CPU-only aesthetic scorer.
///
/// Stateless apart from its immutable calibration profile, so one instance
/// can be shared across threads. Scoring never fails: undecodable input
/// scores exactly `0.0`.
#[derive(Debug, Clone, Default)]
pub struct AestheticScorer {
    profile: ScoringProfile,
}

impl AestheticScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: ScoringProfile) -> Result<Self, ProfileError> {
        profile.validate()?;
        Ok(Self { profile })
    }

    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    /// Combined score in `[0, 100]`; `0.0` when the bytes cannot be decoded.
    pub fn score(&self, bytes: &[u8]) -> f64 {
        match self.evaluate(bytes) {
            Ok(report) => report.score,
            Err(err) => {
                tracing::debug!(bytes = bytes.len(), error = %err, "image not scored");
                0.0
            }
        }
    }

    /// Full breakdown, surfacing the decode failure instead of folding it to zero.
    pub fn evaluate(&self, bytes: &[u8]) -> Result<ScoreReport, DecodeError> {
        let frame = decode_reference_frame(bytes, self.profile.reference_side)?;
        Ok(self.score_frame(&frame))
    }

    pub fn score_frame(&self, frame: &ReferenceFrame) -> ScoreReport {
        let p = &self.profile;
        let colorfulness = colorfulness_score(frame, p);
        let saturation = saturation_score(frame);
        let contrast = contrast_score(frame, p);
        let edge_density = edge_density_score(frame, p);
        let w = &p.weights;
        let score = clip100(
            w.colorfulness * colorfulness
                + w.saturation * saturation
                + w.contrast * contrast
                + w.edge_density * edge_density,
        );
        ScoreReport {
            colorfulness,
            saturation,
            contrast,
            edge_density,
            score,
        }
    }
}

/// Score with the default profile.
pub fn score(bytes: &[u8]) -> f64 {
    AestheticScorer::new().score(bytes)
}

#[cfg(test)]
#[path = "../tests/src_inline/scorer.rs"]
mod tests;
