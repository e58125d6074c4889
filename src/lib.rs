//! Deterministic CPU-only aesthetic scoring.
//!
//! [`score`] reduces encoded image bytes to a single value in `[0, 100]`
//! from four sub-metrics (colorfulness, saturation, contrast, edge
//! density) computed on a fixed 400x400 RGB reference frame. The
//! [`gallery`] module wraps the scorer for topic-grouped image lists.

pub mod gallery;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod report;
pub mod scorer;
pub mod simd;

pub use input::decode::DecodeError;
pub use model::frame::ReferenceFrame;
pub use model::profile::{ProfileError, ScoringProfile};
pub use model::scores::ScoreReport;
pub use scorer::{AestheticScorer, score};
