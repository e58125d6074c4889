//! The four independent sub-metrics. Each reads the reference frame and
//! returns a value in `[0, 100]`.

pub mod colorfulness;
pub mod contrast;
pub mod edges;
pub mod saturation;

pub use colorfulness::colorfulness_score;
pub use contrast::contrast_score;
pub use edges::edge_density_score;
pub use saturation::saturation_score;
