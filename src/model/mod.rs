pub mod frame;
pub mod profile;
pub mod scores;
