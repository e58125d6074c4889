use std::cmp::Ordering;
use std::sync::Arc;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GalleryItem {
    pub topic: String,
    pub url: String,
    #[serde(skip)]
    pub bytes: Arc<[u8]>,
    pub score: Option<f64>,
}

/// Highest score first, unscored items last; ties keep their fetch order.
pub fn rank_items(items: &mut [GalleryItem]) {
    items.sort_by(|a, b| match (a.score, b.score) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
#[path = "../../tests/src_inline/gallery/rank.rs"]
mod tests;
