use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub topic: String,
    pub limit: usize,
}

impl CacheKey {
    pub fn new(topic: &str, limit: usize) -> Self {
        Self {
            topic: topic.to_string(),
            limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchedImage {
    pub url: String,
    pub bytes: Arc<[u8]>,
}

/// Fetch results per (topic, limit). Owned by the gallery; nothing global.
#[derive(Debug, Default)]
pub struct GalleryCache {
    entries: HashMap<CacheKey, Vec<FetchedImage>>,
}

impl GalleryCache {
    pub fn get(&self, key: &CacheKey) -> Option<&[FetchedImage]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn insert(&mut self, key: CacheKey, images: Vec<FetchedImage>) {
        self.entries.insert(key, images);
    }

    pub fn invalidate(&mut self, key: &CacheKey) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Drop everything; the "refresh" action.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/gallery/cache.rs"]
mod tests;
