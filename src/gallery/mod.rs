//! Topic gallery glue around the scorer: builds URLs per topic, fetches
//! and caches the bytes, optionally scores and ranks them.

use std::sync::Arc;

use rayon::prelude::*;

use crate::scorer::AestheticScorer;

pub mod cache;
pub mod fetch;
pub mod rank;
pub mod source;
pub mod topics;

use cache::{CacheKey, FetchedImage, GalleryCache};
use fetch::ImageFetcher;
use rank::{GalleryItem, rank_items};
use source::TopicSource;
use topics::LIMIT_RANGE;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GalleryError {
    #[error("limit {0} outside {min}..={max}", min = LIMIT_RANGE.start(), max = LIMIT_RANGE.end())]
    LimitOutOfRange(usize),
    #[error("no topics selected")]
    NoTopics,
}

pub fn check_limit(limit: usize) -> Result<usize, GalleryError> {
    if LIMIT_RANGE.contains(&limit) {
        Ok(limit)
    } else {
        Err(GalleryError::LimitOutOfRange(limit))
    }
}

#[derive(Debug, Clone)]
pub struct TopicSection {
    pub topic: String,
    pub items: Vec<GalleryItem>,
}

pub struct TopicGallery<S, F> {
    source: S,
    fetcher: F,
    scorer: AestheticScorer,
    cache: GalleryCache,
}

impl<S: TopicSource, F: ImageFetcher> TopicGallery<S, F> {
    pub fn new(source: S, fetcher: F, scorer: AestheticScorer) -> Self {
        Self {
            source,
            fetcher,
            scorer,
            cache: GalleryCache::default(),
        }
    }

    pub fn cache(&self) -> &GalleryCache {
        &self.cache
    }

    /// Forget every cached fetch so the next load hits the fetcher again.
    pub fn refresh(&mut self) {
        tracing::info!(entries = self.cache.len(), "gallery cache cleared");
        self.cache.clear();
    }

    /// Items for one topic. Scored and ranked when `scoring` is set,
    /// otherwise in fetch order with no score.
    pub fn load(
        &mut self,
        topic: &str,
        limit: usize,
        scoring: bool,
    ) -> Result<Vec<GalleryItem>, GalleryError> {
        let limit = check_limit(limit)?;
        let key = CacheKey::new(topic, limit);
        if self.cache.get(&key).is_none() {
            let fetched = self.fetch_topic(topic, limit);
            self.cache.insert(key.clone(), fetched);
        } else {
            tracing::debug!(topic, limit, "gallery cache hit");
        }
        let images = self.cache.get(&key).unwrap_or(&[]);

        let scorer = &self.scorer;
        let mut items: Vec<GalleryItem> = images
            .par_iter()
            .map(|img| GalleryItem {
                topic: topic.to_string(),
                url: img.url.clone(),
                bytes: Arc::clone(&img.bytes),
                score: scoring.then(|| scorer.score(&img.bytes)),
            })
            .collect();
        if scoring {
            rank_items(&mut items);
        }
        Ok(items)
    }

    pub fn load_all(
        &mut self,
        topics: &[String],
        limit: usize,
        scoring: bool,
    ) -> Result<Vec<TopicSection>, GalleryError> {
        if topics.is_empty() {
            return Err(GalleryError::NoTopics);
        }
        let mut out = Vec::with_capacity(topics.len());
        for topic in topics {
            let items = self.load(topic, limit, scoring)?;
            out.push(TopicSection {
                topic: topic.clone(),
                items,
            });
        }
        Ok(out)
    }

    fn fetch_topic(&self, topic: &str, limit: usize) -> Vec<FetchedImage> {
        let urls = self.source.urls(topic, limit);
        let fetched: Vec<FetchedImage> = urls
            .into_iter()
            .filter_map(|url| match self.fetcher.fetch(&url) {
                Ok(bytes) => Some(FetchedImage {
                    url,
                    bytes: Arc::from(bytes),
                }),
                Err(err) => {
                    tracing::warn!(topic, url = %url, error = %err, "fetch failed, skipping");
                    None
                }
            })
            .collect();
        tracing::info!(topic, limit, fetched = fetched.len(), "topic fetched");
        fetched
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/gallery/mod.rs"]
mod tests;
