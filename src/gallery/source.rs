use std::path::PathBuf;

use crate::gallery::topics::{topic_query, topic_slug};
use crate::input::list_images;

/// Produces candidate image URLs for a topic.
pub trait TopicSource {
    fn urls(&self, topic: &str, limit: usize) -> Vec<String>;
}

/// Public featured endpoint, one seeded URL per slot so repeated
/// requests are more likely to return distinct images.
///
/// These are `https://` URLs: pair this source with a host-supplied HTTP
/// [`ImageFetcher`](crate::gallery::fetch::ImageFetcher). [`FileFetcher`](crate::gallery::fetch::FileFetcher)
/// rejects the scheme.
#[derive(Debug, Clone)]
pub struct FeaturedSource {
    pub base_url: String,
    pub size: (u32, u32),
}

impl Default for FeaturedSource {
    fn default() -> Self {
        Self {
            base_url: "https://source.unsplash.com".to_string(),
            size: (800, 800),
        }
    }
}

impl TopicSource for FeaturedSource {
    fn urls(&self, topic: &str, limit: usize) -> Vec<String> {
        let q = topic_query(topic);
        (0..limit)
            .map(|i| {
                format!(
                    "{}/{}x{}/?{},{}",
                    self.base_url, self.size.0, self.size.1, q, i
                )
            })
            .collect()
    }
}

/// Local folders laid out as `<root>/<topic slug>/*.jpg`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    pub root: PathBuf,
}

impl TopicSource for DirectorySource {
    fn urls(&self, topic: &str, limit: usize) -> Vec<String> {
        let dir = self.root.join(topic_slug(topic));
        match list_images(&dir) {
            Ok(paths) => paths
                .into_iter()
                .take(limit)
                .map(|p| p.display().to_string())
                .collect(),
            Err(err) => {
                tracing::warn!(topic, error = %err, "topic folder unreadable");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/gallery/source.rs"]
mod tests;
