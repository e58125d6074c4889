use std::ops::RangeInclusive;

pub const FASHION_TOPICS: &[&str] = &[
    "street style",
    "fashion outfit",
    "runway",
    "OOTD",
    "minimalist fashion",
    "vintage denim",
    "boho outfit",
    "athleisure",
    "streetwear",
    "high fashion",
];

pub const LIMIT_RANGE: RangeInclusive<usize> = 3..=12;
pub const DEFAULT_LIMIT: usize = 6;

/// Comma separated keywords; blanks are dropped.
pub fn parse_custom_topics(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Predefined picks first, then custom keywords, in the order given.
pub fn select_topics(predefined: &[&str], custom: &[String]) -> Vec<String> {
    predefined
        .iter()
        .map(|t| t.to_string())
        .chain(custom.iter().cloned())
        .collect()
}

/// Query form of a topic for the featured endpoint: spaces become commas.
pub fn topic_query(topic: &str) -> String {
    topic.replace(' ', ",")
}

/// Lowercase, whitespace collapsed to `_`; used for on-disk topic folders.
pub fn topic_slug(topic: &str) -> String {
    topic
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
#[path = "../../tests/src_inline/gallery/topics.rs"]
mod tests;
