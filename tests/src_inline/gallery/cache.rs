use super::*;

fn image(url: &str) -> FetchedImage {
    FetchedImage {
        url: url.to_string(),
        bytes: Arc::from(vec![1u8, 2, 3]),
    }
}

#[test]
fn test_keyed_by_topic_and_limit() {
    let mut cache = GalleryCache::default();
    cache.insert(CacheKey::new("runway", 6), vec![image("a")]);
    assert!(cache.get(&CacheKey::new("runway", 6)).is_some());
    assert!(cache.get(&CacheKey::new("runway", 7)).is_none());
    assert!(cache.get(&CacheKey::new("OOTD", 6)).is_none());
}

#[test]
fn test_invalidate_and_clear() {
    let mut cache = GalleryCache::default();
    cache.insert(CacheKey::new("runway", 6), vec![image("a")]);
    cache.insert(CacheKey::new("OOTD", 6), vec![image("b"), image("c")]);
    assert_eq!(cache.len(), 2);
    assert!(cache.invalidate(&CacheKey::new("runway", 6)));
    assert!(!cache.invalidate(&CacheKey::new("runway", 6)));
    assert_eq!(cache.get(&CacheKey::new("OOTD", 6)).unwrap().len(), 2);
    cache.clear();
    assert!(cache.is_empty());
}
