use super::*;

#[test]
fn test_featured_urls() {
    let urls = FeaturedSource::default().urls("vintage denim", 3);
    assert_eq!(
        urls,
        vec![
            "https://source.unsplash.com/800x800/?vintage,denim,0",
            "https://source.unsplash.com/800x800/?vintage,denim,1",
            "https://source.unsplash.com/800x800/?vintage,denim,2",
        ]
    );
    assert!(FeaturedSource::default().urls("runway", 0).is_empty());
}

#[test]
fn test_directory_source() {
    let dir = tempfile::tempdir().unwrap();
    let topic_dir = dir.path().join("street_style");
    std::fs::create_dir(&topic_dir).unwrap();
    for name in ["b.jpg", "a.png", "c.png", "skip.txt"] {
        std::fs::File::create(topic_dir.join(name)).unwrap();
    }
    let source = DirectorySource {
        root: dir.path().to_path_buf(),
    };
    let urls = source.urls("Street Style", 2);
    assert_eq!(urls.len(), 2);
    assert!(urls[0].ends_with("a.png"));
    assert!(urls[1].ends_with("b.jpg"));
    assert!(source.urls("missing topic", 5).is_empty());
}

#[test]
fn test_featured_urls_need_http_fetcher() {
    use crate::gallery::fetch::{FetchError, FileFetcher, ImageFetcher};

    let url = &FeaturedSource::default().urls("runway", 1)[0];
    assert!(matches!(
        FileFetcher::default().fetch(url),
        Err(FetchError::UnsupportedScheme(s)) if s == "https"
    ));
}
