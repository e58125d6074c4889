use super::*;
use std::io::Write;

#[test]
fn test_file_fetcher_paths_and_scheme() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("look.png");
    std::fs::File::create(&path)
        .unwrap()
        .write_all(b"bytes")
        .unwrap();

    let fetcher = FileFetcher::default();
    assert_eq!(fetcher.fetch(&path.display().to_string()).unwrap(), b"bytes");
    assert_eq!(
        fetcher
            .fetch(&format!("file://{}", path.display()))
            .unwrap(),
        b"bytes"
    );

    let relative = FileFetcher {
        base_dir: Some(dir.path().to_path_buf()),
    };
    assert_eq!(relative.fetch("look.png").unwrap(), b"bytes");
}

#[test]
fn test_file_fetcher_errors() {
    let dir = tempfile::tempdir().unwrap();
    let empty = dir.path().join("empty.jpg");
    std::fs::File::create(&empty).unwrap();

    let fetcher = FileFetcher::default();
    assert!(matches!(
        fetcher.fetch("https://example.com/a.jpg"),
        Err(FetchError::UnsupportedScheme(s)) if s == "https"
    ));
    assert!(matches!(
        fetcher.fetch(&empty.display().to_string()),
        Err(FetchError::Empty(_))
    ));
    assert!(matches!(
        fetcher.fetch(&dir.path().join("nope.jpg").display().to_string()),
        Err(FetchError::Input(_))
    ));
}
