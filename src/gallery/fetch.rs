use std::path::{Path, PathBuf};

use crate::input::{InputError, load_bytes};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
    #[error("empty response from {0}")]
    Empty(String),
    #[error(transparent)]
    Input(#[from] InputError),
}

/// Returns raw image bytes for a URL. Implementations own any retry policy.
pub trait ImageFetcher: Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Reads plain paths and `file://` URLs from the local file system.
#[derive(Debug, Clone, Default)]
pub struct FileFetcher {
    pub base_dir: Option<PathBuf>,
}

impl FileFetcher {
    fn resolve(&self, url: &str) -> Result<PathBuf, FetchError> {
        let raw = match url.split_once("://") {
            Some(("file", rest)) => rest,
            Some((scheme, _)) => return Err(FetchError::UnsupportedScheme(scheme.to_string())),
            None => url,
        };
        let path = Path::new(raw);
        Ok(match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        })
    }
}

impl ImageFetcher for FileFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let path = self.resolve(url)?;
        let bytes = load_bytes(&path)?;
        if bytes.is_empty() {
            return Err(FetchError::Empty(url.to_string()));
        }
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/gallery/fetch.rs"]
mod tests;
