use std::fs::File;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use memmap2::Mmap;

pub mod decode;

pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "tif", "tiff",
];

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("missing input: {0}")]
    MissingInput(String),
}

impl InputError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        InputError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Raw bytes of an image file. Non-empty files are memory-mapped.
#[derive(Debug)]
pub enum ImageBytes {
    Mapped(Mmap),
    Empty,
}

impl Deref for ImageBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            ImageBytes::Mapped(mmap) => &mmap[..],
            ImageBytes::Empty => &[],
        }
    }
}

pub fn load_bytes(path: &Path) -> Result<ImageBytes, InputError> {
    let file = File::open(path).map_err(|e| InputError::io(path, e))?;
    let len = file.metadata().map_err(|e| InputError::io(path, e))?.len();
    if len == 0 {
        return Ok(ImageBytes::Empty);
    }
    let mmap = unsafe { Mmap::map(&file) }.map_err(|e| InputError::io(path, e))?;
    Ok(ImageBytes::Mapped(mmap))
}

pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let lower = e.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

/// Image files directly inside `dir`, sorted by path.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>, InputError> {
    let mut out = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| InputError::io(dir, e))? {
        let entry = entry.map_err(|e| InputError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() && has_image_extension(&path) {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

/// Expand CLI inputs: files are kept as given, directories contribute their images.
pub fn discover_images(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, InputError> {
    if inputs.is_empty() {
        return Err(InputError::MissingInput("no input paths given".to_string()));
    }
    let mut out = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let found = list_images(input)?;
            tracing::info!(dir = %input.display(), images = found.len(), "discovered images");
            out.extend(found);
        } else if input.is_file() {
            out.push(input.clone());
        } else {
            return Err(InputError::MissingInput(input.display().to_string()));
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/mod.rs"]
mod tests;
