use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageReader};

use crate::model::frame::ReferenceFrame;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("empty image payload")]
    Empty,
    #[error("unrecognized image format")]
    UnknownFormat,
    #[error("decoded image has zero area ({width}x{height})")]
    ZeroArea { width: u32, height: u32 },
    #[error("image decode failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Decode an encoded raster image and normalize it to a `side`×`side` RGB8 frame.
pub fn decode_reference_frame(bytes: &[u8], side: u32) -> Result<ReferenceFrame, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    if reader.format().is_none() {
        return Err(DecodeError::UnknownFormat);
    }
    let image = reader.decode()?;
    normalize_image(&image, side)
}

/// Drop alpha, convert to RGB8, then resample with a triangle filter.
/// Frames already at the target size are kept pixel-exact.
pub fn normalize_image(image: &DynamicImage, side: u32) -> Result<ReferenceFrame, DecodeError> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(DecodeError::ZeroArea { width, height });
    }
    let rgb = image.to_rgb8();
    let rgb = if width == side && height == side {
        rgb
    } else {
        imageops::resize(&rgb, side, side, FilterType::Triangle)
    };
    Ok(ReferenceFrame::new(rgb))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/decode.rs"]
mod tests;
