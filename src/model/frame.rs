use image::RgbImage;

/// Decoded image normalized to a fixed square RGB8 resolution.
///
/// Built once per scoring call and only ever read afterwards; every
/// sub-metric derives its own plane from it.
#[derive(Debug, Clone)]
pub struct ReferenceFrame {
    rgb: RgbImage,
    luma: Vec<u8>,
}

impl ReferenceFrame {
    pub(crate) fn new(rgb: RgbImage) -> Self {
        debug_assert_eq!(rgb.width(), rgb.height());
        let luma = rgb
            .as_raw()
            .chunks_exact(3)
            .map(|p| luma_601(p[0], p[1], p[2]))
            .collect();
        Self { rgb, luma }
    }

    pub fn side(&self) -> u32 {
        self.rgb.width()
    }

    pub fn pixel_count(&self) -> usize {
        self.rgb.width() as usize * self.rgb.height() as usize
    }

    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.rgb.as_raw().chunks_exact(3).map(|p| [p[0], p[1], p[2]])
    }

    pub fn as_rgb(&self) -> &RgbImage {
        &self.rgb
    }

    /// 8-bit luma plane, row-major. Shared by contrast and edge density.
    pub fn luma(&self) -> &[u8] {
        &self.luma
    }

    /// 8-bit HSV saturation plane, row-major.
    pub fn saturation(&self) -> Vec<u8> {
        self.pixels().map(|[r, g, b]| hsv_saturation(r, g, b)).collect()
    }
}

/// ITU-R 601-2 luma in 16-bit fixed point, rounded.
#[inline]
pub fn luma_601(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

#[inline]
pub fn hsv_saturation(r: u8, g: u8, b: u8) -> u8 {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max == min {
        return 0;
    }
    let s = (max - min) as f32 / max as f32;
    (s * 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/frame.rs"]
mod tests;
