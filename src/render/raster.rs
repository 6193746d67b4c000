use super::{Render, effective_border};
use crate::models::QrCode;
use image::{GrayImage, Luma};

/// Raster renderer producing a grayscale image buffer.
///
/// Each module becomes a `box_size`-pixel square; the quiet zone is
/// filled with the background color.
#[derive(Debug, Clone)]
pub struct ImageRenderer {
    box_size: u32,
    border: Option<u32>,
    fill: u8,
    background: u8,
}

impl ImageRenderer {
    /// Renderer with the given pixels-per-module scale
    pub fn new(box_size: u32) -> Self {
        Self {
            box_size: box_size.max(1),
            border: None,
            fill: 0,
            background: 255,
        }
    }

    /// Override the quiet-zone width (still clamped to the standard
    /// minimum of 4)
    pub fn border(mut self, border: u32) -> Self {
        self.border = Some(border);
        self
    }

    /// Set dark-module and background luma values
    pub fn colors(mut self, fill: u8, background: u8) -> Self {
        self.fill = fill;
        self.background = background;
        self
    }
}

impl Default for ImageRenderer {
    fn default() -> Self {
        Self::new(8)
    }
}

impl Render for ImageRenderer {
    type Output = GrayImage;

    fn render(&self, qr: &QrCode) -> GrayImage {
        let border = effective_border(qr, self.border) as i32;
        let modules = qr.size() as u32 + 2 * border as u32;
        let pixels = modules * self.box_size;
        let mut img = GrayImage::new(pixels, pixels);

        for (px, py, pixel) in img.enumerate_pixels_mut() {
            let x = (px / self.box_size) as i32 - border;
            let y = (py / self.box_size) as i32 - border;
            *pixel = if qr.module(x, y) {
                Luma([self.fill])
            } else {
                Luma([self.background])
            };
        }
        img
    }
}
