use super::{Render, effective_border};
use crate::models::QrCode;

/// Terminal renderer using doubled block characters, so modules come out
/// roughly square in a monospace font.
#[derive(Debug, Clone, Default)]
pub struct AsciiRenderer {
    border: Option<u32>,
    invert: bool,
}

impl AsciiRenderer {
    /// Renderer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the quiet-zone width (still clamped to the standard
    /// minimum of 4)
    pub fn border(mut self, border: u32) -> Self {
        self.border = Some(border);
        self
    }

    /// Swap dark and light output, for dark-background terminals
    pub fn inverted(mut self) -> Self {
        self.invert = true;
        self
    }
}

impl Render for AsciiRenderer {
    type Output = String;

    fn render(&self, qr: &QrCode) -> String {
        let border = effective_border(qr, self.border) as i32;
        let size = qr.size() as i32;
        let mut out = String::new();
        for y in -border..size + border {
            for x in -border..size + border {
                let dark = qr.module(x, y) != self.invert;
                out.push_str(if dark { "██" } else { "  " });
            }
            out.push('\n');
        }
        out
    }
}
