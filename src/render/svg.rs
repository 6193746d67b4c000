use super::{Render, effective_border};
use crate::models::QrCode;
use std::fmt::Write;

/// How dark modules are emitted into the SVG document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SvgStyle {
    /// One `<path>` element containing every module square
    Path,
    /// One `<rect>` element per dark module
    Rects,
}

/// Vector renderer producing an SVG string.
///
/// The viewBox is in module units, so the output scales losslessly; no
/// pixel dimensions are baked in.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    style: SvgStyle,
    border: Option<u32>,
    fill: String,
    background: String,
}

impl SvgRenderer {
    /// Single-path output, the compact default
    pub fn path() -> Self {
        Self {
            style: SvgStyle::Path,
            border: None,
            fill: "#000000".into(),
            background: "#FFFFFF".into(),
        }
    }

    /// Rect-per-module output, easier to post-process per module
    pub fn rects() -> Self {
        Self {
            style: SvgStyle::Rects,
            ..Self::path()
        }
    }

    /// Override the quiet-zone width (still clamped to the standard
    /// minimum of 4)
    pub fn border(mut self, border: u32) -> Self {
        self.border = Some(border);
        self
    }

    /// Set fill and background colors as SVG color strings
    pub fn colors(mut self, fill: &str, background: &str) -> Self {
        self.fill = fill.into();
        self.background = background.into();
        self
    }
}

impl Render for SvgRenderer {
    type Output = String;

    fn render(&self, qr: &QrCode) -> String {
        let border = effective_border(qr, self.border) as i32;
        let dimension = qr.size() as i32 + 2 * border;
        let mut out = String::new();
        out += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
        let _ = writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 {0} {0}\" stroke=\"none\">",
            dimension
        );
        let _ = writeln!(
            out,
            "\t<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
            self.background
        );

        match self.style {
            SvgStyle::Path => {
                out += "\t<path d=\"";
                let mut first = true;
                for y in 0..qr.size() as i32 {
                    for x in 0..qr.size() as i32 {
                        if qr.module(x, y) {
                            if !first {
                                out += " ";
                            }
                            first = false;
                            let _ = write!(out, "M{},{}h1v1h-1z", x + border, y + border);
                        }
                    }
                }
                let _ = writeln!(out, "\" fill=\"{}\"/>", self.fill);
            }
            SvgStyle::Rects => {
                for y in 0..qr.size() as i32 {
                    for x in 0..qr.size() as i32 {
                        if qr.module(x, y) {
                            let _ = writeln!(
                                out,
                                "\t<rect x=\"{}\" y=\"{}\" width=\"1\" height=\"1\" fill=\"{}\"/>",
                                x + border,
                                y + border,
                                self.fill
                            );
                        }
                    }
                }
            }
        }
        out += "</svg>\n";
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::qr_encoder::{EncodeOptions, QrEncoder};

    fn build(text: &str) -> QrCode {
        let mut enc = QrEncoder::new(EncodeOptions::default()).unwrap();
        enc.add_text(text);
        enc.build().unwrap()
    }

    #[test]
    fn test_path_viewbox() {
        let svg = SvgRenderer::path().render(&build("SVG"));
        assert!(svg.contains("viewBox=\"0 0 29 29\""));
        assert!(svg.contains("<path d=\"M"));
    }

    #[test]
    fn test_rects_one_per_dark_module() {
        let qr = build("SVG");
        let svg = SvgRenderer::rects().render(&qr);
        let dark: usize = (0..qr.size() as i32)
            .flat_map(|y| (0..qr.size() as i32).map(move |x| (x, y)))
            .filter(|&(x, y)| qr.module(x, y))
            .count();
        // One background rect plus one per dark module
        assert_eq!(svg.matches("<rect").count(), dark + 1);
    }

    #[test]
    fn test_custom_colors() {
        let svg = SvgRenderer::path().colors("#123456", "#ABCDEF").render(&build("X"));
        assert!(svg.contains("fill=\"#123456\""));
        assert!(svg.contains("fill=\"#ABCDEF\""));
    }
}
