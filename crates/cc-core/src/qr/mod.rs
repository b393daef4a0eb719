//! QR module matrix and its vector form.
//!
//! The matrix is the single source for both the SVG and the raster export,
//! so the two always show the same module pattern.

use std::fmt::Write;

/// Light modules around the symbol required by scanners.
pub const QUIET_ZONE: usize = 4;

/// Default edge length of one module in pixels.
pub const DEFAULT_MODULE_PX: u32 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    width: usize,
    dark: Vec<bool>,
}

impl QrMatrix {
    /// `dark` is row-major and must hold `width * width` modules.
    pub fn new(width: usize, dark: Vec<bool>) -> Option<Self> {
        (width > 0 && dark.len() == width * width).then_some(Self { width, dark })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.dark[y * self.width + x]
    }

    /// Side length in modules, quiet zone included.
    pub fn side_modules(&self) -> usize {
        self.width + 2 * QUIET_ZONE
    }

    /// Native pixel side of the rendered code.
    pub fn side_px(&self, module_px: u32) -> u32 {
        self.side_modules() as u32 * module_px
    }

    /// Whether the pixel at (`px`, `py`) of the native raster is dark.
    pub fn is_dark_px(&self, px: u32, py: u32, module_px: u32) -> bool {
        let mx = (px / module_px.max(1)) as usize;
        let my = (py / module_px.max(1)) as usize;
        if mx < QUIET_ZONE || my < QUIET_ZONE {
            return false;
        }
        self.is_dark(mx - QUIET_ZONE, my - QUIET_ZONE)
    }

    /// Deterministic SVG: one `<rect>` per dark module, row-major.
    pub fn to_svg(&self, module_px: u32) -> String {
        let side = self.side_px(module_px);
        let mut svg = String::with_capacity(64 + self.dark.len() * 16);
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{side}" height="{side}" viewBox="0 0 {m} {m}" shape-rendering="crispEdges">"#,
            m = self.side_modules()
        );
        let _ = write!(
            svg,
            r##"<rect width="{m}" height="{m}" fill="#ffffff"/>"##,
            m = self.side_modules()
        );
        for y in 0..self.width {
            for x in 0..self.width {
                if self.is_dark(x, y) {
                    let _ = write!(
                        svg,
                        r##"<rect x="{}" y="{}" width="1" height="1" fill="#000000"/>"##,
                        x + QUIET_ZONE,
                        y + QUIET_ZONE
                    );
                }
            }
        }
        svg.push_str("</svg>");
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(width: usize) -> QrMatrix {
        let dark = (0..width * width).map(|i| (i / width + i % width) % 2 == 0).collect();
        QrMatrix::new(width, dark).unwrap()
    }

    #[test]
    fn rejects_mismatched_module_count() {
        assert!(QrMatrix::new(3, vec![true; 8]).is_none());
        assert!(QrMatrix::new(0, vec![]).is_none());
    }

    #[test]
    fn svg_is_identical_across_renders() {
        let matrix = checker(21);
        assert_eq!(matrix.to_svg(8), matrix.to_svg(8));
    }

    #[test]
    fn svg_declares_native_dimensions() {
        let matrix = checker(21);
        let svg = matrix.to_svg(4);
        assert!(svg.contains(r#"width="116""#));
        assert!(svg.contains(r#"viewBox="0 0 29 29""#));
    }

    #[test]
    fn raster_lookup_honours_quiet_zone() {
        let matrix = checker(3);
        let px = DEFAULT_MODULE_PX;
        assert!(!matrix.is_dark_px(0, 0, px));
        let origin = QUIET_ZONE as u32 * px;
        assert!(matrix.is_dark_px(origin, origin, px));
        assert!(!matrix.is_dark_px(origin + px, origin, px));
        assert_eq!(matrix.side_px(px), 11 * px);
    }
}
