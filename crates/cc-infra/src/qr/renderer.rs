use std::io::Cursor;

use cc_core::error::ValidationError;
use cc_core::ports::{QrEncoderPort, QrImage};
use cc_core::qr::QrMatrix;
use image::{GrayImage, ImageFormat, Luma};
use qrcode::types::Color;
use qrcode::QrCode;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// QR encoder backed by the `qrcode` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrCodeRenderer;

impl QrCodeRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl QrEncoderPort for QrCodeRenderer {
    fn encode(&self, text: &str) -> Result<QrMatrix, ValidationError> {
        if text.is_empty() {
            return Err(ValidationError::EmptyQrInput);
        }
        let code =
            QrCode::new(text.as_bytes()).map_err(|_| ValidationError::QrCapacityExceeded)?;
        let width = code.width();
        let dark = code
            .to_colors()
            .into_iter()
            .map(|c| c == Color::Dark)
            .collect();
        QrMatrix::new(width, dark).ok_or(ValidationError::QrCapacityExceeded)
    }

    fn export_png(&self, image: &QrImage) -> anyhow::Result<Vec<u8>> {
        let side = image.side_px();
        let module_px = image.module_px;
        // Integer module size, so every module maps to whole pixels.
        let raster = GrayImage::from_fn(side, side, |x, y| {
            if image.matrix.is_dark_px(x, y, module_px) {
                DARK
            } else {
                LIGHT
            }
        });

        let mut out = Cursor::new(Vec::new());
        raster.write_to(&mut out, ImageFormat::Png)?;
        tracing::debug!(side_px = side, bytes = out.get_ref().len(), "qr exported as png");
        Ok(out.into_inner())
    }
}
