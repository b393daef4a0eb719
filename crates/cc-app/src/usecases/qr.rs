use std::sync::Arc;

use cc_core::error::ShareResult;
use cc_core::ports::{QrEncoderPort, QrImage};

/// Renders text into a QR code. Pure: same input, same output.
pub struct GenerateQr {
    encoder: Arc<dyn QrEncoderPort>,
    module_px: u32,
}

impl GenerateQr {
    pub fn from_ports(encoder: Arc<dyn QrEncoderPort>, module_px: u32) -> Self {
        Self {
            encoder,
            module_px: module_px.max(1),
        }
    }

    pub fn execute(&self, text: &str) -> ShareResult<QrImage> {
        let matrix = self.encoder.encode(text)?;
        let svg = matrix.to_svg(self.module_px);
        Ok(QrImage {
            matrix,
            module_px: self.module_px,
            svg,
        })
    }

    pub fn export_png(&self, image: &QrImage) -> anyhow::Result<Vec<u8>> {
        self.encoder.export_png(image)
    }
}
