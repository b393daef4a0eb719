use crate::error::ValidationError;
use crate::qr::QrMatrix;

/// A rendered code: the module matrix plus its vector form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrImage {
    pub matrix: QrMatrix,
    pub module_px: u32,
    pub svg: String,
}

impl QrImage {
    pub fn side_px(&self) -> u32 {
        self.matrix.side_px(self.module_px)
    }
}

pub trait QrEncoderPort: Send + Sync {
    fn encode(&self, text: &str) -> Result<QrMatrix, ValidationError>;

    /// Rasterizes at the matrix's native pixel size and encodes as PNG.
    fn export_png(&self, image: &QrImage) -> anyhow::Result<Vec<u8>>;
}
