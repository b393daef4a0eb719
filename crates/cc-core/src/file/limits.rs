use crate::error::ValidationError;

/// Per-file ceiling enforced before any bytes leave the machine (100 MB).
pub const MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;

pub fn check_upload_size(size_bytes: u64) -> Result<(), ValidationError> {
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(ValidationError::FileTooLarge {
            size_bytes,
            max_mb: MAX_UPLOAD_BYTES / (1024 * 1024),
        });
    }
    Ok(())
}

/// Human readable size, e.g. `1.5 MB`.
pub fn format_size(size_bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    if size_bytes < 1024 {
        return format!("{size_bytes} B");
    }
    let mut value = size_bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}
