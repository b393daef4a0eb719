use std::io::Write;
use std::path::Path;

use anyhow::Context;

use super::{user_error, CommandContext};

pub fn qr(
    ctx: &mut CommandContext,
    text: &str,
    svg: Option<&Path>,
    png: Option<&Path>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let image = ctx.app.generate_qr(text).map_err(user_error)?;

    if svg.is_none() && png.is_none() {
        writeln!(out, "{}", image.svg)?;
        return Ok(());
    }
    if let Some(dest) = svg {
        std::fs::write(dest, &image.svg)
            .with_context(|| format!("Failed to write {}", dest.display()))?;
        writeln!(out, "SVG saved to {}", dest.display())?;
    }
    if let Some(dest) = png {
        let bytes = ctx.app.export_qr_png(&image)?;
        std::fs::write(dest, bytes)
            .with_context(|| format!("Failed to write {}", dest.display()))?;
        writeln!(
            out,
            "PNG ({0}x{0}) saved to {1}",
            image.side_px(),
            dest.display()
        )?;
    }
    Ok(())
}
