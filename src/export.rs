use std::path::Path;

use image::RgbaImage;
use log::info;

use crate::engine;
use crate::error::ExportError;
use crate::history::ActionLog;
use crate::raster::PixmapSurface;
use crate::surface::CANVAS_SIZE;

/// Export supersampling factor: the committed history is replayed a second
/// time at this scale onto an offscreen surface.
pub const EXPORT_SCALE: f32 = 4.0;

/// Replay the committed history onto an opaque offscreen raster at
/// [`EXPORT_SCALE`]. The cursor preview is never exported.
pub fn render_export_image(log: &ActionLog) -> Result<RgbaImage, ExportError> {
    let mut surface = PixmapSurface::new(CANVAS_SIZE, EXPORT_SCALE)
        .ok_or(ExportError::SurfaceAllocation(CANVAS_SIZE * EXPORT_SCALE as u32))?;
    engine::replay(&mut surface, log.snapshot(), None);

    let pixmap = surface.into_pixmap();
    let (width, height) = (pixmap.width(), pixmap.height());
    RgbaImage::from_raw(width, height, pixmap.take()).ok_or(ExportError::PixelConversion)
}

/// Render and write the PNG to `path`.
pub fn export_png(log: &ActionLog, path: &Path) -> Result<(), ExportError> {
    let image = render_export_image(log)?;
    image.save(path)?;
    info!(
        "exported {}x{} PNG to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}
