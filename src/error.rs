use thiserror::Error;

/// Failures on the PNG export path, the only fallible operation in the
/// system. Core log/redraw operations are total.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not allocate a {0}x{0} pixel export surface")]
    SurfaceAllocation(u32),

    #[error("export surface produced a malformed pixel buffer")]
    PixelConversion,

    #[error("failed to write PNG: {0}")]
    Write(#[from] image::ImageError),
}
