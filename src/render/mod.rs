//! Rasterization of artboards.
//!
//! The export driver never renders pixels itself; it hands the active
//! artboard and a fixed set of [`ExportOptions`] to a [`Rasterizer`] and
//! writes whatever PNG bytes come back.

mod png;
mod svg;

use thiserror::Error;

use crate::document::Artboard;

pub use png::encode_png;
pub use svg::SvgRasterizer;

/// Raster output format. Only 24-bit PNG is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png24,
}

/// Rendering options passed with every export call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Keep the alpha channel. When false the artboard is flattened on white.
    pub transparency: bool,
    /// Crop output to the artboard bounds.
    pub clip_to_artboard: bool,
    pub anti_aliasing: bool,
    /// Horizontal scale in percent.
    pub horizontal_scale: u32,
    /// Vertical scale in percent.
    pub vertical_scale: u32,
}

impl ExportOptions {
    /// PNG24 with transparency, artboard clipping and anti-aliasing, scaled
    /// uniformly by `scale` percent.
    pub fn png24(scale: u32) -> Self {
        Self {
            format: ExportFormat::Png24,
            transparency: true,
            clip_to_artboard: true,
            anti_aliasing: true,
            horizontal_scale: scale,
            vertical_scale: scale,
        }
    }
}

/// Failure reported by a rasterizer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct RasterError(pub String);

/// Something that can turn an artboard into encoded PNG bytes.
pub trait Rasterizer {
    fn render(&self, artboard: &Artboard, options: &ExportOptions) -> Result<Vec<u8>, RasterError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png24_defaults() {
        let options = ExportOptions::png24(150);
        assert_eq!(options.format, ExportFormat::Png24);
        assert!(options.transparency);
        assert!(options.clip_to_artboard);
        assert!(options.anti_aliasing);
        assert_eq!(options.horizontal_scale, 150);
        assert_eq!(options.vertical_scale, 150);
    }
}
