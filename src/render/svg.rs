//! SVG rasterizer backed by resvg.

use std::fs;
use std::sync::Arc;

use resvg::tiny_skia::{Color, Pixmap, Transform};
use resvg::usvg::{self, fontdb, ShapeRendering};

use crate::document::Artboard;

use super::{encode_png, ExportFormat, ExportOptions, RasterError, Rasterizer};

/// Renders artboard SVG files to PNG.
///
/// The artboard's declared size is its 100% bounds; the output pixmap is
/// that size times the requested scale, rounded, at least one pixel.
pub struct SvgRasterizer {
    fontdb: Arc<fontdb::Database>,
}

impl SvgRasterizer {
    /// Create a rasterizer with the system fonts loaded.
    pub fn new() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        Self::with_fonts(db)
    }

    /// Create a rasterizer with a specific font database.
    pub fn with_fonts(db: fontdb::Database) -> Self {
        Self {
            fontdb: Arc::new(db),
        }
    }

    fn parse(&self, artboard: &Artboard, anti_aliasing: bool) -> Result<usvg::Tree, RasterError> {
        let data = fs::read(&artboard.source).map_err(|e| {
            RasterError(format!(
                "Failed to read {}: {}",
                artboard.source.display(),
                e
            ))
        })?;

        let options = usvg::Options {
            resources_dir: fs::canonicalize(&artboard.source)
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf())),
            shape_rendering: if anti_aliasing {
                ShapeRendering::GeometricPrecision
            } else {
                ShapeRendering::CrispEdges
            },
            fontdb: self.fontdb.clone(),
            ..usvg::Options::default()
        };

        usvg::Tree::from_data(&data, &options)
            .map_err(|e| RasterError(format!("Invalid SVG {}: {}", artboard.source.display(), e)))
    }
}

impl Default for SvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Pixel dimension of a scaled edge.
fn scaled_edge(length: f32, percent: u32) -> u32 {
    (length * percent as f32 / 100.0).round().max(1.0) as u32
}

impl Rasterizer for SvgRasterizer {
    fn render(&self, artboard: &Artboard, options: &ExportOptions) -> Result<Vec<u8>, RasterError> {
        debug_assert_eq!(options.format, ExportFormat::Png24);

        if options.horizontal_scale == 0 || options.vertical_scale == 0 {
            return Err(RasterError(format!(
                "Unsupported scale {}x{}%",
                options.horizontal_scale, options.vertical_scale
            )));
        }

        let tree = self.parse(artboard, options.anti_aliasing)?;
        let size = tree.size();

        let sx = options.horizontal_scale as f32 / 100.0;
        let sy = options.vertical_scale as f32 / 100.0;

        // Without clipping, grow the canvas to hold content outside the artboard
        let (width, height, transform) = if options.clip_to_artboard {
            (
                scaled_edge(size.width(), options.horizontal_scale),
                scaled_edge(size.height(), options.vertical_scale),
                Transform::from_scale(sx, sy),
            )
        } else {
            let bounds = tree.root().abs_stroke_bounding_box();
            let left = bounds.left().min(0.0);
            let top = bounds.top().min(0.0);
            let right = bounds.right().max(size.width());
            let bottom = bounds.bottom().max(size.height());
            (
                scaled_edge(right - left, options.horizontal_scale),
                scaled_edge(bottom - top, options.vertical_scale),
                Transform::from_row(sx, 0.0, 0.0, sy, -left * sx, -top * sy),
            )
        };

        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
            RasterError(format!("Failed to allocate {}x{} pixmap", width, height))
        })?;

        if !options.transparency {
            pixmap.fill(Color::WHITE);
        }

        resvg::render(&tree, transform, &mut pixmap.as_mut());

        encode_png(&pixmap, options.transparency)
    }
}
