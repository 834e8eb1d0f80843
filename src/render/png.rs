//! PNG encoding for rendered pixmaps.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use resvg::tiny_skia::Pixmap;

use super::RasterError;

/// Encode a pixmap as PNG bytes.
///
/// tiny-skia stores premultiplied colour, so pixels are demultiplied first.
/// With `transparency` the PNG is RGBA; otherwise the alpha channel is
/// dropped and the PNG is plain RGB.
pub fn encode_png(pixmap: &Pixmap, transparency: bool) -> Result<Vec<u8>, RasterError> {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());

    for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
        let colour = src.demultiply();
        *dst = Rgba([colour.red(), colour.green(), colour.blue(), colour.alpha()]);
    }

    let img = if transparency {
        DynamicImage::ImageRgba8(img)
    } else {
        DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(img).to_rgb8())
    };

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| RasterError(format!("Failed to encode PNG: {}", e)))?;

    Ok(bytes)
}
