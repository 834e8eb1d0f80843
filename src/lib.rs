//! abx - Artboard exporter for mobile assets
//!
//! A library for rendering the artboards of an SVG document into PNG files
//! laid out for Android density buckets and iOS scale suffixes.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod output;
pub mod render;
pub mod sanitize;
pub mod selection;
pub mod target;

pub use catalog::{Platform, ScalePreset, ANDROID_PRESETS, IOS_PRESETS};
pub use config::ExportConfig;
pub use document::{Artboard, Document};
pub use error::{ExportError, Result};
pub use export::{plan_export, run_export, ExportReport};
pub use render::{ExportFormat, ExportOptions, RasterError, Rasterizer, SvgRasterizer};
pub use sanitize::sanitize;
pub use selection::prompt::Decision;
pub use selection::SelectionSet;
pub use target::{build_path, ExportTarget};
