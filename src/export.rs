//! Export driver.
//!
//! Walks the selected presets, ensures each destination directory exists
//! and renders every artboard of the document into it. Any failure aborts
//! the run; files already written stay in place.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::catalog::ScalePreset;
use crate::document::Document;
use crate::error::{ExportError, Result};
use crate::output::{display_path, Printer};
use crate::render::{ExportOptions, Rasterizer};
use crate::selection::SelectionSet;
use crate::target::{build_path, preset_directory, ExportTarget};

/// What a run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    /// Each destination directory, once, in the order it was first ensured.
    pub directories: Vec<PathBuf>,
    /// Every file written, in write order.
    pub files: Vec<ExportTarget>,
}

/// Artboard indices in export order: highest index first.
fn artboard_order(document: &Document) -> impl Iterator<Item = usize> {
    (0..document.len()).rev()
}

/// Compute every target a run would write, without touching the filesystem.
pub fn plan_export(selection: &SelectionSet, document: &Document, base: &Path) -> ExportReport {
    let mut report = ExportReport::default();
    let mut seen = HashSet::new();

    for preset in selection {
        let directory = preset_directory(base, preset);
        if seen.insert(directory.clone()) {
            report.directories.push(directory);
        }

        for index in artboard_order(document) {
            let artboard = &document.artboards()[index];
            report.files.push(build_path(base, preset, &artboard.name));
        }
    }

    report
}

/// Export every artboard of `document` for each preset in `selection`.
pub fn run_export<R: Rasterizer>(
    selection: &SelectionSet,
    document: &mut Document,
    base: &Path,
    rasterizer: &R,
    printer: &Printer,
) -> Result<ExportReport> {
    let mut report = ExportReport::default();
    let mut ensured: HashSet<PathBuf> = HashSet::new();

    for preset in selection {
        let directory = preset_directory(base, preset);
        if ensured.insert(directory.clone()) {
            ensure_directory(&directory, preset)?;
            report.directories.push(directory);
        }

        printer.status("Exporting", &preset.to_string());

        for index in artboard_order(document) {
            document.set_active_artboard(index)?;
            let target = export_active(document, base, preset, rasterizer)?;
            printer.info("Wrote", &display_path(&target.file));
            report.files.push(target);
        }
    }

    Ok(report)
}

fn ensure_directory(directory: &Path, preset: &ScalePreset) -> Result<()> {
    if directory.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(directory).map_err(|e| ExportError::Filesystem {
        path: directory.to_path_buf(),
        message: format!("Failed to create directory for {}: {}", preset, e),
    })
}

/// Render the document's active artboard for one preset and write it.
fn export_active<R: Rasterizer>(
    document: &Document,
    base: &Path,
    preset: &ScalePreset,
    rasterizer: &R,
) -> Result<ExportTarget> {
    let artboard = document
        .active_artboard()
        .ok_or_else(|| ExportError::MissingPrecondition {
            message: format!("{} has no active artboard", document.path().display()),
            help: None,
        })?;

    let target = build_path(base, preset, &artboard.name);
    let options = ExportOptions::png24(preset.scale_factor);

    let bytes = rasterizer
        .render(artboard, &options)
        .map_err(|e| ExportError::Render {
            artboard: artboard.name.clone(),
            preset: preset.to_string(),
            message: format!("{} (target {})", e, target.file.display()),
        })?;

    fs::write(&target.file, bytes).map_err(|e| ExportError::Filesystem {
        path: target.file.clone(),
        message: format!(
            "Failed to write artboard '{}' for {}: {}",
            artboard.name, preset, e
        ),
    })?;

    Ok(target)
}
