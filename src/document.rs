//! Source documents and their artboards.
//!
//! A document is either a single `.svg` file (one artboard) or a directory
//! whose top-level `.svg` files are its artboards, in file name order. The
//! document tracks an active artboard; rendering always targets it.

use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{ExportError, Result};

/// A named canvas within a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artboard {
    pub index: usize,
    pub name: String,
    /// SVG file holding the artboard's content.
    pub source: PathBuf,
}

/// A loaded source document.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    artboards: Vec<Artboard>,
    active: usize,
}

impl Document {
    /// Load a document from an SVG file or a directory of SVG files.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ExportError::MissingPrecondition {
                message: format!("no source document at {}", path.display()),
                help: Some("Pass an .svg file or a directory of .svg files".to_string()),
            });
        }

        let files = if path.is_dir() {
            scan_directory(path)?
        } else if is_svg(path) {
            vec![path.to_path_buf()]
        } else {
            return Err(ExportError::Parse {
                message: format!("{} is not an SVG document", path.display()),
                help: Some("Source documents must have the .svg extension".to_string()),
            });
        };

        if files.is_empty() {
            return Err(ExportError::MissingPrecondition {
                message: format!("no artboards found in {}", path.display()),
                help: Some("Add .svg files to the directory".to_string()),
            });
        }

        let artboards = files
            .into_iter()
            .enumerate()
            .map(|(index, source)| Artboard {
                index,
                name: artboard_name(&source),
                source,
            })
            .collect();

        Ok(Self {
            path: path.to_path_buf(),
            artboards,
            active: 0,
        })
    }

    /// Build an in-memory document from artboard names.
    ///
    /// Sources are placeholder paths; useful with rasterizers that do not
    /// read from disk.
    pub fn from_artboards<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        let artboards = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| {
                let name = name.into();
                Artboard {
                    index,
                    source: PathBuf::from(format!("{}.svg", name)),
                    name,
                }
            })
            .collect();

        Self {
            path: PathBuf::from("."),
            artboards,
            active: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn artboards(&self) -> &[Artboard] {
        &self.artboards
    }

    pub fn len(&self) -> usize {
        self.artboards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artboards.is_empty()
    }

    /// Make the artboard at `index` the target of subsequent renders.
    pub fn set_active_artboard(&mut self, index: usize) -> Result<()> {
        if index >= self.artboards.len() {
            return Err(ExportError::Parse {
                message: format!(
                    "artboard index {} out of range ({} artboards)",
                    index,
                    self.artboards.len()
                ),
                help: None,
            });
        }
        self.active = index;
        Ok(())
    }

    pub fn active_artboard(&self) -> Option<&Artboard> {
        self.artboards.get(self.active)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"))
}

fn artboard_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Top-level SVG files in a directory, sorted by file name.
fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| ExportError::Filesystem {
            path: dir.to_path_buf(),
            message: format!("Failed to read directory: {}", e),
        })?;

        if entry.file_type().is_file() && is_svg(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
