//! Artboards command implementation.
//!
//! Lists a document's artboards along with the Android resource name each
//! one exports to, and flags names that collide after sanitizing.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::document::Document;
use crate::error::{ExportError, Result};
use crate::output::{display_path, plural, Printer};
use crate::sanitize::sanitize;

/// List the artboards of a document
#[derive(Args, Debug)]
pub struct ArtboardsArgs {
    /// Source document: an .svg file or a directory of .svg artboards
    pub document: PathBuf,

    /// Print the artboard list as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ArtboardEntry {
    pub index: usize,
    pub name: String,
    pub android_name: String,
    pub source: PathBuf,
}

pub fn run(args: ArtboardsArgs, printer: &Printer) -> Result<()> {
    let document = Document::open(&args.document)?;
    let entries = list(&document);

    if args.json {
        let text = serde_json::to_string_pretty(&entries).map_err(|e| ExportError::Parse {
            message: format!("Failed to serialize artboards: {}", e),
            help: None,
        })?;
        println!("{}", text);
        return Ok(());
    }

    printer.status(
        "Opened",
        &format!(
            "{} ({})",
            display_path(document.path()),
            plural(entries.len(), "artboard", "artboards")
        ),
    );

    for entry in &entries {
        println!(
            "{:>3}  {}  {}",
            entry.index,
            entry.name,
            printer.dim(&format!("-> {}.png", entry.android_name))
        );
    }

    for (android_name, names) in collisions(&entries) {
        printer.warning(
            "Collision",
            &format!("{} all export to {}.png on Android", names.join(", "), android_name),
        );
    }

    Ok(())
}

/// Describe each artboard of a document.
pub fn list(document: &Document) -> Vec<ArtboardEntry> {
    document
        .artboards()
        .iter()
        .map(|a| ArtboardEntry {
            index: a.index,
            name: a.name.clone(),
            android_name: sanitize(&a.name),
            source: a.source.clone(),
        })
        .collect()
}

/// Android names shared by more than one artboard, sorted by name.
pub fn collisions(entries: &[ArtboardEntry]) -> Vec<(String, Vec<String>)> {
    let mut groups: HashMap<&str, Vec<String>> = HashMap::new();
    for entry in entries {
        groups
            .entry(entry.android_name.as_str())
            .or_default()
            .push(entry.name.clone());
    }

    let mut shared: Vec<(String, Vec<String>)> = groups
        .into_iter()
        .filter(|(_, names)| names.len() > 1)
        .map(|(android_name, names)| (android_name.to_string(), names))
        .collect();
    shared.sort();
    shared
}
