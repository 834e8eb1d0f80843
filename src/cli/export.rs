//! Export command implementation.
//!
//! Resolves the source document and destination folder, gathers a preset
//! selection from flags, the config file or the interactive prompt, and
//! runs the export driver.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Args;

use crate::config::ExportConfig;
use crate::document::Document;
use crate::error::{ExportError, Result};
use crate::export::{plan_export, run_export, ExportReport};
use crate::output::{display_path, plural, Printer};
use crate::render::{Rasterizer, SvgRasterizer};
use crate::selection::prompt::{self, Decision};
use crate::selection::SelectionSet;

/// Export artboards at the selected scales
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Source document: an .svg file or a directory of .svg artboards
    pub document: Option<PathBuf>,

    /// Destination folder
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Android densities (mdpi,hdpi,xhdpi,xxhdpi,xxxhdpi or all)
    #[arg(long, value_delimiter = ',')]
    pub android: Vec<String>,

    /// iOS scales (1x,2x,3x or all)
    #[arg(long, value_delimiter = ',')]
    pub ios: Vec<String>,

    /// Export every preset for both platforms
    #[arg(long, conflicts_with_all = ["android", "ios"])]
    pub all: bool,

    /// YAML file with default output and presets
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Show what would be written without rendering
    #[arg(long)]
    pub dry_run: bool,

    /// Print the export report as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

/// How an export invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Exported(ExportReport),
    Planned(ExportReport),
    Cancelled,
}

pub fn run(args: ExportArgs, printer: &Printer) -> Result<()> {
    let json = args.json;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut prompt_out = io::stderr();

    let outcome = execute(
        args,
        printer,
        &SvgRasterizer::new(),
        &mut input,
        &mut prompt_out,
    )?;

    if json {
        let report = match &outcome {
            Outcome::Exported(report) | Outcome::Planned(report) => report.clone(),
            Outcome::Cancelled => ExportReport::default(),
        };
        let text = serde_json::to_string_pretty(&report).map_err(|e| ExportError::Parse {
            message: format!("Failed to serialize report: {}", e),
            help: None,
        })?;
        println!("{}", text);
    }

    Ok(())
}

/// Run an export with explicit collaborators.
///
/// `input` and `prompt_out` drive the selection prompt when no presets are
/// given on the command line or in the config file.
pub fn execute<R, I, W>(
    args: ExportArgs,
    printer: &Printer,
    rasterizer: &R,
    input: &mut I,
    prompt_out: &mut W,
) -> Result<Outcome>
where
    R: Rasterizer,
    I: BufRead,
    W: Write,
{
    let config = match &args.config {
        Some(path) => ExportConfig::load(path)?,
        None => ExportConfig::default(),
    };

    let document_path = args.document.clone().ok_or_else(|| ExportError::MissingPrecondition {
        message: "no source document given".to_string(),
        help: Some("Pass an .svg file or a directory of .svg artboards".to_string()),
    })?;

    let output = args
        .output
        .clone()
        .or_else(|| config.output.clone())
        .ok_or_else(|| ExportError::MissingPrecondition {
            message: "no destination folder given".to_string(),
            help: Some("Use --output <DIR> or set 'output' in the config file".to_string()),
        })?;

    let mut document = Document::open(&document_path)?;
    printer.status(
        "Opened",
        &format!(
            "{} ({})",
            display_path(document.path()),
            plural(document.len(), "artboard", "artboards")
        ),
    );

    let selection = if args.all {
        SelectionSet::all()
    } else if !args.android.is_empty() || !args.ios.is_empty() {
        SelectionSet::from_names(&args.android, &args.ios)?
    } else if config.has_presets() {
        SelectionSet::from_names(&config.android, &config.ios)?
    } else {
        match prompt::select(SelectionSet::new(), input, prompt_out)? {
            Decision::Export(selection) => selection,
            Decision::Cancel => {
                printer.warning("Cancelled", "no files written");
                return Ok(Outcome::Cancelled);
            }
        }
    };

    if args.dry_run {
        let plan = plan_export(&selection, &document, &output);
        for target in &plan.files {
            printer.info("Would write", &display_path(&target.file));
        }
        return Ok(Outcome::Planned(plan));
    }

    let report = run_export(&selection, &mut document, &output, rasterizer, printer)?;

    printer.success(
        "Finished",
        &format!(
            "{} in {} to {}",
            plural(report.files.len(), "file", "files"),
            plural(report.directories.len(), "directory", "directories"),
            display_path(&output)
        ),
    );

    Ok(Outcome::Exported(report))
}
