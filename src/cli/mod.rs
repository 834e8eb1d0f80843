pub mod artboards;
pub mod completions;
pub mod export;
pub mod presets;

use clap::{Parser, Subcommand};

/// abx - Export SVG artboards as Android and iOS PNG assets
#[derive(Parser, Debug)]
#[command(name = "abx")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export artboards at the selected scales
    Export(export::ExportArgs),

    /// List the available scale presets
    Presets(presets::PresetsArgs),

    /// List the artboards of a document
    Artboards(artboards::ArtboardsArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
