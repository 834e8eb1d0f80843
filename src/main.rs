use artboard_export::cli::{Cli, Commands};
use artboard_export::output::Printer;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = if cli.quiet {
        Printer::quiet()
    } else {
        Printer::new()
    };

    match cli.command {
        Commands::Export(args) => artboard_export::cli::export::run(args, &printer)?,
        Commands::Presets(args) => artboard_export::cli::presets::run(args)?,
        Commands::Artboards(args) => artboard_export::cli::artboards::run(args, &printer)?,
        Commands::Completions(args) => artboard_export::cli::completions::run(args)?,
    }

    Ok(())
}
