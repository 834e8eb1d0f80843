//! Presets command implementation.
//!
//! Prints the scale preset catalog grouped by platform.

use clap::Args;
use serde::Serialize;

use crate::catalog::{self, Platform, ScalePreset};
use crate::error::{ExportError, Result};
use crate::target::{ANDROID_DIRECTORY_PREFIX, IOS_DIRECTORY};

/// List the available scale presets
#[derive(Args, Debug)]
pub struct PresetsArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct PresetEntry {
    platform: Platform,
    name: &'static str,
    label: &'static str,
    scale_factor: u32,
    baseline: bool,
}

pub fn run(args: PresetsArgs) -> Result<()> {
    if args.json {
        let entries: Vec<PresetEntry> = catalog::all()
            .map(|p| PresetEntry {
                platform: p.platform,
                name: p.name,
                label: p.label(),
                scale_factor: p.scale_factor,
                baseline: is_baseline(p),
            })
            .collect();
        let text = serde_json::to_string_pretty(&entries).map_err(|e| ExportError::Parse {
            message: format!("Failed to serialize presets: {}", e),
            help: None,
        })?;
        println!("{}", text);
    } else {
        print!("{}", format_catalog());
    }
    Ok(())
}

fn is_baseline(preset: &ScalePreset) -> bool {
    catalog::baseline(preset.platform) == preset
}

/// Output file pattern for a preset, e.g. `drawable-mdpi/<name>.png`.
fn file_pattern(preset: &ScalePreset) -> String {
    match preset.platform {
        Platform::Android => format!("{}{}/<name>.png", ANDROID_DIRECTORY_PREFIX, preset.name),
        Platform::Ios => format!("{}/<name>{}.png", IOS_DIRECTORY, preset.name),
    }
}

/// Render the catalog as a plain-text table.
pub fn format_catalog() -> String {
    let mut out = String::new();

    for platform in [Platform::Android, Platform::Ios] {
        out.push_str(&format!("{}\n", platform));
        for preset in catalog::for_platform(platform) {
            let line = format!(
                "  {:<8} {:>3}%  {}{}",
                preset.label(),
                preset.scale_factor,
                file_pattern(preset),
                if is_baseline(preset) { "  (baseline)" } else { "" }
            );
            out.push_str(&line);
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_catalog() {
        insta::assert_snapshot!(format_catalog(), @r"
        Android
          mdpi      50%  drawable-mdpi/<name>.png
          hdpi      75%  drawable-hdpi/<name>.png
          xhdpi    100%  drawable-xhdpi/<name>.png  (baseline)
          xxhdpi   150%  drawable-xxhdpi/<name>.png
          xxxhdpi  200%  drawable-xxxhdpi/<name>.png
        iOS
          @1x       50%  iOS/<name>.png
          @2x      100%  iOS/<name>@2x.png  (baseline)
          @3x      150%  iOS/<name>@3x.png
        ");
    }

    #[test]
    fn test_is_baseline() {
        let baselines: Vec<&str> = catalog::all()
            .filter(|p| is_baseline(p))
            .map(|p| p.name)
            .collect();
        assert_eq!(baselines, vec!["xhdpi", "@2x"]);
    }
}
