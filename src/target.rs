//! Destination path computation.
//!
//! Pure functions that map a preset and an artboard name to the directory
//! and file an export lands in. Nothing here touches the filesystem.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::catalog::{Platform, ScalePreset};
use crate::sanitize::sanitize;

/// Directory name shared by every iOS preset.
pub const IOS_DIRECTORY: &str = "iOS";

/// Prefix for Android density directories (`drawable-xhdpi`).
pub const ANDROID_DIRECTORY_PREFIX: &str = "drawable-";

/// Where a single (preset, artboard) export is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportTarget {
    pub directory: PathBuf,
    pub file: PathBuf,
    pub scale_factor: u32,
    pub platform: Platform,
}

/// Directory a preset's files are written to, relative to `base`.
pub fn preset_directory(base: &Path, preset: &ScalePreset) -> PathBuf {
    match preset.platform {
        Platform::Android => base.join(format!("{}{}", ANDROID_DIRECTORY_PREFIX, preset.name)),
        Platform::Ios => base.join(IOS_DIRECTORY),
    }
}

/// File name for an artboard under a preset.
///
/// Android names go through [`sanitize`]. iOS names are the raw artboard
/// name plus the preset suffix; invalid characters fail later at write time.
pub fn file_name(preset: &ScalePreset, artboard_name: &str) -> String {
    match preset.platform {
        Platform::Android => format!("{}.png", sanitize(artboard_name)),
        Platform::Ios => format!("{}{}.png", artboard_name, preset.name),
    }
}

/// Compute the full export target for an artboard under a preset.
pub fn build_path(base: &Path, preset: &ScalePreset, artboard_name: &str) -> ExportTarget {
    let directory = preset_directory(base, preset);
    let file = directory.join(file_name(preset, artboard_name));

    ExportTarget {
        directory,
        file,
        scale_factor: preset.scale_factor,
        platform: preset.platform,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ANDROID_PRESETS, IOS_PRESETS};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_android_path() {
        let xhdpi = &ANDROID_PRESETS[2];
        let target = build_path(Path::new("out"), xhdpi, "App Icon!");

        assert_eq!(target.directory, PathBuf::from("out/drawable-xhdpi"));
        assert_eq!(target.file, PathBuf::from("out/drawable-xhdpi/app_icon_.png"));
        assert_eq!(target.scale_factor, 100);
        assert_eq!(target.platform, Platform::Android);
    }

    #[test]
    fn test_ios_path_is_not_sanitized() {
        let at2x = &IOS_PRESETS[1];
        let target = build_path(Path::new("out"), at2x, "App Icon!");

        assert_eq!(target.directory, PathBuf::from("out/iOS"));
        assert_eq!(target.file, PathBuf::from("out/iOS/App Icon!@2x.png"));
    }

    #[test]
    fn test_ios_1x_has_no_suffix() {
        let target = build_path(Path::new("out"), &IOS_PRESETS[0], "app-icon");
        assert_eq!(target.file, PathBuf::from("out/iOS/app-icon.png"));
        assert_eq!(target.scale_factor, 50);
    }

    #[test]
    fn test_every_android_preset() {
        for preset in &ANDROID_PRESETS {
            let target = build_path(Path::new("base"), preset, "Logo Mark");
            let dir = format!("base/drawable-{}", preset.name);
            assert_eq!(target.directory, PathBuf::from(&dir));
            assert_eq!(target.file, PathBuf::from(format!("{}/logo_mark.png", dir)));
        }
    }

    #[test]
    fn test_every_ios_preset_shares_directory() {
        for preset in &IOS_PRESETS {
            let target = build_path(Path::new("base"), preset, "Logo");
            assert_eq!(target.directory, PathBuf::from("base/iOS"));
            assert_eq!(
                target.file,
                PathBuf::from(format!("base/iOS/Logo{}.png", preset.name))
            );
        }
    }
}
