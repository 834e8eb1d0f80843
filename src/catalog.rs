//! Scale preset catalog.
//!
//! Fixed, ordered list of the density buckets and iOS suffixes the exporter
//! knows about. The baseline (100%) entry is `xhdpi` for Android and `@2x`
//! for iOS; every other preset scales up or down from it.

use std::fmt;

use serde::Serialize;

/// Mobile platform a preset targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    /// Display label used for panels and status output.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Android => "Android",
            Platform::Ios => "iOS",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named scale option for one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ScalePreset {
    /// Density bucket (Android) or filename suffix (iOS). May be empty.
    pub name: &'static str,
    /// Percent relative to a 100% baseline render.
    pub scale_factor: u32,
    pub platform: Platform,
}

impl ScalePreset {
    const fn android(name: &'static str, scale_factor: u32) -> Self {
        Self {
            name,
            scale_factor,
            platform: Platform::Android,
        }
    }

    const fn ios(name: &'static str, scale_factor: u32) -> Self {
        Self {
            name,
            scale_factor,
            platform: Platform::Ios,
        }
    }

    /// Human-facing label. The iOS 1x preset has an empty name, so it is
    /// shown as `@1x`.
    pub fn label(&self) -> &'static str {
        match (self.platform, self.name) {
            (Platform::Ios, "") => "@1x",
            (_, name) => name,
        }
    }
}

impl fmt::Display for ScalePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({}%)", self.platform, self.label(), self.scale_factor)
    }
}

/// Android density buckets, baseline `xhdpi`.
pub const ANDROID_PRESETS: [ScalePreset; 5] = [
    ScalePreset::android("mdpi", 50),
    ScalePreset::android("hdpi", 75),
    ScalePreset::android("xhdpi", 100),
    ScalePreset::android("xxhdpi", 150),
    ScalePreset::android("xxxhdpi", 200),
];

/// iOS scale suffixes, baseline `@2x`.
pub const IOS_PRESETS: [ScalePreset; 3] = [
    ScalePreset::ios("", 50),
    ScalePreset::ios("@2x", 100),
    ScalePreset::ios("@3x", 150),
];

/// All presets in catalog order: Android first, then iOS.
pub fn all() -> impl Iterator<Item = &'static ScalePreset> {
    ANDROID_PRESETS.iter().chain(IOS_PRESETS.iter())
}

/// Presets for a single platform.
pub fn for_platform(platform: Platform) -> &'static [ScalePreset] {
    match platform {
        Platform::Android => &ANDROID_PRESETS,
        Platform::Ios => &IOS_PRESETS,
    }
}

/// Look up a preset by a user-supplied name.
///
/// Android accepts the bucket name (`xhdpi`). iOS accepts `1x`, `2x`, `3x`
/// as well as the suffix forms `@1x`, `@2x`, `@3x`.
pub fn find(platform: Platform, name: &str) -> Option<&'static ScalePreset> {
    let name = name.trim().to_lowercase();
    match platform {
        Platform::Android => ANDROID_PRESETS.iter().find(|p| p.name == name),
        Platform::Ios => {
            let suffix = name.trim_start_matches('@');
            IOS_PRESETS.iter().find(|p| p.label().trim_start_matches('@') == suffix)
        }
    }
}

/// The 100% preset for a platform.
pub fn baseline(platform: Platform) -> &'static ScalePreset {
    for_platform(platform)
        .iter()
        .find(|p| p.scale_factor == 100)
        .unwrap_or(&for_platform(platform)[0])
}
