//! Preset selection.
//!
//! A [`SelectionSet`] is an immutable value: every toggle returns a new set,
//! and the final value is handed to the export driver. Keys are preset names,
//! which are unique across both platforms.

pub mod prompt;

use crate::catalog::{self, Platform, ScalePreset};
use crate::error::{ExportError, Result};

/// Presets chosen for export, in the order they were selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    presets: Vec<ScalePreset>,
}

impl SelectionSet {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every preset in the catalog, in catalog order.
    pub fn all() -> Self {
        catalog::all().fold(Self::new(), |set, preset| set.toggle(preset, true))
    }

    /// Return a new set with `preset` added (`checked`) or removed.
    ///
    /// Adding a preset already present, or removing one that is absent,
    /// returns an equal set.
    pub fn toggle(&self, preset: &ScalePreset, checked: bool) -> Self {
        let mut presets: Vec<ScalePreset> = self
            .presets
            .iter()
            .filter(|p| p.name != preset.name)
            .copied()
            .collect();

        if checked {
            match self.presets.iter().position(|p| p.name == preset.name) {
                // Keep the original insertion position
                Some(index) => presets.insert(index, *preset),
                None => presets.push(*preset),
            }
        }

        Self { presets }
    }

    /// Flip a preset's membership.
    pub fn flip(&self, preset: &ScalePreset) -> Self {
        self.toggle(preset, !self.contains(preset))
    }

    /// Whether a preset with the same name is selected.
    pub fn contains(&self, preset: &ScalePreset) -> bool {
        self.presets.iter().any(|p| p.name == preset.name)
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Number of selected presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Selected presets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ScalePreset> {
        self.presets.iter()
    }

    /// Build a selection from per-platform name lists.
    ///
    /// Each list holds preset names (`mdpi`, `2x`, `@3x`) or `all`.
    pub fn from_names<S: AsRef<str>>(android: &[S], ios: &[S]) -> Result<Self> {
        let set = add_names(Self::new(), Platform::Android, android)?;
        add_names(set, Platform::Ios, ios)
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a ScalePreset;
    type IntoIter = std::slice::Iter<'a, ScalePreset>;

    fn into_iter(self) -> Self::IntoIter {
        self.presets.iter()
    }
}

fn add_names<S: AsRef<str>>(
    set: SelectionSet,
    platform: Platform,
    names: &[S],
) -> Result<SelectionSet> {
    let mut set = set;

    for name in names {
        let name = name.as_ref().trim();
        if name.eq_ignore_ascii_case("all") {
            for preset in catalog::for_platform(platform) {
                set = set.toggle(preset, true);
            }
            continue;
        }

        let preset = catalog::find(platform, name).ok_or_else(|| ExportError::Parse {
            message: format!("Unknown {} preset '{}'", platform, name),
            help: Some(format!(
                "Valid {} presets: {}, or 'all'",
                platform,
                valid_names(platform)
            )),
        })?;
        set = set.toggle(preset, true);
    }

    Ok(set)
}

fn valid_names(platform: Platform) -> String {
    catalog::for_platform(platform)
        .iter()
        .map(|p| p.label())
        .collect::<Vec<_>>()
        .join(", ")
}
