//! Built-in typography presets.

use super::state::{ClampTypographyState, Mode, PresetName, SizeRange, ViewportRange};

/// Size and viewport ranges behind a [`PresetName`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypographyPreset {
    pub name: PresetName,
    pub typography: SizeRange,
    pub viewport: ViewportRange,
}

const PRESET_VIEWPORT: ViewportRange = ViewportRange::new(320.0, 1440.0);

const PRESETS: [TypographyPreset; 6] = [
    TypographyPreset {
        name: PresetName::Body,
        typography: SizeRange::new(14.0, 18.0, 16.0),
        viewport: PRESET_VIEWPORT,
    },
    TypographyPreset {
        name: PresetName::Small,
        typography: SizeRange::new(12.0, 14.0, 14.0),
        viewport: PRESET_VIEWPORT,
    },
    TypographyPreset {
        name: PresetName::H1,
        typography: SizeRange::new(28.0, 48.0, 36.0),
        viewport: PRESET_VIEWPORT,
    },
    TypographyPreset {
        name: PresetName::H2,
        typography: SizeRange::new(24.0, 36.0, 30.0),
        viewport: PRESET_VIEWPORT,
    },
    TypographyPreset {
        name: PresetName::H3,
        typography: SizeRange::new(20.0, 28.0, 24.0),
        viewport: PRESET_VIEWPORT,
    },
    TypographyPreset {
        name: PresetName::Spacing,
        typography: SizeRange::new(8.0, 24.0, 16.0),
        viewport: PRESET_VIEWPORT,
    },
];

/// Factor applied to typography presets reused as spacing tokens.
const SPACING_SCALE: f64 = 0.5;

impl PresetName {
    /// The preset data for this name.
    pub fn preset(self) -> &'static TypographyPreset {
        match self {
            Self::Body => &PRESETS[0],
            Self::Small => &PRESETS[1],
            Self::H1 => &PRESETS[2],
            Self::H2 => &PRESETS[3],
            Self::H3 => &PRESETS[4],
            Self::Spacing => &PRESETS[5],
        }
    }
}

/// The subset of [`ClampTypographyState`] a preset overwrites.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresetPatch {
    pub typography: SizeRange,
    pub viewport: ViewportRange,
    pub preset: PresetName,
}

/// Resolve a preset for the given mode.
///
/// In spacing mode every preset other than `spacing` is halved and retagged
/// as `spacing`. The `spacing` preset itself is returned as-is in both modes.
pub fn apply_preset(preset: PresetName, mode: Mode) -> PresetPatch {
    let data = preset.preset();

    if mode == Mode::Spacing && preset != PresetName::Spacing {
        tracing::debug!("apply_preset: halving {} for spacing mode", preset);
        return PresetPatch {
            typography: data.typography.scaled(SPACING_SCALE),
            viewport: data.viewport,
            preset: PresetName::Spacing,
        };
    }

    PresetPatch {
        typography: data.typography,
        viewport: data.viewport,
        preset,
    }
}

impl ClampTypographyState {
    /// Merge a preset patch into this state.
    pub fn apply_patch(&mut self, patch: PresetPatch) {
        self.typography = patch.typography;
        self.viewport = patch.viewport;
        self.preset = Some(patch.preset);
    }
}
