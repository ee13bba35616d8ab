//! Layered box and drop shadows

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{hex_to_rgb, hex_with_alpha_byte};
use crate::error::UnknownName;
use crate::number::{to_fixed, JsNumber};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShadowType {
    #[default]
    BoxShadow,
    DropShadow,
}

/// One shadow layer. `spread` and `inset` only apply to `box-shadow`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShadowLayer {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub blur: f64,
    pub spread: f64,
    pub opacity: f64,
    pub color: String,
    pub inset: bool,
}

impl ShadowLayer {
    fn color_with_alpha(&self) -> String {
        hex_with_alpha_byte(&self.color, self.opacity)
    }
}

/// Named single-layer shadows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowPreset {
    Subtle,
    Medium,
    Strong,
    Neon,
}

impl ShadowPreset {
    pub fn id(self) -> &'static str {
        match self {
            Self::Subtle => "subtle",
            Self::Medium => "medium",
            Self::Strong => "strong",
            Self::Neon => "neon",
        }
    }

    pub fn all() -> &'static [ShadowPreset] {
        const PRESETS: [ShadowPreset; 4] = [
            ShadowPreset::Subtle,
            ShadowPreset::Medium,
            ShadowPreset::Strong,
            ShadowPreset::Neon,
        ];
        &PRESETS
    }

    /// `(x, y, blur, spread, opacity, color)` for this preset.
    fn geometry(self) -> (f64, f64, f64, f64, f64, &'static str) {
        match self {
            Self::Subtle => (0.0, 1.0, 3.0, 0.0, 10.0, "#000000"),
            Self::Medium => (0.0, 4.0, 12.0, 0.0, 15.0, "#000000"),
            Self::Strong => (0.0, 8.0, 24.0, 0.0, 25.0, "#000000"),
            Self::Neon => (0.0, 0.0, 20.0, 0.0, 80.0, "#00ffff"),
        }
    }
}

impl Display for ShadowPreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ShadowPreset {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.id() == s)
            .ok_or_else(|| UnknownName::new("shadow preset", s, Self::all().iter().map(|p| p.id())))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewBackground {
    #[default]
    Light,
    Dark,
}

/// Complete state of the shadow tool.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShadowState {
    #[serde(rename = "type")]
    pub kind: ShadowType,
    pub layers: Vec<ShadowLayer>,
    pub use_angle_mode: bool,
    pub angle: f64,
    pub distance: f64,
    pub preset: Option<ShadowPreset>,
    pub preview_background: PreviewBackground,
    pub show_grid: bool,
}

impl Default for ShadowState {
    fn default() -> Self {
        Self {
            kind: ShadowType::BoxShadow,
            layers: vec![ShadowLayer {
                id: "layer-1".to_string(),
                x: 0.0,
                y: 4.0,
                blur: 12.0,
                spread: 0.0,
                opacity: 15.0,
                color: "#000000".to_string(),
                inset: false,
            }],
            use_angle_mode: false,
            angle: 90.0,
            distance: 4.0,
            preset: Some(ShadowPreset::Medium),
            preview_background: PreviewBackground::Light,
            show_grid: false,
        }
    }
}

/// Whether shadow CSS is emitted directly or through a `--shadow` property.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShadowOutput {
    #[default]
    Standard,
    CssVariable,
}

/// `box-shadow` value for `layers`, comma separated.
pub fn box_shadow(layers: &[ShadowLayer]) -> String {
    layers
        .iter()
        .map(|layer| {
            format!(
                "{}{}px {}px {}px {}px {}",
                if layer.inset { "inset " } else { "" },
                JsNumber(layer.x),
                JsNumber(layer.y),
                JsNumber(layer.blur),
                JsNumber(layer.spread),
                layer.color_with_alpha()
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// `filter` value for `layers`, one `drop-shadow()` per layer.
pub fn drop_shadow(layers: &[ShadowLayer]) -> String {
    layers
        .iter()
        .map(|layer| {
            format!(
                "drop-shadow({}px {}px {}px {})",
                JsNumber(layer.x),
                JsNumber(layer.y),
                JsNumber(layer.blur),
                layer.color_with_alpha()
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shadow declarations for `state`.
pub fn shadow_css(state: &ShadowState, output: ShadowOutput) -> String {
    let (property, value) = match state.kind {
        ShadowType::BoxShadow => ("box-shadow", box_shadow(&state.layers)),
        ShadowType::DropShadow => ("filter", drop_shadow(&state.layers)),
    };

    if state.layers.is_empty() {
        return match output {
            ShadowOutput::CssVariable => {
                ":root {\n  --shadow: none;\n}\n\n.card {\n  box-shadow: var(--shadow);\n}"
                    .to_string()
            }
            ShadowOutput::Standard => "box-shadow: none;".to_string(),
        };
    }

    match output {
        ShadowOutput::CssVariable => format!(
            ":root {{\n  --shadow: {value};\n}}\n\n.card {{\n  {property}: var(--shadow);\n}}"
        ),
        ShadowOutput::Standard => format!("{property}: {value};"),
    }
}

/// Per-layer `rgba()` summary for transcribing into a Tailwind config.
pub fn tailwind_values(state: &ShadowState) -> String {
    if state.layers.is_empty() {
        return "No shadow".to_string();
    }

    state
        .layers
        .iter()
        .enumerate()
        .map(|(idx, layer)| {
            let rgba = format!(
                "rgba({}, {})",
                hex_to_rgb(&layer.color),
                to_fixed(layer.opacity / 100.0, 2)
            );
            match state.kind {
                ShadowType::BoxShadow => format!(
                    "Layer {}: {}px {}px {}px {}px {rgba}{}",
                    idx + 1,
                    JsNumber(layer.x),
                    JsNumber(layer.y),
                    JsNumber(layer.blur),
                    JsNumber(layer.spread),
                    if layer.inset { " inset" } else { "" }
                ),
                ShadowType::DropShadow => format!(
                    "Layer {}: {}px {}px {}px {rgba}",
                    idx + 1,
                    JsNumber(layer.x),
                    JsNumber(layer.y),
                    JsNumber(layer.blur)
                ),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Overwrite the first layer with `preset`, keeping its id.
///
/// A state without layers is returned unchanged.
pub fn apply_preset(state: &ShadowState, preset: ShadowPreset) -> ShadowState {
    let mut next = state.clone();
    let Some(first) = next.layers.first_mut() else {
        return next;
    };

    let (x, y, blur, spread, opacity, color) = preset.geometry();
    first.x = x;
    first.y = y;
    first.blur = blur;
    first.spread = spread;
    first.opacity = opacity;
    first.color = color.to_string();
    first.inset = false;
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn layer(id: &str, inset: bool) -> ShadowLayer {
        ShadowLayer {
            id: id.to_string(),
            x: 2.0,
            y: 4.0,
            blur: 8.0,
            spread: -1.0,
            opacity: 50.0,
            color: "#112233".to_string(),
            inset,
        }
    }

    #[test]
    fn box_shadow_joins_layers() {
        assert_eq!(
            box_shadow(&[layer("a", false), layer("b", true)]),
            "2px 4px 8px -1px #11223380, inset 2px 4px 8px -1px #11223380"
        );
    }

    #[test]
    fn drop_shadow_ignores_spread_and_inset() {
        assert_eq!(
            drop_shadow(&[layer("a", true), layer("b", false)]),
            "drop-shadow(2px 4px 8px #11223380) drop-shadow(2px 4px 8px #11223380)"
        );
    }

    #[test]
    fn empty_layers() {
        let state = ShadowState {
            layers: Vec::new(),
            kind: ShadowType::DropShadow,
            ..Default::default()
        };
        assert_eq!(shadow_css(&state, ShadowOutput::Standard), "box-shadow: none;");
        assert_eq!(tailwind_values(&state), "No shadow");
        assert_eq!(apply_preset(&state, ShadowPreset::Neon), state);
    }

    #[test]
    fn css_variable_output() {
        let state = ShadowState {
            kind: ShadowType::DropShadow,
            layers: vec![layer("a", false)],
            ..Default::default()
        };
        assert_eq!(
            shadow_css(&state, ShadowOutput::CssVariable),
            ":root {\n  --shadow: drop-shadow(2px 4px 8px #11223380);\n}\n\n.card {\n  filter: var(--shadow);\n}"
        );
    }

    #[test]
    fn default_state_output() {
        assert_eq!(
            shadow_css(&ShadowState::default(), ShadowOutput::Standard),
            "box-shadow: 0px 4px 12px 0px #00000026;"
        );
    }

    #[test]
    fn tailwind_lines() {
        let state = ShadowState {
            layers: vec![layer("a", false), layer("b", true)],
            ..Default::default()
        };
        assert_eq!(
            tailwind_values(&state),
            "Layer 1: 2px 4px 8px -1px rgba(17, 34, 51, 0.50)\nLayer 2: 2px 4px 8px -1px rgba(17, 34, 51, 0.50) inset"
        );
    }

    #[test]
    fn preset_replaces_first_layer_only() {
        let state = ShadowState {
            layers: vec![layer("keep-id", true), layer("second", false)],
            ..Default::default()
        };
        let next = apply_preset(&state, ShadowPreset::Neon);
        assert_eq!(next.layers[0].id, "keep-id");
        assert_eq!(next.layers[0].color, "#00ffff");
        assert_eq!(next.layers[0].blur, 20.0);
        assert!(!next.layers[0].inset);
        assert_eq!(next.layers[1], state.layers[1]);
    }
}
