//! Glassmorphism panels

use serde::{Deserialize, Serialize};

use crate::color::hex_to_rgba;
use crate::number::JsNumber;
use crate::shadow::ShadowState;

/// Fractal noise SVG laid over the panel when noise is enabled.
const NOISE_DATA_URL: &str = "data:image/svg+xml,%3Csvg viewBox=%270 0 200 200%27 xmlns=%27http://www.w3.org/2000/svg%27%3E%3Cfilter id=%27noiseFilter%27%3E%3CfeTurbulence type=%27fractalNoise%27 baseFrequency=%270.9%27 numOctaves=%274%27 stitchTiles=%27stitch%27/%3E%3C/filter%3E%3Crect width=%27100%25%27 height=%27100%25%27 filter=%27url(%23noiseFilter)%27 opacity=%270.05%27/%3E%3C/svg%3E";

/// Black drop shadow under the panel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlassShadow {
    pub x: f64,
    pub y: f64,
    pub blur: f64,
    pub opacity: f64,
}

/// Complete state of the glass tool. Opacities are percentages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlassState {
    pub blur: f64,
    pub tint_color: String,
    pub tint_opacity: f64,
    pub background_brightness: f64,
    pub border_width: f64,
    pub border_color: String,
    pub border_opacity: f64,
    pub shadow: GlassShadow,
    pub noise_enabled: bool,
    pub custom_background: String,
    pub custom_text_color: String,
}

impl Default for GlassState {
    fn default() -> Self {
        Self {
            blur: 12.0,
            tint_color: "#ffffff".to_string(),
            tint_opacity: 20.0,
            background_brightness: 100.0,
            border_width: 1.0,
            border_color: "#ffffff".to_string(),
            border_opacity: 30.0,
            shadow: GlassShadow {
                x: 0.0,
                y: 8.0,
                blur: 32.0,
                opacity: 10.0,
            },
            noise_enabled: false,
            custom_background: String::new(),
            custom_text_color: "#ffffff".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTab {
    #[default]
    Shadow,
    Glass,
}

/// Shadow and glass tools share one stored blob.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShadowGlassState {
    pub active_tab: ActiveTab,
    pub shadow: ShadowState,
    pub glass: GlassState,
}

struct GlassParts {
    tint: String,
    border: String,
    blur: JsNumber,
    shadow: String,
}

fn parts(state: &GlassState) -> GlassParts {
    let shadow_rgba = hex_to_rgba("#000000", state.shadow.opacity / 100.0);
    GlassParts {
        tint: hex_to_rgba(&state.tint_color, state.tint_opacity / 100.0),
        border: format!(
            "{}px solid {}",
            JsNumber(state.border_width),
            hex_to_rgba(&state.border_color, state.border_opacity / 100.0)
        ),
        blur: JsNumber(state.blur),
        shadow: format!(
            "{}px {}px {}px {shadow_rgba}",
            JsNumber(state.shadow.x),
            JsNumber(state.shadow.y),
            JsNumber(state.shadow.blur)
        ),
    }
}

/// `.glass-panel` rule, plus a `::before` noise overlay when enabled.
pub fn glass_css(state: &GlassState) -> String {
    let GlassParts {
        tint,
        border,
        blur,
        shadow,
    } = parts(state);

    let mut css = String::from(".glass-panel {\n");
    css.push_str(&format!("  background: {tint};\n"));
    css.push_str(&format!("  border: {border};\n"));
    css.push_str(&format!("  backdrop-filter: blur({blur}px);\n"));
    css.push_str(&format!("  -webkit-backdrop-filter: blur({blur}px);\n"));
    css.push_str(&format!("  box-shadow: {shadow};\n"));

    if state.noise_enabled {
        css.push_str("  position: relative;\n");
        css.push_str("}\n\n");
        css.push_str(".glass-panel::before {\n");
        css.push_str("  content: '';\n");
        css.push_str("  position: absolute;\n");
        css.push_str("  inset: 0;\n");
        css.push_str(&format!("  background-image: url(\"{NOISE_DATA_URL}\");\n"));
        css.push_str("  pointer-events: none;\n");
        css.push_str("  border-radius: inherit;\n");
    }
    css.push('}');
    css
}

/// The panel declarations on one line, for an inline `style` attribute.
pub fn glass_preview_style(state: &GlassState) -> String {
    let GlassParts {
        tint,
        border,
        blur,
        shadow,
    } = parts(state);

    format!(
        "background: {tint}; border: {border}; backdrop-filter: blur({blur}px); -webkit-backdrop-filter: blur({blur}px); box-shadow: {shadow};"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_panel() {
        assert_eq!(
            glass_css(&GlassState::default()),
            ".glass-panel {\n  background: rgba(255, 255, 255, 0.20);\n  border: 1px solid rgba(255, 255, 255, 0.30);\n  backdrop-filter: blur(12px);\n  -webkit-backdrop-filter: blur(12px);\n  box-shadow: 0px 8px 32px rgba(0, 0, 0, 0.10);\n}"
        );
    }

    #[test]
    fn noise_adds_overlay_rule() {
        let state = GlassState {
            noise_enabled: true,
            ..Default::default()
        };
        let css = glass_css(&state);
        assert!(css.contains("  position: relative;\n}\n\n.glass-panel::before {\n"));
        assert!(css.contains("feTurbulence"));
        assert!(css.ends_with("  border-radius: inherit;\n}"));
    }

    #[test]
    fn preview_style_is_single_line() {
        let style = glass_preview_style(&GlassState::default());
        assert!(!style.contains('\n'));
        assert!(style.starts_with("background: rgba(255, 255, 255, 0.20); "));
        assert!(style.ends_with("box-shadow: 0px 8px 32px rgba(0, 0, 0, 0.10);"));
    }

    #[test]
    fn shadow_glass_state_uses_camel_case() {
        let json = serde_json::to_value(ShadowGlassState::default()).unwrap();
        assert_eq!(json["activeTab"], "shadow");
        assert_eq!(json["glass"]["tintColor"], "#ffffff");
        assert_eq!(json["shadow"]["type"], "box-shadow");
    }
}
