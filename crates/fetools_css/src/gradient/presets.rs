//! Built-in gradient presets.

use super::types::{ColorStop, GradientState, GradientType, RadialPosition, RadialShape};
use crate::error::UnknownName;

/// A preset stop; ids are assigned when the preset is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresetStop {
    pub color: &'static str,
    pub position: f64,
    pub opacity: f64,
}

const fn stop(color: &'static str, position: f64) -> PresetStop {
    PresetStop {
        color,
        position,
        opacity: 100.0,
    }
}

/// A named gradient. Fields left as `None` keep the current state's value
/// when applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientPreset {
    pub name: &'static str,
    pub kind: GradientType,
    pub angle: Option<f64>,
    pub radial_shape: Option<RadialShape>,
    pub radial_position: Option<RadialPosition>,
    pub radial_x: Option<f64>,
    pub radial_y: Option<f64>,
    pub conic_x: Option<f64>,
    pub conic_y: Option<f64>,
    pub stops: &'static [PresetStop],
}

impl GradientPreset {
    const fn linear(name: &'static str, angle: f64, stops: &'static [PresetStop]) -> Self {
        Self {
            name,
            kind: GradientType::Linear,
            angle: Some(angle),
            radial_shape: None,
            radial_position: None,
            radial_x: None,
            radial_y: None,
            conic_x: None,
            conic_y: None,
            stops,
        }
    }

    /// Every built-in preset, in display order.
    pub fn all() -> &'static [GradientPreset] {
        &PRESETS
    }

    /// Look a preset up by its display name, ignoring ASCII case.
    pub fn find(name: &str) -> Result<&'static GradientPreset, UnknownName> {
        PRESETS
            .iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                UnknownName::new("gradient preset", name, PRESETS.iter().map(|p| p.name))
            })
    }

    /// Overlay this preset on `base`, giving stops fresh `stop-N` ids.
    pub fn apply(&self, base: &GradientState) -> GradientState {
        GradientState {
            kind: self.kind,
            angle: self.angle.unwrap_or(base.angle),
            radial_shape: self.radial_shape.unwrap_or(base.radial_shape),
            radial_position: self.radial_position.unwrap_or(base.radial_position),
            radial_x: self.radial_x.unwrap_or(base.radial_x),
            radial_y: self.radial_y.unwrap_or(base.radial_y),
            conic_x: self.conic_x.unwrap_or(base.conic_x),
            conic_y: self.conic_y.unwrap_or(base.conic_y),
            stops: self
                .stops
                .iter()
                .enumerate()
                .map(|(idx, s)| ColorStop {
                    id: format!("stop-{}", idx + 1),
                    color: s.color.to_string(),
                    position: s.position,
                    opacity: s.opacity,
                })
                .collect(),
            selected_stop_id: None,
            ..base.clone()
        }
    }
}

static PRESETS: [GradientPreset; 81] = [
    GradientPreset::linear("Warm Sand", 135.0, &[stop("#fdfbfb", 0.0), stop("#ebedee", 100.0)]),
    GradientPreset::linear("Cloudy", 135.0, &[stop("#f5f7fa", 0.0), stop("#c3cfe2", 100.0)]),
    GradientPreset::linear("Paper", 135.0, &[stop("#ffffff", 0.0), stop("#f0f0f0", 100.0)]),
    GradientPreset::linear("Stone", 135.0, &[stop("#e6e9f0", 0.0), stop("#eef1f5", 100.0)]),
    GradientPreset::linear("Ash", 135.0, &[stop("#d7d2cc", 0.0), stop("#304352", 100.0)]),
    GradientPreset::linear("Ivory", 135.0, &[stop("#fafafa", 0.0), stop("#eaeaea", 100.0)]),
    GradientPreset::linear("Fog", 135.0, &[stop("#dfe9f3", 0.0), stop("#ffffff", 100.0)]),
    GradientPreset::linear("Latte", 135.0, &[stop("#c79081", 0.0), stop("#dfa579", 100.0)]),
    GradientPreset::linear("Mocha", 135.0, &[stop("#8b6f47", 0.0), stop("#c49a6c", 100.0)]),
    GradientPreset::linear("Cappuccino", 135.0, &[stop("#a47148", 0.0), stop("#d2b48c", 100.0)]),
    GradientPreset::linear("Espresso", 135.0, &[stop("#3e2723", 0.0), stop("#6f4e37", 100.0)]),
    GradientPreset::linear("Caramel", 135.0, &[stop("#c68642", 0.0), stop("#e0ac69", 100.0)]),
    GradientPreset::linear("Toffee", 135.0, &[stop("#b87333", 0.0), stop("#f4c27a", 100.0)]),
    GradientPreset::linear(
        "Midnight",
        135.0,
        &[
            stop("#0f2027", 0.0),
            stop("#203a43", 50.0),
            stop("#2c5364", 100.0),
        ],
    ),
    GradientPreset::linear("Carbon", 135.0, &[stop("#232526", 0.0), stop("#414345", 100.0)]),
    GradientPreset::linear("Obsidian", 135.0, &[stop("#141e30", 0.0), stop("#243b55", 100.0)]),
    GradientPreset::linear("Deep Space", 135.0, &[stop("#000428", 0.0), stop("#004e92", 100.0)]),
    GradientPreset::linear("Graphite", 135.0, &[stop("#3c3b3f", 0.0), stop("#605c3c", 100.0)]),
    GradientPreset::linear("Ultra Violet", 135.0, &[stop("#654ea3", 0.0), stop("#eaafc8", 100.0)]),
    GradientPreset::linear("Royal Purple", 135.0, &[stop("#41295a", 0.0), stop("#2f0743", 100.0)]),
    GradientPreset::linear("Neon Violet", 135.0, &[stop("#8e2de2", 0.0), stop("#4a00e0", 100.0)]),
    GradientPreset::linear("Plum", 135.0, &[stop("#5f2c82", 0.0), stop("#49a09d", 100.0)]),
    GradientPreset::linear("Lavender", 135.0, &[stop("#b993d6", 0.0), stop("#8ca6db", 100.0)]),
    GradientPreset::linear("Sunset", 135.0, &[stop("#ff512f", 0.0), stop("#dd2476", 100.0)]),
    GradientPreset::linear("Peach", 135.0, &[stop("#ed4264", 0.0), stop("#ffedbc", 100.0)]),
    GradientPreset::linear("Mango", 135.0, &[stop("#ffe259", 0.0), stop("#ffa751", 100.0)]),
    GradientPreset::linear("Fire", 135.0, &[stop("#f12711", 0.0), stop("#f5af19", 100.0)]),
    GradientPreset::linear("Candy", 135.0, &[stop("#d53369", 0.0), stop("#cbad6d", 100.0)]),
    GradientPreset::linear("Ocean", 135.0, &[stop("#2193b0", 0.0), stop("#6dd5ed", 100.0)]),
    GradientPreset::linear("Sky", 135.0, &[stop("#2980b9", 0.0), stop("#6dd5fa", 100.0)]),
    GradientPreset::linear("Azure", 135.0, &[stop("#0072ff", 0.0), stop("#00c6ff", 100.0)]),
    GradientPreset::linear("Arctic", 135.0, &[stop("#e0eafc", 0.0), stop("#cfdef3", 100.0)]),
    GradientPreset::linear("Deep Blue", 135.0, &[stop("#2c3e50", 0.0), stop("#3498db", 100.0)]),
    GradientPreset::linear("Emerald", 135.0, &[stop("#348f50", 0.0), stop("#56b4d3", 100.0)]),
    GradientPreset::linear("Mint", 135.0, &[stop("#76b852", 0.0), stop("#8dc26f", 100.0)]),
    GradientPreset::linear("Forest", 135.0, &[stop("#134e5e", 0.0), stop("#71b280", 100.0)]),
    GradientPreset::linear("Lime", 135.0, &[stop("#a8e063", 0.0), stop("#56ab2f", 100.0)]),
    GradientPreset::linear("Jade", 135.0, &[stop("#00b09b", 0.0), stop("#96c93d", 100.0)]),
    GradientPreset::linear("Soft Glow", 135.0, &[stop("#fdfcfb", 0.0), stop("#e2d1c3", 100.0)]),
    GradientPreset::linear("Rose Dust", 135.0, &[stop("#e6dada", 0.0), stop("#274046", 100.0)]),
    GradientPreset::linear("Cream", 135.0, &[stop("#fffbd5", 0.0), stop("#b20a2c", 100.0)]),
    GradientPreset::linear("Blush", 135.0, &[stop("#fbc2eb", 0.0), stop("#a6c1ee", 100.0)]),
    GradientPreset::linear("Pearl", 135.0, &[stop("#f5f7fa", 0.0), stop("#c3cfe2", 100.0)]),
    GradientPreset::linear("Cyberpunk", 135.0, &[stop("#ff00cc", 0.0), stop("#333399", 100.0)]),
    GradientPreset::linear("Aurora", 135.0, &[stop("#00c3ff", 0.0), stop("#ffff1c", 100.0)]),
    GradientPreset::linear("Synthwave", 135.0, &[stop("#f953c6", 0.0), stop("#b91d73", 100.0)]),
    GradientPreset::linear("Hologram", 135.0, &[stop("#00dbde", 0.0), stop("#fc00ff", 100.0)]),
    GradientPreset::linear(
        "Neon Blue Pink",
        135.0,
        &[
            stop("#396afc", 0.0),
            stop("#2948ff", 100.0),
        ],
    ),
    GradientPreset::linear("Haikus", 135.0, &[stop("#fd746c", 0.0), stop("#ff9068", 100.0)]),
    GradientPreset::linear("Grade Grey", 135.0, &[stop("#bdc3c7", 0.0), stop("#2c3e50", 100.0)]),
    GradientPreset::linear("Sublime Light", 135.0, &[stop("#fc5c7d", 0.0), stop("#6a82fb", 100.0)]),
    GradientPreset::linear("Sublime Vivid", 135.0, &[stop("#fc466b", 0.0), stop("#3f5efb", 100.0)]),
    GradientPreset::linear("Aubergine", 135.0, &[stop("#aa076b", 0.0), stop("#61045f", 100.0)]),
    GradientPreset::linear("Purple Love", 135.0, &[stop("#cc2b5e", 0.0), stop("#753a88", 100.0)]),
    GradientPreset::linear("Piggy Pink", 135.0, &[stop("#ee9ca7", 0.0), stop("#ffdde1", 100.0)]),
    GradientPreset::linear("Kashmir", 135.0, &[stop("#614385", 0.0), stop("#516395", 100.0)]),
    GradientPreset::linear(
        "Dance To Forget",
        135.0,
        &[
            stop("#ff4e50", 0.0),
            stop("#f9d423", 100.0),
        ],
    ),
    GradientPreset::linear(
        "Instagram",
        135.0,
        &[
            stop("#833ab4", 0.0),
            stop("#fd1d1d", 50.0),
            stop("#fcb045", 100.0),
        ],
    ),
    GradientPreset::linear("SoundCloud", 135.0, &[stop("#fe8c00", 0.0), stop("#f83600", 100.0)]),
    GradientPreset::linear("eXpresso", 135.0, &[stop("#ad5389", 0.0), stop("#3c1053", 100.0)]),
    GradientPreset::linear("Influenza", 135.0, &[stop("#c04848", 0.0), stop("#480048", 100.0)]),
    GradientPreset::linear("Anamnisar", 135.0, &[stop("#9796f0", 0.0), stop("#fbc7d4", 100.0)]),
    GradientPreset::linear("Shore", 135.0, &[stop("#70e1f5", 0.0), stop("#ffd194", 100.0)]),
    GradientPreset::linear("Quepal", 135.0, &[stop("#11998e", 0.0), stop("#38ef7d", 100.0)]),
    GradientPreset::linear(
        "Wiretap",
        135.0,
        &[
            stop("#8a2387", 0.0),
            stop("#e94057", 50.0),
            stop("#f27121", 100.0),
        ],
    ),
    GradientPreset::linear("Virgin", 135.0, &[stop("#c9ffbf", 0.0), stop("#ffafbd", 100.0)]),
    GradientPreset::linear("Flickr", 135.0, &[stop("#ff0084", 0.0), stop("#33001b", 100.0)]),
    GradientPreset::linear("Mango Pulp", 135.0, &[stop("#f09819", 0.0), stop("#edde5d", 100.0)]),
    GradientPreset::linear("Sea Blue", 135.0, &[stop("#2b5876", 0.0), stop("#4e4376", 100.0)]),
    GradientPreset::linear("Noon to Dusk", 135.0, &[stop("#ff6e7f", 0.0), stop("#bfe9ff", 100.0)]),
    GradientPreset::linear("Lemon Twist", 135.0, &[stop("#3ca55c", 0.0), stop("#b5ac49", 100.0)]),
    GradientPreset::linear("Dracula", 135.0, &[stop("#dc2424", 0.0), stop("#4a569d", 100.0)]),
    GradientPreset::linear(
        "Visions of Grandeur",
        135.0,
        &[
            stop("#000046", 0.0),
            stop("#1cb5e0", 100.0),
        ],
    ),
    GradientPreset::linear(
        "JShine",
        135.0,
        &[
            stop("#12c2e9", 0.0),
            stop("#c471ed", 50.0),
            stop("#f64f59", 100.0),
        ],
    ),
    GradientPreset::linear(
        "Relay",
        135.0,
        &[
            stop("#3a1c71", 0.0),
            stop("#d76d77", 50.0),
            stop("#ffaf7b", 100.0),
        ],
    ),
    GradientPreset::linear("Endless River", 135.0, &[stop("#43cea2", 0.0), stop("#185a9d", 100.0)]),
    GradientPreset::linear(
        "MegaTron",
        135.0,
        &[
            stop("#c6ffdd", 0.0),
            stop("#fbd786", 50.0),
            stop("#f7797d", 100.0),
        ],
    ),
    GradientPreset::linear("Kye Meh", 135.0, &[stop("#8360c3", 0.0), stop("#2ebf91", 100.0)]),
    GradientPreset::linear("Combi", 135.0, &[stop("#00416a", 0.0), stop("#e4e5e6", 100.0)]),
    GradientPreset::linear("Horizon", 135.0, &[stop("#003973", 0.0), stop("#e5e5be", 100.0)]),
    GradientPreset::linear("Man of Steel", 135.0, &[stop("#780206", 0.0), stop("#061161", 100.0)]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_names_are_unique() {
        let mut names: Vec<&str> = GradientPreset::all().iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), GradientPreset::all().len());
    }

    #[test]
    fn presets_have_sorted_stops_spanning_the_range() {
        for preset in GradientPreset::all() {
            let first = preset.stops.first().unwrap();
            let last = preset.stops.last().unwrap();
            assert_eq!(first.position, 0.0, "{}", preset.name);
            assert_eq!(last.position, 100.0, "{}", preset.name);
        }
    }

    #[test]
    fn find_ignores_case() {
        assert_eq!(GradientPreset::find("deep space").unwrap().name, "Deep Space");
        assert!(GradientPreset::find("Nope").is_err());
    }

    #[test]
    fn apply_assigns_ids_and_keeps_output_settings() {
        let base = GradientState {
            angle: 10.0,
            show_checkerboard: true,
            selected_stop_id: Some("stop-9".to_string()),
            ..Default::default()
        };
        let state = GradientPreset::find("Midnight").unwrap().apply(&base);
        assert_eq!(state.angle, 135.0);
        assert!(state.show_checkerboard);
        assert_eq!(state.selected_stop_id, None);
        let ids: Vec<&str> = state.stops.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["stop-1", "stop-2", "stop-3"]);
        assert_eq!(state.stops[1].color, "#203a43");
    }
}
