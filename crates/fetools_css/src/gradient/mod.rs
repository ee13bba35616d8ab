//! CSS gradients
//!
//! [`gradient_string`] builds the bare `*-gradient()` value and
//! [`generate_output`] wraps it into declarations for the selected
//! [`OutputMode`], optionally followed by a keyframe animation.

mod presets;
mod types;

pub use presets::{GradientPreset, PresetStop};
pub use types::*;

use crate::number::{js_round, JsNumber};

/// Name of the generated `@keyframes` rule.
pub const ANIMATION_NAME: &str = "gradient-animation";

/// Express a hex color with an opacity below 100 as `rgba()`.
///
/// Three-digit hex is expanded first. Anything that is not 3 or 6 digits is
/// returned unchanged, as is every color at full opacity.
pub fn hex_with_alpha(hex: &str, opacity: f64) -> String {
    if opacity == 100.0 {
        return hex.to_string();
    }

    let mut clean = hex.replacen('#', "", 1);
    if clean.chars().count() == 3 {
        clean = clean.chars().flat_map(|c| [c, c]).collect();
    }
    if clean.chars().count() != 6 {
        return hex.to_string();
    }

    let [r, g, b] = crate::color::hex_channels(&format!("#{clean}"));
    format!(
        "rgba({}, {}, {}, {})",
        JsNumber(r),
        JsNumber(g),
        JsNumber(b),
        JsNumber(opacity / 100.0)
    )
}

/// Stops ordered by position. Stops at equal positions keep their order.
pub fn sort_stops(stops: &[ColorStop]) -> Vec<ColorStop> {
    let mut sorted = stops.to_vec();
    sorted.sort_by(|a, b| a.position.total_cmp(&b.position));
    sorted
}

fn stop_list(state: &GradientState) -> String {
    sort_stops(&state.stops)
        .iter()
        .map(|stop| {
            format!(
                "{} {}%",
                hex_with_alpha(&stop.color, stop.opacity),
                JsNumber(stop.position)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// The gradient value for `state`, e.g. `linear-gradient(90deg, ...)`.
pub fn gradient_string(state: &GradientState) -> String {
    let stops = stop_list(state);

    match state.kind {
        GradientType::Linear => {
            format!("linear-gradient({}deg, {stops})", JsNumber(state.angle))
        }
        GradientType::Radial => {
            let position = match state.radial_position.keyword() {
                Some(keyword) => keyword.to_string(),
                None => format!("{}% {}%", JsNumber(state.radial_x), JsNumber(state.radial_y)),
            };
            format!(
                "radial-gradient({} at {position}, {stops})",
                state.radial_shape.keyword()
            )
        }
        GradientType::Conic => {
            let mut parts = Vec::new();
            if state.angle != 0.0 {
                parts.push(format!("from {}deg", JsNumber(state.angle)));
            }
            if state.conic_x != 50.0 || state.conic_y != 50.0 {
                parts.push(format!(
                    "at {}% {}%",
                    JsNumber(state.conic_x),
                    JsNumber(state.conic_y)
                ));
            }
            let prefix = if parts.is_empty() {
                String::new()
            } else {
                format!("{}, ", parts.join(" "))
            };
            format!("conic-gradient({prefix}{stops})")
        }
    }
}

/// Solid color for browsers without gradient support: the first stop.
pub fn fallback_color(state: &GradientState) -> String {
    match sort_stops(&state.stops).first() {
        Some(stop) => hex_with_alpha(&stop.color, stop.opacity),
        None => "#ffffff".to_string(),
    }
}

/// Animation duration in whole seconds for a 0-100 speed slider.
///
/// Faster sliders give shorter loops, bounded to `[3, 60]` seconds.
pub fn animation_duration(speed: f64) -> f64 {
    js_round(((100.0 - speed) / 1.75 + 3.0).clamp(3.0, 60.0))
}

fn keyframes(state: &GradientState) -> String {
    let stops = stop_list(state);
    let frame = |pct: &str, value: String| {
        format!("  {pct} {{\n    background: {value};\n  }}")
    };

    let frames = match state.kind {
        GradientType::Linear => vec![
            frame(
                "0%",
                format!("linear-gradient({}deg, {stops})", JsNumber(state.angle)),
            ),
            frame(
                "100%",
                format!("linear-gradient({}deg, {stops})", JsNumber(state.angle + 360.0)),
            ),
        ],
        GradientType::Radial => {
            let shape = state.radial_shape.keyword();
            let (x, y) = if state.radial_position == RadialPosition::Custom {
                (state.radial_x, state.radial_y)
            } else {
                (50.0, 50.0)
            };
            let at = |x: f64, y: f64| {
                format!(
                    "radial-gradient({shape} at {}% {}%, {stops})",
                    JsNumber(x),
                    JsNumber(y)
                )
            };
            vec![
                frame("0%", at(x, y)),
                frame("25%", at(x + 20.0, y)),
                frame("50%", at(x, y + 20.0)),
                frame("75%", at(x - 20.0, y)),
                frame("100%", at(x, y)),
            ]
        }
        GradientType::Conic => {
            let at = |angle: f64| {
                format!(
                    "conic-gradient(from {}deg at {}% {}%, {stops})",
                    JsNumber(angle),
                    JsNumber(state.conic_x),
                    JsNumber(state.conic_y)
                )
            };
            vec![
                frame("0%", at(state.angle)),
                frame("100%", at(state.angle + 360.0)),
            ]
        }
    };

    format!("@keyframes {ANIMATION_NAME} {{\n{}\n}}", frames.join("\n"))
}

/// Declarations for `state.output_mode`, plus the animation when enabled.
pub fn generate_output(state: &GradientState) -> String {
    let gradient = gradient_string(state);

    let mut css = match state.output_mode {
        OutputMode::Background => format!("background: {gradient};"),
        OutputMode::BackgroundImage => format!("background-image: {gradient};"),
        OutputMode::CssVariable => {
            format!("--gradient: {gradient};\nbackground: var(--gradient);")
        }
        OutputMode::WithFallback => {
            format!("background: {};\nbackground: {gradient};", fallback_color(state))
        }
    };

    if state.animate.unwrap_or(false) {
        let duration = animation_duration(state.animation_speed.unwrap_or(50.0));
        let easing = state.animation_easing.unwrap_or_default();
        css.push_str(&format!(
            "\nanimation: {ANIMATION_NAME} {}s {easing} infinite;",
            JsNumber(duration)
        ));
        css.push_str(&format!("\n\n/* Keyframes */\n{}", keyframes(state)));
    }

    css
}
