//! Single-value clamp() expressions and viewport previews

use super::state::{ClampTypographyState, TypographyLevel, Unit, ViewportRange};
use crate::number::{round4, JsNumber};

/// Root font size used for px to rem conversion when none is configured.
pub const DEFAULT_REM_BASE: f64 = 16.0;

/// Custom property used by [`ClampTypographyState::clamp_variable`] by default.
pub const DEFAULT_VARIABLE_NAME: &str = "--fluid-size";

/// Format a pixel value in `unit`.
///
/// The pixel value is rounded to 4 decimals first. For rem output that
/// rounded value is divided by `rem_base` and rounded to 4 decimals again.
pub fn format_value(value: f64, unit: Unit, rem_base: f64) -> String {
    let rounded = round4(value);
    match unit {
        Unit::Rem => format!("{}rem", JsNumber(round4(rounded / rem_base))),
        Unit::Px => format!("{}px", JsNumber(rounded)),
    }
}

/// Build a `clamp()` that grows from `size_min` to `size_max` across the
/// viewport range.
///
/// A degenerate viewport (`max <= min`) yields `clamp(MIN, MIN, MAX)`.
/// Viewport numbers are always emitted as raw pixels.
pub fn clamp_expression(
    size_min: f64,
    size_max: f64,
    viewport: ViewportRange,
    unit: Unit,
    rem_base: f64,
) -> String {
    let min_value = format_value(size_min, unit, rem_base);
    let max_value = format_value(size_max, unit, rem_base);

    if viewport.is_degenerate() {
        return format!("clamp({min_value}, {min_value}, {max_value})");
    }

    let size_diff = format_value(size_max - size_min, unit, rem_base);
    let vw_diff = viewport.max - viewport.min;

    format!(
        "clamp({min_value}, calc({min_value} + {size_diff} * ((100vw - {}px) / {})), {max_value})",
        JsNumber(viewport.min),
        JsNumber(vw_diff),
    )
}

/// [`clamp_expression`] for one level of a generated scale.
pub fn level_clamp(
    level: &TypographyLevel,
    viewport: ViewportRange,
    unit: Unit,
    rem_base: f64,
) -> String {
    clamp_expression(level.min, level.max, viewport, unit, rem_base)
}

/// The size a browser would render for `clamp_expression(size_min, size_max,
/// viewport, ..)` at `viewport_width`.
pub fn size_for_viewport(
    viewport_width: f64,
    size_min: f64,
    size_max: f64,
    viewport: ViewportRange,
) -> f64 {
    if viewport_width <= viewport.min {
        return size_min;
    }
    if viewport_width >= viewport.max {
        return size_max;
    }

    let progress = (viewport_width - viewport.min) / (viewport.max - viewport.min);
    size_min + (size_max - size_min) * progress
}

/// [`size_for_viewport`] for one level of a generated scale.
pub fn level_size_for_viewport(
    viewport_width: f64,
    level: &TypographyLevel,
    viewport: ViewportRange,
) -> f64 {
    size_for_viewport(viewport_width, level.min, level.max, viewport)
}

impl ClampTypographyState {
    /// The body clamp() expression.
    pub fn clamp_css(&self, rem_base: f64) -> String {
        clamp_expression(
            self.typography.min,
            self.typography.max,
            self.viewport,
            self.unit,
            rem_base,
        )
    }

    /// The body clamp() bound to a custom property, with a usage rule.
    pub fn clamp_variable(&self, variable_name: &str, rem_base: f64) -> String {
        format!(
            ":root {{\n  {variable_name}: {};\n}}\n\n.element {{\n  font-size: var({variable_name});\n}}",
            self.clamp_css(rem_base)
        )
    }

    /// Body size at `viewport_width`, in pixels.
    pub fn size_for_viewport(&self, viewport_width: f64) -> f64 {
        size_for_viewport(
            viewport_width,
            self.typography.min,
            self.typography.max,
            self.viewport,
        )
    }

    /// Body size at `viewport_width`, formatted in the state's unit.
    pub fn format_size_for_viewport(&self, viewport_width: f64, rem_base: f64) -> String {
        format_value(self.size_for_viewport(viewport_width), self.unit, rem_base)
    }

    /// The body clamp() as a `--space-fluid` token.
    pub fn spacing_token(&self, rem_base: f64) -> String {
        format!(
            ":root {{\n  --space-fluid: {};\n}}",
            self.clamp_css(rem_base)
        )
    }

    /// [`Self::spacing_token`] followed by example rules using it.
    pub fn spacing_token_with_usage(&self, rem_base: f64) -> String {
        format!(
            "{}\n\n/* Usage */\n.stack {{\n  gap: var(--space-fluid);\n}}\n\n.card {{\n  padding: calc(var(--space-fluid) * 1.5);\n}}\n\n.section {{\n  margin-bottom: var(--space-fluid);\n}}",
            self.spacing_token(rem_base)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const VIEWPORT: ViewportRange = ViewportRange::new(320.0, 1440.0);

    #[test]
    fn px_values_are_rounded_to_four_decimals() {
        assert_eq!(format_value(14.0, Unit::Px, 16.0), "14px");
        assert_eq!(format_value(17.57812, Unit::Px, 16.0), "17.5781px");
        assert_eq!(format_value(-4.0, Unit::Px, 16.0), "-4px");
    }

    #[test]
    fn rem_values_divide_by_rem_base() {
        assert_eq!(format_value(14.0, Unit::Rem, 16.0), "0.875rem");
        assert_eq!(format_value(18.0, Unit::Rem, 16.0), "1.125rem");
        assert_eq!(format_value(20.0, Unit::Rem, 10.0), "2rem");
    }

    #[test]
    fn rem_values_are_rounded_twice() {
        // 0.00013px rounds to 0.0001px first; halving the base doubles it.
        // Rounding once would give 0.0003rem instead.
        assert_eq!(format_value(0.00013, Unit::Rem, 0.5), "0.0002rem");
    }

    #[test]
    fn nan_propagates_into_text() {
        assert_eq!(format_value(f64::NAN, Unit::Px, 16.0), "NaNpx");
    }

    #[test]
    fn px_clamp_expression() {
        assert_eq!(
            clamp_expression(14.0, 18.0, VIEWPORT, Unit::Px, 16.0),
            "clamp(14px, calc(14px + 4px * ((100vw - 320px) / 1120)), 18px)"
        );
    }

    #[test]
    fn rem_clamp_expression() {
        assert_eq!(
            clamp_expression(14.0, 18.0, VIEWPORT, Unit::Rem, 16.0),
            "clamp(0.875rem, calc(0.875rem + 0.25rem * ((100vw - 320px) / 1120)), 1.125rem)"
        );
    }

    #[test]
    fn shrinking_scale_keeps_negative_coefficient() {
        assert_eq!(
            clamp_expression(18.0, 14.0, VIEWPORT, Unit::Px, 16.0),
            "clamp(18px, calc(18px + -4px * ((100vw - 320px) / 1120)), 14px)"
        );
    }

    #[test]
    fn degenerate_viewport_collapses_to_min() {
        for viewport in [ViewportRange::new(800.0, 800.0), ViewportRange::new(1440.0, 320.0)] {
            assert_eq!(
                clamp_expression(14.0, 18.0, viewport, Unit::Px, 16.0),
                "clamp(14px, 14px, 18px)"
            );
        }
    }

    #[test]
    fn interpolation_clamps_outside_the_range() {
        assert_eq!(size_for_viewport(100.0, 14.0, 18.0, VIEWPORT), 14.0);
        assert_eq!(size_for_viewport(320.0, 14.0, 18.0, VIEWPORT), 14.0);
        assert_eq!(size_for_viewport(2000.0, 14.0, 18.0, VIEWPORT), 18.0);
        assert_eq!(size_for_viewport(880.0, 14.0, 18.0, VIEWPORT), 16.0);
    }

    #[test]
    fn formatted_preview_uses_state_unit() {
        let state = ClampTypographyState {
            unit: Unit::Rem,
            ..Default::default()
        };
        assert_eq!(state.format_size_for_viewport(880.0, 16.0), "1rem");
    }

    #[test]
    fn clamp_variable_wraps_expression() {
        let state = ClampTypographyState {
            unit: Unit::Px,
            ..Default::default()
        };
        assert_eq!(
            state.clamp_variable("--fluid-size", 16.0),
            ":root {\n  --fluid-size: clamp(14px, calc(14px + 4px * ((100vw - 320px) / 1120)), 18px);\n}\n\n.element {\n  font-size: var(--fluid-size);\n}"
        );
    }

    #[test]
    fn spacing_token_usage_block() {
        let state = ClampTypographyState {
            unit: Unit::Px,
            viewport: ViewportRange::new(320.0, 320.0),
            ..Default::default()
        };
        let css = state.spacing_token_with_usage(16.0);
        assert!(css.starts_with(":root {\n  --space-fluid: clamp(14px, 14px, 18px);\n}\n\n/* Usage */\n"));
        assert!(css.ends_with(".section {\n  margin-bottom: var(--space-fluid);\n}"));
    }
}
