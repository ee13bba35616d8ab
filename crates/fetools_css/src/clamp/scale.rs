//! Geometric type scales
//!
//! H6 is the body size (`ratio^0`) and every heading above multiplies by the
//! ratio once more, up to H1 at `ratio^5`. Small is the body size divided by
//! the ratio.

use super::expr::level_clamp;
use super::state::{ClampTypographyState, Level, ScaleRatio, TypographyLevel};

/// Resolve a ratio field and its custom companion to a concrete ratio.
pub fn resolve_ratio(ratio: ScaleRatio, custom_ratio: f64) -> f64 {
    ratio.resolve(custom_ratio)
}

/// Generate the scale for a body size range.
///
/// Always h1 through h6 then body, plus small when `include_small` is set.
/// H6 and body carry identical sizes but stay separate entries since they
/// map to different selectors.
pub fn typography_levels(
    size_min: f64,
    size_max: f64,
    ratio: f64,
    include_small: bool,
) -> Vec<TypographyLevel> {
    let mut levels = Vec::with_capacity(8);

    for (level, exponent) in Level::HEADINGS.into_iter().zip((0..=5).rev()) {
        let factor = ratio.powi(exponent);
        levels.push(TypographyLevel {
            level,
            min: size_min * factor,
            max: size_max * factor,
        });
    }

    levels.push(TypographyLevel {
        level: Level::Body,
        min: size_min,
        max: size_max,
    });

    if include_small {
        levels.push(TypographyLevel {
            level: Level::Small,
            min: size_min / ratio,
            max: size_max / ratio,
        });
    }

    levels
}

impl ClampTypographyState {
    /// The scale for this state's body range, ratio and small flag.
    pub fn typography_levels(&self) -> Vec<TypographyLevel> {
        let ratio = self.ratio_value();
        tracing::debug!(
            "ClampTypographyState::typography_levels - ratio {} (small: {})",
            ratio,
            self.include_small
        );
        typography_levels(
            self.typography.min,
            self.typography.max,
            ratio,
            self.include_small,
        )
    }

    /// One `font-size` rule per level, separated by blank lines.
    pub fn full_scale_css(&self, rem_base: f64) -> String {
        self.typography_levels()
            .iter()
            .map(|level| {
                format!(
                    "{} {{\n  font-size: {};\n}}",
                    level.level.tag(),
                    level_clamp(level, self.viewport, self.unit, rem_base)
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// The scale as `--fs-*` custom properties on `:root`, followed by rules
    /// applying them.
    pub fn full_scale_variables(&self, rem_base: f64) -> String {
        let declarations = self
            .typography_levels()
            .iter()
            .map(|level| {
                format!(
                    "  --fs-{}: {};",
                    level.level.tag(),
                    level_clamp(level, self.viewport, self.unit, rem_base)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let mut usage: Vec<String> = Level::HEADINGS
            .into_iter()
            .chain([Level::Body])
            .map(usage_rule)
            .collect();
        if self.include_small {
            usage.push(usage_rule(Level::Small));
        }

        format!(
            ":root {{\n{declarations}\n}}\n\n/* Usage */\n{}",
            usage.join("\n")
        )
    }
}

fn usage_rule(level: Level) -> String {
    let tag = level.tag();
    format!("{tag} {{ font-size: var(--fs-{tag}); }}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clamp::{Unit, ViewportRange};
    use pretty_assertions::assert_eq;

    fn tags(levels: &[TypographyLevel]) -> Vec<&'static str> {
        levels.iter().map(|l| l.level.tag()).collect()
    }

    #[test]
    fn scale_order_without_small() {
        let levels = typography_levels(16.0, 20.0, 1.25, false);
        assert_eq!(
            tags(&levels),
            vec!["h1", "h2", "h3", "h4", "h5", "h6", "body"]
        );
    }

    #[test]
    fn scale_order_with_small() {
        let levels = typography_levels(16.0, 20.0, 1.25, true);
        assert_eq!(
            tags(&levels),
            vec!["h1", "h2", "h3", "h4", "h5", "h6", "body", "small"]
        );
    }

    #[test]
    fn h6_matches_body_for_any_ratio() {
        for ratio in [1.05, 1.125, 1.333, 2.0] {
            let levels = typography_levels(15.0, 19.0, ratio, true);
            assert_eq!(levels[5].min, levels[6].min);
            assert_eq!(levels[5].max, levels[6].max);
        }
    }

    #[test]
    fn heading_sizes_follow_powers_of_the_ratio() {
        let levels = typography_levels(16.0, 20.0, 2.0, true);
        assert_eq!(levels[0].min, 512.0);
        assert_eq!(levels[0].max, 640.0);
        assert_eq!(levels[4].min, 32.0);
        assert_eq!(levels[7].min, 8.0);
        assert_eq!(levels[7].max, 10.0);
    }

    #[test]
    fn resolve_ratio_clamps_custom() {
        assert_eq!(resolve_ratio(ScaleRatio::Custom, 0.5), 1.05);
        assert_eq!(resolve_ratio(ScaleRatio::Custom, 10.0), 2.0);
        assert_eq!(resolve_ratio(ScaleRatio::Custom, 1.3), 1.3);
        assert_eq!(resolve_ratio(ScaleRatio::MinorThird, 1.9), 1.2);
    }

    #[test]
    fn full_scale_css_blocks() {
        let state = ClampTypographyState {
            viewport: ViewportRange::new(320.0, 320.0),
            unit: Unit::Px,
            scale_ratio: ScaleRatio::Custom,
            custom_ratio: 2.0,
            include_small: false,
            ..Default::default()
        };
        let css = state.full_scale_css(16.0);
        let blocks: Vec<&str> = css.split("\n\n").collect();
        assert_eq!(blocks.len(), 7);
        assert_eq!(blocks[0], "h1 {\n  font-size: clamp(448px, 448px, 576px);\n}");
        assert_eq!(blocks[6], "body {\n  font-size: clamp(14px, 14px, 18px);\n}");
    }

    #[test]
    fn full_scale_variables_with_small() {
        let state = ClampTypographyState {
            viewport: ViewportRange::new(320.0, 320.0),
            unit: Unit::Px,
            scale_ratio: ScaleRatio::Custom,
            custom_ratio: 2.0,
            include_small: true,
            ..Default::default()
        };
        let css = state.full_scale_variables(16.0);
        assert_eq!(
            css,
            ":root {\n  --fs-h1: clamp(448px, 448px, 576px);\n  --fs-h2: clamp(224px, 224px, 288px);\n  --fs-h3: clamp(112px, 112px, 144px);\n  --fs-h4: clamp(56px, 56px, 72px);\n  --fs-h5: clamp(28px, 28px, 36px);\n  --fs-h6: clamp(14px, 14px, 18px);\n  --fs-body: clamp(14px, 14px, 18px);\n  --fs-small: clamp(7px, 7px, 9px);\n}\n\n/* Usage */\nh1 { font-size: var(--fs-h1); }\nh2 { font-size: var(--fs-h2); }\nh3 { font-size: var(--fs-h3); }\nh4 { font-size: var(--fs-h4); }\nh5 { font-size: var(--fs-h5); }\nh6 { font-size: var(--fs-h6); }\nbody { font-size: var(--fs-body); }\nsmall { font-size: var(--fs-small); }"
        );
    }

    #[test]
    fn full_scale_variables_without_small_omits_small_usage() {
        let state = ClampTypographyState {
            include_small: false,
            ..Default::default()
        };
        let css = state.full_scale_variables(16.0);
        assert_eq!(css.matches("  --fs-").count(), 7);
        assert!(!css.contains("--fs-small"));
        assert!(css.ends_with("body { font-size: var(--fs-body); }"));
    }
}
