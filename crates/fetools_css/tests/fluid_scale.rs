use fetools_css::{
    apply_preset, clamp_expression, format_value, round4, size_for_viewport, typography_levels,
    ClampTypographyState, Level, Mode, PresetName, ScaleRatio, SizeRange, Unit, ViewportRange,
    DEFAULT_REM_BASE,
};
use pretty_assertions::assert_eq;

fn state(unit: Unit, include_small: bool) -> ClampTypographyState {
    ClampTypographyState {
        unit,
        include_small,
        ..Default::default()
    }
}

#[test]
fn body_clamp_in_px() {
    assert_eq!(
        clamp_expression(
            14.0,
            18.0,
            ViewportRange::new(320.0, 1440.0),
            Unit::Px,
            DEFAULT_REM_BASE
        ),
        "clamp(14px, calc(14px + 4px * ((100vw - 320px) / 1120)), 18px)"
    );
}

#[test]
fn degenerate_viewport_for_every_level() {
    let mut state = state(Unit::Rem, true);
    state.viewport = ViewportRange::new(1024.0, 768.0);

    for level in state.typography_levels() {
        let min = format_value(level.min, Unit::Rem, DEFAULT_REM_BASE);
        let max = format_value(level.max, Unit::Rem, DEFAULT_REM_BASE);
        assert_eq!(
            fetools_css::level_clamp(&level, state.viewport, Unit::Rem, DEFAULT_REM_BASE),
            format!("clamp({min}, {min}, {max})")
        );
    }
}

#[test]
fn rem_formatting_matches_two_stage_rounding() {
    for (value, base) in [(17.3333, 16.0), (22.51, 18.0), (0.00013, 0.5), (31.7, 10.0)] {
        let expected = format!("{}rem", fetools_css::JsNumber(round4(round4(value) / base)));
        assert_eq!(format_value(value, Unit::Rem, base), expected);
    }
}

#[test]
fn level_count_follows_small_flag() {
    assert_eq!(state(Unit::Px, false).typography_levels().len(), 7);
    assert_eq!(state(Unit::Px, true).typography_levels().len(), 8);

    let levels = typography_levels(14.0, 18.0, 1.414, true);
    let tags: Vec<Level> = levels.iter().map(|l| l.level).collect();
    assert_eq!(
        tags,
        vec![
            Level::H1,
            Level::H2,
            Level::H3,
            Level::H4,
            Level::H5,
            Level::H6,
            Level::Body,
            Level::Small
        ]
    );
}

#[test]
fn custom_ratio_drives_the_scale() {
    let mut state = state(Unit::Px, false);
    state.scale_ratio = ScaleRatio::Custom;
    state.custom_ratio = 10.0;
    assert_eq!(state.ratio_value(), 2.0);
    assert_eq!(state.typography_levels()[0].min, 14.0 * 32.0);

    state.custom_ratio = 0.5;
    assert_eq!(state.ratio_value(), 1.05);
}

#[test]
fn full_scale_variable_lines_match_levels() {
    for include_small in [false, true] {
        let state = state(Unit::Rem, include_small);
        let css = state.full_scale_variables(DEFAULT_REM_BASE);
        let root = css.split("\n\n/* Usage */\n").next().unwrap();
        let declarations = root.lines().filter(|l| l.starts_with("  --fs-")).count();
        assert_eq!(declarations, state.typography_levels().len());

        for tag in ["h1", "h2", "h3", "h4", "h5", "h6", "body"] {
            assert!(css.contains(&format!("{tag} {{ font-size: var(--fs-{tag}); }}")));
        }
        assert_eq!(
            css.contains("small { font-size: var(--fs-small); }"),
            include_small
        );
    }
}

#[test]
fn full_scale_css_uses_level_selectors() {
    let css = state(Unit::Px, true).full_scale_css(DEFAULT_REM_BASE);
    let selectors: Vec<&str> = css
        .split("\n\n")
        .map(|block| block.split(' ').next().unwrap())
        .collect();
    assert_eq!(
        selectors,
        vec!["h1", "h2", "h3", "h4", "h5", "h6", "body", "small"]
    );
}

#[test]
fn preview_matches_interpolation() {
    let viewport = ViewportRange::new(320.0, 1440.0);
    assert_eq!(size_for_viewport(0.0, 14.0, 18.0, viewport), 14.0);
    assert_eq!(size_for_viewport(5000.0, 14.0, 18.0, viewport), 18.0);
    assert_eq!(size_for_viewport(880.0, 14.0, 18.0, viewport), 16.0);
}

#[test]
fn h1_preset_as_spacing() {
    let mut state = state(Unit::Px, true);
    state.apply_patch(apply_preset(PresetName::H1, Mode::Spacing));
    assert_eq!(state.typography, SizeRange::new(14.0, 24.0, 18.0));
    assert_eq!(state.preset, Some(PresetName::Spacing));
    assert_eq!(
        state.spacing_token(DEFAULT_REM_BASE),
        ":root {\n  --space-fluid: clamp(14px, calc(14px + 10px * ((100vw - 320px) / 1120)), 24px);\n}"
    );
}
