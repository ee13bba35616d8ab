//! Fluid typography commands: clamp, scale, preview, preset

use anyhow::Result;
use clap::Args;

use fetools_css::{
    apply_preset, format_value, level_size_for_viewport, ClampTypographyState, Level, Mode,
    PresetName, ScaleRatio, Unit,
};

use super::{load_or_default, persist, Context};

/// Field overrides applied on top of the stored typography state
#[derive(Args, Debug, Default, Clone)]
pub struct StateOverrides {
    /// Minimum body size in px
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<f64>,

    /// Maximum body size in px
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<f64>,

    /// Base body size in px (informational)
    #[arg(long, allow_negative_numbers = true)]
    pub base: Option<f64>,

    /// Viewport width where growth starts, in px
    #[arg(long, allow_negative_numbers = true)]
    pub vw_min: Option<f64>,

    /// Viewport width where growth stops, in px
    #[arg(long, allow_negative_numbers = true)]
    pub vw_max: Option<f64>,

    /// Output unit (px or rem)
    #[arg(long)]
    pub unit: Option<Unit>,

    /// Scale ratio: 1.125, 1.2, 1.25, 1.333, 1.414, a ratio id, or custom
    #[arg(long)]
    pub ratio: Option<ScaleRatio>,

    /// Ratio used when --ratio is custom (clamped to 1.05..=2)
    #[arg(long, allow_negative_numbers = true)]
    pub custom_ratio: Option<f64>,

    /// Include the small level in the scale
    #[arg(long, conflicts_with = "no_small")]
    pub small: bool,

    /// Leave the small level out of the scale
    #[arg(long)]
    pub no_small: bool,

    /// Persist the resulting state
    #[arg(long)]
    pub save: bool,
}

impl StateOverrides {
    pub fn apply(&self, state: &mut ClampTypographyState) {
        if let Some(min) = self.min {
            state.typography.min = min;
        }
        if let Some(max) = self.max {
            state.typography.max = max;
        }
        if let Some(base) = self.base {
            state.typography.base = base;
        }
        if let Some(vw_min) = self.vw_min {
            state.viewport.min = vw_min;
        }
        if let Some(vw_max) = self.vw_max {
            state.viewport.max = vw_max;
        }
        if let Some(unit) = self.unit {
            state.unit = unit;
        }
        if let Some(ratio) = self.ratio {
            state.scale_ratio = ratio;
        }
        if let Some(custom_ratio) = self.custom_ratio {
            state.custom_ratio = custom_ratio;
        }
        if self.small {
            state.include_small = true;
        }
        if self.no_small {
            state.include_small = false;
        }
    }
}

/// Load the stored state, apply overrides and save when asked.
fn resolve_state(ctx: &Context<'_>, overrides: &StateOverrides) -> Result<ClampTypographyState> {
    let mut state: ClampTypographyState = load_or_default(ctx.store);
    overrides.apply(&mut state);
    if overrides.save {
        persist(ctx.store, &state)?;
    }
    Ok(state)
}

#[derive(Args, Debug, Clone)]
pub struct ClampArgs {
    #[command(flatten)]
    pub overrides: StateOverrides,

    /// Wrap the expression in a :root custom property, optionally named with
    /// --variable=NAME (defaults to output.variable_name)
    #[arg(long, value_name = "NAME", num_args = 0..=1, require_equals = true)]
    pub variable: Option<Option<String>>,

    /// Emit a --space-fluid spacing token instead
    #[arg(long, conflicts_with = "variable")]
    pub spacing: bool,

    /// Add example rules after a spacing token
    #[arg(long, requires = "spacing")]
    pub usage: bool,
}

pub fn clamp(ctx: &Context<'_>, args: &ClampArgs) -> Result<String> {
    let state = resolve_state(ctx, &args.overrides)?;

    let css = if args.spacing && args.usage {
        state.spacing_token_with_usage(ctx.rem_base)
    } else if args.spacing {
        state.spacing_token(ctx.rem_base)
    } else if let Some(name) = &args.variable {
        let name = name.as_deref().unwrap_or(&ctx.variable_name);
        state.clamp_variable(name, ctx.rem_base)
    } else {
        state.clamp_css(ctx.rem_base)
    };
    Ok(css)
}

#[derive(Args, Debug, Clone)]
pub struct ScaleArgs {
    #[command(flatten)]
    pub overrides: StateOverrides,

    /// Emit --fs-* custom properties instead of selector rules
    #[arg(long)]
    pub vars: bool,
}

pub fn scale(ctx: &Context<'_>, args: &ScaleArgs) -> Result<String> {
    let state = resolve_state(ctx, &args.overrides)?;
    tracing::debug!(
        "scale: ratio {} over {} levels",
        state.ratio_value(),
        state.typography_levels().len()
    );

    Ok(if args.vars {
        state.full_scale_variables(ctx.rem_base)
    } else {
        state.full_scale_css(ctx.rem_base)
    })
}

#[derive(Args, Debug, Clone)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub overrides: StateOverrides,

    /// Viewport width to evaluate at, in px
    #[arg(long, allow_negative_numbers = true)]
    pub width: f64,

    /// Scale level to evaluate (defaults to the body range)
    #[arg(long)]
    pub level: Option<Level>,

    /// Print every level of the scale
    #[arg(long, conflicts_with = "level")]
    pub all: bool,
}

pub fn preview(ctx: &Context<'_>, args: &PreviewArgs) -> Result<String> {
    let state = resolve_state(ctx, &args.overrides)?;

    if args.all {
        let lines: Vec<String> = state
            .typography_levels()
            .iter()
            .map(|level| {
                let size = level_size_for_viewport(args.width, level, state.viewport);
                format!("{}: {}", level.level, format_value(size, state.unit, ctx.rem_base))
            })
            .collect();
        return Ok(lines.join("\n"));
    }

    match args.level {
        Some(wanted) => {
            let levels = state.typography_levels();
            let level = levels
                .iter()
                .find(|level| level.level == wanted)
                .ok_or_else(|| anyhow::anyhow!("level {wanted} is not in the scale (enable --small)"))?;
            let size = level_size_for_viewport(args.width, level, state.viewport);
            Ok(format_value(size, state.unit, ctx.rem_base))
        }
        None => Ok(state.format_size_for_viewport(args.width, ctx.rem_base)),
    }
}

#[derive(Args, Debug, Clone)]
pub struct PresetArgs {
    /// Preset name: body, small, h1, h2, h3 or spacing
    pub preset: PresetName,

    /// Switch the tool mode before applying the preset
    #[arg(long)]
    pub mode: Option<Mode>,
}

/// Apply a preset to the stored state and save it.
pub fn preset(ctx: &Context<'_>, args: &PresetArgs) -> Result<String> {
    let mut state: ClampTypographyState = load_or_default(ctx.store);
    if let Some(mode) = args.mode {
        state.mode = mode;
    }

    state.apply_patch(apply_preset(args.preset, state.mode));
    persist(ctx.store, &state)?;

    Ok(match state.mode {
        Mode::Spacing => state.spacing_token(ctx.rem_base),
        Mode::Typography => state.clamp_css(ctx.rem_base),
    })
}
