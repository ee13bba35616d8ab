//! Shadow and glass commands, sharing one stored blob

use anyhow::Result;
use clap::Args;

use fetools_css::shadow::{apply_preset as apply_shadow_preset, shadow_css, tailwind_values};
use fetools_css::{
    glass_css, glass_preview_style, ActiveTab, ShadowGlassState, ShadowOutput, ShadowPreset,
};

use super::{load_or_default, persist, Context};

#[derive(Args, Debug, Clone)]
pub struct ShadowArgs {
    /// Overwrite the first layer with a preset: subtle, medium, strong, neon
    #[arg(long)]
    pub preset: Option<ShadowPreset>,

    /// Route the shadow through a --shadow custom property
    #[arg(long)]
    pub variable: bool,

    /// Print per-layer values for a Tailwind config instead of CSS
    #[arg(long, conflicts_with = "variable")]
    pub tailwind: bool,

    /// Persist the resulting state
    #[arg(long)]
    pub save: bool,
}

pub fn shadow(ctx: &Context<'_>, args: &ShadowArgs) -> Result<String> {
    let mut state: ShadowGlassState = load_or_default(ctx.store);
    state.active_tab = ActiveTab::Shadow;

    if let Some(preset) = args.preset {
        state.shadow = apply_shadow_preset(&state.shadow, preset);
        state.shadow.preset = Some(preset);
    }

    if args.save {
        persist(ctx.store, &state)?;
    }

    if args.tailwind {
        return Ok(tailwind_values(&state.shadow));
    }
    let output = if args.variable {
        ShadowOutput::CssVariable
    } else {
        ShadowOutput::Standard
    };
    Ok(shadow_css(&state.shadow, output))
}

#[derive(Args, Debug, Clone)]
pub struct GlassArgs {
    /// Print the declarations on one line for a style attribute
    #[arg(long)]
    pub inline: bool,

    /// Backdrop blur radius in px
    #[arg(long)]
    pub blur: Option<f64>,

    /// Add the SVG noise overlay
    #[arg(long)]
    pub noise: bool,

    /// Persist the resulting state
    #[arg(long)]
    pub save: bool,
}

pub fn glass(ctx: &Context<'_>, args: &GlassArgs) -> Result<String> {
    let mut state: ShadowGlassState = load_or_default(ctx.store);
    state.active_tab = ActiveTab::Glass;

    if let Some(blur) = args.blur {
        state.glass.blur = blur;
    }
    if args.noise {
        state.glass.noise_enabled = true;
    }

    if args.save {
        persist(ctx.store, &state)?;
    }

    Ok(if args.inline {
        glass_preview_style(&state.glass)
    } else {
        glass_css(&state.glass)
    })
}
