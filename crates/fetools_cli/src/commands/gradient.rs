use anyhow::Result;
use clap::Args;

use fetools_css::gradient::generate_output;
use fetools_css::{GradientPreset, GradientState, OutputMode};

use super::{load_or_default, persist, Context};

#[derive(Args, Debug, Clone)]
pub struct GradientArgs {
    /// Start from a named preset (case-insensitive)
    #[arg(long)]
    pub preset: Option<String>,

    /// List preset names and exit
    #[arg(long, conflicts_with = "preset")]
    pub list: bool,

    /// Output mode: background, background-image, css-variable, with-fallback
    #[arg(long)]
    pub mode: Option<OutputMode>,

    /// Linear gradient angle in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub angle: Option<f64>,

    /// Add a keyframe animation
    #[arg(long)]
    pub animate: bool,

    /// Animation speed, 1 (slow) to 100 (fast)
    #[arg(long, requires = "animate")]
    pub speed: Option<f64>,

    /// Persist the resulting state
    #[arg(long)]
    pub save: bool,
}

pub fn gradient(ctx: &Context<'_>, args: &GradientArgs) -> Result<String> {
    if args.list {
        let names: Vec<&str> = GradientPreset::all().iter().map(|p| p.name).collect();
        return Ok(names.join("\n"));
    }

    let mut state: GradientState = load_or_default(ctx.store);
    if let Some(name) = &args.preset {
        state = GradientPreset::find(name)?.apply(&state);
    }
    if let Some(mode) = args.mode {
        state.output_mode = mode;
    }
    if let Some(angle) = args.angle {
        state.angle = angle;
    }
    if args.animate {
        state.animate = Some(true);
    }
    if let Some(speed) = args.speed {
        state.animation_speed = Some(speed);
    }

    if args.save {
        persist(ctx.store, &state)?;
    }

    Ok(generate_output(&state))
}
