//! fetools subcommands
//!
//! Every command loads its tool's stored state, applies flag overrides and
//! returns the CSS to print.

pub mod gradient;
pub mod shadow;
pub mod typography;

use anyhow::{Context as _, Result};
use clap::Subcommand;

use fetools_store::{load, save, KeyValueStore, LoadOutcome, ToolState};

/// Shared settings resolved from config and global flags
pub struct Context<'a> {
    pub store: &'a dyn KeyValueStore,
    pub rem_base: f64,
    pub variable_name: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Single clamp() expression for the body range
    Clamp(typography::ClampArgs),

    /// Full heading scale as CSS rules or custom properties
    Scale(typography::ScaleArgs),

    /// Interpolated size at a viewport width
    Preview(typography::PreviewArgs),

    /// Apply a typography preset and save it
    Preset(typography::PresetArgs),

    /// Gradient declarations
    Gradient(gradient::GradientArgs),

    /// Layered box-shadow or drop-shadow CSS
    Shadow(shadow::ShadowArgs),

    /// Glassmorphism panel CSS
    Glass(shadow::GlassArgs),
}

pub fn run(ctx: &Context<'_>, command: &Command) -> Result<String> {
    match command {
        Command::Clamp(args) => typography::clamp(ctx, args),
        Command::Scale(args) => typography::scale(ctx, args),
        Command::Preview(args) => typography::preview(ctx, args),
        Command::Preset(args) => typography::preset(ctx, args),
        Command::Gradient(args) => gradient::gradient(ctx, args),
        Command::Shadow(args) => shadow::shadow(ctx, args),
        Command::Glass(args) => shadow::glass(ctx, args),
    }
}

/// Stored state for `T`, or its defaults when nothing usable is stored.
pub(crate) fn load_or_default<T: ToolState + Default>(store: &dyn KeyValueStore) -> T {
    match load::<T>(store) {
        LoadOutcome::Loaded(state) => state,
        LoadOutcome::Absent => T::default(),
        LoadOutcome::Corrupt(reason) => {
            tracing::warn!("Ignoring stored {} ({}), using defaults", T::KEY, reason);
            T::default()
        }
    }
}

pub(crate) fn persist<T: ToolState>(store: &dyn KeyValueStore, state: &T) -> Result<()> {
    save(store, state).with_context(|| format!("Failed to save {}", T::KEY))?;
    tracing::debug!("Saved {}", T::KEY);
    Ok(())
}
