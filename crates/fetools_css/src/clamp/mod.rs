//! Fluid typography
//!
//! Sizes grow linearly with the viewport between two widths and are frozen
//! outside them. The CSS form of that rule is
//!
//! ```text
//! clamp(MIN, calc(MIN + DIFF * ((100vw - VWMINpx) / VWDIFF)), MAX)
//! ```
//!
//! and [`size_for_viewport`] computes the same value numerically for
//! previews.
//!
//! - [`state`]: the persisted [`ClampTypographyState`] and its parts
//! - [`expr`]: value formatting, single expressions, previews, spacing tokens
//! - [`scale`]: heading scales and full-scale CSS output
//! - [`presets`]: named size presets

pub mod expr;
pub mod presets;
pub mod scale;
pub mod state;

pub use expr::*;
pub use presets::{apply_preset, PresetPatch, TypographyPreset};
pub use scale::{resolve_ratio, typography_levels};
pub use state::*;
