//! fetools CSS builders
//!
//! Pure, synchronous builders that turn small editable state records into
//! CSS text.
//!
//! # Overview
//!
//! - **Fluid typography**: `clamp()` expressions, geometric heading scales,
//!   custom-property output and viewport previews ([`clamp`])
//! - **Gradients**: linear, radial and conic gradients with optional keyframe
//!   animation ([`gradient`])
//! - **Shadows**: layered `box-shadow` and `drop-shadow()` filters ([`shadow`])
//! - **Glass panels**: backdrop-blurred glassmorphism panels ([`glass`])
//!
//! # Quick Start
//!
//! ```rust
//! use fetools_css::{clamp_expression, Unit, ViewportRange, DEFAULT_REM_BASE};
//!
//! let css = clamp_expression(
//!     14.0,
//!     18.0,
//!     ViewportRange::new(320.0, 1440.0),
//!     Unit::Px,
//!     DEFAULT_REM_BASE,
//! );
//! assert_eq!(css, "clamp(14px, calc(14px + 4px * ((100vw - 320px) / 1120)), 18px)");
//! ```
//!
//! # Numbers
//!
//! Every number that lands in CSS text goes through [`JsNumber`], which prints
//! the shortest decimal form (`14`, `0.875`) the way browsers serialize
//! numbers. Malformed input is never rejected: `NaN` and infinities flow
//! through to the output text.

pub mod clamp;
pub mod color;
mod error;
pub mod glass;
pub mod gradient;
pub mod number;
pub mod shadow;

pub use clamp::*;
pub use error::UnknownName;
pub use glass::{glass_css, glass_preview_style, ActiveTab, GlassShadow, GlassState, ShadowGlassState};
pub use gradient::{
    AnimationEasing, ColorStop, GradientPreset, GradientState, GradientType, OutputMode,
    RadialPosition, RadialShape,
};
pub use number::{js_round, round4, to_fixed, JsNumber};
pub use shadow::{ShadowLayer, ShadowOutput, ShadowPreset, ShadowState, ShadowType};
