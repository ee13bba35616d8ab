//! fetools state persistence
//!
//! Every tool keeps its whole state in one JSON blob under a fixed key.
//!
//! # Quick Start
//!
//! ```rust
//! use fetools_css::ClampTypographyState;
//! use fetools_store::{load, save, LoadOutcome, MemoryStore};
//!
//! let store = MemoryStore::new();
//! assert_eq!(load::<ClampTypographyState>(&store), LoadOutcome::Absent);
//!
//! save(&store, &ClampTypographyState::default()).unwrap();
//! let state: ClampTypographyState = load(&store).unwrap_or_default();
//! assert_eq!(state, ClampTypographyState::default());
//! ```
//!
//! # Load semantics
//!
//! [`load`] never returns an error. It reports [`LoadOutcome::Absent`] when
//! nothing is stored and [`LoadOutcome::Corrupt`] when the stored text cannot
//! be read, is not JSON, fails the tool's shape check or does not decode.
//! Failures are logged with `tracing` at warn level.

mod backend;
mod error;
mod outcome;
mod tools;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use error::StoreError;
pub use outcome::LoadOutcome;
pub use tools::{
    load, save, ToolState, CLAMP_TYPOGRAPHY_KEY, GRADIENT_KEY, SHADOW_GLASS_KEY,
};
