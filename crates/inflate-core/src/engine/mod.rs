//! # Engine Module
//!
//! The lateral rescaling transform and the pieces that configure and observe it.
//!
//! - **Scale factor** ([`scale`]) - Validation and the positive/negative multiplier convention.
//! - **Shift plan** ([`shift`]) - Per-residue planar centers, their targets, and applying the
//!   resulting XY translations to every frame.
//! - **Configuration** ([`config`]) - `InflateConfig` and its builder.
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events.
//! - **Error Handling** ([`error`]) - Engine-specific error types.

pub mod config;
pub mod error;
pub mod progress;
pub mod scale;
pub mod shift;
