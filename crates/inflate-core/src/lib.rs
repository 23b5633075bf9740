//! # Bilayer Inflate Core Library
//!
//! Lateral inflation and deflation of lipid-bilayer structures, used to spread molecules
//! apart (or pull them together) in the membrane plane before a coarse-grained model is
//! backmapped to a higher resolution.
//!
//! ## Architecture
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Structure`, `Topology`, `Frame`),
//!   structure-file codecs (GRO, BGF) behind the `StructureFile` trait, and planar geometry
//!   helpers.
//!
//! - **[`engine`]: The Transform.** Scale-factor semantics (`ScaleFactor`), the per-residue
//!   lateral translation plan (`LateralShift`), configuration, errors and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Entry points that run a complete rescaling of an
//!   in-memory structure and report progress along the way.
//!
//! ## Example
//!
//! ```no_run
//! use bilayer_inflate::core::io::{load_structure, save_structure};
//! use bilayer_inflate::engine::config::InflateConfigBuilder;
//! use bilayer_inflate::engine::progress::ProgressReporter;
//! use bilayer_inflate::workflows;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let loaded = load_structure("bilayer.gro")?;
//! let config = InflateConfigBuilder::new().scale_factor("4".parse()?).build()?;
//! let result = workflows::inflate::run(loaded.structure, &config, &ProgressReporter::new())?;
//! save_structure("scaled_4.gro", &result.structure, &loaded.metadata)?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
