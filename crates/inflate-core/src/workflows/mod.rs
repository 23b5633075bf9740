//! # Workflows Module
//!
//! Top-level entry points of the library. A workflow takes an in-memory structure and a
//! validated configuration, runs the transform from start to finish, and reports progress
//! through the engine's callback mechanism. File handling stays with the caller, so the
//! same workflow serves the command-line tool and tests that build structures in memory.
//!
//! - **Inflate Workflow** ([`inflate`]) - Lateral rescaling of every residue about the
//!   system's planar center.

pub mod inflate;
