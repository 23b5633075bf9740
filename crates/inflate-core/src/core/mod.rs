//! # Core Module
//!
//! Fundamental building blocks shared by the engine and workflows.
//!
//! - **Molecular Representation** ([`models`]) - atoms, residues, topology, frames and the
//!   validated multi-frame `Structure`
//! - **File I/O** ([`io`]) - GRO and BGF codecs, format dispatch and the shift report
//! - **Geometry** ([`utils`]) - planar centroid helpers used by the lateral transform

pub mod io;
pub mod models;
pub mod utils;
