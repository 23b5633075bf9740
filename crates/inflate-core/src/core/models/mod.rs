//! # Core Models Module
//!
//! Data structures describing a molecular structure as read from a structure file.
//!
//! ## Key Components
//!
//! - [`atom`] - Per-atom naming metadata (name and serial number)
//! - [`residue`] - A named, numbered group of atoms
//! - [`topology`] - The ordered atoms and residues shared by every frame
//! - [`frame`] - One snapshot of coordinates, optional velocities and the simulation box
//! - [`structure`] - A topology plus its frames, with the invariants between them enforced
//!
//! ## Usage
//!
//! ```ignore
//! use bilayer_inflate::core::models::{frame::Frame, structure::Structure, topology::TopologyBuilder};
//!
//! let mut builder = TopologyBuilder::new();
//! builder.push_atom(None, 1, "POPC", 1, "NC3");
//! builder.push_atom(None, 1, "POPC", 2, "PO4");
//! let topology = builder.build();
//!
//! let frame = Frame::new(vec![Point3::new(0.0, 0.0, 1.0), Point3::new(0.1, 0.0, 0.8)]);
//! let structure = Structure::new(topology, vec![frame])?;
//! ```

pub mod atom;
pub mod frame;
pub mod residue;
pub mod structure;
pub mod topology;
