//! Provides input/output functionality for structure file formats.
//!
//! Each format implements the [`traits::StructureFile`] trait. Callers that only need to
//! load a file, transform it and save it in the same format use [`load_structure`] and
//! [`save_structure`], which pick the codec from the file extension and carry the
//! format-specific metadata between the two calls.

pub mod bgf;
mod format;
pub mod gro;
pub mod report;
pub mod traits;

pub use format::{
    FormatMetadata, LoadedStructure, StructureFormat, StructureIoError, load_structure,
    save_structure,
};
