use thiserror::Error;

use crate::core::models::structure::StructureError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid structure: {0}")]
    Structure(#[from] StructureError),

    #[error("Shift plan covers {expected} residues but the structure has {found}")]
    ShiftMismatch { expected: usize, found: usize },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
