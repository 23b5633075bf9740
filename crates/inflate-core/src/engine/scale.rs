use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ScaleFactorError {
    #[error("Scale factor '{value}' is not a number")]
    NotANumber { value: String },
    #[error("Scale factor must be non-zero")]
    Zero,
    #[error("Scale factor must be finite, got {value}")]
    NonFinite { value: f64 },
}

/// A validated, non-zero, finite scale factor.
///
/// Positive values scale residue displacements from the system center directly.
/// Negative values use the reciprocal, so `-2` halves the displacement and mirrors it
/// through the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    pub fn new(value: f64) -> Result<Self, ScaleFactorError> {
        if !value.is_finite() {
            return Err(ScaleFactorError::NonFinite { value });
        }
        if value == 0.0 {
            return Err(ScaleFactorError::Zero);
        }
        Ok(Self(value))
    }

    /// The value as given by the user.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// The factor applied to each residue's displacement from the system center.
    pub fn multiplier(&self) -> f64 {
        if self.0 > 0.0 { self.0 } else { 1.0 / self.0 }
    }

    pub fn is_identity(&self) -> bool {
        self.0 == 1.0
    }
}

impl FromStr for ScaleFactor {
    type Err = ScaleFactorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<f64>()
            .map_err(|_| ScaleFactorError::NotANumber {
                value: trimmed.to_string(),
            })?;
        Self::new(value)
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
