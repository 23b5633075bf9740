use super::scale::ScaleFactor;
use thiserror::Error;

pub const MIN_GRO_DECIMALS: usize = 1;
pub const MAX_GRO_DECIMALS: usize = 10;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("GRO decimals must be between 1 and 10, got {0}")]
    InvalidDecimals(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct InflateConfig {
    pub scale_factor: ScaleFactor,
    /// Overrides the coordinate precision of GRO output. `None` keeps the input's.
    pub gro_decimals: Option<usize>,
}

#[derive(Default)]
pub struct InflateConfigBuilder {
    scale_factor: Option<ScaleFactor>,
    gro_decimals: Option<usize>,
}

impl InflateConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale_factor(mut self, factor: ScaleFactor) -> Self {
        self.scale_factor = Some(factor);
        self
    }
    pub fn gro_decimals(mut self, decimals: Option<usize>) -> Self {
        self.gro_decimals = decimals;
        self
    }

    pub fn build(self) -> Result<InflateConfig, ConfigError> {
        if let Some(decimals) = self.gro_decimals {
            if !(MIN_GRO_DECIMALS..=MAX_GRO_DECIMALS).contains(&decimals) {
                return Err(ConfigError::InvalidDecimals(decimals));
            }
        }
        Ok(InflateConfig {
            scale_factor: self
                .scale_factor
                .ok_or(ConfigError::MissingParameter("scale_factor"))?,
            gro_decimals: self.gro_decimals,
        })
    }
}
