use bilayer_inflate::core::io::StructureIoError;
use bilayer_inflate::engine::config::ConfigError;
use bilayer_inflate::engine::error::EngineError;
use bilayer_inflate::engine::scale::ScaleFactorError;
use clap::error::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("File not found: '{path}'", path = path.display())]
    FileNotFound { path: PathBuf },

    #[error("I/O error on '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Converts a clap error that is not a help or version request.
    pub fn from_clap(err: clap::Error) -> Self {
        let message = err.to_string().trim_end().to_string();
        match err.kind() {
            ErrorKind::InvalidValue | ErrorKind::ValueValidation | ErrorKind::InvalidUtf8 => {
                CliError::InvalidArgument(message)
            }
            _ => CliError::Usage(message),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            _ => 1,
        }
    }
}

impl From<ScaleFactorError> for CliError {
    fn from(e: ScaleFactorError) -> Self {
        CliError::InvalidArgument(e.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::InvalidDecimals(_) => CliError::InvalidArgument(e.to_string()),
            other => CliError::Config(other.to_string()),
        }
    }
}

impl From<StructureIoError> for CliError {
    fn from(e: StructureIoError) -> Self {
        match e {
            StructureIoError::NotFound { path } => CliError::FileNotFound { path },
            StructureIoError::Read { path, source } | StructureIoError::Write { path, source } => {
                CliError::Io { path, source }
            }
            StructureIoError::Gro { path, source } => CliError::FileParsing {
                path,
                source: source.into(),
            },
            StructureIoError::Bgf { path, source } => CliError::FileParsing {
                path,
                source: source.into(),
            },
            other @ (StructureIoError::UnsupportedFormat { .. }
            | StructureIoError::FormatMismatch { .. }) => {
                CliError::InvalidArgument(other.to_string())
            }
        }
    }
}
