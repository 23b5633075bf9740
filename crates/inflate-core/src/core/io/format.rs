use super::bgf::{BgfError, BgfFile, BgfMetadata};
use super::gro::{GroError, GroFile, GroMetadata};
use super::traits::StructureFile;
use crate::core::models::structure::Structure;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// The structure file formats understood by [`load_structure`] and [`save_structure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureFormat {
    Gro,
    Bgf,
}

impl StructureFormat {
    /// Detects the format from a path's extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "gro" => Some(StructureFormat::Gro),
            "bgf" => Some(StructureFormat::Bgf),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            StructureFormat::Gro => "gro",
            StructureFormat::Bgf => "bgf",
        }
    }
}

impl fmt::Display for StructureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                StructureFormat::Gro => "GRO",
                StructureFormat::Bgf => "BGF",
            }
        )
    }
}

/// Format-specific data needed to write a structure back in its original layout.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatMetadata {
    Gro(GroMetadata),
    Bgf(BgfMetadata),
}

impl FormatMetadata {
    pub fn format(&self) -> StructureFormat {
        match self {
            FormatMetadata::Gro(_) => StructureFormat::Gro,
            FormatMetadata::Bgf(_) => StructureFormat::Bgf,
        }
    }
}

/// A structure together with the metadata of the file it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedStructure {
    pub structure: Structure,
    pub metadata: FormatMetadata,
}

#[derive(Debug, Error)]
pub enum StructureIoError {
    #[error("Input file not found: '{path}'", path = path.display())]
    NotFound { path: PathBuf },

    #[error("Unsupported structure format for '{path}' (expected a .gro or .bgf file)", path = path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error(
        "Cannot write a {input} structure to '{path}' ({output} extension); the output must use the input format",
        path = path.display()
    )]
    FormatMismatch {
        path: PathBuf,
        input: StructureFormat,
        output: StructureFormat,
    },

    #[error("Failed to read '{path}': {source}", path = path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write '{path}': {source}", path = path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid GRO file '{path}': {source}", path = path.display())]
    Gro {
        path: PathBuf,
        #[source]
        source: GroError,
    },

    #[error("Invalid BGF file '{path}': {source}", path = path.display())]
    Bgf {
        path: PathBuf,
        #[source]
        source: BgfError,
    },
}

impl StructureIoError {
    fn from_gro(path: &Path, err: GroError, writing: bool) -> Self {
        match err {
            GroError::Io(source) => Self::io(path, source, writing),
            source => StructureIoError::Gro {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    fn from_bgf(path: &Path, err: BgfError, writing: bool) -> Self {
        match err {
            BgfError::Io(source) => Self::io(path, source, writing),
            source => StructureIoError::Bgf {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    fn io(path: &Path, source: io::Error, writing: bool) -> Self {
        let path = path.to_path_buf();
        if writing {
            StructureIoError::Write { path, source }
        } else {
            StructureIoError::Read { path, source }
        }
    }
}

/// Loads a structure, choosing the codec from the file extension.
///
/// # Errors
///
/// Returns [`StructureIoError::NotFound`] if the file does not exist,
/// [`StructureIoError::UnsupportedFormat`] for unknown extensions, and a format error
/// if the content cannot be parsed.
pub fn load_structure<P: AsRef<Path>>(path: P) -> Result<LoadedStructure, StructureIoError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => StructureIoError::NotFound {
            path: path.to_path_buf(),
        },
        _ => StructureIoError::io(path, source, false),
    })?;
    let format =
        StructureFormat::from_path(path).ok_or_else(|| StructureIoError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

    debug!("Reading {} structure from {:?}", format, path);
    let mut reader = BufReader::new(file);
    let (structure, metadata) = match format {
        StructureFormat::Gro => GroFile::read_from(&mut reader)
            .map(|(s, m)| (s, FormatMetadata::Gro(m)))
            .map_err(|e| StructureIoError::from_gro(path, e, false))?,
        StructureFormat::Bgf => BgfFile::read_from(&mut reader)
            .map(|(s, m)| (s, FormatMetadata::Bgf(m)))
            .map_err(|e| StructureIoError::from_bgf(path, e, false))?,
    };
    debug!(
        "Loaded {} frame(s), {} atoms, {} residues from {:?}",
        structure.frame_count(),
        structure.atom_count(),
        structure.residue_count(),
        path
    );

    Ok(LoadedStructure {
        structure,
        metadata,
    })
}

/// Saves a structure in the format described by `metadata`.
///
/// An output path whose extension names a different format is rejected before the file
/// is created. A path without a recognized extension is written in the input format.
pub fn save_structure<P: AsRef<Path>>(
    path: P,
    structure: &Structure,
    metadata: &FormatMetadata,
) -> Result<(), StructureIoError> {
    let path = path.as_ref();
    let input = metadata.format();
    match StructureFormat::from_path(path) {
        Some(output) if output != input => {
            return Err(StructureIoError::FormatMismatch {
                path: path.to_path_buf(),
                input,
                output,
            });
        }
        Some(_) => {}
        None => warn!(
            "Output path {:?} has no .{} extension; writing {} format anyway.",
            path,
            input.extension(),
            input
        ),
    }

    match metadata {
        FormatMetadata::Gro(meta) => GroFile::write_to_path(structure, meta, path)
            .map_err(|e| StructureIoError::from_gro(path, e, true))?,
        FormatMetadata::Bgf(meta) => BgfFile::write_to_path(structure, meta, path)
            .map_err(|e| StructureIoError::from_bgf(path, e, true))?,
    }

    debug!(
        "Wrote {} frame(s) of {} structure to {:?}",
        structure.frame_count(),
        input,
        path
    );
    Ok(())
}
