use crate::core::io::traits::StructureFile;
use crate::core::models::frame::Frame;
use crate::core::models::structure::{Structure, StructureError};
use crate::core::models::topology::TopologyBuilder;
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use thiserror::Error;

const COORDS_START: usize = 30;
const COORDS_END: usize = 60;
const COORD_WIDTH: usize = 10;

/// One line of a BGF file as it will be written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BgfLine {
    /// Any non-atom record, kept verbatim.
    Raw(String),
    /// An atom record split around its coordinate field.
    Atom {
        index: usize,
        prefix: String,
        suffix: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BgfMetadata {
    pub lines: Vec<BgfLine>,
}

impl BgfMetadata {
    fn atom_record_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| matches!(l, BgfLine::Atom { .. }))
            .count()
    }
}

#[derive(Debug, Error)]
pub enum BgfError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: BgfParseErrorKind,
    },
    #[error("Inconsistent data: {0}")]
    Inconsistency(String),
    #[error("Missing required record: {0}")]
    MissingRecord(String),
    #[error("BGF files hold a single frame, but the structure has {0}")]
    MultipleFrames(usize),
    #[error("Invalid structure: {0}")]
    Structure(#[from] StructureError),
}

#[derive(Debug, Error)]
pub enum BgfParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: String },
    #[error("Line is too short for ATOM/HETATM record (must be at least 60 chars)")]
    LineTooShort,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

fn parse_coordinate(line: &str, line_num: usize, start: usize) -> Result<f64, BgfError> {
    let value = slice_and_trim(line, start, start + COORD_WIDTH);
    value.parse().map_err(|_| BgfError::Parse {
        line: line_num,
        kind: BgfParseErrorKind::InvalidFloat {
            columns: format!("{}-{}", start + 1, start + COORD_WIDTH),
            value: value.into(),
        },
    })
}

fn write_coordinates(writer: &mut impl Write, pos: &Point3<f64>) -> io::Result<()> {
    write!(
        writer,
        "{:>w$.5}{:>w$.5}{:>w$.5}",
        pos.x,
        pos.y,
        pos.z,
        w = COORD_WIDTH
    )
}

/// BioGraf structure file (`.bgf`).
///
/// Only the coordinate field (columns 31-60) of atom records is ever rewritten; every
/// other character of the file is reproduced as read.
pub struct BgfFile;

impl StructureFile for BgfFile {
    type Metadata = BgfMetadata;
    type Error = BgfError;

    fn read_from(reader: &mut impl BufRead) -> Result<(Structure, Self::Metadata), Self::Error> {
        let mut builder = TopologyBuilder::new();
        let mut metadata = BgfMetadata::default();
        let mut positions = Vec::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            let record_type = slice_and_trim(&line, 0, 6);
            if record_type != "ATOM" && record_type != "HETATM" {
                metadata.lines.push(BgfLine::Raw(line));
                continue;
            }

            let (Some(prefix), Some(suffix)) = (line.get(..COORDS_START), line.get(COORDS_END..))
            else {
                return Err(BgfError::Parse {
                    line: line_num,
                    kind: BgfParseErrorKind::LineTooShort,
                });
            };

            let serial_str = slice_and_trim(&line, 7, 12);
            let name_str = slice_and_trim(&line, 13, 18);
            let res_name_str = slice_and_trim(&line, 19, 22);
            let chain_id_str = slice_and_trim(&line, 23, 24);
            let res_id_str = slice_and_trim(&line, 25, 30);

            if name_str.is_empty() {
                return Err(BgfError::Parse {
                    line: line_num,
                    kind: BgfParseErrorKind::MissingRequiredField {
                        columns: "14-18".into(),
                    },
                });
            }
            let serial: usize = serial_str.parse().map_err(|_| BgfError::Parse {
                line: line_num,
                kind: BgfParseErrorKind::InvalidInt {
                    columns: "8-12".into(),
                    value: serial_str.into(),
                },
            })?;
            let res_id: isize = res_id_str.parse().map_err(|_| BgfError::Parse {
                line: line_num,
                kind: BgfParseErrorKind::InvalidInt {
                    columns: "26-30".into(),
                    value: res_id_str.into(),
                },
            })?;
            let x = parse_coordinate(&line, line_num, COORDS_START)?;
            let y = parse_coordinate(&line, line_num, COORDS_START + COORD_WIDTH)?;
            let z = parse_coordinate(&line, line_num, COORDS_START + 2 * COORD_WIDTH)?;

            let chain_id = chain_id_str.chars().next();
            let index = builder.push_atom(chain_id, res_id, res_name_str, serial, name_str);
            positions.push(Point3::new(x, y, z));

            metadata.lines.push(BgfLine::Atom {
                index,
                prefix: prefix.to_string(),
                suffix: suffix.to_string(),
            });
        }

        if positions.is_empty() {
            return Err(BgfError::MissingRecord("ATOM/HETATM records".into()));
        }
        let structure = Structure::new(builder.build(), vec![Frame::new(positions)])?;
        Ok((structure, metadata))
    }

    fn write_to(
        structure: &Structure,
        metadata: &Self::Metadata,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        if structure.frame_count() != 1 {
            return Err(BgfError::MultipleFrames(structure.frame_count()));
        }
        let records = metadata.atom_record_count();
        if records != structure.atom_count() {
            return Err(BgfError::Inconsistency(format!(
                "metadata holds {} atom records but the structure has {} atoms",
                records,
                structure.atom_count()
            )));
        }

        let positions = structure.reference_frame().positions();
        for line in &metadata.lines {
            match line {
                BgfLine::Raw(content) => writeln!(writer, "{}", content)?,
                BgfLine::Atom {
                    index,
                    prefix,
                    suffix,
                } => {
                    let pos = positions.get(*index).ok_or_else(|| {
                        BgfError::Inconsistency(format!("Atom index {} not found", index))
                    })?;
                    write!(writer, "{}", prefix)?;
                    write_coordinates(writer, pos)?;
                    writeln!(writer, "{}", suffix)?;
                }
            }
        }
        Ok(())
    }
}
