use crate::core::io::traits::StructureFile;
use crate::core::models::frame::{Frame, SimulationBox};
use crate::core::models::structure::{Structure, StructureError};
use crate::core::models::topology::TopologyBuilder;
use nalgebra::{Point3, Vector3};
use std::io::{self, BufRead, Write};
use thiserror::Error;

const DEFAULT_TITLE: &str = "Generated by bilayer-inflate";
const COORDS_START: usize = 20;
const DEFAULT_DECIMALS: usize = 3;
const MAX_DECIMALS: usize = 10;
const NUMBER_WRAP: usize = 100_000;
const NAME_WIDTH: usize = 5;
const BOX_WIDTH: usize = 10;
const BOX_DECIMALS: usize = 5;

/// Fixed-column precision of the coordinate fields of a GRO file.
///
/// Positions are written `width = decimals + 5` wide; velocities use one more
/// character and one more decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroPrecision {
    decimals: usize,
}

impl GroPrecision {
    /// Returns `None` unless `1 <= decimals <= 10`.
    pub fn new(decimals: usize) -> Option<Self> {
        (1..=MAX_DECIMALS)
            .contains(&decimals)
            .then_some(Self { decimals })
    }

    pub fn decimals(&self) -> usize {
        self.decimals
    }

    pub fn position_width(&self) -> usize {
        self.decimals + 5
    }

    pub fn velocity_width(&self) -> usize {
        self.decimals + 6
    }

    pub fn velocity_decimals(&self) -> usize {
        self.decimals + 1
    }

    /// Infers the precision from the distance between the first two decimal points of
    /// the coordinate fields of an atom line.
    pub fn detect(atom_line: &str) -> Option<Self> {
        let coords = atom_line.get(COORDS_START..)?;
        let first = coords.find('.')?;
        let second = first + 1 + coords[first + 1..].find('.')?;
        let width = second - first;
        width.checked_sub(5).and_then(Self::new)
    }
}

impl Default for GroPrecision {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroMetadata {
    /// Title line of each frame, in order.
    pub titles: Vec<String>,
    pub precision: GroPrecision,
}

#[derive(Debug, Error)]
pub enum GroError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: GroParseErrorKind },
    #[error("Frame {frame} does not match the first frame: {message}")]
    InconsistentFrame { frame: usize, message: String },
    #[error("Invalid structure: {0}")]
    Structure(#[from] StructureError),
}

#[derive(Debug, Error)]
pub enum GroParseErrorKind {
    #[error("Invalid atom count '{value}'")]
    InvalidAtomCount { value: String },
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Atom line is too short (expected at least {expected} chars, found {found})")]
    LineTooShort { expected: usize, found: usize },
    #[error("Box line must hold 3 or 9 numbers (value: '{value}')")]
    InvalidBox { value: String },
    #[error("Unexpected end of file, expected {expected}")]
    UnexpectedEof { expected: &'static str },
}

struct AtomRecord<'a> {
    res_number: isize,
    res_name: &'a str,
    atom_name: &'a str,
    serial: usize,
    position: Point3<f64>,
    velocity: Option<Vector3<f64>>,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

fn columns(start: usize, end: usize) -> String {
    format!("{}-{}", start + 1, end)
}

fn parse_float(line: &str, line_num: usize, start: usize, end: usize) -> Result<f64, GroError> {
    let value = slice_and_trim(line, start, end);
    value.parse().map_err(|_| GroError::Parse {
        line: line_num,
        kind: GroParseErrorKind::InvalidFloat {
            columns: columns(start, end),
            value: value.into(),
        },
    })
}

fn parse_int<T: std::str::FromStr>(
    line: &str,
    line_num: usize,
    start: usize,
    end: usize,
) -> Result<T, GroError> {
    let value = slice_and_trim(line, start, end);
    value.parse().map_err(|_| GroError::Parse {
        line: line_num,
        kind: GroParseErrorKind::InvalidInt {
            columns: columns(start, end),
            value: value.into(),
        },
    })
}

fn parse_triplet(
    line: &str,
    line_num: usize,
    start: usize,
    width: usize,
) -> Result<[f64; 3], GroError> {
    let mut out = [0.0; 3];
    for (i, slot) in out.iter_mut().enumerate() {
        let begin = start + i * width;
        *slot = parse_float(line, line_num, begin, begin + width)?;
    }
    Ok(out)
}

fn parse_atom_line(
    line: &str,
    line_num: usize,
    precision: GroPrecision,
) -> Result<AtomRecord<'_>, GroError> {
    let width = precision.position_width();
    let coords_end = COORDS_START + 3 * width;
    if line.len() < coords_end {
        return Err(GroError::Parse {
            line: line_num,
            kind: GroParseErrorKind::LineTooShort {
                expected: coords_end,
                found: line.len(),
            },
        });
    }

    let res_number: isize = parse_int(line, line_num, 0, 5)?;
    let serial: usize = parse_int(line, line_num, 15, 20)?;
    let [x, y, z] = parse_triplet(line, line_num, COORDS_START, width)?;

    let has_velocity = line
        .get(coords_end..)
        .is_some_and(|rest| !rest.trim().is_empty());
    let velocity = if has_velocity {
        let vel_width = precision.velocity_width();
        let vel_end = coords_end + 3 * vel_width;
        if line.len() < vel_end {
            return Err(GroError::Parse {
                line: line_num,
                kind: GroParseErrorKind::LineTooShort {
                    expected: vel_end,
                    found: line.len(),
                },
            });
        }
        let [vx, vy, vz] = parse_triplet(line, line_num, coords_end, vel_width)?;
        Some(Vector3::new(vx, vy, vz))
    } else {
        None
    };

    Ok(AtomRecord {
        res_number,
        res_name: slice_and_trim(line, 5, 10),
        atom_name: slice_and_trim(line, 10, 15),
        serial,
        position: Point3::new(x, y, z),
        velocity,
    })
}

fn parse_box(line: &str, line_num: usize) -> Result<SimulationBox, GroError> {
    let invalid = || GroError::Parse {
        line: line_num,
        kind: GroParseErrorKind::InvalidBox {
            value: line.trim().into(),
        },
    };
    let values = line
        .split_whitespace()
        .map(str::parse::<f64>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid())?;
    SimulationBox::from_values(&values).ok_or_else(invalid)
}

fn next_line<'a>(
    lines: &'a [String],
    cursor: usize,
    expected: &'static str,
) -> Result<&'a str, GroError> {
    lines
        .get(cursor)
        .map(String::as_str)
        .ok_or(GroError::Parse {
            line: cursor + 1,
            kind: GroParseErrorKind::UnexpectedEof { expected },
        })
}

fn truncate_name(name: &str) -> &str {
    match name.char_indices().nth(NAME_WIDTH) {
        Some((idx, _)) => &name[..idx],
        None => name,
    }
}

/// GROMACS coordinate file (`.gro`), one or more concatenated frames.
pub struct GroFile;

impl StructureFile for GroFile {
    type Metadata = GroMetadata;
    type Error = GroError;

    fn read_from(reader: &mut impl BufRead) -> Result<(Structure, Self::Metadata), Self::Error> {
        let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;

        let mut metadata = GroMetadata::default();
        let mut precision: Option<GroPrecision> = None;
        let mut builder = TopologyBuilder::new();
        // (residue number, residue name, atom name) of every atom in the first frame
        let mut reference_ids: Vec<(isize, String, String)> = Vec::new();
        let mut frames = Vec::new();
        let mut cursor = 0;

        while lines[cursor..].iter().any(|l| !l.trim().is_empty()) {
            let frame_idx = frames.len();
            metadata.titles.push(lines[cursor].clone());
            cursor += 1;

            let count_str = next_line(&lines, cursor, "atom count")?.trim();
            let atom_count: usize = count_str.parse().map_err(|_| GroError::Parse {
                line: cursor + 1,
                kind: GroParseErrorKind::InvalidAtomCount {
                    value: count_str.into(),
                },
            })?;
            cursor += 1;

            if frame_idx > 0 && atom_count != reference_ids.len() {
                return Err(GroError::InconsistentFrame {
                    frame: frame_idx,
                    message: format!(
                        "{} atoms instead of {}",
                        atom_count,
                        reference_ids.len()
                    ),
                });
            }

            let frame_precision = *precision.get_or_insert_with(|| {
                lines
                    .get(cursor)
                    .and_then(|l| GroPrecision::detect(l))
                    .unwrap_or_default()
            });

            let mut positions = Vec::with_capacity(atom_count);
            let mut velocities: Option<Vec<Vector3<f64>>> = None;

            for atom_idx in 0..atom_count {
                let line = next_line(&lines, cursor, "atom record")?;
                let line_num = cursor + 1;
                let record = parse_atom_line(line, line_num, frame_precision)?;

                if frame_idx == 0 {
                    builder.push_atom(
                        None,
                        record.res_number,
                        record.res_name,
                        record.serial,
                        record.atom_name,
                    );
                    reference_ids.push((
                        record.res_number,
                        record.res_name.to_string(),
                        record.atom_name.to_string(),
                    ));
                } else {
                    let (res_number, res_name, atom_name) = &reference_ids[atom_idx];
                    if *res_number != record.res_number
                        || res_name != record.res_name
                        || atom_name != record.atom_name
                    {
                        return Err(GroError::InconsistentFrame {
                            frame: frame_idx,
                            message: format!(
                                "atom {} is {}{} {} (line {}), expected {}{} {}",
                                atom_idx + 1,
                                record.res_number,
                                record.res_name,
                                record.atom_name,
                                line_num,
                                res_number,
                                res_name,
                                atom_name
                            ),
                        });
                    }
                }

                if let Some(v) = record.velocity {
                    if atom_idx == 0 {
                        velocities = Some(Vec::with_capacity(atom_count));
                    }
                    match velocities.as_mut() {
                        Some(vels) => vels.push(v),
                        None => {
                            return Err(GroError::InconsistentFrame {
                                frame: frame_idx,
                                message: format!(
                                    "atom {} (line {}) has velocities but atom 1 does not",
                                    atom_idx + 1,
                                    line_num
                                ),
                            });
                        }
                    }
                } else if velocities.is_some() {
                    return Err(GroError::Parse {
                        line: line_num,
                        kind: GroParseErrorKind::LineTooShort {
                            expected: COORDS_START
                                + 3 * frame_precision.position_width()
                                + 3 * frame_precision.velocity_width(),
                            found: line.len(),
                        },
                    });
                }

                positions.push(record.position);
                cursor += 1;
            }

            let box_line = next_line(&lines, cursor, "box vectors")?;
            let simulation_box = parse_box(box_line, cursor + 1)?;
            cursor += 1;

            let mut frame = Frame::new(positions).with_box(simulation_box);
            if let Some(vels) = velocities {
                frame = frame.with_velocities(vels);
            }
            frames.push(frame);
        }

        metadata.precision = precision.unwrap_or_default();
        let structure = Structure::new(builder.build(), frames)?;
        Ok((structure, metadata))
    }

    fn write_to(
        structure: &Structure,
        metadata: &Self::Metadata,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        let topology = structure.topology();
        let residues = topology.residues();
        let owners = topology.residue_index_per_atom();

        let precision = metadata.precision;
        let (pos_w, pos_d) = (precision.position_width(), precision.decimals());
        let (vel_w, vel_d) = (precision.velocity_width(), precision.velocity_decimals());

        for (frame_idx, frame) in structure.frames().iter().enumerate() {
            let title = metadata
                .titles
                .get(frame_idx)
                .map_or(DEFAULT_TITLE, String::as_str);
            writeln!(writer, "{}", title)?;
            writeln!(writer, "{:>5}", structure.atom_count())?;

            for (atom_idx, (atom, pos)) in topology
                .atoms()
                .iter()
                .zip(frame.positions())
                .enumerate()
            {
                let residue = owners[atom_idx].map(|r| &residues[r]).ok_or(
                    StructureError::UnassignedAtom { atom: atom_idx },
                )?;
                write!(
                    writer,
                    "{:>5}{:<5}{:>5}{:>5}",
                    residue.number % NUMBER_WRAP as isize,
                    truncate_name(&residue.name),
                    truncate_name(&atom.name),
                    atom.serial % NUMBER_WRAP
                )?;
                write!(
                    writer,
                    "{:>w$.d$}{:>w$.d$}{:>w$.d$}",
                    pos.x,
                    pos.y,
                    pos.z,
                    w = pos_w,
                    d = pos_d
                )?;
                if let Some(vel) = frame.velocities().and_then(|v| v.get(atom_idx)) {
                    write!(
                        writer,
                        "{:>w$.d$}{:>w$.d$}{:>w$.d$}",
                        vel.x,
                        vel.y,
                        vel.z,
                        w = vel_w,
                        d = vel_d
                    )?;
                }
                writeln!(writer)?;
            }

            let box_values: &[f64] = match &frame.simulation_box {
                Some(b) => b.values(),
                None => &[0.0; 3],
            };
            for value in box_values {
                write!(writer, "{:>w$.d$}", value, w = BOX_WIDTH, d = BOX_DECIMALS)?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn atom_line(resnr: isize, resname: &str, name: &str, serial: usize, xyz: [f64; 3]) -> String {
        format!(
            "{:>5}{:<5}{:>5}{:>5}{:>8.3}{:>8.3}{:>8.3}",
            resnr, resname, name, serial, xyz[0], xyz[1], xyz[2]
        )
    }

    fn two_lipid_frame(title: &str, dz: f64) -> String {
        [
            title.to_string(),
            "    4".to_string(),
            atom_line(1, "POPC", "NC3", 1, [1.0, 2.0, 3.0 + dz]),
            atom_line(1, "POPC", "PO4", 2, [1.5, 2.0, 2.5 + dz]),
            atom_line(2, "POPC", "NC3", 3, [4.0, 2.0, 3.0 + dz]),
            atom_line(2, "POPC", "PO4", 4, [4.5, 2.0, 2.5 + dz]),
            "   6.00000   6.00000   8.00000".to_string(),
        ]
        .join("\n")
            + "\n"
    }

    fn read(text: &str) -> Result<(Structure, GroMetadata), GroError> {
        GroFile::read_from(&mut Cursor::new(text.as_bytes()))
    }

    fn write(structure: &Structure, metadata: &GroMetadata) -> String {
        let mut out = Vec::new();
        GroFile::write_to(structure, metadata, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn reads_hand_written_atom_line_columns() {
        let text = "Lipid\n    1\n    7POPC   NC3   12   1.000   2.000   3.000\n   5.0   5.0   5.0\n";
        let (structure, metadata) = read(text).unwrap();

        let residue = &structure.topology().residues()[0];
        assert_eq!(residue.number, 7);
        assert_eq!(residue.name, "POPC");
        assert_eq!(residue.chain_id, None);
        let atom = &structure.topology().atoms()[0];
        assert_eq!(atom.name, "NC3");
        assert_eq!(atom.serial, 12);
        assert_eq!(
            structure.reference_frame().positions()[0],
            Point3::new(1.0, 2.0, 3.0)
        );
        assert_eq!(metadata.titles, vec!["Lipid".to_string()]);
        assert_eq!(metadata.precision, GroPrecision::default());
    }

    #[test]
    fn reads_single_frame_topology_and_box() {
        let (structure, _) = read(&two_lipid_frame("Bilayer", 0.0)).unwrap();
        assert_eq!(structure.frame_count(), 1);
        assert_eq!(structure.atom_count(), 4);
        assert_eq!(structure.residue_count(), 2);
        assert_eq!(structure.topology().residues()[1].atoms(), &[2, 3]);
        assert_eq!(
            structure.reference_frame().simulation_box,
            Some(SimulationBox::Rectangular([6.0, 6.0, 8.0]))
        );
        assert!(structure.reference_frame().velocities().is_none());
    }

    #[test]
    fn reads_multiple_frames_with_titles() {
        let text = two_lipid_frame("Bilayer t= 0.0", 0.0) + &two_lipid_frame("Bilayer t= 10.0", 0.5);
        let (structure, metadata) = read(&text).unwrap();
        assert_eq!(structure.frame_count(), 2);
        assert_eq!(metadata.titles, vec!["Bilayer t= 0.0", "Bilayer t= 10.0"]);
        assert_eq!(structure.frames()[1].positions()[0].z, 3.5);
    }

    #[test]
    fn trailing_blank_lines_are_ignored() {
        let text = two_lipid_frame("Bilayer", 0.0) + "\n\n   \n";
        let (structure, _) = read(&text).unwrap();
        assert_eq!(structure.frame_count(), 1);
    }

    #[test]
    fn round_trip_reproduces_canonical_text() {
        let text = two_lipid_frame("Bilayer t= 0.0", 0.0) + &two_lipid_frame("Bilayer t= 10.0", 0.25);
        let (structure, metadata) = read(&text).unwrap();
        assert_eq!(write(&structure, &metadata), text);
    }

    #[test]
    fn reads_and_writes_velocities() {
        let line = format!(
            "{}{:>9.4}{:>9.4}{:>9.4}",
            atom_line(1, "W", "W", 1, [0.5, 0.5, 0.5]),
            0.1234,
            -0.5,
            1.0
        );
        let text = format!("Water\n    1\n{}\n   1.00000   1.00000   1.00000\n", line);
        let (structure, metadata) = read(&text).unwrap();

        let vels = structure.reference_frame().velocities().unwrap();
        assert_eq!(vels[0], Vector3::new(0.1234, -0.5, 1.0));
        assert_eq!(write(&structure, &metadata), text);
    }

    #[test]
    fn missing_velocity_after_first_atom_is_an_error() {
        let first = format!(
            "{}{:>9.4}{:>9.4}{:>9.4}",
            atom_line(1, "W", "W", 1, [0.5, 0.5, 0.5]),
            0.1,
            0.1,
            0.1
        );
        let second = atom_line(2, "W", "W", 2, [1.5, 0.5, 0.5]);
        let text = format!("Water\n    2\n{}\n{}\n   2.0 2.0 2.0\n", first, second);
        assert!(matches!(
            read(&text).unwrap_err(),
            GroError::Parse {
                line: 4,
                kind: GroParseErrorKind::LineTooShort { .. }
            }
        ));
    }

    #[test]
    fn velocity_appearing_after_first_atom_is_an_error() {
        let first = atom_line(1, "W", "W", 1, [0.5, 0.5, 0.5]);
        let second = format!(
            "{}{:>9.4}{:>9.4}{:>9.4}",
            atom_line(2, "W", "W", 2, [1.5, 0.5, 0.5]),
            0.1,
            0.1,
            0.1
        );
        let text = format!("Water\n    2\n{}\n{}\n   2.0 2.0 2.0\n", first, second);
        assert!(matches!(
            read(&text).unwrap_err(),
            GroError::InconsistentFrame { frame: 0, message } if message.contains("atom 2")
        ));
    }

    #[test]
    fn detects_and_preserves_higher_precision() {
        let line = format!(
            "{:>5}{:<5}{:>5}{:>5}{:>10.5}{:>10.5}{:>10.5}",
            1, "CHOL", "ROH", 1, 1.23456, 2.0, 3.5
        );
        let text = format!("Precise\n    1\n{}\n   5.00000   5.00000   5.00000\n", line);
        let (structure, metadata) = read(&text).unwrap();

        assert_eq!(metadata.precision.decimals(), 5);
        assert_eq!(structure.reference_frame().positions()[0].x, 1.23456);
        assert_eq!(write(&structure, &metadata), text);
    }

    #[test]
    fn detect_falls_back_when_line_has_no_coordinates() {
        assert!(GroPrecision::detect("short").is_none());
        assert!(GroPrecision::detect("    1POPC   NC3    1   1.000").is_none());
        assert_eq!(
            GroPrecision::detect("    1POPC   NC3    1   1.000   2.000   3.000")
                .unwrap()
                .decimals(),
            3
        );
    }

    #[test]
    fn precision_bounds_are_enforced() {
        assert!(GroPrecision::new(0).is_none());
        assert!(GroPrecision::new(11).is_none());
        let p = GroPrecision::new(4).unwrap();
        assert_eq!(p.position_width(), 9);
        assert_eq!(p.velocity_width(), 10);
        assert_eq!(p.velocity_decimals(), 5);
    }

    #[test]
    fn reads_triclinic_box() {
        let text = format!(
            "Tric\n    1\n{}\n 1 2 3 0 0 0.5 0 0.1 0.2\n",
            atom_line(1, "W", "W", 1, [0.0, 0.0, 0.0])
        );
        let (structure, _) = read(&text).unwrap();
        assert!(matches!(
            structure.reference_frame().simulation_box,
            Some(SimulationBox::Triclinic(v)) if v[5] == 0.5
        ));
    }

    #[test]
    fn invalid_atom_count_is_reported_with_line() {
        let err = read("Title\nabc\n").unwrap_err();
        assert!(matches!(
            err,
            GroError::Parse {
                line: 2,
                kind: GroParseErrorKind::InvalidAtomCount { .. }
            }
        ));
    }

    #[test]
    fn short_atom_line_is_rejected() {
        let err = read("Title\n    1\n    1POPC   NC3    1   1.000\n").unwrap_err();
        assert!(matches!(
            err,
            GroError::Parse {
                line: 3,
                kind: GroParseErrorKind::LineTooShort { .. }
            }
        ));
    }

    #[test]
    fn bad_coordinate_is_rejected_with_columns() {
        let text = "Title\n    1\n    1POPC   NC3    1   1.000   x.xxx   3.000\n 1 1 1\n";
        match read(text).unwrap_err() {
            GroError::Parse {
                line: 3,
                kind: GroParseErrorKind::InvalidFloat { columns, value },
            } => {
                assert_eq!(columns, "29-36");
                assert_eq!(value, "x.xxx");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn truncated_file_reports_unexpected_eof() {
        let text = format!("Title\n    2\n{}\n", atom_line(1, "W", "W", 1, [0.0; 3]));
        assert!(matches!(
            read(&text).unwrap_err(),
            GroError::Parse {
                kind: GroParseErrorKind::UnexpectedEof {
                    expected: "atom record"
                },
                ..
            }
        ));

        let text = format!("Title\n    1\n{}\n", atom_line(1, "W", "W", 1, [0.0; 3]));
        assert!(matches!(
            read(&text).unwrap_err(),
            GroError::Parse {
                kind: GroParseErrorKind::UnexpectedEof {
                    expected: "box vectors"
                },
                ..
            }
        ));
    }

    #[test]
    fn invalid_box_line_is_rejected() {
        let text = format!("Title\n    1\n{}\n 1 2\n", atom_line(1, "W", "W", 1, [0.0; 3]));
        assert!(matches!(
            read(&text).unwrap_err(),
            GroError::Parse {
                line: 4,
                kind: GroParseErrorKind::InvalidBox { .. }
            }
        ));
    }

    #[test]
    fn frames_with_different_atom_counts_are_rejected() {
        let second = format!(
            "Frame 2\n    1\n{}\n 6 6 8\n",
            atom_line(1, "POPC", "NC3", 1, [0.0; 3])
        );
        let text = two_lipid_frame("Frame 1", 0.0) + &second;
        assert!(matches!(
            read(&text).unwrap_err(),
            GroError::InconsistentFrame { frame: 1, .. }
        ));
    }

    #[test]
    fn frames_with_different_naming_are_rejected() {
        let second = two_lipid_frame("Frame 2", 0.0).replace("PO4", "GL1");
        let text = two_lipid_frame("Frame 1", 0.0) + &second;
        assert!(matches!(
            read(&text).unwrap_err(),
            GroError::InconsistentFrame { frame: 1, .. }
        ));
    }

    #[test]
    fn empty_frame_is_rejected_as_structure_without_atoms() {
        let err = read("Empty\n    0\n   1.0   1.0   1.0\n").unwrap_err();
        assert!(matches!(err, GroError::Structure(StructureError::NoAtoms)));
    }

    #[test]
    fn write_wraps_large_numbers_and_truncates_long_names() {
        let mut builder = TopologyBuilder::new();
        builder.push_atom(None, 100_003, "LONGNAME", 123_456, "ABCDEFG");
        let frame = Frame::new(vec![Point3::new(1.0, 2.0, 3.0)]);
        let structure = Structure::new(builder.build(), vec![frame]).unwrap();

        let mut out = Vec::new();
        GroFile::write_to(&structure, &GroMetadata::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], DEFAULT_TITLE);
        assert_eq!(lines[2], "    3LONGNABCDE23456   1.000   2.000   3.000");
        assert_eq!(lines[3], "   0.00000   0.00000   0.00000");
    }
}
