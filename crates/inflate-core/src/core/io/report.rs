use crate::core::models::topology::Topology;
use crate::engine::shift::LateralShift;
use std::io;
use std::path::Path;
use thiserror::Error;

const HEADER: [&str; 10] = [
    "residue_index",
    "residue_number",
    "residue_name",
    "atom_count",
    "center_x",
    "center_y",
    "target_x",
    "target_y",
    "shift_x",
    "shift_y",
];

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Shift covers {shift} residues but the topology has {topology}")]
    ResidueCountMismatch { shift: usize, topology: usize },
}

/// Writes one CSV row per residue describing its lateral move.
pub fn write_shift_report<W: io::Write>(
    writer: W,
    topology: &Topology,
    shift: &LateralShift,
) -> Result<(), ReportError> {
    if shift.residues().len() != topology.residue_count() {
        return Err(ReportError::ResidueCountMismatch {
            shift: shift.residues().len(),
            topology: topology.residue_count(),
        });
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;
    for (idx, (residue, moved)) in topology.residues().iter().zip(shift.residues()).enumerate() {
        let translation = moved.translation();
        csv_writer.write_record([
            idx.to_string(),
            residue.number.to_string(),
            residue.name.clone(),
            residue.atom_count().to_string(),
            moved.center.x.to_string(),
            moved.center.y.to_string(),
            moved.target.x.to_string(),
            moved.target.y.to_string(),
            translation.x.to_string(),
            translation.y.to_string(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_shift_report_to_path<P: AsRef<Path>>(
    path: P,
    topology: &Topology,
    shift: &LateralShift,
) -> Result<(), ReportError> {
    let file = std::fs::File::create(path)?;
    write_shift_report(io::BufWriter::new(file), topology, shift)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::frame::Frame;
    use crate::core::models::structure::Structure;
    use crate::core::models::topology::TopologyBuilder;
    use crate::engine::scale::ScaleFactor;
    use nalgebra::Point3;

    fn two_residue_structure() -> Structure {
        let mut builder = TopologyBuilder::new();
        builder.push_atom(None, 1, "POPC", 1, "NC3");
        builder.push_atom(None, 2, "CHOL", 2, "ROH");
        let frame = Frame::new(vec![Point3::new(0.0, 0.0, 1.0), Point3::new(2.0, 0.0, 1.0)]);
        Structure::new(builder.build(), vec![frame]).unwrap()
    }

    #[test]
    fn report_has_header_and_one_row_per_residue() {
        let structure = two_residue_structure();
        let shift = LateralShift::compute(&structure, ScaleFactor::new(2.0).unwrap()).unwrap();

        let mut out = Vec::new();
        write_shift_report(&mut out, structure.topology(), &shift).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER.join(","));
        assert_eq!(lines[1], "0,1,POPC,1,0,0,-1,0,-1,0");
        assert_eq!(lines[2], "1,2,CHOL,1,2,0,3,0,1,0");
    }

    #[test]
    fn report_rejects_shift_from_other_topology() {
        let structure = two_residue_structure();
        let shift = LateralShift::compute(&structure, ScaleFactor::new(2.0).unwrap()).unwrap();

        let mut builder = TopologyBuilder::new();
        builder.push_atom(None, 1, "W", 1, "W");
        let other = builder.build();

        let err = write_shift_report(Vec::new(), &other, &shift).unwrap_err();
        assert!(matches!(
            err,
            ReportError::ResidueCountMismatch {
                shift: 2,
                topology: 1
            }
        ));
    }

    #[test]
    fn report_to_path_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shifts.csv");
        let structure = two_residue_structure();
        let shift = LateralShift::compute(&structure, ScaleFactor::new(0.5).unwrap()).unwrap();

        write_shift_report_to_path(&path, structure.topology(), &shift).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("residue_index,"));
        assert_eq!(content.lines().count(), 3);
    }
}
