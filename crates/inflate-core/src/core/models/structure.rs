use super::frame::Frame;
use super::topology::Topology;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructureError {
    #[error("Structure contains no atoms")]
    NoAtoms,
    #[error("Structure contains no frames")]
    NoFrames,
    #[error("Frame {frame} has {found} atoms but the topology defines {expected}")]
    FrameAtomCount {
        frame: usize,
        expected: usize,
        found: usize,
    },
    #[error("Frame {frame} has {found} velocities but the topology defines {expected} atoms")]
    VelocityCount {
        frame: usize,
        expected: usize,
        found: usize,
    },
    #[error("Residue {residue} has no atoms")]
    EmptyResidue { residue: usize },
    #[error("Residue {residue} references atom {atom}, but the topology has {atom_count} atoms")]
    AtomOutOfRange {
        residue: usize,
        atom: usize,
        atom_count: usize,
    },
    #[error("Atom {atom} is not assigned to any residue")]
    UnassignedAtom { atom: usize },
    #[error("Atom {atom} is assigned to more than one residue")]
    SharedAtom { atom: usize },
}

/// A topology together with one or more frames of coordinates.
///
/// Construction validates that every frame has one row per topology atom and that every
/// atom belongs to exactly one non-empty residue. Frames can be edited in place afterwards
/// but never resized, so these invariants hold for the lifetime of the value.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    topology: Topology,
    frames: Vec<Frame>,
}

impl Structure {
    pub fn new(topology: Topology, frames: Vec<Frame>) -> Result<Self, StructureError> {
        validate_topology(&topology)?;
        if frames.is_empty() {
            return Err(StructureError::NoFrames);
        }

        let expected = topology.atom_count();
        for (frame_idx, frame) in frames.iter().enumerate() {
            if frame.atom_count() != expected {
                return Err(StructureError::FrameAtomCount {
                    frame: frame_idx,
                    expected,
                    found: frame.atom_count(),
                });
            }
            if let Some(velocities) = frame.velocities() {
                if velocities.len() != expected {
                    return Err(StructureError::VelocityCount {
                        frame: frame_idx,
                        expected,
                        found: velocities.len(),
                    });
                }
            }
        }

        Ok(Self { topology, frames })
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut [Frame] {
        &mut self.frames
    }

    /// The first frame, which every structure is guaranteed to have.
    pub fn reference_frame(&self) -> &Frame {
        &self.frames[0]
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn atom_count(&self) -> usize {
        self.topology.atom_count()
    }

    pub fn residue_count(&self) -> usize {
        self.topology.residue_count()
    }
}

fn validate_topology(topology: &Topology) -> Result<(), StructureError> {
    let atom_count = topology.atom_count();
    if atom_count == 0 {
        return Err(StructureError::NoAtoms);
    }

    let mut claimed = vec![false; atom_count];
    for (res_idx, residue) in topology.residues().iter().enumerate() {
        if residue.atoms().is_empty() {
            return Err(StructureError::EmptyResidue { residue: res_idx });
        }
        for &atom in residue.atoms() {
            let slot = claimed
                .get_mut(atom)
                .ok_or(StructureError::AtomOutOfRange {
                    residue: res_idx,
                    atom,
                    atom_count,
                })?;
            if *slot {
                return Err(StructureError::SharedAtom { atom });
            }
            *slot = true;
        }
    }

    match claimed.iter().position(|&c| !c) {
        Some(atom) => Err(StructureError::UnassignedAtom { atom }),
        None => Ok(()),
    }
}
