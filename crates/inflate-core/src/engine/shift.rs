use super::error::EngineError;
use super::scale::ScaleFactor;
use crate::core::models::frame::Frame;
use crate::core::models::structure::{Structure, StructureError};
use crate::core::models::topology::Topology;
use crate::core::utils::geometry::{planar_centroid, planar_centroid_of};
use nalgebra::{Point2, Vector2};
use tracing::{debug, trace, warn};

/// Where one residue's planar center is and where it has to go.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidueShift {
    pub center: Point2<f64>,
    pub target: Point2<f64>,
}

impl ResidueShift {
    pub fn translation(&self) -> Vector2<f64> {
        self.target - self.center
    }
}

/// The per-residue lateral translation plan derived from the reference frame.
///
/// Each residue's target center is `S + m * (C - S)`, where `S` is the planar center of
/// all atoms, `C` the residue's planar center and `m` the scale factor's multiplier. The
/// plan is computed once and applied unchanged to every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LateralShift {
    system_center: Point2<f64>,
    multiplier: f64,
    residues: Vec<ResidueShift>,
}

impl LateralShift {
    pub fn compute(structure: &Structure, scale: ScaleFactor) -> Result<Self, EngineError> {
        let positions = structure.reference_frame().positions();
        let system_center = planar_centroid(positions).ok_or(StructureError::NoAtoms)?;
        let multiplier = scale.multiplier();
        debug!(
            "System planar center ({:.5}, {:.5}), multiplier {}",
            system_center.x, system_center.y, multiplier
        );

        let residues = structure
            .topology()
            .residues()
            .iter()
            .enumerate()
            .map(|(idx, residue)| -> Result<ResidueShift, EngineError> {
                let center = planar_centroid_of(positions, residue.atoms())
                    .ok_or(StructureError::EmptyResidue { residue: idx })?;
                let target = if scale.is_identity() {
                    center
                } else {
                    system_center + (center - system_center) * multiplier
                };
                trace!(
                    "Residue {} {}{}: center ({:.5}, {:.5}) -> ({:.5}, {:.5})",
                    idx, residue.number, residue.name, center.x, center.y, target.x, target.y
                );
                Ok(ResidueShift { center, target })
            })
            .collect::<Result<Vec<_>, EngineError>>()?;

        if residues.len() == 1 {
            warn!(
                "Structure has a single residue; its center coincides with the system center and it will not move."
            );
        }

        Ok(Self {
            system_center,
            multiplier,
            residues,
        })
    }

    pub fn system_center(&self) -> Point2<f64> {
        self.system_center
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    pub fn residues(&self) -> &[ResidueShift] {
        &self.residues
    }

    /// Broadcasts each residue's translation to its member atoms.
    pub fn per_atom_translations(
        &self,
        topology: &Topology,
    ) -> Result<Vec<Vector2<f64>>, EngineError> {
        if topology.residue_count() != self.residues.len() {
            return Err(EngineError::ShiftMismatch {
                expected: self.residues.len(),
                found: topology.residue_count(),
            });
        }

        let mut translations = vec![Vector2::zeros(); topology.atom_count()];
        for (residue, shift) in topology.residues().iter().zip(&self.residues) {
            let translation = shift.translation();
            for &atom in residue.atoms() {
                let slot = translations.get_mut(atom).ok_or_else(|| {
                    EngineError::Internal(format!(
                        "residue atom index {atom} exceeds atom count {}",
                        topology.atom_count()
                    ))
                })?;
                *slot = translation;
            }
        }
        Ok(translations)
    }

    /// Applies the plan to every frame of `structure`, calling `on_frame` after each one.
    pub fn apply(
        &self,
        structure: &mut Structure,
        mut on_frame: impl FnMut(),
    ) -> Result<(), EngineError> {
        let translations = self.per_atom_translations(structure.topology())?;
        for frame in structure.frames_mut() {
            translate_frame(frame, &translations)?;
            on_frame();
        }
        Ok(())
    }
}

/// Adds per-atom XY translations to a frame, leaving Z untouched.
pub fn translate_frame(frame: &mut Frame, translations: &[Vector2<f64>]) -> Result<(), EngineError> {
    if frame.atom_count() != translations.len() {
        return Err(EngineError::Internal(format!(
            "frame has {} atoms but {} translations were supplied",
            frame.atom_count(),
            translations.len()
        )));
    }
    for (pos, t) in frame.positions_mut().iter_mut().zip(translations) {
        pos.x += t.x;
        pos.y += t.y;
    }
    Ok(())
}
