use crate::core::io::FormatMetadata;
use crate::core::io::gro::GroPrecision;
use crate::core::models::structure::Structure;
use crate::engine::config::InflateConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::shift::LateralShift;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone)]
pub struct InflateResult {
    pub structure: Structure,
    pub shift: LateralShift,
}

/// Rescales every residue's planar center about the system's planar center.
///
/// Centers are measured on the first frame; the resulting per-residue XY translation is
/// added to every frame. Z coordinates, velocities and boxes are not modified.
#[instrument(skip_all, name = "inflate_workflow")]
pub fn run(
    mut structure: Structure,
    config: &InflateConfig,
    reporter: &ProgressReporter,
) -> Result<InflateResult, EngineError> {
    // === Phase 1: Planar centers from the reference frame ===
    let shift = reporter.phase("Planar Centers", || {
        info!(
            "Measuring planar centers of {} residues ({} atoms) on frame 0.",
            structure.residue_count(),
            structure.atom_count()
        );
        let shift = LateralShift::compute(&structure, config.scale_factor)?;
        reporter.report(Progress::Message(format!(
            "Scale factor {} (multiplier {})",
            config.scale_factor,
            shift.multiplier()
        )));
        Ok::<_, EngineError>(shift)
    })?;

    // === Phase 2: Translate every frame ===
    reporter.phase("Translation", || {
        let frame_count = structure.frame_count();
        info!("Applying lateral translations to {} frame(s).", frame_count);
        reporter.report(Progress::TaskStart {
            total_steps: frame_count as u64,
        });
        shift.apply(&mut structure, || reporter.report(Progress::TaskIncrement))?;
        reporter.report(Progress::TaskFinish);
        Ok::<_, EngineError>(())
    })?;

    info!("Lateral rescaling complete.");
    Ok(InflateResult { structure, shift })
}

/// Applies output-side overrides from `config` to the metadata read with the input.
pub fn output_metadata(metadata: &FormatMetadata, config: &InflateConfig) -> FormatMetadata {
    let mut metadata = metadata.clone();
    match (&mut metadata, config.gro_decimals) {
        (FormatMetadata::Gro(gro), Some(decimals)) => match GroPrecision::new(decimals) {
            Some(precision) => gro.precision = precision,
            None => warn!(
                "Ignoring out-of-range GRO decimals {}; keeping {}.",
                decimals,
                gro.precision.decimals()
            ),
        },
        (FormatMetadata::Bgf(_), Some(decimals)) => warn!(
            "Decimals override ({}) only applies to GRO output; BGF coordinates keep 5 decimals.",
            decimals
        ),
        (_, None) => {}
    }
    metadata
}
