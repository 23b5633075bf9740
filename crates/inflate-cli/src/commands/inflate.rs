use crate::cli::InflateArgs;
use crate::config::PartialInflateConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use bilayer_inflate::{
    core::io::{
        load_structure,
        report::{ReportError, write_shift_report_to_path},
        save_structure,
    },
    engine::progress::ProgressReporter,
    workflows,
};
use std::path::PathBuf;
use tracing::info;

/// What a successful run produced, for the final console summary.
#[derive(Debug)]
pub struct InflateSummary {
    pub output: PathBuf,
    pub report: Option<PathBuf>,
    pub frames: usize,
    pub residues: usize,
}

pub fn run(args: &InflateArgs) -> Result<InflateSummary> {
    let partial_config = match &args.config {
        Some(path) => PartialInflateConfig::from_file(path)?,
        None => PartialInflateConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(args)?;

    info!("Loading input structure from {:?}", &config.input);
    let loaded = load_structure(&config.input)?;

    let progress_handler = config.show_progress.then(CliProgressHandler::new);
    let reporter = match &progress_handler {
        Some(handler) => ProgressReporter::with_callback(handler.get_callback()),
        None => ProgressReporter::new(),
    };

    info!(
        "Invoking the inflate workflow with scale factor {}...",
        config.inflate.scale_factor
    );
    let result = workflows::inflate::run(loaded.structure, &config.inflate, &reporter)?;

    let metadata = workflows::inflate::output_metadata(&loaded.metadata, &config.inflate);
    info!("Writing output structure to {:?}", &config.output);
    save_structure(&config.output, &result.structure, &metadata)?;

    if let Some(report_path) = &config.report {
        info!("Writing shift report to {:?}", report_path);
        write_shift_report_to_path(report_path, result.structure.topology(), &result.shift)
            .map_err(|e| match e {
                ReportError::Io(source) => CliError::Io {
                    path: report_path.clone(),
                    source,
                },
                other => CliError::Other(other.into()),
            })?;
    }

    Ok(InflateSummary {
        output: config.output,
        report: config.report,
        frames: result.structure.frame_count(),
        residues: result.structure.residue_count(),
    })
}
