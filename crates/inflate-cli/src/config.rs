mod defaults;

use crate::cli::InflateArgs;
use crate::error::{CliError, Result};
use bilayer_inflate::engine::config as core_config;
use bilayer_inflate::engine::scale::ScaleFactor;
use defaults::DefaultsConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    decimals: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialReportConfig {
    path: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialDisplayConfig {
    progress: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialInflateConfig {
    output: Option<PartialOutputConfig>,
    report: Option<PartialReportConfig>,
    display: Option<PartialDisplayConfig>,
}

/// Everything a single run needs, after merging CLI flags, the config file and defaults.
#[derive(Debug)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub inflate: core_config::InflateConfig,
    pub report: Option<PathBuf>,
    pub show_progress: bool,
}

impl PartialInflateConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => CliError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => CliError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Merges with command-line arguments. CLI flags win over file values, which win over
    /// [`DefaultsConfig`].
    pub fn merge_with_cli(self, args: &InflateArgs) -> Result<RunConfig> {
        let defaults = DefaultsConfig::default();
        let output_config = self.output.unwrap_or_default();
        let report_config = self.report.unwrap_or_default();
        let display_config = self.display.unwrap_or_default();

        let scale_factor: ScaleFactor = args.scale_factor.parse()?;
        let decimals = args
            .decimals
            .or(output_config.decimals)
            .or(defaults.decimals);

        let inflate = core_config::InflateConfigBuilder::new()
            .scale_factor(scale_factor)
            .gro_decimals(decimals)
            .build()?;

        let show_progress = if args.no_progress {
            false
        } else {
            display_config.progress.unwrap_or(defaults.show_progress)
        };

        Ok(RunConfig {
            input: args.input.clone(),
            output: args.output.clone(),
            inflate,
            report: args.report.clone().or(report_config.path),
            show_progress,
        })
    }
}
