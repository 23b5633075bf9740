use clap::{Args, Parser};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "inflate",
    version,
    about = "Laterally inflate or deflate a lipid bilayer by rescaling each residue's XY center about the system center.",
    override_usage = "inflate [OPTIONS] INPUT_FILE OUTPUT_FILE SCALE_FACTOR",
    help_template = HELP_TEMPLATE,
    allow_negative_numbers = true
)]
pub struct Cli {
    #[command(flatten)]
    pub args: InflateArgs,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct InflateArgs {
    /// Input structure file (.gro or .bgf).
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// Output structure file, written in the input's format.
    #[arg(value_name = "OUTPUT_FILE")]
    pub output: PathBuf,

    /// Non-zero scale factor. Values above 1 spread residues apart, values between 0 and 1
    /// pull them together, and a negative value -k scales by -1/k.
    #[arg(value_name = "SCALE_FACTOR", allow_hyphen_values = true)]
    pub scale_factor: String,

    /// Optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write a per-residue CSV of centers and translations.
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Number of decimals for GRO coordinates in the output (1-10).
    #[arg(long, value_name = "N")]
    pub decimals: Option<usize>,

    /// Disable the progress display.
    #[arg(long)]
    pub no_progress: bool,
}
