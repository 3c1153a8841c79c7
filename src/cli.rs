use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::scores::extrema::{DEFAULT_MAX_PERCENTAGE, DEFAULT_MIN_PERCENTAGE};
use crate::scores::peaks::{DEFAULT_MIN_RUN, DEFAULT_PERCENT};

#[derive(Debug, Parser)]
#[command(
    name = "motion-metric-ft",
    version,
    about = "Builds instruction-tuning records from motion metric arrays"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Validate(ValidateArgs),
    Describe(DescribeArgs),
    Peaks(PeaksArgs),
    Instructions(InstructionsArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, help = "Directory holding one .npy metric array per sequence")]
    pub input: PathBuf,

    #[arg(
        long,
        help = "Output JSON path (default: combined_output.json, or a per-metric name with --metric)"
    )]
    pub out: Option<PathBuf>,

    #[arg(
        long,
        visible_alias = "max_percentage",
        allow_negative_numbers = true,
        default_value_t = DEFAULT_MAX_PERCENTAGE,
        help = "Fraction of the absolute maximum a frame must reach to count as a maximum"
    )]
    pub max_percentage: f64,

    #[arg(
        long,
        visible_alias = "min_percentage",
        allow_negative_numbers = true,
        default_value_t = DEFAULT_MIN_PERCENTAGE,
        help = "Fraction of the value span above the minimum still counted as a minimum"
    )]
    pub min_percentage: f64,

    #[arg(long, help = "Only emit records for this metric id")]
    pub metric: Option<u32>,

    #[arg(
        long,
        help = "Instruction TSV to overlay on the built-in table; non-ASCII text is written as \\uXXXX escapes"
    )]
    pub instructions: Option<PathBuf>,

    #[arg(long, default_value_t = 0, help = "Number of threads (0 = auto, 1 = sequential)")]
    pub threads: usize,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, help = "Directory holding one .npy metric array per sequence")]
    pub input: PathBuf,

    #[arg(long, help = "Instruction TSV to overlay on the built-in table")]
    pub instructions: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct DescribeArgs {
    #[arg(long, help = "Directory holding one .npy metric array per sequence")]
    pub input: PathBuf,

    #[arg(long, help = "Report path (default: <input>/metrics_output.txt)")]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct PeaksArgs {
    #[arg(long, help = "Directory holding one .npy metric array per sequence")]
    pub input: PathBuf,

    #[arg(
        long,
        default_value_t = DEFAULT_PERCENT,
        help = "Share of frames, in percent, taken from each end of the ranking"
    )]
    pub percent: f64,

    #[arg(
        long,
        visible_alias = "min_run",
        default_value_t = DEFAULT_MIN_RUN,
        help = "Consecutive frames a band needs before it is reported as a peak"
    )]
    pub min_run: usize,

    #[arg(long, help = "Report path (default: print to stdout)")]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct InstructionsArgs {
    #[command(subcommand)]
    pub command: InstructionsCommand,
}

#[derive(Debug, Subcommand)]
pub enum InstructionsCommand {
    Show(InstructionsShowArgs),
}

#[derive(Debug, Args)]
pub struct InstructionsShowArgs {
    #[arg(long, help = "Instruction TSV to overlay on the built-in table")]
    pub instructions: Option<PathBuf>,
}
