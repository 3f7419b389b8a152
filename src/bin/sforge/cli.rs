use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "sforge",
    about = "Molecular structure comparison and serum synthesis",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare a human dataset with a Vitales dataset and synthesize a serum
    #[command(visible_alias = "a")]
    Analyze(AnalyzeArgs),

    /// Discover the molecular structures of a single dataset
    #[command(visible_alias = "s")]
    Structures(StructuresArgs),
}

impl Command {
    pub fn common(&self) -> &CommonOptions {
        match self {
            Command::Analyze(args) => &args.common,
            Command::Structures(args) => &args.common,
        }
    }
}

/// Output and verbosity options shared by all commands.
#[derive(Args)]
pub struct CommonOptions {
    /// Output file(s), repeatable for multi-format output
    #[arg(short, long, value_name = "FILE", action = ArgAction::Append)]
    pub output: Vec<PathBuf>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Structure discovery options shared by all commands.
#[derive(Args)]
#[command(next_help_heading = "Discovery")]
pub struct DiscoveryOptions {
    /// Structure discovery strategy (overrides the config file)
    #[arg(long, value_name = "STRATEGY")]
    pub discovery: Option<Discovery>,
}

/// Report formatting options.
#[derive(Args)]
#[command(next_help_heading = "Report")]
pub struct ReportOptions {
    /// Analysis configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Decimal places for bond strengths in reports
    #[arg(long, value_name = "N")]
    pub precision: Option<usize>,

    /// Heading label for the human dataset
    #[arg(long = "human-label", value_name = "LABEL")]
    pub human_label: Option<String>,

    /// Heading label for the Vitales dataset
    #[arg(long = "vitales-label", value_name = "LABEL")]
    pub vitales_label: Option<String>,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Dataset of typical human molecules
    #[arg(long, value_name = "FILE")]
    pub human: PathBuf,

    /// Dataset of Vitales molecules
    #[arg(long, value_name = "FILE")]
    pub vitales: PathBuf,

    #[command(flatten)]
    pub common: CommonOptions,

    /// Input format for both datasets (inferred from extension if not specified)
    #[arg(long = "infmt", value_name = "FORMAT")]
    pub input_format: Option<InputFormat>,

    /// Output format for first/only output
    #[arg(long = "outfmt", value_name = "FORMAT")]
    pub output_format: Option<OutputFormat>,

    #[command(flatten)]
    pub discovery: DiscoveryOptions,

    #[command(flatten)]
    pub report: ReportOptions,
}

#[derive(Args)]
pub struct StructuresArgs {
    /// Input dataset (stdin if omitted, requires --infmt)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonOptions,

    /// Input format (inferred from extension if not specified)
    #[arg(long = "infmt", value_name = "FORMAT")]
    pub input_format: Option<InputFormat>,

    /// Output format for first/only output
    #[arg(long = "outfmt", value_name = "FORMAT")]
    pub output_format: Option<OutputFormat>,

    /// Heading label for the dataset in reports
    #[arg(long, value_name = "LABEL", default_value = "the dataset")]
    pub label: String,

    #[command(flatten)]
    pub discovery: DiscoveryOptions,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum InputFormat {
    /// TOML molecule tables
    Toml,
    /// One molecule per line: ID STRENGTH [BOND ...]
    #[value(alias = "txt")]
    Text,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[value(alias = "txt")]
    Report,
    /// Machine-readable TOML summary
    Toml,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Discovery {
    /// Scan the whole store for referrers of every visited molecule
    #[value(name = "scan", alias = "reverse-scan")]
    Scan,
    /// Build a forward/reverse adjacency index once per dataset
    Indexed,
}

pub fn parse() -> Cli {
    Cli::parse()
}
