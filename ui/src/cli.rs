use clap::{Parser, ValueEnum};

use crate::patterns::Pattern;

/// Command-line arguments. Anything left unset falls back to `Config`
/// defaults.
#[derive(Parser, Debug)]
#[command(
    name = "cellgrid",
    version,
    about = "Runs a cellular automaton in the terminal, printing one frame per generation."
)]
pub struct Cli {
    /// Which simulation to run
    #[arg(value_enum, default_value_t = RuleKind::Life)]
    pub rule: RuleKind,

    /// Width of the field in cells
    #[arg(short = 'W', long, value_name = "N")]
    pub width: Option<usize>,

    /// Height of the field in cells
    #[arg(short = 'H', long, value_name = "N")]
    pub height: Option<usize>,

    /// Number of generations to run
    #[arg(short, long, value_name = "N")]
    pub generations: Option<u64>,

    /// Starting pattern (Life-like rules only)
    #[arg(short, long, value_enum)]
    pub pattern: Option<Pattern>,

    /// Life-like rule string, such as "B3/S23"
    #[arg(short = 'r', long = "life-rule", value_name = "RULE")]
    pub life_rule: Option<String>,

    /// Delay between frames in milliseconds
    #[arg(short, long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Compute each generation on a single thread
    #[arg(long)]
    pub serial: bool,

    /// Increase verbosity level (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
pub enum RuleKind {
    /// Life-like totalistic rule on live/dead cells
    Life,
    /// Falling streams of words
    Matrix,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
