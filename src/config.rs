//! Command line configuration.
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

pub const LOG_ENV: &str = "COURSE_PLANNER_LOG";

#[derive(Parser, Debug)]
#[command(name = "course-planner", version, about = "Browse a course catalog and its prerequisites")]
pub struct Args {
    /// Course file to load before the menu starts
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Diagnostic level when no -v flag is given
    #[arg(long, env = LOG_ENV, default_value = "warn", value_parser = parse_level)]
    pub log_level: LevelFilter,
}

fn parse_level(value: &str) -> Result<LevelFilter, String> {
    value
        .parse::<LevelFilter>()
        .map_err(|_| format!("unknown log level `{value}` (expected off, error, warn, info, debug or trace)"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub preload: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let log_level = match args.verbose {
            0 => args.log_level,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        Config {
            preload: args.file,
            log_level,
        }
    }
}

impl Config {
    pub fn from_args() -> Self {
        Args::parse().into()
    }
}
