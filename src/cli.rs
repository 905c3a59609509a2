use std::path::PathBuf;

use clap::Parser;

/// Terminal task board for students.
/// Configuration is read from ./studyflow.toml or the user config directory unless --config is given.
#[derive(Parser, Debug)]
#[command(name = "studyflow", version, about = "Plan study tasks from the terminal")]
pub struct Cli {
    /// Path to a configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write a default configuration file and exit (defaults to the user config directory)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub generate_config: Option<Option<PathBuf>>,

    /// Make the task sink reject every submission
    #[arg(long)]
    pub fail_submissions: bool,

    /// Artificial sink latency in milliseconds (overrides the config file)
    #[arg(long, value_name = "MS")]
    pub latency_ms: Option<u64>,
}
