//! Configuration and CLI argument handling

use clap::Parser;
use tracing::warn;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "sedentary")]
#[command(about = "Reminds you to break up sedentary time based on keyboard and mouse activity")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Work session length in seconds
    #[arg(value_name = "WORK_SECS", allow_hyphen_values = true)]
    pub work: String,

    /// Break length in seconds
    #[arg(value_name = "BREAK_SECS", allow_hyphen_values = true)]
    pub rest: String,

    /// Seconds without input after which a prompted break counts as started
    #[arg(long, default_value = "30")]
    pub idle_threshold: u64,

    /// Capacity of the raw input event queue
    #[arg(long, default_value = "256")]
    pub input_buffer: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    pub fn work_duration_secs(&self) -> u64 {
        parse_duration("work", &self.work)
    }

    pub fn break_duration_secs(&self) -> u64 {
        parse_duration("break", &self.rest)
    }

    pub fn idle_threshold_ms(&self) -> i64 {
        i64::try_from(self.idle_threshold.saturating_mul(1000)).unwrap_or(i64::MAX)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

/// Malformed durations fall back to zero rather than refusing to start
fn parse_duration(name: &str, value: &str) -> u64 {
    value.trim().parse().unwrap_or_else(|_| {
        warn!("Invalid {} duration '{}', using 0 seconds", name, value);
        0
    })
}
