use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Settings file holding `[iexcloud] apikey`.
    #[arg(short, long, default_value = iex_spider::config::CONFIG_FILE)]
    pub config: PathBuf,

    /// Directory the symbol index, charts and company profiles are written to.
    #[arg(short, long, default_value = iex_spider::fs::DATA_DIR)]
    pub data_dir: PathBuf,

    /// Pause between two symbols, in milliseconds.
    ///
    /// Keeps the run under the IEX Cloud rate limit.
    #[arg(short, long, default_value_t = 1000)]
    pub pause_ms: u64,

    /// Extra attempts for a failed request, with exponential backoff.
    ///
    /// With the default of 0 every request is attempted exactly once.
    #[arg(short, long, default_value_t = 0)]
    pub retries: u32,

    /// Timeout of a single HTTP request, in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Sets the level of tracing.
    ///
    /// If no level is provided, progress is reported on the console instead.
    #[arg(short, long)]
    pub trace: Option<TraceLevel>,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
#[clap(rename_all = "UPPERCASE")]
pub enum TraceLevel {
    DEBUG,
    ERROR,
    INFO,
    TRACE,
    WARN,
}
