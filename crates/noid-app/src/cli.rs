use std::path::PathBuf;

use clap::Parser;
use noid_config::Config;
use noid_config::search::parse_alphabet;

/// Harvest the NOID dictionary into a TSV file.
///
/// Flags override `NOID_*` environment variables, which override the defaults.
#[derive(Debug, Parser)]
#[command(name = "noid", version)]
pub struct Cli {
    /// Output TSV path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Letters to query, e.g. "abc"
    #[arg(short, long)]
    pub letters: Option<String>,

    #[arg(long)]
    pub base_url: Option<String>,

    /// Index name passed as `source`
    #[arg(long)]
    pub source: Option<String>,

    #[arg(long)]
    pub from: Option<u32>,

    /// Page size per letter
    #[arg(long)]
    pub size: Option<u32>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Log as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    pub fn apply(&self, config: &mut Config) {
        if let Some(output) = &self.output {
            config.export.output = output.clone();
        }
        if let Some(letters) = self.letters.as_deref().map(parse_alphabet) {
            if !letters.is_empty() {
                config.search.alphabet = letters;
            }
        }
        if let Some(base_url) = &self.base_url {
            config.search.base_url = base_url.clone();
        }
        if let Some(source) = &self.source {
            config.search.source = source.clone();
        }
        if let Some(from) = self.from {
            config.search.from = from;
        }
        if let Some(size) = self.size {
            config.search.size = size;
        }
        if self.timeout_seconds.is_some() {
            config.search.timeout_seconds = self.timeout_seconds;
        }
    }
}
