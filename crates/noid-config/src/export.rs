use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT: &str = "noid.tsv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// TSV destination, relative paths resolve against the working directory
    pub output: PathBuf,
}

impl ExportConfig {
    pub fn new() -> Self {
        let output = env::var("NOID_OUTPUT").unwrap_or_else(|_| DEFAULT_OUTPUT.to_string());

        Self {
            output: PathBuf::from(output),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}
