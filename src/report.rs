use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::finder::{FindError, Pair};

/// How a found pair is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// `Indices: 0, 1`
    #[default]
    Indices,
    /// `[0, 1]`
    Bracket,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Indices => write!(f, "indices"),
            OutputFormat::Bracket => write!(f, "bracket"),
        }
    }
}

pub fn render_pair(pair: &Pair, format: OutputFormat) -> String {
    match format {
        OutputFormat::Indices => format!("Indices: {}, {}", pair.first, pair.second),
        OutputFormat::Bracket => format!("[{}, {}]", pair.first, pair.second),
    }
}

/// Render a finder result, using the error's message for the not-found case.
pub fn render(result: &Result<Pair, FindError>, format: OutputFormat) -> String {
    match result {
        Ok(pair) => render_pair(pair, format),
        Err(e) => e.to_string(),
    }
}
