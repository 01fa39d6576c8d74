//! Command modules for pair-sum
//!
//! Each submodule handles a specific CLI subcommand.

pub mod compare;
pub mod config;
pub mod fetch;
pub mod run;
pub mod solve;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::{case::parse_sequence, case::TestCase, test_runner::RunSummary};

/// Parse a `--nums` argument such as `2,7,11,15` or `[2,7,11,15]`
pub fn parse_nums(text: &str) -> Result<Vec<i64>> {
    parse_sequence(text).with_context(|| format!("invalid --nums value `{text}`"))
}

/// Print fetched examples as colored input/output blocks
pub fn print_examples(cases: &[TestCase]) {
    for case in cases {
        println!("{} {}", "input:".blue().bold(), case.input.white());
        println!("{} {}", "output:".green().bold(), case.expected.white());
        if let Some(ref explanation) = case.explanation {
            println!("{} {}", "explanation:".italic(), explanation);
        }
        println!();
    }
}

/// Map a runner summary to the process exit code
pub fn exit_code(summary: &RunSummary) -> i32 {
    if summary.all_passed() {
        0
    } else {
        1
    }
}
