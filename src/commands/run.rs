//! Run command - Execute a case file against the finder

use std::path::Path;

use anyhow::Result;

use crate::{
    config::Config,
    finder::Strategy,
    test_runner::{print_summary, RunSummary, TestRunner},
};

/// Run all cases in `file` and print the outcome of each
pub fn execute(config: &Config, file: &Path, strategy: Option<Strategy>) -> Result<RunSummary> {
    let strategy = config.strategy_or_default(strategy);
    let runner = TestRunner::from_file(file, strategy)?;

    let summary = runner.run();
    print_summary(&summary, runner.strategy());
    Ok(summary)
}
