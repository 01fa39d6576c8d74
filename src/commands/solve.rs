//! Solve command - Find a pair for a single sequence and target

use anyhow::Result;

use crate::{
    commands::parse_nums,
    config::Config,
    finder::{find_pair, Strategy},
    report::{render, OutputFormat},
};

/// Render the result for one sequence and target
pub fn solve(nums: &[i64], target: i64, strategy: Strategy, format: OutputFormat) -> String {
    render(&find_pair(nums, target, strategy), format)
}

/// Find a pair and print it; "not found" is a normal outcome, not an error
pub fn execute(
    config: &Config,
    nums: &str,
    target: i64,
    strategy: Option<Strategy>,
    format: Option<OutputFormat>,
) -> Result<()> {
    let nums = parse_nums(nums)?;
    let strategy = config.strategy_or_default(strategy);
    let format = config.format_or_default(format);

    println!("{}", solve(&nums, target, strategy, format));
    Ok(())
}
