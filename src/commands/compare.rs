//! Compare command - Run every strategy on the same input

use anyhow::Result;
use colored::Colorize;

use crate::{
    commands::parse_nums,
    finder::{find_pair, FindError, Pair, Strategy},
    report::{render, OutputFormat},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub results: Vec<(Strategy, Result<Pair, FindError>)>,
}

impl Comparison {
    pub fn run(nums: &[i64], target: i64) -> Self {
        let results = Strategy::ALL
            .iter()
            .map(|&s| (s, find_pair(nums, target, s)))
            .collect();
        Self { results }
    }

    /// True when every strategy reported the same pair (or all found none)
    pub fn agrees(&self) -> bool {
        self.results.windows(2).all(|w| w[0].1 == w[1].1)
    }
}

pub fn execute(nums: &str, target: i64, format: OutputFormat) -> Result<()> {
    let nums = parse_nums(nums)?;
    let comparison = Comparison::run(&nums, target);

    for (strategy, result) in &comparison.results {
        println!(
            "{:<12} {}",
            format!("{strategy}:").bold(),
            render(result, format)
        );
    }

    if comparison.agrees() {
        println!("{}", "✓ Strategies agree".green());
    } else {
        println!(
            "{}",
            "~ Strategies picked different pairs; both satisfy the target".yellow()
        );
    }

    Ok(())
}
