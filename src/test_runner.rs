use std::path::Path;

use anyhow::Result;
use colored::*;

use crate::{
    case::{parse_expected, CaseError, CaseFile, PairInput, TestCase},
    finder::{find_pair, Strategy},
    report::{render, OutputFormat},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub passed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub outcomes: Vec<CaseOutcome>,
}

impl RunSummary {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

pub struct TestRunner {
    strategy: Strategy,
    cases: Vec<TestCase>,
}

impl TestRunner {
    pub fn new(strategy: Strategy, cases: Vec<TestCase>) -> Self {
        Self { strategy, cases }
    }

    pub fn from_file(path: &Path, strategy: Strategy) -> Result<Self> {
        let file = CaseFile::load(path)?;
        Ok(Self::new(strategy, file.test_cases))
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Run every case. Malformed cases fail individually rather than aborting the run.
    pub fn run(&self) -> RunSummary {
        let outcomes = self
            .cases
            .iter()
            .enumerate()
            .map(|(i, case)| {
                tracing::debug!(case = i + 1, input = %case.input, "running case");
                self.run_case(case)
            })
            .collect();

        RunSummary { outcomes }
    }

    fn run_case(&self, case: &TestCase) -> CaseOutcome {
        let (actual, passed) = match self.evaluate(case) {
            Ok(result) => result,
            Err(e) => (format!("Error: {e}"), false),
        };

        CaseOutcome {
            input: case.input.clone(),
            expected: case.expected.clone(),
            actual,
            passed,
        }
    }

    fn evaluate(&self, case: &TestCase) -> Result<(String, bool), CaseError> {
        let input = PairInput::parse(&case.input)?;
        let expected = parse_expected(&case.expected)?;

        let result = find_pair(&input.nums, input.target, self.strategy);
        let actual = render(&result, OutputFormat::Bracket);

        Ok((actual, result.ok() == expected))
    }
}

pub fn print_summary(summary: &RunSummary, strategy: Strategy) {
    println!(
        "{}",
        format!(
            "Running {} cases with the {} strategy...",
            summary.outcomes.len(),
            strategy
        )
        .cyan()
    );

    for (i, outcome) in summary.outcomes.iter().enumerate() {
        println!("\n{} {}", "Test Case".bold(), format!("#{}", i + 1).cyan());
        println!("  {} {}", "Input:".bold(), outcome.input);
        println!("  {} {}", "Program Output:".bold(), outcome.actual);
        println!("  {} {}", "Expected Output:".bold(), outcome.expected);
        if outcome.passed {
            println!("  {} {}", "Result:".bold(), "PASSED".green());
        } else {
            println!("  {} {}", "Result:".bold(), "FAILED".red());
        }
    }

    println!("\n{}", "-".repeat(60));
    let line = format!(
        "test result: {} passed; {} failed",
        summary.passed(),
        summary.failed()
    );
    if summary.all_passed() {
        println!("{}", line.green());
        println!("{}", "✓ All tests passed!".green().bold());
    } else {
        println!("{}", line.red());
        println!("{}", "✗ Some tests failed".red().bold());
    }
}
