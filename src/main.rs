use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod api;
mod case;
mod commands;
mod config;
mod finder;
mod report;
mod test_runner;

use commands::{config::ConfigUpdate, fetch::FetchOptions};
use config::Config;
use finder::Strategy;
use report::OutputFormat;

#[derive(Parser)]
#[command(name = "pair-sum")]
#[command(about = "Find two indices whose values add up to a target")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a pair in a sequence that sums to the target
    Solve {
        /// Sequence, e.g. "2,7,11,15" or "[2,7,11,15]"
        #[arg(short, long, allow_hyphen_values = true)]
        nums: String,
        /// Target sum
        #[arg(short, long, allow_hyphen_values = true)]
        target: i64,
        /// Search strategy (defaults to the configured one)
        #[arg(short, long, value_enum)]
        strategy: Option<Strategy>,
        /// Output format (defaults to the configured one)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Run every strategy on the same input and compare
    Compare {
        /// Sequence, e.g. "2,7,11,15" or "[2,7,11,15]"
        #[arg(short, long, allow_hyphen_values = true)]
        nums: String,
        /// Target sum
        #[arg(short, long, allow_hyphen_values = true)]
        target: i64,
    },
    /// Run a case file
    Run {
        /// Case file (JSON)
        file: PathBuf,
        /// Search strategy (defaults to the configured one)
        #[arg(short, long, value_enum)]
        strategy: Option<Strategy>,
    },
    /// Fetch a problem's examples from LeetCode
    Fetch {
        /// Problem URL or slug
        problem: String,
        /// Save the examples as a case file
        #[arg(long)]
        save: bool,
        /// Run the examples after fetching
        #[arg(long)]
        run: bool,
        /// Search strategy used with --run
        #[arg(short, long, value_enum)]
        strategy: Option<Strategy>,
    },
    /// Show or update saved defaults
    Config {
        /// Default search strategy
        #[arg(short, long, value_enum)]
        strategy: Option<Strategy>,
        /// Default output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
        /// LeetCode base URL
        #[arg(long)]
        base_url: Option<String>,
        /// Directory for fetched case files
        #[arg(long)]
        cases_dir: Option<PathBuf>,
        /// Restore defaults before applying other flags
        #[arg(long)]
        reset: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "pair_sum=debug"
    } else {
        "pair_sum=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

impl Commands {
    /// `config --reset` must not depend on the stored file being readable
    fn needs_stored_config(&self) -> bool {
        !matches!(self, Commands::Config { reset: true, .. })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = if cli.command.needs_stored_config() {
        Config::load()?
    } else {
        Config::default()
    };

    match cli.command {
        Commands::Solve {
            nums,
            target,
            strategy,
            format,
        } => {
            commands::solve::execute(&config, &nums, target, strategy, format)?;
        }
        Commands::Compare { nums, target } => {
            commands::compare::execute(&nums, target, config.output_format)?;
        }
        Commands::Run { file, strategy } => {
            let summary = commands::run::execute(&config, &file, strategy)?;
            std::process::exit(commands::exit_code(&summary));
        }
        Commands::Fetch {
            problem,
            save,
            run,
            strategy,
        } => {
            let options = FetchOptions {
                save,
                run,
                strategy,
            };
            if let Some(summary) = commands::fetch::execute(&config, &problem, options).await? {
                std::process::exit(commands::exit_code(&summary));
            }
        }
        Commands::Config {
            strategy,
            format,
            base_url,
            cases_dir,
            reset,
        } => {
            let update = ConfigUpdate {
                strategy,
                format,
                base_url,
                cases_dir,
            };
            commands::config::execute(config, update, reset)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_solve_with_negative_values() {
        let cli = Cli::try_parse_from([
            "pair-sum", "solve", "--nums", "-3,4,3,90", "--target", "-0", "-s", "brute-force",
        ])
        .unwrap();

        match cli.command {
            Commands::Solve {
                nums,
                target,
                strategy,
                format,
            } => {
                assert_eq!(nums, "-3,4,3,90");
                assert_eq!(target, 0);
                assert_eq!(strategy, Some(Strategy::BruteForce));
                assert!(format.is_none());
            }
            _ => panic!("expected solve"),
        }
    }

    #[test]
    fn test_parse_fetch_flags() {
        let cli = Cli::try_parse_from(["pair-sum", "-v", "fetch", "two-sum", "--save", "--run"])
            .unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Fetch {
                save: true,
                run: true,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_unknown_strategy() {
        assert!(Cli::try_parse_from([
            "pair-sum", "solve", "-n", "1,2", "-t", "3", "-s", "quantum"
        ])
        .is_err());
    }

    #[test]
    fn test_reset_skips_stored_config() {
        let cli = Cli::try_parse_from(["pair-sum", "config", "--reset"]).unwrap();
        assert!(!cli.command.needs_stored_config());

        let cli = Cli::try_parse_from(["pair-sum", "config", "-s", "brute-force"]).unwrap();
        assert!(cli.command.needs_stored_config());

        let cli = Cli::try_parse_from(["pair-sum", "solve", "-n", "1,2", "-t", "3"]).unwrap();
        assert!(cli.command.needs_stored_config());
    }
}
