//! Config command - Show or update saved defaults

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use crate::{
    config::{get_config_path, reset_config, Config},
    finder::Strategy,
    report::OutputFormat,
};

#[derive(Debug, Default)]
pub struct ConfigUpdate {
    pub strategy: Option<Strategy>,
    pub format: Option<OutputFormat>,
    pub base_url: Option<String>,
    pub cases_dir: Option<PathBuf>,
}

impl ConfigUpdate {
    pub fn is_empty(&self) -> bool {
        self.strategy.is_none()
            && self.format.is_none()
            && self.base_url.is_none()
            && self.cases_dir.is_none()
    }

    /// Apply the requested changes, returning true if anything was set
    pub fn apply(self, config: &mut Config) -> bool {
        let changed = !self.is_empty();

        if let Some(strategy) = self.strategy {
            config.default_strategy = strategy;
        }
        if let Some(format) = self.format {
            config.output_format = format;
        }
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(cases_dir) = self.cases_dir {
            config.cases_dir = Some(cases_dir);
        }

        changed
    }
}

pub fn execute(mut config: Config, update: ConfigUpdate, reset: bool) -> Result<()> {
    if reset {
        config = reset_config()?;
        println!("{}", "✓ Config reset to defaults".green());
    }

    if update.apply(&mut config) {
        config.save()?;
        println!("{}", "✓ Config saved".green());
    }

    println!("{} {}", "Config file:".bold(), get_config_path()?.display());
    println!("{} {}", "Default strategy:".bold(), config.default_strategy);
    println!("{} {}", "Output format:".bold(), config.output_format);
    println!("{} {}", "Base URL:".bold(), config.base_url);
    println!("{} {}", "Cases dir:".bold(), config.cases_dir().display());

    Ok(())
}
