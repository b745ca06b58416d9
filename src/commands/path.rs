use crate::commands::SubCommand;
use crate::config::config_path;
use crate::core::options::ConfigOptions;
use crate::error::{ConfigError, Result};
use colored::*;
use log::warn;
use std::io::Write;

pub struct PathCommand;

#[derive(Debug, Clone, Default)]
pub struct PathArgs;

impl PathCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PathCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl SubCommand for PathCommand {
    type Args = PathArgs;

    fn run(&self, opts: &ConfigOptions, _args: Self::Args, out: &mut dyn Write) -> Result<()> {
        let path = config_path(opts.config_file())?;

        if !path.exists() {
            warn!(
                "No config file found at: {}",
                path.display().to_string().bright_cyan()
            );
        }

        writeln!(out, "{}", path.display()).map_err(|e| ConfigError::io("writing output", e))
    }
}
