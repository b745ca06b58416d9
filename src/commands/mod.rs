use crate::core::options::ConfigOptions;
use crate::error::Result;
use crate::output::OutputFormatter;
use std::io::Write;

/// Base trait for all subcommands
pub trait SubCommand {
    type Args;

    fn run(&self, opts: &ConfigOptions, args: Self::Args, out: &mut dyn Write) -> Result<()>;
}

/// Formatter honouring the `--output` option
pub fn formatter_for(opts: &ConfigOptions) -> OutputFormatter {
    OutputFormatter::new().with_format(opts.output_format)
}

pub mod create;
pub mod list;
pub mod path;
pub mod runner;
