use crate::core::types::OutputFormat;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::path::PathBuf;

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum OutputType {
    Yaml,
    Json,
}

impl From<OutputType> for OutputFormat {
    fn from(output: OutputType) -> Self {
        match output {
            OutputType::Yaml => OutputFormat::Yaml,
            OutputType::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the global skaffold config file (defaults to ~/.skaffold/config)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Kube-context to select config for (defaults to the current kubectl context)
    #[arg(long = "kube-context", short = 'k', global = true)]
    pub kube_context: Option<String>,

    /// Use the global config entry instead of a per-context one
    #[arg(long, short = 'g', global = true)]
    pub global: bool,

    /// Output format (yaml or json)
    #[arg(long, short = 'o', global = true, default_value = "yaml")]
    pub output: OutputType,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// List all values set in the global skaffold config
    List {
        /// Show values for all kube-contexts
        #[arg(long, short = 'a')]
        all: bool,
    },

    /// Ensure an entry exists for the current kube-context, creating it if missing
    Create,

    /// Print the location of the config file
    Path,
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::List { all: false })
    }
}
