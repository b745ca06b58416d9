use crate::cli::{Cli, Commands};
use crate::commands::{
    create::{CreateArgs, CreateCommand},
    list::{ListArgs, ListCommand},
    path::{PathArgs, PathCommand},
    SubCommand,
};
use crate::core::options::{ConfigOptions, ConfigOptionsBuilder};
use crate::core::types::KubeContext;
use crate::error::Result;
use crate::kubectx::{resolve_kube_context, ContextProvider};
use log::debug;
use std::io::Write;

/// Command runner that handles routing and execution
pub struct CommandRunner {
    context_provider: Box<dyn ContextProvider>,
}

impl CommandRunner {
    pub fn new(context_provider: Box<dyn ContextProvider>) -> Self {
        Self { context_provider }
    }

    /// Build the options every command receives from the global flags
    pub fn options(cli: &Cli) -> ConfigOptions {
        ConfigOptionsBuilder::new()
            .config_file(cli.config.clone())
            .kube_context(cli.kube_context.clone())
            .global(cli.global)
            .output_format(cli.output.into())
            .build()
    }

    /// Resolved once per invocation and passed to the command explicitly
    fn kube_context(&self, opts: &ConfigOptions) -> KubeContext {
        let ctx = resolve_kube_context(opts.kube_context_override(), self.context_provider.as_ref());
        debug!("Using kube-context {}", ctx);
        ctx
    }

    /// Run a command based on CLI arguments
    pub fn run(&self, cli: &Cli, out: &mut dyn Write) -> Result<()> {
        debug!("CommandRunner::run() called with command: {:?}", cli.command());

        let opts = Self::options(cli);

        match cli.command() {
            Commands::List { all } => {
                let args = ListArgs {
                    kube_context: self.kube_context(&opts),
                    show_all: all,
                };
                ListCommand::new().run(&opts, args, out)
            }
            Commands::Create => {
                let args = CreateArgs {
                    kube_context: self.kube_context(&opts),
                };
                CreateCommand::new().run(&opts, args, out)
            }
            Commands::Path => PathCommand::new().run(&opts, PathArgs, out),
        }
    }
}
