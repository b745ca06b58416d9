use crate::commands::{formatter_for, SubCommand};
use crate::config::ConfigStore;
use crate::core::options::ConfigOptions;
use crate::core::types::KubeContext;
use crate::error::Result;
use log::debug;
use std::io::Write;

pub struct ListCommand;

#[derive(Debug, Clone)]
pub struct ListArgs {
    /// Resolved kube-context to select the entry for
    pub kube_context: KubeContext,
    /// Print the whole config instead of a single entry
    pub show_all: bool,
}

impl ListCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ListCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl SubCommand for ListCommand {
    type Args = ListArgs;

    fn run(&self, opts: &ConfigOptions, args: Self::Args, out: &mut dyn Write) -> Result<()> {
        let store = ConfigStore::locate(opts.config_file())?;
        let formatter = formatter_for(opts);

        if args.show_all {
            debug!("Listing full config from {}", store.path().display());
            let cfg = store.read()?;
            return formatter.render(out, &cfg);
        }

        debug!(
            "Listing config for kube-context {} (global: {})",
            args.kube_context, opts.global
        );
        let cfg = store.config_for_context(&args.kube_context, opts.global)?;
        formatter.render(out, &cfg)
    }
}
