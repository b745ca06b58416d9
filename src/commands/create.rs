use crate::commands::{formatter_for, SubCommand};
use crate::config::ConfigStore;
use crate::core::options::ConfigOptions;
use crate::core::types::KubeContext;
use crate::error::Result;
use std::io::Write;

/// Ensures an entry exists for the resolved kube-context and prints it
pub struct CreateCommand;

#[derive(Debug, Clone)]
pub struct CreateArgs {
    pub kube_context: KubeContext,
}

impl CreateCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CreateCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl SubCommand for CreateCommand {
    type Args = CreateArgs;

    fn run(&self, opts: &ConfigOptions, args: Self::Args, out: &mut dyn Write) -> Result<()> {
        let store = ConfigStore::locate(opts.config_file())?;
        let cfg = store.get_or_create_config_for_context(&args.kube_context, opts.global)?;
        formatter_for(opts).render(out, &cfg)
    }
}
