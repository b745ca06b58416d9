use crate::core::types::OutputFormat;
use std::path::{Path, PathBuf};

/// Options shared by every config command
#[derive(Debug, Clone, Default)]
pub struct ConfigOptions {
    /// Explicit config file, `None` means `~/.skaffold/config`
    pub config_file: Option<PathBuf>,
    /// Explicit kube-context, `None` means ask kubectl
    pub kube_context: Option<String>,
    pub global: bool,
    pub output_format: OutputFormat,
}

impl ConfigOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// The explicit kube-context, ignoring empty values
    pub fn kube_context_override(&self) -> Option<&str> {
        self.kube_context.as_deref().filter(|name| !name.is_empty())
    }
}

/// Builder for creating config options
pub struct ConfigOptionsBuilder {
    opts: ConfigOptions,
}

impl ConfigOptionsBuilder {
    pub fn new() -> Self {
        Self {
            opts: ConfigOptions::new(),
        }
    }

    pub fn config_file(mut self, path: Option<PathBuf>) -> Self {
        self.opts.config_file = path;
        self
    }

    pub fn kube_context(mut self, name: Option<String>) -> Self {
        self.opts.kube_context = name;
        self
    }

    pub fn global(mut self, global: bool) -> Self {
        self.opts.global = global;
        self
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.opts.output_format = format;
        self
    }

    pub fn build(self) -> ConfigOptions {
        self.opts
    }
}

impl Default for ConfigOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
