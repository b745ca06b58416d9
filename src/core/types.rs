use serde::{Deserialize, Serialize};
use std::fmt;

/// Name used when no kube-context can be determined
pub const DEFAULT_KUBE_CONTEXT: &str = "default";

/// Strongly typed kube-context name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KubeContext(String);

impl KubeContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_KUBE_CONTEXT
    }
}

impl Default for KubeContext {
    fn default() -> Self {
        Self(DEFAULT_KUBE_CONTEXT.to_string())
    }
}

impl fmt::Display for KubeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for KubeContext {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for KubeContext {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
