use crate::core::types::KubeContext;
use crate::error::{ConfigError, Result};
use log::*;
use std::process::Command;

/// Source of the currently active kube-context
pub trait ContextProvider {
    fn current_context(&self) -> Result<String>;
}

/// Asks `kubectl config current-context`
pub struct KubectlContextProvider {
    kubectl: String,
}

impl KubectlContextProvider {
    pub fn new(kubectl: impl Into<String>) -> Self {
        Self {
            kubectl: kubectl.into(),
        }
    }
}

impl Default for KubectlContextProvider {
    fn default() -> Self {
        let kubectl = std::env::var("KUBECTL_PATH").unwrap_or_else(|_| "kubectl".to_string());
        Self::new(kubectl)
    }
}

impl ContextProvider for KubectlContextProvider {
    fn current_context(&self) -> Result<String> {
        debug!("Running {} config current-context", self.kubectl);

        let output = Command::new(&self.kubectl)
            .args(["config", "current-context"])
            .output()
            .map_err(|e| ConfigError::Context(format!("failed to execute {}: {}", self.kubectl, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ConfigError::Context(format!(
                "{} exited with {}: {}",
                self.kubectl,
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Picks the kube-context that config lookups should use.
///
/// A non-empty explicit name always wins. Otherwise the provider is asked,
/// and a failed or empty answer falls back to `"default"`.
pub fn resolve_kube_context(explicit: Option<&str>, provider: &dyn ContextProvider) -> KubeContext {
    if let Some(name) = explicit.filter(|name| !name.is_empty()) {
        return KubeContext::from(name);
    }

    match provider.current_context() {
        Ok(name) if !name.trim().is_empty() => {
            debug!("Current kube-context: {}", name.trim());
            KubeContext::from(name.trim())
        }
        Ok(_) => {
            info!("no context currently set, falling back to default");
            KubeContext::default()
        }
        Err(e) => {
            warn!("{}", e);
            KubeContext::default()
        }
    }
}
