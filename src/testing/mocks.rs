use crate::error::{ConfigError, Result};
use crate::kubectx::ContextProvider;
use std::cell::Cell;

/// Mock kube-context provider for testing
pub struct MockContextProvider {
    response: Option<String>,
    calls: Cell<usize>,
}

impl MockContextProvider {
    /// Provider that reports `name` as the current context
    pub fn with_context(name: &str) -> Self {
        Self {
            response: Some(name.to_string()),
            calls: Cell::new(0),
        }
    }

    /// Provider whose query always fails
    pub fn failing() -> Self {
        Self {
            response: None,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ContextProvider for MockContextProvider {
    fn current_context(&self) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        self.response
            .clone()
            .ok_or_else(|| ConfigError::Context("current-context is not set".to_string()))
    }
}
