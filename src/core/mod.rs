pub mod options;
pub mod types;

pub use options::{ConfigOptions, ConfigOptionsBuilder};
pub use types::{KubeContext, OutputFormat, DEFAULT_KUBE_CONTEXT};
