use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A global record and a single `prod` entry
pub const PROD_ONLY: &str = r#"global: {}
kubeContexts:
- kube-context: prod
"#;

/// A populated global record and three contexts, including a duplicate
pub const FULL: &str = r#"global:
  default-repo: gcr.io/global
  local-cluster: false
kubeContexts:
- kube-context: minikube
  local-cluster: true
- kube-context: prod
  default-repo: gcr.io/prod
  insecure-registries:
  - registry.prod.local:5000
- kube-context: minikube
  default-repo: shadowed
"#;

/// Writes `contents` to `<dir>/config` and returns its path
pub fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config");
    fs::write(&path, contents).expect("Failed to write test config");
    path
}
