use crate::core::types::KubeContext;
use crate::error::{ConfigError, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Location of the config file, relative to the home directory
pub const DEFAULT_CONFIG_LOCATION: &str = ".skaffold/config";

/// Root of the global skaffold config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global: Option<ContextConfig>,
    #[serde(default, rename = "kubeContexts")]
    pub context_configs: Vec<ContextConfig>,
}

/// Settings that apply to one kube-context (or globally)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ContextConfig {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kube_context: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_repo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_cluster: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub insecure_registries: Vec<String>,
    /// Settings this tool does not interpret, kept so rewrites don't drop them
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl ContextConfig {
    pub fn for_context(kube_context: &KubeContext) -> Self {
        Self {
            kube_context: kube_context.to_string(),
            ..Self::default()
        }
    }
}

impl GlobalConfig {
    /// First entry whose kube-context matches, duplicates are never consulted
    pub fn context_config(&self, kube_context: &KubeContext) -> Option<&ContextConfig> {
        self.context_configs
            .iter()
            .find(|cfg| cfg.kube_context == kube_context.as_str())
    }
}

/// Reads and parses the config file at `filename`
pub fn read_config_for_file(filename: impl AsRef<Path>) -> Result<GlobalConfig> {
    let filename = filename.as_ref();
    debug!("Loading config from: {:?}", filename);

    let contents =
        fs::read_to_string(filename).map_err(|e| ConfigError::io("reading global config", e))?;

    if contents.trim().is_empty() {
        debug!("Config file is empty");
        return Ok(GlobalConfig::default());
    }

    serde_yaml::from_str(&contents)
        .map_err(|e| ConfigError::parse("unmarshalling global skaffold config", e))
}

/// `<home>/.skaffold/config`
pub fn default_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(ConfigError::HomeDirUnavailable)?;
    Ok(home.join(DEFAULT_CONFIG_LOCATION))
}

/// Where the config file is expected to live, whether or not it exists
pub fn config_path(config_file: Option<&Path>) -> Result<PathBuf> {
    match config_file {
        Some(path) => absolute_path(path),
        None => default_config_path(),
    }
}

/// Like [`config_path`], but the file must already exist
pub fn resolve_config_path(config_file: Option<&Path>) -> Result<PathBuf> {
    let path = config_path(config_file)?;
    match fs::metadata(&path) {
        Ok(_) => Ok(path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ConfigError::NotFound { path }),
        Err(e) => Err(ConfigError::io("resolving config file location", e)),
    }
}

fn absolute_path(path: &Path) -> Result<PathBuf> {
    let expanded = match path.to_str() {
        Some(s) if s.starts_with('~') => PathBuf::from(shellexpand::tilde(s).into_owned()),
        _ => path.to_path_buf(),
    };
    if expanded.is_absolute() {
        return Ok(expanded);
    }
    std::path::absolute(&expanded).map_err(|e| ConfigError::io("resolving config file location", e))
}

/// File-backed access to the global config
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store for a known path, no existence check
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store for the explicit file or the default location
    pub fn locate(config_file: Option<&Path>) -> Result<Self> {
        let path = resolve_config_path(config_file)?;
        debug!("Using config file {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<GlobalConfig> {
        read_config_for_file(&self.path)
    }

    /// Overwrites the file with `cfg`
    pub fn write(&self, cfg: &GlobalConfig) -> Result<()> {
        let contents =
            serde_yaml::to_string(cfg).map_err(|e| ConfigError::serialization("marshaling config", e))?;
        debug!("Writing config to {}:\n{}", self.path.display(), contents);
        fs::write(&self.path, contents).map_err(|e| ConfigError::io("writing config file", e))
    }

    /// The entry for `kube_context`, or the global entry when `global` is set.
    ///
    /// A missing global entry yields an empty record rather than an error.
    pub fn config_for_context(&self, kube_context: &KubeContext, global: bool) -> Result<ContextConfig> {
        let cfg = self.read()?;
        if global {
            return Ok(cfg.global.unwrap_or_default());
        }
        cfg.context_config(kube_context)
            .cloned()
            .ok_or_else(|| ConfigError::NoEntryForContext(kube_context.to_string()))
    }

    /// Same as [`config_for_context`](Self::config_for_context), but a
    /// missing entry is appended and persisted before being returned.
    pub fn get_or_create_config_for_context(
        &self,
        kube_context: &KubeContext,
        global: bool,
    ) -> Result<ContextConfig> {
        let mut cfg = self.read()?;
        if global {
            return Ok(cfg.global.unwrap_or_default());
        }
        if let Some(existing) = cfg.context_config(kube_context) {
            return Ok(existing.clone());
        }

        let new_cfg = ContextConfig::for_context(kube_context);
        cfg.context_configs.push(new_cfg.clone());
        self.write(&cfg)?;

        info!("Created config entry for kube-context {}", kube_context);
        Ok(new_cfg)
    }
}
