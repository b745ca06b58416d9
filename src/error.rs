use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`ConfigError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
    Serialization,
    NotFound,
    Context,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("resolving config file location: retrieving home directory")]
    HomeDirUnavailable,

    #[error("resolving config file location: {} does not exist", .path.display())]
    NotFound { path: PathBuf },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("{context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{context}: {source}")]
    Serialization {
        context: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("no config entry found for kube-context {0}")]
    NoEntryForContext(String),

    #[error("retrieving current kubectl context: {0}")]
    Context(String),
}

impl ConfigError {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        ConfigError::Io {
            context: context.into(),
            source,
        }
    }

    pub fn parse(context: impl Into<String>, source: serde_yaml::Error) -> Self {
        ConfigError::Parse {
            context: context.into(),
            source,
        }
    }

    pub fn serialization<E>(context: impl Into<String>, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        ConfigError::Serialization {
            context: context.into(),
            source: Box::new(source),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::HomeDirUnavailable
            | ConfigError::NotFound { .. }
            | ConfigError::Io { .. } => ErrorKind::Io,
            ConfigError::Parse { .. } => ErrorKind::Parse,
            ConfigError::Serialization { .. } => ErrorKind::Serialization,
            ConfigError::NoEntryForContext(_) => ErrorKind::NotFound,
            ConfigError::Context(_) => ErrorKind::Context,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
