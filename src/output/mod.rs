use crate::core::types::OutputFormat;
use crate::error::{ConfigError, Result};
use serde::Serialize;
use std::io::Write;

/// Renders config values to an output stream
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new() -> Self {
        Self {
            format: OutputFormat::Yaml,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Serialize `value` to a string in the configured format
    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<String> {
        match self.format {
            OutputFormat::Yaml => serde_yaml::to_string(value)
                .map_err(|e| ConfigError::serialization("marshaling config", e)),
            OutputFormat::Json => serde_json::to_string_pretty(value)
                .map(|json| json + "\n")
                .map_err(|e| ConfigError::serialization("marshaling config", e)),
        }
    }

    /// Write `value` to `out`. Nothing is written if serialization fails.
    pub fn render<T: Serialize, W: Write + ?Sized>(&self, out: &mut W, value: &T) -> Result<()> {
        let rendered = self.serialize(value)?;
        out.write_all(rendered.as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| ConfigError::io("writing output", e))
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ContextConfig, GlobalConfig};

    fn sample() -> GlobalConfig {
        GlobalConfig {
            global: Some(ContextConfig {
                default_repo: Some("gcr.io/me".to_string()),
                ..ContextConfig::default()
            }),
            context_configs: vec![ContextConfig {
                kube_context: "prod".to_string(),
                local_cluster: Some(false),
                ..ContextConfig::default()
            }],
        }
    }

    #[test]
    fn test_yaml_render() {
        let mut out = Vec::new();
        OutputFormatter::new().render(&mut out, &sample()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("default-repo: gcr.io/me"));
        assert!(text.contains("kube-context: prod"));
        assert!(text.contains("local-cluster: false"));

        let parsed: GlobalConfig = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_json_render() {
        let mut out = Vec::new();
        OutputFormatter::new()
            .with_format(OutputFormat::Json)
            .render(&mut out, &sample())
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["global"]["default-repo"], "gcr.io/me");
        assert_eq!(value["kubeContexts"][0]["kube-context"], "prod");
        assert_eq!(value["kubeContexts"][0]["local-cluster"], false);
    }

    #[test]
    fn test_empty_record_renders_as_empty_map() {
        let text = OutputFormatter::new()
            .serialize(&ContextConfig::default())
            .unwrap();
        assert_eq!(text.trim(), "{}");
    }
}
