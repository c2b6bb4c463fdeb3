use crate::config::toml_config::TomlConfig;
use crate::config::ClientConfig;
use crate::core::Tab;
use crate::utils::error::Result;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TriggerKind {
    /// Context-menu click: result reported as a notification
    Menu,
    /// Popup: show the URL, then check it and render the result
    Popup,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "fraud-url-check")]
#[command(about = "Ask a prediction service whether a URL is fraudulent")]
pub struct CliConfig {
    #[arg(long, help = "URL of the tab to check; omit to simulate a tab without a URL")]
    pub url: Option<String>,

    #[arg(long, value_enum, default_value = "popup")]
    pub trigger: TriggerKind,

    #[arg(long, help = "Prediction endpoint (overrides the config file)")]
    pub endpoint: Option<String>,

    #[arg(long, help = "Request timeout in seconds (overrides the config file)")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "TOML config file with [endpoint] and [messages] sections")]
    pub config: Option<String>,

    #[arg(long, help = "Exit with code 4 when the prediction is a known threat")]
    pub fail_on_threat: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn tab(&self) -> Tab {
        Tab {
            url: self.url.clone(),
        }
    }

    /// Loads the config file if given, then applies flag overrides.
    pub fn resolve(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading config file {}", path);
                TomlConfig::from_file(path)?.into_client_config()
            }
            None => ClientConfig::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = Some(timeout);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let cli = CliConfig::parse_from(["fraud-url-check"]);
        assert_eq!(cli.trigger, TriggerKind::Popup);
        assert_eq!(cli.tab().url(), None);
        assert_eq!(cli.resolve().unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                b"[endpoint]\nurl = \"http://10.0.0.5:5000/predict\"\ntimeout_seconds = 30\n",
            )
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "fraud-url-check",
            "--trigger",
            "menu",
            "--url",
            "https://example.com",
            "--config",
            path.as_str(),
            "--timeout-seconds",
            "5",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(cli.trigger, TriggerKind::Menu);
        assert_eq!(cli.tab().url(), Some("https://example.com"));
        assert_eq!(config.endpoint, "http://10.0.0.5:5000/predict");
        assert_eq!(config.timeout_seconds, Some(5));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = CliConfig::parse_from(["fraud-url-check", "--config", "/nonexistent/fraud.toml"]);
        assert!(cli.resolve().is_err());
    }
}
