// src/config/mod.rs
//! Application settings.
//!
//! The analysis service base URL is resolved once at startup from layered
//! sources: built-in default, optional user config file, optional local
//! config file, then `DRILLSCAN_`-prefixed environment variables.

use anyhow::{bail, Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use url::Url;

/// Flask development server default address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the analysis service; `/analyze` and `/stats` hang off it.
    #[serde(default = "default_base_url")]
    pub api_base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: default_base_url(),
        }
    }
}

impl Settings {
    /// Load settings from files and environment (highest priority last).
    pub fn load() -> Result<Settings> {
        let mut builder = Config::builder();

        if let Some(config_dir) = dirs::config_dir() {
            let user_file = config_dir.join("drillscan").join("drillscan.toml");
            builder = builder.add_source(File::from(user_file).required(false));
        }

        let settings: Settings = builder
            .add_source(File::with_name("drillscan").required(false))
            .add_source(Environment::with_prefix("DRILLSCAN"))
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject base URLs the HTTP client cannot use before the UI starts.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api_base_url)
            .with_context(|| format!("Invalid api_base_url: {}", self.api_base_url))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => bail!("api_base_url must be http or https, got {}", other),
        }
    }

    pub fn analyze_url(&self) -> String {
        format!("{}/analyze", self.base())
    }

    pub fn stats_url(&self) -> String {
        format!("{}/stats", self.base())
    }

    fn base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_service() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url, "http://localhost:5000");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn endpoint_urls_derive_from_base() {
        let settings = Settings {
            api_base_url: "https://drill.example.com".to_string(),
        };
        assert_eq!(settings.analyze_url(), "https://drill.example.com/analyze");
        assert_eq!(settings.stats_url(), "https://drill.example.com/stats");
    }

    #[test]
    fn trailing_slash_does_not_double_up() {
        let settings = Settings {
            api_base_url: "http://10.0.0.5:5000/".to_string(),
        };
        assert_eq!(settings.analyze_url(), "http://10.0.0.5:5000/analyze");
        assert_eq!(settings.stats_url(), "http://10.0.0.5:5000/stats");
    }

    #[test]
    fn validate_rejects_non_http_schemes() {
        let settings = Settings {
            api_base_url: "ftp://drill.example.com".to_string(),
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            api_base_url: "not a url".to_string(),
        };
        assert!(settings.validate().is_err());
    }
}
