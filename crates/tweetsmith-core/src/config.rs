use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the deployment mode.
pub const DEPLOYMENT_ENV_VAR: &str = "TWEETSMITH_ENV";

pub const PRODUCTION_BASE_URL: &str = "https://twitter-post-genai.vercel.app";
pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:3000";

/// Which generation service to talk to. Each mode maps to one fixed origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentMode {
    Production,
    Development,
}

impl DeploymentMode {
    /// Pick the mode once at startup from `TWEETSMITH_ENV`, falling back to
    /// the build profile.
    pub fn detect() -> Self {
        Self::from_env_value(std::env::var(DEPLOYMENT_ENV_VAR).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("production") => DeploymentMode::Production,
            Some(_) => DeploymentMode::Development,
            None if cfg!(debug_assertions) => DeploymentMode::Development,
            None => DeploymentMode::Production,
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            DeploymentMode::Production => PRODUCTION_BASE_URL,
            DeploymentMode::Development => DEVELOPMENT_BASE_URL,
        }
    }
}

impl std::fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeploymentMode::Production => write!(f, "production"),
            DeploymentMode::Development => write!(f, "development"),
        }
    }
}

/// Clipboard backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    /// System clipboard, falling back to OSC 52.
    #[default]
    Auto,
    System,
    Osc52,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TweetsmithConfig {
    #[serde(default)]
    pub request: RequestConfig,

    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfig {
    /// Upper bound on one submit round-trip.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

fn default_timeout() -> u64 {
    30
}

impl Default for TweetsmithConfig {
    fn default() -> Self {
        Self {
            request: RequestConfig::default(),
            clipboard: ClipboardConfig::default(),
        }
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
        }
    }
}

impl TweetsmithConfig {
    /// Load config from ~/.config/tweetsmith/config.toml, creating defaults if missing.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from an explicit path, writing defaults there if missing.
    pub fn load_from(config_path: &Path) -> crate::error::Result<Self> {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path).map_err(|e| {
                crate::error::TweetsmithError::Config(format!("Failed to read config: {e}"))
            })?;
            let config: TweetsmithConfig = toml::from_str(&contents).map_err(|e| {
                crate::error::TweetsmithError::Config(format!("Failed to parse config: {e}"))
            })?;
            if config.request.timeout_seconds == 0 {
                return Err(crate::error::TweetsmithError::Config(
                    "request.timeout_seconds must be greater than zero".into(),
                ));
            }
            Ok(config)
        } else {
            let config = TweetsmithConfig::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    /// Save config to disk.
    pub fn save_to(&self, config_path: &Path) -> crate::error::Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self).map_err(|e| {
            crate::error::TweetsmithError::Config(format!("Failed to serialize config: {e}"))
        })?;
        std::fs::write(config_path, contents)?;
        Ok(())
    }

    /// Get the config file path.
    pub fn config_path() -> crate::error::Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            crate::error::TweetsmithError::Config("Could not determine config directory".into())
        })?;
        Ok(config_dir.join("tweetsmith").join("config.toml"))
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request.timeout_seconds)
    }
}
