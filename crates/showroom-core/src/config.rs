//! Site and content API configuration.
//!
//! Configuration is an explicit value built once at process start and
//! handed to the content client. Sources, lowest precedence first:
//! built-in defaults, an optional TOML/JSON file, then variables looked up
//! by name (the process environment or Spin variables).

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Bucket slug variable.
pub const ENV_BUCKET_SLUG: &str = "COSMIC_BUCKET_SLUG";
/// Read key variable.
pub const ENV_READ_KEY: &str = "COSMIC_READ_KEY";
/// Write key variable. Accepted, never used on read paths.
pub const ENV_WRITE_KEY: &str = "COSMIC_WRITE_KEY";
/// `production` or `staging`.
pub const ENV_API_ENVIRONMENT: &str = "COSMIC_API_ENVIRONMENT";
/// Explicit API base URL, overrides the environment's default.
pub const ENV_API_URL: &str = "COSMIC_API_URL";
/// Display name used in the header, footer and page titles.
pub const ENV_SITE_NAME: &str = "SHOWROOM_SITE_NAME";

const DEFAULT_SITE_NAME: &str = "Elite Sports Cars";

/// Errors raised while assembling configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required setting `{0}`")]
    Missing(&'static str),

    #[error("invalid value for `{key}`: {message}")]
    Invalid { key: &'static str, message: String },

    #[error("failed to read config file {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse config file {path}: {message}")]
    Parse { path: String, message: String },
}

/// Which Cosmic API deployment to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiEnvironment {
    Production,
    #[default]
    Staging,
}

impl ApiEnvironment {
    /// Parse `production` / `staging` (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            _ => None,
        }
    }

    /// Default API base URL for this environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Production => "https://api.cosmicjs.com",
            Self::Staging => "https://api.cosmic-staging.com",
        }
    }
}

impl fmt::Display for ApiEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => f.write_str("production"),
            Self::Staging => f.write_str("staging"),
        }
    }
}

/// Content API connection settings.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ContentSettings {
    /// Bucket slug.
    #[serde(default)]
    pub bucket_slug: String,
    /// Read key, sent with every query.
    #[serde(default)]
    pub read_key: String,
    /// Write key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_key: Option<String>,
    /// API deployment.
    #[serde(default)]
    pub api_environment: ApiEnvironment,
    /// Base URL override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl ContentSettings {
    /// Effective API base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.api_url
            .as_deref()
            .unwrap_or_else(|| self.api_environment.base_url())
            .trim_end_matches('/')
    }
}

// Keys stay out of logs.
impl fmt::Debug for ContentSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentSettings")
            .field("bucket_slug", &self.bucket_slug)
            .field("read_key", &redact(&self.read_key))
            .field("write_key", &self.write_key.as_deref().map(redact))
            .field("api_environment", &self.api_environment)
            .field("api_url", &self.api_url)
            .finish()
    }
}

fn redact(key: &str) -> &'static str {
    if key.is_empty() {
        "<empty>"
    } else {
        "<redacted>"
    }
}

/// Presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Site display name.
    #[serde(default = "default_site_name")]
    pub name: String,
}

fn default_site_name() -> String {
    DEFAULT_SITE_NAME.to_string()
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: default_site_name(),
        }
    }
}

/// Complete site configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Content API settings.
    #[serde(default)]
    pub content: ContentSettings,
    /// Presentation settings.
    #[serde(default)]
    pub site: SiteSettings,
}

impl SiteConfig {
    /// Build from the process environment and validate.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup and validate.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self::default().with_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file. `.json` files are parsed as JSON, anything else
    /// as TOML. The result is not validated, since variables may still
    /// fill in missing keys.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: display.clone(),
            message: e.to_string(),
        })?;

        let parsed = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            toml::from_str(&content).map_err(|e| e.to_string())
        };
        parsed.map_err(|message| ConfigError::Parse {
            path: display,
            message,
        })
    }

    /// Apply variables on top of this config. Empty values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(slug) = get(ENV_BUCKET_SLUG) {
            self.content.bucket_slug = slug;
        }
        if let Some(key) = get(ENV_READ_KEY) {
            self.content.read_key = key;
        }
        if let Some(key) = get(ENV_WRITE_KEY) {
            self.content.write_key = Some(key);
        }
        if let Some(env) = get(ENV_API_ENVIRONMENT) {
            self.content.api_environment =
                ApiEnvironment::parse(&env).ok_or_else(|| ConfigError::Invalid {
                    key: ENV_API_ENVIRONMENT,
                    message: format!("expected `production` or `staging`, got `{}`", env),
                })?;
        }
        if let Some(url) = get(ENV_API_URL) {
            self.content.api_url = Some(url);
        }
        if let Some(name) = get(ENV_SITE_NAME) {
            self.site.name = name;
        }

        Ok(self)
    }

    /// Check that the content API can be reached with these settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content.bucket_slug.trim().is_empty() {
            return Err(ConfigError::Missing(ENV_BUCKET_SLUG));
        }
        if self.content.read_key.trim().is_empty() {
            return Err(ConfigError::Missing(ENV_READ_KEY));
        }
        if let Some(url) = &self.content.api_url {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigError::Invalid {
                    key: ENV_API_URL,
                    message: format!("`{}` is not an http(s) URL", url),
                });
            }
        }
        Ok(())
    }
}
