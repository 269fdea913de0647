use std::path::Path;

use feed::FieldOverrides;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration, loaded once at startup and passed down by
/// reference. Core logic never reads configuration ambiently.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the ntfy instance notifications are pushed to.
    #[serde(default = "default_ntfy_base_url")]
    pub ntfy_base_url: String,

    #[serde(default)]
    pub services: Vec<ServiceDescriptor>,
}

fn default_ntfy_base_url() -> String {
    "https://ntfy.sh".to_string()
}

impl Config {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// One feed provider.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceDescriptor {
    /// Unique short identifier; doubles as the notification topic.
    pub name: String,

    /// Feed URL with a `{{ ... }}` placeholder for the account id.
    pub url_template: String,

    /// Human-readable category label used in notifications, e.g. "Tweet".
    pub descriptor: String,

    /// Field-name overrides for feeds deviating from the RSS defaults.
    #[serde(default)]
    pub fields: FieldOverrides,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_config() {
        let config: Config = toml::from_str(
            r#"
            ntfy_base_url = "https://push.example.com"

            [[services]]
            name = "nitter"
            url_template = "https://nitter.example.com/{{ user }}/rss"
            descriptor = "Tweet"

            [[services]]
            name = "proxitok"
            url_template = "https://proxitok.example.com/@{{ user }}/rss"
            descriptor = "TikTok"

            [services.fields]
            pubdate = "published"
            display_name = "author"
            "#,
        )
        .unwrap();

        assert_eq!(config.ntfy_base_url, "https://push.example.com");
        assert_eq!(config.services.len(), 2);

        let nitter = &config.services[0];
        assert_eq!(nitter.name, "nitter");
        assert_eq!(nitter.descriptor, "Tweet");
        assert_eq!(nitter.fields, FieldOverrides::default());

        let proxitok = &config.services[1];
        assert_eq!(proxitok.fields.pubdate_tag(), "published");
        assert_eq!(proxitok.fields.display_name.as_deref(), Some("author"));
    }

    #[test]
    fn ntfy_base_url_defaults_to_the_public_instance() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.ntfy_base_url, "https://ntfy.sh");
        assert!(config.services.is_empty());
    }
}
