use reqwest::Url as ServiceUrl;
use serde::Deserialize;
use thiserror::Error;

/// The base URL the checks are run against when none is provided.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// It parses the configuration from a JSON format.
///
/// # Errors
///
/// Will return an error if the configuration is not valid.
pub fn parse_from_json(json: &str) -> Result<Configuration, ConfigurationError> {
    let plain_config: PlainConfiguration = serde_json::from_str(json).map_err(ConfigurationError::JsonParseError)?;
    Configuration::try_from(plain_config)
}

/// DTO for the configuration to serialize/deserialize configuration.
///
/// Configuration does not need to be valid.
#[derive(Deserialize)]
pub struct PlainConfiguration {
    pub base_url: String,
}

/// Validated configuration
#[derive(Debug, Clone)]
pub struct Configuration {
    pub base_url: ServiceUrl,
}

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("JSON parse error: {0}")]
    JsonParseError(serde_json::Error),
    #[error("Invalid URL: {0}")]
    InvalidUrl(url::ParseError),
    #[error("Unsupported URL scheme: \"{scheme}\", only http and https are allowed")]
    UnsupportedScheme { scheme: String },
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.parse().expect("default base URL should be valid"),
        }
    }
}

impl TryFrom<PlainConfiguration> for Configuration {
    type Error = ConfigurationError;

    fn try_from(plain_config: PlainConfiguration) -> Result<Self, Self::Error> {
        let mut base_url = plain_config
            .base_url
            .parse::<ServiceUrl>()
            .map_err(ConfigurationError::InvalidUrl)?;

        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            return Err(ConfigurationError::UnsupportedScheme {
                scheme: base_url.scheme().to_string(),
            });
        }

        // `Url::join` replaces the last path segment unless the base path
        // ends with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Configuration { base_url })
    }
}
