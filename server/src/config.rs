use config::{Config, Environment, File, FileFormat};
use request::GenerationConfig;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use chat::gemini::GEMINI_API_BASE_URL;

pub const CONFIG_FILE: &str = "config.yaml";
pub const ENV_PREFIX: &str = "EMAIL_GENERATOR";

pub const DEFAULT_MODEL_NAME: &str = "gemini-1.5-flash";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1000;
pub const DEFAULT_TOP_P: f32 = 0.9;
pub const DEFAULT_TOP_K: u32 = 40;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] config::ConfigError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub api_key: Option<String>,
    pub model_name: String,
    pub api_base_url: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub top_p: f32,
    pub top_k: u32,
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub log_level: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Settings::default().into()
    }
}

impl Configuration {
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            temperature: Some(self.temperature),
            max_output_tokens: Some(self.max_output_tokens),
            top_p: Some(self.top_p),
            top_k: Some(self.top_k),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Settings {
    gemini: GeminiSettings,
    api: ApiSettings,
    logging: LoggingSettings,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct GeminiSettings {
    api_key: Option<String>,
    model: String,
    base_url: String,
    temperature: f32,
    max_output_tokens: u32,
    top_p: f32,
    top_k: u32,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL_NAME.to_string(),
            base_url: GEMINI_API_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            top_p: DEFAULT_TOP_P,
            top_k: DEFAULT_TOP_K,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ApiSettings {
    host: String,
    port: u16,
    debug: bool,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            debug: true,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct LoggingSettings {
    level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl From<Settings> for Configuration {
    fn from(settings: Settings) -> Self {
        let Settings {
            gemini,
            api,
            logging,
        } = settings;

        Self {
            api_key: gemini.api_key.filter(|key| !key.trim().is_empty()),
            model_name: gemini.model,
            api_base_url: gemini.base_url,
            temperature: gemini.temperature,
            max_output_tokens: gemini.max_output_tokens,
            top_p: gemini.top_p,
            top_k: gemini.top_k,
            host: api.host,
            port: api.port,
            debug: api.debug,
            log_level: logging.level,
        }
    }
}

pub fn load_config() -> Result<Configuration, ConfigLoadError> {
    load_config_from(Path::new(CONFIG_FILE))
}

// `EMAIL_GENERATOR__*` environment variables are layered over the file.
pub fn load_config_from(path: &Path) -> Result<Configuration, ConfigLoadError> {
    if !path.is_file() {
        return Err(ConfigLoadError::NotFound(path.display().to_string()));
    }

    let settings: Settings = Config::builder()
        .add_source(File::new(&path.to_string_lossy(), FileFormat::Yaml))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    Ok(settings.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigLoadError::NotFound(_)));
        assert!(err.to_string().contains("config.yaml"));
    }

    #[test]
    fn full_document_is_read() {
        let file = write_config(
            r#"
gemini:
  api_key: "secret"
  model: "gemini-pro"
  temperature: 0.2
  max_output_tokens: 512
  top_p: 0.5
  top_k: 10
api:
  host: "0.0.0.0"
  port: 8080
  debug: false
logging:
  level: "DEBUG"
"#,
        );

        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.model_name, "gemini-pro");
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.max_output_tokens, 512);
        assert_eq!(config.top_p, 0.5);
        assert_eq!(config.top_k, 10);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert!(!config.debug);
        assert_eq!(config.log_level, "DEBUG");
    }

    #[test]
    fn absent_keys_use_defaults_and_unknown_keys_are_ignored() {
        let file = write_config(
            r#"
gemini:
  api_key: "secret"
  region: "eu"
email:
  signature: "Support Team"
"#,
        );

        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.model_name, DEFAULT_MODEL_NAME);
        assert_eq!(config.api_base_url, GEMINI_API_BASE_URL);
        assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(config.max_output_tokens, DEFAULT_MAX_OUTPUT_TOKENS);
        assert_eq!(config.top_p, DEFAULT_TOP_P);
        assert_eq!(config.top_k, DEFAULT_TOP_K);
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.debug);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn missing_or_blank_api_key_is_absent() {
        let file = write_config("gemini:\n  model: \"gemini-pro\"\n");
        assert!(load_config_from(file.path()).unwrap().api_key.is_none());

        let file = write_config("gemini:\n  api_key: \"  \"\n");
        assert!(load_config_from(file.path()).unwrap().api_key.is_none());
    }

    #[test]
    fn mistyped_value_is_invalid() {
        let file = write_config("api:\n  port: \"not a port\"\n");
        let err = load_config_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Invalid(_)));
    }

    #[test]
    fn default_configuration_has_no_api_key() {
        let config = Configuration::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.bind_address(), "127.0.0.1:5000");
        assert_eq!(
            config.generation_config(),
            GenerationConfig {
                temperature: Some(0.7),
                max_output_tokens: Some(1000),
                top_p: Some(0.9),
                top_k: Some(40),
            }
        );
    }
}
