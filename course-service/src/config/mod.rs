use crate::services::providers::gemini::GEMINI_API_BASE;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_TEXT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Deserialize)]
pub struct CourseConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub google: GoogleConfig,
    pub models: ModelConfig,
    pub static_files: StaticConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    /// Without a key every lesson is served from the fallback template.
    pub api_key: Option<String>,
    pub api_base: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    pub text_model: String,
    pub request_timeout_secs: u64,
    pub temperature: Option<f32>,
}

impl ModelConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticConfig {
    /// Directory holding `index.html` and front-end assets.
    pub dir: PathBuf,
}

impl CourseConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(CourseConfig {
            common: common_config,
            google: GoogleConfig {
                api_key: get_optional_env("GOOGLE_API_KEY", is_prod)?,
                api_base: get_env("GENAI_API_BASE", Some(GEMINI_API_BASE), is_prod)?,
            },
            models: ModelConfig {
                text_model: get_env("GENAI_TEXT_MODEL", Some(DEFAULT_TEXT_MODEL), is_prod)?,
                request_timeout_secs: get_env(
                    "GENAI_REQUEST_TIMEOUT_SECS",
                    Some(&DEFAULT_REQUEST_TIMEOUT_SECS.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
                temperature: env::var("GENAI_TEMPERATURE")
                    .ok()
                    .and_then(|t| t.parse().ok()),
            },
            static_files: StaticConfig {
                dir: env::var("STATIC_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| default_static_dir()),
            },
        })
    }
}

/// The `static/` directory shipped next to this crate's manifest.
pub fn default_static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

/// Like [`get_env`] but absent is allowed outside production.
fn get_optional_env(key: &str, is_prod: bool) -> Result<Option<String>, AppError> {
    match env::var(key) {
        Ok(val) if !val.is_empty() => Ok(Some(val)),
        _ if is_prod => Err(AppError::ConfigError(anyhow::anyhow!(
            "{} is required in production but not set",
            key
        ))),
        _ => Ok(None),
    }
}
