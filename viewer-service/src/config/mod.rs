use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use validator::Validate;

/// Largest multipart body accepted by default (20 MiB).
const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ViewerConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    #[validate(nested)]
    pub server: ServerSettings,
    pub cors: CorsSettings,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ServerSettings {
    #[validate(range(min = 1, message = "max_upload_bytes must be at least 1"))]
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsSettings {
    /// Empty, or containing `*`, means every origin is accepted.
    pub allowed_origins: Vec<String>,
}

impl CorsSettings {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            server: ServerSettings {
                max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            },
            cors: CorsSettings::default(),
        }
    }
}

impl ViewerConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common_config = core_config::Config::load()?;

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let config = ViewerConfig {
            common: common_config,
            server: ServerSettings {
                max_upload_bytes: get_env(
                    "VIEWER_MAX_UPLOAD_BYTES",
                    Some(&DEFAULT_MAX_UPLOAD_BYTES.to_string()),
                    is_prod,
                )?
                .parse::<usize>()
                .map_err(|e| {
                    AppError::ConfigError(anyhow::anyhow!(
                        "VIEWER_MAX_UPLOAD_BYTES is not a valid size: {}",
                        e
                    ))
                })?,
            },
            cors: CorsSettings {
                allowed_origins: parse_origins(&get_env("VIEWER_CORS_ORIGINS", Some("*"), is_prod)?),
            },
        };

        config.validate()?;

        Ok(config)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
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
