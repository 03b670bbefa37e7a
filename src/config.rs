// src/config.rs
use std::{env, fmt, path::PathBuf, str::FromStr, time::Duration};

use axum::http::HeaderValue;
use tracing::{info, warn};

use crate::error::{ConfigError, UpstreamError};

pub const DEFAULT_CHAT_ROUTE: &str = "/api/gemini";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-05-20";
pub const DEFAULT_API_KEY_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub routes: RouteConfig,
    pub gemini: GeminiConfig,
}

#[derive(Debug, Clone)]
pub struct RouteConfig {
    pub chat_path: String,
    pub static_dir: PathBuf,
    pub cors_origin: Option<CorsOrigin>,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            chat_path: DEFAULT_CHAT_ROUTE.to_string(),
            static_dir: PathBuf::from("public"),
            cors_origin: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigin {
    Any,
    Exact(HeaderValue),
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: ApiKey,
    pub timeout: Duration,
}

/// Where the upstream credential comes from.
///
/// `Env` is resolved on every call so a rotated key is picked up without a restart.
#[derive(Clone)]
pub enum ApiKey {
    Env(String),
    Static(String),
}

impl ApiKey {
    pub fn resolve(&self) -> Result<String, UpstreamError> {
        let key = match self {
            ApiKey::Env(var) => env::var(var).ok(),
            ApiKey::Static(key) => Some(key.clone()),
        };
        key.filter(|k| !k.trim().is_empty())
            .ok_or_else(|| UpstreamError::MissingApiKey(self.source_name().to_string()))
    }

    fn source_name(&self) -> &str {
        match self {
            ApiKey::Env(var) => var,
            ApiKey::Static(_) => "static key",
        }
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiKey::Env(var) => f.debug_tuple("Env").field(var).finish(),
            ApiKey::Static(_) => f.debug_tuple("Static").field(&"<redacted>").finish(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let chat_path: String = try_load(&lookup, "CHAT_ROUTE", DEFAULT_CHAT_ROUTE)?;
        if !chat_path.starts_with('/') {
            return Err(ConfigError::Invalid {
                key: "CHAT_ROUTE",
                value: chat_path,
                reason: "must start with '/'".to_string(),
            });
        }

        let cors_origin = match lookup("CORS_ALLOW_ORIGIN") {
            None => None,
            Some(origin) if origin.trim() == "*" => Some(CorsOrigin::Any),
            Some(origin) => Some(CorsOrigin::Exact(HeaderValue::from_str(origin.trim()).map_err(
                |e| ConfigError::Invalid {
                    key: "CORS_ALLOW_ORIGIN",
                    value: origin.clone(),
                    reason: e.to_string(),
                },
            )?)),
        };

        let api_key_var: String = try_load(&lookup, "GEMINI_API_KEY_VAR", DEFAULT_API_KEY_VAR)?;
        if lookup(api_key_var.as_str()).is_none_or(|k| k.trim().is_empty()) {
            warn!("{api_key_var} is not set; chat requests will fail until it is");
        }

        let timeout_secs: u64 = try_load(&lookup, "UPSTREAM_TIMEOUT_SECS", "30")?;

        Ok(Self {
            host: try_load(&lookup, "HOST", "0.0.0.0")?,
            port: try_load(&lookup, "PORT", "3000")?,
            routes: RouteConfig {
                chat_path,
                static_dir: try_load(&lookup, "STATIC_DIR", "public")?,
                cors_origin,
            },
            gemini: GeminiConfig {
                base_url: try_load(&lookup, "GEMINI_BASE_URL", DEFAULT_BASE_URL)?,
                model: try_load(&lookup, "GEMINI_MODEL", DEFAULT_MODEL)?,
                api_key: ApiKey::Env(api_key_var),
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: fmt::Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: value.clone(),
        reason: e.to_string(),
    })
}
