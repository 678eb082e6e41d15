// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, Serialize)]
pub struct ApiConfig {
    pub bind_addr: String,
    pub max_body_bytes: usize,
    pub request_timeout: Duration,
    /// `cache-control` max-age for static content responses.
    pub static_ttl: Duration,
    /// JSON page store; the built-in site is served when unset.
    pub pages_file: Option<PathBuf>,
    pub shutdown_drain: Duration,
    pub log_json: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            max_body_bytes: 16 * 1024,
            request_timeout: Duration::from_secs(5),
            static_ttl: Duration::from_secs(30),
            pages_file: None,
            shutdown_drain: Duration::from_secs(2),
            log_json: true,
        }
    }
}

impl ApiConfig {
    /// Reads `STMARK_*` variables from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ApiConfig::from_env`] over an arbitrary variable source.
    /// Unparsable values fall back to the defaults.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let env = EnvSource(lookup);
        let defaults = Self::default();
        Self {
            bind_addr: env
                .string("STMARK_BIND")
                .unwrap_or(defaults.bind_addr),
            max_body_bytes: env.usize("STMARK_MAX_BODY_BYTES", defaults.max_body_bytes),
            request_timeout: env
                .duration_ms("STMARK_REQUEST_TIMEOUT_MS", defaults.request_timeout),
            static_ttl: env.duration_ms("STMARK_STATIC_TTL_MS", defaults.static_ttl),
            pages_file: env.string("STMARK_PAGES_FILE").map(PathBuf::from),
            shutdown_drain: env
                .duration_ms("STMARK_SHUTDOWN_DRAIN_MS", defaults.shutdown_drain),
            log_json: env.bool("STMARK_LOG_JSON", defaults.log_json),
        }
    }
}

struct EnvSource<F>(F);

impl<F: Fn(&str) -> Option<String>> EnvSource<F> {
    fn string(&self, name: &str) -> Option<String> {
        (self.0)(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn bool(&self, name: &str, default: bool) -> bool {
        self.string(name)
            .and_then(|v| match v.as_str() {
                "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
                "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
                _ => None,
            })
            .unwrap_or(default)
    }

    fn usize(&self, name: &str, default: usize) -> usize {
        self.string(name)
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(default)
    }

    fn duration_ms(&self, name: &str, default: Duration) -> Duration {
        self.string(name)
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(default)
    }
}

pub fn validate_startup_config(api: &ApiConfig) -> Result<(), String> {
    if api.max_body_bytes == 0 {
        return Err("max body bytes must be > 0".to_string());
    }
    if api.request_timeout.is_zero() {
        return Err("request timeout must be > 0".to_string());
    }
    if api.bind_addr.parse::<std::net::SocketAddr>().is_err() {
        return Err(format!("invalid bind addr {}", api.bind_addr));
    }
    Ok(())
}
