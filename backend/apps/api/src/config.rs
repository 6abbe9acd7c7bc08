//! Server configuration from environment variables

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use auth::AuthConfig;

pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub teachers_file: PathBuf,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
            .parse()
            .context("BIND_ADDR must be a socket address such as 0.0.0.0:8000")?;

        let teachers_file = env::var("TEACHERS_FILE")
            .unwrap_or_else(|_| "teachers.json".to_string())
            .into();

        let frontend_origins = env::var("FRONTEND_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:8000,http://127.0.0.1:8000".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let mut auth = if cfg!(debug_assertions) {
            AuthConfig::development()
        } else {
            AuthConfig::default()
        };

        if let Ok(value) = env::var("COOKIE_SECURE") {
            auth.cookie_secure = parse_bool(&value)
                .with_context(|| format!("COOKIE_SECURE must be true or false, got '{value}'"))?;
        }

        if let Ok(value) = env::var("SESSION_SWEEP_SECS") {
            let secs: u64 = value
                .parse()
                .with_context(|| format!("SESSION_SWEEP_SECS must be an integer, got '{value}'"))?;
            auth.sweep_interval = (secs > 0).then(|| Duration::from_secs(secs));
        }

        Ok(Self {
            bind_addr,
            teachers_file,
            frontend_origins,
            auth,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
