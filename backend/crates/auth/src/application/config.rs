//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::CookieSpec;
use platform::password::DEFAULT_COST;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Fixed session lifetime: 24 hours from login
pub const SESSION_TTL: Duration = Duration::from_secs(24 * 3600);

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session lifetime, counted from creation
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// bcrypt cost of every stored hash and of the decoy hash
    pub password_cost: u32,
    /// Period of the expired-session sweep; `None` leaves eviction lazy
    pub sweep_interval: Option<Duration>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "session_id".to_string(),
            session_ttl: SESSION_TTL,
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            password_cost: DEFAULT_COST,
            sweep_interval: Some(Duration::from_secs(600)),
        }
    }
}

impl AuthConfig {
    /// Create config for development (insecure cookie, plain-HTTP localhost)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::default()
        }
    }

    /// Cookie attributes for the session cookie
    ///
    /// Max-Age equals the session TTL so the browser never keeps the cookie
    /// longer than the server keeps the session.
    pub fn session_cookie(&self) -> CookieSpec {
        CookieSpec {
            secure: self.cookie_secure,
            same_site: self.cookie_same_site,
            max_age_secs: Some(self.session_ttl.as_secs()),
            ..CookieSpec::new(self.session_cookie_name.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuthConfig::default();

        assert_eq!(config.session_cookie_name, "session_id");
        assert_eq!(config.session_ttl, Duration::from_secs(86_400));
        assert!(config.cookie_secure);
        assert_eq!(config.cookie_same_site, SameSite::Lax);
        assert_eq!(config.password_cost, 12);
    }

    #[test]
    fn test_development_config() {
        let config = AuthConfig::development();
        assert!(!config.cookie_secure);
        assert_eq!(config.session_ttl, SESSION_TTL);
    }

    #[test]
    fn test_session_cookie_matches_ttl() {
        let cookie = AuthConfig::default().session_cookie();
        assert!(cookie.http_only);
        assert!(cookie.secure);
        assert_eq!(cookie.max_age_secs, Some(86_400));
    }
}
