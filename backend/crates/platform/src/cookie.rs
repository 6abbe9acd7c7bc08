//! Cookies
//!
//! Renders `Set-Cookie` values from a [`CookieSpec`] and reads values back
//! out of request `Cookie` headers.

use std::fmt::Write;

use axum::http::{HeaderMap, header};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Name and attributes of one cookie
#[derive(Debug, Clone)]
pub struct CookieSpec {
    pub name: String,
    pub path: String,
    pub http_only: bool,
    pub secure: bool,
    pub same_site: SameSite,
    /// Lifetime in seconds; `None` makes a browser-session cookie
    pub max_age_secs: Option<u64>,
}

impl CookieSpec {
    /// Spec with `Path=/`, HttpOnly, Secure and SameSite=Lax
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: "/".to_string(),
            http_only: true,
            secure: true,
            same_site: SameSite::Lax,
            max_age_secs: None,
        }
    }

    /// `Set-Cookie` value storing `value`
    pub fn set_header(&self, value: &str) -> String {
        let mut out = format!("{}={}", self.name, value);
        self.write_attributes(&mut out);
        if let Some(max_age) = self.max_age_secs {
            let _ = write!(out, "; Max-Age={max_age}");
        }
        out
    }

    /// `Set-Cookie` value that expires the cookie immediately
    ///
    /// Carries the same Path/Secure/SameSite as [`Self::set_header`];
    /// browsers only replace a cookie whose attributes match.
    pub fn clear_header(&self) -> String {
        let mut out = format!("{}=", self.name);
        self.write_attributes(&mut out);
        out.push_str("; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT");
        out
    }

    /// This cookie's value in a request, if present and non-empty
    pub fn read(&self, headers: &HeaderMap) -> Option<String> {
        find_cookie(headers, &self.name)
    }

    fn write_attributes(&self, out: &mut String) {
        let _ = write!(out, "; Path={}", self.path);
        if self.http_only {
            out.push_str("; HttpOnly");
        }
        if self.secure {
            out.push_str("; Secure");
        }
        let _ = write!(out, "; SameSite={}", self.same_site.as_str());
    }
}

/// First non-empty value of cookie `name`
///
/// Every `Cookie` header is searched; HTTP/2 clients may send several.
pub fn find_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, value)| *key == name && !value.is_empty())
        .map(|(_, value)| value.to_string())
}
