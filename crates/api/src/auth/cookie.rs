//! The `token` session cookie: building `Set-Cookie` values and reading
//! the cookie back from requests.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

use crate::config::DeploymentMode;

pub const SESSION_COOKIE_NAME: &str = "token";

/// `SameSite` cookie attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    None,
}

impl SameSite {
    fn as_str(self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::None => "None",
        }
    }
}

/// Attributes shared by the issuing and clearing cookies.
///
/// Production front-ends are served from another site, so the cookie must
/// be `Secure; SameSite=None` to be sent cross-site. Elsewhere it stays
/// `SameSite=Strict` over plain HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookiePolicy {
    pub secure: bool,
    pub same_site: SameSite,
}

impl CookiePolicy {
    pub fn for_mode(mode: DeploymentMode) -> Self {
        if mode.is_production() {
            Self {
                secure: true,
                same_site: SameSite::None,
            }
        } else {
            Self {
                secure: false,
                same_site: SameSite::Strict,
            }
        }
    }

    fn attributes(&self) -> String {
        let secure_flag = if self.secure { "; Secure" } else { "" };
        format!(
            "HttpOnly{secure_flag}; SameSite={}; Path=/",
            self.same_site.as_str()
        )
    }
}

/// `Set-Cookie` value carrying a freshly issued token.
#[must_use]
pub fn session_cookie(token: &str, max_age_secs: i64, policy: CookiePolicy) -> String {
    format!(
        "{SESSION_COOKIE_NAME}={token}; {}; Max-Age={max_age_secs}",
        policy.attributes()
    )
}

/// `Set-Cookie` value that makes the client drop the session cookie at once.
#[must_use]
pub fn clear_session_cookie(policy: CookiePolicy) -> String {
    format!(
        "{SESSION_COOKIE_NAME}=; {}; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT",
        policy.attributes()
    )
}

/// Find a non-empty cookie value by name across all `Cookie` headers.
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, value)| *key == name && !value.is_empty())
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn development_cookie_is_strict_and_not_secure() {
        let cookie = session_cookie("abc", 31_536_000, CookiePolicy::for_mode(DeploymentMode::Development));
        assert_eq!(cookie, "token=abc; HttpOnly; SameSite=Strict; Path=/; Max-Age=31536000");
    }

    #[test]
    fn production_cookie_is_secure_cross_site() {
        let cookie = session_cookie("abc", 60, CookiePolicy::for_mode(DeploymentMode::Production));
        assert_eq!(cookie, "token=abc; HttpOnly; Secure; SameSite=None; Path=/; Max-Age=60");
    }

    #[test]
    fn clearing_cookie_expires_immediately() {
        let cookie = clear_session_cookie(CookiePolicy::for_mode(DeploymentMode::Production));
        assert!(cookie.starts_with("token=; HttpOnly; Secure; SameSite=None; Path=/"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("Expires=Thu, 01 Jan 1970 00:00:00 GMT"));
    }

    #[test]
    fn reads_cookie_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark; token=xyz; lang=en"));
        assert_eq!(read_cookie(&headers, "token"), Some("xyz"));
        assert_eq!(read_cookie(&headers, "lang"), Some("en"));
        assert_eq!(read_cookie(&headers, "missing"), None);
    }

    #[test]
    fn reads_cookie_from_second_header() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(COOKIE, HeaderValue::from_static("token=abc"));
        assert_eq!(read_cookie(&headers, "token"), Some("abc"));
    }

    #[test]
    fn empty_cookie_counts_as_absent() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("token="));
        assert_eq!(read_cookie(&headers, "token"), None);
    }

    #[test]
    fn prefix_named_cookie_is_not_confused() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("refresh_token=nope"));
        assert_eq!(read_cookie(&headers, "token"), None);
    }
}
