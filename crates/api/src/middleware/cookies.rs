//! Refresh-token cookie management.
//!
//! The refresh token travels only in an HTTP-only cookie. Its `Secure`
//! and `SameSite` attributes are derived from one configuration flag:
//! secure mode gives `Secure; SameSite=None` (cross-site over HTTPS),
//! local/dev mode gives `SameSite=Lax` without `Secure`.

use axum::http::{HeaderMap, header};

/// Name of the refresh token cookie.
pub const REFRESH_COOKIE: &str = "refresh_token";

/// Builds `Set-Cookie` values for the refresh token.
#[derive(Debug, Clone, Copy)]
pub struct RefreshCookie {
    secure: bool,
}

impl RefreshCookie {
    /// Create a cookie builder for the given security mode.
    #[must_use]
    pub const fn new(secure: bool) -> Self {
        Self { secure }
    }

    /// Build a `Set-Cookie` value carrying `value` for `max_age_secs`
    /// seconds. A negative `max_age_secs` expires the cookie immediately.
    #[must_use]
    pub fn set(&self, value: &str, max_age_secs: i64) -> String {
        let mut cookie = format!("{REFRESH_COOKIE}={value}; HttpOnly; Path=/");

        if self.secure {
            cookie.push_str("; Secure; SameSite=None");
        } else {
            cookie.push_str("; SameSite=Lax");
        }

        // Negative max-age means "delete": emit Max-Age=0 so the client
        // drops the cookie at once.
        let max_age = max_age_secs.max(0);
        cookie.push_str(&format!("; Max-Age={max_age}"));

        cookie
    }

    /// Build a `Set-Cookie` value that clears the refresh token (logout).
    #[must_use]
    pub fn clear(&self) -> String {
        self.set("", -1)
    }
}

/// Extract a cookie value from request headers.
#[must_use]
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;

            if key == name {
                Some(value.to_string())
            } else {
                None
            }
        })
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_secure_mode_attributes() {
        let cookie = RefreshCookie::new(true).set("tok123", 3600);
        assert!(cookie.starts_with("refresh_token=tok123"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=None"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=3600"));
    }

    #[test]
    fn test_dev_mode_attributes() {
        let cookie = RefreshCookie::new(false).set("tok123", 3600);
        assert!(cookie.contains("HttpOnly"));
        assert!(!cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Lax"));
    }

    #[test]
    fn test_clear_expires_immediately() {
        let cookie = RefreshCookie::new(true).clear();
        assert!(cookie.starts_with("refresh_token=;"));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn test_extract_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("foo=bar; refresh_token=abc123; other=xyz"),
        );

        assert_eq!(
            extract_cookie(&headers, REFRESH_COOKIE),
            Some("abc123".to_string())
        );
        assert_eq!(extract_cookie(&headers, "foo"), Some("bar".to_string()));
        assert_eq!(extract_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_extract_cookie_no_header() {
        let headers = HeaderMap::new();
        assert_eq!(extract_cookie(&headers, REFRESH_COOKIE), None);
    }
}
