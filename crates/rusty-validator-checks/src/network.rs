//! Network address validation functions

use std::net::IpAddr;

use url::Url;

/// Validates an IPv4 or IPv6 literal.
///
/// Zone identifiers (`fe80::1%eth0`) and surrounding whitespace are not
/// accepted.
pub fn is_valid_ip(value: &str) -> bool {
    value.parse::<IpAddr>().is_ok()
}

/// Validates an absolute URL.
///
/// Uses RFC 3986 parsing and additionally requires a non-empty host, so
/// `mailto:` or `file:///` style URLs are rejected.
pub fn is_valid_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => url.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_validation() {
        assert!(is_valid_ip("127.0.0.1"));
        assert!(is_valid_ip("255.255.255.255"));
        assert!(is_valid_ip("::1"));
        assert!(is_valid_ip("2001:db8::ff00:42:8329"));

        assert!(!is_valid_ip(""));
        assert!(!is_valid_ip("256.0.0.1"));
        assert!(!is_valid_ip("1.2.3"));
        assert!(!is_valid_ip("localhost"));
        assert!(!is_valid_ip(" 10.0.0.1"));
    }

    #[test]
    fn test_url_validation() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://test.co.uk"));
        assert!(is_valid_url("https://example.com/path?q=1#top"));
        assert!(is_valid_url("ftp://files.example.com"));
        assert!(is_valid_url("http://localhost:8080"));

        assert!(!is_valid_url(""));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("mailto:user@example.com"));
        assert!(!is_valid_url("not a url"));
    }
}
