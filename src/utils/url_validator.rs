//! URL shape validation and hostname resolvability checks.
//!
//! The HTTP layer validates submitted URLs before any store interaction:
//! the input must parse as an http(s) URL with a non-empty hostname, and
//! the hostname must resolve via name lookup. Rejecting early guards the
//! store from persisting garbage and avoids wasting counter values.

use async_trait::async_trait;
use url::Url;

/// Extracts the hostname from a candidate URL.
///
/// Returns `None` if the input does not parse as a URL, uses a scheme other
/// than HTTP/HTTPS, or has no hostname.
pub fn parse_hostname(input: &str) -> Option<String> {
    let url = Url::parse(input).ok()?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return None,
    }

    url.host_str()
        .filter(|host| !host.is_empty())
        .map(str::to_owned)
}

/// Name lookup boundary.
///
/// DNS is an external collaborator, so it sits behind a trait: production
/// uses [`DnsResolver`]; tests substitute stubs to keep the suite hermetic.
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Returns true if the hostname resolves to at least one address.
    async fn resolve(&self, hostname: &str) -> bool;
}

/// System resolver backed by `tokio::net::lookup_host`.
pub struct DnsResolver;

#[async_trait]
impl HostResolver for DnsResolver {
    async fn resolve(&self, hostname: &str) -> bool {
        // The port is irrelevant to name resolution; 80 keeps the query well formed.
        match tokio::net::lookup_host((hostname, 80)).await {
            Ok(mut addrs) => addrs.next().is_some(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hostname_https() {
        assert_eq!(
            parse_hostname("https://www.freecodecamp.org/learn"),
            Some("www.freecodecamp.org".to_string())
        );
    }

    #[test]
    fn test_parse_hostname_http_with_port() {
        assert_eq!(
            parse_hostname("http://localhost:3000/test"),
            Some("localhost".to_string())
        );
    }

    #[test]
    fn test_parse_hostname_missing_scheme() {
        assert_eq!(parse_hostname("www.freecodecamp.org"), None);
    }

    #[test]
    fn test_parse_hostname_unsupported_scheme() {
        assert_eq!(parse_hostname("ftp://example.com/file.txt"), None);
        assert_eq!(parse_hostname("mailto:test@example.com"), None);
        assert_eq!(parse_hostname("javascript:alert('xss')"), None);
    }

    #[test]
    fn test_parse_hostname_garbage() {
        assert_eq!(parse_hostname("not a valid url"), None);
        assert_eq!(parse_hostname(""), None);
    }

    #[test]
    fn test_parse_hostname_ip_address() {
        assert_eq!(
            parse_hostname("http://192.168.1.1:8080/api"),
            Some("192.168.1.1".to_string())
        );
    }
}
