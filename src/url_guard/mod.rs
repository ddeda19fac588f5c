//! URL safety validation (SSRF prevention)
//!
//! Every outbound page request goes through [`UrlValidator::validate`] first:
//!
//! 1. the URL must parse and use `http` or `https`
//! 2. the host must not be a well-known internal or metadata name
//! 3. the host must resolve (resolution failure is a rejection)
//! 4. every resolved address must be globally routable
//!
//! The check is fail-closed. On success the validator hands back the addresses it
//! approved so the fetcher can pin the connection to them instead of resolving
//! the host a second time.

mod ip_ranges;
mod resolver;

pub use ip_ranges::{is_forbidden_ip, is_loopback_ip};
pub use resolver::{HostResolver, SystemResolver};

use std::io;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use url::{Host, Url};

use crate::errors::ErrorKind;

/// Hostnames that are never fetched, compared case-insensitively
const BLOCKED_HOSTNAMES: [&str; 4] = [
    "localhost",
    "metadata.google.internal",
    "169.254.169.254",
    "metadata",
];

/// Upper bound on a single DNS lookup
const DEFAULT_RESOLVE_TIMEOUT: Duration = Duration::from_secs(10);

/// Which non-public addresses, if any, the validator tolerates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressPolicy {
    /// Only globally routable addresses are accepted
    #[default]
    Strict,
    /// Loopback addresses are accepted as well. Used by tests that talk to a
    /// local mock server; not reachable from configuration.
    AllowLoopback,
}

/// Reason a URL was refused
#[derive(Debug, Error)]
pub enum UrlRejection {
    #[error("URL could not be parsed: {0}")]
    Parse(#[from] url::ParseError),

    #[error("scheme '{0}' is not allowed")]
    Scheme(String),

    #[error("URL has no host")]
    MissingHost,

    #[error("host '{0}' is blocklisted")]
    BlockedHost(String),

    #[error("DNS resolution failed for '{host}': {source}")]
    Resolution {
        host: String,
        #[source]
        source: io::Error,
    },

    #[error("DNS resolution for '{0}' timed out")]
    ResolutionTimeout(String),

    #[error("'{0}' resolved to no addresses")]
    NoAddresses(String),

    #[error("'{host}' resolves to forbidden address {addr}")]
    ForbiddenAddress { host: String, addr: IpAddr },
}

impl UrlRejection {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::SecurityBlocked
    }
}

/// A URL that passed validation, together with the addresses that were checked
#[derive(Debug, Clone)]
pub struct ValidatedTarget {
    pub url: Url,
    /// Lowercased host as it appears in the URL
    pub host: String,
    /// Approved addresses; empty when the host is an IP literal
    pub addrs: Vec<IpAddr>,
}

impl ValidatedTarget {
    /// Address the connection should be pinned to, if the host is a domain name
    #[must_use]
    pub fn pinned_addr(&self) -> Option<IpAddr> {
        self.addrs.first().copied()
    }
}

/// Validates caller-supplied URLs before any network access
#[derive(Debug, Clone)]
pub struct UrlValidator {
    resolver: Arc<dyn HostResolver>,
    policy: AddressPolicy,
    resolve_timeout: Duration,
}

impl Default for UrlValidator {
    fn default() -> Self {
        Self::new(Arc::new(SystemResolver))
    }
}

impl UrlValidator {
    #[must_use]
    pub fn new(resolver: Arc<dyn HostResolver>) -> Self {
        Self {
            resolver,
            policy: AddressPolicy::Strict,
            resolve_timeout: DEFAULT_RESOLVE_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: AddressPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// `true` if the URL may be fetched
    pub async fn is_safe_url(&self, url: &str) -> bool {
        match self.validate(url).await {
            Ok(_) => true,
            Err(rejection) => {
                debug!("URL rejected: {url}: {rejection}");
                false
            }
        }
    }

    /// Full validation, returning the approved target or the reason for refusal
    pub async fn validate(&self, url: &str) -> Result<ValidatedTarget, UrlRejection> {
        let parsed = Url::parse(url)?;
        self.validate_parsed(parsed).await
    }

    /// Validate an already-parsed URL, e.g. a redirect `Location` joined onto
    /// the previous hop
    pub async fn validate_parsed(&self, parsed: Url) -> Result<ValidatedTarget, UrlRejection> {
        let scheme = parsed.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(UrlRejection::Scheme(scheme.to_string()));
        }

        let host_str = parsed
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or(UrlRejection::MissingHost)?
            .to_ascii_lowercase();

        let bare = host_str.trim_end_matches('.');
        if BLOCKED_HOSTNAMES.contains(&bare) {
            return Err(UrlRejection::BlockedHost(host_str));
        }

        let addrs = match parsed.host() {
            Some(Host::Ipv4(v4)) => {
                self.check_addr(&host_str, IpAddr::V4(v4))?;
                Vec::new()
            }
            Some(Host::Ipv6(v6)) => {
                self.check_addr(&host_str, IpAddr::V6(v6))?;
                Vec::new()
            }
            Some(Host::Domain(domain)) => {
                let port = parsed.port_or_known_default().unwrap_or(80);
                let resolved = self.resolve(domain, port).await?;
                for addr in &resolved {
                    self.check_addr(&host_str, *addr)?;
                }
                resolved
            }
            None => return Err(UrlRejection::MissingHost),
        };

        Ok(ValidatedTarget {
            url: parsed,
            host: host_str,
            addrs,
        })
    }

    async fn resolve(&self, host: &str, port: u16) -> Result<Vec<IpAddr>, UrlRejection> {
        let lookup = self.resolver.resolve(host, port);
        let addrs = match tokio::time::timeout(self.resolve_timeout, lookup).await {
            Ok(Ok(addrs)) => addrs,
            Ok(Err(source)) => {
                return Err(UrlRejection::Resolution {
                    host: host.to_string(),
                    source,
                });
            }
            Err(_) => return Err(UrlRejection::ResolutionTimeout(host.to_string())),
        };

        if addrs.is_empty() {
            return Err(UrlRejection::NoAddresses(host.to_string()));
        }
        Ok(addrs)
    }

    fn check_addr(&self, host: &str, addr: IpAddr) -> Result<(), UrlRejection> {
        let tolerated = self.policy == AddressPolicy::AllowLoopback && is_loopback_ip(addr);
        if is_forbidden_ip(addr) && !tolerated {
            warn!("SECURITY: {host} resolves to forbidden address {addr}");
            return Err(UrlRejection::ForbiddenAddress {
                host: host.to_string(),
                addr,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::BoxFuture;
    use std::collections::HashMap;

    #[derive(Debug, Default)]
    struct MapResolver(HashMap<&'static str, Vec<IpAddr>>);

    impl HostResolver for MapResolver {
        fn resolve<'a>(&'a self, host: &'a str, _port: u16) -> BoxFuture<'a, io::Result<Vec<IpAddr>>> {
            let found = self.0.get(host).cloned();
            Box::pin(async move {
                found.ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such host"))
            })
        }
    }

    fn validator() -> UrlValidator {
        let mut map = HashMap::new();
        map.insert("public.test", vec!["93.184.216.34".parse().unwrap()]);
        map.insert("internal.test", vec!["10.1.2.3".parse().unwrap()]);
        map.insert(
            "mixed.test",
            vec!["93.184.216.34".parse().unwrap(), "127.0.0.1".parse().unwrap()],
        );
        map.insert("empty.test", vec![]);
        map.insert("loop.test", vec!["127.0.0.1".parse().unwrap()]);
        UrlValidator::new(Arc::new(MapResolver(map)))
    }

    #[tokio::test]
    async fn test_public_host_is_accepted_and_pinned() {
        let target = validator().validate("https://public.test/a?b=c").await.unwrap();
        assert_eq!(target.host, "public.test");
        assert_eq!(target.pinned_addr(), Some("93.184.216.34".parse().unwrap()));
    }

    #[tokio::test]
    async fn test_host_resolving_to_private_is_rejected() {
        let err = validator().validate("http://internal.test/").await.unwrap_err();
        assert!(matches!(err, UrlRejection::ForbiddenAddress { .. }));
    }

    #[tokio::test]
    async fn test_any_forbidden_address_rejects() {
        assert!(!validator().is_safe_url("http://mixed.test/").await);
    }

    #[tokio::test]
    async fn test_resolution_failure_fails_closed() {
        let err = validator().validate("http://unknown.test/").await.unwrap_err();
        assert!(matches!(err, UrlRejection::Resolution { .. }));
        let err = validator().validate("http://empty.test/").await.unwrap_err();
        assert!(matches!(err, UrlRejection::NoAddresses(_)));
    }

    #[tokio::test]
    async fn test_blocklisted_names_ignore_case_and_trailing_dot() {
        let v = validator();
        assert!(!v.is_safe_url("http://LOCALHOST:8080/").await);
        assert!(!v.is_safe_url("http://localhost./").await);
        assert!(!v.is_safe_url("http://Metadata.Google.Internal/computeMetadata/v1/").await);
        assert!(!v.is_safe_url("http://metadata/").await);
    }

    #[tokio::test]
    async fn test_allow_loopback_policy_only_relaxes_loopback() {
        let v = validator().with_policy(AddressPolicy::AllowLoopback);
        assert!(v.is_safe_url("http://loop.test:8080/").await);
        assert!(v.is_safe_url("http://127.0.0.1:8080/").await);
        assert!(!v.is_safe_url("http://internal.test/").await);
        assert!(!v.is_safe_url("http://localhost:8080/").await);
    }

    #[tokio::test]
    async fn test_unparseable_url_is_rejected() {
        assert!(matches!(
            validator().validate("http://[::1").await.unwrap_err(),
            UrlRejection::Parse(_)
        ));
    }
}
