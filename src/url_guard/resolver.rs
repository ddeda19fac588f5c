//! Hostname resolution used by the URL safety validator

use futures::future::BoxFuture;
use std::fmt;
use std::io;
use std::net::IpAddr;

/// Resolves a hostname to the addresses a connection would use.
///
/// Object safe so the validator can hold any implementation behind an `Arc`.
pub trait HostResolver: Send + Sync + fmt::Debug {
    fn resolve<'a>(&'a self, host: &'a str, port: u16) -> BoxFuture<'a, io::Result<Vec<IpAddr>>>;
}

/// Resolver backed by the operating system (`getaddrinfo` via tokio)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl HostResolver for SystemResolver {
    fn resolve<'a>(&'a self, host: &'a str, port: u16) -> BoxFuture<'a, io::Result<Vec<IpAddr>>> {
        Box::pin(async move {
            let addrs = tokio::net::lookup_host((host, port)).await?;
            Ok(addrs.map(|addr| addr.ip()).collect())
        })
    }
}
