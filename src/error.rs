use thiserror::Error;

use std::{net::SocketAddr, path::PathBuf, time::Duration};

use hickory_resolver::ResolveError;

#[derive(Debug, Error)]
pub enum DmarcError {
    #[error("invalid email '{email}': expected exactly one '@' followed by a domain")]
    InvalidEmail { email: String },

    #[error("failed to initialize DNS resolver: {source}")]
    DnsResolverInit {
        #[source]
        source: ResolveError,
    },

    #[error("failed to look up TXT records for {name}: {source}")]
    TxtLookup {
        name: String,
        #[source]
        source: ResolveError,
    },

    #[error("TXT lookup for {name} did not complete within {timeout:?}")]
    LookupTimeout { name: String, timeout: Duration },

    #[error("invalid listen address '{value}': {source}")]
    InvalidListenAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
