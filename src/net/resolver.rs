use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::{Resolver, TokioResolver, config::ResolverOpts, proto::rr::rdata::TXT};

#[cfg(test)]
use mockall::automock;

use crate::error::DmarcError;

/// Default upper bound for a single TXT lookup
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// DNS TXT lookup abstraction for testing
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TxtResolver: Send + Sync + 'static {
    /// Look up the TXT records published at `name`, in the order the resolver returned them
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, DmarcError>;
}

/// Production TXT resolver using the system resolver configuration
pub struct SystemTxtResolver {
    resolver: TokioResolver,
    timeout: Duration,
}

impl SystemTxtResolver {
    /// Build a resolver from the system configuration (`/etc/resolv.conf` on Unix)
    ///
    /// Each lookup makes a single attempt bounded by `timeout`, and nothing is
    /// cached between lookups.
    ///
    /// # Examples
    /// ```no_run
    /// use dmarc_check::net::{SystemTxtResolver, TxtResolver, DEFAULT_LOOKUP_TIMEOUT};
    ///
    /// # async fn example() {
    /// let resolver = SystemTxtResolver::new(DEFAULT_LOOKUP_TIMEOUT).unwrap();
    /// let records = resolver.lookup_txt("_dmarc.example.com").await.unwrap();
    /// # }
    /// ```
    pub fn new(timeout: Duration) -> Result<Self, DmarcError> {
        let builder =
            Resolver::builder_tokio().map_err(|source| DmarcError::DnsResolverInit { source })?;

        let mut opts = ResolverOpts::default();
        opts.timeout = timeout;
        opts.attempts = 1;
        opts.cache_size = 0;

        Ok(Self {
            resolver: builder.with_options(opts).build(),
            timeout,
        })
    }
}

#[async_trait]
impl TxtResolver for SystemTxtResolver {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, DmarcError> {
        // The resolver timeout covers each query; this deadline covers the whole lookup
        let lookup = tokio::time::timeout(self.timeout, self.resolver.txt_lookup(name))
            .await
            .map_err(|_| DmarcError::LookupTimeout {
                name: name.to_string(),
                timeout: self.timeout,
            })?
            .map_err(|source| DmarcError::TxtLookup {
                name: name.to_string(),
                source,
            })?;

        Ok(lookup.iter().map(txt_to_string).collect())
    }
}

/// Join the character-strings of a TXT record into one string
fn txt_to_string(txt: &TXT) -> String {
    txt.txt_data()
        .iter()
        .map(|data| String::from_utf8_lossy(data))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_txt_to_string_single_segment() {
        let txt = TXT::new(vec!["v=DMARC1; p=reject".to_string()]);
        assert_eq!(txt_to_string(&txt), "v=DMARC1; p=reject");
    }

    #[test]
    fn test_txt_to_string_joins_segments_without_separator() {
        let txt = TXT::new(vec![
            "v=DMARC1; p=quarantine; ".to_string(),
            "rua=mailto:dmarc@example.com".to_string(),
        ]);
        assert_eq!(
            txt_to_string(&txt),
            "v=DMARC1; p=quarantine; rua=mailto:dmarc@example.com"
        );
    }

    #[test]
    fn test_txt_to_string_empty_record() {
        let txt = TXT::new(vec![]);
        assert_eq!(txt_to_string(&txt), "");
    }
}
