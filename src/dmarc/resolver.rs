use crate::{error::DmarcError, net::TxtResolver};

use super::{
    domain::extract_domain,
    policy::{DEFAULT_POLICY, parse_policy},
};

/// Label prepended to a domain to locate its DMARC record
const DMARC_LABEL: &str = "_dmarc";

/// Case-insensitive prefix identifying a DMARC record among TXT records
const DMARC_MARKER: &str = "v=dmarc1";

/// Outcome of a DMARC check for one domain
///
/// When `is_dmarc` is false, `record` is empty and `policy_type` is `"none"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DmarcResult {
    /// Raw matching TXT record in its original casing, or empty
    pub record: String,
    /// Whether a DMARC record was found
    pub is_dmarc: bool,
    /// Normalized `p` tag value
    pub policy_type: String,
}

impl DmarcResult {
    /// Result for a domain with no DMARC record, or whose lookup failed
    pub fn not_published() -> Self {
        Self {
            record: String::new(),
            is_dmarc: false,
            policy_type: DEFAULT_POLICY.to_string(),
        }
    }

    fn published(record: &str) -> Self {
        Self {
            record: record.to_string(),
            is_dmarc: true,
            policy_type: parse_policy(record),
        }
    }
}

/// Looks up and interprets the DMARC record of a domain
pub struct DmarcResolver<R: TxtResolver> {
    resolver: R,
}

impl<R: TxtResolver> DmarcResolver<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Check the DMARC policy of the domain an email address belongs to
    ///
    /// # Returns
    /// * `Ok(DmarcResult)` - The address had a domain; see [`DmarcResolver::resolve`]
    /// * `Err(DmarcError::InvalidEmail)` - No domain could be extracted
    pub async fn verify_email(&self, email: &str) -> Result<DmarcResult, DmarcError> {
        let domain = extract_domain(email)?;
        Ok(self.resolve(&domain).await)
    }

    /// Look up `_dmarc.<domain>` and report the first DMARC record found
    ///
    /// Records are scanned in the order the resolver returned them and the
    /// first one starting with `v=DMARC1` (any casing) is used. A failed
    /// lookup is reported exactly like a domain without a DMARC record, so
    /// callers cannot tell the two apart.
    pub async fn resolve(&self, domain: &str) -> DmarcResult {
        let name = format!("{DMARC_LABEL}.{domain}");

        let records = match self.resolver.lookup_txt(&name).await {
            Ok(records) => records,
            Err(err) => {
                log::debug!("Treating {name} as unpublished: {err}");
                return DmarcResult::not_published();
            }
        };

        records
            .iter()
            .find(|record| is_dmarc_record(record))
            .map(|record| DmarcResult::published(record))
            .unwrap_or_else(DmarcResult::not_published)
    }
}

fn is_dmarc_record(record: &str) -> bool {
    record
        .get(..DMARC_MARKER.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(DMARC_MARKER))
}
