/// Policy returned when a record carries no `p` tag
pub const DEFAULT_POLICY: &str = "none";

/// Extract the `p` (policy) tag from a raw DMARC record
///
/// The record is split into `;`-separated tags and the first tag whose key
/// is `p` (case-insensitive) wins. Its value is trimmed and lowercased.
/// Values outside `none`, `quarantine` and `reject` are passed through as-is.
/// Tags without `=` or with an empty value are skipped. Other tags (`sp`, `pct`, `rua`, ...) and the
/// version are not inspected.
///
/// # Examples
/// ```
/// use dmarc_check::dmarc::parse_policy;
///
/// assert_eq!(parse_policy("v=DMARC1; p=quarantine; rua=mailto:x@example.com"), "quarantine");
/// assert_eq!(parse_policy("v=dmarc1; P=REJECT"), "reject");
/// assert_eq!(parse_policy("v=dmarc1"), "none");
/// ```
pub fn parse_policy(record: &str) -> String {
    record
        .split(';')
        .filter_map(|tag| tag.trim().split_once('='))
        .find(|(key, value)| key.eq_ignore_ascii_case("p") && !value.trim().is_empty())
        .map(|(_, value)| value.trim().to_lowercase())
        .unwrap_or_else(|| DEFAULT_POLICY.to_string())
}
