use crate::error::DmarcError;

/// Extract the domain part of an email address
///
/// The address must contain exactly one `@`. The part after it is returned
/// with surrounding whitespace trimmed; no other validation is performed.
///
/// # Arguments
/// * `email` - Raw email address, e.g. "alice@example.com"
///
/// # Returns
/// * `Ok(String)` - The trimmed domain
/// * `Err(DmarcError::InvalidEmail)` - Zero or several `@`, or nothing after the `@`
///
/// # Examples
/// ```
/// use dmarc_check::dmarc::extract_domain;
///
/// assert_eq!(extract_domain("alice@ example.com ").unwrap(), "example.com");
/// assert!(extract_domain("alice.example.com").is_err());
/// ```
pub fn extract_domain(email: &str) -> Result<String, DmarcError> {
    let invalid = || DmarcError::InvalidEmail {
        email: email.to_string(),
    };

    let (_local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if domain.contains('@') {
        return Err(invalid());
    }

    let domain = domain.trim();
    if domain.is_empty() {
        return Err(invalid());
    }

    Ok(domain.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("alice@example.com", "example.com", "plain address")]
    #[case("alice@ example.com ", "example.com", "whitespace around domain")]
    #[case("alice@\texample.com\n", "example.com", "tabs and newlines around domain")]
    #[case("@example.com", "example.com", "empty local part")]
    #[case("first.last+tag@mail.example.co.uk", "mail.example.co.uk", "subaddress and subdomain")]
    #[case("Alice@EXAMPLE.com", "EXAMPLE.com", "casing preserved")]
    fn test_extract_domain_success(
        #[case] email: &str,
        #[case] expected: &str,
        #[case] _description: &str,
    ) {
        assert_eq!(extract_domain(email).unwrap(), expected);
    }

    #[rstest]
    #[case("", "empty input")]
    #[case("alice.example.com", "no @")]
    #[case("alice@@example.com", "two adjacent @")]
    #[case("alice@example.com@evil.test", "two separated @")]
    #[case("alice@", "nothing after @")]
    #[case("alice@   ", "only whitespace after @")]
    fn test_extract_domain_failure(#[case] email: &str, #[case] _description: &str) {
        let result = extract_domain(email);
        assert!(result.is_err());
        if let Err(DmarcError::InvalidEmail { email: reported }) = result {
            assert_eq!(reported, email);
        }
    }
}
