//! Email validation functions

use email_address::EmailAddress;

/// Validates an email address.
///
/// The address must satisfy the RFC 5322 `addr-spec` grammar and carry a
/// dotted domain with a top-level label of at least two characters. Display
/// forms such as `Name <user@example.com>` are rejected.
pub fn is_valid_email(email: &str) -> bool {
    if email.contains(['<', '>']) || email.trim() != email {
        return false;
    }

    if !EmailAddress::is_valid(email) {
        return false;
    }

    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };

    is_dotted_domain(domain)
}

fn is_dotted_domain(domain: &str) -> bool {
    if !domain.contains('.') || domain.contains("..") {
        return false;
    }

    if domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']) {
        return false;
    }

    // TLD must be at least 2 characters
    domain
        .rsplit('.')
        .next()
        .is_some_and(|tld| tld.chars().count() >= 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("test.user@example.co.uk"));
        assert!(is_valid_email("user+tag@example.com"));
        assert!(is_valid_email("user_name@example-domain.com"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email(" user@example.com"));
        assert!(!is_valid_email("Jane <jane@example.com>"));
    }
}
