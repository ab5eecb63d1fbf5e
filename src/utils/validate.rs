//! Character-level validation rules shared by the forms.

/// Validate email address format.
///
/// Basic RFC 5322 shape: exactly one `@`, non-empty local and domain
/// parts, a dotted domain, and a conservative character set. Matches what
/// the registration and settings forms accept.
pub fn is_valid_email(email: &str) -> bool {
    if email.len() < 3 || email.len() > 255 {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return false;
    }

    let valid_local = |c: char| c.is_alphanumeric() || matches!(c, '.' | '-' | '+' | '_');
    let valid_domain = |c: char| c.is_alphanumeric() || matches!(c, '.' | '-');

    if !local.chars().all(valid_local) || !domain.chars().all(valid_domain) {
        return false;
    }

    // Domain labels between dots must be non-empty
    domain.split('.').all(|part| !part.is_empty())
}

/// Letters, whitespace and hyphens only; the rule for person names.
pub fn is_plain_name(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_ascii_whitespace() || c == '-')
}

/// Letters, digits, whitespace and hyphens only; the rule for event
/// names, college names and departments.
pub fn is_plain_text(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user.name+tag@subdomain.example.co.uk"));
        assert!(is_valid_email("a@b.c"));
    }

    #[test]
    fn invalid_emails() {
        assert!(!is_valid_email("invalid"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn plain_name_accepts_letters_spaces_hyphens() {
        assert!(is_plain_name("Jane Doe"));
        assert!(is_plain_name("Anne-Marie"));
        assert!(!is_plain_name("Jane D0e"));
        assert!(!is_plain_name("jane@doe"));
        assert!(!is_plain_name(""));
    }

    #[test]
    fn plain_text_accepts_alphanumerics() {
        assert!(is_plain_text("Hack Day 2024"));
        assert!(is_plain_text("One-day Workshop"));
        assert!(!is_plain_text("Hack Day!"));
        assert!(!is_plain_text("50% off"));
        assert!(!is_plain_text(""));
    }
}
