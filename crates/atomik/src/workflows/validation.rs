/// Trim a required text field, returning `None` when nothing is left.
pub(crate) fn required_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Syntactic e-mail check: a single `@`, a non-empty local part, and a dotted domain.
pub(crate) fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() || domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_trims_and_rejects_blank() {
        assert_eq!(required_text("  Maya "), Some("Maya".to_string()));
        assert_eq!(required_text("   "), None);
    }

    #[test]
    fn email_check_accepts_common_addresses() {
        assert!(is_valid_email("maya@example.com"));
        assert!(is_valid_email("first.last+tutor@school.k12.us"));
    }

    #[test]
    fn email_check_rejects_malformed_addresses() {
        for value in [
            "",
            "maya",
            "@example.com",
            "maya@",
            "maya@example",
            "maya@@example.com",
            "maya@example..com",
            "maya@.example.com",
            "maya smith@example.com",
        ] {
            assert!(!is_valid_email(value), "{value:?} should be rejected");
        }
    }
}
