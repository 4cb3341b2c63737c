//! Validation utilities.

/// Validate email format
pub fn email(email: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Email cannot be empty".to_string());
    }

    if email.len() > 255 {
        return Err("Email too long (max 255 characters)".to_string());
    }

    // Basic email validation regex
    let email_regex = regex::Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .map_err(|e| format!("Failed to compile email regex: {}", e))?;

    if !email_regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Validate that a required field is not blank
pub fn required(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} cannot be empty", field));
    }

    Ok(())
}

/// Validate a maximum field length
pub fn max_len(field: &str, value: &str, max: usize) -> Result<(), String> {
    if value.len() > max {
        return Err(format!("{} too long (max {} characters)", field, max));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(email("ana@email.com").is_ok());
        assert!(email("a.b+tag@sub.domain.org").is_ok());

        assert!(email("").is_err());
        assert!(email("no-at-sign").is_err());
        assert!(email("missing@tld").is_err());
    }

    #[test]
    fn test_required_validation() {
        assert!(required("Name", "Ana").is_ok());
        assert!(required("Name", "").is_err());
        assert!(required("Name", "   ").is_err());
    }

    #[test]
    fn test_max_len_validation() {
        assert!(max_len("Name", "short", 10).is_ok());
        assert!(max_len("Name", &"a".repeat(11), 10).is_err());
    }
}
