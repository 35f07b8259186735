//! Indian mobile number normalization.

use crate::server::error::auth::AuthError;

/// Normalizes an Indian mobile number to E.164 (`+91XXXXXXXXXX`).
///
/// Accepts ten digit numbers with an optional `0`, `91` or `+91` prefix. Spaces, dashes and
/// parentheses are ignored. Mobile numbers start with 6, 7, 8 or 9.
pub fn normalize_phone(input: &str) -> Result<String, AuthError> {
    let invalid = || AuthError::InvalidPhone(input.to_string());

    let trimmed = input.trim();
    let (has_plus, rest) = match trimmed.strip_prefix('+') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let mut digits = String::with_capacity(rest.len());
    for c in rest.chars() {
        match c {
            '0'..='9' => digits.push(c),
            ' ' | '-' | '(' | ')' => {}
            _ => return Err(invalid()),
        }
    }

    let national = match digits.len() {
        10 if !has_plus => digits.as_str(),
        11 if !has_plus && digits.starts_with('0') => &digits[1..],
        12 if digits.starts_with("91") => &digits[2..],
        _ => return Err(invalid()),
    };

    if !national.starts_with(['6', '7', '8', '9']) {
        return Err(invalid());
    }

    Ok(format!("+91{}", national))
}

#[cfg(test)]
mod tests {
    use super::normalize_phone;

    #[test]
    fn test_normalize_accepts_common_formats() {
        for input in [
            "9876543210",
            "09876543210",
            "+919876543210",
            "91 98765 43210",
            "+91-98765-43210",
        ] {
            assert_eq!(normalize_phone(input).unwrap(), "+919876543210", "{}", input);
        }
    }

    #[test]
    fn test_normalize_rejects_invalid_numbers() {
        for input in [
            "",
            "12345",
            "5876543210",
            "+449876543210",
            "+9876543210",
            "98765432101",
            "98765abc10",
        ] {
            assert!(normalize_phone(input).is_err(), "{}", input);
        }
    }
}
