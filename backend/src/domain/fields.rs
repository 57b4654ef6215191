//! Helpers for interpreting request field values.
//!
//! Inputs follow "present and non-empty" semantics: a field that is absent
//! and a field sent as an empty string are treated alike. For partial updates
//! this means an empty string can never be written over an existing value.

use chrono::NaiveDate;

use super::error::{DomainError, DomainResult};

/// The value, if it was supplied and is non-empty
pub fn provided(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Overwrite `target` only when `value` was supplied and is non-empty.
///
/// Returns whether the target changed.
pub fn overwrite_if_provided(target: &mut String, value: Option<String>) -> bool {
    match provided(value) {
        Some(value) => {
            *target = value;
            true
        }
        None => false,
    }
}

/// Same as [`overwrite_if_provided`] for optional record fields
pub fn overwrite_optional_if_provided(target: &mut Option<String>, value: Option<String>) -> bool {
    match provided(value) {
        Some(value) => {
            *target = Some(value);
            true
        }
        None => false,
    }
}

/// Parse a YYYY-MM-DD date filter. Empty input means "no filter".
pub fn parse_date_filter(value: Option<&str>) -> DomainResult<Option<NaiveDate>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| DomainError::validation(format!("Invalid date '{}': expected YYYY-MM-DD", raw))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provided_treats_empty_as_absent() {
        assert_eq!(provided(Some("x".to_string())), Some("x".to_string()));
        assert_eq!(provided(Some(String::new())), None);
        assert_eq!(provided(None), None);
    }

    #[test]
    fn test_overwrite_if_provided_keeps_value_for_empty_input() {
        let mut value = "kept".to_string();

        assert!(!overwrite_if_provided(&mut value, Some(String::new())));
        assert!(!overwrite_if_provided(&mut value, None));
        assert_eq!(value, "kept");

        assert!(overwrite_if_provided(&mut value, Some("new".to_string())));
        assert_eq!(value, "new");
    }

    #[test]
    fn test_overwrite_optional_if_provided() {
        let mut value = None;
        assert!(!overwrite_optional_if_provided(&mut value, Some(String::new())));
        assert_eq!(value, None);
        assert!(overwrite_optional_if_provided(&mut value, Some("a@b.c".to_string())));
        assert_eq!(value.as_deref(), Some("a@b.c"));
    }

    #[test]
    fn test_parse_date_filter() {
        assert_eq!(parse_date_filter(None).unwrap(), None);
        assert_eq!(parse_date_filter(Some("")).unwrap(), None);
        assert_eq!(
            parse_date_filter(Some("2025-01-20")).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 20)
        );
        assert!(parse_date_filter(Some("20/01/2025")).is_err());
    }
}
