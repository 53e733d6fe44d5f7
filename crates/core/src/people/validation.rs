//! Validation rules for person records and searches.

use super::types::PeopleError;

/// Checks the directory's name invariant: at least one of `first_name` or
/// `company_name` must be non-empty.
///
/// Runs before any persistence work so invalid records never reach the store.
///
/// # Errors
///
/// Returns `PeopleError::MissingName` when both fields are empty or whitespace.
pub fn validate_person_name(
    first_name: Option<&str>,
    company_name: Option<&str>,
) -> Result<(), PeopleError> {
    let has_first = first_name.is_some_and(|s| !s.trim().is_empty());
    let has_company = company_name.is_some_and(|s| !s.trim().is_empty());

    if has_first || has_company {
        Ok(())
    } else {
        Err(PeopleError::MissingName)
    }
}

/// Normalizes a search query: trims and lowercases.
///
/// Returns `None` for empty or whitespace-only queries; callers short-circuit
/// to an empty result set without touching the store.
#[must_use]
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    use crate::people::PersonType;

    #[test]
    fn test_name_invariant_accepts_either_field() {
        assert!(validate_person_name(Some("Ana"), None).is_ok());
        assert!(validate_person_name(None, Some("Sol y Mar SL")).is_ok());
        assert!(validate_person_name(Some("Ana"), Some("Sol y Mar SL")).is_ok());
    }

    #[test]
    fn test_name_invariant_rejects_empty_and_whitespace() {
        assert_eq!(
            validate_person_name(None, None),
            Err(PeopleError::MissingName)
        );
        assert_eq!(
            validate_person_name(Some(""), Some("   ")),
            Err(PeopleError::MissingName)
        );
    }

    #[test]
    fn test_validation_message_is_spanish() {
        assert_eq!(
            PeopleError::MissingName.to_string(),
            "Debe indicar un nombre o una empresa"
        );
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  Ana  "), Some("ana".to_string()));
        assert_eq!(normalize_query("  "), None);
        assert_eq!(normalize_query(""), None);
    }

    #[test]
    fn test_person_type_round_trip() {
        for raw in ["guest", "provider", "distribution_channel", "other"] {
            let parsed = PersonType::from_str(raw).expect("known type");
            assert_eq!(parsed.to_string(), raw);
        }
        assert!(PersonType::from_str("landlord").is_err());
    }
}
