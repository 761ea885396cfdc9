//! Glue between `validator` derive rules and [`CoreError`].
//!
//! Entities declare their field invariants with `#[validate(..)]` attributes
//! and run them through [`check`] so every failure surfaces as
//! [`CoreError::Validation`], whatever rule tripped.

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Run the derived rules for `value`, mapping failures to `CoreError::Validation`.
pub fn check<T: Validate>(value: &T) -> Result<(), CoreError> {
    value.validate().map_err(into_core_error)
}

/// Unwrap a field that the client was required to send.
///
/// An absent field is reported the same way as an out-of-range one.
pub fn required<T>(value: Option<T>, field: &str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("{field} is required")))
}

fn into_core_error(errors: ValidationErrors) -> CoreError {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort_unstable();
    CoreError::Validation(format!("invalid value for {}", fields.join(", ")))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Bounded {
        #[validate(length(min = 1))]
        label: String,
        #[validate(range(min = 0, max = 23))]
        hour: i64,
    }

    #[test]
    fn passes_valid_value() {
        let value = Bounded {
            label: "archery".to_string(),
            hour: 23,
        };
        assert!(check(&value).is_ok());
    }

    #[test]
    fn names_every_failing_field() {
        let value = Bounded {
            label: String::new(),
            hour: 24,
        };
        assert_matches!(
            check(&value),
            Err(CoreError::Validation(msg)) if msg == "invalid value for hour, label"
        );
    }

    #[test]
    fn missing_field_is_a_validation_error() {
        assert_matches!(
            required::<i64>(None, "age"),
            Err(CoreError::Validation(msg)) if msg == "age is required"
        );
        assert_eq!(required(Some(12), "age").unwrap(), 12);
    }
}
