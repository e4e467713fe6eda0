//! Input validation for notice requests.
//!
//! Produces messages that can be shown as-is on the result page or inside
//! a JSON `ErrorResponse`.

use std::fmt;

/// Smallest notice period the form accepts, in days.
pub const MIN_NOTICE_PERIOD_DAYS: i64 = 1;

/// Validation error with a user-facing message.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    pub message: String,
    /// Suggestion for how to fix the error
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Create error for a notice period below the minimum
    pub fn notice_period_too_short(field: &str, value: i64) -> Self {
        Self::new(
            field,
            format!(
                "Notice period must be at least {} day, got {}",
                MIN_NOTICE_PERIOD_DAYS, value
            ),
        )
        .with_suggestion("Enter the number of days the tenant has to vacate, e.g. 30")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors with formatted output.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Numbered message listing every error, suitable for display.
    pub fn to_message(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }

        let noun = if self.errors.len() == 1 { "problem" } else { "problems" };
        let mut parts = vec![format!(
            "Validation failed: {} {} found\n",
            self.errors.len(),
            noun
        )];

        for (i, error) in self.errors.iter().enumerate() {
            parts.push(format!("{}. {}", i + 1, error));
        }

        parts.push(String::new());
        parts.push("Please correct the fields above and submit again.".to_string());

        parts.join("\n")
    }

    /// Convert to Result - Ok if no errors, Err with formatted message if errors exist
    pub fn into_result(self) -> Result<(), String> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.to_message())
        }
    }
}

/// Validate that the notice period is a positive number of days
pub fn validate_notice_period(value: i64, field: &str, errors: &mut ValidationErrors) {
    if value < MIN_NOTICE_PERIOD_DAYS {
        errors.add(ValidationError::notice_period_too_short(field, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_period_boundary() {
        let mut errors = ValidationErrors::new();
        validate_notice_period(1, "notice_period", &mut errors);
        assert!(errors.is_empty());

        validate_notice_period(0, "notice_period", &mut errors);
        validate_notice_period(-7, "notice_period", &mut errors);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_display_includes_suggestion() {
        let error = ValidationError::notice_period_too_short("notice_period", 0);
        let text = error.to_string();
        assert!(text.starts_with("[notice_period]"));
        assert!(text.contains("e.g. 30"));
    }

    #[test]
    fn test_empty_errors_into_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }
}
