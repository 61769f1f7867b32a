//! Turning raw form fields into a project draft.

use super::rules::{Validatable, ValidationResult, validate};
use crate::error::{BoardError, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// The single message shown for any rejected submission.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input, please try again!";

/// Limits applied to the project form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FormLimits {
    pub description_min_length: usize,
    pub people_min: u32,
    pub people_max: u32,
}

impl Default for FormLimits {
    fn default() -> Self {
        Self {
            description_min_length: 5,
            people_min: 1,
            people_max: 5,
        }
    }
}

impl FormLimits {
    /// Reject limits that no input could ever satisfy.
    pub fn check(&self) -> Result<()> {
        if self.people_min > self.people_max {
            return Err(BoardError::Config(format!(
                "people_min ({}) exceeds people_max ({})",
                self.people_min, self.people_max
            )));
        }
        Ok(())
    }
}

/// A validated, ready-to-commit project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// Check the three raw form values against `limits`.
///
/// Every broken rule is logged, but the caller only ever sees one
/// `BoardError::Validation` carrying [`INVALID_INPUT_MESSAGE`].
pub fn gather_user_input(title: &str, description: &str, people: &str, limits: &FormLimits) -> Result<ProjectDraft> {
    let (result, count) = check_fields(title, description, people, limits);

    match count {
        Some(people) if result.passed => Ok(ProjectDraft {
            title: title.to_string(),
            description: description.to_string(),
            people,
        }),
        _ => {
            debug!("Rejected project input: {}", result.errors.join("; "));
            Err(BoardError::Validation(INVALID_INPUT_MESSAGE.to_string()))
        }
    }
}

/// Run every field rule. The head count is returned only when it is in range.
fn check_fields(title: &str, description: &str, people: &str, limits: &FormLimits) -> (ValidationResult, Option<u32>) {
    let mut result = validate(&Validatable::text("title", title).required());
    result.merge(validate(
        &Validatable::text("description", description)
            .required()
            .min_length(limits.description_min_length),
    ));

    let people_required = validate(&Validatable::text("people", people).required());
    if !people_required.passed {
        result.merge(people_required);
        return (result, None);
    }

    let Some(count) = parse_people(people) else {
        result.add_error(format!("people must be a whole number, got {:?}", people));
        return (result, None);
    };

    let bounds = validate(
        &Validatable::number("people", count)
            .required()
            .min(i64::from(limits.people_min))
            .max(i64::from(limits.people_max)),
    );
    let in_range = bounds.passed;
    result.merge(bounds);

    let count = if in_range { u32::try_from(count).ok() } else { None };
    (result, count)
}

fn parse_people(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gather(title: &str, description: &str, people: &str) -> Result<ProjectDraft> {
        gather_user_input(title, description, people, &FormLimits::default())
    }

    fn assert_rejected(title: &str, description: &str, people: &str) {
        match gather(title, description, people) {
            Err(BoardError::Validation(msg)) => assert_eq!(msg, INVALID_INPUT_MESSAGE),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_input() {
        let draft = gather("T", "long enough desc", "3").unwrap();
        assert_eq!(
            draft,
            ProjectDraft {
                title: "T".to_string(),
                description: "long enough desc".to_string(),
                people: 3,
            }
        );
    }

    #[test]
    fn test_empty_title_rejected() {
        assert_rejected("", "desc long enough", "3");
        assert_rejected("   ", "desc long enough", "3");
    }

    #[test]
    fn test_description_rules() {
        assert_rejected("T", "", "3");
        assert_rejected("T", "abcd", "3");
        assert!(gather("T", "abcde", "3").is_ok());
    }

    #[test]
    fn test_people_bounds() {
        assert_rejected("T", "long enough desc", "0");
        assert_rejected("T", "long enough desc", "6");
        assert!(gather("T", "long enough desc", "1").is_ok());
        assert!(gather("T", "long enough desc", "5").is_ok());
    }

    #[test]
    fn test_people_must_be_present_and_numeric() {
        assert_rejected("T", "long enough desc", "");
        assert_rejected("T", "long enough desc", "three");
        assert_rejected("T", "long enough desc", "2.5");
        assert_rejected("T", "long enough desc", "-1");
    }

    #[test]
    fn test_people_surrounding_whitespace_allowed() {
        assert_eq!(gather("T", "long enough desc", " 4 ").unwrap().people, 4);
    }

    #[test]
    fn test_values_kept_as_entered() {
        let draft = gather(" Build API ", "Design and build the REST API", "3").unwrap();
        assert_eq!(draft.title, " Build API ");
    }

    #[test]
    fn test_custom_limits() {
        let limits = FormLimits {
            description_min_length: 10,
            people_min: 2,
            people_max: 8,
        };
        assert!(gather_user_input("T", "short desc", "8", &limits).is_ok());
        assert!(gather_user_input("T", "too short", "8", &limits).is_err());
        assert!(gather_user_input("T", "long enough here", "1", &limits).is_err());
    }

    #[test]
    fn test_limits_check() {
        assert!(FormLimits::default().check().is_ok());
        let broken = FormLimits {
            people_min: 6,
            people_max: 5,
            ..FormLimits::default()
        };
        assert!(matches!(broken.check(), Err(BoardError::Config(_))));
    }

    #[test]
    fn test_check_fields_reports_each_field() {
        let (result, count) = check_fields("", "abc", "9", &FormLimits::default());
        assert!(!result.passed);
        assert_eq!(result.error_count(), 3);
        assert_eq!(count, None);
    }

    #[test]
    fn test_check_fields_returns_parsed_count() {
        let limits = FormLimits::default();
        assert_eq!(check_fields("T", "long enough desc", " 4 ", &limits).1, Some(4));
        assert_eq!(check_fields("T", "long enough desc", "7", &limits).1, None);
        assert_eq!(check_fields("T", "long enough desc", "-3", &limits).1, None);
        // Other fields failing still reports the count, but nothing is committed
        assert_eq!(check_fields("", "long enough desc", "2", &limits).1, Some(2));
        assert_rejected("", "long enough desc", "2");
    }

    #[test]
    fn test_people_beyond_u32_rejected() {
        let limits = FormLimits {
            people_max: u32::MAX,
            ..FormLimits::default()
        };
        assert!(gather_user_input("T", "long enough desc", "4294967295", &limits).is_ok());
        assert!(gather_user_input("T", "long enough desc", "4294967296", &limits).is_err());
    }
}
