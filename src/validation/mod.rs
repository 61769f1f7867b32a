// Form validation
// Generic field rules plus the project form's specific checks

pub mod project_input;
pub mod rules;

pub use project_input::{FormLimits, INVALID_INPUT_MESSAGE, ProjectDraft, gather_user_input};
pub use rules::{FieldValue, Validatable, ValidationResult, validate};
