// Field rules for form input
// A `Validatable` is one field value plus the constraints it must satisfy.

/// Outcome of checking one or more fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether every rule held
    pub passed: bool,
    /// One message per broken rule
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result
    pub fn pass() -> Self {
        Self {
            passed: true,
            errors: Vec::new(),
        }
    }

    /// Create a failing result with a single error
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            passed: false,
            errors: vec![error.into()],
        }
    }

    /// Add an error to this result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.passed = false;
    }

    /// Merge another result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.passed {
            self.passed = false;
        }
        self.errors.extend(other.errors);
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::pass()
    }
}

/// The value under test: free text or an already-parsed number
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(i64),
}

/// A field value with optional constraints.
///
/// Length rules only apply to text, range rules only to numbers.
#[derive(Debug, Clone)]
pub struct Validatable<'a> {
    pub field: &'static str,
    pub value: FieldValue<'a>,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl<'a> Validatable<'a> {
    pub fn text(field: &'static str, value: &'a str) -> Self {
        Self::with_value(field, FieldValue::Text(value))
    }

    pub fn number(field: &'static str, value: i64) -> Self {
        Self::with_value(field, FieldValue::Number(value))
    }

    fn with_value(field: &'static str, value: FieldValue<'a>) -> Self {
        Self {
            field,
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Check every constraint on a field, collecting all broken rules.
pub fn validate(input: &Validatable<'_>) -> ValidationResult {
    let mut result = ValidationResult::pass();
    let field = input.field;

    match input.value {
        FieldValue::Text(text) => {
            if input.required && text.trim().is_empty() {
                result.add_error(format!("{} is required", field));
            }
            // Lengths count characters of the raw value, surrounding whitespace included.
            let len = text.chars().count();
            if let Some(min) = input.min_length
                && len < min
            {
                result.add_error(format!("{} must be at least {} characters", field, min));
            }
            if let Some(max) = input.max_length
                && len > max
            {
                result.add_error(format!("{} must be at most {} characters", field, max));
            }
        }
        FieldValue::Number(n) => {
            if let Some(min) = input.min
                && n < min
            {
                result.add_error(format!("{} must be at least {}", field, min));
            }
            if let Some(max) = input.max
                && n > max
            {
                result.add_error(format!("{} must be at most {}", field, max));
            }
        }
    }

    result
}
