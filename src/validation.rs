//! Required-field validation
//!
//! A form may only be submitted when every `required` input has a
//! non-blank value. There are no per-field rules beyond presence.

/// Class added to inputs that failed validation
pub const INVALID_CLASS: &str = "invalid";

/// Selector for the inputs the gate inspects
pub const REQUIRED_SELECTOR: &str = "input[required]";

/// Outcome of checking a form's required inputs, by position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub invalid: Vec<usize>,
    pub valid: Vec<usize>,
}

impl ValidationReport {
    /// Submission may proceed
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }

    pub fn is_invalid_at(&self, index: usize) -> bool {
        self.invalid.contains(&index)
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Check the values of a form's required inputs in document order
pub fn validate_required<I, S>(values: I) -> ValidationReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = ValidationReport::default();

    for (index, value) in values.into_iter().enumerate() {
        if is_blank(value.as_ref()) {
            report.invalid.push(index);
        } else {
            report.valid.push(index);
        }
    }

    report
}
