//! Validation of cut requests before optimization.

use crate::config::float_cmp::{approx_eq, approx_zero};
use crate::error::{CutListError, Result};
use crate::model::CutRequest;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Create a failing result with an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            errors: vec![message.into()],
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate a complete request.
pub fn validate_request(request: &CutRequest) -> ValidationResult {
    let mut result = validate_config(request);
    result.merge(validate_parts(request));
    result
}

/// Validate kerf and limits.
fn validate_config(request: &CutRequest) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let config = &request.config;

    if let Err(err) = config.validate() {
        result.add_error(err.to_string());
    } else if approx_zero(config.kerf) {
        result.add_warning("Kerf is zero; saw loss will not be budgeted");
    }

    if config.max_distinct_lengths == 0 {
        result.add_error("Maximum distinct part lengths must be at least 1");
    }

    let invoice = &request.invoice;
    if invoice.cut_fee < 0.0 || invoice.setup_fee < 0.0 {
        result.add_error(format!(
            "Fees must not be negative (cut fee {}, setup fee {})",
            invoice.cut_fee, invoice.setup_fee
        ));
    }

    result
}

/// Validate requested parts against the catalog.
fn validate_parts(request: &CutRequest) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let longest = request.catalog.longest();
    let mut distinct: Vec<f64> = Vec::new();

    for (idx, part) in request.parts.iter().enumerate() {
        if part.is_empty() {
            result.add_warning(format!("Part {}: Zero quantity, ignored", idx + 1));
            continue;
        }

        if !part.has_valid_length() {
            result.add_error(format!("Part {}: Invalid length {}", idx + 1, part.length));
            continue;
        }

        if part.length > longest {
            result.add_error(format!(
                "Part {}: Length {} exceeds longest stock length {}",
                idx + 1,
                part.length,
                longest
            ));
        }

        if distinct.iter().any(|&l| approx_eq(l, part.length)) {
            result.add_warning(format!(
                "Part {}: Length {} requested more than once, quantities will be merged",
                idx + 1,
                part.length
            ));
        } else {
            distinct.push(part.length);
        }
    }

    if distinct.is_empty() && result.errors.is_empty() {
        result.add_warning("No parts requested");
    }

    if distinct.len() > request.config.max_distinct_lengths {
        result.add_error(format!(
            "{} distinct part lengths requested, maximum is {}",
            distinct.len(),
            request.config.max_distinct_lengths
        ));
    }

    result
}

/// Quick validation check for command-line --validate flag.
pub fn quick_validate(request: &CutRequest) -> Result<()> {
    let result = validate_request(request);

    if !result.passed {
        let error_msg = result.errors.join("; ");
        return Err(CutListError::ParseError {
            line: 0,
            message: error_msg,
        });
    }

    Ok(())
}
