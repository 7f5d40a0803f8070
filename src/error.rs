//! Error types for cut-list calculation.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for cut-list processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// General parse error (-3)
    ParseError = -3,
    /// Invalid part, stock or kerf value (E100)
    InvalidInput = 100,
    /// Part does not fit any stock length (E200)
    Unfittable = 200,
    /// Too many distinct part lengths (E201)
    TooManyPartLengths = 201,
}

/// Main error type for the optimizer.
#[derive(Debug, Error)]
pub enum CutListError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Missing required field '{field}' in section [{section}]")]
    MissingField { section: String, field: String },

    #[error("Invalid value for '{field}': expected {expected}, got '{value}'")]
    InvalidValue {
        field: String,
        expected: String,
        value: String,
    },

    #[error("Stock catalog is empty")]
    EmptyCatalog,

    #[error("Invalid stock length: {value}")]
    InvalidStockLength { value: f64 },

    #[error("Invalid part: length {length} x {quantity}")]
    InvalidPart { length: f64, quantity: u32 },

    #[error("Invalid kerf: {value}")]
    InvalidKerf { value: f64 },

    #[error("Part {length} x {quantity} cannot be cut from any stock length (longest is {longest_stock})")]
    Unfittable {
        length: f64,
        quantity: u32,
        longest_stock: f64,
    },

    #[error("Combination needing {required} does not fit stock length {stock_length}")]
    CombinationTooLong { required: f64, stock_length: f64 },

    #[error("Too many distinct part lengths: {count} (maximum {max})")]
    TooManyPartLengths { count: usize, max: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CutListError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CutListError::FileNotFound { .. } => ErrorCode::FileNotFound,
            CutListError::EmptyFile { .. } => ErrorCode::EmptyFile,
            CutListError::ParseError { .. } => ErrorCode::ParseError,
            CutListError::MissingField { .. } => ErrorCode::ParseError,
            CutListError::InvalidValue { .. } => ErrorCode::ParseError,
            CutListError::EmptyCatalog => ErrorCode::InvalidInput,
            CutListError::InvalidStockLength { .. } => ErrorCode::InvalidInput,
            CutListError::InvalidPart { .. } => ErrorCode::InvalidInput,
            CutListError::InvalidKerf { .. } => ErrorCode::InvalidInput,
            CutListError::Unfittable { .. } => ErrorCode::Unfittable,
            CutListError::CombinationTooLong { .. } => ErrorCode::Unfittable,
            CutListError::TooManyPartLengths { .. } => ErrorCode::TooManyPartLengths,
            CutListError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for cut-list operations.
pub type Result<T> = std::result::Result<T, CutListError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfittable_code() {
        let err = CutListError::Unfittable {
            length: 4000.0,
            quantity: 1,
            longest_stock: 3000.0,
        };
        assert_eq!(err.code(), ErrorCode::Unfittable);
        assert_eq!(err.code_value(), 200);
        assert!(err.to_string().contains("4000"));
    }

    #[test]
    fn test_parse_error_codes() {
        let err = CutListError::MissingField {
            section: "Part".to_string(),
            field: "Length".to_string(),
        };
        assert_eq!(err.code_value(), -3);
        assert_eq!(
            err.to_string(),
            "Missing required field 'Length' in section [Part]"
        );
    }
}
