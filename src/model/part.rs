//! Part requirement: how many pieces of a given length the customer needs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CutListError;

use super::Cut;

/// A need for `quantity` pieces of `length`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartRequirement {
    /// Required piece length.
    pub length: f64,
    /// Number of pieces required.
    pub quantity: u32,
}

impl PartRequirement {
    /// Create a new part requirement.
    pub fn new(length: f64, quantity: u32) -> Self {
        Self { length, quantity }
    }

    /// A requirement with nothing to cut.
    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }

    /// Check that the length is a usable positive number.
    pub fn has_valid_length(&self) -> bool {
        self.length.is_finite() && self.length > 0.0
    }

    /// Combined length of all required pieces.
    pub fn total_length(&self) -> f64 {
        self.length * self.quantity as f64
    }

    /// The requirement expressed as a cut.
    pub fn as_cut(&self) -> Cut {
        Cut::new(self.length, self.quantity)
    }
}

/// Parses `700x2`, `700*2` or `700` (quantity 1).
impl FromStr for PartRequirement {
    type Err = CutListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CutListError::InvalidValue {
            field: "part".to_string(),
            expected: "LENGTHxQUANTITY".to_string(),
            value: s.to_string(),
        };

        let trimmed = s.trim();
        let (length, quantity) = match trimmed.split_once(['x', 'X', '*']) {
            Some((length, quantity)) => (length.trim(), quantity.trim()),
            None => (trimmed, "1"),
        };

        let length: f64 = length.parse().map_err(|_| invalid())?;
        let quantity: u32 = quantity.parse().map_err(|_| invalid())?;

        Ok(Self::new(length, quantity))
    }
}

impl fmt::Display for PartRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.length, self.quantity)
    }
}
