//! Cut definition: identical-length pieces taken from one stock bar.

use serde::{Deserialize, Serialize};

use crate::config::float_cmp::approx_eq;

/// One or more identical-length pieces cut from a single stock bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cut {
    /// Piece length.
    pub length: f64,
    /// Number of pieces of this length.
    pub quantity: u32,
}

impl Cut {
    /// Create a new cut.
    pub fn new(length: f64, quantity: u32) -> Self {
        Self { length, quantity }
    }

    /// Combined length of all pieces, kerf excluded.
    pub fn total_length(&self) -> f64 {
        self.length * self.quantity as f64
    }

    /// Check if both cuts produce pieces of the same length.
    pub fn same_length(&self, other: &Cut) -> bool {
        approx_eq(self.length, other.length)
    }
}
