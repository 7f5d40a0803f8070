//! Configuration constants and settings for the cut-list optimizer.

use serde::{Deserialize, Serialize};

use crate::error::{CutListError, Result};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Default saw kerf in mm.
pub const DEFAULT_KERF: f64 = 4.0;

/// Standard stock lengths for 20 series extrusions (mm).
pub const DEFAULT_STOCK_LENGTHS: [f64; 4] = [500.0, 1000.0, 1500.0, 3000.0];

/// Maximum number of distinct part lengths per calculation.
///
/// Combination search is exponential in this count.
pub const MAX_DISTINCT_LENGTHS: usize = 12;

/// Default SKU prefix for invoice lines.
pub const DEFAULT_SKU_PREFIX: &str = "LR-20x20-S";

/// Optimizer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutListConfig {
    /// Material lost per saw cut.
    pub kerf: f64,
    /// Upper bound on distinct part lengths accepted.
    pub max_distinct_lengths: usize,
}

impl Default for CutListConfig {
    fn default() -> Self {
        Self {
            kerf: DEFAULT_KERF,
            max_distinct_lengths: MAX_DISTINCT_LENGTHS,
        }
    }
}

impl CutListConfig {
    /// Create a new configuration with the given kerf.
    pub fn new(kerf: f64) -> Self {
        Self {
            kerf,
            ..Default::default()
        }
    }

    /// Set the distinct part length limit.
    pub fn with_max_distinct_lengths(mut self, max: usize) -> Self {
        self.max_distinct_lengths = max;
        self
    }

    /// Check that the kerf is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.kerf.is_finite() || self.kerf < 0.0 {
            return Err(CutListError::InvalidKerf { value: self.kerf });
        }
        Ok(())
    }
}

/// Invoice rendering and pricing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceConfig {
    /// Product code prefix, e.g. `LR-20x20-S`.
    pub sku_prefix: String,
    /// Fee charged per cut piece.
    pub cut_fee: f64,
    /// Fee charged once per order that needs cutting.
    pub setup_fee: f64,
}

impl Default for InvoiceConfig {
    fn default() -> Self {
        Self {
            sku_prefix: DEFAULT_SKU_PREFIX.to_string(),
            cut_fee: 0.0,
            setup_fee: 0.0,
        }
    }
}

impl InvoiceConfig {
    /// Whether any fee is configured.
    pub fn has_fees(&self) -> bool {
        self.cut_fee > 0.0 || self.setup_fee > 0.0
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }
}
