//! Catalog of purchasable stock lengths.

use serde::{Deserialize, Serialize};

use crate::config::float_cmp::approx_eq;
use crate::config::DEFAULT_STOCK_LENGTHS;
use crate::error::{CutListError, Result};
use crate::optimizer::find_suitable_stock_length;

/// Purchasable raw material lengths, stored ascending without duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct StockCatalog {
    lengths: Vec<f64>,
}

impl StockCatalog {
    /// Create a catalog from any set of positive lengths.
    pub fn new(lengths: impl IntoIterator<Item = f64>) -> Result<Self> {
        let mut lengths: Vec<f64> = lengths.into_iter().collect();

        if lengths.is_empty() {
            return Err(CutListError::EmptyCatalog);
        }
        if let Some(&bad) = lengths.iter().find(|l| !l.is_finite() || **l <= 0.0) {
            return Err(CutListError::InvalidStockLength { value: bad });
        }

        lengths.sort_by(f64::total_cmp);
        lengths.dedup_by(|a, b| approx_eq(*a, *b));

        Ok(Self { lengths })
    }

    /// Stock lengths, shortest first.
    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    /// Longest available stock length.
    pub fn longest(&self) -> f64 {
        // Construction guarantees at least one entry.
        self.lengths.last().copied().unwrap_or_default()
    }

    /// Shortest stock length that can hold `required`.
    pub fn shortest_fitting(&self, required: f64) -> Option<f64> {
        find_suitable_stock_length(required, &self.lengths)
    }
}

impl Default for StockCatalog {
    fn default() -> Self {
        Self {
            lengths: DEFAULT_STOCK_LENGTHS.to_vec(),
        }
    }
}

impl TryFrom<Vec<f64>> for StockCatalog {
    type Error = CutListError;

    fn try_from(lengths: Vec<f64>) -> Result<Self> {
        Self::new(lengths)
    }
}

impl From<StockCatalog> for Vec<f64> {
    fn from(catalog: StockCatalog) -> Self {
        catalog.lengths
    }
}
