//! A complete cut-list request: parts, stock and settings.

use serde::{Deserialize, Serialize};

use crate::config::{CutListConfig, InvoiceConfig};
use crate::error::Result;
use crate::optimizer::compute_cut_list;

use super::{PartRequirement, StockCatalog, StockCut};

/// Everything needed to compute and invoice a cut list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CutRequest {
    /// Requested parts.
    pub parts: Vec<PartRequirement>,
    /// Available stock lengths.
    pub catalog: StockCatalog,
    /// Optimizer settings.
    pub config: CutListConfig,
    /// Invoice settings.
    pub invoice: InvoiceConfig,
}

impl CutRequest {
    /// Create a request with default stock and settings.
    pub fn new(parts: Vec<PartRequirement>) -> Self {
        Self {
            parts,
            ..Default::default()
        }
    }

    /// Run the optimizer over this request.
    pub fn compute(&self) -> Result<Vec<StockCut>> {
        compute_cut_list(&self.parts, &self.catalog, &self.config)
    }
}
