//! Material usage summary for a computed cut list.

use serde::{Deserialize, Serialize};

use super::StockCut;

/// Totals over a cut list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CutListSummary {
    /// Bars to purchase.
    pub bars: u64,
    /// Total stock length purchased.
    pub stock_length: f64,
    /// Length delivered as parts.
    pub part_length: f64,
    /// Length lost to the saw.
    pub kerf_loss: f64,
    /// Length left over as offcuts.
    pub offcut_length: f64,
}

impl CutListSummary {
    /// Summarize a cut list.
    pub fn from_cut_list(cut_list: &[StockCut]) -> Self {
        cut_list.iter().fold(Self::default(), |mut acc, stock_cut| {
            let bars = stock_cut.quantity as f64;
            acc.bars += u64::from(stock_cut.quantity);
            acc.stock_length += stock_cut.stock_length * bars;
            acc.part_length += stock_cut.cut_length() * bars;
            acc.kerf_loss += stock_cut.kerf_loss() * bars;
            acc.offcut_length += stock_cut.remaining_length() * bars;
            acc
        })
    }

    /// Fraction of purchased stock delivered as parts.
    pub fn utilization(&self) -> f64 {
        if self.stock_length > 0.0 {
            self.part_length / self.stock_length
        } else {
            0.0
        }
    }
}
