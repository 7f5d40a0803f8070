//! Stock cut: a purchased bar and the pieces cut from it.

use serde::{Deserialize, Serialize};

use crate::config::float_cmp::approx_eq;
use crate::optimizer::{aggregate_similar_cuts, calculate_total_length};

use super::Cut;

/// One purchased stock bar, or a group of bars cut to the same pattern.
///
/// `cuts` describes a single bar; `quantity` is how many bars follow it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockCut {
    /// Purchased stock length.
    pub stock_length: f64,
    /// Material consumed per bar, kerf included.
    pub used_length: f64,
    /// Pieces cut from each bar.
    pub cuts: Vec<Cut>,
    /// Number of bars with this pattern.
    pub quantity: u32,
}

impl StockCut {
    /// Create a single bar holding `cuts`.
    pub fn new(stock_length: f64, cuts: Vec<Cut>, kerf: f64) -> Self {
        Self {
            stock_length,
            used_length: calculate_total_length(&cuts, kerf),
            cuts,
            quantity: 1,
        }
    }

    /// Length left on each bar after cutting.
    pub fn remaining_length(&self) -> f64 {
        self.stock_length - self.used_length
    }

    /// Pieces cut from each bar.
    pub fn piece_count(&self) -> u64 {
        self.cuts.iter().map(|c| u64::from(c.quantity)).sum()
    }

    /// Length delivered as parts per bar, kerf excluded.
    pub fn cut_length(&self) -> f64 {
        self.cuts.iter().map(Cut::total_length).sum()
    }

    /// Length lost to the saw per bar.
    pub fn kerf_loss(&self) -> f64 {
        self.used_length - self.cut_length()
    }

    /// Cuts over every bar in the group.
    pub fn total_cuts(&self) -> Vec<Cut> {
        self.cuts
            .iter()
            .map(|c| Cut::new(c.length, c.quantity * self.quantity))
            .collect()
    }

    /// The bar with `combination` appended, if it still fits.
    pub fn with_combination(&self, combination: &[Cut], kerf: f64) -> Option<StockCut> {
        let mut cuts = self.cuts.clone();
        cuts.extend_from_slice(combination);

        let used_length = calculate_total_length(&cuts, kerf);
        if used_length > self.stock_length {
            return None;
        }

        Some(StockCut {
            stock_length: self.stock_length,
            used_length,
            cuts,
            quantity: self.quantity,
        })
    }

    /// Cut pattern with same-length cuts merged, longest first.
    pub fn pattern(&self) -> Vec<Cut> {
        let mut pattern = aggregate_similar_cuts(&self.cuts);
        pattern.sort_by(|a, b| b.length.total_cmp(&a.length));
        pattern
    }

    /// Check if both records describe bars cut the same way.
    pub fn same_pattern(&self, other: &StockCut) -> bool {
        if !approx_eq(self.stock_length, other.stock_length) {
            return false;
        }

        let a = self.pattern();
        let b = other.pattern();
        a.len() == b.len()
            && a
                .iter()
                .zip(&b)
                .all(|(x, y)| x.same_length(y) && x.quantity == y.quantity)
    }
}
