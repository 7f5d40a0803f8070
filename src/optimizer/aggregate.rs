//! Aggregation of placed bars into a compact cut list.

use crate::model::{Cut, StockCut};

/// Merge cuts of the same length, summing quantities.
///
/// Keeps the order in which each length first appears. Sums saturate at
/// `u32::MAX`; [`normalize_parts`](super::normalize_parts) rejects requests
/// that could reach it.
pub fn aggregate_similar_cuts(cuts: &[Cut]) -> Vec<Cut> {
    cuts.iter().fold(Vec::new(), |mut acc: Vec<Cut>, cut| {
        match acc.iter_mut().find(|c| c.same_length(cut)) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(cut.quantity)
            }
            None => acc.push(*cut),
        }
        acc
    })
}

/// Group bars sharing a stock length and cut pattern.
///
/// Each output record keeps the per-bar pattern (same-length cuts merged,
/// longest first) and sums the bar counts of the records folded into it.
/// Output order follows the first bar of each group.
pub fn aggregate_cuts(cut_list: &[StockCut]) -> Vec<StockCut> {
    cut_list.iter().fold(Vec::new(), |mut acc: Vec<StockCut>, item| {
        match acc.iter_mut().find(|existing| existing.same_pattern(item)) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity)
            }
            None => acc.push(StockCut {
                cuts: item.pattern(),
                ..item.clone()
            }),
        }
        acc
    })
}
