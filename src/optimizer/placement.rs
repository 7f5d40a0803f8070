//! Stock selection and placement of combinations onto bars.

use crate::config::float_cmp::approx_eq;
use crate::error::{CutListError, Result};
use crate::model::{Cut, StockCut};

use super::combination::calculate_total_length;

/// Find the first stock length, in the order given, that can hold `required`.
///
/// Callers wanting the shortest fit pass lengths in ascending order, as
/// [`StockCatalog`](crate::model::StockCatalog) stores them.
pub fn find_suitable_stock_length(required: f64, stock_lengths: &[f64]) -> Option<f64> {
    stock_lengths
        .iter()
        .copied()
        .find(|&length| required <= length)
}

/// Place a combination on a bar of `stock_length` and return the new cut list.
///
/// The combination joins the first existing single bar of that length that
/// still fits it; otherwise a new bar is opened. Grouped records
/// (`quantity > 1`) are never extended.
pub fn add_combination_to_stock(
    mut cut_list: Vec<StockCut>,
    combination: &[Cut],
    stock_length: f64,
    kerf: f64,
) -> Result<Vec<StockCut>> {
    let pieces_length: f64 = combination.iter().map(Cut::total_length).sum();

    let existing = cut_list.iter().enumerate().find_map(|(idx, stock_cut)| {
        if stock_cut.quantity != 1
            || !approx_eq(stock_cut.stock_length, stock_length)
            || stock_cut.remaining_length() < pieces_length
        {
            return None;
        }
        stock_cut
            .with_combination(combination, kerf)
            .map(|updated| (idx, updated))
    });

    if let Some((idx, updated)) = existing {
        tracing::debug!(
            "Appending {} piece(s) to bar {} of {} (used {})",
            combination.iter().map(|c| u64::from(c.quantity)).sum::<u64>(),
            idx + 1,
            stock_length,
            updated.used_length
        );
        cut_list[idx] = updated;
        return Ok(cut_list);
    }

    let required = calculate_total_length(combination, kerf);
    if required > stock_length {
        return Err(CutListError::CombinationTooLong {
            required,
            stock_length,
        });
    }

    tracing::debug!("Opening new bar of {} (used {})", stock_length, required);
    cut_list.push(StockCut::new(stock_length, combination.to_vec(), kerf));
    Ok(cut_list)
}
