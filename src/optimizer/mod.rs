//! Cut-list optimizer.
//!
//! Packs requested parts onto purchasable stock bars:
//! 1. Normalize the parts (drop empty requests, merge equal lengths)
//! 2. Reject parts no stock can hold
//! 3. Repeatedly enumerate combinations of the remaining lengths, place the
//!    one that best fills its shortest suitable stock as many times as the
//!    remaining quantities allow, and deduct it
//! 4. Aggregate identical bars
//!
//! Enumeration is `O(2^N)` per placement for `N` distinct lengths, bounded by
//! [`CutListConfig::max_distinct_lengths`].

mod aggregate;
mod combination;
mod placement;

pub use aggregate::{aggregate_cuts, aggregate_similar_cuts};
pub use combination::{calculate_total_length, generate_part_combinations};
pub use placement::{add_combination_to_stock, find_suitable_stock_length};

use crate::config::float_cmp::approx_eq;
use crate::config::CutListConfig;
use crate::error::{CutListError, Result};
use crate::model::{Cut, PartRequirement, StockCatalog, StockCut};

use combination::max_batch_quantity;

/// Compute an aggregated cut list for the requested parts.
///
/// Either every piece is placed or an error is returned.
pub fn compute_cut_list(
    parts: &[PartRequirement],
    catalog: &StockCatalog,
    config: &CutListConfig,
) -> Result<Vec<StockCut>> {
    config.validate()?;

    let mut remaining = normalize_parts(parts)?;
    if remaining.is_empty() {
        return Ok(Vec::new());
    }

    if remaining.len() > config.max_distinct_lengths {
        return Err(CutListError::TooManyPartLengths {
            count: remaining.len(),
            max: config.max_distinct_lengths,
        });
    }

    let longest_stock = catalog.longest();
    if let Some(part) = remaining
        .iter()
        .find(|part| part.length > longest_stock)
    {
        return Err(CutListError::Unfittable {
            length: part.length,
            quantity: part.quantity,
            longest_stock,
        });
    }

    let kerf = config.kerf;
    let mut cut_list = Vec::new();

    while !remaining.is_empty() {
        let batches: Vec<Cut> = remaining
            .iter()
            .map(|part| {
                let quantity = max_batch_quantity(part.length, part.quantity, longest_stock, kerf);
                Cut::new(part.length, quantity)
            })
            .collect();

        // Every batch fits the longest stock on its own, so a candidate exists.
        let (combination, stock_length) =
            select_combination(&batches, catalog, kerf).ok_or(CutListError::Unfittable {
                length: batches[0].length,
                quantity: batches[0].quantity,
                longest_stock,
            })?;

        let copies = available_copies(&remaining, &combination);
        tracing::debug!(
            "Selected {} length(s) for stock {}, {} time(s)",
            combination.len(),
            stock_length,
            copies
        );

        cut_list = add_combination_to_stock(cut_list, &combination, stock_length, kerf)?;
        if copies > 1 {
            let mut bars = StockCut::new(stock_length, combination.clone(), kerf);
            bars.quantity = copies - 1;
            cut_list.push(bars);
        }
        remaining = deduct_placed(remaining, &combination, copies);
    }

    let aggregated = aggregate_cuts(&cut_list);
    tracing::debug!(
        "Placed parts on {} bar(s) in {} pattern(s)",
        cut_list.len(),
        aggregated.len()
    );

    Ok(aggregated)
}

/// Prepare requested parts for packing.
///
/// Drops zero-quantity requests, rejects non-positive lengths, merges equal
/// lengths and orders the result longest first. Requests totalling more than
/// `u32::MAX` pieces are rejected as [`CutListError::InvalidPart`].
pub fn normalize_parts(parts: &[PartRequirement]) -> Result<Vec<Cut>> {
    let mut cuts: Vec<Cut> = Vec::with_capacity(parts.len());
    let mut pieces: u32 = 0;

    for part in parts {
        if part.is_empty() {
            tracing::warn!("Ignoring part of length {} with zero quantity", part.length);
            continue;
        }
        if !part.has_valid_length() {
            return Err(CutListError::InvalidPart {
                length: part.length,
                quantity: part.quantity,
            });
        }
        pieces = pieces
            .checked_add(part.quantity)
            .ok_or(CutListError::InvalidPart {
                length: part.length,
                quantity: part.quantity,
            })?;

        // Bounded by `pieces`
        match cuts.iter_mut().find(|c| approx_eq(c.length, part.length)) {
            Some(existing) => existing.quantity += part.quantity,
            None => cuts.push(part.as_cut()),
        }
    }

    cuts.sort_by(|a, b| b.length.total_cmp(&a.length));
    Ok(cuts)
}

/// Pick the combination that best fills its shortest suitable stock length.
///
/// Ties go to the longer combination, then to enumeration order.
fn select_combination(
    batches: &[Cut],
    catalog: &StockCatalog,
    kerf: f64,
) -> Option<(Vec<Cut>, f64)> {
    let mut best: Option<(Vec<Cut>, f64, f64, f64)> = None;

    for combination in generate_part_combinations(batches) {
        let total = calculate_total_length(&combination, kerf);
        let Some(stock_length) = catalog.shortest_fitting(total) else {
            continue;
        };
        let fill = total / stock_length;

        let better = match &best {
            None => true,
            Some((_, _, best_total, best_fill)) => {
                if approx_eq(fill, *best_fill) {
                    total > *best_total && !approx_eq(total, *best_total)
                } else {
                    fill > *best_fill
                }
            }
        };

        if better {
            best = Some((combination, stock_length, total, fill));
        }
    }

    best.map(|(combination, stock_length, _, _)| (combination, stock_length))
}

/// How many times `combination` can be cut from the remaining parts.
fn available_copies(remaining: &[Cut], combination: &[Cut]) -> u32 {
    combination
        .iter()
        .map(|cut| {
            let left: u32 = remaining
                .iter()
                .filter(|part| part.same_length(cut))
                .map(|part| part.quantity)
                .sum();
            left / cut.quantity.max(1)
        })
        .min()
        .unwrap_or(0)
        .max(1)
}

/// Remove `copies` placements of `placed` from the remaining parts.
fn deduct_placed(remaining: Vec<Cut>, placed: &[Cut], copies: u32) -> Vec<Cut> {
    remaining
        .into_iter()
        .filter_map(|part| {
            let used: u32 = placed
                .iter()
                .filter(|c| c.same_length(&part))
                .map(|c| c.quantity.saturating_mul(copies))
                .sum();
            let left = part.quantity.saturating_sub(used);
            (left > 0).then(|| Cut::new(part.length, left))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> StockCatalog {
        StockCatalog::new([500.0, 1000.0, 1500.0, 3000.0]).unwrap()
    }

    fn total_parts(parts: &[PartRequirement]) -> f64 {
        parts.iter().map(PartRequirement::total_length).sum()
    }

    fn total_cut(cut_list: &[StockCut]) -> f64 {
        cut_list
            .iter()
            .map(|s| s.quantity as f64 * s.cut_length())
            .sum()
    }

    // ==================== compute_cut_list tests ====================

    #[test]
    fn test_two_700_parts_share_1500_bar() {
        let parts = [PartRequirement::new(700.0, 2)];
        let cut_list = compute_cut_list(&parts, &catalog(), &CutListConfig::default()).unwrap();

        assert_eq!(cut_list.len(), 1);
        assert_eq!(cut_list[0].stock_length, 1500.0);
        assert_eq!(cut_list[0].used_length, 1408.0);
        assert_eq!(cut_list[0].cuts, vec![Cut::new(700.0, 2)]);
        assert_eq!(cut_list[0].quantity, 1);
    }

    #[test]
    fn test_part_longer_than_stock() {
        let parts = [PartRequirement::new(4000.0, 1)];
        let result = compute_cut_list(&parts, &catalog(), &CutListConfig::default());
        match result {
            Err(CutListError::Unfittable {
                length,
                quantity,
                longest_stock,
            }) => {
                assert_eq!(length, 4000.0);
                assert_eq!(quantity, 1);
                assert_eq!(longest_stock, 3000.0);
            }
            other => panic!("Expected Unfittable, got {:?}", other),
        }
    }

    #[test]
    fn test_part_barely_longer_than_stock() {
        let parts = [PartRequirement::new(3000.00005, 1)];
        let result = compute_cut_list(&parts, &catalog(), &CutListConfig::default());
        assert!(matches!(result, Err(CutListError::Unfittable { .. })));
    }

    #[test]
    fn test_empty_parts() {
        let cut_list = compute_cut_list(&[], &catalog(), &CutListConfig::default()).unwrap();
        assert!(cut_list.is_empty());
    }

    #[test]
    fn test_zero_quantity_only() {
        let parts = [PartRequirement::new(700.0, 0), PartRequirement::new(0.0, 0)];
        let cut_list = compute_cut_list(&parts, &catalog(), &CutListConfig::default()).unwrap();
        assert!(cut_list.is_empty());
    }

    #[test]
    fn test_single_part_no_kerf() {
        let parts = [PartRequirement::new(1000.0, 1)];
        let cut_list = compute_cut_list(&parts, &catalog(), &CutListConfig::default()).unwrap();
        assert_eq!(cut_list.len(), 1);
        assert_eq!(cut_list[0].stock_length, 1000.0);
        assert_eq!(cut_list[0].used_length, 1000.0);
    }

    #[test]
    fn test_exact_stock_length_parts() {
        let parts = [PartRequirement::new(3000.0, 3)];
        let cut_list = compute_cut_list(&parts, &catalog(), &CutListConfig::default()).unwrap();
        assert_eq!(cut_list.len(), 1);
        assert_eq!(cut_list[0].stock_length, 3000.0);
        assert_eq!(cut_list[0].cuts, vec![Cut::new(3000.0, 1)]);
        assert_eq!(cut_list[0].quantity, 3);
    }

    #[test]
    fn test_large_quantity_split_across_bars() {
        // Four 704mm slots fit on a 3000 bar
        let parts = [PartRequirement::new(700.0, 9)];
        let cut_list = compute_cut_list(&parts, &catalog(), &CutListConfig::default()).unwrap();

        assert_eq!(cut_list.len(), 2);
        assert_eq!(cut_list[0].stock_length, 3000.0);
        assert_eq!(cut_list[0].cuts, vec![Cut::new(700.0, 4)]);
        assert_eq!(cut_list[0].quantity, 2);
        assert_eq!(cut_list[1].stock_length, 1000.0);
        assert_eq!(cut_list[1].cuts, vec![Cut::new(700.0, 1)]);
        assert_eq!(total_cut(&cut_list), total_parts(&parts));
    }

    #[test]
    fn test_large_quantity_placed_in_one_group() {
        let parts = [PartRequirement::new(3000.0, 10_000)];
        let cut_list = compute_cut_list(&parts, &catalog(), &CutListConfig::default()).unwrap();

        assert_eq!(
            cut_list,
            vec![StockCut {
                stock_length: 3000.0,
                used_length: 3000.0,
                cuts: vec![Cut::new(3000.0, 1)],
                quantity: 10_000,
            }]
        );
    }

    #[test]
    fn test_large_mixed_quantities_conserve_length() {
        let parts = [
            PartRequirement::new(1600.0, 10_000),
            PartRequirement::new(700.0, 10_001),
            PartRequirement::new(450.0, 7_003),
        ];
        let cut_list = compute_cut_list(&parts, &catalog(), &CutListConfig::default()).unwrap();

        assert_eq!(total_cut(&cut_list), total_parts(&parts));
        assert!(cut_list.len() < 20);
        for stock_cut in &cut_list {
            assert!(stock_cut.used_length <= stock_cut.stock_length);
        }
    }

    #[test]
    fn test_mixed_parts_conserve_length() {
        let parts = [
            PartRequirement::new(700.0, 3),
            PartRequirement::new(450.0, 5),
            PartRequirement::new(1200.0, 2),
            PartRequirement::new(90.0, 7),
        ];
        let cut_list = compute_cut_list(&parts, &catalog(), &CutListConfig::default()).unwrap();

        assert_eq!(total_cut(&cut_list), total_parts(&parts));
        for stock_cut in &cut_list {
            assert!(stock_cut.used_length <= stock_cut.stock_length);
            assert!(stock_cut.quantity >= 1);
        }
        assert_eq!(aggregate_cuts(&cut_list), cut_list);
    }

    #[test]
    fn test_duplicate_lengths_merged() {
        let parts = [PartRequirement::new(700.0, 1), PartRequirement::new(700.0, 1)];
        let cut_list = compute_cut_list(&parts, &catalog(), &CutListConfig::default()).unwrap();
        assert_eq!(cut_list.len(), 1);
        assert_eq!(cut_list[0].stock_length, 1500.0);
        assert_eq!(cut_list[0].cuts, vec![Cut::new(700.0, 2)]);
    }

    #[test]
    fn test_shares_bar_between_lengths() {
        // 600 + 300 + kerf = 908 fills a 1000 bar best
        let parts = [PartRequirement::new(600.0, 1), PartRequirement::new(300.0, 1)];
        let cut_list = compute_cut_list(&parts, &catalog(), &CutListConfig::default()).unwrap();
        assert_eq!(cut_list.len(), 1);
        assert_eq!(cut_list[0].stock_length, 1000.0);
        assert_eq!(cut_list[0].used_length, 908.0);
        assert_eq!(
            cut_list[0].cuts,
            vec![Cut::new(600.0, 1), Cut::new(300.0, 1)]
        );
    }

    #[test]
    fn test_too_many_distinct_lengths() {
        let parts: Vec<PartRequirement> = (1..=5)
            .map(|i| PartRequirement::new(i as f64 * 10.0, 1))
            .collect();
        let config = CutListConfig::default().with_max_distinct_lengths(4);
        let result = compute_cut_list(&parts, &catalog(), &config);
        assert!(matches!(
            result,
            Err(CutListError::TooManyPartLengths { count: 5, max: 4 })
        ));
    }

    #[test]
    fn test_invalid_kerf() {
        let parts = [PartRequirement::new(700.0, 1)];
        let result = compute_cut_list(&parts, &catalog(), &CutListConfig::new(-4.0));
        assert!(matches!(result, Err(CutListError::InvalidKerf { .. })));
    }

    #[test]
    fn test_deterministic() {
        let parts = [
            PartRequirement::new(820.0, 4),
            PartRequirement::new(330.0, 6),
            PartRequirement::new(150.0, 3),
        ];
        let config = CutListConfig::default();
        let a = compute_cut_list(&parts, &catalog(), &config).unwrap();
        let b = compute_cut_list(&parts, &catalog(), &config).unwrap();
        assert_eq!(a, b);
    }

    // ==================== normalize_parts tests ====================

    #[test]
    fn test_normalize_sorts_and_merges() {
        let parts = [
            PartRequirement::new(300.0, 1),
            PartRequirement::new(700.0, 2),
            PartRequirement::new(300.0, 2),
            PartRequirement::new(900.0, 0),
        ];
        assert_eq!(
            normalize_parts(&parts).unwrap(),
            vec![Cut::new(700.0, 2), Cut::new(300.0, 3)]
        );
    }

    #[test]
    fn test_normalize_rejects_quantity_overflow() {
        let parts = [
            PartRequirement::new(700.0, 4_000_000_000),
            PartRequirement::new(700.0, 1_000_000_000),
        ];
        assert!(matches!(
            normalize_parts(&parts),
            Err(CutListError::InvalidPart {
                quantity: 1_000_000_000,
                ..
            })
        ));
    }

    #[test]
    fn test_normalize_rejects_total_overflow_across_lengths() {
        let parts = [
            PartRequirement::new(700.0, 3_000_000_000),
            PartRequirement::new(300.0, 3_000_000_000),
        ];
        assert!(normalize_parts(&parts).is_err());
    }

    #[test]
    fn test_normalize_accepts_max_total() {
        let parts = [
            PartRequirement::new(700.0, u32::MAX - 1),
            PartRequirement::new(700.0, 1),
        ];
        assert_eq!(
            normalize_parts(&parts).unwrap(),
            vec![Cut::new(700.0, u32::MAX)]
        );
    }

    #[test]
    fn test_normalize_rejects_bad_length() {
        let parts = [PartRequirement::new(-5.0, 1)];
        assert!(matches!(
            normalize_parts(&parts),
            Err(CutListError::InvalidPart { .. })
        ));
    }

    // ==================== deduct_placed tests ====================

    #[test]
    fn test_deduct_placed() {
        let remaining = vec![Cut::new(700.0, 5), Cut::new(300.0, 1)];
        let placed = [Cut::new(700.0, 4), Cut::new(300.0, 1)];
        assert_eq!(
            deduct_placed(remaining, &placed, 1),
            vec![Cut::new(700.0, 1)]
        );
    }

    #[test]
    fn test_deduct_placed_copies() {
        let remaining = vec![Cut::new(700.0, 9), Cut::new(300.0, 5)];
        let placed = [Cut::new(700.0, 4), Cut::new(300.0, 2)];
        assert_eq!(
            deduct_placed(remaining, &placed, 2),
            vec![Cut::new(700.0, 1), Cut::new(300.0, 1)]
        );
    }

    #[test]
    fn test_available_copies() {
        let remaining = [Cut::new(700.0, 9), Cut::new(300.0, 5)];
        assert_eq!(available_copies(&remaining, &[Cut::new(700.0, 4)]), 2);
        assert_eq!(
            available_copies(&remaining, &[Cut::new(700.0, 4), Cut::new(300.0, 1)]),
            2
        );
        assert_eq!(
            available_copies(&remaining, &[Cut::new(700.0, 1), Cut::new(300.0, 2)]),
            2
        );
        assert_eq!(available_copies(&remaining, &[Cut::new(300.0, 5)]), 1);
    }
}
