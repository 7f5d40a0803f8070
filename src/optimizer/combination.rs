//! Combination enumeration and material consumption.

use crate::model::Cut;

/// Generate every non-empty combination of the given cuts.
///
/// Each entry is one element of the power set regardless of its quantity,
/// so `N` entries yield `2^N - 1` combinations. Combinations without the
/// first entry come before those with it.
pub fn generate_part_combinations(parts: &[Cut]) -> Vec<Vec<Cut>> {
    let mut combinations = power_set(parts);
    combinations.retain(|combination| !combination.is_empty());
    combinations
}

fn power_set(parts: &[Cut]) -> Vec<Vec<Cut>> {
    let Some((first, rest)) = parts.split_first() else {
        return vec![Vec::new()];
    };

    let without_first = power_set(rest);
    let with_first: Vec<Vec<Cut>> = without_first
        .iter()
        .map(|combination| {
            let mut with = Vec::with_capacity(combination.len() + 1);
            with.push(*first);
            with.extend_from_slice(combination);
            with
        })
        .collect();

    let mut all = without_first;
    all.extend(with_first);
    all
}

/// Material one bar consumes to yield `cuts`.
///
/// Every piece sawn from a bar that yields more than one piece costs one
/// kerf. A bar yielding a single piece costs none.
pub fn calculate_total_length(cuts: &[Cut], kerf: f64) -> f64 {
    let pieces: u64 = cuts.iter().map(|c| u64::from(c.quantity)).sum();
    let length: f64 = cuts.iter().map(Cut::total_length).sum();

    if pieces > 1 {
        length + kerf * pieces as f64
    } else {
        length
    }
}

/// Largest number of `length` pieces, up to `available`, that one bar of
/// `longest_stock` can yield.
pub(crate) fn max_batch_quantity(
    length: f64,
    available: u32,
    longest_stock: f64,
    kerf: f64,
) -> u32 {
    if available <= 1 {
        return available;
    }

    let fit = (longest_stock / (length + kerf)).floor();
    let mut quantity = if fit >= available as f64 {
        available
    } else {
        (fit as u32).max(1)
    };

    // Division rounding may overshoot by one
    while quantity > 1
        && calculate_total_length(&[Cut::new(length, quantity)], kerf) > longest_stock
    {
        quantity -= 1;
    }
    quantity
}
