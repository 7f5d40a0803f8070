//! extrusion-cutlist - Cut-list optimizer for aluminum extrusions.
//!
//! This library works out which standard stock lengths to buy and how to cut
//! them so that every requested part is produced, budgeting the material the
//! saw blade removes (kerf) on each cut.
//!
//! # Example
//!
//! ```
//! use extrusion_cutlist::{compute_cut_list, Cut, CutListConfig, PartRequirement, StockCatalog};
//!
//! let parts = [PartRequirement::new(700.0, 2)];
//! let catalog = StockCatalog::new([500.0, 1000.0, 1500.0, 3000.0]).unwrap();
//! let cut_list = compute_cut_list(&parts, &catalog, &CutListConfig::default()).unwrap();
//!
//! assert_eq!(cut_list.len(), 1);
//! assert_eq!(cut_list[0].stock_length, 1500.0);
//! assert_eq!(cut_list[0].used_length, 1408.0);
//! assert_eq!(cut_list[0].cuts, vec![Cut::new(700.0, 2)]);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod optimizer;
pub mod parser;
pub mod validation;

// Re-exports for convenience
pub use config::{CutListConfig, InvoiceConfig};
pub use error::{CutListError, ErrorCode, Result};
pub use generator::{calculate_fees, generate_invoice, invoice_lines, FeeSummary, InvoiceLine};
pub use model::{Cut, CutListSummary, CutRequest, PartRequirement, StockCatalog, StockCut};
pub use optimizer::{
    add_combination_to_stock, aggregate_cuts, aggregate_similar_cuts, calculate_total_length,
    compute_cut_list, find_suitable_stock_length, generate_part_combinations, normalize_parts,
};
pub use parser::{parse_request_file, parse_request_str};
pub use validation::{quick_validate, validate_request, ValidationResult};

/// Compute the invoice for a cut request file.
///
/// Full pipeline:
/// 1. Parse the request file
/// 2. Validate it (warnings are logged, errors abort)
/// 3. Compute the cut list
/// 4. Render the invoice
pub fn quote_request_file(input_path: &std::path::Path) -> Result<String> {
    let request = parse_request_file(input_path)?;

    let validation = validate_request(&request);
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    quick_validate(&request)?;

    let cut_list = request.compute()?;
    Ok(generate_invoice(&cut_list, &request.invoice))
}
