//! Invoice generator module.

mod format;
mod invoice;

pub use format::{format_amount, format_length};
pub use invoice::{calculate_fees, generate_invoice, invoice_lines, FeeSummary, InvoiceLine};
