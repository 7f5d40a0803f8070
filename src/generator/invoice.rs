//! Invoice generator for computed cut lists.

use serde::{Deserialize, Serialize};

use crate::config::InvoiceConfig;
use crate::model::StockCut;

use super::format::{format_amount, format_length};

/// A single invoice line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InvoiceLine {
    /// Stock bars purchased for one cut pattern.
    Extrusion { quantity: u32, stock_length: f64 },
    /// Pieces of one length cut from each bar of a pattern.
    CuttingFee {
        stock_quantity: u32,
        stock_length: f64,
        cut_quantity: u32,
        cut_length: f64,
    },
}

impl InvoiceLine {
    /// Render the line using the given SKU prefix.
    pub fn render(&self, sku_prefix: &str) -> String {
        match self {
            InvoiceLine::Extrusion {
                quantity,
                stock_length,
            } => format!(
                "Extrusion added to invoice: {} x {}",
                quantity,
                sku(sku_prefix, *stock_length)
            ),
            InvoiceLine::CuttingFee {
                stock_quantity,
                stock_length,
                cut_quantity,
                cut_length,
            } => format!(
                "Cutting fee: {} x {} cut to {} x {}",
                stock_quantity,
                sku(sku_prefix, *stock_length),
                cut_quantity,
                sku(sku_prefix, *cut_length)
            ),
        }
    }
}

fn sku(prefix: &str, length: f64) -> String {
    format!("{}-{}", prefix, format_length(length))
}

/// Build invoice lines: one per pattern, followed by one per cut length.
pub fn invoice_lines(cut_list: &[StockCut]) -> Vec<InvoiceLine> {
    cut_list
        .iter()
        .flat_map(|stock_cut| {
            let extrusion = InvoiceLine::Extrusion {
                quantity: stock_cut.quantity,
                stock_length: stock_cut.stock_length,
            };
            let fees = stock_cut.cuts.iter().map(move |cut| InvoiceLine::CuttingFee {
                stock_quantity: stock_cut.quantity,
                stock_length: stock_cut.stock_length,
                cut_quantity: cut.quantity,
                cut_length: cut.length,
            });
            std::iter::once(extrusion).chain(fees)
        })
        .collect()
}

/// Fees owed for a cut list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeSummary {
    /// Pieces cut over all bars.
    pub cut_count: u64,
    /// `cut_count` times the per-cut fee.
    pub cutting_fees: f64,
    /// One-off setup fee, zero when nothing is cut.
    pub setup_fee: f64,
}

impl FeeSummary {
    /// Total fees.
    pub fn total(&self) -> f64 {
        self.cutting_fees + self.setup_fee
    }
}

/// Calculate cutting and setup fees.
pub fn calculate_fees(cut_list: &[StockCut], config: &InvoiceConfig) -> FeeSummary {
    let cut_count: u64 = cut_list
        .iter()
        .map(|stock_cut| u64::from(stock_cut.quantity).saturating_mul(stock_cut.piece_count()))
        .fold(0, u64::saturating_add);

    FeeSummary {
        cut_count,
        cutting_fees: cut_count as f64 * config.cut_fee,
        setup_fee: if cut_count > 0 { config.setup_fee } else { 0.0 },
    }
}

/// Generate the invoice text for a cut list.
pub fn generate_invoice(cut_list: &[StockCut], config: &InvoiceConfig) -> String {
    let mut output = String::new();

    for line in invoice_lines(cut_list) {
        output.push_str(&line.render(&config.sku_prefix));
        output.push('\n');
    }

    if config.has_fees() {
        let fees = calculate_fees(cut_list, config);
        output.push_str(&format!(
            "Cutting fees: {} x {} = {}\n",
            fees.cut_count,
            format_amount(config.cut_fee),
            format_amount(fees.cutting_fees)
        ));
        output.push_str(&format!("Setup fee: {}\n", format_amount(fees.setup_fee)));
        output.push_str(&format!("Total fees: {}\n", format_amount(fees.total())));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Cut;
    use pretty_assertions::assert_eq;

    fn two_by_700() -> Vec<StockCut> {
        vec![StockCut::new(1500.0, vec![Cut::new(700.0, 2)], 4.0)]
    }

    #[test]
    fn test_render_extrusion() {
        let line = InvoiceLine::Extrusion {
            quantity: 1,
            stock_length: 1500.0,
        };
        assert_eq!(
            line.render("LR-20x20-S"),
            "Extrusion added to invoice: 1 x LR-20x20-S-1500"
        );
    }

    #[test]
    fn test_render_cutting_fee() {
        let line = InvoiceLine::CuttingFee {
            stock_quantity: 1,
            stock_length: 1500.0,
            cut_quantity: 2,
            cut_length: 700.0,
        };
        assert_eq!(
            line.render("LR-20x20-S"),
            "Cutting fee: 1 x LR-20x20-S-1500 cut to 2 x LR-20x20-S-700"
        );
    }

    #[test]
    fn test_invoice_lines_order() {
        let mut mixed = StockCut::new(1000.0, vec![Cut::new(600.0, 1), Cut::new(300.0, 1)], 4.0);
        mixed.quantity = 2;
        let lines = invoice_lines(&[mixed]);

        assert_eq!(lines.len(), 3);
        assert!(matches!(lines[0], InvoiceLine::Extrusion { quantity: 2, .. }));
        assert!(matches!(
            lines[2],
            InvoiceLine::CuttingFee {
                stock_quantity: 2,
                cut_quantity: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_calculate_fees() {
        let mut bars = StockCut::new(3000.0, vec![Cut::new(700.0, 4)], 4.0);
        bars.quantity = 2;
        let config = InvoiceConfig {
            cut_fee: 1.5,
            setup_fee: 10.0,
            ..Default::default()
        };

        let fees = calculate_fees(&[bars], &config);
        assert_eq!(fees.cut_count, 8);
        assert_eq!(fees.cutting_fees, 12.0);
        assert_eq!(fees.setup_fee, 10.0);
        assert_eq!(fees.total(), 22.0);
    }

    #[test]
    fn test_no_setup_fee_without_cuts() {
        let config = InvoiceConfig {
            setup_fee: 10.0,
            ..Default::default()
        };
        assert_eq!(calculate_fees(&[], &config), FeeSummary::default());
    }

    #[test]
    fn test_generate_invoice_without_fees() {
        let invoice = generate_invoice(&two_by_700(), &InvoiceConfig::default());
        assert_eq!(
            invoice,
            "Extrusion added to invoice: 1 x LR-20x20-S-1500\n\
             Cutting fee: 1 x LR-20x20-S-1500 cut to 2 x LR-20x20-S-700\n"
        );
    }

    #[test]
    fn test_generate_invoice_with_fees() {
        let config = InvoiceConfig {
            cut_fee: 2.5,
            setup_fee: 10.0,
            ..Default::default()
        };
        let invoice = generate_invoice(&two_by_700(), &config);
        assert!(invoice.contains("Cutting fees: 2 x 2.50 = 5.00\n"));
        assert!(invoice.contains("Setup fee: 10.00\n"));
        assert!(invoice.ends_with("Total fees: 15.00\n"));
    }
}
