use super::customer::CustomerTier;
use super::pricing::PricingResult;
use std::fmt::Write;

pub const RECEIPT_WIDTH: usize = 40;
pub const RECEIPT_TITLE: &str = "SCONTRINO ORDINE";
pub const LARGE_ORDER_NOTICE: &str = "SCONTO PER ORDINE GRANDE: -5%";

/// Renders the fixed-width text receipt for a priced cart.
pub fn format_receipt(order: &PricingResult, tier: CustomerTier) -> String {
    let heavy_rule = "=".repeat(RECEIPT_WIDTH);
    let light_rule = "-".repeat(RECEIPT_WIDTH);

    let mut receipt = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(receipt, "{heavy_rule}");
    let _ = writeln!(receipt, "{RECEIPT_TITLE}");
    let _ = writeln!(receipt, "{heavy_rule}");
    let _ = writeln!(receipt, "Tipo cliente: {}", tier.description());
    let _ = writeln!(receipt, "{light_rule}");
    let _ = writeln!(receipt, "Subtotale: € {}", order.subtotal);
    let _ = writeln!(receipt, "Tasse (22%): € {}", order.tax);
    if order.discount_applied {
        let _ = writeln!(receipt, "{LARGE_ORDER_NOTICE}");
    }
    let _ = writeln!(receipt, "{light_rule}");
    let _ = writeln!(receipt, "TOTALE: € {}", order.total);
    let _ = writeln!(receipt, "{heavy_rule}");
    receipt
}
