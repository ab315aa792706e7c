use super::order::OrderRecord;
use std::fmt::Write;

pub const LOG_TAG: &str = "[ORDINE]";

/// Confirmation message sent to the customer once the order is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl ConfirmationEmail {
    pub fn for_order(record: &OrderRecord) -> Self {
        let mut body = format!(
            "\nGrazie {}!\n\nIl tuo ordine è stato confermato.\nTotale: €{}\n\nDettagli:\n",
            record.customer_name, record.total
        );
        for item in &record.items {
            let _ = writeln!(
                body,
                "- {} x{}: €{}",
                item.name,
                item.quantity,
                item.line_total()
            );
        }

        Self {
            to: record.customer_email.clone(),
            subject: format!("Ordine confermato - €{}", record.total),
            body,
        }
    }
}

/// The line appended to the order log for an accepted order, newline included.
pub fn order_log_line(record: &OrderRecord) -> String {
    format!(
        "{LOG_TAG} {} - €{} - VIP: {}\n",
        record.customer_name, record.total, record.vip
    )
}
