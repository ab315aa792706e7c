use crate::domain::pricing::LineItem;
use crate::error::{OrderError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct CartRow {
    price: Decimal,
    quantity: u32,
}

impl From<CartRow> for LineItem {
    fn from(row: CartRow) -> Self {
        LineItem::new(row.price, row.quantity)
    }
}

/// Reads cart line items from a CSV source with a `price,quantity` header.
///
/// Whitespace around fields is trimmed; each row is yielded as its own `Result`
/// so a malformed row does not stop the rest of the cart from being read.
pub struct CartReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CartReader<R> {
    /// Creates a new `CartReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn line_items(self) -> impl Iterator<Item = Result<LineItem>> {
        self.reader
            .into_deserialize::<CartRow>()
            .map(|result| result.map(LineItem::from).map_err(OrderError::from))
    }
}
