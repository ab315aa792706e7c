use crate::domain::order::OrderRequest;
use crate::error::Result;
use std::io::Read;

/// Parses a single order request from a JSON document.
///
/// Missing customer fields deserialize as empty strings so they reach the
/// validator and are rejected with the usual message.
pub fn read_order<R: Read>(source: R) -> Result<OrderRequest> {
    Ok(serde_json::from_reader(source)?)
}
