//! Application layer orchestrating an order from request to confirmation.
//!
//! This module defines the `OrderProcessor`, the entry point for accepting orders.
//! It drives the domain ports in a fixed sequence and decides which failures abort
//! the order and which are only reported.

pub mod checkout;
