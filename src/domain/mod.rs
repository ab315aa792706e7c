//! Domain layer: pricing rules, order rules and the ports the application drives.
//!
//! Nothing in here performs I/O. Side effects go through the traits in [`ports`].

pub mod customer;
pub mod money;
pub mod notification;
pub mod order;
pub mod ports;
pub mod pricing;
pub mod receipt;
