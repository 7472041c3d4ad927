//! Checkout module.
//!
//! Turns the visitor's current selection into an order for invoicing.

mod order;

pub use order::{Order, OrderLine, OrderStatus};
