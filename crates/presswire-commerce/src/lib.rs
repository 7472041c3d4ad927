//! Press-release placement domain types and logic for Presswire.
//!
//! This crate provides the commerce core of the Presswire placement service:
//!
//! - **Catalog**: Publications (news outlets), tiers, placement features,
//!   content restrictions, and the visibility-filtered projections served to
//!   guests versus signed-in buyers
//! - **Cart**: The per-session selection of publications and add-on services
//! - **Import**: Fixed-column spreadsheet (CSV) parsing with field coercion
//! - **Checkout**: Building an order from the current selection
//!
//! # Example
//!
//! ```rust,ignore
//! use presswire_commerce::prelude::*;
//!
//! let mut cart = SelectionCart::new("sess_abc");
//! cart.add_item(PublicationId::new("pub-forbes"));
//! cart.add_service(ServiceId::new("svc-writing"));
//!
//! let order = Order::from_selection(&cart, "buyer@example.com", &catalog)?;
//! println!("Total: {}", order.grand_total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod import;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        CatalogView, CommercialTerms, ContentRestrictions, PlacementFeatures, Publication,
        PublicationDraft, Tier, Visibility,
    };

    // Cart
    pub use crate::cart::{CartHandle, SelectionCart};

    // Import
    pub use crate::import::{ImportReport, RowError};

    // Checkout
    pub use crate::checkout::{Order, OrderLine, OrderStatus};
}
