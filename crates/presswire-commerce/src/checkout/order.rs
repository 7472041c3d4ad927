//! Order types.

use crate::cart::SelectionCart;
use crate::catalog::Publication;
use crate::error::CommerceError;
use crate::ids::{OrderId, OrderLineId, PublicationId, ServiceId, UserId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Order status through the placement flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order placed, invoice not yet sent.
    #[default]
    Pending,
    /// Invoice emailed to the client.
    InvoiceSent,
    /// Invoice paid.
    Paid,
    /// All placements published.
    Published,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InvoiceSent => "invoice_sent",
            OrderStatus::Paid => "paid",
            OrderStatus::Published => "published",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Published | OrderStatus::Cancelled)
    }

    /// Check if the order can still be cancelled.
    pub fn can_cancel(&self) -> bool {
        matches!(
            self,
            OrderStatus::Pending | OrderStatus::InvoiceSent | OrderStatus::Paid
        )
    }
}

/// One placement in an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// Unique line identifier.
    pub id: OrderLineId,
    /// The publication being booked.
    pub publication_id: PublicationId,
    /// Publication name (denormalized for the invoice).
    pub publication_name: String,
    /// Price at the time of checkout.
    pub unit_price: Money,
}

/// A placement order built from the visitor's selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-readable order number.
    pub order_number: String,
    /// Session the order originated from.
    pub session_id: String,
    /// Buyer user ID (None for guest checkout).
    pub user_id: Option<UserId>,
    /// Buyer email for the invoice.
    pub email: String,
    /// Order status.
    pub status: OrderStatus,
    /// Booked placements.
    pub lines: Vec<OrderLine>,
    /// Add-on services requested alongside the placements.
    pub service_ids: Vec<ServiceId>,
    /// Sum of line prices.
    pub subtotal: Money,
    /// Total charged.
    pub grand_total: Money,
    /// Order currency.
    pub currency: Currency,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Order {
    /// Build an order from the current selection.
    ///
    /// Every selected publication must resolve against `catalog`; an unknown
    /// id fails the whole checkout rather than silently dropping a line.
    pub fn from_selection(
        cart: &SelectionCart,
        email: impl Into<String>,
        catalog: &[Publication],
    ) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptySelection);
        }

        let mut lines = Vec::with_capacity(cart.items().len());
        for id in cart.items() {
            let publication = catalog
                .iter()
                .find(|p| &p.id == id)
                .ok_or_else(|| CommerceError::PublicationNotFound(id.to_string()))?;
            lines.push(OrderLine {
                id: OrderLineId::generate(),
                publication_id: publication.id.clone(),
                publication_name: publication.name.clone(),
                unit_price: publication.price,
            });
        }

        let currency = lines
            .first()
            .map(|l| l.unit_price.currency)
            .unwrap_or_default();
        let subtotal = Money::try_sum(lines.iter().map(|l| &l.unit_price), currency)
            .ok_or(CommerceError::Overflow)?;

        let now = current_timestamp();
        Ok(Self {
            id: OrderId::generate(),
            order_number: Self::generate_order_number(),
            session_id: cart.session_id.clone(),
            user_id: None,
            email: email.into(),
            status: OrderStatus::Pending,
            lines,
            service_ids: cart.services().to_vec(),
            subtotal,
            grand_total: subtotal,
            currency,
            created_at: now,
            updated_at: now,
        })
    }

    /// Generate a new order number.
    pub fn generate_order_number() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        format!("PW-{}", ts)
    }

    /// Attach the buyer once they sign in.
    pub fn set_user(&mut self, user_id: UserId) {
        self.user_id = Some(user_id);
        self.updated_at = current_timestamp();
    }

    /// Advance the order status.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = current_timestamp();
    }

    /// Number of placements booked.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
