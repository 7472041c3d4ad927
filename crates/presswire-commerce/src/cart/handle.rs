//! Fail-open cart handle.
//!
//! UI code holds a [`CartHandle`] rather than the cart itself. When no
//! session scope is active the handle is detached: every mutation is a
//! harmless no-op and every query returns empty/false, so a stray call site
//! can never crash the view.

use crate::cart::SelectionCart;
use crate::ids::{PublicationId, ServiceId};
use serde::{Deserialize, Serialize};

/// A handle to the session's selection cart, or a detached null object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CartHandle {
    /// A live cart for an active session.
    Active(SelectionCart),
    /// No session scope; all operations degrade to no-ops.
    Detached,
}

impl CartHandle {
    /// Open a cart for an active session.
    pub fn open(session_id: impl Into<String>) -> Self {
        CartHandle::Active(SelectionCart::new(session_id))
    }

    /// A handle outside any session scope.
    pub fn detached() -> Self {
        CartHandle::Detached
    }

    /// Close the handle, returning the cart if one was active.
    ///
    /// The handle reverts to detached; later calls remain harmless.
    pub fn close(&mut self) -> Option<SelectionCart> {
        match std::mem::replace(self, CartHandle::Detached) {
            CartHandle::Active(cart) => Some(cart),
            CartHandle::Detached => None,
        }
    }

    /// True when a session cart is attached.
    pub fn is_active(&self) -> bool {
        matches!(self, CartHandle::Active(_))
    }

    pub fn add_item(&mut self, id: PublicationId) {
        if let CartHandle::Active(cart) = self {
            cart.add_item(id);
        }
    }

    pub fn add_service(&mut self, id: ServiceId) {
        if let CartHandle::Active(cart) = self {
            cart.add_service(id);
        }
    }

    pub fn remove_item(&mut self, id: &PublicationId) {
        if let CartHandle::Active(cart) = self {
            cart.remove_item(id);
        }
    }

    pub fn remove_service(&mut self, id: &ServiceId) {
        if let CartHandle::Active(cart) = self {
            cart.remove_service(id);
        }
    }

    pub fn toggle_item(&mut self, id: PublicationId) {
        if let CartHandle::Active(cart) = self {
            cart.toggle_item(id);
        }
    }

    pub fn toggle_service(&mut self, id: ServiceId) {
        if let CartHandle::Active(cart) = self {
            cart.toggle_service(id);
        }
    }

    pub fn clear(&mut self) {
        if let CartHandle::Active(cart) = self {
            cart.clear();
        }
    }

    pub fn is_item_selected(&self, id: &PublicationId) -> bool {
        match self {
            CartHandle::Active(cart) => cart.is_item_selected(id),
            CartHandle::Detached => false,
        }
    }

    pub fn is_service_selected(&self, id: &ServiceId) -> bool {
        match self {
            CartHandle::Active(cart) => cart.is_service_selected(id),
            CartHandle::Detached => false,
        }
    }

    pub fn items(&self) -> &[PublicationId] {
        match self {
            CartHandle::Active(cart) => cart.items(),
            CartHandle::Detached => &[],
        }
    }

    pub fn services(&self) -> &[ServiceId] {
        match self {
            CartHandle::Active(cart) => cart.services(),
            CartHandle::Detached => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CartHandle::Active(cart) => cart.is_empty(),
            CartHandle::Detached => true,
        }
    }
}

impl Default for CartHandle {
    fn default() -> Self {
        CartHandle::Detached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_handle_never_panics() {
        let mut handle = CartHandle::detached();
        handle.add_item(PublicationId::new("pub-1"));
        handle.toggle_service(ServiceId::new("svc-1"));
        handle.remove_item(&PublicationId::new("pub-1"));
        handle.clear();
        assert!(!handle.is_item_selected(&PublicationId::new("pub-1")));
        assert!(handle.items().is_empty());
        assert!(handle.is_empty());
        assert!(handle.close().is_none());
    }

    #[test]
    fn test_active_handle_delegates() {
        let mut handle = CartHandle::open("sess-1");
        handle.add_item(PublicationId::new("pub-1"));
        handle.add_service(ServiceId::new("svc-1"));
        assert!(handle.is_item_selected(&PublicationId::new("pub-1")));
        assert_eq!(handle.items().len(), 1);
        assert_eq!(handle.services().len(), 1);
    }

    #[test]
    fn test_close_returns_cart_and_detaches() {
        let mut handle = CartHandle::open("sess-1");
        handle.add_item(PublicationId::new("pub-1"));

        let cart = handle.close().expect("cart");
        assert_eq!(cart.session_id, "sess-1");
        assert_eq!(cart.items().len(), 1);

        // Detached afterwards; operations keep degrading quietly.
        assert!(!handle.is_active());
        handle.add_item(PublicationId::new("pub-2"));
        assert!(handle.is_empty());
    }
}
