//! The per-session selection of publications and add-on services.

use crate::ids::{PublicationId, ServiceId};
use serde::{Deserialize, Serialize};

/// The visitor's current selection.
///
/// Two disjoint insertion-ordered sets: chosen publications and chosen
/// add-on services. Membership operations are total; adding twice, removing
/// an absent id, or toggling never fails. Iteration order is insertion order
/// and stays stable for a given state, so re-renders don't churn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionCart {
    /// Session this selection belongs to.
    pub session_id: String,
    /// Selected publications, in insertion order, each at most once.
    items: Vec<PublicationId>,
    /// Selected add-on services, in insertion order, each at most once.
    services: Vec<ServiceId>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last change.
    pub updated_at: i64,
}

impl SelectionCart {
    /// Create an empty selection for a session.
    pub fn new(session_id: impl Into<String>) -> Self {
        let now = current_timestamp();
        Self {
            session_id: session_id.into(),
            items: Vec::new(),
            services: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Add a publication to the selection. No-op if already selected.
    pub fn add_item(&mut self, id: PublicationId) {
        if !self.items.contains(&id) {
            self.items.push(id);
            self.touch();
        }
    }

    /// Add an add-on service to the selection. No-op if already selected.
    pub fn add_service(&mut self, id: ServiceId) {
        if !self.services.contains(&id) {
            self.services.push(id);
            self.touch();
        }
    }

    /// Remove a publication from the selection. No-op if absent.
    pub fn remove_item(&mut self, id: &PublicationId) {
        let before = self.items.len();
        self.items.retain(|item| item != id);
        if self.items.len() < before {
            self.touch();
        }
    }

    /// Remove an add-on service from the selection. No-op if absent.
    pub fn remove_service(&mut self, id: &ServiceId) {
        let before = self.services.len();
        self.services.retain(|service| service != id);
        if self.services.len() < before {
            self.touch();
        }
    }

    /// Remove the publication if selected, add it otherwise.
    pub fn toggle_item(&mut self, id: PublicationId) {
        if self.is_item_selected(&id) {
            self.remove_item(&id);
        } else {
            self.add_item(id);
        }
    }

    /// Remove the service if selected, add it otherwise.
    pub fn toggle_service(&mut self, id: ServiceId) {
        if self.is_service_selected(&id) {
            self.remove_service(&id);
        } else {
            self.add_service(id);
        }
    }

    /// Empty both sets unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
        self.services.clear();
        self.touch();
    }

    /// Membership check for publications. No side effects.
    pub fn is_item_selected(&self, id: &PublicationId) -> bool {
        self.items.contains(id)
    }

    /// Membership check for services. No side effects.
    pub fn is_service_selected(&self, id: &ServiceId) -> bool {
        self.services.contains(id)
    }

    /// Selected publications in insertion order.
    pub fn items(&self) -> &[PublicationId] {
        &self.items
    }

    /// Selected services in insertion order.
    pub fn services(&self) -> &[ServiceId] {
        &self.services
    }

    /// Total number of selected entries across both sets.
    pub fn len(&self) -> usize {
        self.items.len() + self.services.len()
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.services.is_empty()
    }

    fn touch(&mut self) {
        self.updated_at = current_timestamp();
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

#[cfg(test)]
mod tests {
    use super::*;

    fn pub_id(s: &str) -> PublicationId {
        PublicationId::new(s)
    }

    fn svc_id(s: &str) -> ServiceId {
        ServiceId::new(s)
    }

    #[test]
    fn test_empty_cart() {
        let cart = SelectionCart::new("sess-1");
        assert!(cart.is_empty());
        assert!(cart.items().is_empty());
        assert!(cart.services().is_empty());
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut cart = SelectionCart::new("sess-1");
        cart.add_item(pub_id("pub-1"));
        cart.add_item(pub_id("pub-1"));
        assert_eq!(cart.items().len(), 1);

        cart.add_service(svc_id("svc-1"));
        cart.add_service(svc_id("svc-1"));
        assert_eq!(cart.services().len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = SelectionCart::new("sess-1");
        cart.remove_item(&pub_id("never-added"));
        cart.remove_service(&svc_id("never-added"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut cart = SelectionCart::new("sess-1");

        // Absent -> present -> absent.
        cart.toggle_item(pub_id("pub-1"));
        assert!(cart.is_item_selected(&pub_id("pub-1")));
        cart.toggle_item(pub_id("pub-1"));
        assert!(!cart.is_item_selected(&pub_id("pub-1")));

        // Present -> absent -> present.
        cart.add_service(svc_id("svc-1"));
        cart.toggle_service(svc_id("svc-1"));
        assert!(!cart.is_service_selected(&svc_id("svc-1")));
        cart.toggle_service(svc_id("svc-1"));
        assert!(cart.is_service_selected(&svc_id("svc-1")));
    }

    #[test]
    fn test_item_and_service_sets_are_disjoint() {
        let mut cart = SelectionCart::new("sess-1");
        cart.add_item(pub_id("shared-id"));
        assert!(!cart.is_service_selected(&svc_id("shared-id")));

        cart.add_service(svc_id("shared-id"));
        cart.remove_item(&pub_id("shared-id"));
        // Removing from one set never touches the other.
        assert!(cart.is_service_selected(&svc_id("shared-id")));
        assert!(!cart.is_item_selected(&pub_id("shared-id")));
    }

    #[test]
    fn test_clear_empties_both_sets() {
        let mut cart = SelectionCart::new("sess-1");
        cart.add_item(pub_id("pub-1"));
        cart.add_item(pub_id("pub-2"));
        cart.add_service(svc_id("svc-1"));
        cart.clear();
        assert!(cart.items().is_empty());
        assert!(cart.services().is_empty());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_insertion_order_is_stable() {
        let mut cart = SelectionCart::new("sess-1");
        cart.add_item(pub_id("pub-b"));
        cart.add_item(pub_id("pub-a"));
        cart.add_item(pub_id("pub-c"));
        cart.remove_item(&pub_id("pub-a"));
        assert_eq!(cart.items(), &[pub_id("pub-b"), pub_id("pub-c")]);
    }

    #[test]
    fn test_round_trip() {
        let mut cart = SelectionCart::new("sess-1");
        cart.add_item(pub_id("pub-1"));
        assert!(cart.is_item_selected(&pub_id("pub-1")));
        cart.remove_item(&pub_id("pub-1"));
        assert!(!cart.is_item_selected(&pub_id("pub-1")));
    }
}
