//! Publication catalog module.
//!
//! Contains the publication record, tier/feature/restriction types, and the
//! visibility-filtered projections served to guests versus signed-in buyers.

mod publication;
mod visibility;

pub use publication::{
    ContentRestrictions, PlacementFeatures, Publication, PublicationDraft, Tier,
};
pub use visibility::{CatalogView, CommercialTerms, Visibility};
