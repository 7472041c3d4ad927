//! Visibility-filtered catalog projections.
//!
//! Guests browsing the catalog see descriptive fields only. Commercial terms
//! (pricing, scores, placement features) and content restrictions are
//! withheld entirely rather than zeroed, so a missing field can never be
//! mistaken for "price is zero" or "feature absent".

use crate::catalog::{ContentRestrictions, PlacementFeatures, Publication, Tier};
use crate::ids::PublicationId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// How much of a publication record the caller may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    /// Unauthenticated: descriptive fields only.
    Public,
    /// Authenticated: the complete record.
    Full,
}

impl Visibility {
    /// Map a caller authentication state to a projection mode.
    pub fn for_authenticated(is_authenticated: bool) -> Self {
        if is_authenticated {
            Visibility::Full
        } else {
            Visibility::Public
        }
    }
}

/// Commercial terms of a placement, present only in full projections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommercialTerms {
    /// Placement price.
    pub price: Money,
    /// Turnaround-time descriptor.
    pub turnaround: Option<String>,
    /// Domain authority score.
    pub da_score: i32,
    /// Domain rating score.
    pub dr_score: i32,
    /// What the placement includes.
    pub features: PlacementFeatures,
}

/// A publication as served to a catalog caller.
///
/// `commercial` and `restrictions` are `None` in public projections and are
/// skipped during serialization, so withheld fields are absent on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogView {
    pub id: PublicationId,
    pub name: String,
    pub genre: Option<String>,
    pub tier: Tier,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub logo_url: Option<String>,
    pub popularity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commercial: Option<CommercialTerms>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<ContentRestrictions>,
}

impl CatalogView {
    /// Project a publication record for the given visibility.
    pub fn project(publication: &Publication, visibility: Visibility) -> Self {
        let (commercial, restrictions) = match visibility {
            Visibility::Public => (None, None),
            Visibility::Full => (
                Some(CommercialTerms {
                    price: publication.price,
                    turnaround: publication.turnaround.clone(),
                    da_score: publication.da_score,
                    dr_score: publication.dr_score,
                    features: publication.features,
                }),
                Some(publication.restrictions),
            ),
        };

        Self {
            id: publication.id.clone(),
            name: publication.name.clone(),
            genre: publication.genre.clone(),
            tier: publication.tier,
            description: publication.description.clone(),
            website_url: publication.website_url.clone(),
            logo_url: publication.logo_url.clone(),
            popularity: publication.popularity,
            commercial,
            restrictions,
        }
    }

    /// True when commercial terms were withheld.
    pub fn is_public_projection(&self) -> bool {
        self.commercial.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn forbes() -> Publication {
        let mut publication = Publication::new("Forbes", Money::new(50000, Currency::USD));
        publication.da_score = 94;
        publication.dr_score = 93;
        publication.features.dofollow = true;
        publication.restrictions.crypto = true;
        publication
    }

    #[test]
    fn test_public_projection_withholds_commercial_fields() {
        let view = CatalogView::project(&forbes(), Visibility::Public);
        assert_eq!(view.name, "Forbes");
        assert!(view.commercial.is_none());
        assert!(view.restrictions.is_none());
        assert!(view.is_public_projection());
    }

    #[test]
    fn test_full_projection_carries_everything() {
        let view = CatalogView::project(&forbes(), Visibility::Full);
        let commercial = view.commercial.expect("commercial terms");
        assert_eq!(commercial.price.amount_cents, 50000);
        assert_eq!(commercial.da_score, 94);
        assert!(commercial.features.dofollow);
        assert!(view.restrictions.expect("restrictions").crypto);
    }

    #[test]
    fn test_withheld_fields_are_absent_on_the_wire() {
        let view = CatalogView::project(&forbes(), Visibility::Public);
        let json = serde_json::to_value(&view).unwrap();
        // Absent, not null and not a zero default.
        assert!(json.get("commercial").is_none());
        assert!(json.get("restrictions").is_none());
        assert_eq!(json["name"], "Forbes");
    }

    #[test]
    fn test_visibility_for_authenticated() {
        assert_eq!(Visibility::for_authenticated(true), Visibility::Full);
        assert_eq!(Visibility::for_authenticated(false), Visibility::Public);
    }
}
