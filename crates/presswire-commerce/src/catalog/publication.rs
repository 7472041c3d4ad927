//! Publication record and attribute types.

use crate::ids::PublicationId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Pricing/prestige bucket assigned to a publication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Starter,
    #[default]
    Standard,
    Premium,
    Tier1,
    Tier2,
    Exclusive,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Starter => "starter",
            Tier::Standard => "standard",
            Tier::Premium => "premium",
            Tier::Tier1 => "tier1",
            Tier::Tier2 => "tier2",
            Tier::Exclusive => "exclusive",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "starter" => Some(Tier::Starter),
            "standard" => Some(Tier::Standard),
            "premium" => Some(Tier::Premium),
            "tier1" => Some(Tier::Tier1),
            "tier2" => Some(Tier::Tier2),
            "exclusive" => Some(Tier::Exclusive),
            _ => None,
        }
    }
}

/// What a placement on this outlet includes.
///
/// Flags the backing store does not carry deserialize as false.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PlacementFeatures {
    /// Article is marked as sponsored content.
    pub sponsored: bool,
    /// Article is indexed by search engines.
    pub indexed: bool,
    /// Links in the article are dofollow.
    pub dofollow: bool,
    /// Placement appears on the outlet homepage.
    pub homepage: bool,
    /// Outlet shares the article on its social accounts.
    pub social_post: bool,
    /// An image can be included.
    pub image: bool,
    /// A video can be embedded.
    pub video: bool,
    /// Article carries an author byline.
    pub byline: bool,
    /// Placement is guaranteed rather than pitched.
    pub guaranteed: bool,
}

/// Content categories an outlet will or will not accept.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ContentRestrictions {
    pub erotic: bool,
    pub health: bool,
    pub cbd: bool,
    pub crypto: bool,
    pub gambling: bool,
}

impl ContentRestrictions {
    /// True when the outlet accepts at least one restricted category.
    pub fn accepts_any(&self) -> bool {
        self.erotic || self.health || self.cbd || self.crypto || self.gambling
    }
}

/// A publication (news outlet) in the placement catalog.
///
/// Owned by the backing data store; the application holds read-only copies
/// outside of admin edit flows. Publications are never hard-deleted, only
/// deactivated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Publication {
    /// Stable external identifier, unique across the catalog.
    pub id: PublicationId,
    /// Display name (unique; spreadsheet import upserts by this).
    pub name: String,
    /// Category/genre label (e.g., "Business", "Tech").
    pub genre: Option<String>,
    /// Pricing/prestige tier.
    pub tier: Tier,
    /// Free-text description.
    pub description: Option<String>,
    /// Outlet website URL.
    pub website_url: Option<String>,
    /// Logo image URL.
    pub logo_url: Option<String>,
    /// Geographic region served.
    pub region: Option<String>,
    /// Placement price.
    pub price: Money,
    /// Turnaround-time descriptor (e.g., "1-2 weeks").
    pub turnaround: Option<String>,
    /// Domain authority score, 0-100 by convention.
    pub da_score: i32,
    /// Domain rating score, 0-100 by convention.
    pub dr_score: i32,
    /// What the placement includes.
    pub features: PlacementFeatures,
    /// Restricted content categories the outlet accepts.
    pub restrictions: ContentRestrictions,
    /// Soft-delete flag; inactive publications are hidden from the catalog.
    pub is_active: bool,
    /// Ranking score for catalog ordering.
    pub popularity: i64,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Publication {
    /// Create a new active publication with default attributes.
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        let now = current_timestamp();
        Self {
            id: PublicationId::generate(),
            name: name.into(),
            genre: None,
            tier: Tier::default(),
            description: None,
            website_url: None,
            logo_url: None,
            region: None,
            price,
            turnaround: None,
            da_score: 0,
            dr_score: 0,
            features: PlacementFeatures::default(),
            restrictions: ContentRestrictions::default(),
            is_active: true,
            popularity: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the publication is visible in the catalog.
    pub fn is_listed(&self) -> bool {
        self.is_active
    }

    /// Soft-delete this publication.
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = current_timestamp();
    }

    /// Overwrite the attributes a rate-sheet row carries, keeping identity,
    /// status, and everything the sheet does not know about.
    pub fn apply_draft(&mut self, draft: &PublicationDraft) {
        self.genre = draft.genre.clone().or(self.genre.take());
        self.region = draft.region.clone().or(self.region.take());
        self.price = draft.price;
        self.turnaround = draft.turnaround.clone().or(self.turnaround.take());
        self.da_score = draft.da_score;
        self.dr_score = draft.dr_score;
        self.features = draft.features;
        self.restrictions = draft.restrictions;
        self.updated_at = current_timestamp();
    }
}

/// Attributes an admin form or import row provides for a publication.
///
/// Drafts carry the upsert key (`name`) plus the fields a rate sheet quotes;
/// everything else keeps its stored value on update or its default on insert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PublicationDraft {
    /// Display name; the upsert key.
    pub name: String,
    pub genre: Option<String>,
    pub region: Option<String>,
    pub price: Money,
    pub turnaround: Option<String>,
    pub da_score: i32,
    pub dr_score: i32,
    pub features: PlacementFeatures,
    pub restrictions: ContentRestrictions,
}

impl PublicationDraft {
    /// Create a draft with just a name and price.
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
            ..Self::default()
        }
    }

    /// Materialize a new publication from this draft.
    pub fn into_publication(self) -> Publication {
        let mut publication = Publication::new(self.name.clone(), self.price);
        publication.apply_draft(&self);
        publication
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
