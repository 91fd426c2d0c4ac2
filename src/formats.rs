use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One displayable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Print {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub material: String,
    pub purpose: String,
    pub notes: String,
    pub featured: bool,
    pub images: Vec<String>,
    pub image_alts: Vec<String>,
}

impl Print {
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Alt text for the image at `index`. `image_alts` may be shorter than `images`.
    pub fn alt_for(&self, index: usize) -> Option<&str> {
        self.image_alts.get(index).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogOrigin {
    /// Every record came from the configured sheet.
    Remote,
    /// No sheet is configured.
    Demo,
    /// A sheet is configured but could not be loaded.
    Fallback { reason: String },
}

impl CatalogOrigin {
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote)
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub origin: CatalogOrigin,
    pub prints: Vec<Print>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub origin: CatalogOrigin,
    pub fetched_at: DateTime<Utc>,
    pub prints: Vec<Print>,
}

impl From<Catalog> for CatalogSnapshot {
    fn from(catalog: Catalog) -> Self {
        Self {
            origin: catalog.origin,
            fetched_at: Utc::now(),
            prints: catalog.prints,
        }
    }
}
