//! Diamond shape model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atelier_core::catalog;
use atelier_core::types::{DbId, Timestamp};

/// A row from the `diamond_shapes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DiamondShape {
    pub id: DbId,
    pub internal_name: String,
    pub display_name: String,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DiamondShape {
    pub fn into_catalog(self) -> catalog::DiamondShape {
        catalog::DiamondShape {
            id: self.id,
            internal_name: self.internal_name,
            display_name: self.display_name,
            image_url: self.image_url,
        }
    }
}

/// DTO for creating a new diamond shape. An absent `internal_name` is
/// slugified from the display name.
#[derive(Debug, Deserialize)]
pub struct CreateDiamondShape {
    pub internal_name: Option<String>,
    pub display_name: String,
    pub image_url: Option<String>,
}

/// DTO for updating a diamond shape.
#[derive(Debug, Deserialize)]
pub struct UpdateDiamondShape {
    pub internal_name: Option<String>,
    pub display_name: Option<String>,
    pub image_url: Option<String>,
}
