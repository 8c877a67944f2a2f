//! Metal color model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atelier_core::catalog;
use atelier_core::types::{DbId, Timestamp};

/// A row from the `metal_colors` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MetalColor {
    pub id: DbId,
    pub internal_name: String,
    pub display_name: String,
    pub hex_color: String,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl MetalColor {
    pub fn into_catalog(self) -> catalog::MetalColor {
        catalog::MetalColor {
            id: self.id,
            internal_name: self.internal_name,
            display_name: self.display_name,
            hex_color: self.hex_color,
            active: self.active,
        }
    }
}

/// DTO for creating a new metal color. An absent `internal_name` is
/// slugified from the display name.
#[derive(Debug, Deserialize)]
pub struct CreateMetalColor {
    pub internal_name: Option<String>,
    pub display_name: String,
    pub hex_color: String,
    pub active: Option<bool>,
}

/// DTO for updating a metal color.
#[derive(Debug, Deserialize)]
pub struct UpdateMetalColor {
    pub internal_name: Option<String>,
    pub display_name: Option<String>,
    pub hex_color: Option<String>,
    pub active: Option<bool>,
}
