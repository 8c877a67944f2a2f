//! Shank category model.
//!
//! Categories group shanks for display only. Shank variants reference a
//! category by its display name (free text), never by id, so deleting a
//! category leaves referencing shanks untouched.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atelier_core::catalog;
use atelier_core::types::{DbId, Timestamp};

/// A row from the `shank_categories` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ShankCategory {
    pub id: DbId,
    pub internal_name: String,
    pub display_name: String,
    pub sort_order: i32,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ShankCategory {
    pub fn into_catalog(self) -> catalog::ShankCategory {
        catalog::ShankCategory {
            id: self.id,
            internal_name: self.internal_name,
            display_name: self.display_name,
            sort_order: self.sort_order,
            active: self.active,
        }
    }
}

/// DTO for creating a new shank category. An absent `internal_name` is
/// slugified from the display name.
#[derive(Debug, Deserialize)]
pub struct CreateShankCategory {
    pub internal_name: Option<String>,
    pub display_name: String,
    pub sort_order: Option<i32>,
    pub active: Option<bool>,
}

/// DTO for updating a shank category.
#[derive(Debug, Deserialize)]
pub struct UpdateShankCategory {
    pub internal_name: Option<String>,
    pub display_name: Option<String>,
    pub sort_order: Option<i32>,
    pub active: Option<bool>,
}
