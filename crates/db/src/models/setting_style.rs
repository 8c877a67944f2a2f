//! Setting style model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atelier_core::catalog;
use atelier_core::types::{DbId, Timestamp};

/// A row from the `setting_styles` table. `per_shape_images` is a JSONB
/// object mapping a diamond shape's internal name to an image URL.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SettingStyle {
    pub id: DbId,
    pub internal_name: String,
    pub display_name: String,
    pub image_url: Option<String>,
    pub per_shape_images: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SettingStyle {
    pub fn into_catalog(self) -> catalog::SettingStyle {
        let per_shape_images: BTreeMap<String, String> =
            serde_json::from_value(self.per_shape_images).unwrap_or_default();
        catalog::SettingStyle {
            id: self.id,
            internal_name: self.internal_name,
            display_name: self.display_name,
            image_url: self.image_url,
            per_shape_images,
        }
    }
}

/// DTO for creating a new setting style. An absent `internal_name` is
/// slugified from the display name.
#[derive(Debug, Deserialize)]
pub struct CreateSettingStyle {
    pub internal_name: Option<String>,
    pub display_name: String,
    pub image_url: Option<String>,
    pub per_shape_images: Option<serde_json::Value>,
}

/// DTO for updating a setting style. `per_shape_images` replaces the
/// whole map when present.
#[derive(Debug, Deserialize)]
pub struct UpdateSettingStyle {
    pub internal_name: Option<String>,
    pub display_name: Option<String>,
    pub image_url: Option<String>,
    pub per_shape_images: Option<serde_json::Value>,
}
