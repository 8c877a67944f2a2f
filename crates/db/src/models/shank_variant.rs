//! Shank variant model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atelier_core::catalog;
use atelier_core::types::{DbId, Timestamp};

/// A row from the `shank_variants` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ShankVariant {
    pub id: DbId,
    pub internal_name: String,
    pub display_name: String,
    pub model_file: String,
    pub matching_band_file1: Option<String>,
    pub matching_band_file2: Option<String>,
    pub image_url: Option<String>,
    pub category_name: String,
    pub scale: f64,
    pub pos_z: f64,
    pub is_default: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ShankVariant {
    pub fn into_catalog(self) -> catalog::ShankVariant {
        catalog::ShankVariant {
            id: self.id,
            internal_name: self.internal_name,
            display_name: self.display_name,
            model_file: self.model_file,
            matching_band_file1: self.matching_band_file1,
            matching_band_file2: self.matching_band_file2,
            image_url: self.image_url,
            category_name: self.category_name,
            scale: self.scale,
            pos_z: self.pos_z,
            is_default: self.is_default,
        }
    }
}

/// DTO for creating a new shank variant. An absent `internal_name` is
/// slugified from the display name.
#[derive(Debug, Deserialize)]
pub struct CreateShankVariant {
    pub internal_name: Option<String>,
    pub display_name: String,
    pub model_file: String,
    pub matching_band_file1: Option<String>,
    pub matching_band_file2: Option<String>,
    pub image_url: Option<String>,
    pub category_name: Option<String>,
    pub scale: Option<f64>,
    pub pos_z: Option<f64>,
    pub is_default: Option<bool>,
}

/// DTO for updating a shank variant.
#[derive(Debug, Deserialize)]
pub struct UpdateShankVariant {
    pub internal_name: Option<String>,
    pub display_name: Option<String>,
    pub model_file: Option<String>,
    pub matching_band_file1: Option<String>,
    pub matching_band_file2: Option<String>,
    pub image_url: Option<String>,
    pub category_name: Option<String>,
    pub scale: Option<f64>,
    pub pos_z: Option<f64>,
    pub is_default: Option<bool>,
}
