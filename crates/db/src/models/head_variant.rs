//! Head variant model.
//!
//! A head variant is the combination entity: one renderable head model
//! bound to a non-empty set of shank variants plus exactly one diamond
//! shape, setting style, and carat weight. Its `internal_name` and
//! `display_name` are regenerated from the referenced entities on every
//! combination-affecting write and are never independently authored.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atelier_core::catalog;
use atelier_core::types::{DbId, Timestamp};

/// A row from the `head_variants` table, with the shank set aggregated
/// from `head_variant_shanks` in position order.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct HeadVariant {
    pub id: DbId,
    pub internal_name: String,
    pub display_name: String,
    pub model_file: String,
    pub scale: f64,
    pub pos_z: f64,
    pub is_default: bool,
    /// Canonical identity of the shank set: sorted, deduplicated ids
    /// joined with `_`. Backs the combination uniqueness constraint.
    pub shank_set_key: String,
    pub shank_ids: Vec<DbId>,
    pub diamond_shape_id: DbId,
    pub setting_style_id: DbId,
    pub carat_weight_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl HeadVariant {
    pub fn into_catalog(self) -> catalog::HeadVariant {
        catalog::HeadVariant {
            id: self.id,
            internal_name: self.internal_name,
            display_name: self.display_name,
            model_file: self.model_file,
            scale: self.scale,
            pos_z: self.pos_z,
            is_default: self.is_default,
            shank_ids: self.shank_ids,
            diamond_shape_id: self.diamond_shape_id,
            setting_style_id: self.setting_style_id,
            carat_weight_id: self.carat_weight_id,
        }
    }
}

/// DTO for creating a new head variant. Names are generated, not taken
/// from the caller.
#[derive(Debug, Deserialize)]
pub struct CreateHeadVariant {
    pub model_file: String,
    pub scale: Option<f64>,
    pub pos_z: Option<f64>,
    pub is_default: Option<bool>,
    pub shank_ids: Vec<DbId>,
    pub diamond_shape_id: DbId,
    pub setting_style_id: DbId,
    pub carat_weight_id: DbId,
}

/// DTO for updating a head variant. A present `shank_ids` replaces the
/// whole set.
#[derive(Debug, Deserialize)]
pub struct UpdateHeadVariant {
    pub model_file: Option<String>,
    pub scale: Option<f64>,
    pub pos_z: Option<f64>,
    pub is_default: Option<bool>,
    pub shank_ids: Option<Vec<DbId>>,
    pub diamond_shape_id: Option<DbId>,
    pub setting_style_id: Option<DbId>,
    pub carat_weight_id: Option<DbId>,
}
