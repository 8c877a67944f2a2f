//! Ring pricing model.
//!
//! A singleton row (enforced by constraint) holding the base price, the
//! clamp bounds, and four JSONB modifier maps keyed by entity-id strings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atelier_core::catalog;
use atelier_core::types::{DbId, Timestamp};

/// The row from the `ring_pricing` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RingPricing {
    pub id: DbId,
    pub base_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub shank_modifiers: serde_json::Value,
    pub carat_modifiers: serde_json::Value,
    pub matching_band_modifiers: serde_json::Value,
    pub metal_color_modifiers: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl RingPricing {
    pub fn into_catalog(self) -> catalog::PricingConfig {
        let to_map = |value: serde_json::Value| -> BTreeMap<String, f64> {
            serde_json::from_value(value).unwrap_or_default()
        };
        catalog::PricingConfig {
            base_price: self.base_price,
            min_price: self.min_price,
            max_price: self.max_price,
            shank_modifiers: to_map(self.shank_modifiers),
            carat_modifiers: to_map(self.carat_modifiers),
            matching_band_modifiers: to_map(self.matching_band_modifiers),
            metal_color_modifiers: to_map(self.metal_color_modifiers),
        }
    }
}

/// DTO for updating the pricing record. Bounds and base are merged;
/// a supplied modifier map replaces the stored one wholesale.
#[derive(Debug, Deserialize)]
pub struct UpdateRingPricing {
    pub base_price: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub shank_modifiers: Option<serde_json::Value>,
    pub carat_modifiers: Option<serde_json::Value>,
    pub matching_band_modifiers: Option<serde_json::Value>,
    pub metal_color_modifiers: Option<serde_json::Value>,
}

/// Which modifier map a modifier write targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKind {
    Shank,
    Carat,
    MatchingBand,
    MetalColor,
}

impl ModifierKind {
    /// The backing `ring_pricing` column. Used to build queries, never
    /// taken from user input as raw SQL.
    pub fn column(self) -> &'static str {
        match self {
            ModifierKind::Shank => "shank_modifiers",
            ModifierKind::Carat => "carat_modifiers",
            ModifierKind::MatchingBand => "matching_band_modifiers",
            ModifierKind::MetalColor => "metal_color_modifiers",
        }
    }
}

/// DTO for setting one modifier entry.
#[derive(Debug, Deserialize)]
pub struct SetPriceModifier {
    pub value: f64,
}
