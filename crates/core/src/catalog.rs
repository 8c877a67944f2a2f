//! In-memory catalog snapshot.
//!
//! The configurator operates on an immutable snapshot of the component
//! catalog, fetched once per customer session. Catalogs are small (tens to
//! low hundreds of entities), so every lookup is a linear scan over the
//! snapshot vectors; there is no index maintenance and no caching beyond
//! the snapshot itself.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::DbId;

/// Default base price when no pricing record has been configured.
pub const DEFAULT_BASE_PRICE: f64 = 2999.0;
/// Default lower price bound.
pub const DEFAULT_MIN_PRICE: f64 = 1500.0;
/// Default upper price bound.
pub const DEFAULT_MAX_PRICE: f64 = 4500.0;

/// Shape lookup key used as the imagery fallback for setting styles.
pub const FALLBACK_SHAPE_KEY: &str = "round";

// ---------------------------------------------------------------------------
// Component entities
// ---------------------------------------------------------------------------

/// A diamond cut (round, oval, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiamondShape {
    pub id: DbId,
    pub internal_name: String,
    pub display_name: String,
    pub image_url: Option<String>,
}

/// How the diamond is mounted (prong, bezel, ...). May carry per-shape
/// imagery keyed by the diamond shape's internal name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SettingStyle {
    pub id: DbId,
    pub internal_name: String,
    pub display_name: String,
    pub image_url: Option<String>,
    pub per_shape_images: BTreeMap<String, String>,
}

impl SettingStyle {
    /// Imagery for this style when shown under a given diamond shape.
    ///
    /// Falls back to the "round" shape's image, then to the generic
    /// `image_url`.
    pub fn image_for_shape(&self, shape_internal_name: &str) -> Option<&str> {
        self.per_shape_images
            .get(shape_internal_name)
            .or_else(|| self.per_shape_images.get(FALLBACK_SHAPE_KEY))
            .map(String::as_str)
            .or(self.image_url.as_deref())
    }
}

/// A carat weight option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CaratWeight {
    pub id: DbId,
    pub internal_name: String,
    pub display_name: String,
    pub value: f64,
}

/// Display grouping for shank variants. Shanks reference a category by
/// display name (free text), never by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShankCategory {
    pub id: DbId,
    pub internal_name: String,
    pub display_name: String,
    pub sort_order: i32,
    pub active: bool,
}

/// The band portion of the ring, independently selectable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
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
}

impl ShankVariant {
    /// Number of matching bands this shank can render (0..=2): one per
    /// non-empty band model file.
    pub fn available_band_count(&self) -> u8 {
        let mut count = 0;
        if non_empty(&self.matching_band_file1) {
            count += 1;
        }
        if non_empty(&self.matching_band_file2) {
            count += 1;
        }
        count
    }
}

fn non_empty(file: &Option<String>) -> bool {
    file.as_deref().is_some_and(|f| !f.is_empty())
}

/// A purchasable combination: (shank set, shape, style, carat) with its
/// own renderable head model. `shank_ids` preserves the order the
/// operator supplied; the first entry is the shank adopted when a
/// setting-style change pulls the selection onto this head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HeadVariant {
    pub id: DbId,
    pub internal_name: String,
    pub display_name: String,
    pub model_file: String,
    pub scale: f64,
    pub pos_z: f64,
    pub is_default: bool,
    pub shank_ids: Vec<DbId>,
    pub diamond_shape_id: DbId,
    pub setting_style_id: DbId,
    pub carat_weight_id: DbId,
}

impl HeadVariant {
    pub fn supports_shank(&self, shank_id: DbId) -> bool {
        self.shank_ids.contains(&shank_id)
    }

    pub fn primary_shank(&self) -> Option<DbId> {
        self.shank_ids.first().copied()
    }
}

/// A selectable metal color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetalColor {
    pub id: DbId,
    pub internal_name: String,
    pub display_name: String,
    pub hex_color: String,
    pub active: bool,
}

/// The singleton pricing record: base price, clamp bounds, and per-entity
/// modifier maps keyed by entity-id strings (matching-band entries use
/// `"{shank_id}_band"`). A missing key means modifier 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PricingConfig {
    pub base_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub shank_modifiers: BTreeMap<String, f64>,
    pub carat_modifiers: BTreeMap<String, f64>,
    pub matching_band_modifiers: BTreeMap<String, f64>,
    pub metal_color_modifiers: BTreeMap<String, f64>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_price: DEFAULT_BASE_PRICE,
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
            shank_modifiers: BTreeMap::new(),
            carat_modifiers: BTreeMap::new(),
            matching_band_modifiers: BTreeMap::new(),
            metal_color_modifiers: BTreeMap::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Everything the configurator needs for one session, in creation order
/// (carat weights by ascending value).
///
/// `metal_colors` and `shank_categories` contain active entries only; the
/// loader filters inactive ones before the snapshot is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogSnapshot {
    pub head_variants: Vec<HeadVariant>,
    pub shank_variants: Vec<ShankVariant>,
    pub diamond_shapes: Vec<DiamondShape>,
    pub setting_styles: Vec<SettingStyle>,
    pub carat_weights: Vec<CaratWeight>,
    pub shank_categories: Vec<ShankCategory>,
    pub metal_colors: Vec<MetalColor>,
    pub pricing: PricingConfig,
}

impl CatalogSnapshot {
    pub fn shank(&self, id: DbId) -> Option<&ShankVariant> {
        self.shank_variants.iter().find(|s| s.id == id)
    }

    pub fn diamond_shape(&self, id: DbId) -> Option<&DiamondShape> {
        self.diamond_shapes.iter().find(|s| s.id == id)
    }

    pub fn setting_style(&self, id: DbId) -> Option<&SettingStyle> {
        self.setting_styles.iter().find(|s| s.id == id)
    }

    pub fn carat_weight(&self, id: DbId) -> Option<&CaratWeight> {
        self.carat_weights.iter().find(|c| c.id == id)
    }

    pub fn metal_color(&self, id: DbId) -> Option<&MetalColor> {
        self.metal_colors.iter().find(|c| c.id == id)
    }

    /// The shank a fresh session starts from: the first flagged default,
    /// else the first by creation order.
    pub fn default_shank(&self) -> Option<&ShankVariant> {
        self.shank_variants
            .iter()
            .find(|s| s.is_default)
            .or_else(|| self.shank_variants.first())
    }

    /// The metal color a fresh session starts from: the first color whose
    /// display name mentions "white", else the first color.
    pub fn default_metal_color(&self) -> Option<&MetalColor> {
        self.metal_colors
            .iter()
            .find(|c| c.display_name.to_lowercase().contains("white"))
            .or_else(|| self.metal_colors.first())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn style_with(images: &[(&str, &str)], image_url: Option<&str>) -> SettingStyle {
        SettingStyle {
            id: 1,
            internal_name: "prong".into(),
            display_name: "Prong".into(),
            image_url: image_url.map(String::from),
            per_shape_images: images
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    fn shank_with_bands(file1: Option<&str>, file2: Option<&str>) -> ShankVariant {
        ShankVariant {
            id: 1,
            internal_name: "shank".into(),
            display_name: "Shank".into(),
            model_file: "./shank.glb".into(),
            matching_band_file1: file1.map(String::from),
            matching_band_file2: file2.map(String::from),
            image_url: None,
            category_name: "Most Popular".into(),
            scale: 0.14,
            pos_z: 0.0,
            is_default: false,
        }
    }

    // -- image_for_shape --

    #[test]
    fn image_for_shape_prefers_exact_shape_key() {
        let style = style_with(&[("oval", "oval.png"), ("round", "round.png")], Some("g.png"));
        assert_eq!(style.image_for_shape("oval"), Some("oval.png"));
    }

    #[test]
    fn image_for_shape_falls_back_to_round_then_generic() {
        let style = style_with(&[("round", "round.png")], Some("g.png"));
        assert_eq!(style.image_for_shape("pear"), Some("round.png"));

        let style = style_with(&[], Some("g.png"));
        assert_eq!(style.image_for_shape("pear"), Some("g.png"));

        let style = style_with(&[], None);
        assert_eq!(style.image_for_shape("pear"), None);
    }

    // -- available_band_count --

    #[test]
    fn band_count_counts_non_empty_files_only() {
        assert_eq!(shank_with_bands(None, None).available_band_count(), 0);
        assert_eq!(shank_with_bands(Some("b1.glb"), None).available_band_count(), 1);
        assert_eq!(
            shank_with_bands(Some("b1.glb"), Some("b2.glb")).available_band_count(),
            2
        );
        // An empty string is not a usable band file.
        assert_eq!(shank_with_bands(Some(""), Some("b2.glb")).available_band_count(), 1);
    }

    // -- default_metal_color --

    #[test]
    fn default_metal_color_prefers_white_by_display_name() {
        let colors = vec![
            MetalColor {
                id: 1,
                internal_name: "yellow_gold".into(),
                display_name: "Yellow Gold".into(),
                hex_color: "#e5b377".into(),
                active: true,
            },
            MetalColor {
                id: 2,
                internal_name: "white_gold".into(),
                display_name: "White Gold".into(),
                hex_color: "#c2c2c3".into(),
                active: true,
            },
        ];
        let snapshot = CatalogSnapshot {
            head_variants: vec![],
            shank_variants: vec![],
            diamond_shapes: vec![],
            setting_styles: vec![],
            carat_weights: vec![],
            shank_categories: vec![],
            metal_colors: colors,
            pricing: PricingConfig::default(),
        };
        assert_eq!(snapshot.default_metal_color().map(|c| c.id), Some(2));
    }
}
