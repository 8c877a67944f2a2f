//! Pricing modifier resolver.
//!
//! Price is the configured base plus per-entity modifiers looked up by id,
//! clamped to the configured bounds. Absent modifier keys mean zero: new
//! catalog entities have no price impact until an operator sets one.

use std::collections::BTreeMap;

use serde::Serialize;
use ts_rs::TS;

use crate::catalog::PricingConfig;
use crate::selection::Selection;
use crate::types::DbId;

/// Key into [`PricingConfig::matching_band_modifiers`] for a shank. One
/// flat modifier per shank covers both band slots; selecting a second
/// band does not charge twice.
pub fn matching_band_key(shank_id: DbId) -> String {
    format!("{shank_id}_band")
}

/// Line-item breakdown of a computed price.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct PriceQuote {
    pub base_price: f64,
    pub shank_modifier: f64,
    pub carat_modifier: f64,
    pub matching_band_modifier: f64,
    pub metal_color_modifier: f64,
    /// Sum of the above, clamped to `[min_price, max_price]`.
    pub total: f64,
}

fn modifier(map: &BTreeMap<String, f64>, key: &str) -> f64 {
    map.get(key).copied().unwrap_or(0.0)
}

/// Compute the full quote for a selection.
pub fn quote(selection: &Selection, pricing: &PricingConfig) -> PriceQuote {
    let shank_modifier = modifier(&pricing.shank_modifiers, &selection.shank_id.to_string());
    let carat_modifier = modifier(
        &pricing.carat_modifiers,
        &selection.carat_weight_id.to_string(),
    );
    let matching_band_modifier = if selection.matching_band_count >= 1 {
        modifier(
            &pricing.matching_band_modifiers,
            &matching_band_key(selection.shank_id),
        )
    } else {
        0.0
    };
    let metal_color_modifier = modifier(
        &pricing.metal_color_modifiers,
        &selection.metal_color_id.to_string(),
    );

    let unclamped = pricing.base_price
        + shank_modifier
        + carat_modifier
        + matching_band_modifier
        + metal_color_modifier;
    let total = unclamped.min(pricing.max_price).max(pricing.min_price);

    PriceQuote {
        base_price: pricing.base_price,
        shank_modifier,
        carat_modifier,
        matching_band_modifier,
        metal_color_modifier,
        total,
    }
}

/// The clamped price alone.
pub fn price(selection: &Selection, pricing: &PricingConfig) -> f64 {
    quote(selection, pricing).total
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(shank_id: DbId, band_count: u8) -> Selection {
        Selection {
            shank_id,
            metal_color_id: 41,
            diamond_shape_id: 1,
            setting_style_id: 11,
            carat_weight_id: 21,
            matching_band_count: band_count,
            is_two_tone: false,
        }
    }

    fn pricing_with(
        shank: &[(&str, f64)],
        carat: &[(&str, f64)],
        band: &[(&str, f64)],
        color: &[(&str, f64)],
    ) -> PricingConfig {
        let to_map = |pairs: &[(&str, f64)]| {
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<BTreeMap<_, _>>()
        };
        PricingConfig {
            base_price: 2999.0,
            min_price: 1500.0,
            max_price: 4500.0,
            shank_modifiers: to_map(shank),
            carat_modifiers: to_map(carat),
            matching_band_modifiers: to_map(band),
            metal_color_modifiers: to_map(color),
        }
    }

    // -- price --

    #[test]
    fn base_plus_shank_modifier() {
        let pricing = pricing_with(&[("31", 200.0)], &[], &[], &[]);
        assert_eq!(price(&selection(31, 0), &pricing), 3199.0);
    }

    #[test]
    fn absent_keys_contribute_zero() {
        let pricing = pricing_with(&[("32", 500.0)], &[], &[], &[]);
        assert_eq!(price(&selection(31, 0), &pricing), 2999.0);
    }

    #[test]
    fn all_modifiers_sum() {
        let pricing = pricing_with(
            &[("31", 200.0)],
            &[("21", 350.0)],
            &[("31_band", 150.0)],
            &[("41", -100.0)],
        );
        let q = quote(&selection(31, 1), &pricing);
        assert_eq!(q.base_price, 2999.0);
        assert_eq!(q.shank_modifier, 200.0);
        assert_eq!(q.carat_modifier, 350.0);
        assert_eq!(q.matching_band_modifier, 150.0);
        assert_eq!(q.metal_color_modifier, -100.0);
        assert_eq!(q.total, 3599.0);
    }

    // -- matching band modifier --

    #[test]
    fn band_modifier_is_flat_across_one_or_two_bands() {
        let pricing = pricing_with(&[], &[], &[("31_band", 150.0)], &[]);
        assert_eq!(price(&selection(31, 0), &pricing), 2999.0);
        assert_eq!(price(&selection(31, 1), &pricing), 3149.0);
        assert_eq!(price(&selection(31, 2), &pricing), 3149.0);
    }

    #[test]
    fn band_modifier_is_keyed_by_shank() {
        let pricing = pricing_with(&[], &[], &[("31_band", 150.0)], &[]);
        assert_eq!(price(&selection(32, 2), &pricing), 2999.0);
    }

    // -- clamping --

    #[test]
    fn totals_clamp_to_bounds() {
        let high = pricing_with(&[("31", 99_999.0)], &[], &[], &[]);
        assert_eq!(price(&selection(31, 0), &high), 4500.0);

        let low = pricing_with(&[("31", -99_999.0)], &[], &[], &[]);
        assert_eq!(price(&selection(31, 0), &low), 1500.0);
    }

    #[test]
    fn negative_modifiers_within_bounds_apply_exactly() {
        let pricing = pricing_with(&[("31", -499.0)], &[], &[], &[]);
        assert_eq!(price(&selection(31, 0), &pricing), 2500.0);
    }
}
