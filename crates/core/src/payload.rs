//! Configuration payload builder.
//!
//! Derives the fully resolved rendering payload the 3D viewer consumes
//! from a selection plus the catalog snapshot it was validated against.
//! The serialized field names and nesting are a wire contract shared with
//! the viewer; renames here are deliberate and must not drift.

use serde::Serialize;
use ts_rs::TS;

use crate::catalog::{CatalogSnapshot, HeadVariant};
use crate::error::CoreError;
use crate::metal;
use crate::selection::Selection;
use crate::types::DbId;

/// Renderable head model, absent only in the admitted shank-orphan state.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HeadPayload {
    pub file: String,
    pub scale: f64,
    pub pos_z: f64,
}

/// Renderable shank model with its optional matching-band files. Both
/// file slots are always carried; `matching_band_count` on the parent
/// payload says how many the viewer should show.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ShankPayload {
    pub file: String,
    pub matching_band_file1: Option<String>,
    pub matching_band_file2: Option<String>,
    pub scale: f64,
    pub pos_z: f64,
}

/// Material coloring. Two-tone always assigns white to the head and the
/// chosen color to the shank, never the reverse.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum MetalPayload {
    Single {
        hex: String,
    },
    TwoTone {
        #[serde(rename = "headHex")]
        head_hex: String,
        #[serde(rename = "shankHex")]
        shank_hex: String,
    },
}

/// Id + label echo for display and logging; carries no geometry.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct OptionEcho {
    pub id: DbId,
    pub label: String,
}

/// The complete payload pushed to the viewer on every selection change.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ResolvedConfiguration {
    pub head: Option<HeadPayload>,
    pub shank: ShankPayload,
    pub metal: MetalPayload,
    pub diamond_shape: OptionEcho,
    pub setting_style: OptionEcho,
    pub carat_weight: OptionEcho,
    pub matching_band_count: u8,
}

/// Build the payload for a selection.
///
/// Pure and total for a selection whose component ids resolve in the
/// snapshot; a missing lookup is a stale-reference error the caller
/// avoids by sanitizing the selection first. `matched_head` of `None`
/// produces a payload with no head model rather than an error.
pub fn build(
    selection: &Selection,
    matched_head: Option<&HeadVariant>,
    catalog: &CatalogSnapshot,
) -> Result<ResolvedConfiguration, CoreError> {
    let shank = catalog.shank(selection.shank_id).ok_or(CoreError::NotFound {
        entity: "shank_variant",
        id: selection.shank_id,
    })?;
    let color = catalog
        .metal_color(selection.metal_color_id)
        .ok_or(CoreError::NotFound {
            entity: "metal_color",
            id: selection.metal_color_id,
        })?;
    let shape = catalog
        .diamond_shape(selection.diamond_shape_id)
        .ok_or(CoreError::NotFound {
            entity: "diamond_shape",
            id: selection.diamond_shape_id,
        })?;
    let style = catalog
        .setting_style(selection.setting_style_id)
        .ok_or(CoreError::NotFound {
            entity: "setting_style",
            id: selection.setting_style_id,
        })?;
    let carat = catalog
        .carat_weight(selection.carat_weight_id)
        .ok_or(CoreError::NotFound {
            entity: "carat_weight",
            id: selection.carat_weight_id,
        })?;

    let metal = if selection.is_two_tone {
        MetalPayload::TwoTone {
            head_hex: metal::white_gold_hex(&catalog.metal_colors).to_string(),
            shank_hex: color.hex_color.clone(),
        }
    } else {
        MetalPayload::Single {
            hex: color.hex_color.clone(),
        }
    };

    Ok(ResolvedConfiguration {
        head: matched_head.map(|head| HeadPayload {
            file: head.model_file.clone(),
            scale: head.scale,
            pos_z: head.pos_z,
        }),
        shank: ShankPayload {
            file: shank.model_file.clone(),
            matching_band_file1: shank.matching_band_file1.clone(),
            matching_band_file2: shank.matching_band_file2.clone(),
            scale: shank.scale,
            pos_z: shank.pos_z,
        },
        metal,
        diamond_shape: OptionEcho {
            id: shape.id,
            label: shape.display_name.clone(),
        },
        setting_style: OptionEcho {
            id: style.id,
            label: style.display_name.clone(),
        },
        carat_weight: OptionEcho {
            id: carat.id,
            label: carat.display_name.clone(),
        },
        matching_band_count: selection
            .matching_band_count
            .min(shank.available_band_count()),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
