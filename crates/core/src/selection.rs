//! Selection state machine.
//!
//! Owns the customer's in-progress selection and keeps it consistent as
//! one attribute changes at a time. Every transition is synchronous and
//! total: unknown or stale ids simply no-op, and when a change invalidates
//! the current setting style a repair step adopts a style from the nearest
//! matching head variant. The one admitted inconsistency is the repair
//! path's shank handling: the shank field stays put even when the adopted
//! head does not support it, so a selection can temporarily reference a
//! (shank, style) pair no head covers.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::CatalogSnapshot;
use crate::combination::{self, CombinationQuery};
use crate::error::CoreError;
use crate::metal;
use crate::payload::{self, ResolvedConfiguration};
use crate::pricing::{self, PriceQuote};
use crate::types::DbId;

/// Upper bound on renderable matching bands, independent of shank files.
pub const MAX_MATCHING_BANDS: u8 = 2;

/// The customer's current choices. Never persisted server-side; clients
/// hold it between requests and send it back with each transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Selection {
    pub shank_id: DbId,
    pub metal_color_id: DbId,
    pub diamond_shape_id: DbId,
    pub setting_style_id: DbId,
    pub carat_weight_id: DbId,
    pub matching_band_count: u8,
    pub is_two_tone: bool,
}

/// One user-driven transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum TransitionAction {
    SelectShank { id: DbId },
    SelectDiamondShape { id: DbId },
    SelectCaratWeight { id: DbId },
    SelectSettingStyle { id: DbId },
    SelectMetalColor { id: DbId },
    SetTwoTone { enabled: bool },
    SetMatchingBandCount { count: u8 },
}

/// Per-option `exists` affordances for the UI: an unavailable option is
/// grayed out, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct OptionAvailability {
    pub id: DbId,
    pub available: bool,
}

/// Availability of every selectable option given the rest of the current
/// selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct AvailabilityView {
    pub shanks: Vec<OptionAvailability>,
    pub diamond_shapes: Vec<OptionAvailability>,
    pub setting_styles: Vec<OptionAvailability>,
    pub carat_weights: Vec<OptionAvailability>,
    pub two_tone_allowed: bool,
    pub max_matching_bands: u8,
}

/// Everything the customizer UI needs after any configurator operation:
/// the (possibly repaired) selection, option affordances, the rendering
/// payload, and the price breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ConfiguratorView {
    pub selection: Selection,
    pub availability: AvailabilityView,
    pub payload: ResolvedConfiguration,
    pub price: PriceQuote,
}

/// The state machine: a selection bound to the immutable catalog snapshot
/// it was validated against.
#[derive(Debug, Clone)]
pub struct Configurator<'a> {
    catalog: &'a CatalogSnapshot,
    selection: Selection,
}

impl<'a> Configurator<'a> {
    /// Build the initial selection for a fresh session.
    ///
    /// Starts from the default shank, picks the default head variant when
    /// it supports that shank (else the first head that does, else the
    /// first head overall, adopting its first shank so the initial state
    /// always names a valid combination), copies shape/style/carat from
    /// that head, and prefers a white metal color.
    ///
    /// Fails only when the catalog cannot seat a session at all: no head
    /// variants, no shank variants, or no active metal colors.
    pub fn start(catalog: &'a CatalogSnapshot) -> Result<Self, CoreError> {
        let Some(default_shank) = catalog.default_shank() else {
            return Err(CoreError::Conflict("catalog has no shank variants".into()));
        };
        let Some(color) = catalog.default_metal_color() else {
            return Err(CoreError::Conflict("catalog has no active metal colors".into()));
        };

        let heads = &catalog.head_variants;
        let mut shank_id = default_shank.id;
        let head = heads
            .iter()
            .find(|h| h.is_default && h.supports_shank(shank_id))
            .or_else(|| heads.iter().find(|h| h.supports_shank(shank_id)))
            .or_else(|| heads.first());
        let Some(head) = head else {
            return Err(CoreError::Conflict("catalog has no head variants".into()));
        };

        // Fallback head: no head supports the default shank, so adopt the
        // head's own first shank instead of starting on an invalid pair.
        if !head.supports_shank(shank_id) {
            if let Some(primary) = head.primary_shank() {
                shank_id = primary;
            }
        }

        Ok(Self {
            catalog,
            selection: Selection {
                shank_id,
                metal_color_id: color.id,
                diamond_shape_id: head.diamond_shape_id,
                setting_style_id: head.setting_style_id,
                carat_weight_id: head.carat_weight_id,
                matching_band_count: 0,
                is_two_tone: false,
            },
        })
    }

    /// Rebind a client-held selection to a fresh snapshot.
    ///
    /// Ids that no longer exist (deleted mid-session) fall back to the
    /// corresponding [`start`](Self::start) default, then the usual repair,
    /// band clamp, and two-tone checks run. Never fails for a catalog that
    /// can seat a session.
    pub fn resume(catalog: &'a CatalogSnapshot, requested: Selection) -> Result<Self, CoreError> {
        let defaults = Self::start(catalog)?.selection;

        let mut selection = requested;
        if catalog.shank(selection.shank_id).is_none() {
            selection.shank_id = defaults.shank_id;
        }
        if catalog.metal_color(selection.metal_color_id).is_none() {
            selection.metal_color_id = defaults.metal_color_id;
        }
        if catalog.diamond_shape(selection.diamond_shape_id).is_none() {
            selection.diamond_shape_id = defaults.diamond_shape_id;
        }
        if catalog.setting_style(selection.setting_style_id).is_none() {
            selection.setting_style_id = defaults.setting_style_id;
        }
        if catalog.carat_weight(selection.carat_weight_id).is_none() {
            selection.carat_weight_id = defaults.carat_weight_id;
        }

        let mut configurator = Self { catalog, selection };
        configurator.repair_setting_style();
        configurator.clamp_matching_bands();
        configurator.enforce_two_tone_eligibility();
        Ok(configurator)
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The head variant exactly matching the current four-field tuple, if
    /// any. `None` only in the admitted shank-orphan state.
    pub fn matched_head(&self) -> Option<&'a crate::catalog::HeadVariant> {
        combination::find_exact(
            &self.catalog.head_variants,
            self.selection.shank_id,
            self.selection.diamond_shape_id,
            self.selection.setting_style_id,
            self.selection.carat_weight_id,
        )
    }

    /// Apply one transition. Returns whether the selection changed.
    pub fn apply(&mut self, action: TransitionAction) -> bool {
        let before = self.selection;
        match action {
            TransitionAction::SelectShank { id } => self.select_shank(id),
            TransitionAction::SelectDiamondShape { id } => self.select_diamond_shape(id),
            TransitionAction::SelectCaratWeight { id } => self.select_carat_weight(id),
            TransitionAction::SelectSettingStyle { id } => self.select_setting_style(id),
            TransitionAction::SelectMetalColor { id } => self.select_metal_color(id),
            TransitionAction::SetTwoTone { enabled } => self.set_two_tone(enabled),
            TransitionAction::SetMatchingBandCount { count } => self.set_matching_band_count(count),
        }
        self.selection != before
    }

    /// Change the shank. The setting style repairs afterwards and the
    /// band count re-clamps to what the new shank supports.
    pub fn select_shank(&mut self, id: DbId) {
        if self.catalog.shank(id).is_none() {
            return;
        }
        self.selection.shank_id = id;
        self.repair_setting_style();
        self.clamp_matching_bands();
    }

    /// Change the diamond shape, repairing the setting style if the new
    /// shape invalidates it.
    pub fn select_diamond_shape(&mut self, id: DbId) {
        if self.catalog.diamond_shape(id).is_none() {
            return;
        }
        self.selection.diamond_shape_id = id;
        self.repair_setting_style();
    }

    /// Change the carat weight, repairing the setting style if needed.
    pub fn select_carat_weight(&mut self, id: DbId) {
        if self.catalog.carat_weight(id).is_none() {
            return;
        }
        self.selection.carat_weight_id = id;
        self.repair_setting_style();
    }

    /// Change the setting style.
    ///
    /// Distinct from the repair path: the new style must be backed by a
    /// head matching (current shape, new style, current carat) for ANY
    /// shank, and the selection jumps to that head's first shank, because
    /// styles are not available for every shank. No match: no-op.
    pub fn select_setting_style(&mut self, id: DbId) {
        if self.catalog.setting_style(id).is_none() {
            return;
        }
        let query = CombinationQuery {
            shank_id: None,
            diamond_shape_id: Some(self.selection.diamond_shape_id),
            setting_style_id: Some(id),
            carat_weight_id: Some(self.selection.carat_weight_id),
        };
        let Some(head) = combination::find_first(&self.catalog.head_variants, &query) else {
            return;
        };
        self.selection.setting_style_id = id;
        if let Some(primary) = head.primary_shank() {
            self.selection.shank_id = primary;
        }
        self.clamp_matching_bands();
    }

    /// Change the metal color, dropping two-tone if the new color is not
    /// eligible for it.
    pub fn select_metal_color(&mut self, id: DbId) {
        if self.catalog.metal_color(id).is_none() {
            return;
        }
        self.selection.metal_color_id = id;
        self.enforce_two_tone_eligibility();
    }

    /// Toggle two-tone. Turning it on requires an eligible color; turning
    /// it off is always allowed.
    pub fn set_two_tone(&mut self, enabled: bool) {
        if enabled && !self.two_tone_allowed() {
            return;
        }
        self.selection.is_two_tone = enabled;
    }

    /// Set the matching-band count, clamped to what the current shank
    /// supports.
    pub fn set_matching_band_count(&mut self, count: u8) {
        self.selection.matching_band_count = count.min(self.max_matching_bands());
    }

    /// Whether the current color may be rendered two-tone.
    pub fn two_tone_allowed(&self) -> bool {
        self.catalog
            .metal_color(self.selection.metal_color_id)
            .is_some_and(metal::eligible_for_two_tone)
    }

    /// Band slots the current shank supports (0..=2).
    pub fn max_matching_bands(&self) -> u8 {
        self.catalog
            .shank(self.selection.shank_id)
            .map(|s| s.available_band_count())
            .unwrap_or(0)
            .min(MAX_MATCHING_BANDS)
    }

    /// Per-option availability for the UI, computed by substituting each
    /// candidate into the current tuple. Setting styles deliberately leave
    /// the shank unconstrained: picking one moves the shank anyway.
    pub fn availability(&self) -> AvailabilityView {
        let heads = &self.catalog.head_variants;
        let s = &self.selection;

        let shanks = self
            .catalog
            .shank_variants
            .iter()
            .map(|shank| OptionAvailability {
                id: shank.id,
                available: combination::exists(
                    heads,
                    &CombinationQuery::exact(
                        shank.id,
                        s.diamond_shape_id,
                        s.setting_style_id,
                        s.carat_weight_id,
                    ),
                ),
            })
            .collect();

        let diamond_shapes = self
            .catalog
            .diamond_shapes
            .iter()
            .map(|shape| OptionAvailability {
                id: shape.id,
                available: combination::exists(
                    heads,
                    &CombinationQuery::exact(
                        s.shank_id,
                        shape.id,
                        s.setting_style_id,
                        s.carat_weight_id,
                    ),
                ),
            })
            .collect();

        let setting_styles = self
            .catalog
            .setting_styles
            .iter()
            .map(|style| OptionAvailability {
                id: style.id,
                available: combination::exists(
                    heads,
                    &CombinationQuery {
                        shank_id: None,
                        diamond_shape_id: Some(s.diamond_shape_id),
                        setting_style_id: Some(style.id),
                        carat_weight_id: Some(s.carat_weight_id),
                    },
                ),
            })
            .collect();

        let carat_weights = self
            .catalog
            .carat_weights
            .iter()
            .map(|carat| OptionAvailability {
                id: carat.id,
                available: combination::exists(
                    heads,
                    &CombinationQuery::exact(
                        s.shank_id,
                        s.diamond_shape_id,
                        s.setting_style_id,
                        carat.id,
                    ),
                ),
            })
            .collect();

        AvailabilityView {
            shanks,
            diamond_shapes,
            setting_styles,
            carat_weights,
            two_tone_allowed: self.two_tone_allowed(),
            max_matching_bands: self.max_matching_bands(),
        }
    }

    /// Restore `exists(shank, shape, style, carat)` after a field write by
    /// adopting a setting style from the nearest matching head: first a
    /// head matching (shank, shape, carat) ignoring style, then one
    /// matching (shape, carat) alone. The shank field is left unchanged
    /// even when only the relaxed search hits, which can orphan it.
    fn repair_setting_style(&mut self) {
        let s = &self.selection;
        let heads = &self.catalog.head_variants;
        let full = CombinationQuery::exact(
            s.shank_id,
            s.diamond_shape_id,
            s.setting_style_id,
            s.carat_weight_id,
        );
        if combination::exists(heads, &full) {
            return;
        }

        let same_shank = CombinationQuery {
            shank_id: Some(s.shank_id),
            diamond_shape_id: Some(s.diamond_shape_id),
            setting_style_id: None,
            carat_weight_id: Some(s.carat_weight_id),
        };
        let any_shank = CombinationQuery {
            shank_id: None,
            diamond_shape_id: Some(s.diamond_shape_id),
            setting_style_id: None,
            carat_weight_id: Some(s.carat_weight_id),
        };
        let replacement = combination::find_first(heads, &same_shank)
            .or_else(|| combination::find_first(heads, &any_shank));
        if let Some(head) = replacement {
            self.selection.setting_style_id = head.setting_style_id;
        }
    }

    /// Assemble the complete view of the current state.
    ///
    /// Total for any selection produced by [`start`](Self::start),
    /// [`resume`](Self::resume), or a transition, since those never leave
    /// stale component ids behind.
    pub fn view(&self) -> Result<ConfiguratorView, CoreError> {
        Ok(ConfiguratorView {
            selection: self.selection,
            availability: self.availability(),
            payload: payload::build(&self.selection, self.matched_head(), self.catalog)?,
            price: pricing::quote(&self.selection, &self.catalog.pricing),
        })
    }

    fn clamp_matching_bands(&mut self) {
        let max = self.max_matching_bands();
        if self.selection.matching_band_count > max {
            self.selection.matching_band_count = max;
        }
    }

    fn enforce_two_tone_eligibility(&mut self) {
        if self.selection.is_two_tone && !self.two_tone_allowed() {
            self.selection.is_two_tone = false;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
