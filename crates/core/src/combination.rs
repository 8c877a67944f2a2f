//! Combination resolver.
//!
//! Answers which head variants exist for a partially or fully constrained
//! (shank, shape, style, carat) tuple. Pure queries over a catalog
//! snapshot; callers re-run them whenever the snapshot changes.

use crate::catalog::HeadVariant;
use crate::types::DbId;

/// A query tuple where `None` leaves the field unconstrained.
///
/// A head matches a shank constraint when the id is a member of its shank
/// set; the other three fields compare directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombinationQuery {
    pub shank_id: Option<DbId>,
    pub diamond_shape_id: Option<DbId>,
    pub setting_style_id: Option<DbId>,
    pub carat_weight_id: Option<DbId>,
}

impl CombinationQuery {
    /// Fully constrained query over all four fields.
    pub fn exact(shank_id: DbId, diamond_shape_id: DbId, setting_style_id: DbId, carat_weight_id: DbId) -> Self {
        Self {
            shank_id: Some(shank_id),
            diamond_shape_id: Some(diamond_shape_id),
            setting_style_id: Some(setting_style_id),
            carat_weight_id: Some(carat_weight_id),
        }
    }

    pub fn matches(&self, head: &HeadVariant) -> bool {
        if let Some(shank_id) = self.shank_id {
            if !head.supports_shank(shank_id) {
                return false;
            }
        }
        if let Some(shape_id) = self.diamond_shape_id {
            if head.diamond_shape_id != shape_id {
                return false;
            }
        }
        if let Some(style_id) = self.setting_style_id {
            if head.setting_style_id != style_id {
                return false;
            }
        }
        if let Some(carat_id) = self.carat_weight_id {
            if head.carat_weight_id != carat_id {
                return false;
            }
        }
        true
    }
}

/// True iff at least one head variant matches every constrained field.
pub fn exists(heads: &[HeadVariant], query: &CombinationQuery) -> bool {
    heads.iter().any(|h| query.matches(h))
}

/// First matching head variant in catalog iteration order.
pub fn find_first<'a>(heads: &'a [HeadVariant], query: &CombinationQuery) -> Option<&'a HeadVariant> {
    heads.iter().find(|h| query.matches(h))
}

/// The head variant for a fully constrained tuple.
///
/// Multi-shank records can make more than one head match the same tuple;
/// the first in catalog iteration order wins, deterministically, and the
/// ambiguity is never surfaced.
pub fn find_exact<'a>(
    heads: &'a [HeadVariant],
    shank_id: DbId,
    diamond_shape_id: DbId,
    setting_style_id: DbId,
    carat_weight_id: DbId,
) -> Option<&'a HeadVariant> {
    find_first(
        heads,
        &CombinationQuery::exact(shank_id, diamond_shape_id, setting_style_id, carat_weight_id),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
