//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Row structs convert into the pure catalog types via `into_catalog`.

pub mod carat_weight;
pub mod diamond_shape;
pub mod head_variant;
pub mod metal_color;
pub mod pricing;
pub mod setting_style;
pub mod shank_category;
pub mod shank_variant;
