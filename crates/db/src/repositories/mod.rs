//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod carat_weight_repo;
pub mod catalog_repo;
pub mod diamond_shape_repo;
pub mod head_variant_repo;
pub mod metal_color_repo;
pub mod pricing_repo;
pub mod setting_style_repo;
pub mod shank_category_repo;
pub mod shank_variant_repo;

pub use carat_weight_repo::CaratWeightRepo;
pub use catalog_repo::CatalogRepo;
pub use diamond_shape_repo::DiamondShapeRepo;
pub use head_variant_repo::HeadVariantRepo;
pub use metal_color_repo::MetalColorRepo;
pub use pricing_repo::PricingRepo;
pub use setting_style_repo::SettingStyleRepo;
pub use shank_category_repo::ShankCategoryRepo;
pub use shank_variant_repo::ShankVariantRepo;
