pub mod carat_weight;
pub mod catalog;
pub mod configurator;
pub mod diamond_shape;
pub mod head_variant;
pub mod metal_color;
pub mod pricing;
pub mod setting_style;
pub mod shank_category;
pub mod shank_variant;
