pub mod editor;
pub mod images;
pub mod matrix;

pub use editor::VariantEditor;
pub use images::{image_for, preset_values, presets};
pub use matrix::{build_variant_rows, default_sku, IdSequence};
