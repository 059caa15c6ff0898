pub mod presets;
pub mod types;
