// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct StyleConfig {
    /// Background gray level, 0.0..1.0.
    pub background_level: f32,
    /// Alpha of the three structure colors before additive compositing.
    pub structure_alpha: f32,
}

#[derive(Debug, Deserialize)]
pub struct GridConfig {
    pub base_cell_size: f32,
    pub cell_count: u32,
    /// Variant name selected at startup; resolved through
    /// StructureVariant::from_name, so an unknown name is fatal.
    pub default_variant: String,
}

#[derive(Debug, Deserialize)]
pub struct AutomationConfig {
    pub default_speed_pct: f32,
}
