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
pub struct RenderConfig {
    pub texture_width: u32,
    pub texture_height: u32,
    pub texture_samples: u32,
}

#[derive(Debug, Deserialize)]
pub struct StyleConfig {
    /// Palette as "#RRGGBB" strings, one shape per entry
    pub colors: Vec<String>,
    pub background: String,
    pub stroke_factor: f32,
    pub size_factor: f32,
}

#[derive(Debug, Deserialize)]
pub struct AnimationConfig {
    /// Decorative strokes per shape
    pub lines: usize,
    /// Rotation gap between strokes, in degrees
    pub gap_deg: f32,
    pub frame_delay_ms: u64,
}

impl AnimationConfig {
    /// Frame interval in seconds, the unit the update loop's dt uses
    pub fn frame_duration(&self) -> f32 {
        self.frame_delay_ms as f32 / 1000.0
    }
}
