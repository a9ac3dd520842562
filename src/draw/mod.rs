// src/draw/mod.rs
// Box-filler drawing: the style constants and the shape draw pass

pub mod box_draw;

use crate::config::{AnimationConfig, ConfigError, StyleConfig};
use nannou::prelude::*;

/// Immutable visual constants, built once from the config file and handed
/// to the renderer at construction.
#[derive(Debug, Clone)]
pub struct BoxStyle {
    pub colors: Vec<Rgb<f32>>,
    pub background: Rgb<f32>,
    pub lines: usize,
    pub stroke_factor: f32,
    pub size_factor: f32,
    pub gap_deg: f32,
}

impl BoxStyle {
    pub fn from_config(style: &StyleConfig, animation: &AnimationConfig) -> Result<Self, ConfigError> {
        if style.colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        let colors = style
            .colors
            .iter()
            .map(|hex| parse_hex_color(hex))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            colors,
            background: parse_hex_color(&style.background)?,
            lines: animation.lines,
            stroke_factor: style.stroke_factor,
            size_factor: style.size_factor,
            gap_deg: animation.gap_deg,
        })
    }

    /// Segment count of one shape cycle: the decorative strokes plus the
    /// fan rotation settle and the lid close
    pub fn parts(&self) -> usize {
        self.lines + 2
    }

    /// Per-frame scale increment
    pub fn scale_gap(&self) -> f32 {
        0.02 / (self.parts() + 1) as f32
    }

    pub fn palette_len(&self) -> usize {
        self.colors.len()
    }
}

fn parse_hex_color(hex: &str) -> Result<Rgb<f32>, ConfigError> {
    let bad = || ConfigError::BadColor { value: hex.to_owned() };

    let digits = hex.strip_prefix('#').ok_or_else(bad)?;
    if digits.len() != 6 {
        return Err(bad());
    }
    let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| bad())?;
    let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| bad())?;
    let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| bad())?;

    Ok(rgb(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
    ))
}
