// src/utilities/mod.rs

pub mod easing;
