// src/render/mod.rs
// The frame orchestration module

pub mod renderer;

pub use renderer::Renderer;
