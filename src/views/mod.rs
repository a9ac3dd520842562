// src/views/mod.rs

pub mod shape_chain;

pub use shape_chain::{ShapeChain, ShapeNode};
