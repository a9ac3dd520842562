// src/animation/mod.rs

pub mod frame_animator;
pub mod shape_state;

pub use frame_animator::{ContinuousRedraw, FrameAnimator, RedrawScheduler, ScheduleError};
pub use shape_state::{ShapeState, UpdateResult};
