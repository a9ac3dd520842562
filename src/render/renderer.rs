// src/render/renderer.rs
//
// Ties the chain, the animator and the style together against the frame
// loop. Draw runs before step each update, so the frame on screen always
// shows the pre-step scale.

use crate::animation::{FrameAnimator, RedrawScheduler, UpdateResult};
use crate::draw::BoxStyle;
use crate::views::ShapeChain;
use log::warn;
use nannou::prelude::*;

pub struct Renderer {
    chain: ShapeChain,
    animator: FrameAnimator,
    style: BoxStyle,
}

impl Renderer {
    pub fn new(style: BoxStyle, frame_duration: f32, scheduler: Box<dyn RedrawScheduler>) -> Self {
        let chain = ShapeChain::new(&style);
        Self {
            chain,
            animator: FrameAnimator::new(frame_duration, scheduler),
            style,
        }
    }

    /// Clears the background and draws the active shape.
    pub fn draw(&self, draw: &Draw, w: f32, h: f32) {
        draw.background().color(self.style.background);
        self.chain.draw(draw, w, h, &self.style);
    }

    /// Advances the animation by `dt` seconds of wall time. At most one
    /// chain step happens per elapsed frame interval; every completed
    /// shape cycle parks the animator until the next tap.
    pub fn step(&mut self, dt: f32) {
        if !self.animator.frame_due(dt) {
            return;
        }
        if let UpdateResult::CycleComplete(_) = self.chain.update() {
            self.animator.stop();
        }
        if let Err(e) = self.animator.request_redraw() {
            // Frame skipped; the next due frame tries again
            warn!("{e}");
        }
    }

    /// A press only lands while the active shape is idle; presses during
    /// an active animation are ignored.
    pub fn handle_tap(&mut self) {
        if self.chain.start() {
            self.animator.start();
        }
    }

    pub fn chain(&self) -> &ShapeChain {
        &self.chain
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    pub fn style(&self) -> &BoxStyle {
        &self.style
    }
}
