// src/views/shape_chain.rs
//
// The fixed sequence of box-filler shapes and the bidirectional traversal
// over them. One node per palette color; only the current node is drawn.

use crate::animation::{ShapeState, UpdateResult};
use crate::draw::{box_draw, BoxStyle};
use nannou::prelude::*;

#[derive(Debug, Clone)]
pub struct ShapeNode {
    index: usize,
    state: ShapeState,
}

impl ShapeNode {
    fn new(index: usize, scale_gap: f32) -> Self {
        Self {
            index,
            state: ShapeState::new(scale_gap),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> &ShapeState {
        &self.state
    }

    pub fn draw(&self, draw: &Draw, w: f32, h: f32, style: &BoxStyle) {
        box_draw::draw_node(draw, self.index, self.state.scale(), w, h, style);
    }
}

pub struct ShapeChain {
    nodes: Vec<ShapeNode>,
    current: usize,
    dir: i32,
}

impl ShapeChain {
    pub fn new(style: &BoxStyle) -> Self {
        let scale_gap = style.scale_gap();
        let nodes = (0..style.palette_len())
            .map(|i| ShapeNode::new(i, scale_gap))
            .collect();
        Self {
            nodes,
            current: 0,
            dir: 1,
        }
    }

    pub fn current(&self) -> &ShapeNode {
        &self.nodes[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn traversal_dir(&self) -> i32 {
        self.dir
    }

    pub fn draw(&self, draw: &Draw, w: f32, h: f32, style: &BoxStyle) {
        self.nodes[self.current].draw(draw, w, h, style);
    }

    /// Steps the active node's animation, advancing the traversal when a
    /// cycle completes. The completion result is forwarded to the caller.
    pub fn update(&mut self) -> UpdateResult {
        let result = self.nodes[self.current].state.update();
        if let UpdateResult::CycleComplete(_) = result {
            self.advance();
        }
        result
    }

    /// Starts the active node's cycle if it is idle, returning whether it
    /// started.
    pub fn start(&mut self) -> bool {
        self.nodes[self.current].state.start()
    }

    // Moves `current` one node along the traversal direction; at either
    // end the direction flips and the boundary node stays current.
    fn advance(&mut self) {
        let next = self.current as i32 + self.dir;
        if next < 0 || next >= self.nodes.len() as i32 {
            self.dir = -self.dir;
        } else {
            self.current = next as usize;
        }
    }
}
