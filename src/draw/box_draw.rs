// src/draw/box_draw.rs
//
// The open-box-filler shape pass: a fan of strokes that counter-rotates
// into place while each stroke grows, then a lid rect rising from the
// floor of the box.

use crate::draw::BoxStyle;
use crate::utilities::easing::{divide_scale, sinify};
use nannou::prelude::*;

/// Draws one chain node's shape, keyed by palette index, at animation
/// progress `scale`, centered in a `w` x `h` surface.
pub fn draw_node(draw: &Draw, index: usize, scale: f32, w: f32, h: f32, style: &BoxStyle) {
    let color = style.colors[index % style.colors.len()];
    let stroke_weight = w.min(h) / style.stroke_factor;
    draw_open_box_filler(draw, scale, w, h, color, stroke_weight, style);
}

fn draw_open_box_filler(
    draw: &Draw,
    scale: f32,
    w: f32,
    h: f32,
    color: Rgb<f32>,
    stroke_weight: f32,
    style: &BoxStyle,
) {
    let sf = sinify(scale);
    let size = w.min(h) / style.size_factor;
    let segments = style.parts() + 1;

    // Segment windows: one per stroke, then the fan settle, then the lid
    let sf_settle = divide_scale(sf, style.lines, segments);
    let sf_lid = divide_scale(sf, style.parts() - 1, segments);

    // The stroke fan counter-rotates from 180 degrees down to rest as its
    // settle window completes
    let fan = draw.rotate(deg_to_rad(180.0 * (1.0 - sf_settle)));
    for j in 0..style.lines {
        let sf_j = divide_scale(sf, j, segments);
        let stroke = fan.rotate(deg_to_rad(style.gap_deg * j as f32));
        stroke
            .line()
            .points(
                pt2(size / 2.0, size / 2.0),
                pt2(size / 2.0, size / 2.0 - size * sf_j),
            )
            .stroke_weight(stroke_weight)
            .color(color)
            .caps_round();
    }

    // Lid rect filling the bottom half of the box
    let lid_h = size / 2.0 * sf_lid;
    if lid_h > 0.0 {
        draw.rect()
            .x_y(0.0, -size / 2.0 + lid_h / 2.0)
            .w_h(size, lid_h)
            .color(color);
    }
}
