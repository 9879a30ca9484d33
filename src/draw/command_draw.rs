// src/draw/command_draw.rs
//
// Emits structure draw commands onto a nannou Draw surface. This is the
// only place that knows about the two coordinate spaces: structures work
// in canvas units (top-left origin, y down), nannou draws from a centered
// origin with y up.

use nannou::prelude::*;

use crate::render::{DrawCommand, DrawStyle, Transform2D};
use crate::views::StructureSlot;

// Canvas coordinates (top-left origin, y down) to nannou screen space.
fn canvas_to_screen(point: Point2, canvas_w: f32, canvas_h: f32) -> Point2 {
    pt2(point.x - canvas_w / 2.0, canvas_h / 2.0 - point.y)
}

/// Draws one placed structure. Commands are cloned, flipped into screen
/// space, rotated about the placement center, and emitted; nothing on the
/// Draw surface outlives the call.
pub fn draw_structure(draw: &Draw, slot: &StructureSlot, canvas_w: f32, canvas_h: f32) {
    let style = DrawStyle {
        color: slot.geometry.color,
        stroke_weight: slot.geometry.line_width,
    };

    // Positive placement rotation is clockwise on screen; y flips between
    // the spaces, so the screen-space angle negates.
    let transform = Transform2D {
        translation: canvas_to_screen(slot.placement.center, canvas_w, canvas_h),
        scale: 1.0,
        rotation: -slot.placement.rotation,
    };

    for mut command in slot.render() {
        command.map_points(|point| pt2(point.x, -point.y));
        command.apply_transform(&transform);
        draw_command(draw, &command, &style);
    }
}

fn draw_command(draw: &Draw, command: &DrawCommand, style: &DrawStyle) {
    match command {
        DrawCommand::Line { start, end } => {
            draw.line()
                .start(*start)
                .end(*end)
                .stroke_weight(style.stroke_weight)
                .color(style.color)
                .caps_round();
        }
        DrawCommand::Polyline { points } => {
            for window in points.windows(2) {
                if let [p1, p2] = window {
                    draw.line()
                        .start(*p1)
                        .end(*p2)
                        .stroke_weight(style.stroke_weight)
                        .color(style.color)
                        .caps_round();
                }
            }
        }
        DrawCommand::Ellipse { center, radius } => {
            draw.ellipse()
                .x_y(center.x, center.y)
                .radius(*radius)
                .color(style.color);
        }
        DrawCommand::Quad { corners, filled } => {
            let [a, b, c, d] = *corners;
            if *filled {
                draw.quad().points(a, b, c, d).color(style.color);
            } else {
                draw.quad()
                    .points(a, b, c, d)
                    .no_fill()
                    .stroke_color(style.color)
                    .stroke_weight(style.stroke_weight);
            }
        }
        DrawCommand::Arc { points, weight } => {
            for window in points.windows(2) {
                if let [p1, p2] = window {
                    draw.line()
                        .start(*p1)
                        .end(*p2)
                        .stroke_weight(*weight)
                        .color(style.color)
                        .caps_round();
                }
            }
        }
    }
}
