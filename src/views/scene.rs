// src/views/scene.rs
//
// The scene composer. Pure: maps the current parameter set onto the three
// placed structure instances (left, center, right). The caller owns when to
// actually draw the result, so this stays testable without a window.
//
// Slot layout rules:
//   - the left slot travels from 25% to 75% of the canvas width as the
//     position parameter goes 0 -> 100; the right slot mirrors it;
//   - the center slot is pinned at 50% width, zero rotation, zero offset;
//   - left and right rotate by equal and opposite angles and take equal
//     and opposite vertical offsets.

use nannou::prelude::*;

use crate::models::{GridGeometry, ParameterSet, Placement, StructureVariant};
use crate::render::structure::render;
use crate::render::DrawCommand;

pub const SLOT_COUNT: usize = 3;

#[derive(Debug, Clone)]
pub struct StructureSlot {
    pub geometry: GridGeometry,
    pub placement: Placement,
    pub variant: StructureVariant,
}

impl StructureSlot {
    /// Emit this slot's draw commands in structure-local coordinates.
    pub fn render(&self) -> Vec<DrawCommand> {
        render(&self.geometry, self.variant)
    }
}

/// The sketch palette: red, green, blue at the given alpha, composited
/// additively by the draw backend.
pub fn default_palette(alpha: f32) -> [Rgba<f32>; SLOT_COUNT] {
    [
        rgba(1.0, 0.0, 0.0, alpha),
        rgba(0.0, 1.0, 0.0, alpha),
        rgba(0.0, 0.0, 1.0, alpha),
    ]
}

pub fn compute_frame(
    params: &ParameterSet,
    canvas_w: f32,
    canvas_h: f32,
    base_cell_size: f32,
    palette: &[Rgba<f32>; SLOT_COUNT],
) -> [StructureSlot; SLOT_COUNT] {
    let cell_size = base_cell_size * params.scale;
    let extent = cell_size * params.cell_count as f32;
    let rotation = params.rotation.to_radians();

    let center_xs = [
        canvas_w * map_range(params.position, 0.0, 100.0, 0.25, 0.75),
        canvas_w * 0.5,
        canvas_w * map_range(params.position, 0.0, 100.0, 0.75, 0.25),
    ];
    let center_ys = [
        canvas_h / 2.0 - canvas_h * params.y_offset,
        canvas_h / 2.0,
        canvas_h / 2.0 + canvas_h * params.y_offset,
    ];
    let rotations = [rotation, 0.0, -rotation];

    std::array::from_fn(|slot| StructureSlot {
        geometry: GridGeometry {
            // draw about the placement center
            origin: pt2(-extent / 2.0, -extent / 2.0),
            cell_size,
            cell_count: params.cell_count,
            color: palette[slot],
            line_width: params.line_thickness,
        },
        placement: Placement {
            center: pt2(center_xs[slot], center_ys[slot]),
            rotation: rotations[slot],
        },
        variant: params.variant,
    })
}
