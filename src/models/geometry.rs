// src/models/geometry.rs
// Value types describing one structure's grid and its per-frame placement

use nannou::prelude::*;

// Everything a structure needs to emit its draw commands.
// Coordinates are canvas units with a top-left origin, y pointing down;
// the draw backend converts to screen space.
#[derive(Debug, Clone)]
pub struct GridGeometry {
    pub origin: Point2,
    pub cell_size: f32,
    pub cell_count: u32,
    pub color: Rgba<f32>,
    pub line_width: f32,
}

impl GridGeometry {
    /// Side length of the full grid square.
    pub fn extent(&self) -> f32 {
        self.cell_size * self.cell_count as f32
    }

    /// Top-left corner of cell (i, j).
    pub fn cell_origin(&self, i: u32, j: u32) -> Point2 {
        pt2(
            self.origin.x + i as f32 * self.cell_size,
            self.origin.y + j as f32 * self.cell_size,
        )
    }

    /// Center of cell (i, j).
    pub fn cell_center(&self, i: u32, j: u32) -> Point2 {
        let corner = self.cell_origin(i, j);
        pt2(corner.x + self.cell_size / 2.0, corner.y + self.cell_size / 2.0)
    }

    /// Center of the full grid square.
    pub fn midpoint(&self) -> Point2 {
        pt2(
            self.origin.x + self.extent() / 2.0,
            self.origin.y + self.extent() / 2.0,
        )
    }
}

// Where a structure sits this frame. Recomputed from the parameter set on
// every frame, never stored on the structure itself.
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    pub center: Point2,
    pub rotation: f32, // radians, positive is clockwise on screen
}
