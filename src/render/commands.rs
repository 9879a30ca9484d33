// src/render/commands.rs
//
// DrawCommand is a single pre-computed drawing operation emitted by a
// structure variant. Commands are plain geometry in canvas units; style is
// applied when they reach the draw backend.

use nannou::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        start: Point2,
        end: Point2,
    },
    /// Open polyline connecting the points in order.
    Polyline {
        points: Vec<Point2>,
    },
    /// Filled ellipse, no stroke.
    Ellipse {
        center: Point2,
        radius: f32,
    },
    /// Four-corner polygon, filled or outline-only.
    Quad {
        corners: [Point2; 4],
        filled: bool,
    },
    /// Pre-sampled arc carrying its own stroke weight.
    Arc {
        points: Vec<Point2>,
        weight: f32,
    },
}

impl DrawCommand {
    pub fn map_points<F>(&mut self, f: F)
    where
        F: Fn(Point2) -> Point2,
    {
        match self {
            DrawCommand::Line { start, end } => {
                *start = f(*start);
                *end = f(*end);
            }
            DrawCommand::Polyline { points } | DrawCommand::Arc { points, .. } => {
                for point in points {
                    *point = f(*point);
                }
            }
            DrawCommand::Ellipse { center, .. } => {
                *center = f(*center);
            }
            DrawCommand::Quad { corners, .. } => {
                for corner in corners {
                    *corner = f(*corner);
                }
            }
        }
    }

    pub fn apply_transform(&mut self, transform: &Transform2D) {
        self.map_points(|point| transform.apply_to_point(point));
        if let DrawCommand::Ellipse { radius, .. } = self {
            *radius *= transform.scale;
        }
    }
}

#[derive(Debug, Clone)]
pub struct DrawStyle {
    pub color: Rgba<f32>,
    pub stroke_weight: f32,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            color: rgba(1.0, 1.0, 1.0, 1.0),
            stroke_weight: 2.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Transform2D {
    pub translation: Vec2,
    pub scale: f32,
    pub rotation: f32, // radians
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translation: Vec2::ZERO,
            scale: 1.0,
            rotation: 0.0,
        }
    }
}

impl Transform2D {
    pub fn combine(&self, other: &Transform2D) -> Transform2D {
        Transform2D {
            translation: self.translation + other.translation,
            scale: self.scale * other.scale,
            rotation: self.rotation + other.rotation,
        }
    }

    pub fn apply_to_point(&self, point: Point2) -> Point2 {
        // 1. Scale
        let scaled = point * self.scale;

        // 2. Rotate
        let cos_rot = self.rotation.cos();
        let sin_rot = self.rotation.sin();
        let rotated = pt2(
            scaled.x * cos_rot - scaled.y * sin_rot,
            scaled.x * sin_rot + scaled.y * cos_rot,
        );

        // 3. Translate
        rotated + self.translation
    }
}
