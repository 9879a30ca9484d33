// src/render/structure.rs
//
// The structure renderer. Each variant turns a GridGeometry into a
// deterministic sequence of draw commands, stateless and free of any
// drawing-surface dependency. Indices i, j run over [0, cell_count);
// all output stays inside the grid square [origin, origin + extent].

use nannou::prelude::*;
use std::f32::consts::TAU;

use crate::models::{GridGeometry, StructureVariant};
use crate::render::DrawCommand;

// Sine bands are sampled every 5 canvas units, as in the original sketches.
const WAVE_STEP: f32 = 5.0;
// Samples per sector arc.
const ARC_SAMPLES: usize = 16;

pub fn render(geometry: &GridGeometry, variant: StructureVariant) -> Vec<DrawCommand> {
    match variant {
        StructureVariant::Line => lattice_commands(geometry),
        StructureVariant::Circle => circle_commands(geometry),
        StructureVariant::Diagonal => diagonal_commands(geometry),
        StructureVariant::SineWave => sine_wave_commands(geometry),
        StructureVariant::Checkerboard => checkerboard_commands(geometry),
        StructureVariant::SymmetricalColor => symmetrical_color_commands(geometry),
    }
}

// cell_count + 1 vertical and cell_count + 1 horizontal lines forming a
// uniform lattice over the full extent.
fn lattice_commands(geometry: &GridGeometry) -> Vec<DrawCommand> {
    let extent = geometry.extent();
    let origin = geometry.origin;
    let mut commands = Vec::with_capacity(2 * (geometry.cell_count as usize + 1));

    for i in 0..=geometry.cell_count {
        let offset = i as f32 * geometry.cell_size;
        commands.push(DrawCommand::Line {
            start: pt2(origin.x + offset, origin.y),
            end: pt2(origin.x + offset, origin.y + extent),
        });
        commands.push(DrawCommand::Line {
            start: pt2(origin.x, origin.y + offset),
            end: pt2(origin.x + extent, origin.y + offset),
        });
    }
    commands
}

// One filled ellipse per cell, diameter 0.8 of the cell.
fn circle_commands(geometry: &GridGeometry) -> Vec<DrawCommand> {
    let count = geometry.cell_count;
    let radius = geometry.cell_size * 0.4;
    let mut commands = Vec::with_capacity((count * count) as usize);

    for i in 0..count {
        for j in 0..count {
            commands.push(DrawCommand::Ellipse {
                center: geometry.cell_center(i, j),
                radius,
            });
        }
    }
    commands
}

// A 45-degree hatch: one top-left to bottom-right segment per cell.
fn diagonal_commands(geometry: &GridGeometry) -> Vec<DrawCommand> {
    let count = geometry.cell_count;
    let cell = geometry.cell_size;
    let mut commands = Vec::with_capacity((count * count) as usize);

    for i in 0..count {
        for j in 0..count {
            let corner = geometry.cell_origin(i, j);
            commands.push(DrawCommand::Line {
                start: corner,
                end: pt2(corner.x + cell, corner.y + cell),
            });
        }
    }
    commands
}

// One open polyline per horizontal band, sampling a sine with amplitude
// half a cell and a wavelength of four cells.
fn sine_wave_commands(geometry: &GridGeometry) -> Vec<DrawCommand> {
    let extent = geometry.extent();
    let amplitude = geometry.cell_size * 0.5;
    let frequency = TAU / (4.0 * geometry.cell_size);
    let steps = (extent / WAVE_STEP).floor() as usize;
    let mut commands = Vec::with_capacity(geometry.cell_count as usize);

    for j in 0..geometry.cell_count {
        let band_center = geometry.origin.y + (j as f32 + 0.5) * geometry.cell_size;
        let mut points = Vec::with_capacity(steps + 1);
        for step in 0..=steps {
            let x = step as f32 * WAVE_STEP;
            points.push(pt2(
                geometry.origin.x + x,
                band_center + amplitude * (x * frequency).sin(),
            ));
        }
        commands.push(DrawCommand::Polyline { points });
    }
    commands
}

// Standard parity fill: cell (i, j) is filled when i + j is even,
// outlined otherwise.
fn checkerboard_commands(geometry: &GridGeometry) -> Vec<DrawCommand> {
    let count = geometry.cell_count;
    let cell = geometry.cell_size;
    let mut commands = Vec::with_capacity((count * count) as usize);

    for i in 0..count {
        for j in 0..count {
            let corner = geometry.cell_origin(i, j);
            commands.push(DrawCommand::Quad {
                corners: [
                    corner,
                    pt2(corner.x + cell, corner.y),
                    pt2(corner.x + cell, corner.y + cell),
                    pt2(corner.x, corner.y + cell),
                ],
                filled: (i + j) % 2 == 0,
            });
        }
    }
    commands
}

// Radial ornament centered on the grid midpoint: the circle is split into
// cell_count sectors, each holding concentric arc rings one cell apart.
// Ring stroke weight grows linearly from 0.1 to 0.5 of a cell.
fn symmetrical_color_commands(geometry: &GridGeometry) -> Vec<DrawCommand> {
    let center = geometry.midpoint();
    let half_extent = geometry.extent() / 2.0;
    let sector = TAU / geometry.cell_count as f32;
    let ring_count = (half_extent / geometry.cell_size).floor() as u32;
    let mut commands = Vec::with_capacity((geometry.cell_count * ring_count) as usize);

    for s in 0..geometry.cell_count {
        let start_angle = s as f32 * sector;
        for ring in 1..=ring_count {
            let radius = ring as f32 * geometry.cell_size;
            let t = if ring_count > 1 {
                (ring - 1) as f32 / (ring_count - 1) as f32
            } else {
                0.0
            };
            let weight = geometry.cell_size * (0.1 + 0.4 * t);

            let mut points = Vec::with_capacity(ARC_SAMPLES + 1);
            for sample in 0..=ARC_SAMPLES {
                let angle = start_angle + sector * sample as f32 / ARC_SAMPLES as f32;
                points.push(pt2(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                ));
            }
            commands.push(DrawCommand::Arc { points, weight });
        }
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_geometry(cell_size: f32, cell_count: u32) -> GridGeometry {
        GridGeometry {
            origin: pt2(0.0, 0.0),
            cell_size,
            cell_count,
            color: rgba(1.0, 0.0, 0.0, 0.39),
            line_width: 2.0,
        }
    }

    // Geometric bounds of a command sequence, ellipse radii included.
    fn bounds(commands: &[DrawCommand]) -> (Point2, Point2) {
        let mut min = pt2(f32::MAX, f32::MAX);
        let mut max = pt2(f32::MIN, f32::MIN);
        let mut extend = |point: Point2| {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        };

        for command in commands {
            match command {
                DrawCommand::Line { start, end } => {
                    extend(*start);
                    extend(*end);
                }
                DrawCommand::Polyline { points } | DrawCommand::Arc { points, .. } => {
                    for point in points {
                        extend(*point);
                    }
                }
                DrawCommand::Ellipse { center, radius } => {
                    extend(pt2(center.x - radius, center.y - radius));
                    extend(pt2(center.x + radius, center.y + radius));
                }
                DrawCommand::Quad { corners, .. } => {
                    for corner in corners {
                        extend(*corner);
                    }
                }
            }
        }
        (min, max)
    }

    #[test]
    fn test_every_variant_stays_inside_the_grid() {
        let geometry = test_geometry(40.0, 10);
        let extent = geometry.extent();

        for variant in StructureVariant::ALL {
            let commands = render(&geometry, variant);
            assert!(!commands.is_empty(), "{} emitted nothing", variant.name());

            let (min, max) = bounds(&commands);
            let eps = 1e-3;
            assert!(min.x >= -eps && min.y >= -eps, "{} underflows", variant.name());
            assert!(
                max.x <= extent + eps && max.y <= extent + eps,
                "{} overflows",
                variant.name()
            );
        }
    }

    #[test]
    fn test_lattice_line_counts_and_spans() {
        let geometry = test_geometry(40.0, 10);
        let extent = geometry.extent();
        let commands = render(&geometry, StructureVariant::Line);

        let mut vertical = 0;
        let mut horizontal = 0;
        for command in &commands {
            match command {
                DrawCommand::Line { start, end } if start.x == end.x => {
                    vertical += 1;
                    assert_eq!((end.y - start.y).abs(), extent);
                }
                DrawCommand::Line { start, end } if start.y == end.y => {
                    horizontal += 1;
                    assert_eq!((end.x - start.x).abs(), extent);
                }
                other => panic!("unexpected lattice command: {:?}", other),
            }
        }
        assert_eq!(vertical, 11);
        assert_eq!(horizontal, 11);
    }

    #[test]
    fn test_circle_per_cell() {
        let geometry = test_geometry(40.0, 10);
        let commands = render(&geometry, StructureVariant::Circle);
        assert_eq!(commands.len(), 100);

        for command in &commands {
            match command {
                DrawCommand::Ellipse { radius, .. } => assert_eq!(*radius, 16.0),
                other => panic!("unexpected circle command: {:?}", other),
            }
        }
    }

    #[test]
    fn test_diagonal_hatch_is_per_cell() {
        let geometry = test_geometry(10.0, 4);
        let commands = render(&geometry, StructureVariant::Diagonal);
        assert_eq!(commands.len(), 16);

        for command in &commands {
            match command {
                DrawCommand::Line { start, end } => {
                    // 45-degree segment exactly one cell long
                    assert_eq!(end.x - start.x, 10.0);
                    assert_eq!(end.y - start.y, 10.0);
                }
                other => panic!("unexpected diagonal command: {:?}", other),
            }
        }
    }

    #[test]
    fn test_sine_wave_bands() {
        let geometry = test_geometry(40.0, 10);
        let commands = render(&geometry, StructureVariant::SineWave);
        assert_eq!(commands.len(), 10);

        for (j, command) in commands.iter().enumerate() {
            match command {
                DrawCommand::Polyline { points } => {
                    // 5-unit steps across the full 400-unit extent
                    assert_eq!(points.len(), 81);
                    assert_eq!(points.first().unwrap().x, 0.0);
                    assert_eq!(points.last().unwrap().x, 400.0);

                    let band_top = j as f32 * 40.0;
                    for point in points {
                        assert!(point.y >= band_top - 1e-3);
                        assert!(point.y <= band_top + 40.0 + 1e-3);
                    }
                }
                other => panic!("unexpected sine command: {:?}", other),
            }
        }
    }

    #[test]
    fn test_checkerboard_parity() {
        let geometry = test_geometry(10.0, 12);
        let commands = render(&geometry, StructureVariant::Checkerboard);
        assert_eq!(commands.len(), 144);

        for command in &commands {
            match command {
                DrawCommand::Quad { corners, filled } => {
                    let i = (corners[0].x / 10.0).round() as u32;
                    let j = (corners[0].y / 10.0).round() as u32;
                    assert_eq!(*filled, (i + j) % 2 == 0, "parity wrong at ({}, {})", i, j);
                }
                other => panic!("unexpected checkerboard command: {:?}", other),
            }
        }
    }

    #[test]
    fn test_symmetrical_color_rings() {
        let geometry = test_geometry(40.0, 10);
        let commands = render(&geometry, StructureVariant::SymmetricalColor);
        // 10 sectors, 5 rings each
        assert_eq!(commands.len(), 50);

        let center = geometry.midpoint();
        let mut min_weight = f32::MAX;
        let mut max_weight = f32::MIN;
        for command in &commands {
            match command {
                DrawCommand::Arc { points, weight } => {
                    min_weight = min_weight.min(*weight);
                    max_weight = max_weight.max(*weight);
                    // every sample sits on a circle around the midpoint
                    let radius = points[0].distance(center);
                    for point in points {
                        assert!((point.distance(center) - radius).abs() < 1e-3);
                    }
                    assert!(radius <= geometry.extent() / 2.0 + 1e-3);
                }
                other => panic!("unexpected arc command: {:?}", other),
            }
        }
        assert!((min_weight - 4.0).abs() < 1e-3); // 0.1 * cell
        assert!((max_weight - 20.0).abs() < 1e-3); // 0.5 * cell
    }

    #[test]
    fn test_render_is_deterministic() {
        let geometry = test_geometry(25.0, 13);
        for variant in StructureVariant::ALL {
            let first = render(&geometry, variant);
            let second = render(&geometry, variant);
            assert_eq!(first, second, "{} is not deterministic", variant.name());
        }
    }
}
