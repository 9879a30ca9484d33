// src/render/mod.rs
// The structure rendering core: draw-command primitives and the
// per-variant emitters that produce them.

pub mod commands;
pub mod structure;

pub use commands::{DrawCommand, DrawStyle, Transform2D};
pub use structure::render;
