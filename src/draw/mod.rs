// src/draw/mod.rs
// DrawCommand translation to Nannou Draw for drawing

pub mod command_draw;

pub use command_draw::draw_structure;
