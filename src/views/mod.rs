// src/views/mod.rs

pub mod scene;

pub use scene::{compute_frame, default_palette, StructureSlot, SLOT_COUNT};
