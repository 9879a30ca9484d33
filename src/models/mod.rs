// src/models/mod.rs

pub mod geometry;
pub mod parameters;

pub use geometry::{GridGeometry, Placement};
pub use parameters::{ParameterSet, StructureVariant, UnknownVariantError};
