// src/models/parameters.rs
//
// The live parameter state behind the visualization, plus the closed set of
// structure variants it can select. Setters clamp to the declared ranges so
// the renderer downstream never sees out-of-range values.

use std::fmt;

pub const POSITION_RANGE: (f32, f32) = (0.0, 100.0);
pub const SCALE_RANGE: (f32, f32) = (0.5, 2.0);
pub const LINE_THICKNESS_RANGE: (f32, f32) = (1.0, 10.0);
pub const Y_OFFSET_RANGE: (f32, f32) = (-0.02, 0.02);
pub const ROTATION_RANGE: (f32, f32) = (0.0, 360.0);
pub const CELL_COUNT_RANGE: (u32, u32) = (10, 100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureVariant {
    Line,
    Circle,
    Diagonal,
    SineWave,
    Checkerboard,
    SymmetricalColor,
}

impl StructureVariant {
    pub const ALL: [StructureVariant; 6] = [
        StructureVariant::Line,
        StructureVariant::Circle,
        StructureVariant::Diagonal,
        StructureVariant::SineWave,
        StructureVariant::Checkerboard,
        StructureVariant::SymmetricalColor,
    ];

    /// Resolve a variant from its configuration name. Unknown names are a
    /// configuration error, fatal to the render attempt that requested them.
    pub fn from_name(name: &str) -> Result<Self, UnknownVariantError> {
        match name {
            "line" => Ok(StructureVariant::Line),
            "circle" => Ok(StructureVariant::Circle),
            "diagonal" => Ok(StructureVariant::Diagonal),
            "sineWave" => Ok(StructureVariant::SineWave),
            "checkerboard" => Ok(StructureVariant::Checkerboard),
            "symmetricalColor" => Ok(StructureVariant::SymmetricalColor),
            other => Err(UnknownVariantError(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StructureVariant::Line => "line",
            StructureVariant::Circle => "circle",
            StructureVariant::Diagonal => "diagonal",
            StructureVariant::SineWave => "sineWave",
            StructureVariant::Checkerboard => "checkerboard",
            StructureVariant::SymmetricalColor => "symmetricalColor",
        }
    }
}

#[derive(Debug, Clone)]
pub struct UnknownVariantError(pub String);

impl fmt::Display for UnknownVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown structure variant: {}", self.0)
    }
}

impl std::error::Error for UnknownVariantError {}

#[derive(Debug, Clone)]
pub struct ParameterSet {
    pub variant: StructureVariant,
    pub position: f32,       // 0..100, drives left/right horizontal travel
    pub scale: f32,          // 0.5..2, multiplies the base cell size
    pub line_thickness: f32, // 1..10
    pub y_offset: f32,       // -0.02..0.02, fraction of canvas height
    pub rotation: f32,       // 0..360 degrees
    pub cell_count: u32,     // 10..100
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            variant: StructureVariant::Line,
            position: 0.0,
            scale: 0.8,
            line_thickness: 2.0,
            y_offset: 0.0,
            rotation: 0.0,
            cell_count: 10,
        }
    }
}

impl ParameterSet {
    pub fn set_position(&mut self, value: f32) {
        self.position = value.clamp(POSITION_RANGE.0, POSITION_RANGE.1);
    }

    pub fn set_scale(&mut self, value: f32) {
        self.scale = value.clamp(SCALE_RANGE.0, SCALE_RANGE.1);
    }

    pub fn set_line_thickness(&mut self, value: f32) {
        self.line_thickness = value.clamp(LINE_THICKNESS_RANGE.0, LINE_THICKNESS_RANGE.1);
    }

    pub fn set_y_offset(&mut self, value: f32) {
        self.y_offset = value.clamp(Y_OFFSET_RANGE.0, Y_OFFSET_RANGE.1);
    }

    pub fn set_rotation(&mut self, value: f32) {
        self.rotation = value.clamp(ROTATION_RANGE.0, ROTATION_RANGE.1);
    }

    pub fn set_cell_count(&mut self, value: u32) {
        self.cell_count = value.clamp(CELL_COUNT_RANGE.0, CELL_COUNT_RANGE.1);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
