// src/animation/automation.rs
//
// Per-parameter automation. Rotation advances continuously and wraps;
// every other parameter sweeps back and forth, reversing direction when it
// reaches a range bound. Advanced once per update frame by the app shell.

use crate::models::parameters::{
    LINE_THICKNESS_RANGE, POSITION_RANGE, SCALE_RANGE, Y_OFFSET_RANGE,
};
use crate::models::ParameterSet;

// Per-frame step factors at 100% speed.
const ROTATION_STEP: f32 = 3.0;
const POSITION_STEP: f32 = 10.0;
const SCALE_STEP: f32 = 0.2;
const LINE_THICKNESS_STEP: f32 = 0.4;
const Y_OFFSET_STEP: f32 = 0.01;

#[derive(Debug, Clone)]
pub struct AutomationState {
    pub playing: bool,
    pub speed_pct: f32,
    pub direction: f32, // 1.0 or -1.0
}

impl AutomationState {
    pub fn new(speed_pct: f32) -> Self {
        Self {
            playing: false,
            speed_pct,
            direction: 1.0,
        }
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    // Bounce `value` between the range bounds, flipping direction on contact.
    fn sweep(&mut self, value: f32, range: (f32, f32), step_factor: f32) -> f32 {
        let speed = (self.speed_pct / 100.0).max(0.1) * self.direction * step_factor;
        let next = value + speed;
        if next >= range.1 || next <= range.0 {
            self.direction *= -1.0;
        }
        next.clamp(range.0, range.1)
    }
}

#[derive(Debug, Clone)]
pub struct AutomationBank {
    pub rotation: AutomationState,
    pub position: AutomationState,
    pub scale: AutomationState,
    pub line_thickness: AutomationState,
    pub y_offset: AutomationState,
}

impl AutomationBank {
    pub fn new(speed_pct: f32) -> Self {
        Self {
            rotation: AutomationState::new(speed_pct),
            position: AutomationState::new(speed_pct),
            scale: AutomationState::new(speed_pct),
            line_thickness: AutomationState::new(speed_pct),
            y_offset: AutomationState::new(speed_pct),
        }
    }

    pub fn any_playing(&self) -> bool {
        self.rotation.playing
            || self.position.playing
            || self.scale.playing
            || self.line_thickness.playing
            || self.y_offset.playing
    }

    /// Advance all playing parameters by one frame.
    pub fn advance(&mut self, params: &mut ParameterSet) {
        if self.rotation.playing {
            // continuous, no direction change
            let speed = ROTATION_STEP * self.rotation.speed_pct / 100.0;
            params.rotation = (params.rotation + speed).rem_euclid(360.0);
        }
        if self.position.playing {
            params.position = self
                .position
                .sweep(params.position, POSITION_RANGE, POSITION_STEP);
        }
        if self.scale.playing {
            params.scale = self.scale.sweep(params.scale, SCALE_RANGE, SCALE_STEP);
        }
        if self.line_thickness.playing {
            params.line_thickness = self.line_thickness.sweep(
                params.line_thickness,
                LINE_THICKNESS_RANGE,
                LINE_THICKNESS_STEP,
            );
        }
        if self.y_offset.playing {
            params.y_offset = self
                .y_offset
                .sweep(params.y_offset, Y_OFFSET_RANGE, Y_OFFSET_STEP);
        }
    }
}
