// src/animation/mod.rs

pub mod automation;

pub use automation::{AutomationBank, AutomationState};
