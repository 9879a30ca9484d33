// src/lib.rs
// structvis: parametric structure visualizer

pub mod animation;
pub mod config;
pub mod draw;
pub mod models;
pub mod render;
pub mod views;
