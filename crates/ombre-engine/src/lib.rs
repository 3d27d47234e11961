//! Ombre engine crate.
//!
//! Owns the platform and GPU runtime the gradient builder runs on: the winit
//! window loop, the wgpu device, keyboard input translation, and the renderer
//! that paints a gradient snapshot as a live preview.

pub mod core;
pub mod device;
pub mod input;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
