//! Rotating-cube OpenGL demo.
//!
//! `engine` holds the reusable pieces (math, GL resources, frame gate,
//! input mapping, config, errors); `game` wires them into the demo scene.

pub mod engine;
pub mod game;
