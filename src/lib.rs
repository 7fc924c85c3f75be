//! Street Cat simulation core.
//!
//! This module exposes the simulation's ECS components, resources, systems,
//! and events for use in integration tests and as a reusable library. The
//! render, input, and audio-synthesis collaborators live outside this crate
//! and exchange plain data with it: an intent snapshot in, character/pose/
//! street/camera state out, audio trigger messages on the side.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
