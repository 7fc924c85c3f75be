//! ECS components.
//!
//! One file per component, following the convention that a component is a
//! plain data struct and all behavior lives in systems.
//!
//! Submodules overview
//! - [`bodypose`] – per-part procedural pose output consumed by the renderer
//! - [`heading`] – yaw facing angle and local-to-world rotation helper
//! - [`locomotion`] – vertical velocity, grounded flag, gait phase, action
//! - [`persistent`] – marker for entities that survive session teardown
//! - [`playercat`] – marker for the player-controlled cat entity
//! - [`worldposition`] – 3D world-space position

pub mod bodypose;
pub mod heading;
pub mod locomotion;
pub mod persistent;
pub mod playercat;
pub mod worldposition;
