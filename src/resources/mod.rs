//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: intent state, timing, the street
//! window, the camera pose, and the audio bridge. Each submodule documents
//! the semantics and intended usage of its resource(s).
//!
//! Overview
//! - `audio` – bridge and channels for the background audio thread
//! - `camerarig` – shared third-person camera pose
//! - `customization` – read-only cat appearance record
//! - `gameconfig` – simulation tuning constants, loadable from INI
//! - `gamestate` – authoritative and pending high-level game state
//! - `input` – per-tick intent state derived from the host's snapshot
//! - `street` – bounded sliding window of live street segments
//! - `worldtime` – simulation time and delta

pub mod audio;
pub mod camerarig;
pub mod customization;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod street;
pub mod worldtime;
