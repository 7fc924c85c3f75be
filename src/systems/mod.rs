//! Simulation systems.
//!
//! This module groups all ECS systems that advance the simulation each tick.
//!
//! Submodules overview
//! - [`animation`] – derive the procedural body pose from locomotion state
//! - [`audio`] – bridge with the audio thread (poll/update message queues)
//! - [`camera`] – smooth the third-person camera toward the cat
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`input`] – diff the host snapshot into intent state and edge events
//! - [`locomotion`] – integrate intents into position, heading, and action
//! - [`street`] – append and evict street segments around the cat
//! - [`time`] – update simulation time and delta
//! - [`vocalize`] – map expression intent edges to audio commands

pub mod animation;
pub mod audio;
pub mod camera;
pub mod gamestate;
pub mod input;
pub mod locomotion;
pub mod street;
pub mod time;
pub mod vocalize;
