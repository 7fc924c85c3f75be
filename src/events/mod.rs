//! Event types and observers used by the simulation.
//!
//! This module groups the domain events exchanged across systems and the
//! corresponding observers that react to them. Events provide a decoupled
//! way for systems to communicate without direct dependencies.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`gamestate`] – state transition notifications for the high-level game flow
//! - [`input`] – press/release edges of the meow/scratch/groom intents
//! - [`locomotion`] – state-edge notifications such as the jump takeoff
//!
//! See each submodule for concrete event data, semantics, and example usage.

pub mod audio;
pub mod gamestate;
pub mod input;
pub mod locomotion;
