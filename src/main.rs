//! Street Cat headless demo runner.
//!
//! Runs the simulation core without a window: a scripted intent feed walks,
//! sneaks, turns, jumps, and meows the cat down the procedurally extended
//! street for a configurable number of ticks, then reports the final state.
//!
//! The real game wires the same world and schedule to a render collaborator
//! that supplies the intent snapshot and frame delta and consumes the
//! character, pose, street, and camera state each tick.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --ticks 1200 --seed 7
//! ```

use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;

use streetcat::components::heading::Heading;
use streetcat::components::locomotion::Locomotion;
use streetcat::components::playercat::PlayerCat;
use streetcat::components::worldposition::WorldPosition;
use streetcat::events::gamestate::GameStateChangedEvent;
use streetcat::game;
use streetcat::resources::audio::shutdown_audio;
use streetcat::resources::customization::CatCustomization;
use streetcat::resources::gameconfig::SimConfig;
use streetcat::resources::gamestate::{GameStates, NextGameState};
use streetcat::resources::input::IntentSnapshot;
use streetcat::resources::street::{RandomTurns, StreetStream};

use bevy_ecs::prelude::With;

/// Street Cat simulation core
#[derive(Parser)]
#[command(version, about = "Headless demo run of the Street Cat simulation core")]
struct Cli {
    /// Number of simulation ticks to run.
    #[arg(long, default_value_t = 600)]
    ticks: u32,

    /// Simulated tick rate in Hz.
    #[arg(long, default_value_t = 60.0)]
    tick_rate: f32,

    /// Path to the INI tuning config (defaults used when absent).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to a JSON cat customization record.
    #[arg(long, value_name = "PATH")]
    customization: Option<PathBuf>,

    /// Seed for the street turn decisions (unseeded system RNG if omitted).
    #[arg(long)]
    seed: Option<u64>,
}

/// Scripted intent feed for the demo run, by elapsed seconds:
/// walk forward with a meow at 1 s, sneak from 3 s to 5 s, a short left
/// turn, a jump at 6 s, then keep running until 8 s and idle out.
fn scripted_intents(tick: u32, tick_rate: f32) -> IntentSnapshot {
    let t = tick as f32 / tick_rate;
    IntentSnapshot {
        forward: t < 8.0,
        sneak: (3.0..5.0).contains(&t),
        left: (5.0..5.5).contains(&t),
        jump: (6.0..6.1).contains(&t),
        meow: (1.0..1.15).contains(&t),
        ..Default::default()
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SimConfig::with_path(path),
        None => SimConfig::new(),
    };
    if config.config_path.exists() {
        if let Err(e) = config.load_from_file() {
            warn!("Using default tuning: {e}");
        }
    }

    let customization = match &cli.customization {
        Some(path) => match CatCustomization::load_from_file(path) {
            Ok(c) => c,
            Err(e) => {
                warn!("Using default customization: {e}");
                CatCustomization::default()
            }
        },
        None => CatCustomization::default(),
    };
    info!(
        "Cat: {} {:?} {:?}",
        customization.color, customization.pattern, customization.breed
    );

    let turn_probability = config.turn_probability;
    let mut world = game::build_world(config, customization);

    // Start a session immediately; the demo has no menu.
    world.resource_mut::<NextGameState>().set(GameStates::Playing);
    world.trigger(GameStateChangedEvent {});
    world.flush();

    if let Some(seed) = cli.seed {
        world.resource_mut::<StreetStream>().turn_policy =
            Box::new(RandomTurns::with_seed(seed, turn_probability));
    }

    let mut schedule = game::build_schedule();
    schedule
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    let dt = 1.0 / cli.tick_rate;
    for tick in 0..cli.ticks {
        *world.resource_mut::<IntentSnapshot>() = scripted_intents(tick, cli.tick_rate);
        game::run_tick(&mut world, &mut schedule, dt);
    }

    let mut query =
        world.query_filtered::<(&WorldPosition, &Heading, &Locomotion), With<PlayerCat>>();
    if let Ok((position, heading, loco)) = query.single(&world) {
        info!(
            "Cat finished at {:?}, yaw {:.2}, action {:?}",
            position.pos, heading.yaw, loco.action
        );
    }
    {
        let stream = world.resource::<StreetStream>();
        info!(
            "Street window: {} segments, ids {}..={}, tail at {:?}",
            stream.window.len(),
            stream.window.front().map(|s| s.id).unwrap_or_default(),
            stream.last_id,
            stream.last_origin
        );
    }

    // Tear the session down the way the menu would, then stop the audio
    // thread.
    world.resource_mut::<NextGameState>().set(GameStates::Menu);
    world.trigger(GameStateChangedEvent {});
    world.flush();
    shutdown_audio(&mut world);
}
