//! Street stream resource.
//!
//! The traversable world is a chain of discrete street segments, each one
//! segment-length further along the previous segment's heading. The
//! [`StreetStream`] resource owns the bounded sliding window of live
//! segments, the chain tail (last id/origin/yaw), and the [`TurnPolicy`]
//! deciding whether each new segment turns.
//!
//! Segments are immutable once created and identified by strictly
//! increasing ids; the render collaborator keys geometry lifecycle off
//! those ids. The window is never empty and never exceeds its capacity.

use std::collections::VecDeque;
use std::f32::consts::FRAC_PI_2;

use bevy_ecs::prelude::Resource;
use glam::{Mat3, Vec3};

/// Shape variants of a street segment.
///
/// Only straight segments exist today; the variant is kept so turn pieces
/// can be added without changing the stream bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentKind {
    #[default]
    Straight,
}

/// One materialized piece of street.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    /// Strictly increasing chain id.
    pub id: u64,
    /// World-space origin of the segment.
    pub origin: Vec3,
    /// Heading of the segment, radians around the vertical axis.
    pub yaw: f32,
    pub kind: SegmentKind,
}

/// Strategy deciding the yaw delta of the next appended segment.
///
/// Injectable so tests can force or suppress turns; production uses
/// [`RandomTurns`].
pub trait TurnPolicy: Send + Sync {
    /// Yaw delta for the next segment, radians. Zero means straight ahead.
    fn decide(&mut self) -> f32;
}

/// Production turn policy: quarter turn left or right with a configured
/// probability, equal odds for either direction.
pub struct RandomTurns {
    rng: fastrand::Rng,
    probability: f32,
}

impl RandomTurns {
    pub fn new(probability: f32) -> Self {
        Self {
            rng: fastrand::Rng::new(),
            probability,
        }
    }

    /// Seeded variant for reproducible runs.
    pub fn with_seed(seed: u64, probability: f32) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            probability,
        }
    }
}

impl TurnPolicy for RandomTurns {
    fn decide(&mut self) -> f32 {
        if self.rng.f32() < self.probability {
            if self.rng.bool() {
                FRAC_PI_2
            } else {
                -FRAC_PI_2
            }
        } else {
            0.0
        }
    }
}

/// Turn policy that never turns. Used by tests and deterministic demos.
pub struct StraightAhead;

impl TurnPolicy for StraightAhead {
    fn decide(&mut self) -> f32 {
        0.0
    }
}

/// Ordered, bounded window of live street segments plus chain tail state.
#[derive(Resource)]
pub struct StreetStream {
    /// Live segments in creation order (ascending id).
    pub window: VecDeque<Segment>,
    /// Id of the most recently created segment.
    pub last_id: u64,
    /// Origin of the most recently created segment.
    pub last_origin: Vec3,
    /// Heading of the most recently created segment.
    pub last_yaw: f32,
    /// Turn decision strategy for newly appended segments.
    pub turn_policy: Box<dyn TurnPolicy>,
}

impl StreetStream {
    /// Seed the stream with three straight segments stretching ahead of the
    /// spawn point, so the world is never empty on the first tick.
    pub fn seeded(segment_length: f32, turn_policy: Box<dyn TurnPolicy>) -> Self {
        let mut window = VecDeque::new();
        let mut last = Segment {
            id: 0,
            origin: Vec3::ZERO,
            yaw: 0.0,
            kind: SegmentKind::Straight,
        };
        for id in 0..3u64 {
            last = Segment {
                id,
                origin: Vec3::new(0.0, 0.0, -(id as f32) * segment_length),
                yaw: 0.0,
                kind: SegmentKind::Straight,
            };
            window.push_back(last);
        }
        Self {
            window,
            last_id: last.id,
            last_origin: last.origin,
            last_yaw: last.yaw,
            turn_policy,
        }
    }

    /// Append one segment at the end of the chain and evict from the front
    /// until the window fits `capacity`. Returns the new segment.
    pub fn append_next(&mut self, segment_length: f32, capacity: usize) -> Segment {
        let delta_yaw = self.turn_policy.decide();
        let forward = Mat3::from_rotation_y(self.last_yaw) * Vec3::new(0.0, 0.0, -segment_length);
        let segment = Segment {
            id: self.last_id + 1,
            origin: self.last_origin + forward,
            yaw: self.last_yaw + delta_yaw,
            kind: SegmentKind::Straight,
        };
        self.window.push_back(segment);
        while self.window.len() > capacity {
            self.window.pop_front();
        }
        self.last_id = segment.id;
        self.last_origin = segment.origin;
        self.last_yaw = segment.yaw;
        segment
    }
}
