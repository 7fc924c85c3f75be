use bevy_ecs::prelude::Resource;

/// Simulation clock resource, updated once per tick.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    /// Seconds since the simulation started, scaled.
    pub elapsed: f32,
    /// Scaled seconds since the previous tick.
    pub delta: f32,
    /// Multiplier applied to the raw frame delta.
    pub time_scale: f32,
    /// Number of completed ticks.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
