/// How the runner turns display frames into simulation steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepPolicy {
    /// Exactly one update per display frame, whatever the frame time.
    PerFrame,
    /// Fixed-dt updates driven by an accumulator.
    Fixed(f32),
}

impl Default for StepPolicy {
    fn default() -> Self {
        StepPolicy::PerFrame
    }
}

/// Fixed timestep accumulator.
/// Ensures game logic runs at a consistent rate regardless of frame time.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        // Cap to prevent spiral of death (max 10 steps per frame)
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Drop any banked time.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

}

/// Converts display frames into update counts according to a [`StepPolicy`].
pub struct FrameClock {
    timestep: Option<FixedTimestep>,
}

impl FrameClock {
    pub fn new(policy: StepPolicy) -> Self {
        let timestep = match policy {
            StepPolicy::PerFrame => None,
            StepPolicy::Fixed(dt) => Some(FixedTimestep::new(dt)),
        };
        Self { timestep }
    }

    /// Number of updates to run for a display frame of length `frame_dt`.
    pub fn steps(&mut self, frame_dt: f32) -> u32 {
        match self.timestep.as_mut() {
            Some(ts) => ts.accumulate(frame_dt),
            None => 1,
        }
    }

    /// Called while playback is stopped so that time spent paused is never
    /// replayed on resume.
    pub fn reset(&mut self) {
        if let Some(ts) = self.timestep.as_mut() {
            ts.reset();
        }
    }
}
