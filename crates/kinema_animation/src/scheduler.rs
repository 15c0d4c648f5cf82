//! Animation scheduler
//!
//! Owns interpolators and drives them once per frame. `tick` samples the
//! wall clock and accumulates the elapsed delta into a monotonically
//! increasing progress counter; `restart` rewinds the counter to zero so an
//! input trigger can replay the registered sequence.

use slotmap::{new_key_type, SlotMap};
use std::time::Instant;

use crate::interpolator::Interpolator;

new_key_type! {
    pub struct InterpolatorId;
}

/// Drives interpolators from accumulated wall-clock time
pub struct AnimationScheduler {
    interpolators: SlotMap<InterpolatorId, Interpolator>,
    last_frame: Instant,
    elapsed_ms: f32,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            interpolators: SlotMap::with_key(),
            last_frame: Instant::now(),
            elapsed_ms: 0.0,
        }
    }

    pub fn add(&mut self, interpolator: Interpolator) -> InterpolatorId {
        self.interpolators.insert(interpolator)
    }

    pub fn get(&self, id: InterpolatorId) -> Option<&Interpolator> {
        self.interpolators.get(id)
    }

    pub fn get_mut(&mut self, id: InterpolatorId) -> Option<&mut Interpolator> {
        self.interpolators.get_mut(id)
    }

    pub fn remove(&mut self, id: InterpolatorId) -> Option<Interpolator> {
        self.interpolators.remove(id)
    }

    /// Seed callback state on every interpolator at the current progress
    ///
    /// Call once after all intervals are registered, before the frame loop.
    /// No interpolator is left running afterward.
    pub fn initialize(&mut self) {
        for (_, interpolator) in self.interpolators.iter_mut() {
            interpolator.initialize(self.elapsed_ms);
        }
    }

    /// Advance all interpolators by the wall-clock time since the last tick
    pub fn tick(&mut self) {
        let now = Instant::now();
        let dt_ms = (now - self.last_frame).as_secs_f32() * 1000.0;
        self.last_frame = now;
        self.advance(dt_ms);
    }

    /// Advance all interpolators by an explicit delta (in milliseconds)
    pub fn advance(&mut self, dt_ms: f32) {
        self.elapsed_ms += dt_ms;
        for (_, interpolator) in self.interpolators.iter_mut() {
            interpolator.update(self.elapsed_ms);
        }
    }

    /// Rewind accumulated progress to zero and re-base the clock
    ///
    /// Models the input trigger replaying the sequence. Finished flags on
    /// registered intervals are left alone: progress restarting below every
    /// window re-arms them as soon as each window is re-entered.
    pub fn restart(&mut self) {
        tracing::debug!(elapsed_ms = self.elapsed_ms, "restarting scheduler");
        self.elapsed_ms = 0.0;
        self.last_frame = Instant::now();
    }

    /// Check if any interpolator was running after the most recent update
    ///
    /// The frame loop stops scheduling once this reports false.
    pub fn has_active_animations(&self) -> bool {
        self.interpolators.iter().any(|(_, i)| i.is_running())
    }

    /// Accumulated progress in milliseconds
    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    /// Number of interpolators in the scheduler
    pub fn interpolator_count(&self) -> usize {
        self.interpolators.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}
