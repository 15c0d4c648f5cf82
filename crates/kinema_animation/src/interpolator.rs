//! Interval interpolation
//!
//! An [`Interpolator`] holds a list of registered animation intervals. Each
//! update maps a monotonically increasing progress value onto every interval:
//! intervals whose window contains the value receive a true-flagged callback
//! with the eased local progress, and an interval whose window has just been
//! passed receives exactly one false-flagged callback carrying the terminal
//! eased value. Intervals are evaluated in registration order.
//!
//! The interpolator is single-threaded and synchronous. Callbacks must not
//! re-enter the interpolator that invoked them.

use smallvec::SmallVec;

use crate::easing::Easing;
use crate::error::{AnimationError, Result};

/// Per-frame callback: receives the eased value and an is-animating flag
pub type InterpolationCallback = Box<dyn FnMut(f32, bool) + Send>;

/// A registered animation interval
struct Interval {
    /// Window start (progress units)
    start: f32,
    /// Window end (progress units), always greater than start
    end: f32,
    /// Curve applied to the window-local progress
    easing: Easing,
    /// Receives (eased value, is_animating) while active, then once on finish
    callback: InterpolationCallback,
    /// Set when the finishing callback has fired; re-armed on window re-entry
    finished: bool,
}

/// Maps an advancing progress value onto registered intervals
pub struct Interpolator {
    intervals: SmallVec<[Interval; 4]>,
    running: bool,
}

impl Interpolator {
    pub fn new() -> Self {
        Self {
            intervals: SmallVec::new(),
            running: false,
        }
    }

    /// Register an animation interval
    ///
    /// `callback` receives the eased window-local progress and `true` while
    /// the window contains the progress value, then the fully-eased terminal
    /// value and `false` exactly once when the window is passed.
    ///
    /// Fails with [`AnimationError::InvalidInterval`] unless `start < end`;
    /// nothing is appended on error.
    pub fn register<C>(&mut self, start: f32, end: f32, easing: Easing, callback: C) -> Result<()>
    where
        C: FnMut(f32, bool) + Send + 'static,
    {
        if start >= end {
            return Err(AnimationError::InvalidInterval { start, end });
        }

        self.intervals.push(Interval {
            start,
            end,
            easing,
            callback: Box::new(callback),
            finished: false,
        });
        Ok(())
    }

    /// Register an interval with linear easing
    pub fn register_linear<C>(&mut self, start: f32, end: f32, callback: C) -> Result<()>
    where
        C: FnMut(f32, bool) + Send + 'static,
    {
        self.register(start, end, Easing::Linear, callback)
    }

    /// Seed initial callback state without starting to run
    ///
    /// Runs one `update` pass (typically at progress 0) so callbacks can
    /// establish their baseline state, then forces the running flag to false
    /// even if the pass landed inside an interval's window.
    pub fn initialize(&mut self, progress: f32) {
        self.update(progress);
        self.running = false;
    }

    /// Advance every interval to the given progress value
    ///
    /// Intended to be called once per frame with a monotonically increasing
    /// value. After the call, [`is_running`](Self::is_running) reports
    /// whether any interval was active during this pass.
    pub fn update(&mut self, progress: f32) {
        self.running = false;

        for interval in &mut self.intervals {
            if progress >= interval.start && progress <= interval.end {
                self.running = true;
                interval.finished = false;
                let sp = scaled_progress(progress, interval.start, interval.end);
                (interval.callback)(interval.easing.apply(sp), true);
            } else if progress > interval.end && !interval.finished {
                interval.finished = true;
                tracing::debug!(
                    start = interval.start,
                    end = interval.end,
                    "interval finished"
                );
                (interval.callback)(interval.easing.apply(1.0), false);
            }
        }
    }

    /// Drop all registered intervals
    pub fn clear(&mut self) {
        self.intervals.clear();
        self.running = false;
    }

    /// Whether any interval was active during the most recent update
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of registered intervals
    pub fn interval_count(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

impl Default for Interpolator {
    fn default() -> Self {
        Self::new()
    }
}

/// Linear interpolation between `a` and `b`
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}

/// Progress normalized to an interval's window, clamped to [0, 1]
pub fn scaled_progress(progress: f32, start: f32, end: f32) -> f32 {
    ((progress - start) / (end - start)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Recorder shared with a callback: collects (value, is_animating) pairs
    fn recorder() -> Arc<Mutex<Vec<(f32, bool)>>> {
        Arc::new(Mutex::new(Vec::new()))
    }

    #[test]
    fn scaled_progress_clamps_outside_window() {
        assert_eq!(scaled_progress(500.0, 0.0, 1000.0), 0.5);
        assert_eq!(scaled_progress(-100.0, 0.0, 1000.0), 0.0);
        assert_eq!(scaled_progress(2000.0, 0.0, 1000.0), 1.0);
        assert_eq!(scaled_progress(200.0, 500.0, 1500.0), 0.0);
    }

    #[test]
    fn lerp_interpolates() {
        assert_eq!(lerp(0.0, 400.0, 0.5), 200.0);
        assert_eq!(lerp(400.0, 0.0, 1.0), 0.0);
        assert_eq!(lerp(-10.0, 10.0, 0.25), -5.0);
    }

    #[test]
    fn update_inside_window_fires_one_true_callback() {
        let calls = recorder();
        let sink = calls.clone();
        let mut interpolator = Interpolator::new();
        interpolator
            .register_linear(0.0, 1000.0, move |value, animating| {
                sink.lock().unwrap().push((value, animating));
            })
            .unwrap();

        interpolator.update(500.0);

        assert!(interpolator.is_running());
        assert_eq!(*calls.lock().unwrap(), vec![(0.5, true)]);
    }

    #[test]
    fn eased_value_uses_registered_curve() {
        let calls = recorder();
        let sink = calls.clone();
        let mut interpolator = Interpolator::new();
        interpolator
            .register(0.0, 1000.0, Easing::EaseInQuad, move |value, animating| {
                sink.lock().unwrap().push((value, animating));
            })
            .unwrap();

        interpolator.update(500.0);

        assert_eq!(*calls.lock().unwrap(), vec![(0.25, true)]);
    }

    #[test]
    fn finish_fires_exactly_once() {
        let calls = recorder();
        let sink = calls.clone();
        let mut interpolator = Interpolator::new();
        interpolator
            .register_linear(0.0, 1000.0, move |value, animating| {
                sink.lock().unwrap().push((value, animating));
            })
            .unwrap();

        interpolator.update(500.0);
        interpolator.update(1500.0);
        interpolator.update(2000.0);

        let calls = calls.lock().unwrap();
        assert_eq!(*calls, vec![(0.5, true), (1.0, false)]);
    }

    #[test]
    fn finish_carries_terminal_eased_value() {
        let calls = recorder();
        let sink = calls.clone();
        let mut interpolator = Interpolator::new();
        interpolator
            .register(0.0, 1000.0, Easing::EaseOutBounce, move |value, animating| {
                sink.lock().unwrap().push((value, animating));
            })
            .unwrap();

        // Jump straight past the window without ever being inside it
        interpolator.update(1500.0);

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (value, animating) = calls[0];
        assert!(!animating);
        assert!((value - 1.0).abs() < 0.001);
        assert!(!interpolator.is_running());
    }

    #[test]
    fn progress_before_window_fires_nothing() {
        let calls = recorder();
        let sink = calls.clone();
        let mut interpolator = Interpolator::new();
        interpolator
            .register_linear(500.0, 1500.0, move |value, animating| {
                sink.lock().unwrap().push((value, animating));
            })
            .unwrap();

        interpolator.update(200.0);

        assert!(calls.lock().unwrap().is_empty());
        assert!(!interpolator.is_running());
    }

    #[test]
    fn initialize_seeds_state_without_running() {
        let calls = recorder();
        let sink = calls.clone();
        let mut interpolator = Interpolator::new();
        // Window starts at 0, so the zero-progress pass matches its boundary
        interpolator
            .register_linear(0.0, 1000.0, move |value, animating| {
                sink.lock().unwrap().push((value, animating));
            })
            .unwrap();

        interpolator.initialize(0.0);

        assert_eq!(*calls.lock().unwrap(), vec![(0.0, true)]);
        assert!(!interpolator.is_running());
    }

    #[test]
    fn overlapping_windows_fire_in_registration_order() {
        let order = Arc::new(Mutex::new(Vec::new()));

        let mut interpolator = Interpolator::new();
        let first = order.clone();
        interpolator
            .register_linear(0.0, 1000.0, move |value, animating| {
                first.lock().unwrap().push(("first", value, animating));
            })
            .unwrap();
        let second = order.clone();
        interpolator
            .register_linear(500.0, 1500.0, move |value, animating| {
                second.lock().unwrap().push(("second", value, animating));
            })
            .unwrap();

        interpolator.update(700.0);

        let order = order.lock().unwrap();
        assert_eq!(order.len(), 2);
        assert_eq!(order[0], ("first", 0.7, true));
        assert_eq!(order[1], ("second", 0.2, true));
        assert!(interpolator.is_running());
    }

    #[test]
    fn finishing_interval_does_not_clobber_running_flag() {
        // An interval finishing on the same pass as a still-active one must
        // leave the aggregate flag true.
        let mut interpolator = Interpolator::new();
        interpolator.register_linear(0.0, 500.0, |_, _| {}).unwrap();
        interpolator.register_linear(0.0, 2000.0, |_, _| {}).unwrap();

        interpolator.update(100.0);
        interpolator.update(1000.0);

        assert!(interpolator.is_running());
    }

    #[test]
    fn replay_rearms_finish() {
        let calls = recorder();
        let sink = calls.clone();
        let mut interpolator = Interpolator::new();
        interpolator
            .register_linear(0.0, 1000.0, move |value, animating| {
                sink.lock().unwrap().push((value, animating));
            })
            .unwrap();

        // First run through the window
        interpolator.update(500.0);
        interpolator.update(1500.0);
        // Replay from below the window, as a reset trigger does
        interpolator.update(250.0);
        interpolator.update(1200.0);
        interpolator.update(1800.0);

        let calls = calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![
                (0.5, true),
                (1.0, false),
                (0.25, true),
                (1.0, false),
            ]
        );
    }

    #[test]
    fn register_rejects_inverted_interval() {
        let mut interpolator = Interpolator::new();

        let err = interpolator
            .register_linear(1000.0, 1000.0, |_, _| {})
            .unwrap_err();
        assert!(matches!(
            err,
            AnimationError::InvalidInterval { start, end } if start == 1000.0 && end == 1000.0
        ));

        assert!(interpolator.register_linear(500.0, 100.0, |_, _| {}).is_err());
        assert!(interpolator.is_empty());
    }

    #[test]
    fn clear_drops_intervals_and_running_state() {
        let mut interpolator = Interpolator::new();
        interpolator.register_linear(0.0, 1000.0, |_, _| {}).unwrap();
        interpolator.update(500.0);
        assert!(interpolator.is_running());

        interpolator.clear();

        assert!(!interpolator.is_running());
        assert_eq!(interpolator.interval_count(), 0);

        // A cleared interpolator ignores further updates
        interpolator.update(600.0);
        assert!(!interpolator.is_running());
    }
}
