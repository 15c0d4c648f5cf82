//! Two-Phase Sequence Demo
//!
//! Headless rendition of the classic button-triggered element animation:
//! phase one slides a target 400px out while rotating it a full turn, phase
//! two brings both back, each with bounce easing. The sequence runs once on
//! startup and once more after a simulated trigger, to show the scheduler's
//! restart-and-replay path.
//!
//! Run with: cargo run -p kinema_demo

use anyhow::Result;
use kinema_animation::{lerp, AnimationScheduler, Easing, Interpolator};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Phase length in milliseconds
const PHASE_MS: f32 = 1000.0;
/// Sleep per frame, roughly 60fps
const FRAME: Duration = Duration::from_millis(16);

/// The render surface: a transform the callbacks write into
#[derive(Debug, Default, Clone, Copy)]
struct Transform {
    translate_x: f32,
    rotate_deg: f32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let target = Arc::new(Mutex::new(Transform::default()));

    let mut scheduler = AnimationScheduler::new();
    scheduler.add(build_sequence(target.clone())?);
    scheduler.initialize();

    tracing::info!("starting sequence");
    run_frames(&mut scheduler, &target);

    // Simulated trigger press: rewind progress and play the whole thing again
    tracing::info!("trigger pressed, replaying");
    scheduler.restart();
    run_frames(&mut scheduler, &target);

    let t = *target.lock().unwrap();
    tracing::info!(
        translate_x = t.translate_x,
        rotate_deg = t.rotate_deg,
        "sequence complete"
    );
    Ok(())
}

/// Register the two bounce-eased phases against one interpolator
fn build_sequence(target: Arc<Mutex<Transform>>) -> Result<Interpolator> {
    let easing: Easing = "easeOutBounce".parse()?;
    let mut interpolator = Interpolator::new();

    let out = target.clone();
    interpolator.register(0.0, PHASE_MS, easing, move |value, animating| {
        let mut t = out.lock().unwrap();
        t.translate_x = lerp(0.0, 400.0, value);
        t.rotate_deg = lerp(0.0, 360.0, value);
        if !animating {
            tracing::info!("phase 1 finished");
        }
    })?;

    let back = target;
    interpolator.register(PHASE_MS, PHASE_MS * 2.0, easing, move |value, animating| {
        let mut t = back.lock().unwrap();
        t.translate_x = lerp(400.0, 0.0, value);
        t.rotate_deg = lerp(360.0, 0.0, value);
        if !animating {
            tracing::info!("phase 2 finished");
        }
    })?;

    Ok(interpolator)
}

/// Tick the scheduler until no interval remains active
fn run_frames(scheduler: &mut AnimationScheduler, target: &Arc<Mutex<Transform>>) {
    loop {
        scheduler.tick();

        let t = *target.lock().unwrap();
        tracing::debug!(
            elapsed_ms = scheduler.elapsed_ms(),
            translate_x = t.translate_x,
            rotate_deg = t.rotate_deg,
            "frame"
        );

        if !scheduler.has_active_animations() {
            break;
        }
        std::thread::sleep(FRAME);
    }
}
