use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Instant,
};

/// Source of frame deltas and of the stop signal for the playback loop.
pub trait Clock {
    /// Seconds since the previous tick; never negative.
    fn tick(&mut self) -> f64;

    /// Whether the loop should stop before the next frame.
    fn should_stop(&self) -> bool;
}

/// Deterministic clock advancing a fixed step per tick.
#[derive(Clone, Debug)]
pub struct FixedStepClock {
    step: f64,
    elapsed: f64,
    limit: Option<f64>,
}

impl FixedStepClock {
    /// Clock ticking `step` seconds with no deadline.
    pub fn new(step: f64) -> Self {
        Self {
            step: if step.is_finite() { step.max(0.0) } else { 0.0 },
            elapsed: 0.0,
            limit: None,
        }
    }

    /// Clock ticking at `fps` frames per second.
    pub fn from_fps(fps: u32) -> Self {
        Self::new(1.0 / f64::from(fps.max(1)))
    }

    /// Stop once `secs` of simulated time have elapsed.
    pub fn with_limit(mut self, secs: f64) -> Self {
        self.limit = Some(secs);
        self
    }

    /// Fixed step in seconds.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Simulated seconds so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

impl Clock for FixedStepClock {
    fn tick(&mut self) -> f64 {
        self.elapsed += self.step;
        self.step
    }

    fn should_stop(&self) -> bool {
        const EPS: f64 = 1e-9;
        self.limit.is_some_and(|limit| self.elapsed + EPS >= limit)
    }
}

/// Wall-clock source with an externally controlled stop flag.
#[derive(Debug)]
pub struct SystemClock {
    last: Instant,
    stop: Arc<AtomicBool>,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    /// Clock starting now.
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag that stops playback once set (e.g. from a quit key handler).
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }
}

impl Clock for SystemClock {
    fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f64();
        self.last = now;
        dt
    }

    fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}
