//! Frame-loop driver for hosts without a scheduler of their own.
//!
//! The driver owns the [`World`] behind a single mutex and advances it from
//! a spawned tokio task at the configured tick rate. Elapsed time comes from
//! consecutive monotonic `Instant` readings and is clamped before it reaches
//! the step, so a stalled task produces one bounded catch-up frame, not a
//! lurch. Control-surface calls from other tasks go through the same mutex
//! and therefore never race a step in progress.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::SimConfig;
use crate::sim::constants::frame;
use crate::sim::snapshot::{Scene, Status};
use crate::sim::world::{ControlError, World};

/// Rolling average of step durations over the recent window
pub struct FrameTimer {
    durations: VecDeque<Duration>,
    max_samples: usize,
    target: Duration,
}

impl FrameTimer {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            durations: VecDeque::with_capacity(120),
            max_samples: 120,
            target: Duration::from_secs_f64(1.0 / tick_rate.max(1) as f64),
        }
    }

    pub fn record(&mut self, duration: Duration) {
        self.durations.push_back(duration);
        while self.durations.len() > self.max_samples {
            self.durations.pop_front();
        }
    }

    /// Average step duration over the window
    pub fn average(&self) -> Duration {
        if self.durations.is_empty() {
            return Duration::ZERO;
        }
        let sum: Duration = self.durations.iter().sum();
        sum / self.durations.len() as u32
    }

    /// Average step duration as a percentage of the frame budget (0-100+)
    pub fn budget_usage_percent(&self) -> f32 {
        (self.average().as_secs_f32() / self.target.as_secs_f32()) * 100.0
    }
}

/// Handle to a running simulation: the world, the frame task, and the
/// host-facing control surface.
///
/// Dropping the handle (or calling [`Simulation::dispose`]) stops the frame
/// task, so no callback outlives the owner.
pub struct Simulation {
    world: Arc<Mutex<World>>,
    timer: Arc<Mutex<FrameTimer>>,
    task: Option<JoinHandle<()>>,
}

impl Simulation {
    /// Create the world and start the frame loop. Must be called from
    /// within a tokio runtime.
    pub fn launch(config: &SimConfig) -> Self {
        let world = Arc::new(Mutex::new(World::new(config)));
        let timer = Arc::new(Mutex::new(FrameTimer::new(config.tick_rate)));
        let task = tokio::spawn(frame_loop(
            Arc::clone(&world),
            Arc::clone(&timer),
            config.tick_rate,
        ));
        info!(tick_rate = config.tick_rate, "frame loop started");
        Self {
            world,
            timer,
            task: Some(task),
        }
    }

    pub fn start(&self) {
        self.world.lock().start();
    }

    pub fn stop(&self) {
        self.world.lock().stop();
    }

    pub fn set_session(&self, id: &str) -> Result<(), ControlError> {
        self.world.lock().set_session(id)
    }

    pub fn spawn(&self, count: usize) {
        self.world.lock().spawn(count);
    }

    pub fn clear(&self) {
        self.world.lock().clear();
    }

    pub fn snapshot(&self) -> Status {
        self.world.lock().snapshot()
    }

    pub fn scene(&self) -> Scene {
        self.world.lock().scene()
    }

    pub fn set_pointer(&self, x: f32, y: f32) {
        self.world.lock().set_pointer(x, y);
    }

    pub fn set_arena_size(&self, width: f32, height: f32) {
        self.world.lock().set_arena_size(width, height);
    }

    /// Average step duration as a percentage of the frame budget
    pub fn frame_budget_usage(&self) -> f32 {
        self.timer.lock().budget_usage_percent()
    }

    /// Stop the frame loop. Idempotent: calling it again, or dropping the
    /// handle afterwards, is a no-op.
    pub fn dispose(&mut self) {
        if let Some(task) = self.task.take() {
            self.world.lock().stop();
            task.abort();
            info!("frame loop disposed");
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.task.is_none()
    }
}

impl Drop for Simulation {
    fn drop(&mut self) {
        self.dispose();
    }
}

async fn frame_loop(world: Arc<Mutex<World>>, timer: Arc<Mutex<FrameTimer>>, tick_rate: u32) {
    let period = Duration::from_secs_f64(1.0 / tick_rate.max(1) as f64);
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    let mut last = Instant::now();
    loop {
        interval.tick().await;
        let now = Instant::now();
        let dt = (now - last).as_secs_f32().min(frame::MAX_DT);
        last = now;

        let started = Instant::now();
        world.lock().step(dt);
        timer.lock().record(started.elapsed());
    }
}
