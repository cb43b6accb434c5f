//! World state and the per-frame step.
//!
//! The `World` is the only mutable shared structure in the simulation: it
//! owns the bot population, the player, the run flag and the session id,
//! and every system operates on it by reference during [`World::step`].
//! The host drives it through the control surface and reads it back through
//! [`World::snapshot`] and [`World::scene`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::config::SimConfig;
use crate::sim::constants::{arena, frame, spawn};
use crate::sim::entity::{Bot, BotId, ColorTag, Player};
use crate::sim::snapshot::{BotView, PlayerView, Scene, Status};
use crate::sim::systems::{motion, pursuit, separation, split};
use crate::util::vec2::Vec2;

/// Errors from the host-facing control surface
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControlError {
    /// A session identifier must carry at least one non-whitespace character
    #[error("session id must not be blank")]
    BlankSessionId,
}

/// The simulation world
#[derive(Debug)]
pub struct World {
    /// Bot population, in spawn order (order is irrelevant to the step)
    pub bots: Vec<Bot>,
    /// The single pointer-steered player
    pub player: Player,
    /// Gates pursuit and splitting together with the session id
    pub running: bool,
    /// Session identifier set by the host; `None` until a valid set_session
    pub session_id: Option<String>,
    pub arena_width: f32,
    pub arena_height: f32,
    /// Latest pointer target in arena space, fed by the host
    pub pointer: Vec2,
    /// Completed simulation steps
    pub tick: u64,
    pub(crate) rng: StdRng,
    next_bot_id: BotId,
}

impl World {
    /// Create a world with the configured arena and initial population.
    /// A fixed `rng_seed` makes the whole run replayable.
    pub fn new(config: &SimConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let player = Player::default();
        let mut world = Self {
            bots: Vec::new(),
            pointer: player.position,
            player,
            running: false,
            session_id: None,
            arena_width: config.arena_width,
            arena_height: config.arena_height,
            tick: 0,
            rng,
            next_bot_id: 0,
        };
        world.spawn(config.initial_bots);
        world
    }

    /// Advance the simulation by one frame.
    ///
    /// `dt` is the elapsed time in seconds since the previous frame.
    /// Non-finite or negative values collapse to zero and anything above
    /// the frame budget is clamped, so a stalled host cannot poison the
    /// integration. Pursuit and splitting require the world to be running
    /// with a session set; wander, integration, wraparound, cooldown decay
    /// and separation run every frame.
    pub fn step(&mut self, dt: f32) {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, frame::MAX_DT)
        } else {
            0.0
        };

        motion::steer_player(self, dt);
        motion::apply_wander(self);
        if self.chase_enabled() {
            pursuit::apply(self);
        }
        motion::integrate(self);
        split::tick_cooldowns(self);
        if self.chase_enabled() {
            split::resolve(self);
        }
        separation::resolve(self);
        self.tick += 1;
    }

    /// Pursuit and splitting run only while started with a session set.
    pub fn chase_enabled(&self) -> bool {
        self.running && self.session_id.is_some()
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Set the session identifier. Blank identifiers are rejected and the
    /// previous value, set or not, is left untouched.
    pub fn set_session(&mut self, id: &str) -> Result<(), ControlError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ControlError::BlankSessionId);
        }
        self.session_id = Some(id.to_string());
        Ok(())
    }

    /// Append `count` bots with randomized position, drift and radius.
    pub fn spawn(&mut self, count: usize) {
        for _ in 0..count {
            let bot = self.create_bot();
            self.bots.push(bot);
        }
    }

    /// Remove every bot. The player is unaffected.
    pub fn clear(&mut self) {
        self.bots.clear();
    }

    /// Status tuple for HUD display.
    pub fn snapshot(&self) -> Status {
        Status {
            bot_count: self.bots.len(),
            session_id: self.session_id.clone(),
            running: self.running,
        }
    }

    /// Drawing view of the player and every bot.
    pub fn scene(&self) -> Scene {
        Scene {
            tick: self.tick,
            player: PlayerView::from(&self.player),
            bots: self.bots.iter().map(BotView::from).collect(),
        }
    }

    /// Update the pointer target the player steers toward. Non-finite
    /// coordinates are dropped rather than integrated.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        if !x.is_finite() || !y.is_finite() {
            tracing::warn!("ignoring non-finite pointer target ({x}, {y})");
            return;
        }
        self.pointer = Vec2::new(x, y);
    }

    /// Adopt new arena dimensions from the host viewport, clamped to the
    /// minimum usable size.
    pub fn set_arena_size(&mut self, width: f32, height: f32) {
        if !width.is_finite() || !height.is_finite() {
            tracing::warn!("ignoring non-finite arena size {width}x{height}");
            return;
        }
        self.arena_width = width.max(arena::MIN_WIDTH);
        self.arena_height = height.max(arena::MIN_HEIGHT);
    }

    /// Allocate the next bot id. Ids are unique for the lifetime of the
    /// world and never reused, even across [`World::clear`].
    pub(crate) fn alloc_bot_id(&mut self) -> BotId {
        let id = self.next_bot_id;
        self.next_bot_id += 1;
        id
    }

    fn create_bot(&mut self) -> Bot {
        let id = self.alloc_bot_id();
        let position = Vec2::new(
            self.rng.gen_range(0.0..self.arena_width),
            self.rng.gen_range(0.0..self.arena_height),
        );
        let velocity = Vec2::new(
            self.rng.gen_range(-spawn::DRIFT..spawn::DRIFT),
            self.rng.gen_range(-spawn::DRIFT..spawn::DRIFT),
        );
        let radius = self.rng.gen_range(spawn::RADIUS_MIN..spawn::RADIUS_MAX);
        let color = ColorTag::random(&mut self.rng);
        Bot::new(id, position, velocity, radius, color)
    }
}
