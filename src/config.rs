use crate::sim::constants::{arena, frame, spawn};

/// Simulation configuration
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Arena width in units (normally the host viewport width)
    pub arena_width: f32,
    /// Arena height in units
    pub arena_height: f32,
    /// Bots present at world creation
    pub initial_bots: usize,
    /// Frame loop rate in Hz
    pub tick_rate: u32,
    /// Fixed seed for the world's random source; `None` seeds from entropy.
    /// Set it to make a whole run replayable.
    pub rng_seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena_width: arena::DEFAULT_WIDTH,
            arena_height: arena::DEFAULT_HEIGHT,
            initial_bots: spawn::INITIAL_BOTS,
            tick_rate: frame::TICK_RATE,
            rng_seed: None,
        }
    }
}

impl SimConfig {
    /// Load config from environment or use defaults
    pub fn load_or_default() -> Self {
        let mut config = Self::default();

        if let Ok(width) = std::env::var("ARENA_WIDTH") {
            if let Ok(parsed) = width.parse::<f32>() {
                if parsed.is_finite() && parsed >= arena::MIN_WIDTH {
                    config.arena_width = parsed;
                } else {
                    tracing::warn!("ARENA_WIDTH must be at least {}, using default", arena::MIN_WIDTH);
                }
            } else {
                tracing::warn!("Invalid ARENA_WIDTH '{}', using default", width);
            }
        }

        if let Ok(height) = std::env::var("ARENA_HEIGHT") {
            if let Ok(parsed) = height.parse::<f32>() {
                if parsed.is_finite() && parsed >= arena::MIN_HEIGHT {
                    config.arena_height = parsed;
                } else {
                    tracing::warn!("ARENA_HEIGHT must be at least {}, using default", arena::MIN_HEIGHT);
                }
            } else {
                tracing::warn!("Invalid ARENA_HEIGHT '{}', using default", height);
            }
        }

        if let Ok(bots) = std::env::var("INITIAL_BOTS") {
            if let Ok(parsed) = bots.parse::<usize>() {
                if parsed <= 10_000 {
                    config.initial_bots = parsed;
                } else {
                    tracing::warn!("INITIAL_BOTS must be 0-10000, using default");
                }
            } else {
                tracing::warn!("Invalid INITIAL_BOTS '{}', using default", bots);
            }
        }

        if let Ok(rate) = std::env::var("TICK_RATE") {
            if let Ok(parsed) = rate.parse::<u32>() {
                if (1..=240).contains(&parsed) {
                    config.tick_rate = parsed;
                } else {
                    tracing::warn!("TICK_RATE must be 1-240, using default");
                }
            } else {
                tracing::warn!("Invalid TICK_RATE '{}', using default", rate);
            }
        }

        if let Ok(seed) = std::env::var("RNG_SEED") {
            if let Ok(parsed) = seed.parse::<u64>() {
                config.rng_seed = Some(parsed);
            } else {
                tracing::warn!("Invalid RNG_SEED '{}', seeding from entropy", seed);
            }
        }

        config
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), String> {
        if !self.arena_width.is_finite() || self.arena_width < arena::MIN_WIDTH {
            return Err(format!("arena_width must be at least {}", arena::MIN_WIDTH));
        }
        if !self.arena_height.is_finite() || self.arena_height < arena::MIN_HEIGHT {
            return Err(format!("arena_height must be at least {}", arena::MIN_HEIGHT));
        }
        if self.tick_rate == 0 || self.tick_rate > 240 {
            return Err("tick_rate must be 1-240".to_string());
        }
        Ok(())
    }
}
