//! Entity definitions: the pointer-steered player and the autonomous bots.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::sim::constants::{player, split};
use crate::util::vec2::Vec2;

/// Unique bot identifier, allocated from the world's monotonic counter
pub type BotId = u64;

/// Opaque display color, packed as 0xRRGGBB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorTag(pub u32);

impl ColorTag {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(0..0x100_0000))
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// An autonomous bot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bot {
    pub id: BotId,
    /// Position in arena space
    pub position: Vec2,
    /// Velocity in units per frame
    pub velocity: Vec2,
    /// Collision radius, always > 0
    pub radius: f32,
    /// Display color
    pub color: ColorTag,
    /// Frames remaining before this bot may split again
    pub split_cooldown: u32,
}

impl Bot {
    pub fn new(id: BotId, position: Vec2, velocity: Vec2, radius: f32, color: ColorTag) -> Self {
        Self {
            id,
            position,
            velocity,
            radius,
            color,
            split_cooldown: 0,
        }
    }

    /// Whether this bot is currently eligible to split on contact
    pub fn can_split(&self) -> bool {
        self.split_cooldown == 0 && self.radius > split::MIN_RADIUS
    }
}

/// The single pointer-steered player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec2,
    pub radius: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            position: Vec2::new(player::START_X, player::START_Y),
            radius: player::RADIUS,
        }
    }
}
