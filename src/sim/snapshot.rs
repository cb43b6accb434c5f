//! Read-only views the host consumes: a status tuple for HUD display and a
//! scene description for drawing. The presentation layer never reaches into
//! simulation internals; these are all it gets.

use serde::Serialize;

use crate::sim::entity::{Bot, BotId, ColorTag, Player};
use crate::util::vec2::Vec2;

/// Control-surface status for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Status {
    pub bot_count: usize,
    pub session_id: Option<String>,
    pub running: bool,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub tick: u64,
    pub player: PlayerView,
    pub bots: Vec<BotView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct BotView {
    pub id: BotId,
    pub position: Vec2,
    pub radius: f32,
    pub color: ColorTag,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            position: player.position,
            radius: player.radius,
        }
    }
}

impl From<&Bot> for BotView {
    fn from(bot: &Bot) -> Self {
        Self {
            id: bot.id,
            position: bot.position,
            radius: bot.radius,
            color: bot.color,
        }
    }
}
