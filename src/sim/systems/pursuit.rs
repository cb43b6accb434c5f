//! Chase behavior: bots accelerate toward a jittered point near the player.

use rand::Rng;

use crate::sim::constants::pursuit;
use crate::sim::world::World;
use crate::util::vec2::Vec2;

/// Bias every bot's velocity toward the player.
///
/// The chase target is jittered around the player each frame so the swarm
/// spreads instead of stacking on one point. The acceleration is a fixed
/// magnitude, halved for large bots, and the distance carries a small
/// additive floor to keep the direction division well-defined when a bot
/// sits on the target. Callers gate this on the world's run state.
pub fn apply(world: &mut World) {
    let player_pos = world.player.position;
    let World { bots, rng, .. } = world;
    for bot in bots.iter_mut() {
        let target = player_pos
            + Vec2::new(
                rng.gen_range(-pursuit::TARGET_JITTER..pursuit::TARGET_JITTER),
                rng.gen_range(-pursuit::TARGET_JITTER..pursuit::TARGET_JITTER),
            );
        let delta = target - bot.position;
        let dist = delta.length() + pursuit::MIN_DISTANCE;
        let accel = if bot.radius > pursuit::SLUGGISH_RADIUS {
            pursuit::ACCEL * pursuit::SLUGGISH_FACTOR
        } else {
            pursuit::ACCEL
        };
        bot.velocity += delta * (accel / dist);
    }
}
