//! Player steering and bot motion integration.
//!
//! Bot velocity is a per-step displacement, not a per-second rate: positions
//! advance by one velocity per frame regardless of `dt`. Only the player's
//! pointer approach scales with elapsed time.

use rand::Rng;

use crate::sim::constants::{motion, player};
use crate::sim::world::World;
use crate::util::vec2::Vec2;

/// Move the player toward the pointer target by exponential approach:
/// `position += (pointer - position) * min(1, dt * rate)`.
pub fn steer_player(world: &mut World, dt: f32) {
    let delta = world.pointer - world.player.position;
    world.player.position += delta * (dt * player::APPROACH_RATE).min(1.0);
}

/// Add idle wander jitter to every bot's velocity. Runs regardless of run
/// state, so a stopped world still drifts.
pub fn apply_wander(world: &mut World) {
    let World { bots, rng, .. } = world;
    for bot in bots.iter_mut() {
        bot.velocity += Vec2::new(
            rng.gen_range(-motion::JITTER..motion::JITTER),
            rng.gen_range(-motion::JITTER..motion::JITTER),
        );
    }
}

/// Clamp bot speed, advance positions by one frame's displacement, and
/// recycle anything past the wrap margin to the opposite edge.
pub fn integrate(world: &mut World) {
    let (width, height) = (world.arena_width, world.arena_height);
    for bot in world.bots.iter_mut() {
        bot.velocity = bot.velocity.clamp_length(motion::MAX_SPEED);
        bot.position += bot.velocity;
        bot.position.x = wrap_axis(bot.position.x, width);
        bot.position.y = wrap_axis(bot.position.y, height);
    }
}

/// Teleport a coordinate that drifted past the margin to the opposite
/// margin. At most one teleport per call, so a crossing never bounces.
fn wrap_axis(value: f32, extent: f32) -> f32 {
    if value < -motion::WRAP_MARGIN {
        extent + motion::WRAP_MARGIN
    } else if value > extent + motion::WRAP_MARGIN {
        -motion::WRAP_MARGIN
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim::entity::{Bot, ColorTag};

    fn empty_world(seed: u64) -> World {
        World::new(&SimConfig {
            initial_bots: 0,
            rng_seed: Some(seed),
            ..SimConfig::default()
        })
    }

    fn push_bot(world: &mut World, position: Vec2, velocity: Vec2, radius: f32) {
        let id = world.alloc_bot_id();
        world
            .bots
            .push(Bot::new(id, position, velocity, radius, ColorTag(0x123456)));
    }

    #[test]
    fn test_player_approaches_pointer() {
        let mut world = empty_world(1);
        world.player.position = Vec2::new(0.0, 0.0);
        world.pointer = Vec2::new(100.0, 0.0);

        // dt * rate = 0.0125 * 8 = 0.1, so the player covers 10% of the gap
        steer_player(&mut world, 0.0125);
        assert!(world.player.position.approx_eq(Vec2::new(10.0, 0.0), 1e-4));
    }

    #[test]
    fn test_player_approach_factor_capped_at_one() {
        let mut world = empty_world(1);
        world.player.position = Vec2::new(0.0, 0.0);
        world.pointer = Vec2::new(40.0, 30.0);

        // dt * rate > 1 would overshoot; the cap lands exactly on target
        steer_player(&mut world, 0.5);
        assert!(world.player.position.approx_eq(world.pointer, 1e-4));
    }

    #[test]
    fn test_wander_changes_velocity_within_jitter() {
        let mut world = empty_world(3);
        push_bot(&mut world, Vec2::new(50.0, 50.0), Vec2::ZERO, 12.0);

        apply_wander(&mut world);

        let v = world.bots[0].velocity;
        assert!(v != Vec2::ZERO);
        assert!(v.x.abs() <= motion::JITTER && v.y.abs() <= motion::JITTER);
    }

    #[test]
    fn test_integrate_clamps_speed() {
        let mut world = empty_world(1);
        push_bot(&mut world, Vec2::new(100.0, 100.0), Vec2::new(10.0, 0.0), 12.0);

        integrate(&mut world);

        let bot = &world.bots[0];
        assert!((bot.velocity.length() - motion::MAX_SPEED).abs() < 1e-4);
        assert!((bot.position.x - (100.0 + motion::MAX_SPEED)).abs() < 1e-4);
    }

    #[test]
    fn test_integrate_advances_by_velocity_per_frame() {
        let mut world = empty_world(1);
        push_bot(&mut world, Vec2::new(10.0, 10.0), Vec2::new(1.5, -0.5), 12.0);

        integrate(&mut world);

        assert!(world.bots[0]
            .position
            .approx_eq(Vec2::new(11.5, 9.5), 1e-4));
    }

    #[test]
    fn test_wraparound_right_edge() {
        let mut world = empty_world(1);
        let width = world.arena_width;
        push_bot(
            &mut world,
            Vec2::new(width + motion::WRAP_MARGIN - 0.5, 10.0),
            Vec2::new(2.0, 0.0),
            12.0,
        );

        integrate(&mut world);

        assert!((world.bots[0].position.x - -motion::WRAP_MARGIN).abs() < 1e-4);
    }

    #[test]
    fn test_wraparound_single_teleport_per_crossing() {
        let mut world = empty_world(1);
        push_bot(
            &mut world,
            Vec2::new(-motion::WRAP_MARGIN + 1.0, 10.0),
            Vec2::new(-2.0, 0.0),
            12.0,
        );

        // First step crosses the left margin and recycles to the right one
        integrate(&mut world);
        let width = world.arena_width;
        assert!((world.bots[0].position.x - (width + motion::WRAP_MARGIN)).abs() < 1e-4);

        // Next step drifts back inward, no second teleport
        integrate(&mut world);
        assert!(
            (world.bots[0].position.x - (width + motion::WRAP_MARGIN - 2.0)).abs() < 1e-4
        );
    }

    #[test]
    fn test_vertical_wraparound() {
        let mut world = empty_world(1);
        let height = world.arena_height;
        push_bot(
            &mut world,
            Vec2::new(10.0, height + motion::WRAP_MARGIN + 5.0),
            Vec2::ZERO,
            12.0,
        );

        integrate(&mut world);

        assert!((world.bots[0].position.y - -motion::WRAP_MARGIN).abs() < 1e-4);
    }
}
