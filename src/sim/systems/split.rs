//! Contact mitosis and split-cooldown bookkeeping.

use smallvec::SmallVec;

use crate::sim::constants::split;
use crate::sim::entity::{Bot, ColorTag};
use crate::sim::world::World;
use crate::util::vec2::Vec2;

/// Pending child spawn: position, launch velocity, radius.
type SpawnBatch = SmallVec<[(Vec2, Vec2, f32); 4]>;

/// Split every eligible bot in contact with the player.
///
/// The splitting bot shrinks and starts its cooldown; the child launches
/// outward along the bot-to-player bearing with the same reduced radius and
/// no cooldown of its own, so a fragment may split again as soon as a later
/// frame brings it back into contact. Children join the population after
/// the pass: only bots present at frame start are examined, and exactly one
/// split happens per contact per frame. Callers gate this on run state.
pub fn resolve(world: &mut World) {
    let player_pos = world.player.position;
    let player_radius = world.player.radius;

    let mut pending = SpawnBatch::new();
    for bot in world.bots.iter_mut() {
        if !bot.can_split() {
            continue;
        }
        let dist = bot.position.distance_to(player_pos);
        if dist >= player_radius + bot.radius + split::CONTACT_PADDING {
            continue;
        }

        let new_radius = (bot.radius * split::SHRINK_FACTOR).max(split::RADIUS_FLOOR);
        bot.radius = new_radius;
        bot.split_cooldown = split::COOLDOWN_FRAMES;

        let bearing = Vec2::from_angle((player_pos - bot.position).angle());
        pending.push((
            bot.position + bearing * split::CHILD_OFFSET,
            bearing * split::LAUNCH_SPEED,
            new_radius,
        ));
    }

    for (position, velocity, radius) in pending {
        let id = world.alloc_bot_id();
        let color = ColorTag::random(&mut world.rng);
        world.bots.push(Bot::new(id, position, velocity, radius, color));
    }
}

/// Decrement every positive split cooldown by one frame. Runs regardless of
/// run state, and before contact resolution in the step, so a bot that
/// splits this frame carries its full cooldown out of the frame.
pub fn tick_cooldowns(world: &mut World) {
    for bot in world.bots.iter_mut() {
        if bot.split_cooldown > 0 {
            bot.split_cooldown -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;

    fn empty_world(seed: u64) -> World {
        World::new(&SimConfig {
            initial_bots: 0,
            rng_seed: Some(seed),
            ..SimConfig::default()
        })
    }

    fn push_bot(world: &mut World, position: Vec2, radius: f32) {
        let id = world.alloc_bot_id();
        world
            .bots
            .push(Bot::new(id, position, Vec2::ZERO, radius, ColorTag(0x010203)));
    }

    #[test]
    fn test_contact_split() {
        let mut world = empty_world(5);
        world.player.position = Vec2::new(100.0, 100.0);
        // Distance 20 is well inside the 22 + 20 + 6 contact threshold
        push_bot(&mut world, Vec2::new(80.0, 100.0), 20.0);

        resolve(&mut world);

        assert_eq!(world.bots.len(), 2);
        let parent = &world.bots[0];
        let child = &world.bots[1];
        assert!((parent.radius - 11.0).abs() < 1e-4);
        assert_eq!(parent.split_cooldown, split::COOLDOWN_FRAMES);
        assert!((child.radius - 11.0).abs() < 1e-4);
        assert_eq!(child.split_cooldown, 0);
        assert_ne!(child.id, parent.id);
    }

    #[test]
    fn test_child_launches_toward_player() {
        let mut world = empty_world(5);
        world.player.position = Vec2::new(100.0, 100.0);
        push_bot(&mut world, Vec2::new(80.0, 100.0), 20.0);

        resolve(&mut world);

        let child = &world.bots[1];
        // Bearing from the bot to the player is +x
        assert!(child.position.approx_eq(Vec2::new(86.0, 100.0), 1e-4));
        assert!(child
            .velocity
            .approx_eq(Vec2::new(split::LAUNCH_SPEED, 0.0), 1e-4));
    }

    #[test]
    fn test_no_split_out_of_range() {
        let mut world = empty_world(5);
        world.player.position = Vec2::new(100.0, 100.0);
        // 22 + 20 + 6 = 48; place the bot just outside
        push_bot(&mut world, Vec2::new(149.0, 100.0), 20.0);

        resolve(&mut world);

        assert_eq!(world.bots.len(), 1);
        assert_eq!(world.bots[0].split_cooldown, 0);
    }

    #[test]
    fn test_no_split_below_minimum_radius() {
        let mut world = empty_world(5);
        world.player.position = Vec2::new(100.0, 100.0);
        push_bot(&mut world, Vec2::new(100.0, 100.0), split::MIN_RADIUS);

        resolve(&mut world);

        assert_eq!(world.bots.len(), 1);
    }

    #[test]
    fn test_no_split_while_cooling() {
        let mut world = empty_world(5);
        world.player.position = Vec2::new(100.0, 100.0);
        push_bot(&mut world, Vec2::new(90.0, 100.0), 20.0);
        world.bots[0].split_cooldown = 10;

        resolve(&mut world);

        assert_eq!(world.bots.len(), 1);
    }

    #[test]
    fn test_radius_floor() {
        let mut world = empty_world(5);
        world.player.position = Vec2::new(100.0, 100.0);
        // 10 * 0.55 = 5.5, floored up to 6
        push_bot(&mut world, Vec2::new(95.0, 100.0), 10.0);

        resolve(&mut world);

        assert_eq!(world.bots.len(), 2);
        assert_eq!(world.bots[0].radius, split::RADIUS_FLOOR);
        assert_eq!(world.bots[1].radius, split::RADIUS_FLOOR);
    }

    #[test]
    fn test_radius_stays_positive_under_repeated_splits() {
        let mut world = empty_world(9);
        world.player.position = Vec2::new(100.0, 100.0);
        push_bot(&mut world, Vec2::new(95.0, 100.0), 28.0);

        for _ in 0..300 {
            tick_cooldowns(&mut world);
            resolve(&mut world);
            // Hold everything in contact so splits keep firing when eligible
            for bot in world.bots.iter_mut() {
                bot.position = Vec2::new(95.0, 100.0);
            }
        }

        assert!(world.bots.len() > 1);
        for bot in &world.bots {
            assert!(bot.radius >= split::RADIUS_FLOOR);
        }
    }

    #[test]
    fn test_children_do_not_split_in_their_birth_frame() {
        let mut world = empty_world(5);
        world.player.position = Vec2::new(100.0, 100.0);
        // Radius 30 splits to 16.5, which is still above the split minimum,
        // so the child would be eligible if the pass re-examined it
        push_bot(&mut world, Vec2::new(90.0, 100.0), 30.0);

        resolve(&mut world);

        assert_eq!(world.bots.len(), 2, "exactly one split per contact per frame");
    }

    #[test]
    fn test_cooldown_ticks_down_by_one() {
        let mut world = empty_world(5);
        push_bot(&mut world, Vec2::new(0.0, 0.0), 20.0);
        world.bots[0].split_cooldown = 5;

        tick_cooldowns(&mut world);
        assert_eq!(world.bots[0].split_cooldown, 4);

        tick_cooldowns(&mut world);
        assert_eq!(world.bots[0].split_cooldown, 3);
    }

    #[test]
    fn test_cooldown_stops_at_zero() {
        let mut world = empty_world(5);
        push_bot(&mut world, Vec2::new(0.0, 0.0), 20.0);

        tick_cooldowns(&mut world);

        assert_eq!(world.bots[0].split_cooldown, 0);
    }
}
