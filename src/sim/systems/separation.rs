//! Pairwise bot separation.
//!
//! Positional correction only: overlapping bots are pushed apart along the
//! connecting normal, half the overlap each, with no velocity exchange. The
//! pass is an exhaustive O(n²) scan over unordered pairs, which is fine at
//! the demo-scale populations this sim targets; a spatial grid would be the
//! upgrade path for much larger swarms.

use crate::sim::constants::separation;
use crate::sim::world::World;

/// Resolve overlap between every unordered pair of bots. The player is not
/// part of this pass. Runs every frame regardless of run state.
pub fn resolve(world: &mut World) {
    let bots = &mut world.bots;
    let count = bots.len();
    for i in 0..count {
        for j in (i + 1)..count {
            let (head, tail) = bots.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            let delta = b.position - a.position;
            let mut dist = delta.length();
            if dist == 0.0 {
                // Coincident bots get a degenerate normal instead of a NaN
                dist = separation::MIN_DISTANCE;
            }
            let min_dist = a.radius + b.radius + separation::PADDING;
            if dist < min_dist {
                let overlap = (min_dist - dist) * 0.5;
                let normal = delta * (1.0 / dist);
                a.position -= normal * overlap;
                b.position += normal * overlap;
            }
        }
    }
}
