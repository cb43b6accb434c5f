/// Frame timing constants
pub mod frame {
    /// Default simulation tick rate in Hz
    pub const TICK_RATE: u32 = 60;
    /// Tick duration in milliseconds
    pub const TICK_DURATION_MS: u64 = 1000 / TICK_RATE as u64;
    /// Upper bound on a single step's delta time in seconds.
    /// Bounds the worst-case step after a stall (tab switch, debugger pause).
    pub const MAX_DT: f32 = 0.06;
}

/// Player steering constants
pub mod player {
    /// Exponential approach rate toward the pointer target (per second)
    pub const APPROACH_RATE: f32 = 8.0;
    /// Starting position
    pub const START_X: f32 = 100.0;
    pub const START_Y: f32 = 100.0;
    /// Fixed player radius
    pub const RADIUS: f32 = 22.0;
}

/// Bot motion constants
pub mod motion {
    /// Idle wander jitter amplitude per axis per frame (velocity delta
    /// drawn from Uniform(-JITTER, JITTER))
    pub const JITTER: f32 = 0.03;
    /// Maximum bot speed in units per frame
    pub const MAX_SPEED: f32 = 2.2;
    /// How far past an arena edge a bot may drift before being recycled
    /// to the opposite margin
    pub const WRAP_MARGIN: f32 = 50.0;
}

/// Chase behavior constants
pub mod pursuit {
    /// Per-axis jitter applied to the chase target around the player
    pub const TARGET_JITTER: f32 = 10.0;
    /// Acceleration magnitude added toward the chase target per frame
    pub const ACCEL: f32 = 0.06;
    /// Bots larger than this radius chase at half acceleration
    pub const SLUGGISH_RADIUS: f32 = 30.0;
    pub const SLUGGISH_FACTOR: f32 = 0.5;
    /// Distance floor to keep the direction division well-defined
    pub const MIN_DISTANCE: f32 = 0.0001;
}

/// Mitosis constants
pub mod split {
    /// Bots at or below this radius never split
    pub const MIN_RADIUS: f32 = 8.0;
    /// Extra contact slack added to the sum of radii
    pub const CONTACT_PADDING: f32 = 6.0;
    /// Radius multiplier applied to a splitting bot
    pub const SHRINK_FACTOR: f32 = 0.55;
    /// Lower bound on post-split radius
    pub const RADIUS_FLOOR: f32 = 6.0;
    /// Frames a bot must wait after splitting before it may split again
    pub const COOLDOWN_FRAMES: u32 = 120;
    /// Child spawn offset along the bot-to-player bearing
    pub const CHILD_OFFSET: f32 = 6.0;
    /// Child launch speed along the bearing, units per frame
    pub const LAUNCH_SPEED: f32 = 4.2;
}

/// Pairwise separation constants
pub mod separation {
    /// Extra clearance kept between bot surfaces
    pub const PADDING: f32 = 2.0;
    /// Degenerate-normal fallback distance for coincident bots
    pub const MIN_DISTANCE: f32 = 0.0001;
}

/// Spawn constants
pub mod spawn {
    /// Bots added by a spawn command when the host gives no count
    pub const DEFAULT_COUNT: usize = 3;
    /// Initial population at world creation
    pub const INITIAL_BOTS: usize = 6;
    /// Radius range for spawned bots
    pub const RADIUS_MIN: f32 = 10.0;
    pub const RADIUS_MAX: f32 = 28.0;
    /// Initial per-axis drift velocity drawn from Uniform(-DRIFT, DRIFT)
    pub const DRIFT: f32 = 0.4;
}

/// Arena defaults (the host viewport normally supplies the real dimensions)
pub mod arena {
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;
    /// Smallest usable arena, matching the host's minimum canvas size
    pub const MIN_WIDTH: f32 = 300.0;
    pub const MIN_HEIGHT: f32 = 200.0;
}
