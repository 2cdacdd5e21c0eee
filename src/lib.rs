//! Astro Strike - a vertical-scrolling arcade shoot-'em-up
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, boss patterns)
//! - `session`: Per-frame orchestration, pause gating, collaborator fan-out
//! - `render`: Draw requests handed to an external renderer
//! - `audio`: Fire-and-forget sound cues
//! - `persistence`: High score storage
//! - `settings`: Difficulty tiers and their multipliers

pub mod audio;
pub mod persistence;
pub mod render;
pub mod session;
pub mod settings;
pub mod sim;

pub use audio::{SoundCue, SoundPlayer};
pub use persistence::HighScoreStore;
pub use render::{Renderer, Sprite};
pub use session::Session;
pub use settings::Difficulty;

use glam::Vec2;

/// Game configuration constants
///
/// All velocities are pixels per second and all durations are milliseconds,
/// so the simulation stays correct under variable frame pacing.
pub mod consts {
    /// Arena dimensions (origin top-left, +y down)
    pub const ARENA_W: f32 = 800.0;
    pub const ARENA_H: f32 = 600.0;

    /// Player ship
    pub const PLAYER_W: f32 = 60.0;
    pub const PLAYER_H: f32 = 60.0;
    pub const PLAYER_SPEED: f32 = 360.0;
    /// Extra speed while the Speed buff is active
    pub const PLAYER_SPEED_BUFF: f32 = 180.0;
    /// Gap between the player's box and the arena floor at spawn
    pub const PLAYER_BOTTOM_MARGIN: f32 = 10.0;
    /// Visual tilt limit when strafing (degrees)
    pub const TILT_MAX_DEG: f32 = 22.0;
    /// Tilt easing rate (degrees per second)
    pub const TILT_RATE_DEG: f32 = 240.0;
    /// Nose point height above the ship's center
    pub const MUZZLE_RISE: f32 = 24.0;

    /// Player bullets
    pub const BULLET_W: f32 = 6.0;
    pub const BULLET_H: f32 = 16.0;
    pub const BULLET_SPEED: f32 = 540.0;
    pub const FIRE_CADENCE_MS: f64 = 200.0;
    /// Cadence while the RapidFire buff is active
    pub const RAPID_CADENCE_MS: f64 = 100.0;
    /// Sideways spawn offset for the Twin pattern
    pub const TWIN_OFFSET: f32 = 12.0;
    /// Sideways spawn offset for the Triple pattern's outer bullets
    pub const TRIPLE_OFFSET: f32 = 14.0;
    /// Outward horizontal velocity of the Triple pattern's outer bullets
    pub const TRIPLE_SPLAY_VX: f32 = 60.0;

    /// Falling enemies
    pub const ENEMY_W: f32 = 40.0;
    pub const ENEMY_H: f32 = 40.0;
    pub const ENEMY_START_COUNT: usize = 6;
    pub const ENEMY_CAP: usize = 12;
    pub const ENEMY_BASE_SPEED: f32 = 120.0;
    /// Per-level speed increment
    pub const ENEMY_LEVEL_STEP: f32 = 54.0;
    /// Base-speed increment on every boss defeat
    pub const ENEMY_DEFEAT_STEP: f32 = 48.0;
    /// Speed factor while the Slow buff is active and the slow key held
    pub const ENEMY_SLOW_FACTOR: f32 = 0.45;

    /// Power-ups
    pub const POWERUP_SIZE: f32 = 24.0;
    pub const POWERUP_FALL_SPEED: f32 = 180.0;
    pub const POWERUP_DROP_CHANCE: f64 = 0.12;
    pub const BUFF_DURATION_MS: f64 = 8000.0;

    /// Scoring and lives
    pub const KILL_SCORE: u32 = 10;
    pub const BOSS_CLEAR_SCORE: u32 = 100;
    pub const POINTS_PER_LEVEL: u32 = 250;
    pub const LIVES_START: u32 = 3;
    pub const INVULN_MS: f64 = 1200.0;
    pub const BULLET_DAMAGE: i32 = 10;

    /// Phase telegraphs
    pub const LEVEL_INTRO_MS: f64 = 1500.0;
    pub const BOSS_INTRO_MS: f64 = 1200.0;

    /// Boss
    pub const BOSS_W: f32 = 220.0;
    pub const BOSS_H: f32 = 100.0;
    pub const BOSS_TOP: f32 = 60.0;
    pub const BOSS_WALL_MARGIN: f32 = 10.0;
    pub const BOSS_BULLET_W: f32 = 10.0;
    pub const BOSS_BULLET_H: f32 = 18.0;
    /// Vertical gap between the boss's bottom edge and its cannon mouths
    pub const CANNON_DROP: f32 = 6.0;
    pub const PATTERN_DURATION_MS: f64 = 2400.0;
    pub const BURST_CADENCE_MS: f64 = 110.0;
    pub const LASER_WARN_MS: f64 = 700.0;
    pub const LASER_FIRE_MS: f64 = 600.0;
    pub const LASER_HALF_WIDTH: f32 = 8.0;
    /// Laser column keeps this far from the side walls
    pub const LASER_EDGE_MARGIN: f32 = 60.0;
    /// Horizontal drift speed of wave bullets at peak phase
    pub const WAVE_DRIFT_SPEED: f32 = 192.0;

    /// Bomb encounter
    pub const BOMB_SPAWN_INTERVAL_MS: f64 = 9000.0;
    /// Delay between boss-intro end and the first bomb spawn window
    pub const BOMB_FIRST_DELAY_MS: f64 = 200.0;
    /// Next spawn is pulled forward to at most this after an uncollected expiry
    pub const BOMB_RESPAWN_PULL_MS: f64 = 1200.0;
    pub const BOMB_PICKUP_SIZE: f32 = 28.0;
    pub const BOMB_PICKUP_LIFETIME_MS: f64 = 7000.0;
    pub const BOMB_PICKUP_FALL_SPEED: f32 = 96.0;
    pub const BOMB_PICKUP_DRIFT_SPEED: f32 = 120.0;
    /// Pickup sway phase rate (radians per second)
    pub const BOMB_PICKUP_PHASE_RATE: f32 = 3.6;
    pub const BOMB_PROJ_SIZE: f32 = 24.0;
    pub const BOMB_PROJ_SPEED: f32 = 360.0;
    /// Fraction of the boss's maximum health dealt on impact
    pub const BOMB_DAMAGE_FRACTION: f32 = 0.45;
    pub const BOMB_EXPLOSION_MS: f64 = 700.0;
    pub const BOMB_BLAST_START: f32 = 18.0;
    /// Blast radius gained over the full explosion duration
    pub const BOMB_BLAST_GROWTH: f32 = 180.0;
}

/// Unit vector from `from` toward `to`; straight down when the points coincide
#[inline]
pub fn aim_direction(from: Vec2, to: Vec2) -> Vec2 {
    let dir = to - from;
    if dir.length_squared() < 1e-6 {
        Vec2::Y
    } else {
        dir.normalize()
    }
}

/// Velocity of `speed` at `angle_deg` away from straight-down vertical
/// (positive angles lean toward +x)
#[inline]
pub fn fan_velocity(angle_deg: f32, speed: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(speed * rad.sin(), speed * rad.cos())
}
