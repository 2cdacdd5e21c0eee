//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Timers and velocities are ms-scaled, never per-frame constants
//! - Seeded RNG only, owned by the game state
//! - No rendering, audio, or platform dependencies

pub mod bomb;
pub mod boss;
pub mod boss_bullets;
pub mod clock;
pub mod enemy;
pub mod geom;
pub mod player;
pub mod powerup;
pub mod projectile;
pub mod tick;

pub use bomb::{BombPickup, BombProjectile};
pub use boss::{AttackPattern, Boss, Laser};
pub use boss_bullets::{BossBullet, BossBulletKind, WaveMotion};
pub use clock::SimClock;
pub use enemy::FallingEnemy;
pub use geom::Rect;
pub use player::{Player, ShipClass};
pub use powerup::{BuffState, PowerUp, PowerUpKind};
pub use projectile::Bullet;
pub use tick::{GameEvent, GamePhase, GameState, TickInput, tick};
