//! Falling enemies
//!
//! The wave is a constant-size collection: an enemy that leaves the bottom of
//! the arena is recycled to a random spot above the top rather than being
//! destroyed. Velocity is not stored per enemy; the tick computes one shared
//! speed per frame from level, difficulty, and the slow buff.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use crate::consts::*;

/// Fresh spawns start this far above the top edge at most
const SPAWN_CEILING: f32 = 250.0;
/// Recycled enemies re-enter from a slightly shallower band
const RECYCLE_CEILING: f32 = 200.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallingEnemy {
    pub rect: Rect,
}

impl FallingEnemy {
    /// A new enemy somewhere in the off-screen spawn band
    pub fn new(rng: &mut Pcg32) -> Self {
        Self {
            rect: Rect::new(
                rng.random_range(0.0..=ARENA_W - ENEMY_W),
                rng.random_range(-SPAWN_CEILING..=-ENEMY_H),
                ENEMY_W,
                ENEMY_H,
            ),
        }
    }

    /// Teleport back above the top edge; horizontal bounds always hold
    pub fn recycle(&mut self, rng: &mut Pcg32) {
        self.rect.pos.x = rng.random_range(0.0..=ARENA_W - ENEMY_W);
        self.rect.pos.y = rng.random_range(-RECYCLE_CEILING..=-ENEMY_H);
    }
}

pub fn spawn_wave(count: usize, rng: &mut Pcg32) -> Vec<FallingEnemy> {
    (0..count).map(|_| FallingEnemy::new(rng)).collect()
}

/// Move every enemy down by the shared speed, recycling the ones that exit
pub fn advance(enemies: &mut [FallingEnemy], dt_ms: f64, speed: f32, rng: &mut Pcg32) {
    let dy = speed * (dt_ms / 1000.0) as f32;
    for enemy in enemies.iter_mut() {
        enemy.rect.pos.y += dy;
        if enemy.rect.top() > ARENA_H {
            enemy.recycle(rng);
        }
    }
}
