//! Power-ups and the timed buffs they grant
//!
//! Buffs are expiry timestamps on the game state, not counters: collecting
//! the same kind again refreshes the expiry to `now + duration` instead of
//! stacking.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Player movement speed boost
    Speed,
    /// Enemy slow-down, gated on the held slow key
    Slow,
    /// Halved fire cadence
    RapidFire,
}

impl PowerUpKind {
    /// Uniformly random kind for an enemy drop
    pub fn roll(rng: &mut Pcg32) -> Self {
        match rng.random_range(0..3) {
            0 => PowerUpKind::Speed,
            1 => PowerUpKind::Slow,
            _ => PowerUpKind::RapidFire,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub rect: Rect,
    pub active: bool,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind, center: Vec2) -> Self {
        Self {
            kind,
            rect: Rect::from_center(center, POWERUP_SIZE, POWERUP_SIZE),
            active: true,
        }
    }
}

/// Drop every live power-up and deactivate the ones below the arena floor
pub fn advance(powerups: &mut Vec<PowerUp>, dt_ms: f64) {
    let dy = POWERUP_FALL_SPEED * (dt_ms / 1000.0) as f32;
    for pu in powerups.iter_mut() {
        pu.rect.pos.y += dy;
        if pu.rect.top() > ARENA_H {
            pu.active = false;
        }
    }
    powerups.retain(|pu| pu.active);
}

/// Active buff expiries, all refresh-not-stack
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BuffState {
    speed_until: f64,
    slow_until: f64,
    rapid_until: f64,
}

impl BuffState {
    /// Collect a power-up: the matching expiry becomes `now + duration`
    pub fn grant(&mut self, kind: PowerUpKind, now: f64) {
        let until = now + BUFF_DURATION_MS;
        match kind {
            PowerUpKind::Speed => self.speed_until = until,
            PowerUpKind::Slow => self.slow_until = until,
            PowerUpKind::RapidFire => self.rapid_until = until,
        }
    }

    pub fn speed_active(&self, now: f64) -> bool {
        now < self.speed_until
    }

    pub fn slow_active(&self, now: f64) -> bool {
        now < self.slow_until
    }

    pub fn rapid_active(&self, now: f64) -> bool {
        now < self.rapid_until
    }
}
