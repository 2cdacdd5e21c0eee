//! Boss-only bomb encounter
//!
//! A pickup periodically drops below the boss; collecting it launches a
//! projectile locked onto the boss's position at that instant. On impact the
//! projectile deals a fixed fraction of the boss's maximum health, then spends
//! a short explosion window growing its blast radius before expiring.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::boss::Boss;
use super::geom::Rect;
use crate::aim_direction;
use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BombPickup {
    pub rect: Rect,
    pub spawned_at: f64,
    pub active: bool,
    phase: f32,
}

impl BombPickup {
    /// Spawn at a random offset below the boss
    pub fn spawn(boss_rect: &Rect, now: f64, rng: &mut Pcg32) -> Self {
        let center = Vec2::new(
            boss_rect.center().x + rng.random_range(-80.0..=80.0),
            boss_rect.bottom() + rng.random_range(20.0..=60.0),
        );
        Self {
            rect: Rect::from_center(center, BOMB_PICKUP_SIZE, BOMB_PICKUP_SIZE),
            spawned_at: now,
            active: true,
            phase: rng.random_range(0.0..std::f32::consts::TAU),
        }
    }

    /// Sway downward; expire below the arena or past the fixed lifetime
    pub fn update(&mut self, dt_ms: f64, now: f64) {
        if !self.active {
            return;
        }
        let dt_s = (dt_ms / 1000.0) as f32;
        self.phase += BOMB_PICKUP_PHASE_RATE * dt_s;
        self.rect.translate(Vec2::new(
            BOMB_PICKUP_DRIFT_SPEED * self.phase.sin() * dt_s,
            BOMB_PICKUP_FALL_SPEED * dt_s,
        ));
        if self.rect.top() > ARENA_H || now - self.spawned_at > BOMB_PICKUP_LIFETIME_MS {
            self.active = false;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BombProjectile {
    pub rect: Rect,
    /// Fixed at launch; the projectile is not re-aimed in flight
    pub vel: Vec2,
    pub exploded: bool,
    pub explosion_start: f64,
    pub blast_radius: f32,
    pub active: bool,
}

impl BombProjectile {
    /// Launch from `from` toward where the boss is right now
    pub fn launch(from: Vec2, boss_center: Vec2) -> Self {
        Self {
            rect: Rect::from_center(from, BOMB_PROJ_SIZE, BOMB_PROJ_SIZE),
            vel: aim_direction(from, boss_center) * BOMB_PROJ_SPEED,
            exploded: false,
            explosion_start: 0.0,
            blast_radius: BOMB_BLAST_START,
            active: true,
        }
    }

    /// Advance flight or blast growth; returns true on the frame the
    /// projectile detonates against the boss.
    pub fn update(&mut self, dt_ms: f64, now: f64, boss: &mut Boss) -> bool {
        if !self.active {
            return false;
        }
        if !self.exploded {
            let dt_s = (dt_ms / 1000.0) as f32;
            self.rect.translate(self.vel * dt_s);
            if self.rect.bottom() < 0.0
                || self.rect.top() > ARENA_H
                || self.rect.right() < 0.0
                || self.rect.left() > ARENA_W
            {
                self.active = false;
            } else if self.rect.overlaps(&boss.rect) {
                self.trigger(now);
                boss.apply_damage((boss.hp_max as f32 * BOMB_DAMAGE_FRACTION) as i32);
                return true;
            }
        } else {
            let t = now - self.explosion_start;
            let progress = (t / BOMB_EXPLOSION_MS).min(1.0) as f32;
            self.blast_radius = BOMB_BLAST_START + BOMB_BLAST_GROWTH * progress;
            if t >= BOMB_EXPLOSION_MS {
                self.active = false;
            }
        }
        false
    }

    /// Enter the explosion sub-state; deals no damage by itself and is
    /// idempotent.
    pub fn trigger(&mut self, now: f64) {
        if !self.exploded {
            self.exploded = true;
            self.explosion_start = now;
        }
    }
}
