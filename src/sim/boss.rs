//! Boss attack state machine
//!
//! Five patterns cycle round-robin on a fixed timer; each runs its own firing
//! algorithm against the shared bullet field. Movement is a plain horizontal
//! bounce, independent of the active pattern. Difficulty modifiers are baked
//! in once at creation and never re-evaluated.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::boss_bullets::{BossBullet, BossBulletKind};
use super::geom::Rect;
use crate::consts::*;
use crate::settings::Difficulty;
use crate::{aim_direction, fan_velocity};

/// Cannon mouths as fractions of the boss width
const CANNON_FRACTIONS: [f32; 3] = [0.2, 0.5, 0.8];
/// Spread pattern ray angles from vertical, degrees
const SPREAD_ANGLES: [f32; 5] = [-25.0, -12.0, 0.0, 12.0, 25.0];
const BURST_JITTER_DEG: f32 = 10.0;
const WAVE_BULLET_COUNT: usize = 6;

const BASE_HP: f32 = 160.0;
const HP_PER_LEVEL: f32 = 80.0;
const BASE_MOVE_SPEED: f32 = 132.0;
const MOVE_SPEED_PER_LEVEL: f32 = 36.0;
const BASE_FIRE_CD_MS: f64 = 900.0;
const FIRE_CD_STEP_MS: f64 = 120.0;
const FIRE_CD_FLOOR_MS: f64 = 350.0;
const EXTREME_FIRE_CD_FLOOR_MS: f64 = 220.0;

const AIMED_SPEED: f32 = 330.0;
const AIMED_SPEED_PER_LEVEL: f32 = 18.0;
const SPREAD_SPEED: f32 = 312.0;
const SPREAD_SPEED_PER_LEVEL: f32 = 12.0;
const WAVE_FALL_SPEED: f32 = 228.0;
const WAVE_FALL_SPEED_PER_LEVEL: f32 = 15.0;
const BURST_SPEED: f32 = 372.0;
const BURST_SPEED_PER_LEVEL: f32 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackPattern {
    Aimed,
    Spread,
    Wave,
    Burst,
    Laser,
}

impl AttackPattern {
    /// Fixed round-robin order
    pub fn next(self) -> Self {
        match self {
            AttackPattern::Aimed => AttackPattern::Spread,
            AttackPattern::Spread => AttackPattern::Wave,
            AttackPattern::Wave => AttackPattern::Burst,
            AttackPattern::Burst => AttackPattern::Laser,
            AttackPattern::Laser => AttackPattern::Aimed,
        }
    }
}

/// Telegraphed laser column; the corridor is fixed when the telegraph starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Laser {
    pub rect: Rect,
    pub started_at: f64,
}

impl Laser {
    fn telegraph(now: f64, boss_bottom: f32, rng: &mut Pcg32) -> Self {
        let column_x = rng.random_range(LASER_EDGE_MARGIN..=ARENA_W - LASER_EDGE_MARGIN);
        Self {
            rect: Rect::new(
                column_x - LASER_HALF_WIDTH,
                boss_bottom,
                LASER_HALF_WIDTH * 2.0,
                ARENA_H - boss_bottom,
            ),
            started_at: now,
        }
    }

    /// True once the warn phase is over and the beam is live
    pub fn firing(&self, now: f64) -> bool {
        let elapsed = now - self.started_at;
        elapsed >= LASER_WARN_MS && elapsed < LASER_WARN_MS + LASER_FIRE_MS
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boss {
    pub rect: Rect,
    pub hp: i32,
    pub hp_max: i32,
    pub level: u32,
    pub move_speed: f32,
    pub dir: f32,
    pub fire_cd_ms: f64,
    pub pattern_duration_ms: f64,
    pub pattern: AttackPattern,
    pub last_pattern_change: f64,
    pub last_shot: f64,
    pub laser: Option<Laser>,
}

impl Boss {
    pub fn new(level: u32, difficulty: Difficulty, now: f64) -> Self {
        let steps = level.saturating_sub(1) as f32;
        let hp_max = ((BASE_HP + steps * HP_PER_LEVEL) * difficulty.mods().boss_hp) as i32;
        let mut fire_cd_ms = (BASE_FIRE_CD_MS - steps as f64 * FIRE_CD_STEP_MS).max(FIRE_CD_FLOOR_MS);
        let mut pattern_duration_ms = PATTERN_DURATION_MS;
        let mut move_speed = BASE_MOVE_SPEED + steps * MOVE_SPEED_PER_LEVEL;
        if difficulty == Difficulty::Extreme {
            fire_cd_ms = (fire_cd_ms * 0.6).max(EXTREME_FIRE_CD_FLOOR_MS);
            pattern_duration_ms *= 0.8;
            move_speed *= 1.25;
        }
        Self {
            rect: Rect::new(ARENA_W / 2.0 - BOSS_W / 2.0, BOSS_TOP, BOSS_W, BOSS_H),
            hp: hp_max,
            hp_max,
            level,
            move_speed,
            dir: 1.0,
            fire_cd_ms,
            pattern_duration_ms,
            pattern: AttackPattern::Aimed,
            last_pattern_change: now,
            last_shot: 0.0,
            laser: None,
        }
    }

    /// Advance movement, cycle patterns, and run the active firing algorithm
    pub fn update(
        &mut self,
        dt_ms: f64,
        now: f64,
        player_center: Vec2,
        field: &mut Vec<BossBullet>,
        rng: &mut Pcg32,
    ) {
        let dt_s = (dt_ms / 1000.0) as f32;

        self.rect.pos.x += self.move_speed * self.dir * dt_s;
        if self.rect.right() >= ARENA_W - BOSS_WALL_MARGIN {
            self.rect.set_right(ARENA_W - BOSS_WALL_MARGIN);
            self.dir = -1.0;
        } else if self.rect.left() <= BOSS_WALL_MARGIN {
            self.rect.set_left(BOSS_WALL_MARGIN);
            self.dir = 1.0;
        }

        if now - self.last_pattern_change >= self.pattern_duration_ms {
            self.last_pattern_change = now;
            self.pattern = self.pattern.next();
            // a pattern boundary always kills an in-progress laser
            self.laser = None;
        }

        match self.pattern {
            AttackPattern::Aimed => self.fire_aimed(now, player_center, field),
            AttackPattern::Spread => self.fire_spread(now, field),
            AttackPattern::Wave => self.fire_wave(now, field, rng),
            AttackPattern::Burst => self.fire_burst(now, field, rng),
            AttackPattern::Laser => self.run_laser(now, rng),
        }
    }

    /// Reduce health by `dmg`, clamped at zero; health never rises
    pub fn apply_damage(&mut self, dmg: i32) {
        self.hp = (self.hp - dmg.max(0)).max(0);
    }

    pub fn defeated(&self) -> bool {
        self.hp <= 0
    }

    /// The laser corridor while it is actually damaging
    pub fn laser_damage_rect(&self, now: f64) -> Option<Rect> {
        let laser = self.laser.as_ref()?;
        (self.pattern == AttackPattern::Laser && laser.firing(now)).then_some(laser.rect)
    }

    fn cannons(&self) -> [Vec2; 3] {
        CANNON_FRACTIONS.map(|rel| {
            Vec2::new(
                self.rect.left() + self.rect.width() * rel,
                self.rect.bottom() - CANNON_DROP,
            )
        })
    }

    fn fire_aimed(&mut self, now: f64, player_center: Vec2, field: &mut Vec<BossBullet>) {
        if now - self.last_shot < self.fire_cd_ms {
            return;
        }
        self.last_shot = now;
        let speed = AIMED_SPEED + AIMED_SPEED_PER_LEVEL * self.level as f32;
        let origin = Vec2::new(self.rect.center().x, self.rect.bottom());
        let vel = aim_direction(origin, player_center) * speed;
        for cannon in self.cannons() {
            field.push(BossBullet::spawn(
                cannon.x,
                cannon.y,
                vel,
                BossBulletKind::Aimed,
            ));
        }
    }

    fn fire_spread(&mut self, now: f64, field: &mut Vec<BossBullet>) {
        if now - self.last_shot < self.fire_cd_ms + 150.0 {
            return;
        }
        self.last_shot = now;
        let speed = SPREAD_SPEED + SPREAD_SPEED_PER_LEVEL * self.level as f32;
        for cannon in self.cannons() {
            for angle in SPREAD_ANGLES {
                field.push(BossBullet::spawn(
                    cannon.x,
                    cannon.y,
                    fan_velocity(angle, speed),
                    BossBulletKind::Spread,
                ));
            }
        }
    }

    fn fire_wave(&mut self, now: f64, field: &mut Vec<BossBullet>, rng: &mut Pcg32) {
        if now - self.last_shot < self.fire_cd_ms + 200.0 {
            return;
        }
        self.last_shot = now;
        let vy = WAVE_FALL_SPEED + WAVE_FALL_SPEED_PER_LEVEL * self.level as f32;
        let span = self.rect.width() - 40.0;
        for i in 0..WAVE_BULLET_COUNT {
            let x = self.rect.left() + 20.0 + i as f32 * span / (WAVE_BULLET_COUNT - 1) as f32;
            let phase = rng.random_range(0.0..std::f32::consts::TAU);
            let phase_speed = 6.6 + rng.random::<f32>() * 5.4;
            field.push(BossBullet::spawn_wave(
                x,
                self.rect.bottom() - 8.0,
                vy,
                phase,
                phase_speed,
            ));
        }
    }

    fn fire_burst(&mut self, now: f64, field: &mut Vec<BossBullet>, rng: &mut Pcg32) {
        if now - self.last_shot < BURST_CADENCE_MS {
            return;
        }
        self.last_shot = now;
        let speed = BURST_SPEED + BURST_SPEED_PER_LEVEL * self.level as f32;
        for cannon in self.cannons() {
            let angle = rng.random_range(-BURST_JITTER_DEG..BURST_JITTER_DEG);
            field.push(BossBullet::spawn(
                cannon.x,
                cannon.y,
                fan_velocity(angle, speed),
                BossBulletKind::Burst,
            ));
        }
    }

    fn run_laser(&mut self, now: f64, rng: &mut Pcg32) {
        match &self.laser {
            None => self.laser = Some(Laser::telegraph(now, self.rect.bottom(), rng)),
            Some(laser) => {
                if now - laser.started_at >= LASER_WARN_MS + LASER_FIRE_MS {
                    self.laser = None;
                }
            }
        }
    }
}
