//! Per-frame simulation step
//!
//! One `tick` call per rendered frame, no internal parallelism. Within a
//! frame the entity categories always update in the same order, so e.g. a
//! boss volley still lands on the frame the boss dies: boss-bullet collision
//! resolves before the defeat check.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bomb::{BombPickup, BombProjectile};
use super::boss::Boss;
use super::boss_bullets::{self, BossBullet};
use super::clock::SimClock;
use super::enemy::{self, FallingEnemy};
use super::player::{Player, ShipClass};
use super::powerup::{self, BuffState, PowerUp, PowerUpKind};
use super::projectile::{self, Bullet};
use crate::consts::*;
use crate::settings::Difficulty;
use glam::Vec2;

/// Snapshot of the held keys for one frame (discrete keys such as
/// pause/restart belong to the host UI, not the simulation)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
    /// Modifier that activates the Slow buff while held
    pub slow: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Telegraph before a level's combat starts
    LevelIntro,
    /// Active gameplay
    Playing,
    /// Telegraph between boss spawn and boss combat
    BossIntro,
    /// Run ended
    GameOver,
}

/// Things that happened during a tick; drained by the session and fanned out
/// to the sound player, the log, and the high score store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    ShotFired,
    EnemyDestroyed,
    PowerUpDropped,
    PowerUpCollected,
    PlayerHit,
    BombCollected,
    BombExploded,
    BossSpawned { level: u32 },
    BossDefeated { level: u32 },
    GameOver { score: u32 },
}

/// The whole game in one aggregate; recreated wholesale on restart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub seed: u64,
    pub difficulty: Difficulty,
    pub ship: ShipClass,
    pub clock: SimClock,
    pub phase: GamePhase,
    pub level: u32,
    pub score: u32,
    pub lives: u32,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<FallingEnemy>,
    pub powerups: Vec<PowerUp>,
    pub buffs: BuffState,
    pub enemy_base_speed: f32,
    pub last_shot: f64,
    pub invulnerable_until: f64,
    pub boss: Option<Boss>,
    pub boss_bullets: Vec<BossBullet>,
    /// Levels whose boss has already been cleared; blocks re-triggering
    pub cleared_bosses: HashSet<u32>,
    pub bomb_pickup: Option<BombPickup>,
    pub bombs: Vec<BombProjectile>,
    pub next_bomb_spawn: f64,
    pub intro_end: f64,
    pub boss_intro_end: f64,
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    pub fn new(seed: u64, difficulty: Difficulty, ship: ShipClass) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let enemies = enemy::spawn_wave(difficulty.starting_enemies(), &mut rng);
        Self {
            seed,
            difficulty,
            ship,
            clock: SimClock::new(),
            phase: GamePhase::LevelIntro,
            level: 1,
            score: 0,
            lives: LIVES_START,
            player: Player::new(),
            bullets: Vec::new(),
            enemies,
            powerups: Vec::new(),
            buffs: BuffState::default(),
            enemy_base_speed: ENEMY_BASE_SPEED,
            last_shot: 0.0,
            invulnerable_until: 0.0,
            boss: None,
            boss_bullets: Vec::new(),
            cleared_bosses: HashSet::new(),
            bomb_pickup: None,
            bombs: Vec::new(),
            next_bomb_spawn: 0.0,
            intro_end: LEVEL_INTRO_MS,
            boss_intro_end: 0.0,
            events: Vec::new(),
            rng,
        }
    }

    /// Enemy fall speed for this frame
    fn enemy_speed(&self, now: f64, slow_held: bool) -> f32 {
        let mut speed = (self.enemy_base_speed
            + self.level.saturating_sub(1) as f32 * ENEMY_LEVEL_STEP)
            * self.difficulty.mods().enemy_speed;
        // the slow effect needs both the buff and the held modifier
        if self.buffs.slow_active(now) && slow_held {
            speed *= ENEMY_SLOW_FACTOR;
        }
        speed
    }

    /// Back to a level telegraph: fresh lives, spawn pose, transient
    /// collections emptied
    fn enter_level_intro(&mut self, now: f64) {
        self.lives = LIVES_START;
        self.player.reset();
        self.bullets.clear();
        self.boss_bullets.clear();
        self.powerups.clear();
        self.bombs.clear();
        self.bomb_pickup = None;
        self.invulnerable_until = 0.0;
        self.intro_end = now + LEVEL_INTRO_MS;
        self.phase = GamePhase::LevelIntro;
    }

    /// One life lost: invulnerability window opens, player respawns
    fn hit_player(&mut self, now: f64) {
        self.lives = self.lives.saturating_sub(1);
        self.invulnerable_until = now + INVULN_MS;
        self.player.reset();
        self.events.push(GameEvent::PlayerHit);
    }
}

/// Advance the whole game by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f64) {
    let now = state.clock.advance(dt_ms);

    match state.phase {
        GamePhase::LevelIntro => {
            if now >= state.intro_end {
                state.phase = GamePhase::Playing;
            }
            return;
        }
        GamePhase::BossIntro => {
            if now >= state.boss_intro_end {
                state.phase = GamePhase::Playing;
            }
            return;
        }
        GamePhase::GameOver => return,
        GamePhase::Playing => {}
    }

    // buffs feed the player's speed and cadence for this frame
    state.player.speed = PLAYER_SPEED
        + if state.buffs.speed_active(now) {
            PLAYER_SPEED_BUFF
        } else {
            0.0
        };
    state.player.update(dt_ms, input);

    let cadence = if state.buffs.rapid_active(now) {
        RAPID_CADENCE_MS
    } else {
        FIRE_CADENCE_MS
    };
    if input.fire && now - state.last_shot >= cadence {
        state.last_shot = now;
        projectile::spawn_shots(&mut state.bullets, state.player.muzzle(), state.ship);
        state.events.push(GameEvent::ShotFired);
    }

    // boss trigger: once per level, never while one is already up
    if state.boss.is_none()
        && state.score >= POINTS_PER_LEVEL * state.level
        && !state.cleared_bosses.contains(&state.level)
    {
        state.boss = Some(Boss::new(state.level, state.difficulty, now));
        state.phase = GamePhase::BossIntro;
        state.boss_intro_end = now + BOSS_INTRO_MS;
        state.next_bomb_spawn = state.boss_intro_end + BOMB_FIRST_DELAY_MS;
        state.events.push(GameEvent::BossSpawned { level: state.level });
        return;
    }

    if state.boss.is_none() {
        level_step(state, input, dt_ms, now);
    } else {
        boss_step(state, dt_ms, now);
    }

    if state.lives == 0 && state.phase == GamePhase::Playing {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
    }
}

/// Regular play: falling enemies, drops, power-ups
fn level_step(state: &mut GameState, input: &TickInput, dt_ms: f64, now: f64) {
    projectile::advance(&mut state.bullets, dt_ms);

    let speed = state.enemy_speed(now, input.slow);
    enemy::advance(&mut state.enemies, dt_ms, speed, &mut state.rng);

    // bullet vs enemy: the nearest overlapping enemy takes the hit and the
    // bullet is spent on it
    let mut spent = Vec::new();
    for (bi, bullet) in state.bullets.iter().enumerate() {
        let mut nearest: Option<(usize, f32)> = None;
        for (ei, enemy) in state.enemies.iter().enumerate() {
            if bullet.rect.overlaps(&enemy.rect) {
                let dist = bullet.rect.center().distance_squared(enemy.rect.center());
                if nearest.is_none_or(|(_, best)| dist < best) {
                    nearest = Some((ei, dist));
                }
            }
        }
        if let Some((ei, _)) = nearest {
            spent.push(bi);
            let drop_at = state.enemies[ei].rect.center();
            state.enemies[ei].recycle(&mut state.rng);
            state.score += KILL_SCORE;
            state.events.push(GameEvent::EnemyDestroyed);
            if state.rng.random_bool(POWERUP_DROP_CHANCE) {
                let kind = PowerUpKind::roll(&mut state.rng);
                state.powerups.push(PowerUp::new(kind, drop_at));
                state.events.push(GameEvent::PowerUpDropped);
            }
        }
    }
    for bi in spent.into_iter().rev() {
        state.bullets.remove(bi);
    }

    // enemy vs player: at most one life per frame
    if now >= state.invulnerable_until {
        for ei in 0..state.enemies.len() {
            if state.enemies[ei].rect.overlaps(&state.player.rect) {
                state.enemies[ei].recycle(&mut state.rng);
                state.hit_player(now);
                break;
            }
        }
    }

    powerup::advance(&mut state.powerups, dt_ms);
    for pu in state.powerups.iter_mut() {
        if pu.active && pu.rect.overlaps(&state.player.rect) {
            state.buffs.grant(pu.kind, now);
            pu.active = false;
            state.events.push(GameEvent::PowerUpCollected);
        }
    }
    state.powerups.retain(|pu| pu.active);
}

/// Boss fight: pattern machine, bullet exchanges, bomb encounter
fn boss_step(state: &mut GameState, dt_ms: f64, now: f64) {
    projectile::advance(&mut state.bullets, dt_ms);

    let player_center = state.player.rect.center();
    let Some(boss) = state.boss.as_mut() else {
        return;
    };
    boss.update(dt_ms, now, player_center, &mut state.boss_bullets, &mut state.rng);

    // player bullets vs boss
    let mut spent = Vec::new();
    for (bi, bullet) in state.bullets.iter().enumerate() {
        if bullet.rect.overlaps(&boss.rect) {
            spent.push(bi);
            boss.apply_damage(BULLET_DAMAGE);
            state.events.push(GameEvent::EnemyDestroyed);
        }
    }
    for bi in spent.into_iter().rev() {
        state.bullets.remove(bi);
    }

    boss_bullets::advance(&mut state.boss_bullets, dt_ms);

    // bomb encounter: one pickup at a time, on a schedule
    if state.bomb_pickup.is_none() && now >= state.next_bomb_spawn {
        state.bomb_pickup = Some(BombPickup::spawn(&boss.rect, now, &mut state.rng));
        state.next_bomb_spawn = now + BOMB_SPAWN_INTERVAL_MS;
    }
    let mut drop_pickup = false;
    if let Some(pickup) = state.bomb_pickup.as_mut() {
        pickup.update(dt_ms, now);
        if !pickup.active {
            drop_pickup = true;
            // an uncollected bomb shortens the wait for the next one
            state.next_bomb_spawn = state.next_bomb_spawn.min(now + BOMB_RESPAWN_PULL_MS);
        } else if pickup.rect.overlaps(&state.player.rect) {
            drop_pickup = true;
            let from = Vec2::new(state.player.rect.center().x, state.player.rect.top());
            state.bombs.push(BombProjectile::launch(from, boss.rect.center()));
            state.events.push(GameEvent::BombCollected);
        }
    }
    if drop_pickup {
        state.bomb_pickup = None;
    }

    for bomb in state.bombs.iter_mut() {
        if bomb.update(dt_ms, now, boss) {
            state.events.push(GameEvent::BombExploded);
        }
    }
    state.bombs.retain(|b| b.active);

    // boss attacks vs player
    if now >= state.invulnerable_until {
        let mut hit = false;
        if let Some(beam) = boss.laser_damage_rect(now) {
            hit = beam.overlaps(&state.player.rect);
        }
        if !hit {
            if let Some(i) = state
                .boss_bullets
                .iter()
                .position(|b| b.rect.overlaps(&state.player.rect))
            {
                state.boss_bullets.remove(i);
                hit = true;
            }
        }
        if hit {
            state.hit_player(now);
        }
    }

    // defeat resolves after the boss's own attacks land this frame
    if state.boss.as_ref().is_some_and(|b| b.defeated()) {
        let level = state.level;
        state.cleared_bosses.insert(level);
        state.boss = None;
        state.boss_bullets.clear();
        state.bombs.clear();
        state.bomb_pickup = None;
        state.score += BOSS_CLEAR_SCORE;
        state.level += 1;
        state.enemy_base_speed += ENEMY_DEFEAT_STEP;
        if state.enemies.len() < ENEMY_CAP {
            let reinforcement = FallingEnemy::new(&mut state.rng);
            state.enemies.push(reinforcement);
        }
        state.events.push(GameEvent::BossDefeated { level });
        state.enter_level_intro(now);
    }
}
