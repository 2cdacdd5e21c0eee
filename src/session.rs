//! Frame orchestration around the simulation
//!
//! The session owns the game state and the glue the simulation itself must
//! not know about: pause (the clock simply stops advancing, freezing every
//! timer), sound cue fan-out, and the single high-score write per game-over.
//! Discrete system keys (pause toggle, restart) are decoded by the host UI,
//! which calls the matching methods here.

use crate::audio::{SoundCue, SoundPlayer};
use crate::persistence::HighScoreStore;
use crate::render::{Renderer, draw_scene};
use crate::settings::Difficulty;
use crate::sim::player::ShipClass;
use crate::sim::tick::{GameEvent, GameState, TickInput, tick};

pub struct Session {
    pub state: GameState,
    seed: u64,
    paused: bool,
    high_score: u32,
}

impl Session {
    pub fn new(
        seed: u64,
        difficulty: Difficulty,
        ship: ShipClass,
        store: &mut dyn HighScoreStore,
    ) -> Self {
        Self {
            state: GameState::new(seed, difficulty, ship),
            seed,
            paused: false,
            high_score: store.read_high_score(),
        }
    }

    /// Advance one frame and fan out whatever happened.
    ///
    /// While paused nothing runs at all; since the clock is the only source
    /// of "now", every buff, telegraph, and cooldown freezes with it.
    pub fn update(
        &mut self,
        dt_ms: f64,
        input: &TickInput,
        sound: &mut dyn SoundPlayer,
        store: &mut dyn HighScoreStore,
    ) {
        if self.paused {
            return;
        }
        tick(&mut self.state, input, dt_ms);
        for event in self.state.events.drain(..) {
            match event {
                GameEvent::ShotFired => sound.play(SoundCue::Shot),
                GameEvent::EnemyDestroyed | GameEvent::PlayerHit | GameEvent::BombExploded => {
                    sound.play(SoundCue::Explosion)
                }
                GameEvent::PowerUpDropped
                | GameEvent::PowerUpCollected
                | GameEvent::BombCollected => sound.play(SoundCue::PowerUp),
                GameEvent::BossSpawned { level } => {
                    log::info!("boss engaged at level {level}");
                }
                GameEvent::BossDefeated { level } => {
                    log::info!("boss defeated, entering level {}", level + 1);
                }
                GameEvent::GameOver { score } => {
                    sound.play(SoundCue::GameOver);
                    log::info!("game over at {score} points");
                    if score > self.high_score {
                        self.high_score = score;
                        store.write_high_score(score);
                        log::info!("new high score: {score}");
                    }
                }
            }
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Throw the run away and start over with a derived seed
    pub fn restart(&mut self) {
        self.seed = self.seed.wrapping_add(1);
        self.state = GameState::new(self.seed, self.state.difficulty, self.state.ship);
        self.paused = false;
    }

    /// Emit this frame's draw requests
    pub fn render(&self, renderer: &mut dyn Renderer) {
        draw_scene(&self.state, renderer);
    }
}
