//! Player ship: movement, tilt easing, muzzle geometry

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use super::tick::TickInput;
use crate::consts::*;

/// Which shot pattern the session's ship fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ShipClass {
    /// One straight bullet
    #[default]
    Single,
    /// Two parallel bullets
    Twin,
    /// Three bullets, the outer pair splayed slightly outward
    Triple,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Current speed in px/s; rewritten each frame from the active buffs
    pub speed: f32,
    /// Visual tilt in degrees, eased toward `target_angle_deg`
    pub angle_deg: f32,
    pub target_angle_deg: f32,
}

impl Player {
    pub fn new() -> Self {
        let mut player = Self {
            rect: Rect::new(0.0, 0.0, PLAYER_W, PLAYER_H),
            speed: PLAYER_SPEED,
            angle_deg: 0.0,
            target_angle_deg: 0.0,
        };
        player.reset();
        player
    }

    /// Back to the spawn pose: bottom center, level tilt
    pub fn reset(&mut self) {
        self.rect.set_center(Vec2::new(
            ARENA_W / 2.0,
            ARENA_H - PLAYER_BOTTOM_MARGIN - PLAYER_H / 2.0,
        ));
        self.angle_deg = 0.0;
        self.target_angle_deg = 0.0;
    }

    /// Apply held movement keys, clamp to the arena, ease the tilt
    pub fn update(&mut self, dt_ms: f64, input: &TickInput) {
        let dt_s = (dt_ms / 1000.0) as f32;

        let mut dir = Vec2::ZERO;
        if input.left {
            dir.x -= 1.0;
        }
        if input.right {
            dir.x += 1.0;
        }
        if input.up {
            dir.y -= 1.0;
        }
        if input.down {
            dir.y += 1.0;
        }
        self.rect.translate(dir * self.speed * dt_s);
        self.rect.clamp_to(&Rect::arena());

        self.target_angle_deg = if dir.x > 0.0 {
            TILT_MAX_DEG
        } else if dir.x < 0.0 {
            -TILT_MAX_DEG
        } else {
            0.0
        };

        let max_delta = TILT_RATE_DEG * dt_s;
        if self.angle_deg < self.target_angle_deg {
            self.angle_deg = (self.angle_deg + max_delta).min(self.target_angle_deg);
        } else if self.angle_deg > self.target_angle_deg {
            self.angle_deg = (self.angle_deg - max_delta).max(self.target_angle_deg);
        }
    }

    /// World-space nose point, rotated with the current tilt; bullets spawn here
    pub fn muzzle(&self) -> Vec2 {
        let rad = self.angle_deg.to_radians();
        self.rect.center() + MUZZLE_RISE * Vec2::new(rad.sin(), -rad.cos())
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
