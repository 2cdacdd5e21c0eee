//! Boss projectiles
//!
//! Each bullet carries a fixed velocity vector; wave bullets additionally
//! drift sideways on an independent sine phase while falling.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use crate::consts::*;

/// Which attack produced the bullet (drives its motion and its sprite)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossBulletKind {
    Aimed,
    Spread,
    Wave,
    Burst,
}

/// Sinusoidal horizontal drift state for wave bullets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveMotion {
    pub phase: f32,
    /// Radians per second
    pub phase_speed: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BossBullet {
    pub rect: Rect,
    pub vel: Vec2,
    pub kind: BossBulletKind,
    pub wave: Option<WaveMotion>,
}

impl BossBullet {
    /// A bullet whose top-center starts at the cannon mouth `(x, y)`
    pub fn spawn(x: f32, y: f32, vel: Vec2, kind: BossBulletKind) -> Self {
        Self {
            rect: Rect::new(x - BOSS_BULLET_W / 2.0, y, BOSS_BULLET_W, BOSS_BULLET_H),
            vel,
            kind,
            wave: None,
        }
    }

    pub fn spawn_wave(x: f32, y: f32, vy: f32, phase: f32, phase_speed: f32) -> Self {
        Self {
            wave: Some(WaveMotion { phase, phase_speed }),
            ..Self::spawn(x, y, Vec2::new(0.0, vy), BossBulletKind::Wave)
        }
    }
}

/// Advance every bullet and drop the ones that left the arena
pub fn advance(bullets: &mut Vec<BossBullet>, dt_ms: f64) {
    let dt_s = (dt_ms / 1000.0) as f32;
    for bullet in bullets.iter_mut() {
        if let Some(wave) = bullet.wave.as_mut() {
            wave.phase += wave.phase_speed * dt_s;
            bullet
                .rect
                .translate(Vec2::new(WAVE_DRIFT_SPEED * wave.phase.sin() * dt_s, 0.0));
        }
        bullet.rect.translate(bullet.vel * dt_s);
    }
    bullets.retain(|b| {
        b.rect.top() < ARENA_H && b.rect.bottom() > 0.0 && b.rect.right() > 0.0 && b.rect.left() < ARENA_W
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_bullet_follows_its_velocity() {
        let mut bullets = vec![BossBullet::spawn(
            400.0,
            160.0,
            Vec2::new(100.0, 200.0),
            BossBulletKind::Aimed,
        )];
        advance(&mut bullets, 100.0);
        let c = bullets[0].rect.center();
        assert!((c.x - 410.0).abs() < 1e-3);
        assert!((c.y - (160.0 + BOSS_BULLET_H / 2.0 + 20.0)).abs() < 1e-3);
    }

    #[test]
    fn wave_bullet_drifts_sideways_while_falling() {
        let mut bullets = vec![BossBullet::spawn_wave(400.0, 160.0, 240.0, 1.0, 0.0)];
        let x0 = bullets[0].rect.center().x;
        advance(&mut bullets, 100.0);
        // phase fixed at 1.0 rad: drift = 192 * sin(1) * 0.1
        let expected = x0 + WAVE_DRIFT_SPEED * 1.0_f32.sin() * 0.1;
        assert!((bullets[0].rect.center().x - expected).abs() < 1e-2);
        assert!(bullets[0].rect.top() > 160.0);
    }

    #[test]
    fn wave_phase_advances_with_time() {
        let mut bullets = vec![BossBullet::spawn_wave(400.0, 160.0, 240.0, 0.0, 8.0)];
        advance(&mut bullets, 250.0);
        let wave = bullets[0].wave.unwrap();
        assert!((wave.phase - 2.0).abs() < 1e-3);
    }

    #[test]
    fn bullets_leaving_the_arena_are_pruned() {
        let mut bullets = vec![
            BossBullet::spawn(400.0, ARENA_H + 1.0, Vec2::ZERO, BossBulletKind::Spread),
            BossBullet::spawn(400.0, 300.0, Vec2::ZERO, BossBulletKind::Burst),
        ];
        advance(&mut bullets, 16.0);
        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets[0].kind, BossBulletKind::Burst);
    }
}
