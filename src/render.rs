//! Draw-request interface
//!
//! The simulation never touches pixels. Once per frame the host hands a
//! `Renderer` to `draw_scene`, which walks the current entity geometry in a
//! fixed back-to-front order and emits one draw request per visible entity.

use crate::sim::boss_bullets::BossBulletKind;
use crate::sim::geom::Rect;
use crate::sim::powerup::PowerUpKind;
use crate::sim::tick::GameState;

/// What to draw; the host maps these to its own textures or shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Player,
    PlayerBullet,
    Enemy,
    PowerUp(PowerUpKind),
    Boss,
    BossBullet(BossBulletKind),
    BombPickup,
    BombProjectile,
    /// Growing ring of a detonated bomb
    Blast,
    /// Laser corridor during its warn phase
    LaserWarning,
    /// Laser corridor while damaging
    LaserBeam,
}

/// Collaborator that rasterizes draw requests
pub trait Renderer {
    fn draw(&mut self, sprite: Sprite, dest: Rect, rotation_deg: f32);
}

/// Walk the state and emit this frame's draw requests
pub fn draw_scene(state: &GameState, renderer: &mut dyn Renderer) {
    let now = state.clock.now();

    // invulnerable player blinks at 10 Hz
    let visible =
        now >= state.invulnerable_until || (now / 100.0) as i64 % 2 == 0;
    if visible {
        renderer.draw(Sprite::Player, state.player.rect, state.player.angle_deg);
    }

    for bullet in &state.bullets {
        renderer.draw(Sprite::PlayerBullet, bullet.rect, 0.0);
    }

    match &state.boss {
        None => {
            for enemy in &state.enemies {
                renderer.draw(Sprite::Enemy, enemy.rect, 0.0);
            }
            for pu in &state.powerups {
                renderer.draw(Sprite::PowerUp(pu.kind), pu.rect, 0.0);
            }
        }
        Some(boss) => {
            renderer.draw(Sprite::Boss, boss.rect, 0.0);
            for bullet in &state.boss_bullets {
                renderer.draw(Sprite::BossBullet(bullet.kind), bullet.rect, 0.0);
            }
            if let Some(pickup) = &state.bomb_pickup {
                renderer.draw(Sprite::BombPickup, pickup.rect, 0.0);
            }
            if let Some(laser) = &boss.laser {
                let sprite = if laser.firing(now) {
                    Sprite::LaserBeam
                } else {
                    Sprite::LaserWarning
                };
                renderer.draw(sprite, laser.rect, 0.0);
            }
        }
    }

    for bomb in &state.bombs {
        if bomb.exploded {
            let blast = Rect::from_center(
                bomb.rect.center(),
                bomb.blast_radius * 2.0,
                bomb.blast_radius * 2.0,
            );
            renderer.draw(Sprite::Blast, blast, 0.0);
        } else {
            renderer.draw(Sprite::BombProjectile, bomb.rect, 0.0);
        }
    }
}
