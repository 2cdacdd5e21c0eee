//! Player bullets: spawn patterns, advance, prune

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use super::player::ShipClass;
use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub rect: Rect,
    pub vel: Vec2,
}

impl Bullet {
    pub fn new(center: Vec2, vel: Vec2) -> Self {
        Self {
            rect: Rect::from_center(center, BULLET_W, BULLET_H),
            vel,
        }
    }
}

/// Spawn the ship class's shot pattern from the muzzle point
pub fn spawn_shots(bullets: &mut Vec<Bullet>, muzzle: Vec2, class: ShipClass) {
    let up = Vec2::new(0.0, -BULLET_SPEED);
    match class {
        ShipClass::Single => {
            bullets.push(Bullet::new(muzzle, up));
        }
        ShipClass::Twin => {
            bullets.push(Bullet::new(muzzle - Vec2::new(TWIN_OFFSET, 0.0), up));
            bullets.push(Bullet::new(muzzle + Vec2::new(TWIN_OFFSET, 0.0), up));
        }
        ShipClass::Triple => {
            bullets.push(Bullet::new(muzzle, up));
            bullets.push(Bullet::new(
                muzzle - Vec2::new(TRIPLE_OFFSET, 0.0),
                Vec2::new(-TRIPLE_SPLAY_VX, -BULLET_SPEED),
            ));
            bullets.push(Bullet::new(
                muzzle + Vec2::new(TRIPLE_OFFSET, 0.0),
                Vec2::new(TRIPLE_SPLAY_VX, -BULLET_SPEED),
            ));
        }
    }
}

/// A bullet stays live while it still overlaps the arena; one that has fully
/// crossed an edge is gone.
fn in_flight(rect: &Rect) -> bool {
    rect.bottom() > 0.0 && rect.top() < ARENA_H && rect.right() > 0.0 && rect.left() < ARENA_W
}

/// Advance every bullet and drop the ones that left the arena
pub fn advance(bullets: &mut Vec<Bullet>, dt_ms: f64) {
    let dt_s = (dt_ms / 1000.0) as f32;
    for bullet in bullets.iter_mut() {
        bullet.rect.translate(bullet.vel * dt_s);
    }
    bullets.retain(|b| in_flight(&b.rect));
}
