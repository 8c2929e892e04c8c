//! Collision response for walls and person pairs
//!
//! Pure functions over positions and velocities so the tick can apply them
//! to whichever pair it is resolving.

use glam::Vec2;

use crate::Bounds;

/// Clamp a person back inside `[radius, bound - radius]` on each axis,
/// flipping the velocity component of every axis that was crossed.
///
/// Returns whether any wall was hit.
pub fn reflect_off_walls(pos: &mut Vec2, vel: &mut Vec2, radius: f32, bounds: Bounds) -> bool {
    let hit_x = reflect_axis(&mut pos.x, &mut vel.x, radius, bounds.width - radius);
    let hit_y = reflect_axis(&mut pos.y, &mut vel.y, radius, bounds.height - radius);
    hit_x || hit_y
}

#[inline]
fn reflect_axis(pos: &mut f32, vel: &mut f32, lo: f32, hi: f32) -> bool {
    let mut hit = false;
    if *pos < lo {
        *pos = lo;
        *vel = -*vel;
        hit = true;
    }
    if *pos > hi {
        *pos = hi;
        *vel = -*vel;
        hit = true;
    }
    hit
}

/// One side of a pairwise contact
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub mass: f32,
}

/// Separate two overlapping bodies and exchange momentum along the contact normal
///
/// `normal` is the unit vector from `a` to `b`, `overlap` how far they
/// interpenetrate. Each body moves half the overlap, which keeps the pair's
/// center of mass in place for equal masses. The 1-D elastic impulse conserves
/// total momentum for any masses; with unit masses it swaps the normal components.
pub fn resolve_contact(a: &mut Body, b: &mut Body, normal: Vec2, overlap: f32) {
    let shift = normal * overlap * 0.5;
    a.pos -= shift;
    b.pos += shift;

    let relative = a.vel - b.vel;
    let impulse = 2.0 * normal.dot(relative) / (a.mass + b.mass);
    a.vel -= normal * impulse * b.mass;
    b.vel += normal * impulse * a.mass;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(x: f32, y: f32, vx: f32, vy: f32) -> Body {
        Body {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            mass: 1.0,
        }
    }

    #[test]
    fn test_wall_reflection_clamps_and_flips() {
        let bounds = Bounds::new(100.0, 50.0);

        let mut pos = Vec2::new(-3.0, 25.0);
        let mut vel = Vec2::new(-2.0, 1.0);
        assert!(reflect_off_walls(&mut pos, &mut vel, 8.0, bounds));
        assert_eq!(pos, Vec2::new(8.0, 25.0));
        assert_eq!(vel, Vec2::new(2.0, 1.0));

        let mut pos = Vec2::new(95.0, 49.0);
        let mut vel = Vec2::new(3.0, 4.0);
        assert!(reflect_off_walls(&mut pos, &mut vel, 8.0, bounds));
        assert_eq!(pos, Vec2::new(92.0, 42.0));
        assert_eq!(vel, Vec2::new(-3.0, -4.0));

        let mut pos = Vec2::new(50.0, 25.0);
        let mut vel = Vec2::new(1.0, 1.0);
        assert!(!reflect_off_walls(&mut pos, &mut vel, 8.0, bounds));
        assert_eq!(vel, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_head_on_contact_swaps_velocities() {
        let mut a = body(0.0, 0.0, 1.0, 0.0);
        let mut b = body(10.0, 0.0, -1.0, 0.0);
        resolve_contact(&mut a, &mut b, Vec2::X, 6.0);

        assert_eq!(a.pos, Vec2::new(-3.0, 0.0));
        assert_eq!(b.pos, Vec2::new(13.0, 0.0));
        assert!((a.vel - Vec2::new(-1.0, 0.0)).length() < 1e-6);
        assert!((b.vel - Vec2::new(1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_contact_conserves_momentum_unequal_mass() {
        let mut a = body(0.0, 0.0, 0.7, -0.2);
        let mut b = body(3.0, 4.0, -0.4, 0.9);
        b.mass = 3.0;
        let before = a.vel * a.mass + b.vel * b.mass;

        let normal = (b.pos - a.pos).normalize();
        resolve_contact(&mut a, &mut b, normal, 11.0);

        let after = a.vel * a.mass + b.vel * b.mass;
        assert!((before - after).length() < 1e-5);
    }

    #[test]
    fn test_tangential_velocity_untouched() {
        let mut a = body(0.0, 0.0, 0.0, 2.0);
        let mut b = body(10.0, 0.0, 0.0, -1.0);
        resolve_contact(&mut a, &mut b, Vec2::X, 6.0);
        assert_eq!(a.vel, Vec2::new(0.0, 2.0));
        assert_eq!(b.vel, Vec2::new(0.0, -1.0));
    }
}
