//! Per-frame simulation tick
//!
//! Two phases: every person moves on its own (integrate, bounce, damp), then
//! every unordered pair is visited exactly once to resolve contacts, apply the
//! birthday-keyed social forces and record shared birthdays.

use glam::Vec2;

use super::calendar::day_distance;
use super::collision::{Body, reflect_off_walls, resolve_contact};
use super::matches::MatchReport;
use super::state::{Person, World};
use crate::Bounds;
use crate::settings::Config;

/// Advance the world by one tick
///
/// `config` is re-read on every call, so the caller may change it freely
/// between ticks.
pub fn tick(world: &mut World, config: &Config) -> MatchReport {
    integrate(&mut world.people, config, world.bounds);
    let report = interact(&mut world.people, config);
    world.time_ticks += 1;
    report
}

/// Phase A: move, bounce off walls, then apply friction
pub fn integrate(people: &mut [Person], config: &Config, bounds: Bounds) {
    for person in people.iter_mut() {
        person.pos += person.vel;
        reflect_off_walls(&mut person.pos, &mut person.vel, config.radius, bounds);
        person.vel *= config.friction;
    }
}

/// Phase B: resolve every unordered pair once, in index order
pub fn interact(people: &mut [Person], config: &Config) -> MatchReport {
    let mut report = MatchReport::default();

    for i in 0..people.len() {
        let (head, tail) = people.split_at_mut(i + 1);
        let a = &mut head[i];
        for (offset, b) in tail.iter_mut().enumerate() {
            if resolve_pair(a, b, config) == 0 {
                report.record(i, i + 1 + offset, a.birthday());
            }
        }
    }

    report
}

/// Resolve contact and social force for one pair; returns their day distance
///
/// Both responses use the separation measured before either is applied.
/// Coincident centers have no normal, so they get neither response.
fn resolve_pair(a: &mut Person, b: &mut Person, config: &Config) -> u16 {
    let delta = b.pos - a.pos;
    let dist = delta.length();
    let min_dist = config.min_dist();
    let day_dist = day_distance(a.birthday(), b.birthday());

    if dist <= 0.0 {
        return day_dist;
    }
    let normal = delta / dist;

    if dist < min_dist {
        let mut body_a = Body {
            pos: a.pos,
            vel: a.vel,
            mass: a.mass,
        };
        let mut body_b = Body {
            pos: b.pos,
            vel: b.vel,
            mass: b.mass,
        };
        resolve_contact(&mut body_a, &mut body_b, normal, min_dist - dist);
        (a.pos, a.vel) = (body_a.pos, body_a.vel);
        (b.pos, b.vel) = (body_b.pos, body_b.vel);
    }

    let days = f32::from(day_dist);
    if days < config.attraction_date_range && dist > min_dist {
        push_pair(a, b, normal * config.attraction_force);
    } else if days > config.repulsion_date_range && dist < config.repulsion_dist_limit {
        push_pair(a, b, -normal * config.repulsion_force);
    }

    day_dist
}

/// Nudge `a` by `impulse` and `b` by its opposite
#[inline]
fn push_pair(a: &mut Person, b: &mut Person, impulse: Vec2) {
    a.vel += impulse;
    b.vel -= impulse;
}
