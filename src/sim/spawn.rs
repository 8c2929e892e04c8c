//! Person factory: best-effort non-overlapping placement
//!
//! Candidates are rejection-sampled against everyone already placed. After
//! `MAX_PLACEMENT_ATTEMPTS` the last candidate is kept even if it overlaps,
//! so spawning a dense population always terminates.

use glam::Vec2;
use rand::Rng;

use super::calendar::Birthday;
use super::state::Person;
use crate::Bounds;
use crate::consts::*;
use crate::settings::Config;

/// Spawn one person away from `existing`
pub fn create_person<R: Rng + ?Sized>(
    existing: &[Person],
    config: &Config,
    bounds: Bounds,
    rng: &mut R,
) -> Person {
    let inset = config.radius + SPAWN_MARGIN;
    let clearance = config.min_dist() + SEPARATION_SLACK;

    let mut pos = sample_position(bounds, inset, rng);
    let mut attempts = 1;
    while is_crowded(pos, existing, clearance) {
        if attempts >= MAX_PLACEMENT_ATTEMPTS {
            log::warn!(
                "No free spot after {} attempts, placing person #{} overlapping",
                attempts,
                existing.len()
            );
            break;
        }
        pos = sample_position(bounds, inset, rng);
        attempts += 1;
    }

    let vel = Vec2::new(
        rng.random_range(-INITIAL_SPEED..INITIAL_SPEED),
        rng.random_range(-INITIAL_SPEED..INITIAL_SPEED),
    );
    let birthday: Birthday = rng.random_range(1..=DAYS_IN_YEAR);

    Person::new(pos, vel, birthday)
}

/// Whether any existing center lies closer than `clearance`
fn is_crowded(pos: Vec2, existing: &[Person], clearance: f32) -> bool {
    existing.iter().any(|p| p.pos.distance(pos) < clearance)
}

fn sample_position<R: Rng + ?Sized>(bounds: Bounds, inset: f32, rng: &mut R) -> Vec2 {
    Vec2::new(
        sample_axis(inset, bounds.width - inset, rng),
        sample_axis(inset, bounds.height - inset, rng),
    )
}

/// Uniform in [lo, hi); the midpoint when the interval is empty
fn sample_axis<R: Rng + ?Sized>(lo: f32, hi: f32, rng: &mut R) -> f32 {
    if lo < hi {
        rng.random_range(lo..hi)
    } else {
        (lo + hi) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_keeps_clearance_when_room() {
        let config = Config::default();
        let bounds = Bounds::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut people = Vec::new();
        for _ in 0..40 {
            let person = create_person(&people, &config, bounds, &mut rng);
            people.push(person);
        }

        let clearance = config.min_dist() + SEPARATION_SLACK;
        for (i, a) in people.iter().enumerate() {
            for b in &people[i + 1..] {
                assert!(a.pos.distance(b.pos) >= clearance);
            }
        }
    }

    #[test]
    fn test_spawn_within_margin() {
        let config = Config::default();
        let bounds = Bounds::default();
        let mut rng = Pcg32::seed_from_u64(2);
        let inset = config.radius + SPAWN_MARGIN;
        for _ in 0..200 {
            let person = create_person(&[], &config, bounds, &mut rng);
            assert!(bounds.contains_inset(person.pos, inset));
            assert!(person.vel.x.abs() <= INITIAL_SPEED && person.vel.y.abs() <= INITIAL_SPEED);
            assert!((1..=DAYS_IN_YEAR).contains(&person.birthday()));
        }
    }

    #[test]
    fn test_spawn_terminates_when_full() {
        // Spawn area is a single point: every candidate after the first overlaps
        let config = Config::default();
        let side = 2.0 * (config.radius + SPAWN_MARGIN);
        let bounds = Bounds::new(side, side);
        let mut rng = Pcg32::seed_from_u64(3);

        let mut people = Vec::new();
        for _ in 0..5 {
            let person = create_person(&people, &config, bounds, &mut rng);
            people.push(person);
        }
        assert_eq!(people.len(), 5);
        assert!(people.iter().all(|p| p.pos == Vec2::splat(side / 2.0)));
    }
}
