//! World state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::calendar::{Birthday, hue_degrees};
use super::spawn::create_person;
use crate::Bounds;
use crate::settings::Config;

/// A simulated person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Constant; every spawned person weighs 1
    pub mass: f32,
    birthday: Birthday,
}

impl Person {
    pub fn new(pos: Vec2, vel: Vec2, birthday: Birthday) -> Self {
        Self {
            pos,
            vel,
            mass: 1.0,
            birthday,
        }
    }

    /// Day-of-year, fixed for the person's lifetime
    #[inline]
    pub fn birthday(&self) -> Birthday {
        self.birthday
    }

    /// Display hue derived from the birthday
    #[inline]
    pub fn hue(&self) -> f32 {
        hue_degrees(self.birthday)
    }

    #[inline]
    pub fn momentum(&self) -> Vec2 {
        self.vel * self.mass
    }
}

/// The full population plus everything needed to advance it deterministically
#[derive(Debug, Clone)]
pub struct World {
    /// Seed for reproducibility
    pub seed: u64,
    pub bounds: Bounds,
    /// People in insertion order; membership only changes on re-init
    pub people: Vec<Person>,
    /// Simulation tick counter (reset on re-init)
    pub time_ticks: u64,
    rng: Pcg32,
}

impl World {
    /// Create an empty world
    pub fn new(seed: u64, bounds: Bounds) -> Self {
        Self {
            seed,
            bounds,
            people: Vec::new(),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Create a world already holding `count` people
    pub fn with_population(seed: u64, bounds: Bounds, count: usize, config: &Config) -> Self {
        let mut world = Self::new(seed, bounds);
        world.populate(count, config);
        world
    }

    /// Discard everyone and spawn a fresh population of `count`
    pub fn populate(&mut self, count: usize, config: &Config) {
        let mut people = Vec::with_capacity(count);
        for _ in 0..count {
            let person = create_person(&people, config, self.bounds, &mut self.rng);
            people.push(person);
        }
        self.people = people;
        self.time_ticks = 0;
        log::info!(
            "Spawned {} people in {}x{} world",
            count,
            self.bounds.width,
            self.bounds.height
        );
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Total linear momentum of the population
    pub fn momentum(&self) -> Vec2 {
        self.people.iter().map(Person::momentum).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DAYS_IN_YEAR;

    #[test]
    fn test_populate_exact_count_in_bounds() {
        let config = Config::default();
        for count in [0, 1, 23, 120] {
            let world = World::with_population(7, Bounds::default(), count, &config);
            assert_eq!(world.len(), count);
            for person in &world.people {
                assert!(world.bounds.contains_inset(person.pos, config.radius));
                assert!((1..=DAYS_IN_YEAR).contains(&person.birthday()));
                assert_eq!(person.mass, 1.0);
            }
        }
    }

    #[test]
    fn test_repopulate_replaces_everyone() {
        let config = Config::default();
        let mut world = World::with_population(7, Bounds::default(), 30, &config);
        world.time_ticks = 99;
        world.populate(5, &config);
        assert_eq!(world.len(), 5);
        assert_eq!(world.time_ticks, 0);

        world.populate(0, &config);
        assert!(world.is_empty());
    }

    #[test]
    fn test_same_seed_same_population() {
        let config = Config::default();
        let a = World::with_population(42, Bounds::default(), 50, &config);
        let b = World::with_population(42, Bounds::default(), 50, &config);
        assert_eq!(a.people, b.people);
    }

    #[test]
    fn test_hue_follows_birthday() {
        let person = Person::new(Vec2::ZERO, Vec2::ZERO, 365);
        assert_eq!(person.hue(), 360.0);
    }
}
