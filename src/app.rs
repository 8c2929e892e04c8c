//! Frame loop orchestration
//!
//! [`Simulation`] ties the world, the live config and the displayed
//! probability together: one [`Simulation::frame`] per display refresh,
//! re-initialization between frames. [`FrameClock`] decides how many frames
//! are due for a host callback.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::Serialize;

use crate::Bounds;
use crate::consts::*;
use crate::error::{Result, SimError};
use crate::probability::probability_label;
use crate::renderer::{FrameView, Renderer};
use crate::settings::Config;
use crate::sim::{MatchReport, Person, World, person_under_cursor, tick};

/// A running simulation instance
#[derive(Debug, Clone)]
pub struct Simulation {
    world: World,
    config: Config,
    /// Shown next to the population count; fixed until the next re-init
    probability: String,
    last_report: MatchReport,
    cursor: Option<Vec2>,
}

impl Simulation {
    pub fn new(seed: u64, bounds: Bounds, population: usize, config: Config) -> Self {
        let world = World::with_population(seed, bounds, population, &config);
        let probability = probability_label(population_u32(population));
        log::info!(
            "Simulation initialized with seed {}: {} people, match probability {}",
            seed,
            population,
            probability
        );
        Self {
            world,
            config,
            probability,
            last_report: MatchReport::default(),
            cursor: None,
        }
    }

    /// Replace the whole population with `count` fresh people
    ///
    /// Negative counts are rejected and leave the current population untouched.
    pub fn reinit(&mut self, count: i64) -> Result<()> {
        let population = usize::try_from(count).map_err(|_| SimError::NegativePopulation(count))?;
        self.world.populate(population, &self.config);
        self.probability = probability_label(population_u32(population));
        self.last_report = MatchReport::default();
        log::info!(
            "Re-initialized: {} people, match probability {}",
            population,
            self.probability
        );
        Ok(())
    }

    /// Run one tick and hand the resulting frame to `renderer`
    pub fn frame<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> &MatchReport {
        self.last_report = tick(&mut self.world, &self.config);

        let hovered = self
            .cursor
            .and_then(|c| person_under_cursor(&self.world.people, c, self.config.radius));
        let view = FrameView {
            tick: self.world.time_ticks,
            bounds: self.world.bounds,
            radius: self.config.radius,
            people: &self.world.people,
            report: &self.last_report,
            hovered,
            probability: &self.probability,
        };
        renderer.render(&view);

        &self.last_report
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Write access for UI controls; takes effect on the next frame
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn people(&self) -> &[Person] {
        &self.world.people
    }

    pub fn probability(&self) -> &str {
        &self.probability
    }

    pub fn last_report(&self) -> &MatchReport {
        &self.last_report
    }

    /// Pointer position in world coordinates; `None` when it leaves the view
    pub fn set_cursor(&mut self, cursor: Option<Vec2>) {
        self.cursor = cursor;
    }

    /// Serializable view of the current state
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            seed: self.world.seed,
            tick: self.world.time_ticks,
            bounds: self.world.bounds,
            config: &self.config,
            probability: &self.probability,
            people: &self.world.people,
            matches: &self.last_report,
        }
    }

    /// Write [`Simulation::snapshot`] as pretty JSON
    pub fn write_snapshot(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.snapshot())?;
        fs::write(path, json).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Snapshot written to {}", path.display());
        Ok(())
    }
}

/// JSON export of a simulation for external renderers
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub seed: u64,
    pub tick: u64,
    pub bounds: Bounds,
    pub config: &'a Config,
    pub probability: &'a str,
    pub people: &'a [Person],
    pub matches: &'a MatchReport,
}

#[inline]
fn population_u32(population: usize) -> u32 {
    u32::try_from(population).unwrap_or(u32::MAX)
}

/// Fixed-rate frame pacing
///
/// Host callbacks report elapsed wall time; whole frame periods accumulate
/// and at most `MAX_CATCHUP_FRAMES` are released per callback.
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: f64,
    accumulator: f64,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            period: 1.0 / f64::from(fps.max(1)),
            accumulator: 0.0,
        }
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    /// Number of frames to run after `elapsed` seconds
    pub fn advance(&mut self, elapsed: f64) -> u32 {
        self.accumulator += elapsed.clamp(0.0, 0.25);

        let mut frames = 0;
        while self.accumulator >= self.period && frames < MAX_CATCHUP_FRAMES {
            self.accumulator -= self.period;
            frames += 1;
        }
        // Drop backlog we refuse to catch up on
        if frames == MAX_CATCHUP_FRAMES {
            self.accumulator = self.accumulator.min(self.period);
        }
        frames
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(TARGET_FPS)
    }
}
