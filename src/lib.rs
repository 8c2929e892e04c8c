//! Birthday Swarm - the birthday paradox as a particle simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, pairwise forces, match detection)
//! - `settings`: Tunable force/range parameters
//! - `probability`: Closed-form birthday-paradox probability
//! - `renderer`: Render collaborator seam
//! - `app`: Frame loop orchestration

pub mod app;
pub mod error;
pub mod probability;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::{FrameClock, Simulation};
pub use error::SimError;
pub use probability::probability_of_any_match;
pub use settings::Config;

use serde::{Deserialize, Serialize};

/// Simulation configuration constants
pub mod consts {
    /// Days on the birthday cycle
    pub const DAYS_IN_YEAR: u16 = 365;

    /// Default world dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 500.0;

    /// Extra inset beyond the radius when spawning (radius 8 + 22 = 30px from the edge)
    pub const SPAWN_MARGIN: f32 = 22.0;
    /// Gap required between two spawned centers on top of one diameter
    pub const SEPARATION_SLACK: f32 = 5.0;
    /// Rejection sampling cap for placement
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 200;
    /// Spawn velocity components are uniform in [-INITIAL_SPEED, INITIAL_SPEED)
    pub const INITIAL_SPEED: f32 = 0.5;

    /// Cursor slack on top of the radius for hover lookup
    pub const HOVER_SLACK: f32 = 5.0;

    /// Target frame rate for the native driver
    pub const TARGET_FPS: u32 = 60;
    /// Maximum frames run per host callback to prevent spiral of death
    pub const MAX_CATCHUP_FRAMES: u32 = 4;
}

/// Axis-aligned world extent, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether a point lies in `[inset, width-inset] x [inset, height-inset]`
    #[inline]
    pub fn contains_inset(&self, pos: glam::Vec2, inset: f32) -> bool {
        pos.x >= inset
            && pos.x <= self.width - inset
            && pos.y >= inset
            && pos.y <= self.height - inset
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(consts::WORLD_WIDTH, consts::WORLD_HEIGHT)
    }
}
