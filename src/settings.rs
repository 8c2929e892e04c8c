//! Simulation tuning parameters
//!
//! Read by the physics every tick and by the person factory on spawn.
//! Any field may be overwritten between ticks; values are never validated,
//! out-of-range numbers simply produce different dynamics.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Tunable force/range parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    // === Kinematics ===
    /// Per-tick velocity multiplier
    pub friction: f32,
    /// Shared collision radius of every person
    pub radius: f32,

    // === Social forces ===
    /// Velocity nudge toward a partner with a nearby birthday
    pub attraction_force: f32,
    /// Day distance below which attraction applies
    pub attraction_date_range: f32,
    /// Velocity nudge away from a partner with a distant birthday
    pub repulsion_force: f32,
    /// Day distance above which repulsion applies
    pub repulsion_date_range: f32,
    /// Spatial distance beyond which repulsion is ignored
    pub repulsion_dist_limit: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            friction: 0.95,
            radius: 8.0,

            attraction_force: 0.03,
            attraction_date_range: 40.0,
            repulsion_force: 0.005,
            repulsion_date_range: 100.0,
            repulsion_dist_limit: 100.0,
        }
    }
}

impl Config {
    /// Field names accepted by [`Config::set`]
    pub const FIELDS: [&'static str; 7] = [
        "friction",
        "radius",
        "attractionForce",
        "attractionDateRange",
        "repulsionForce",
        "repulsionDateRange",
        "repulsionDistLimit",
    ];

    /// Overwrite a single field by its wire name (slider write path)
    pub fn set(&mut self, field: &str, value: f32) -> Result<()> {
        let slot = match field {
            "friction" => &mut self.friction,
            "radius" => &mut self.radius,
            "attractionForce" => &mut self.attraction_force,
            "attractionDateRange" => &mut self.attraction_date_range,
            "repulsionForce" => &mut self.repulsion_force,
            "repulsionDateRange" => &mut self.repulsion_date_range,
            "repulsionDistLimit" => &mut self.repulsion_dist_limit,
            _ => return Err(SimError::UnknownField(field.to_string())),
        };
        *slot = value;
        log::debug!("Config {} = {}", field, value);
        Ok(())
    }

    /// Hard-collision distance between two centers
    #[inline]
    pub fn min_dist(&self) -> f32 {
        self.radius * 2.0
    }

    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Config saved to {}", path.display());
        Ok(())
    }
}
