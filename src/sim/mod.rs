//! Deterministic simulation module
//!
//! All physics and match logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (insertion order of people)
//! - No rendering or platform dependencies

pub mod calendar;
pub mod collision;
pub mod matches;
pub mod query;
pub mod spawn;
pub mod state;
pub mod tick;

pub use calendar::{Birthday, date_label, day_distance, hue_degrees};
pub use collision::{Body, reflect_off_walls, resolve_contact};
pub use matches::MatchReport;
pub use query::person_under_cursor;
pub use spawn::create_person;
pub use state::{Person, World};
pub use tick::{integrate, interact, tick};
