//! Spatial lookups for pointer interaction

use glam::Vec2;

use super::state::Person;
use crate::consts::HOVER_SLACK;

/// Index of the first person (in insertion order) whose center lies within
/// `radius + HOVER_SLACK` of the cursor
///
/// Earliest index wins when several qualify, even if a later one is closer.
pub fn person_under_cursor(people: &[Person], cursor: Vec2, radius: f32) -> Option<usize> {
    let reach = radius + HOVER_SLACK;
    people.iter().position(|p| p.pos.distance(cursor) < reach)
}
