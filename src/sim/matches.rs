//! Shared-birthday detection results
//!
//! Filled in by the pairwise pass of each tick and rebuilt from scratch every
//! tick; nothing carries over between ticks.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::calendar::{Birthday, date_label};

/// Matches found during one tick
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Distinct birthdays shared by at least two people (sorted)
    pub days: BTreeSet<Birthday>,
    /// Index pairs `(i, j)` with `i < j` that share a birthday, in pass order
    pub pairs: Vec<(usize, usize)>,
}

impl MatchReport {
    /// Record that people `i` and `j` share `day`
    pub fn record(&mut self, i: usize, j: usize, day: Birthday) {
        self.days.insert(day);
        self.pairs.push((i, j));
    }

    #[inline]
    pub fn has_match(&self) -> bool {
        !self.days.is_empty()
    }

    #[inline]
    pub fn distinct_days(&self) -> usize {
        self.days.len()
    }

    /// Status text: "YES (n)" or "NO"
    pub fn status_label(&self) -> String {
        if self.has_match() {
            format!("YES ({})", self.distinct_days())
        } else {
            "NO".to_string()
        }
    }

    /// Banner listing the matched dates, e.g. "MATCHES: Jan 1, Feb 3"
    pub fn banner(&self) -> Option<String> {
        if !self.has_match() {
            return None;
        }
        let dates: Vec<String> = self.days.iter().map(|&d| date_label(d)).collect();
        Some(format!("MATCHES: {}", dates.join(", ")))
    }
}
