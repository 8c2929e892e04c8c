//! Render collaborator seam
//!
//! The simulation hands a borrowed [`FrameView`] to a [`Renderer`] once per
//! frame. Drawing itself lives outside this crate; [`LogRenderer`] reports
//! the frame through `log` for headless runs.

use glam::Vec2;

use crate::Bounds;
use crate::sim::{MatchReport, Person, date_label};

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub tick: u64,
    pub bounds: Bounds,
    pub radius: f32,
    pub people: &'a [Person],
    pub report: &'a MatchReport,
    /// Person under the cursor, if any
    pub hovered: Option<usize>,
    /// Static probability text for the current population, e.g. "50.73%"
    pub probability: &'a str,
}

impl FrameView<'_> {
    /// Line endpoints joining every pair that shares a birthday
    pub fn match_lines(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.report
            .pairs
            .iter()
            .map(|&(i, j)| (self.people[i].pos, self.people[j].pos))
    }

    /// Tooltip text for the hovered person
    pub fn tooltip(&self) -> Option<String> {
        self.hovered
            .and_then(|i| self.people.get(i))
            .map(|p| date_label(p.birthday()))
    }
}

/// Consumer of simulation frames
pub trait Renderer {
    fn render(&mut self, frame: &FrameView<'_>);
}

/// Headless renderer: per-frame summary at debug level, match changes at info
#[derive(Debug, Default)]
pub struct LogRenderer {
    last_status: Option<String>,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &FrameView<'_>) {
        let status = frame.report.status_label();
        log::debug!(
            "Tick {}: {} people, {} matched pairs, status {}",
            frame.tick,
            frame.people.len(),
            frame.report.pairs.len(),
            status
        );

        if self.last_status.as_deref() != Some(status.as_str()) {
            match frame.report.banner() {
                Some(banner) => log::info!("Tick {}: {} [{}]", frame.tick, banner, status),
                None => log::info!("Tick {}: no shared birthdays", frame.tick),
            }
            self.last_status = Some(status);
        }

        if let Some(tooltip) = frame.tooltip() {
            log::debug!("Hovering {}", tooltip);
        }
    }
}
