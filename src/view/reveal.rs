use std::collections::HashSet;

use crate::config::DEFAULT_REVEAL_THRESHOLD;

/// Page sections that animate in on scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Learn,
    Modules,
    Requirements,
    Description,
    Register,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::Learn,
        Section::Modules,
        Section::Requirements,
        Section::Description,
        Section::Register,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Learn => "learn",
            Section::Modules => "modules",
            Section::Requirements => "requirements",
            Section::Description => "description",
            Section::Register => "register",
        }
    }
}

/// Tracks which sections have been scrolled into view. Once revealed a
/// section stays revealed for the lifetime of the tracker.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f64,
    revealed: HashSet<Section>,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}

impl RevealTracker {
    /// `threshold` is clamped to `(0, 1]`.
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.clamp(f64::EPSILON, 1.0)
        } else {
            DEFAULT_REVEAL_THRESHOLD
        };
        Self {
            threshold,
            revealed: HashSet::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Records how much of `section` is visible and returns whether it is
    /// revealed afterwards.
    pub fn observe(&mut self, section: Section, visible_fraction: f64) -> bool {
        if visible_fraction >= self.threshold {
            self.revealed.insert(section);
        }
        self.is_revealed(section)
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed.contains(&section)
    }
}
