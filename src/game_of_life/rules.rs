//! Survive/birth rule sets deciding a cell's next value

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A configurable survive/birth rule.
///
/// A live cell stays alive when its live-neighbor count is in `survive`;
/// a dead cell comes alive when the count is in `birth`. Counts above the
/// active neighborhood's maximum are permitted but can never match, and
/// empty sets are a valid degenerate rule under which nothing survives or
/// is born.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub survive: BTreeSet<u8>,
    pub birth: BTreeSet<u8>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::classic()
    }
}

impl RuleSet {
    /// Build a rule set from arbitrary survive/birth neighbor counts
    pub fn new(
        survive: impl IntoIterator<Item = u8>,
        birth: impl IntoIterator<Item = u8>,
    ) -> Self {
        Self {
            survive: survive.into_iter().collect(),
            birth: birth.into_iter().collect(),
        }
    }

    /// Conway's classic rule, B3/S23
    pub fn classic() -> Self {
        Self::new([2, 3], [3])
    }

    /// Decide a cell's next value from its current value and live-neighbor
    /// count. Total function, no failure mode.
    pub fn next_value(&self, currently_alive: bool, live_neighbors: u8) -> bool {
        if currently_alive {
            self.survive.contains(&live_neighbors)
        } else {
            self.birth.contains(&live_neighbors)
        }
    }
}
