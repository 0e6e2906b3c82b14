//! Statistics aggregator state: the four counters and the progress bar.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use crate::net::types::ReadStatistics;

/// Last statistics accepted for display.
#[derive(Clone, Debug, Default)]
pub struct StatsState {
    pub current: Option<ReadStatistics>,
}

impl StatsState {
    /// Accept `stats` for display if `read + unread == total`.
    ///
    /// Returns `false` and keeps the previous values otherwise.
    pub fn apply(&mut self, stats: ReadStatistics) -> bool {
        if !stats.is_consistent() {
            return false;
        }
        self.current = Some(stats);
        true
    }

    #[must_use]
    pub fn slots(&self) -> StatSlots {
        self.current.map_or_else(StatSlots::empty, |s| StatSlots::from_stats(&s))
    }
}

/// Display strings for the statistics panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatSlots {
    pub total: String,
    pub read: String,
    pub unread: String,
    pub percentage: String,
    /// Inline style for the progress bar.
    pub bar_style: String,
    pub aria_valuenow: String,
}

impl StatSlots {
    fn empty() -> Self {
        Self::from_stats(&ReadStatistics::default())
    }

    #[must_use]
    pub fn from_stats(stats: &ReadStatistics) -> Self {
        let pct = format_percentage(stats.porcentaje_leidas);
        Self {
            total: stats.total.to_string(),
            read: stats.leidas.to_string(),
            unread: stats.no_leidas.to_string(),
            percentage: format!("{pct}%"),
            bar_style: format!("width: {pct}%"),
            aria_valuenow: pct,
        }
    }
}

/// One decimal, dropped when it is zero (`66.7`, `100`).
#[must_use]
pub fn format_percentage(pct: f64) -> String {
    let rounded = (pct.clamp(0.0, 100.0) * 10.0).round() / 10.0;
    if rounded.fract().abs() < f64::EPSILON { format!("{rounded:.0}") } else { format!("{rounded:.1}") }
}
