//! Display Heuristics
//!
//! Numbers the views derive from server data. These are visual cues, not
//! metrics: the roadmap bar steps by 20% per position and the streak ring
//! saturates at 30 days.

use chrono::DateTime;

use crate::models::RoadmapItem;

/// Percent added per roadmap position for unfinished items
pub const ROADMAP_STEP_PERCENT: i64 = 20;

/// Streak length at which the ring is drawn full
pub const STREAK_RING_DAYS: i64 = 30;

/// Bar fill for a roadmap item. Negative positions draw an empty bar. No upper
/// clamp: positions past 5 overflow and are cut off by the bar container.
pub fn roadmap_fill_percent(item: &RoadmapItem) -> i64 {
    if item.completed {
        100
    } else {
        item.order.max(0).saturating_mul(ROADMAP_STEP_PERCENT)
    }
}

pub fn roadmap_status_label(item: &RoadmapItem) -> &'static str {
    if item.completed {
        "Done"
    } else {
        "Pending"
    }
}

/// Fraction of the streak ring to fill, in `0.0..=1.0`.
pub fn streak_fill_fraction(streak: i64) -> f64 {
    streak.clamp(0, STREAK_RING_DAYS) as f64 / STREAK_RING_DAYS as f64
}

/// SVG `stroke-dasharray` for the ring path (path length normalized to 100).
pub fn streak_dash_array(streak: i64) -> String {
    format!("{}, 100", streak_fill_fraction(streak) * 100.0)
}

pub fn streak_label(streak: i64) -> String {
    format!("{streak}d")
}

/// Human-readable progress timestamp; unparseable values are shown verbatim.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%b %-d, %Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}
