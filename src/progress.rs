//! Mood history summaries for the dashboard
//!
//! The weekly chart has one slot per weekday, Sunday first. Only entries
//! from the seven days ending at the reference date count, and a later entry
//! for the same day replaces an earlier one.

use crate::tips::{Tip, TipCatalog};
use crate::types::{MoodEntry, TrackerMood};
use chrono::{Datelike, Duration, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Weekday slots, Sunday first
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Chart data for the week ending at `end`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyProgress {
    pub end: NaiveDate,
    /// Score per weekday slot; 0 where nothing was logged
    pub scores: [u8; 7],
}

impl WeeklyProgress {
    /// Build the chart from a user's mood history
    pub fn from_entries(entries: &[MoodEntry], end: NaiveDate) -> Self {
        let start = end - Duration::days(6);

        let mut in_window: Vec<&MoodEntry> = entries
            .iter()
            .filter(|e| {
                let day = e.date.date_naive();
                day >= start && day <= end
            })
            .collect();
        in_window.sort_by_key(|e| e.date);

        let mut scores = [0u8; 7];
        for entry in in_window {
            let slot = entry.date.weekday().num_days_from_sunday() as usize;
            scores[slot] = entry.mood.score();
        }

        Self { end, scores }
    }

    /// Number of days with a logged mood
    pub fn days_logged(&self) -> usize {
        self.scores.iter().filter(|&&s| s > 0).count()
    }

    /// Mean score over the logged days
    pub fn average(&self) -> Option<f32> {
        let logged = self.days_logged();
        if logged == 0 {
            return None;
        }
        let total: u32 = self.scores.iter().map(|&s| u32::from(s)).sum();
        Some(total as f32 / logged as f32)
    }
}

/// Most recent mood logged on `day`
pub fn todays_mood(entries: &[MoodEntry], day: NaiveDate) -> Option<TrackerMood> {
    entries
        .iter()
        .filter(|e| e.date.date_naive() == day)
        .max_by_key(|e| e.date)
        .map(|e| e.mood)
}

/// Most recent mood in the history
pub fn latest_mood(entries: &[MoodEntry]) -> Option<TrackerMood> {
    entries.iter().max_by_key(|e| e.date).map(|e| e.mood)
}

/// Tip of the day for the user's latest mood
pub fn daily_tip<R: Rng + ?Sized>(
    entries: &[MoodEntry],
    catalog: &TipCatalog,
    rng: &mut R,
) -> Option<Tip> {
    catalog
        .tips_for_mood(latest_mood(entries), rng)
        .into_iter()
        .next()
}
