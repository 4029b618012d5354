//! Mood journal commands: register, log-mood and progress

use chrono::Utc;
use mind_matters_core::{
    error::Result,
    progress::{daily_tip, todays_mood, WEEKDAY_LABELS},
    CompanionConfig, MoodEntry, TrackerMood, WeeklyProgress, WellnessStore,
};
use tracing::info;

use super::helpers::{open_store, require_user};

/// Register a new user
pub async fn register(config: &CompanionConfig, name: &str, email: &str) -> Result<()> {
    let (store, path) = open_store(config).await?;
    let user = store.create_user(name, email).await?;
    store.save(&path).await?;

    println!("Registered {} <{}>", user.name, user.email);
    Ok(())
}

/// Record today's tracker mood
pub async fn log_mood(config: &CompanionConfig, email: &str, mood: &str) -> Result<()> {
    let mood: TrackerMood = mood.parse()?;
    let (store, path) = open_store(config).await?;
    let user = require_user(&store, email).await?;

    store
        .save_mood(&MoodEntry::new(user.id, mood, Utc::now()))
        .await?;
    store.save(&path).await?;

    info!("Logged {} mood for {}", mood, email);
    println!("Mood recorded in weekly progress: {}", mood);
    Ok(())
}

/// Show the weekly chart, today's mood and a tip
pub async fn progress(config: &CompanionConfig, email: &str, format: &str) -> Result<()> {
    let (store, _) = open_store(config).await?;
    let user = require_user(&store, email).await?;
    let entries = store.list_moods(user.id).await?;

    let today = Utc::now().date_naive();
    let weekly = WeeklyProgress::from_entries(&entries, today);
    let tip = daily_tip(&entries, &config.tip_catalog()?, &mut rand::thread_rng());

    if format == "json" {
        let output = serde_json::json!({
            "weekly": weekly,
            "today": todays_mood(&entries, today),
            "tip": tip,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Weekly progress for {}:\n", user.name);
    for (label, score) in WEEKDAY_LABELS.iter().zip(weekly.scores.iter()) {
        let bar = "#".repeat(usize::from(*score) / 10);
        println!("  {} {:<10} {:>3}", label, bar, score);
    }
    if let Some(avg) = weekly.average() {
        println!("\n  Average: {:.0} over {} day(s)", avg, weekly.days_logged());
    }

    match todays_mood(&entries, today) {
        Some(mood) => println!("  Today: {}", mood),
        None => println!("  Today: not logged yet"),
    }

    if let Some(tip) = tip {
        println!("\nTip of the day: {}", tip.text);
    }
    Ok(())
}
