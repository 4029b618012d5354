//! Daily tips command

use mind_matters_core::{error::Result, CompanionConfig, TrackerMood};

/// Print up to `count` tips for a tracker mood
pub fn handle(config: &CompanionConfig, mood: Option<&str>, count: usize) -> Result<()> {
    let mood = mood.map(str::parse::<TrackerMood>).transpose()?;
    let catalog = config.tip_catalog()?;

    let tips = catalog.tips_for_mood_random(mood);
    if tips.is_empty() {
        println!("No tips available.");
        return Ok(());
    }

    for tip in tips.iter().take(count) {
        println!("* {}", tip.text);
    }
    Ok(())
}
