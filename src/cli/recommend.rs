//! Assessment scoring command

use mind_matters_core::{
    assessment, error::Result, recommendation::personalized_tips, Answers, AssessmentEntry,
    AssessmentMood, CompanionConfig, MindMattersError, WellnessStore,
};
use tracing::{debug, info, warn};

use super::helpers::{open_store, require_user};

pub struct RecommendArgs {
    pub mood: String,
    pub answers: Answers,
    pub top_k: Option<usize>,
    pub strict: bool,
    pub email: Option<String>,
    pub format: String,
}

/// Handle the recommend command
pub async fn handle(config: &CompanionConfig, args: RecommendArgs) -> Result<()> {
    // Recorded assessments require a known mood
    let mood = if args.strict || args.email.is_some() {
        let mood: AssessmentMood = args.mood.parse()?;
        if args.strict {
            assessment::validate(mood, &args.answers)?;
        }
        Some(mood)
    } else {
        let parsed = AssessmentMood::parse_lenient(&args.mood);
        if parsed.is_none() {
            warn!("Unrecognised assessment mood '{}', using zero prior", args.mood);
        }
        parsed
    };

    let mut recommender = config.recommender()?;
    if let Some(k) = args.top_k {
        if k == 0 {
            return Err(MindMattersError::Config(::config::ConfigError::Message(
                "top_k must be at least 1".to_string(),
            )));
        }
        recommender = recommender.with_top_k(k);
    }

    let outcome = recommender.recommend(mood, &args.answers);
    let tips = personalized_tips(mood, &outcome.features, &mut rand::thread_rng());
    debug!("Features: {:?}", outcome.features);

    if let (Some(email), Some(mood)) = (&args.email, mood) {
        let (store, path) = open_store(config).await?;
        let user = require_user(&store, email).await?;
        let mut entry = AssessmentEntry::new(user.id, mood, args.answers.clone());
        entry.features = Some(outcome.features);
        store.save_assessment(&entry).await?;
        store.save(&path).await?;
        info!("Recorded assessment {} for {}", entry.id, email);
    }

    if args.format == "json" {
        let output = serde_json::json!({
            "features": outcome.features,
            "recommendations": outcome.recommendations,
            "tips": tips,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Recommended activities:\n");
    for (i, rec) in outcome.recommendations.iter().enumerate() {
        println!("{}. {} (match {:.0}%)", i + 1, rec.activity, rec.score * 100.0);
        if !rec.description.is_empty() {
            println!("   {}", rec.description);
        }
        for benefit in &rec.benefits {
            println!("     + {}", benefit);
        }
    }

    if !tips.is_empty() {
        println!("\nTips for today:");
        for tip in &tips {
            println!("  * {}", tip);
        }
    }

    Ok(())
}
