//! Daily tips filtered by tracker mood
//!
//! Tips are either tagged with the tracker moods they suit or untagged
//! (general). A lookup returns the tagged tips for the requested mood plus
//! every untagged tip, shuffled. Nothing is scored.

use crate::error::{MindMattersError, Result};
use crate::types::TrackerMood;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Broad grouping of a tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipCategory {
    Mood,
    General,
    Health,
    Mindfulness,
}

/// A single tip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub id: String,
    pub text: String,
    pub category: TipCategory,
    /// Tracker moods this tip suits; `None` marks a general tip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_relevance: Option<Vec<TrackerMood>>,
}

impl Tip {
    pub fn new(id: &str, text: &str, category: TipCategory) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            category,
            mood_relevance: None,
        }
    }

    pub fn for_moods(mut self, moods: &[TrackerMood]) -> Self {
        self.mood_relevance = Some(moods.to_vec());
        self
    }

    /// True if the tip carries no mood tags
    pub fn is_general(&self) -> bool {
        self.mood_relevance.is_none()
    }

    fn suits(&self, mood: TrackerMood) -> bool {
        self.mood_relevance
            .as_ref()
            .is_some_and(|moods| moods.contains(&mood))
    }
}

/// Immutable list of tips
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipCatalog {
    tips: Vec<Tip>,
}

#[derive(Debug, Deserialize)]
struct TipFile {
    #[serde(rename = "tip", default)]
    tips: Vec<Tip>,
}

impl TipCatalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(tips: Vec<Tip>) -> Result<Self> {
        let mut seen = HashSet::new();
        for tip in &tips {
            if !seen.insert(tip.id.as_str()) {
                return Err(MindMattersError::InvalidCatalog(format!(
                    "duplicate tip id '{}'",
                    tip.id
                )));
            }
        }
        Ok(Self { tips })
    }

    pub fn tips(&self) -> &[Tip] {
        &self.tips
    }

    /// Tips for a tracker mood in declaration order, mood-specific first
    pub fn matching(&self, mood: Option<TrackerMood>) -> Vec<&Tip> {
        let mood_tips = self
            .tips
            .iter()
            .filter(|tip| mood.is_some_and(|m| tip.suits(m)));
        let general_tips = self.tips.iter().filter(|tip| tip.is_general());
        mood_tips.chain(general_tips).collect()
    }

    /// Tips for a tracker mood in random order
    ///
    /// Each call reshuffles; take the first element for a single daily tip.
    pub fn tips_for_mood<R: Rng + ?Sized>(
        &self,
        mood: Option<TrackerMood>,
        rng: &mut R,
    ) -> Vec<Tip> {
        let mut tips: Vec<Tip> = self.matching(mood).into_iter().cloned().collect();
        tips.shuffle(rng);

        debug!(
            "Selected {} tips for mood {}",
            tips.len(),
            mood.map(|m| m.as_str()).unwrap_or("none")
        );

        tips
    }

    /// Same as [`Self::tips_for_mood`] using the thread-local RNG
    pub fn tips_for_mood_random(&self, mood: Option<TrackerMood>) -> Vec<Tip> {
        let mut rng = rand::thread_rng();
        self.tips_for_mood(mood, &mut rng)
    }

    /// Parse tips from TOML (`[[tip]]` tables)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: TipFile = toml::from_str(content)?;
        Self::new(file.tips)
    }

    /// Load tips from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MindMattersError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read tip catalog {:?}: {}", path, e),
            ))
        })?;
        let catalog = Self::from_toml_str(&content)?;
        info!("Loaded {} tips from {:?}", catalog.tips.len(), path);
        Ok(catalog)
    }
}

impl Default for TipCatalog {
    fn default() -> Self {
        use TrackerMood::*;

        let tips = vec![
            Tip::new(
                "mood-1",
                "Channel your positive energy into helping others today",
                TipCategory::Mood,
            )
            .for_moods(&[Happy]),
            Tip::new(
                "mood-2",
                "Take a moment to list three things you are grateful for",
                TipCategory::Mood,
            )
            .for_moods(&[Neutral, Sad]),
            Tip::new(
                "mood-3",
                "Remember that it is okay to not be okay. Consider talking to someone you trust",
                TipCategory::Mood,
            )
            .for_moods(&[Sad]),
            Tip::new(
                "general-1",
                "Stay hydrated! Aim to drink 8 glasses of water today",
                TipCategory::General,
            ),
            Tip::new(
                "general-2",
                "Take short breaks every hour to stretch and move around",
                TipCategory::General,
            ),
            Tip::new(
                "health-1",
                "Try to get 7-8 hours of sleep tonight for better mental clarity",
                TipCategory::Health,
            ),
            Tip::new(
                "health-2",
                "Consider a short walk outside to boost your vitamin D levels",
                TipCategory::Health,
            ),
            Tip::new(
                "mindful-1",
                "Practice deep breathing: inhale for 4 counts, hold for 4, exhale for 4",
                TipCategory::Mindfulness,
            ),
            Tip::new(
                "mindful-2",
                "Take a mindful moment to observe your surroundings using all five senses",
                TipCategory::Mindfulness,
            ),
        ];

        Self { tips }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    fn ids(tips: &[Tip]) -> BTreeSet<String> {
        tips.iter().map(|t| t.id.clone()).collect()
    }

    fn general_ids() -> BTreeSet<String> {
        ["general-1", "general-2", "health-1", "health-2", "mindful-1", "mindful-2"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_happy_membership() {
        let catalog = TipCatalog::default();
        let mut rng = StdRng::seed_from_u64(1);
        let tips = catalog.tips_for_mood(Some(TrackerMood::Happy), &mut rng);

        let mut expected = general_ids();
        expected.insert("mood-1".to_string());
        assert_eq!(ids(&tips), expected);
        assert_eq!(tips.len(), expected.len());
        assert!(!tips.iter().any(|t| t.id == "mood-3"));
    }

    #[test]
    fn test_sad_includes_shared_tip() {
        let catalog = TipCatalog::default();
        let mut rng = StdRng::seed_from_u64(2);
        let tips = catalog.tips_for_mood(Some(TrackerMood::Sad), &mut rng);

        let mut expected = general_ids();
        expected.insert("mood-2".to_string());
        expected.insert("mood-3".to_string());
        assert_eq!(ids(&tips), expected);
    }

    #[test]
    fn test_no_mood_returns_general_only() {
        let catalog = TipCatalog::default();
        let tips = catalog.tips_for_mood_random(None);
        assert_eq!(ids(&tips), general_ids());
        assert!(tips.iter().all(Tip::is_general));
    }

    #[test]
    fn test_matching_puts_mood_tips_first() {
        let catalog = TipCatalog::default();
        let matched = catalog.matching(Some(TrackerMood::Neutral));
        assert_eq!(matched[0].id, "mood-2");
        assert_eq!(matched.len(), 7);
    }

    #[test]
    fn test_shuffle_is_seeded_and_varies() {
        let catalog = TipCatalog::default();

        let first = catalog.tips_for_mood(Some(TrackerMood::Happy), &mut StdRng::seed_from_u64(9));
        let second = catalog.tips_for_mood(Some(TrackerMood::Happy), &mut StdRng::seed_from_u64(9));
        assert_eq!(first, second);

        // Across many seeds, more than one ordering shows up
        let orders: HashSet<Vec<String>> = (0..20u64)
            .map(|seed| {
                catalog
                    .tips_for_mood(Some(TrackerMood::Happy), &mut StdRng::seed_from_u64(seed))
                    .into_iter()
                    .map(|t| t.id)
                    .collect()
            })
            .collect();
        assert!(orders.len() > 1);
    }

    #[test]
    fn test_shuffle_covers_every_position() {
        // Each tip should reach the first slot over enough draws
        let catalog = TipCatalog::default();
        let mut rng = StdRng::seed_from_u64(123);
        let mut leaders = HashSet::new();
        for _ in 0..500 {
            let tips = catalog.tips_for_mood(Some(TrackerMood::Happy), &mut rng);
            leaders.insert(tips[0].id.clone());
        }
        assert_eq!(leaders.len(), 7);
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
            [[tip]]
            id = "sleep"
            text = "Go to bed early"
            category = "health"

            [[tip]]
            id = "smile"
            text = "Smile at someone"
            category = "mood"
            mood_relevance = ["happy", "neutral"]
        "#;

        let catalog = TipCatalog::from_toml_str(toml).unwrap();
        assert_eq!(catalog.tips().len(), 2);
        assert!(catalog.tips()[0].is_general());
        assert_eq!(catalog.matching(Some(TrackerMood::Neutral)).len(), 2);
        assert_eq!(catalog.matching(Some(TrackerMood::Sad)).len(), 1);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = TipCatalog::new(vec![
            Tip::new("a", "one", TipCategory::General),
            Tip::new("a", "two", TipCategory::Health),
        ]);
        assert!(matches!(result, Err(MindMattersError::InvalidCatalog(_))));
    }
}
