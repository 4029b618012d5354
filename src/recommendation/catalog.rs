//! Activity catalog: benefit profiles plus display text.
//!
//! The catalog is an immutable value handed to the ranker. The built-in
//! default carries six activities; a TOML file can replace it:
//!
//! ```toml
//! [[activity]]
//! name = "meditation"
//! description = "Practice mindful meditation to center yourself"
//! benefits = ["Reduces stress and anxiety"]
//!
//! [activity.profile]
//! stress_relief = 0.9
//! anxiety_relief = 0.8
//! mood_boost = 0.6
//! energy_boost = 0.3
//! social_interaction = 0.1
//! ```

use crate::error::{MindMattersError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::info;

/// How strongly an activity addresses each need axis
///
/// Axis order matches [`crate::types::UserFeatures::to_vector`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenefitVector {
    pub stress_relief: f32,
    pub anxiety_relief: f32,
    pub mood_boost: f32,
    pub energy_boost: f32,
    pub social_interaction: f32,
}

impl BenefitVector {
    pub const fn new(
        stress_relief: f32,
        anxiety_relief: f32,
        mood_boost: f32,
        energy_boost: f32,
        social_interaction: f32,
    ) -> Self {
        Self {
            stress_relief,
            anxiety_relief,
            mood_boost,
            energy_boost,
            social_interaction,
        }
    }

    /// Benefit values in axis order
    pub fn to_vector(&self) -> [f32; 5] {
        [
            self.stress_relief,
            self.anxiety_relief,
            self.mood_boost,
            self.energy_boost,
            self.social_interaction,
        ]
    }
}

/// Named activity with its benefit profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityProfile {
    pub name: String,
    pub profile: BenefitVector,
}

impl ActivityProfile {
    pub fn new(name: impl Into<String>, profile: BenefitVector) -> Self {
        Self {
            name: name.into(),
            profile,
        }
    }
}

/// Display text attached to an activity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityDetails {
    pub description: String,
    pub benefits: Vec<String>,
}

/// Immutable set of candidate activities in declaration order
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCatalog {
    activities: Vec<ActivityProfile>,
    details: HashMap<String, ActivityDetails>,
}

/// On-disk shape of one catalog entry
#[derive(Debug, Deserialize, Serialize)]
struct CatalogEntry {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    benefits: Vec<String>,
    profile: ProfileRecord,
}

/// On-disk benefit values, kept as f64 so saved files show short decimals
#[derive(Debug, Deserialize, Serialize)]
struct ProfileRecord {
    stress_relief: f64,
    anxiety_relief: f64,
    mood_boost: f64,
    energy_boost: f64,
    social_interaction: f64,
}

/// Widen through the shortest decimal form: 0.9f32 becomes 0.9, not 0.8999999761581421
fn widen(value: f32) -> f64 {
    value.to_string().parse().unwrap_or(f64::from(value))
}

impl From<BenefitVector> for ProfileRecord {
    fn from(v: BenefitVector) -> Self {
        Self {
            stress_relief: widen(v.stress_relief),
            anxiety_relief: widen(v.anxiety_relief),
            mood_boost: widen(v.mood_boost),
            energy_boost: widen(v.energy_boost),
            social_interaction: widen(v.social_interaction),
        }
    }
}

impl From<ProfileRecord> for BenefitVector {
    fn from(r: ProfileRecord) -> Self {
        BenefitVector::new(
            r.stress_relief as f32,
            r.anxiety_relief as f32,
            r.mood_boost as f32,
            r.energy_boost as f32,
            r.social_interaction as f32,
        )
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct CatalogFile {
    #[serde(rename = "activity", default)]
    activities: Vec<CatalogEntry>,
}

impl ActivityCatalog {
    /// Build a catalog, validating names and benefit values
    pub fn new(
        activities: Vec<ActivityProfile>,
        details: HashMap<String, ActivityDetails>,
    ) -> Result<Self> {
        if activities.is_empty() {
            return Err(MindMattersError::InvalidCatalog(
                "catalog has no activities".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for activity in &activities {
            if !seen.insert(activity.name.as_str()) {
                return Err(MindMattersError::InvalidCatalog(format!(
                    "duplicate activity '{}'",
                    activity.name
                )));
            }
            if activity
                .profile
                .to_vector()
                .iter()
                .any(|v| !(0.0..=1.0).contains(v))
            {
                return Err(MindMattersError::InvalidCatalog(format!(
                    "benefit values for '{}' must lie in [0, 1]",
                    activity.name
                )));
            }
        }

        Ok(Self {
            activities,
            details,
        })
    }

    /// Activities in declaration order
    pub fn activities(&self) -> &[ActivityProfile] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Description for an activity, empty if none is known
    pub fn description(&self, name: &str) -> &str {
        self.details
            .get(name)
            .map(|d| d.description.as_str())
            .unwrap_or("")
    }

    /// Benefit strings for an activity, empty if none are known
    pub fn benefits(&self, name: &str) -> &[String] {
        self.details
            .get(name)
            .map(|d| d.benefits.as_slice())
            .unwrap_or(&[])
    }

    /// Parse a catalog from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;

        let mut activities = Vec::with_capacity(file.activities.len());
        let mut details = HashMap::new();
        for entry in file.activities {
            details.insert(
                entry.name.clone(),
                ActivityDetails {
                    description: entry.description,
                    benefits: entry.benefits,
                },
            );
            activities.push(ActivityProfile::new(entry.name, entry.profile.into()));
        }

        Self::new(activities, details)
    }

    /// Load a catalog from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MindMattersError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read activity catalog {:?}: {}", path, e),
            ))
        })?;

        let catalog = Self::from_toml_str(&content)?;
        info!(
            "Loaded activity catalog with {} activities from {:?}",
            catalog.len(),
            path
        );
        Ok(catalog)
    }

    /// Serialize the catalog back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        let file = CatalogFile {
            activities: self
                .activities
                .iter()
                .map(|a| CatalogEntry {
                    name: a.name.clone(),
                    description: self.description(&a.name).to_string(),
                    benefits: self.benefits(&a.name).to_vec(),
                    profile: a.profile.into(),
                })
                .collect(),
        };
        toml::to_string_pretty(&file)
            .map_err(|e| MindMattersError::Other(format!("Failed to serialize catalog: {}", e)))
    }
}

impl Default for ActivityCatalog {
    fn default() -> Self {
        let entries: [(&str, BenefitVector, &str, [&str; 3]); 6] = [
            (
                "meditation",
                BenefitVector::new(0.9, 0.8, 0.6, 0.3, 0.1),
                "Practice mindful meditation to center yourself and find inner peace",
                [
                    "Reduces stress and anxiety",
                    "Improves focus and clarity",
                    "Promotes emotional balance",
                ],
            ),
            (
                "exercise",
                BenefitVector::new(0.7, 0.6, 0.8, 0.9, 0.4),
                "Engage in physical activity to boost your mood and energy levels",
                [
                    "Boosts endorphins and mood",
                    "Increases energy levels",
                    "Improves physical health",
                ],
            ),
            (
                "socializing",
                BenefitVector::new(0.5, 0.4, 0.8, 0.6, 1.0),
                "Connect with friends or join group activities",
                [
                    "Provides emotional support",
                    "Reduces feelings of isolation",
                    "Creates positive experiences",
                ],
            ),
            (
                "creativeActivities",
                BenefitVector::new(0.8, 0.7, 0.7, 0.4, 0.2),
                "Express yourself through art, music, or other creative pursuits",
                [
                    "Encourages self-expression",
                    "Reduces stress through focus",
                    "Builds confidence through creation",
                ],
            ),
            (
                "natureWalk",
                BenefitVector::new(0.8, 0.7, 0.7, 0.6, 0.3),
                "Take a refreshing walk in nature to clear your mind",
                [
                    "Connects you with nature",
                    "Provides gentle exercise",
                    "Clears mental clutter",
                ],
            ),
            (
                "journaling",
                BenefitVector::new(0.7, 0.8, 0.6, 0.3, 0.1),
                "Write down your thoughts and feelings to gain clarity",
                [
                    "Processes emotions effectively",
                    "Tracks personal growth",
                    "Identifies patterns in thoughts",
                ],
            ),
        ];

        let mut activities = Vec::with_capacity(entries.len());
        let mut details = HashMap::with_capacity(entries.len());
        for (name, profile, description, benefits) in entries {
            activities.push(ActivityProfile::new(name, profile));
            details.insert(
                name.to_string(),
                ActivityDetails {
                    description: description.to_string(),
                    benefits: benefits.iter().map(|b| b.to_string()).collect(),
                },
            );
        }

        Self {
            activities,
            details,
        }
    }
}
