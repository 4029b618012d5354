//! Core data types for the Mind Matters companion
//!
//! This module defines the values that flow between the assessment,
//! recommendation, tips and storage layers: the two mood vocabularies,
//! the user-need feature vector, and the records a store keeps for users.

use crate::error::MindMattersError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use uuid::Uuid;

/// Answers to an assessment: question id -> selected option text
pub type Answers = BTreeMap<u32, String>;

/// Coarse mood chosen at the start of an assessment
///
/// Drives the feature-vector prior. Not interchangeable with [`TrackerMood`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentMood {
    Positive,
    Neutral,
    Negative,
}

impl AssessmentMood {
    pub const ALL: [AssessmentMood; 3] = [Self::Positive, Self::Neutral, Self::Negative];

    /// Parse a mood label, returning None for anything outside the vocabulary
    ///
    /// Callers that receive mood text from an untrusted source use this to
    /// fall back to a zero prior instead of failing.
    pub fn parse_lenient(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl FromStr for AssessmentMood {
    type Err = MindMattersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "neutral" => Ok(Self::Neutral),
            "negative" => Ok(Self::Negative),
            other => Err(MindMattersError::InvalidMood(other.to_string())),
        }
    }
}

impl std::fmt::Display for AssessmentMood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Mood logged in the daily tracker
///
/// Only used for tip filtering and progress charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackerMood {
    Happy,
    Neutral,
    Sad,
}

impl TrackerMood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Neutral => "neutral",
            Self::Sad => "sad",
        }
    }

    /// Score shown in the weekly progress chart
    pub fn score(&self) -> u8 {
        match self {
            Self::Happy => 100,
            Self::Neutral => 50,
            Self::Sad => 25,
        }
    }
}

impl FromStr for TrackerMood {
    type Err = MindMattersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(Self::Happy),
            "neutral" => Ok(Self::Neutral),
            "sad" => Ok(Self::Sad),
            other => Err(MindMattersError::InvalidMood(other.to_string())),
        }
    }
}

impl std::fmt::Display for TrackerMood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inferred user needs on the five recommendation axes
///
/// Axis order is fixed: stress, anxiety, mood, energy, social. It pairs
/// positionally with [`crate::recommendation::BenefitVector`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UserFeatures {
    pub stress_level: f32,
    pub anxiety_level: f32,
    pub mood_level: f32,
    pub energy_level: f32,
    pub social_need: f32,
}

impl UserFeatures {
    /// Feature values in axis order
    pub fn to_vector(&self) -> [f32; 5] {
        [
            self.stress_level,
            self.anxiety_level,
            self.mood_level,
            self.energy_level,
            self.social_need,
        ]
    }

    /// Copy with every field clamped to [0.0, 1.0]
    pub fn clamped(&self) -> Self {
        Self {
            stress_level: self.stress_level.clamp(0.0, 1.0),
            anxiety_level: self.anxiety_level.clamp(0.0, 1.0),
            mood_level: self.mood_level.clamp(0.0, 1.0),
            energy_level: self.energy_level.clamp(0.0, 1.0),
            social_need: self.social_need.clamp(0.0, 1.0),
        }
    }
}

/// Unique identifier for users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Unique across the store
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Partial update for a user; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdates {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// One daily-tracker mood log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: Uuid,
    pub user_id: UserId,
    pub date: DateTime<Utc>,
    pub mood: TrackerMood,
}

impl MoodEntry {
    pub fn new(user_id: UserId, mood: TrackerMood, date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            date,
            mood,
        }
    }
}

/// One completed assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentEntry {
    pub id: Uuid,
    pub user_id: UserId,
    pub date: DateTime<Utc>,
    pub mood: AssessmentMood,
    pub answers: Answers,
    /// Features computed at submission time, if the caller kept them
    #[serde(default)]
    pub features: Option<UserFeatures>,
}

impl AssessmentEntry {
    pub fn new(user_id: UserId, mood: AssessmentMood, answers: Answers) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            date: Utc::now(),
            mood,
            answers,
            features: None,
        }
    }
}
