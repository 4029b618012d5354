//! Mind Matters - Wellness Companion Core
//!
//! Library behind the Mind Matters companion: users log daily moods, take a
//! branching self-assessment, and receive activity and tip recommendations.
//!
//! # Architecture
//!
//! - **Types**: Mood vocabularies, feature vectors, stored records
//! - **Assessment**: Mood-dependent questionnaire and answer validation
//! - **Recommendation**: Feature extraction and cosine-similarity ranking
//! - **Tips**: Mood-filtered, shuffled daily tips
//! - **Progress**: Weekly mood chart and daily tip selection
//! - **Storage**: User/mood/assessment store contract and in-memory backend
//!
//! # Example
//!
//! ```
//! use mind_matters_core::{ActivityCatalog, Answers, AssessmentMood, Recommender};
//!
//! let recommender = Recommender::new(ActivityCatalog::default());
//! let mut answers = Answers::new();
//! answers.insert(1, "Work/Study".to_string());
//!
//! let outcome = recommender.recommend(Some(AssessmentMood::Negative), &answers);
//! for rec in &outcome.recommendations {
//!     println!("{} ({:.2}): {}", rec.activity, rec.score, rec.description);
//! }
//! ```

pub mod assessment;
pub mod config;
pub mod error;
pub mod progress;
pub mod recommendation;
pub mod storage;
pub mod tips;
pub mod types;

// Re-export commonly used types
pub use crate::config::CompanionConfig;
pub use error::{MindMattersError, Result};
pub use progress::WeeklyProgress;
pub use recommendation::{
    ActivityCatalog, ActivityProfile, ActivityRanker, BenefitVector, FeatureExtractor,
    Recommendation, RecommendationOutcome, Recommender,
};
pub use storage::{MemoryStore, WellnessStore};
pub use tips::{Tip, TipCatalog, TipCategory};
pub use types::{
    Answers, AssessmentEntry, AssessmentMood, MoodEntry, TrackerMood, User, UserFeatures, UserId,
    UserUpdates,
};
