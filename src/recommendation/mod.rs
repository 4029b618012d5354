//! Activity recommendations for assessment submissions.
//!
//! Two stages run per submission:
//!
//! - **FeatureExtractor**: (assessment mood, answers) -> [`UserFeatures`]
//! - **ActivityRanker**: features + [`ActivityCatalog`] -> top-k [`Recommendation`]s
//!
//! Both are pure. The catalog is an explicit immutable value rather than a
//! global, so tests and callers can supply their own.
//!
//! # Usage
//!
//! ```rust
//! use mind_matters_core::recommendation::{ActivityCatalog, Recommender};
//! use mind_matters_core::types::{Answers, AssessmentMood};
//!
//! let recommender = Recommender::new(ActivityCatalog::default());
//!
//! let mut answers = Answers::new();
//! answers.insert(1, "Work/Study".to_string());
//! answers.insert(3, "Social support".to_string());
//!
//! let outcome = recommender.recommend(Some(AssessmentMood::Negative), &answers);
//! assert_eq!(outcome.recommendations.len(), 3);
//! ```

pub mod catalog;
pub mod feature_extractor;
pub mod personalized_tips;
pub mod ranker;
pub mod similarity;

pub use catalog::{ActivityCatalog, ActivityDetails, ActivityProfile, BenefitVector};
pub use feature_extractor::FeatureExtractor;
pub use personalized_tips::{personalized_tips, PERSONALIZED_TIP_COUNT};
pub use ranker::{ActivityRanker, Recommendation, DEFAULT_TOP_K};
pub use similarity::cosine_similarity;

use crate::types::{Answers, AssessmentMood, UserFeatures};
use serde::{Deserialize, Serialize};

/// Features and ranked activities for one submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationOutcome {
    pub features: UserFeatures,
    pub recommendations: Vec<Recommendation>,
}

/// Extractor and ranker bound to one catalog
#[derive(Debug, Clone)]
pub struct Recommender {
    extractor: FeatureExtractor,
    ranker: ActivityRanker,
    catalog: ActivityCatalog,
    top_k: usize,
}

impl Recommender {
    /// Create a recommender returning [`DEFAULT_TOP_K`] activities
    pub fn new(catalog: ActivityCatalog) -> Self {
        Self {
            extractor: FeatureExtractor::new(),
            ranker: ActivityRanker::new(),
            catalog,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Override how many activities are returned
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn catalog(&self) -> &ActivityCatalog {
        &self.catalog
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Extract features and rank the catalog against them
    pub fn recommend(
        &self,
        mood: Option<AssessmentMood>,
        answers: &Answers,
    ) -> RecommendationOutcome {
        let features = self.extractor.extract_features(mood, answers);
        let recommendations = self.ranker.rank(&features, &self.catalog, self.top_k);
        RecommendationOutcome {
            features,
            recommendations,
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(ActivityCatalog::default())
    }
}
