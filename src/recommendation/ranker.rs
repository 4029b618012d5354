//! Ranking catalog activities against a user's needs.
//!
//! Each activity is scored by cosine similarity between the user's feature
//! vector and the activity's benefit vector. Ties keep catalog declaration
//! order, and a zero vector on either side scores 0.0.

use crate::recommendation::catalog::ActivityCatalog;
use crate::recommendation::similarity::cosine_similarity;
use crate::types::UserFeatures;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of recommendations returned when the caller has no preference
pub const DEFAULT_TOP_K: usize = 3;

/// One ranked activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub activity: String,
    /// Cosine similarity in [-1.0, 1.0]
    pub score: f32,
    pub description: String,
    pub benefits: Vec<String>,
}

/// Activity ranker
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityRanker;

impl ActivityRanker {
    pub fn new() -> Self {
        Self
    }

    /// Rank the catalog and return the best `k` activities
    ///
    /// Returns `min(k, catalog.len())` entries, highest score first.
    pub fn rank(
        &self,
        features: &UserFeatures,
        catalog: &ActivityCatalog,
        k: usize,
    ) -> Vec<Recommendation> {
        let user_vector = features.to_vector();

        let mut scored: Vec<(usize, f32)> = catalog
            .activities()
            .iter()
            .enumerate()
            .map(|(index, activity)| {
                let score = cosine_similarity(&user_vector, &activity.profile.to_vector());
                (index, score)
            })
            .collect();

        // sort_by is stable, so equal scores keep declaration order
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        let recommendations: Vec<Recommendation> = scored
            .into_iter()
            .take(k)
            .map(|(index, score)| {
                let name = &catalog.activities()[index].name;
                Recommendation {
                    activity: name.clone(),
                    score,
                    description: catalog.description(name).to_string(),
                    benefits: catalog.benefits(name).to_vec(),
                }
            })
            .collect();

        debug!(
            "Ranked {} activities, top: {:?}",
            catalog.len(),
            recommendations
                .iter()
                .map(|r| (r.activity.as_str(), r.score))
                .collect::<Vec<_>>()
        );

        recommendations
    }
}
