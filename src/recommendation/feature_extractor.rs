//! Feature extraction from assessment answers.
//!
//! Turns a coarse assessment mood and the free-text options a user picked
//! into a [`UserFeatures`] vector. The mood seeds the mood/energy prior;
//! answers nudge individual axes through case-insensitive keyword matching.
//!
//! # Keyword rules
//!
//! | keywords                        | effect              |
//! |---------------------------------|---------------------|
//! | stress, overwhelm, pressure     | stress += 0.3       |
//! | anxiety, worry, nervous         | anxiety += 0.3      |
//! | social, friend, people          | social += 0.3       |
//! | tired, exhausted                | energy -= 0.2       |
//! | happy, joy                      | mood += 0.2         |
//! | sad, depress (if not happy/joy) | mood -= 0.2         |
//!
//! Rules for different axes fire independently; only the mood pair is
//! exclusive within one answer. All fields are clamped to [0.0, 1.0] once
//! every answer has been applied.

use crate::types::{Answers, AssessmentMood, UserFeatures};
use tracing::{debug, warn};

const STRESS_KEYWORDS: &[&str] = &["stress", "overwhelm", "pressure"];
const ANXIETY_KEYWORDS: &[&str] = &["anxiety", "worry", "nervous"];
const SOCIAL_KEYWORDS: &[&str] = &["social", "friend", "people"];
const FATIGUE_KEYWORDS: &[&str] = &["tired", "exhausted"];
const UPLIFT_KEYWORDS: &[&str] = &["happy", "joy"];
const LOW_MOOD_KEYWORDS: &[&str] = &["sad", "depress"];

const NEED_INCREMENT: f32 = 0.3;
const FATIGUE_PENALTY: f32 = 0.2;
const MOOD_SHIFT: f32 = 0.2;

/// Feature extractor for assessment submissions
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureExtractor;

impl FeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract features from an assessment
    ///
    /// `mood` of `None` means the mood label was not recognised; no prior is
    /// seeded and only the answers contribute.
    pub fn extract_features(
        &self,
        mood: Option<AssessmentMood>,
        answers: &Answers,
    ) -> UserFeatures {
        let mut features = Self::seed(mood);

        for answer in answers.values() {
            Self::apply_answer(&mut features, answer);
        }

        let features = features.clamped();

        debug!(
            "Extracted features from {} answers (mood: {}): {:?}",
            answers.len(),
            mood.map(|m| m.as_str()).unwrap_or("none"),
            features
        );

        features
    }

    /// Extract features from a raw mood label
    ///
    /// Unknown labels fall back to a zero prior instead of failing.
    pub fn extract_features_from_label(&self, mood: &str, answers: &Answers) -> UserFeatures {
        let parsed = AssessmentMood::parse_lenient(mood);
        if parsed.is_none() {
            warn!("Unrecognised assessment mood '{}', using zero prior", mood);
        }
        self.extract_features(parsed, answers)
    }

    /// Mood/energy prior for an assessment mood
    fn seed(mood: Option<AssessmentMood>) -> UserFeatures {
        let (mood_level, energy_level) = match mood {
            Some(AssessmentMood::Positive) => (0.8, 0.7),
            Some(AssessmentMood::Neutral) => (0.5, 0.5),
            Some(AssessmentMood::Negative) => (0.2, 0.3),
            None => (0.0, 0.0),
        };

        UserFeatures {
            mood_level,
            energy_level,
            ..UserFeatures::default()
        }
    }

    /// Accumulate one answer into the (unclamped) features
    fn apply_answer(features: &mut UserFeatures, answer: &str) {
        let lower = answer.to_lowercase();
        let mentions = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

        if mentions(STRESS_KEYWORDS) {
            features.stress_level += NEED_INCREMENT;
        }
        if mentions(ANXIETY_KEYWORDS) {
            features.anxiety_level += NEED_INCREMENT;
        }
        if mentions(SOCIAL_KEYWORDS) {
            features.social_need += NEED_INCREMENT;
        }
        if mentions(FATIGUE_KEYWORDS) {
            features.energy_level -= FATIGUE_PENALTY;
        }

        if mentions(UPLIFT_KEYWORDS) {
            features.mood_level += MOOD_SHIFT;
        } else if mentions(LOW_MOOD_KEYWORDS) {
            features.mood_level -= MOOD_SHIFT;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(texts: &[&str]) -> Answers {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| (i as u32 + 1, t.to_string()))
            .collect()
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-5,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_mood_seeds_with_empty_answers() {
        let extractor = FeatureExtractor::new();
        let empty = Answers::new();

        let cases = [
            (AssessmentMood::Positive, 0.8, 0.7),
            (AssessmentMood::Neutral, 0.5, 0.5),
            (AssessmentMood::Negative, 0.2, 0.3),
        ];

        for (mood, mood_level, energy_level) in cases {
            let features = extractor.extract_features(Some(mood), &empty);
            assert_close(features.mood_level, mood_level);
            assert_close(features.energy_level, energy_level);
            assert_eq!(features.stress_level, 0.0);
            assert_eq!(features.anxiety_level, 0.0);
            assert_eq!(features.social_need, 0.0);
        }
    }

    #[test]
    fn test_unknown_mood_has_zero_prior() {
        let extractor = FeatureExtractor::new();
        let features = extractor.extract_features_from_label("ecstatic", &Answers::new());
        assert_eq!(features, UserFeatures::default());

        let features = extractor.extract_features_from_label("Negative", &Answers::new());
        assert_close(features.mood_level, 0.2);
    }

    #[test]
    fn test_accumulation_is_clamped() {
        let extractor = FeatureExtractor::new();
        let features = extractor.extract_features(
            Some(AssessmentMood::Neutral),
            &answers(&["stress", "stress", "stress", "stress", "stress"]),
        );
        assert_eq!(features.stress_level, 1.0);
    }

    #[test]
    fn test_accumulation_below_clamp() {
        let extractor = FeatureExtractor::new();
        let features = extractor.extract_features(
            Some(AssessmentMood::Neutral),
            &answers(&["Work pressure", "Too much stress"]),
        );
        assert_close(features.stress_level, 0.6);
    }

    #[test]
    fn test_case_insensitive_matching() {
        let extractor = FeatureExtractor::new();
        let upper = extractor.extract_features(
            Some(AssessmentMood::Neutral),
            &answers(&["I feel very STRESSED today"]),
        );
        let lower = extractor.extract_features(
            Some(AssessmentMood::Neutral),
            &answers(&["i feel very stressed today"]),
        );
        assert_eq!(upper, lower);
        assert_close(upper.stress_level, 0.3);
    }

    #[test]
    fn test_one_answer_hits_several_axes() {
        let extractor = FeatureExtractor::new();
        let features = extractor.extract_features(
            Some(AssessmentMood::Neutral),
            &answers(&["Tired and nervous around people at work, under pressure"]),
        );
        assert_close(features.stress_level, 0.3);
        assert_close(features.anxiety_level, 0.3);
        assert_close(features.social_need, 0.3);
        assert_close(features.energy_level, 0.3);
    }

    #[test]
    fn test_happy_wins_over_sad_in_one_answer() {
        let extractor = FeatureExtractor::new();
        let features = extractor.extract_features(
            Some(AssessmentMood::Neutral),
            &answers(&["happy but a bit sad"]),
        );
        assert_close(features.mood_level, 0.7);

        let features = extractor.extract_features(
            Some(AssessmentMood::Neutral),
            &answers(&["feeling depressed"]),
        );
        assert_close(features.mood_level, 0.3);
    }

    #[test]
    fn test_lower_bound_clamp() {
        let extractor = FeatureExtractor::new();
        let features = extractor.extract_features(
            Some(AssessmentMood::Negative),
            &answers(&["exhausted", "so tired", "sad"]),
        );
        assert_eq!(features.energy_level, 0.0);
        assert_close(features.mood_level, 0.0);
    }

    #[test]
    fn test_question_ids_are_ignored() {
        let extractor = FeatureExtractor::new();
        let mut sparse = Answers::new();
        sparse.insert(7, "Social support".to_string());
        sparse.insert(42, "Yes, friends/family".to_string());

        let features = extractor.extract_features(Some(AssessmentMood::Negative), &sparse);
        assert_close(features.social_need, 0.6);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn mood_strategy() -> impl Strategy<Value = Option<AssessmentMood>> {
            prop_oneof![
                Just(None),
                Just(Some(AssessmentMood::Positive)),
                Just(Some(AssessmentMood::Neutral)),
                Just(Some(AssessmentMood::Negative)),
            ]
        }

        fn answer_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec(
                prop::sample::select(vec![
                    "stress", "Overwhelmed", "WORRY", "nervous", "friends", "people", "tired",
                    "exhausted", "happy", "joy", "sad", "depressed", "calm", "work",
                ]),
                0..6,
            )
            .prop_map(|words| words.join(" "))
        }

        proptest! {
            #[test]
            fn features_always_within_unit_interval(
                mood in mood_strategy(),
                answers in prop::collection::btree_map(1u32..20, answer_strategy(), 0..12),
            ) {
                let features = FeatureExtractor::new().extract_features(mood, &answers);
                for value in features.to_vector() {
                    prop_assert!((0.0..=1.0).contains(&value));
                }
            }
        }
    }
}
