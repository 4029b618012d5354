//! Short tips chosen from the extracted feature vector.
//!
//! Unlike the daily tip lookup, these react to the assessment: each axis
//! that crosses its threshold contributes a group of three tips, and a
//! positive assessment mood adds a group of its own. A shuffled handful is
//! returned.

use crate::types::{AssessmentMood, UserFeatures};
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of tips shown next to the recommendations
pub const PERSONALIZED_TIP_COUNT: usize = 3;

const HIGH_NEED: f32 = 0.6;
const LOW_RESERVE: f32 = 0.4;

const STRESS_TIPS: [&str; 3] = [
    "Try deep breathing exercises to reduce stress",
    "Take short breaks throughout the day",
    "Practice progressive muscle relaxation",
];

const ANXIETY_TIPS: [&str; 3] = [
    "Focus on the present moment using mindfulness",
    "Write down your worries and challenge them",
    "Try grounding exercises when feeling anxious",
];

const LOW_MOOD_TIPS: [&str; 3] = [
    "Engage in activities you usually enjoy",
    "Reach out to a friend or family member",
    "Set small, achievable goals for the day",
];

const LOW_ENERGY_TIPS: [&str; 3] = [
    "Take a short walk to boost energy",
    "Ensure you're staying hydrated",
    "Try energizing breathing exercises",
];

const SOCIAL_TIPS: [&str; 3] = [
    "Schedule a call with a friend",
    "Join a local community group",
    "Participate in online social activities",
];

const POSITIVE_TIPS: [&str; 3] = [
    "Share your positive energy with others",
    "Document what's going well in a gratitude journal",
    "Build on this momentum to tackle important tasks",
];

/// Every tip the features qualify for, in group order
pub fn matching_tips(mood: Option<AssessmentMood>, features: &UserFeatures) -> Vec<&'static str> {
    let groups = [
        (features.stress_level > HIGH_NEED, &STRESS_TIPS),
        (features.anxiety_level > HIGH_NEED, &ANXIETY_TIPS),
        (features.mood_level < LOW_RESERVE, &LOW_MOOD_TIPS),
        (features.energy_level < LOW_RESERVE, &LOW_ENERGY_TIPS),
        (features.social_need > HIGH_NEED, &SOCIAL_TIPS),
        (mood == Some(AssessmentMood::Positive), &POSITIVE_TIPS),
    ];

    groups
        .into_iter()
        .filter(|(applies, _)| *applies)
        .flat_map(|(_, tips)| tips.iter().copied())
        .collect()
}

/// Shuffle the matching tips and keep the first few
pub fn personalized_tips<R: Rng + ?Sized>(
    mood: Option<AssessmentMood>,
    features: &UserFeatures,
    rng: &mut R,
) -> Vec<String> {
    let mut tips = matching_tips(mood, features);
    tips.shuffle(rng);
    tips.into_iter()
        .take(PERSONALIZED_TIP_COUNT)
        .map(str::to_string)
        .collect()
}
