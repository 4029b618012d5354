//! Branching self-assessment questionnaire
//!
//! The user first picks a coarse [`AssessmentMood`]; the questions that
//! follow depend on that choice. Each question offers a fixed set of options
//! and every question must be answered before submission.

use crate::error::{MindMattersError, Result};
use crate::types::{Answers, AssessmentMood};
use serde::Serialize;
use tracing::debug;

/// One multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
}

const POSITIVE_QUESTIONS: &[Question] = &[
    Question {
        id: 1,
        prompt: "What made you feel particularly good today?",
        options: &["Accomplishments", "Social Interactions", "Personal Time", "Other"],
    },
    Question {
        id: 2,
        prompt: "How would you like to maintain this positive mood?",
        options: &[
            "Continue current activities",
            "Try new experiences",
            "Share with others",
            "Document it",
        ],
    },
    Question {
        id: 3,
        prompt: "Would you like to share your positive energy with others?",
        options: &["Yes, definitely", "Maybe later", "Not right now", "Prefer to reflect"],
    },
];

const NEUTRAL_QUESTIONS: &[Question] = &[
    Question {
        id: 1,
        prompt: "What could make your day better?",
        options: &[
            "Social activities",
            "Relaxation",
            "Physical activity",
            "Creative expression",
        ],
    },
    Question {
        id: 2,
        prompt: "How is your energy level right now?",
        options: &["Good", "Moderate", "Could be better", "Low"],
    },
    Question {
        id: 3,
        prompt: "Would you like to try something new today?",
        options: &["Yes, definitely", "Maybe", "Not sure", "Prefer routine"],
    },
];

const NEGATIVE_QUESTIONS: &[Question] = &[
    Question {
        id: 1,
        prompt: "What's affecting your mood the most?",
        options: &["Work/Study", "Personal matters", "Health", "Other concerns"],
    },
    Question {
        id: 2,
        prompt: "Would you like to talk to someone about it?",
        options: &[
            "Yes, professional help",
            "Yes, friends/family",
            "Not right now",
            "Prefer self-reflection",
        ],
    },
    Question {
        id: 3,
        prompt: "What usually helps you feel better?",
        options: &["Physical activity", "Creative activities", "Rest", "Social support"],
    },
];

/// Questions asked after the given mood was chosen
pub fn questions_for(mood: AssessmentMood) -> &'static [Question] {
    match mood {
        AssessmentMood::Positive => POSITIVE_QUESTIONS,
        AssessmentMood::Neutral => NEUTRAL_QUESTIONS,
        AssessmentMood::Negative => NEGATIVE_QUESTIONS,
    }
}

/// Check that `answers` is a complete, valid submission for `mood`
///
/// Every question needs an answer, each answer must be one of that
/// question's options, and no unknown question ids may appear.
pub fn validate(mood: AssessmentMood, answers: &Answers) -> Result<()> {
    let questions = questions_for(mood);

    for (&question_id, answer) in answers {
        let question = questions
            .iter()
            .find(|q| q.id == question_id)
            .ok_or_else(|| MindMattersError::InvalidAnswer {
                question_id,
                answer: answer.clone(),
            })?;

        if !question.options.contains(&answer.as_str()) {
            return Err(MindMattersError::InvalidAnswer {
                question_id,
                answer: answer.clone(),
            });
        }
    }

    let missing: Vec<u32> = questions
        .iter()
        .map(|q| q.id)
        .filter(|id| !answers.contains_key(id))
        .collect();
    if !missing.is_empty() {
        return Err(MindMattersError::IncompleteAssessment(missing));
    }

    debug!("Validated {} answers for {} assessment", answers.len(), mood);
    Ok(())
}
