//! Assessment questions command

use mind_matters_core::{assessment::questions_for, error::Result, AssessmentMood};

/// Print the questionnaire for a mood
pub fn handle(mood: &str) -> Result<()> {
    let mood: AssessmentMood = mood.parse()?;

    println!("Assessment for a {} day:\n", mood);
    for question in questions_for(mood) {
        println!("{}. {}", question.id, question.prompt);
        for option in question.options {
            println!("     - {}", option);
        }
    }
    println!("\nAnswer with: mind-matters recommend --mood {} --answer 1=\"...\"", mood);

    Ok(())
}
