use crate::model::request::{QuizRequest, StudyRequest};

/// The text for one study exchange: the tone-and-context block sent as the
/// system instruction, and the learner's question passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyPrompt {
    pub system_instruction: String,
    pub user_content: String,
}

/// Builds the prompts sent to the generation service.
/// This struct is intentionally dumb: it only formats text.
/// No parsing, no networking, no validation.
pub struct PromptBuilder;

// Both templates start with a blank line and end with a newline. That
// framing is part of the published prompt bytes.
impl PromptBuilder {
    pub fn study(request: &StudyRequest) -> StudyPrompt {
        let mut instruction = String::new();

        instruction.push('\n');
        instruction.push_str(request.persona.directive());
        instruction.push('\n');
        instruction.push_str(request.language.directive());
        instruction.push_str("\n\n");
        instruction.push_str(&format!("Subject: {}\n", request.subject.label()));
        instruction.push_str(&format!("Mode: {}\n", request.mode.label()));
        instruction.push('\n');
        instruction.push_str("Explain clearly and helpfully.\n");

        StudyPrompt {
            system_instruction: instruction,
            user_content: request.question.clone(),
        }
    }

    pub fn quiz(request: &QuizRequest) -> String {
        let mut prompt = String::new();

        prompt.push_str("\nYou are a quiz generator.\n\n");
        prompt.push_str(&format!("Subject: {}\n", request.subject.label()));
        prompt.push_str(&format!("Topic: {}\n", request.topic));
        prompt.push_str(&format!(
            "Difficulty: {}\n",
            request.difficulty.description()
        ));
        prompt.push_str(&format!(
            "Language rule: {}\n",
            request.language.directive()
        ));
        prompt.push('\n');
        prompt.push_str(
            "Generate exactly 5 MCQ questions.\n\
Each question must have:\n\
A) option\n\
B) option\n\
C) option\n\
D) option\n\n\
After each question clearly write:\n\
Correct Answer: <option letter>\n",
        );

        prompt
    }
}
