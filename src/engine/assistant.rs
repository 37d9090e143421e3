use tracing::debug;

use crate::engine::completion::CompletionClient;
use crate::engine::prompt_builder::PromptBuilder;
use crate::error::Result;
use crate::model::options::GenerationOptions;
use crate::model::request::{QuizRequest, StudyRequest};

/// The two user-facing operations, wired to whichever completion client
/// the caller provides.
pub struct Assistant<C: CompletionClient> {
    client: C,
}

impl<C: CompletionClient> Assistant<C> {
    pub fn new(client: C) -> Assistant<C> {
        Assistant { client }
    }

    /// Answers a free-form study question. The closed fields arrive as raw
    /// form values; anything outside the published choices fails here,
    /// before the service is contacted.
    pub fn ask(
        &self,
        question: &str,
        subject: &str,
        persona: &str,
        language: &str,
        mode: &str,
    ) -> Result<String> {
        let request = StudyRequest::from_form(question, subject, persona, language, mode)?;
        let prompt = PromptBuilder::study(&request);

        debug!(
            subject = request.subject.label(),
            persona = request.persona.label(),
            language = request.language.label(),
            mode = request.mode.label(),
            "dispatching study question"
        );

        let options = GenerationOptions::study_chat(prompt.system_instruction);
        self.client.complete(&prompt.user_content, &options)
    }

    /// Generates a five-question multiple-choice quiz on a topic.
    pub fn quiz(
        &self,
        topic: &str,
        subject: &str,
        difficulty: &str,
        language: &str,
    ) -> Result<String> {
        let request = QuizRequest::from_form(topic, subject, difficulty, language)?;
        let prompt = PromptBuilder::quiz(&request);

        debug!(
            subject = request.subject.label(),
            difficulty = request.difficulty.label(),
            language = request.language.label(),
            "dispatching quiz request"
        );

        self.client.complete(&prompt, &GenerationOptions::quiz())
    }
}
