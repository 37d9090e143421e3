use crate::error::Result;
use crate::model::difficulty::Difficulty;
use crate::model::language::Language;
use crate::model::mode::Mode;
use crate::model::persona::Persona;
use crate::model::subject::Subject;

/// One submission of the study form. Values live for a single exchange and
/// are dropped once the answer is rendered.
#[derive(Debug, Clone)]
pub struct StudyRequest {
    pub question: String,
    pub subject: Subject,
    pub persona: Persona,
    pub language: Language,
    pub mode: Mode,
}

impl StudyRequest {
    /// Binds raw form fields to catalog entries. The question text is taken
    /// exactly as typed; the closed fields must match a published choice.
    pub fn from_form(
        question: &str,
        subject: &str,
        persona: &str,
        language: &str,
        mode: &str,
    ) -> Result<StudyRequest> {
        Ok(StudyRequest {
            question: question.to_string(),
            subject: Subject::parse(subject)?,
            persona: Persona::parse(persona)?,
            language: Language::parse(language)?,
            mode: Mode::parse(mode)?,
        })
    }
}

/// One submission of the quiz form.
#[derive(Debug, Clone)]
pub struct QuizRequest {
    pub topic: String,
    pub subject: Subject,
    pub difficulty: Difficulty,
    pub language: Language,
}

impl QuizRequest {
    pub fn from_form(
        topic: &str,
        subject: &str,
        difficulty: &str,
        language: &str,
    ) -> Result<QuizRequest> {
        Ok(QuizRequest {
            topic: topic.to_string(),
            subject: Subject::parse(subject)?,
            difficulty: Difficulty::parse(difficulty)?,
            language: Language::parse(language)?,
        })
    }
}
