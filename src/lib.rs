//! Core of the personal AI study assistant: prompt assembly for study
//! questions and MCQ quizzes, plus a blocking Gemini client that sends
//! exactly one generation request per submission.

pub mod config;
pub mod engine;
pub mod error;
pub mod model;

pub use config::AppConfig;
pub use engine::assistant::Assistant;
pub use engine::completion::CompletionClient;
pub use engine::gemini::GeminiClient;
pub use engine::prompt_builder::{PromptBuilder, StudyPrompt};
pub use error::{AssistantError, Result};
