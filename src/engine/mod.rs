pub mod assistant;
pub mod completion;
pub mod gemini;
pub mod prompt_builder;
