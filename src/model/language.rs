use crate::error::Result;
use crate::model::find_choice;

/// Languages the assistant can answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Kannada,
    Hindi,
    Telugu,
    Marathi,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Kannada,
        Language::Hindi,
        Language::Telugu,
        Language::Marathi,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Kannada => "Kannada",
            Language::Hindi => "Hindi",
            Language::Telugu => "Telugu",
            Language::Marathi => "Marathi",
        }
    }

    /// The response-language rule appended to every prompt.
    pub fn directive(self) -> &'static str {
        match self {
            Language::English => "Respond in English.",
            Language::Kannada => "Respond fully in Kannada.",
            Language::Hindi => "Respond fully in Hindi.",
            Language::Telugu => "Respond fully in Telugu.",
            Language::Marathi => "Respond fully in Marathi.",
        }
    }

    pub fn parse(input: &str) -> Result<Language> {
        find_choice(&Language::ALL, Language::label, "language", input)
    }
}
