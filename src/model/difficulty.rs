use crate::error::Result;
use crate::model::find_choice;

/// Quiz difficulty levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Lkg,
    Easy,
    Normal,
    Strict,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Lkg,
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Strict,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Lkg => "LKG 🍼",
            Difficulty::Easy => "Easy 🙂",
            Difficulty::Normal => "Normal 📘",
            Difficulty::Strict => "Strict 😈",
        }
    }

    /// How the quiz prompt describes the requested difficulty.
    pub fn description(self) -> &'static str {
        match self {
            Difficulty::Lkg => "Very very simple questions for kids.",
            Difficulty::Easy => "Beginner friendly easy MCQs.",
            Difficulty::Normal => "Standard school-level MCQs.",
            Difficulty::Strict => "Exam-oriented tricky MCQs.",
        }
    }

    pub fn parse(input: &str) -> Result<Difficulty> {
        find_choice(&Difficulty::ALL, Difficulty::label, "difficulty", input)
    }
}
