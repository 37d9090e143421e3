use crate::error::Result;
use crate::model::find_choice;

/// Teaching personalities. Each one maps to the tone-setting line placed
/// first in the system instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    Friendly,
    Academic,
    HighSchool,
    Strict,
    Lkg,
}

impl Persona {
    pub const ALL: [Persona; 5] = [
        Persona::Friendly,
        Persona::Academic,
        Persona::HighSchool,
        Persona::Strict,
        Persona::Lkg,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Persona::Friendly => "Friendly 😊",
            Persona::Academic => "Academic 🎓",
            Persona::HighSchool => "High School 👩‍🏫",
            Persona::Strict => "Strict 😈",
            Persona::Lkg => "LKG 🍼",
        }
    }

    pub fn directive(self) -> &'static str {
        match self {
            Persona::Friendly => "You are friendly, motivating and explain simply.",
            Persona::Academic => "You are formal, academic and structured.",
            Persona::HighSchool => "Explain slowly for 10th–12th students.",
            Persona::Strict => "Be strict, exam-oriented and challenging.",
            Persona::Lkg => {
                "Explain like teaching a very small child using very simple words."
            }
        }
    }

    pub fn parse(input: &str) -> Result<Persona> {
        find_choice(&Persona::ALL, Persona::label, "persona", input)
    }
}
