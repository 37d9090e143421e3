use crate::error::Result;
use crate::model::find_choice;

/// Subjects offered by the study form. The subject is echoed into the
/// prompt as plain context; it carries no further behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    General,
    Mathematics,
    Physics,
    Chemistry,
    ComputerScience,
    ArtificialIntelligence,
}

impl Subject {
    pub const ALL: [Subject; 6] = [
        Subject::General,
        Subject::Mathematics,
        Subject::Physics,
        Subject::Chemistry,
        Subject::ComputerScience,
        Subject::ArtificialIntelligence,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Subject::General => "General",
            Subject::Mathematics => "Mathematics",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::ComputerScience => "Computer Science",
            Subject::ArtificialIntelligence => "Artificial Intelligence",
        }
    }

    pub fn parse(input: &str) -> Result<Subject> {
        find_choice(&Subject::ALL, Subject::label, "subject", input)
    }
}
