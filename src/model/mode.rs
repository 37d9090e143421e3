use crate::error::Result;
use crate::model::find_choice;

/// Study mode. Like the subject it is echoed into the prompt verbatim, so
/// "12th Syllabus" only nudges the model toward that curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    General,
    TwelfthSyllabus,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::General, Mode::TwelfthSyllabus];

    pub fn label(self) -> &'static str {
        match self {
            Mode::General => "General",
            Mode::TwelfthSyllabus => "12th Syllabus",
        }
    }

    pub fn parse(input: &str) -> Result<Mode> {
        find_choice(&Mode::ALL, Mode::label, "mode", input)
    }
}
