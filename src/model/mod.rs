pub mod difficulty;
pub mod language;
pub mod mode;
pub mod options;
pub mod persona;
pub mod request;
pub mod subject;

use crate::error::{AssistantError, Result};

/// Finds a catalog entry by its published label. The exact label always
/// matches; as a convenience for plain terminals, a case-insensitive
/// spelling without the trailing emoji (e.g. "friendly") matches too.
pub(crate) fn find_choice<T: Copy>(
    choices: &[T],
    label_of: fn(T) -> &'static str,
    field: &'static str,
    input: &str,
) -> Result<T> {
    for &choice in choices {
        let label = label_of(choice);
        if input == label || input.eq_ignore_ascii_case(ascii_name(label)) {
            return Ok(choice);
        }
    }

    Err(AssistantError::Validation {
        field,
        value: input.to_string(),
    })
}

/// The label with any trailing emoji (and the space before it) removed.
fn ascii_name(label: &str) -> &str {
    label.trim_end_matches(|c: char| !c.is_ascii()).trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::difficulty::Difficulty;
    use crate::model::language::Language;
    use crate::model::mode::Mode;
    use crate::model::persona::Persona;
    use crate::model::subject::Subject;

    #[test]
    fn every_published_label_parses_back_to_its_entry() {
        for subject in Subject::ALL {
            assert_eq!(Subject::parse(subject.label()).unwrap(), subject);
        }
        for persona in Persona::ALL {
            assert_eq!(Persona::parse(persona.label()).unwrap(), persona);
        }
        for language in Language::ALL {
            assert_eq!(Language::parse(language.label()).unwrap(), language);
        }
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::parse(difficulty.label()).unwrap(), difficulty);
        }
        for mode in Mode::ALL {
            assert_eq!(Mode::parse(mode.label()).unwrap(), mode);
        }
    }

    #[test]
    fn emoji_free_spellings_are_accepted() {
        assert_eq!(Persona::parse("friendly").unwrap(), Persona::Friendly);
        assert_eq!(Persona::parse("high school").unwrap(), Persona::HighSchool);
        assert_eq!(Difficulty::parse("NORMAL").unwrap(), Difficulty::Normal);
        assert_eq!(
            Subject::parse("computer science").unwrap(),
            Subject::ComputerScience
        );
    }

    #[test]
    fn unknown_values_name_the_offending_field() {
        match Language::parse("Latin") {
            Err(AssistantError::Validation { field, value }) => {
                assert_eq!(field, "language");
                assert_eq!(value, "Latin");
            }
            other => panic!("expected a validation error, got {other:?}"),
        }

        match Persona::parse("Unknown") {
            Err(AssistantError::Validation { field, .. }) => assert_eq!(field, "persona"),
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn directive_text_is_stable() {
        assert_eq!(
            Persona::HighSchool.directive(),
            "Explain slowly for 10th–12th students."
        );
        assert_eq!(Language::Kannada.directive(), "Respond fully in Kannada.");
        assert_eq!(Difficulty::Strict.description(), "Exam-oriented tricky MCQs.");
    }
}
