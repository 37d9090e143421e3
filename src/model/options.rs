/// Sampling settings for one generation call. Built only through the two
/// profiles below, which keep the temperature inside [0.0, 1.0] and the
/// token limit positive.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub system_instruction: Option<String>,
}

impl GenerationOptions {
    /// Settings for study answers. The persona and language rules travel in
    /// the system instruction.
    pub fn study_chat(system_instruction: String) -> GenerationOptions {
        GenerationOptions {
            temperature: 0.4,
            max_output_tokens: 2000,
            system_instruction: Some(system_instruction),
        }
    }

    /// Settings for quiz generation. The whole task lives in the user
    /// prompt, so no system instruction is sent.
    pub fn quiz() -> GenerationOptions {
        GenerationOptions {
            temperature: 0.5,
            max_output_tokens: 1500,
            system_instruction: None,
        }
    }
}
