use crate::error::Result;
use crate::model::options::GenerationOptions;

/// One call to a hosted text-generation service.
///
/// Implementors own the transport and the vendor wire format; callers see
/// prompt text in, full answer text out. One request gets one response,
/// with no streaming and no automatic retry.
pub trait CompletionClient {
    fn complete(&self, prompt: &str, options: &GenerationOptions) -> Result<String>;
}

impl<C: CompletionClient + ?Sized> CompletionClient for &C {
    fn complete(&self, prompt: &str, options: &GenerationOptions) -> Result<String> {
        (**self).complete(prompt, options)
    }
}
