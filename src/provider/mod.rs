//! Generation-provider boundary: prompts in, untrusted JSON out.
//!
//! The provider itself (network transport, retries, quotas) lives outside
//! this crate. What lives here is everything around the call: the request
//! shape ([`GenerationRequest`] with a declarative [`Schema`]), the prompt
//! builders, and the decode step that turns an untrusted `serde_json::Value`
//! into a typed result only after the reconciler has verified it.

pub mod errors;
pub mod prompt;
pub mod response;
pub mod schema;

pub use errors::ProviderError;
pub use prompt::{
    analysis_request, chat_request, dictionary_request, writing_request, ChatContext,
};
pub use response::{decode_analysis, decode_dictionary, decode_writing};
pub use schema::{analysis_schema, dictionary_schema, writing_schema, Schema};

use crate::model::{AnalysisResult, DictionaryResult, WritingResult};
use serde_json::Value;

/// A single-shot request to the generation provider.
///
/// The schema is advisory for the provider and binding for us: whatever
/// comes back is still decoded and reconciled as untrusted input. Partial
/// or streamed delivery is not part of this contract; a call resolves to
/// one complete value or one error.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub system_instruction: Option<String>,
    pub schema: Option<Schema>,
}

/// External service that turns a prompt into structured data.
///
/// Implementations do not retry; backoff policy belongs to the caller's
/// network layer. The reconciliation core only requires that `generate`
/// return a complete value or fail.
pub trait GenerationProvider {
    fn generate(&self, request: &GenerationRequest) -> Result<Value, ProviderError>;
}

/// Analyze one sentence: request, generate, decode, reconcile.
pub fn analyze_sentence(
    provider: &dyn GenerationProvider,
    sentence: &str,
) -> Result<AnalysisResult, ProviderError> {
    let request = analysis_request(sentence);
    let value = provider.generate(&request)?;
    decode_analysis(value, sentence)
}

/// Look up one word or phrase in the provider-backed dictionary.
pub fn lookup_word(
    provider: &dyn GenerationProvider,
    word: &str,
) -> Result<DictionaryResult, ProviderError> {
    let request = dictionary_request(word);
    let value = provider.generate(&request)?;
    decode_dictionary(value)
}

/// Correct a piece of writing and return its verified segment diff.
pub fn evaluate_writing(
    provider: &dyn GenerationProvider,
    text: &str,
) -> Result<WritingResult, ProviderError> {
    let request = writing_request(text);
    let value = provider.generate(&request)?;
    decode_writing(value, text)
}
