use crate::reconcile::ReconcileError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("no API key configured")]
    MissingKey,

    /// Opaque provider-side failure: network, auth, quota. Not retried
    /// here; retry policy belongs to the caller's network layer.
    #[error("provider rejected the request: {message}")]
    Rejected { message: String },

    #[error("provider response is not valid JSON for the requested shape: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// The response parsed but failed reconciliation. The whole result is
    /// discarded; callers fall back to plain text.
    #[error("provider response failed reconciliation: {0}")]
    Invalid(#[from] ReconcileError),
}
