//! Redmark: diff-segment reconciliation for an AI writing tutor.
//!
//! An English-learning assistant delegates all linguistic intelligence to
//! an external generative model. What it cannot delegate is trust: the
//! model returns correction diffs as segment sequences, and a malformed
//! sequence silently corrupts the user's own text. This crate is the
//! verification core around that boundary.
//!
//! # Architecture
//!
//! Everything centers on one invariant, enforced in [`reconcile`]: an
//! ordered segment sequence must reconstruct both the original and the
//! corrected document exactly, character for character. Provider output
//! is untrusted until it passes [`reconcile::validate`]; on failure the
//! whole result is discarded and callers fall back to plain text.
//!
//! - [`model`] — wire types for provider responses (segments, sentence
//!   analyses, dictionary entries)
//! - [`reconcile`] — reconstruction, validation, rendering, and local
//!   diff derivation
//! - [`provider`] — prompt builders, result-shape schemas, and the
//!   decode step that gates untrusted JSON behind the reconciler
//! - [`keystore`] — injected credential storage
//! - [`article`] — markdown content loading with front matter
//!
//! # Example
//!
//! ```
//! use redmark::model::Segment;
//! use redmark::reconcile;
//!
//! let segments = vec![
//!     Segment::unchanged("I "),
//!     Segment::changed("went", "go"),
//!     Segment::unchanged(" home."),
//! ];
//!
//! reconcile::validate(&segments, Some("I go home."), Some("I went home.")).unwrap();
//! assert_eq!(reconcile::reconstruct_current(&segments), "I went home.");
//! ```

pub mod article;
pub mod keystore;
pub mod model;
pub mod provider;
pub mod reconcile;

// Re-exports
pub use article::{load_article, load_articles, parse_front_matter, Article, ArticleError};
pub use keystore::{FileKeyStore, KeyStore, KeyStoreError, MemoryKeyStore};
pub use model::{
    AnalysisResult, Category, ChangeKind, Correction, CorrectionChange, DictionaryResult,
    Segment, SegmentKind, WritingMode, WritingResult,
};
pub use provider::{GenerationProvider, GenerationRequest, ProviderError, Schema};
pub use reconcile::{
    derive_segments, reconstruct_current, reconstruct_original, render, validate,
    ReconcileError, RenderUnit, TextView,
};
