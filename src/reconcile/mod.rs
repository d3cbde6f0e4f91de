//! Segment reconciliation: validation and reconstruction of provider diffs.
//!
//! Every diff the generation provider returns is untrusted. Before a caller
//! renders one, this module recomputes both documents the segment sequence
//! claims to carry and checks them character-for-character against the text
//! the user actually submitted. A sequence that fails any check is discarded
//! whole; partial diffs are never rendered.

pub mod derive;
pub mod errors;
pub mod reconciler;
pub mod render;

pub use derive::{derive_changes, derive_segments};
pub use errors::{ReconcileError, TextView};
pub use reconciler::{
    corrected_sentence, original_sentence, reconstruct_current, reconstruct_original, validate,
    validate_changes,
};
pub use render::{render, RenderIter, RenderUnit};
