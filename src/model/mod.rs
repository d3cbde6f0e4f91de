pub mod analysis;
pub mod chat;
pub mod dictionary;
pub mod writing;

pub use analysis::{
    AnalysisChunk, AnalysisResult, ChangeKind, Correction, CorrectionChange, DetailedToken,
};
pub use chat::{Message, Role};
pub use dictionary::{
    DictionaryCollocation, DictionaryDefinition, DictionaryEntry, DictionaryResult,
};
pub use writing::{Category, Segment, SegmentKind, WritingMode, WritingResult};
