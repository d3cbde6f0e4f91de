use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryDefinition {
    pub meaning: String,
    pub explanation: String,
    pub example: String,
    pub example_translation: String,
}

/// High-frequency collocation or fixed phrase containing the headword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryCollocation {
    pub phrase: String,
    pub meaning: String,
    pub example: String,
    pub example_translation: String,
}

/// Definitions for one part of speech, with an optional corpus
/// frequency estimate specific to that part of speech.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub part_of_speech: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    pub definitions: Vec<DictionaryDefinition>,
}

/// The provider's answer to a dictionary lookup. `word` is the canonical
/// headword, which may differ from the query ("made up my mind" resolves
/// to "make up one's mind").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryResult {
    pub word: String,
    pub phonetic: String,
    pub entries: Vec<DictionaryEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collocations: Option<Vec<DictionaryCollocation>>,
}
