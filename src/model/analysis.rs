use serde::{Deserialize, Serialize};

/// One sense group of an analyzed sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisChunk {
    pub text: String,
    pub grammar_description: String,
    pub part_of_speech: String,
    pub role: String,
}

/// Word- or phrase-level detail for an analyzed sentence. Fixed
/// collocations and phrasal verbs arrive as one token, never split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedToken {
    pub text: String,
    pub part_of_speech: String,
    pub role: String,
    pub explanation: String,
    pub meaning: String,
}

/// One element of a flat sentence-level diff.
///
/// Concatenating `keep` + `remove` fragments in order reconstructs the
/// original sentence; `keep` + `add` reconstructs the corrected one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionChange {
    pub kind: ChangeKind,
    pub text: String,
}

impl CorrectionChange {
    pub fn new(kind: ChangeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Add,
    Remove,
    Keep,
}

/// Grammar correction attached to a sentence analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Correction {
    pub original: String,
    pub corrected: String,
    pub error_type: String,
    pub reason: String,
    pub changes: Vec<CorrectionChange>,
}

/// The provider's answer to a sentence-analysis request.
///
/// When a correction is present, chunks and tokens describe the corrected
/// sentence and `sentence` is set to the corrected text during decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub chunks: Vec<AnalysisChunk>,
    pub detailed_tokens: Vec<DetailedToken>,
    pub translation: String,
    pub sentence: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correction: Option<Correction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_tense: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_kind_wire_names_are_lowercase() {
        let change = CorrectionChange::new(ChangeKind::Remove, "go");
        let json = serde_json::to_string(&change).unwrap();
        assert_eq!(json, "{\"kind\":\"remove\",\"text\":\"go\"}");
    }

    #[test]
    fn analysis_result_accepts_missing_correction() {
        let json = r#"{
            "chunks": [],
            "detailedTokens": [],
            "translation": "Je suis un chat.",
            "sentence": "I am a cat."
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert!(result.correction.is_none());
        assert!(result.sentence_pattern.is_none());
    }
}
