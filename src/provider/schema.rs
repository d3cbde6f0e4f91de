//! Declarative result-shape descriptions sent alongside each prompt.
//!
//! Providers that support structured output accept a JSON-schema-like
//! description of the expected result. The description is advisory: the
//! decode step in [`crate::provider::response`] re-checks everything.

use serde_json::{json, Map, Value};

/// Shape of an expected JSON result: field names, types, nullability,
/// required-ness.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    Object {
        properties: Vec<(&'static str, Schema)>,
        required: Vec<&'static str>,
        nullable: bool,
    },
    Array {
        items: Box<Schema>,
        nullable: bool,
    },
    String {
        nullable: bool,
    },
}

impl Schema {
    pub fn string() -> Self {
        Schema::String { nullable: false }
    }

    pub fn object(properties: Vec<(&'static str, Schema)>, required: &[&'static str]) -> Self {
        Schema::Object {
            properties,
            required: required.to_vec(),
            nullable: false,
        }
    }

    pub fn array(items: Schema) -> Self {
        Schema::Array {
            items: Box::new(items),
            nullable: false,
        }
    }

    pub fn nullable(mut self) -> Self {
        match &mut self {
            Schema::Object { nullable, .. }
            | Schema::Array { nullable, .. }
            | Schema::String { nullable } => *nullable = true,
        }
        self
    }

    /// Serialize for a provider request payload.
    pub fn to_value(&self) -> Value {
        match self {
            Schema::Object {
                properties,
                required,
                nullable,
            } => {
                let mut props = Map::new();
                for (name, schema) in properties {
                    props.insert((*name).to_string(), schema.to_value());
                }
                let mut value = json!({
                    "type": "object",
                    "properties": Value::Object(props),
                    "required": required,
                });
                if *nullable {
                    value["nullable"] = json!(true);
                }
                value
            }
            Schema::Array { items, nullable } => {
                let mut value = json!({
                    "type": "array",
                    "items": items.to_value(),
                });
                if *nullable {
                    value["nullable"] = json!(true);
                }
                value
            }
            Schema::String { nullable } => {
                if *nullable {
                    json!({ "type": "string", "nullable": true })
                } else {
                    json!({ "type": "string" })
                }
            }
        }
    }
}

/// Shape of [`crate::model::AnalysisResult`].
pub fn analysis_schema() -> Schema {
    let chunk = Schema::object(
        vec![
            ("text", Schema::string()),
            ("grammarDescription", Schema::string()),
            ("partOfSpeech", Schema::string()),
            ("role", Schema::string()),
        ],
        &["text", "grammarDescription", "partOfSpeech", "role"],
    );
    let token = Schema::object(
        vec![
            ("text", Schema::string()),
            ("partOfSpeech", Schema::string()),
            ("role", Schema::string()),
            ("explanation", Schema::string()),
            ("meaning", Schema::string()),
        ],
        &["text", "partOfSpeech", "role", "explanation", "meaning"],
    );
    let change = Schema::object(
        vec![("kind", Schema::string()), ("text", Schema::string())],
        &["kind", "text"],
    );
    let correction = Schema::object(
        vec![
            ("original", Schema::string()),
            ("corrected", Schema::string()),
            ("errorType", Schema::string()),
            ("reason", Schema::string()),
            ("changes", Schema::array(change)),
        ],
        &["original", "corrected", "errorType", "reason", "changes"],
    )
    .nullable();

    Schema::object(
        vec![
            ("chunks", Schema::array(chunk)),
            ("detailedTokens", Schema::array(token)),
            ("translation", Schema::string()),
            ("sentence", Schema::string()),
            ("correction", correction),
            ("sentencePattern", Schema::string().nullable()),
            ("mainTense", Schema::string().nullable()),
        ],
        &["chunks", "detailedTokens", "translation", "sentence"],
    )
}

/// Shape of [`crate::model::DictionaryResult`].
pub fn dictionary_schema() -> Schema {
    let definition = Schema::object(
        vec![
            ("meaning", Schema::string()),
            ("explanation", Schema::string()),
            ("example", Schema::string()),
            ("exampleTranslation", Schema::string()),
        ],
        &["meaning", "explanation", "example", "exampleTranslation"],
    );
    let entry = Schema::object(
        vec![
            ("partOfSpeech", Schema::string()),
            ("frequency", Schema::string().nullable()),
            ("definitions", Schema::array(definition)),
        ],
        &["partOfSpeech", "definitions"],
    );
    let collocation = Schema::object(
        vec![
            ("phrase", Schema::string()),
            ("meaning", Schema::string()),
            ("example", Schema::string()),
            ("exampleTranslation", Schema::string()),
        ],
        &["phrase", "meaning", "example", "exampleTranslation"],
    );

    Schema::object(
        vec![
            ("word", Schema::string()),
            ("phonetic", Schema::string()),
            ("entries", Schema::array(entry)),
            ("collocations", Schema::array(collocation).nullable()),
        ],
        &["word", "phonetic", "entries"],
    )
}

/// Shape of [`crate::model::WritingResult`].
pub fn writing_schema() -> Schema {
    let segment = Schema::object(
        vec![
            ("kind", Schema::string()),
            ("text", Schema::string()),
            ("originalText", Schema::string().nullable()),
            ("reason", Schema::string().nullable()),
            ("category", Schema::string().nullable()),
        ],
        &["kind", "text"],
    );

    Schema::object(
        vec![
            ("mode", Schema::string()),
            ("generalFeedback", Schema::string()),
            ("segments", Schema::array(segment)),
        ],
        &["mode", "generalFeedback", "segments"],
    )
}
