//! Prompt builders for each provider operation.
//!
//! The diff-format rules embedded here are load-bearing: the provider is
//! told to emit strict textual diffs, and the decode step rejects anything
//! that fails to reconcile rather than trusting the instructions held.

use crate::model::{Message, Role};
use crate::provider::schema::{analysis_schema, dictionary_schema, writing_schema};
use crate::provider::GenerationRequest;

/// Build the sentence-analysis request.
pub fn analysis_request(sentence: &str) -> GenerationRequest {
    let prompt = format!(
        r#"You are an expert linguist and English teacher. Analyze this English sentence for a learner: "{sentence}"

Processing steps:
1. Grammar check. If the sentence has errors, produce a corrected version
   and base ALL further analysis on the corrected sentence. The 'changes'
   array must be a strict textual diff:
   - 'remove' entries contain ONLY the deleted original fragment. Never
     include "->" tokens or descriptions like "change x to y".
   - 'add' entries contain ONLY the newly inserted fragment.
   - 'keep' entries contain the untouched fragments.
   Concatenating keep+remove fragments in order must equal the original
   sentence exactly; keep+add must equal the corrected sentence exactly.
2. Macro structure: name the core sentence pattern (e.g. "S + V + O") and
   the main tense (e.g. "Present Simple").
3. Chunking: split the corrected sentence into sense groups. Keep
   modifiers with their head word, keep prepositional phrases whole, keep
   compound verb forms together.
4. Detailed tokens: phrasal verbs, idioms, and collocations are ONE token,
   never split. For separable phrasal verbs ("turn it on"), identify the
   core phrasal verb and explain it in the explanation field. Explanations
   describe the word's function in this sentence and why this form is
   used, not just a part-of-speech label. 'meaning' gives the in-context
   sense in the learner's language.
5. 'translation' is a natural rendering of the whole sentence in the
   learner's language.

Return strictly JSON matching the response schema."#
    );

    GenerationRequest {
        prompt,
        system_instruction: None,
        schema: Some(analysis_schema()),
    }
}

/// Build the dictionary-lookup request.
pub fn dictionary_request(word: &str) -> GenerationRequest {
    let prompt = format!(
        r#"Act as a professional learner's dictionary for students preparing for English proficiency exams. Query: "{word}"

Step 1, normalization: if the query is a specific instance of a phrasal
verb or collocation, convert it to the canonical headword form
("made up my mind" becomes "make up one's mind").

Step 2, filtering: omit rare, archaic, and highly technical senses unless
the word itself is technical. Cover only the 3-4 most common modern
meanings. For each part of speech, estimate its corpus frequency rank as
a short string like "Rank 1029" or "Top 2000".

Step 3, structure: group definitions by part of speech. Each definition
needs a clear English explanation, a concise translation, and a natural
modern example sentence with its translation.

Step 4, collocations: list 3-5 high-frequency collocations or fixed
phrases containing the headword, each with meaning and example.

Return strictly JSON matching the response schema."#
    );

    GenerationRequest {
        prompt,
        system_instruction: None,
        schema: Some(dictionary_schema()),
    }
}

/// Build the writing-correction request.
///
/// The worked example doubles as the contract the reconciler enforces:
/// segments must reconstruct both the original and the improved text, and
/// every newline survives as its own unchanged segment.
pub fn writing_request(text: &str) -> GenerationRequest {
    let prompt = format!(
        r#"Act as a professional English editor.

Mode: basic correction. Fix grammar, spelling, punctuation, and serious
awkwardness only. Do not change style, tone, or vocabulary unless it is
incorrect. Keep the output as close to the original as possible.

Task: rewrite the user's text into the improved version and return it as
a sequence of segments from which the full text can be reconstructed
while highlighting exactly what changed.

Input text: "{text}"

Output rules:
- Walk through the improved text in order.
- Identical parts become segments of kind 'unchanged'.
- Every edit becomes a segment of kind 'changed' where 'text' is the new
  fragment, 'originalText' is the replaced fragment (empty string for a
  pure insertion), 'reason' is a brief explanation, and 'category' is one
  of grammar, vocabulary, style, collocation, punctuation.
- Concatenating every 'text' in order must equal the improved text
  exactly. Concatenating 'originalText' (or 'text' for unchanged
  segments) must equal the input exactly, including all whitespace.
- Preserve every paragraph break: each newline in the input is returned
  as its own segment {{"kind": "unchanged", "text": "\n"}}. Never merge
  paragraphs.

Example:
Input: "I go store.\n\nIt was fun."
Improved: "I went to the store.\n\nIt was fun."
Segments:
[
  {{"kind": "unchanged", "text": "I "}},
  {{"kind": "changed", "text": "went", "originalText": "go", "reason": "Past tense", "category": "grammar"}},
  {{"kind": "changed", "text": " to the ", "originalText": "", "reason": "Missing preposition", "category": "grammar"}},
  {{"kind": "unchanged", "text": "store."}},
  {{"kind": "unchanged", "text": "\n\n"}},
  {{"kind": "unchanged", "text": "It was fun."}}
]

Return strictly JSON matching the response schema."#
    );

    GenerationRequest {
        prompt,
        system_instruction: None,
        schema: Some(writing_schema()),
    }
}

/// What the assistant conversation is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatContext {
    Sentence,
    Word,
    Writing,
}

impl ChatContext {
    fn describe(&self, content: Option<&str>) -> String {
        let (label, fallback) = match self {
            ChatContext::Sentence => ("sentence being analyzed", "no sentence submitted yet"),
            ChatContext::Word => ("word or phrase being looked up", "no word looked up yet"),
            ChatContext::Writing => ("text being corrected", "no text submitted yet"),
        };
        match content {
            Some(content) => format!("Current {label}: \"{content}\""),
            None => format!("Current {label}: {fallback}."),
        }
    }
}

/// Build a free-text assistant request. No schema: the reply is prose.
pub fn chat_request(
    history: &[Message],
    context: Option<&str>,
    context_kind: ChatContext,
    user_message: &str,
) -> GenerationRequest {
    let system_instruction = format!(
        r#"You are an encouraging, professional English-learning tutor.

{}

Your job:
1. Answer questions about English grammar, word usage, sentence
   structure, and vocabulary distinctions.
2. Format answers in Markdown: bold key terms, use short lists, keep
   paragraphs brief.
3. Stay patient and positive, like a good teacher.
4. When asked about a phrase like "pop us back", identify the core
   phrasal verb ("pop back") and explain the construction."#,
        context_kind.describe(context)
    );

    let mut prompt = String::new();
    for message in history {
        let speaker = match message.role {
            Role::User => "User",
            Role::Assistant => "Tutor",
        };
        prompt.push_str(speaker);
        prompt.push_str(": ");
        prompt.push_str(&message.content);
        prompt.push('\n');
    }
    prompt.push_str("User: ");
    prompt.push_str(user_message);

    GenerationRequest {
        prompt,
        system_instruction: Some(system_instruction),
        schema: None,
    }
}
