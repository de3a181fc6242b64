// src/parser/types.rs
use serde::{Deserialize, Serialize};

/// Synset id used when no synset has been resolved for a token
pub const NO_SYNSET: i64 = -1;

/// A single parsed token, as returned to callers of the parse service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text of the token
    pub text: String,
    /// Position of the token in the document, 0..n
    pub index: usize,
    /// Synset id, `NO_SYNSET` when not set
    #[serde(default = "no_synset")]
    pub synid: i64,
    /// Penn Treebank tag, upper case
    pub tag: String,
    /// Dependency label
    pub dep: String,
    /// Ancestor positions, nearest head first
    #[serde(rename = "list", default)]
    pub ancestor_list: Vec<usize>,
    /// Lexicon category, empty when unknown
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub semantic: String,
}

fn no_synset() -> i64 {
    NO_SYNSET
}

impl Token {
    pub fn new(
        text: impl Into<String>,
        index: usize,
        tag: impl Into<String>,
        dep: impl Into<String>,
        ancestor_list: Vec<usize>,
    ) -> Self {
        Self {
            text: text.into(),
            index,
            synid: NO_SYNSET,
            tag: tag.into(),
            dep: dep.into(),
            ancestor_list,
            semantic: String::new(),
        }
    }

    /// Whitespace tokens are produced by the model for runs of spaces and newlines
    pub fn is_whitespace(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A sentence is an ordered list of tokens
pub type Sentence = Vec<Token>;

/// Response body of the parse endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResponse {
    /// Wall-clock time spent parsing, in milliseconds
    pub processing_time: u64,
    pub sentence_list: Vec<Sentence>,
    pub num_tokens: usize,
    pub num_sentences: usize,
}

impl ParseResponse {
    pub fn new(sentence_list: Vec<Sentence>, processing_time: u64) -> Self {
        let num_tokens = sentence_list.iter().map(|s| s.len()).sum();
        let num_sentences = sentence_list.len();
        Self {
            processing_time,
            sentence_list,
            num_tokens,
            num_sentences,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_serializes_with_wire_names() {
        let token = Token::new("test", 0, "NN", "compound", vec![1]);
        let value = serde_json::to_value(&token).unwrap();

        assert_eq!(value["text"], "test");
        assert_eq!(value["index"], 0);
        assert_eq!(value["synid"], -1);
        assert_eq!(value["tag"], "NN");
        assert_eq!(value["dep"], "compound");
        assert_eq!(value["list"], serde_json::json!([1]));
        // Empty semantics are left out of the payload
        assert!(value.get("semantic").is_none());
    }

    #[test]
    fn test_parse_response_counts() {
        let sentences = vec![
            vec![
                Token::new("test", 0, "NN", "compound", vec![1]),
                Token::new("sentence", 1, "NN", "ROOT", vec![]),
            ],
            vec![Token::new("Hi", 2, "UH", "ROOT", vec![])],
        ];
        let response = ParseResponse::new(sentences, 3);

        assert_eq!(response.num_sentences, 2);
        assert_eq!(response.num_tokens, 3);
        assert_eq!(response.processing_time, 3);
    }

    #[test]
    fn test_decodes_remote_payload_without_synid() {
        let json = r#"{"index": 0, "list": [1], "tag": "NN", "text": "test", "dep": "compound"}"#;
        let token: Token = serde_json::from_str(json).unwrap();
        assert_eq!(token.synid, NO_SYNSET);
        assert_eq!(token.ancestor_list, vec![1]);
    }
}
