// src/parser/mod.rs
//
// Text in, sentences of tagged and dependency-linked tokens out. The actual
// linguistic work happens behind the `LanguageModel` trait.

pub mod cleanup;
pub mod dependency;
pub mod penn;
pub mod remote;
pub mod rules;
pub mod segmenter;
pub mod tagger;
pub mod tokenizer;
pub mod tree;
pub mod types;

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use thiserror::Error;

use crate::semantics::Lexicon;

pub use remote::RemoteModel;
pub use rules::RuleModel;
pub use tree::{DependencyTree, TreeError};
pub use types::{ParseResponse, Sentence, Token, NO_SYNSET};

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("invalid parser endpoint {endpoint}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to parser at {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("parser at {endpoint} returned status {status}")]
    Status { endpoint: String, status: u16 },

    /// The remote parser answered with an HTML error page
    #[error("parser in distress")]
    Distress,

    #[error("could not decode parser response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ParserError {
    /// True when the failure happened on the other side of a network call
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            ParserError::Transport { .. }
                | ParserError::Status { .. }
                | ParserError::Distress
                | ParserError::Decode(_)
        )
    }
}

/// A backend that turns text into sentences of tokens.
///
/// Token indices are positions in the whole document. Sentences may still
/// contain whitespace tokens; `Parser` removes them.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Short backend name, reported by the health endpoint
    fn name(&self) -> &str;

    async fn analyze(&self, text: &str) -> Result<Vec<Sentence>, ParserError>;
}

/// Front end used by the HTTP layer
pub struct Parser {
    model: Arc<dyn LanguageModel>,
    lexicon: Option<Arc<Lexicon>>,
}

impl Parser {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self {
            model,
            lexicon: None,
        }
    }

    /// Annotates parsed tokens with lexicon categories
    pub fn with_lexicon(mut self, lexicon: Arc<Lexicon>) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    pub fn backend(&self) -> &str {
        self.model.name()
    }

    pub fn cleanup_text(&self, data: &[u8]) -> String {
        cleanup::cleanup_text(data)
    }

    /// Parses a document into sentences with whitespace tokens removed.
    /// Sentences that held nothing but whitespace are dropped.
    pub async fn parse_document(&self, text: &str) -> Result<Vec<Sentence>, ParserError> {
        let sentences = self.model.analyze(text).await?;
        let mut result: Vec<Sentence> = sentences
            .into_iter()
            .map(|s| self.convert_sentence(s))
            .filter(|s| !s.is_empty())
            .collect();

        if let Some(lexicon) = &self.lexicon {
            for token in result.iter_mut().flatten() {
                if token.semantic.is_empty() {
                    if let Some(category) = lexicon.lookup(&token.text) {
                        token.semantic = category.to_string();
                    }
                }
            }
        }

        debug!(
            "Parsed {} bytes into {} sentences with {}",
            text.len(),
            result.len(),
            self.model.name()
        );
        Ok(result)
    }

    /// Drops whitespace tokens, keeping order and original indices
    pub fn convert_sentence(&self, sentence: Sentence) -> Sentence {
        sentence.into_iter().filter(|t| !t.is_whitespace()).collect()
    }
}
