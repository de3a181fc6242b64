// src/parser/rules.rs

use async_trait::async_trait;
use log::debug;

use crate::parser::dependency::{attach, Attachment};
use crate::parser::segmenter::split_sentences;
use crate::parser::tagger::tag_sentence;
use crate::parser::tokenizer::tokenize;
use crate::parser::types::{Sentence, Token};
use crate::parser::{LanguageModel, ParserError};

/// Deterministic English pipeline: tokenizer, sentence splitter, tagger and
/// dependency attacher. Needs no model files and never fails.
#[derive(Debug, Default, Clone)]
pub struct RuleModel;

impl RuleModel {
    pub fn new() -> Self {
        Self
    }

    /// Runs the pipeline synchronously
    pub fn analyze_text(&self, text: &str) -> Vec<Sentence> {
        let tokens = tokenize(text);
        let mut sentences = Vec::new();

        for range in split_sentences(&tokens) {
            let offset = range.start;
            let slice = &tokens[range];
            let tags = tag_sentence(slice);
            let arcs = attach(slice, &tags);

            let sentence: Sentence = slice
                .iter()
                .enumerate()
                .map(|(i, raw)| {
                    Token::new(
                        raw.text.clone(),
                        offset + i,
                        tags[i],
                        arcs[i].label,
                        ancestors(&arcs, i).into_iter().map(|a| offset + a).collect(),
                    )
                })
                .collect();
            sentences.push(sentence);
        }

        debug!(
            "Rule model produced {} sentences from {} tokens",
            sentences.len(),
            tokens.len()
        );
        sentences
    }
}

/// Heads above `i`, nearest first. Stops if a chain revisits a token.
fn ancestors(arcs: &[Attachment], i: usize) -> Vec<usize> {
    let mut list = Vec::new();
    let mut current = arcs[i].head;
    while let Some(h) = current {
        if h == i || list.contains(&h) {
            break;
        }
        list.push(h);
        current = arcs[h].head;
    }
    list
}

#[async_trait]
impl LanguageModel for RuleModel {
    fn name(&self) -> &str {
        "rules"
    }

    async fn analyze(&self, text: &str) -> Result<Vec<Sentence>, ParserError> {
        Ok(self.analyze_text(text))
    }
}
