// src/parser/segmenter.rs

use std::ops::Range;

use crate::parser::tokenizer::RawToken;

const TERMINALS: &[&str] = &[".", "!", "?", "..."];
const CLOSERS: &[&str] = &[")", "]", "}", "\"", "'", "”", "’"];

fn is_terminal(token: &RawToken) -> bool {
    TERMINALS.contains(&token.text.as_str())
}

fn is_closer(token: &RawToken) -> bool {
    CLOSERS.contains(&token.text.as_str())
}

fn is_paragraph_break(token: &RawToken) -> bool {
    token.is_whitespace() && token.text.matches('\n').count() >= 2
}

/// Splits a token stream into sentence ranges.
///
/// A sentence ends after a run of terminal punctuation plus any closing
/// quotes or brackets, or after a blank line. Whitespace that follows the
/// boundary stays with the sentence it follows.
pub fn split_sentences(tokens: &[RawToken]) -> Vec<Range<usize>> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < tokens.len() {
        let ends_here = if is_terminal(&tokens[i]) {
            i += 1;
            while i < tokens.len() && (is_terminal(&tokens[i]) || is_closer(&tokens[i])) {
                i += 1;
            }
            true
        } else if is_paragraph_break(&tokens[i]) {
            i += 1;
            true
        } else {
            i += 1;
            false
        };

        if ends_here {
            while i < tokens.len() && tokens[i].is_whitespace() {
                i += 1;
            }
            sentences.push(start..i);
            start = i;
        }
    }

    if start < tokens.len() {
        sentences.push(start..tokens.len());
    }
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokenizer::tokenize;

    fn sentence_texts(text: &str) -> Vec<Vec<String>> {
        let tokens = tokenize(text);
        split_sentences(&tokens)
            .into_iter()
            .map(|r| tokens[r].iter().map(|t| t.text.clone()).collect())
            .collect()
    }

    #[test]
    fn test_two_sentences_with_double_space() {
        let sentences = sentence_texts("Peter de Vocht was here.  He then moved to Wellington.");
        assert_eq!(sentences.len(), 2);
        // The extra space belongs to the first sentence
        assert_eq!(sentences[0].last().map(String::as_str), Some(" "));
        assert_eq!(sentences[1][0], "He");
    }

    #[test]
    fn test_question_and_exclamation() {
        let sentences = sentence_texts("Really?! Yes. \"Go!\" he said");
        assert_eq!(sentences.len(), 4);
        assert_eq!(sentences[0], vec!["Really", "?", "!"]);
        assert_eq!(sentences[2], vec!["\"", "Go", "!", "\""]);
        assert_eq!(sentences[3], vec!["he", "said"]);
    }

    #[test]
    fn test_abbreviation_does_not_split() {
        let sentences = sentence_texts("Mr. Smith arrived.");
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_blank_line_splits() {
        let sentences = sentence_texts("A heading\n\nBody text");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1], vec!["Body", "text"]);
    }

    #[test]
    fn test_no_terminal_is_one_sentence() {
        assert_eq!(sentence_texts("no full stop here").len(), 1);
        assert!(sentence_texts("").is_empty());
    }
}
