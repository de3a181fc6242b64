// src/parser/tokenizer.rs

use log::trace;

/// Broad class of a raw token, decided from its characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Number,
    Punctuation,
    Whitespace,
}

/// A token as produced by the tokenizer, before tagging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub text: String,
    pub kind: TokenKind,
}

impl RawToken {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = classify(&text);
        Self { text, kind }
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}

const PREFIX_CHARS: &[char] = &[
    '(', '[', '{', '"', '\'', '`', '“', '‘', '$', '£', '€', '#', '¿', '¡', '<',
];
const SUFFIX_CHARS: &[char] = &[
    ')', ']', '}', '"', '\'', '”', '’', ',', ';', ':', '!', '?', '.', '%', '>',
];
const INFIX_CHARS: &[char] = &[',', ';', '!', '?', '(', ')', '[', ']', '{', '}', '"', '/'];

/// Clitics split off the end of a word, compared after folding ’ to '
const CONTRACTIONS: &[&str] = &["n't", "'s", "'re", "'ll", "'ve", "'d", "'m"];

const ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "prof.", "st.", "jr.", "sr.", "vs.", "etc.", "e.g.", "i.e.",
    "inc.", "ltd.", "co.", "corp.", "mt.", "no.", "jan.", "feb.", "mar.", "apr.", "jun.", "jul.",
    "aug.", "sep.", "sept.", "oct.", "nov.", "dec.", "a.m.", "p.m.", "u.s.", "u.k.", "approx.",
    "dept.", "est.", "fig.", "gov.", "gen.", "col.", "capt.", "lt.", "sgt.", "rev.",
];

fn fold_apostrophes(s: &str) -> String {
    s.to_lowercase().replace('’', "'")
}

fn classify(text: &str) -> TokenKind {
    if text.chars().all(char::is_whitespace) {
        TokenKind::Whitespace
    } else if is_number(text) {
        TokenKind::Number
    } else if text.chars().any(char::is_alphabetic) {
        TokenKind::Word
    } else {
        TokenKind::Punctuation
    }
}

/// Digits with optional inner `,` or `.` separators, e.g. `1,000` or `3.14`
fn is_number(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => {}
        _ => return false,
    }
    text.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.')
        && text.chars().last().is_some_and(|c| c.is_ascii_digit())
}

/// Single capital letter initial (`J.`) or dotted acronym (`U.S.A.`)
fn is_initialism(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() < 2 || chars.len() % 2 != 0 {
        return false;
    }
    chars
        .chunks(2)
        .all(|pair| pair[0].is_alphabetic() && pair[1] == '.')
        && chars[0].is_uppercase()
}

/// Chunks that must not be split any further
fn is_protected(core: &str) -> bool {
    let folded = fold_apostrophes(core);
    core == "..."
        || ABBREVIATIONS.contains(&folded.as_str())
        || CONTRACTIONS.contains(&folded.as_str())
        || is_initialism(core)
        || is_number(core)
}

/// Returns the byte length of a contraction suffix on `core`, if any
fn contraction_suffix(core: &str) -> Option<usize> {
    let folded = fold_apostrophes(core);
    for suffix in CONTRACTIONS {
        if folded.len() > suffix.len() && folded.ends_with(suffix) {
            let stem = &folded[..folded.len() - suffix.len()];
            if stem.chars().last().is_some_and(char::is_alphabetic) {
                // Count chars, not bytes: the word may spell the apostrophe as ’ (3 bytes)
                let suffix_chars = suffix.chars().count();
                let start = core
                    .char_indices()
                    .rev()
                    .nth(suffix_chars - 1)
                    .map(|(i, _)| i)?;
                return Some(core.len() - start);
            }
        }
    }
    None
}

/// Splits inner punctuation out of a word, keeping `1,000` together
fn split_infixes(core: &str, out: &mut Vec<RawToken>) {
    let chars: Vec<(usize, char)> = core.char_indices().collect();
    let mut start = 0;
    for (pos, &(i, c)) in chars.iter().enumerate() {
        if !INFIX_CHARS.contains(&c) {
            continue;
        }
        let between_digits = c == ','
            && pos > 0
            && chars[pos - 1].1.is_ascii_digit()
            && chars.get(pos + 1).is_some_and(|(_, n)| n.is_ascii_digit());
        if between_digits {
            continue;
        }
        if i > start {
            out.push(RawToken::new(&core[start..i]));
        }
        out.push(RawToken::new(c.to_string()));
        start = i + c.len_utf8();
    }
    if start < core.len() {
        out.push(RawToken::new(&core[start..]));
    }
}

/// Splits a whitespace-free chunk into prefix punctuation, the core word and
/// suffix punctuation or clitics.
fn split_chunk(chunk: &str, out: &mut Vec<RawToken>) {
    let mut prefixes: Vec<String> = Vec::new();
    let mut suffixes: Vec<String> = Vec::new();
    let mut core = chunk;

    loop {
        if core.is_empty() || is_protected(core) {
            break;
        }
        let Some(first) = core.chars().next() else {
            break;
        };
        let multi_char = core.chars().nth(1).is_some();

        if multi_char && PREFIX_CHARS.contains(&first) {
            prefixes.push(first.to_string());
            core = &core[first.len_utf8()..];
            continue;
        }
        if core.len() > 3 && core.ends_with("...") {
            suffixes.push("...".to_string());
            core = &core[..core.len() - 3];
            continue;
        }
        if let Some(len) = contraction_suffix(core) {
            let split = core.len() - len;
            suffixes.push(core[split..].to_string());
            core = &core[..split];
            continue;
        }
        if let Some(last) = core.chars().last() {
            if multi_char && SUFFIX_CHARS.contains(&last) {
                let split = core.len() - last.len_utf8();
                suffixes.push(last.to_string());
                core = &core[..split];
                continue;
            }
        }
        break;
    }

    out.extend(prefixes.into_iter().map(RawToken::new));
    if !core.is_empty() {
        if is_protected(core) {
            out.push(RawToken::new(core));
        } else {
            split_infixes(core, out);
        }
    }
    out.extend(suffixes.into_iter().rev().map(RawToken::new));
}

/// Splits text into raw tokens.
///
/// A single space after a token is absorbed. Any other run of whitespace
/// becomes a whitespace token (minus the absorbed space), so `"here.  He"`
/// yields a `" "` token between `.` and `He`.
pub fn tokenize(text: &str) -> Vec<RawToken> {
    let mut tokens = Vec::new();
    let mut rest = text;
    let mut after_token = false;

    while !rest.is_empty() {
        let ws_len = rest.len() - rest.trim_start().len();
        if ws_len > 0 {
            let ws = &rest[..ws_len];
            let ws = if after_token && ws.starts_with(' ') {
                &ws[1..]
            } else {
                ws
            };
            if !ws.is_empty() {
                tokens.push(RawToken {
                    text: ws.to_string(),
                    kind: TokenKind::Whitespace,
                });
            }
            rest = &rest[ws_len..];
        }

        let chunk_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        if chunk_len > 0 {
            split_chunk(&rest[..chunk_len], &mut tokens);
            rest = &rest[chunk_len..];
            after_token = true;
        }
    }

    trace!("Tokenized {} bytes into {} tokens", text.len(), tokens.len());
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        tokenize(text).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_splits_sentence_punctuation() {
        assert_eq!(
            texts("Peter de Vocht was here."),
            vec!["Peter", "de", "Vocht", "was", "here", "."]
        );
    }

    #[test]
    fn test_extra_whitespace_becomes_token() {
        let tokens = tokenize("here.  He");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[2].text, " ");
        assert!(tokens[2].is_whitespace());
        assert_eq!(tokens[3].text, "He");
    }

    #[test]
    fn test_leading_whitespace_is_kept_whole() {
        let tokens = tokenize("  Hi");
        assert_eq!(tokens[0].text, "  ");
        assert_eq!(tokens[1].text, "Hi");
    }

    #[test]
    fn test_newlines_become_tokens() {
        assert_eq!(texts("one\n\ntwo"), vec!["one", "\n\n", "two"]);
    }

    #[test]
    fn test_contractions() {
        assert_eq!(texts("don't"), vec!["do", "n't"]);
        assert_eq!(texts("It's"), vec!["It", "'s"]);
        assert_eq!(texts("we'll go"), vec!["we", "'ll", "go"]);
        assert_eq!(texts("can't."), vec!["ca", "n't", "."]);
        assert_eq!(texts("I’m"), vec!["I", "’m"]);
    }

    #[test]
    fn test_abbreviations_and_initials_keep_period() {
        assert_eq!(texts("Mr. Smith"), vec!["Mr.", "Smith"]);
        assert_eq!(texts("J. Smith"), vec!["J.", "Smith"]);
        assert_eq!(texts("the U.S. army"), vec!["the", "U.S.", "army"]);
        assert_eq!(texts("e.g. this"), vec!["e.g.", "this"]);
    }

    #[test]
    fn test_numbers_and_symbols() {
        assert_eq!(texts("$3.50"), vec!["$", "3.50"]);
        assert_eq!(texts("1,000 people"), vec!["1,000", "people"]);
        assert_eq!(texts("50%"), vec!["50", "%"]);
        assert_eq!(tokenize("3.14")[0].kind, TokenKind::Number);
    }

    #[test]
    fn test_quotes_and_brackets() {
        assert_eq!(
            texts("(\"Hello,\" she said)"),
            vec!["(", "\"", "Hello", ",", "\"", "she", "said", ")"]
        );
    }

    #[test]
    fn test_hyphenated_words_stay_whole() {
        assert_eq!(texts("even-toed ungulate"), vec!["even-toed", "ungulate"]);
    }

    #[test]
    fn test_infix_split() {
        assert_eq!(texts("cats/dogs"), vec!["cats", "/", "dogs"]);
        assert_eq!(texts("yes,no"), vec!["yes", ",", "no"]);
    }

    #[test]
    fn test_ellipsis() {
        assert_eq!(texts("wait..."), vec!["wait", "..."]);
    }

    #[test]
    fn test_empty() {
        assert!(tokenize("").is_empty());
    }
}
