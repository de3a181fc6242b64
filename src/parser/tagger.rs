// src/parser/tagger.rs

use crate::parser::penn::{is_adjective, is_noun, is_verb};
use crate::parser::tokenizer::{RawToken, TokenKind};

/// Tag given to whitespace tokens
pub const WHITESPACE_TAG: &str = "_SP";

pub const BE_FORMS: &[&str] = &[
    "be", "am", "is", "are", "was", "were", "been", "being", "'m", "'s", "'re",
];
pub const HAVE_FORMS: &[&str] = &["have", "has", "had", "having", "'ve", "'d"];
pub const DO_FORMS: &[&str] = &["do", "does", "did"];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "from", "up", "down", "over",
    "under", "since", "until", "while", "because", "although", "though", "if", "unless",
    "whether", "than", "as", "near", "without", "within", "upon", "toward", "towards", "across",
    "behind", "beyond", "around", "among", "per", "via", "despite", "except", "onto", "off",
    "out", "inside", "outside", "throughout", "beside", "besides", "along", "underneath",
];

const ADVERBS: &[&str] = &[
    "very", "too", "also", "just", "only", "then", "here", "now", "always", "often",
    "already", "still", "soon", "again", "ever", "quite", "rather", "almost", "even", "perhaps",
    "really", "so", "yet", "however", "away", "back", "together", "else", "instead", "maybe",
    "sometimes", "today", "tomorrow", "yesterday", "tonight", "once", "twice", "later",
    "anyway", "indeed", "thus", "therefore", "otherwise", "nearly", "not", "n't", "never",
];

const INTERJECTIONS: &[&str] = &[
    "hello", "hi", "oh", "yes", "please", "wow", "hey", "ok", "okay", "thanks", "goodbye", "bye",
    "yeah", "ah", "alas", "ouch", "hmm",
];

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion", "dozen",
];

const PERSONAL_PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "yourselves", "themselves",
];

/// Frequent verbs whose base form carries no suffix clue
const BASE_VERBS: &[&str] = &[
    "be", "have", "do", "go", "get", "make", "know", "think", "take", "see", "come", "want",
    "look", "use", "find", "give", "tell", "work", "call", "try", "ask", "need", "feel",
    "become", "leave", "put", "mean", "keep", "let", "begin", "seem", "help", "talk", "turn",
    "start", "show", "hear", "play", "run", "move", "like", "live", "believe", "hold", "bring",
    "happen", "write", "provide", "sit", "stand", "lose", "pay", "meet", "include", "continue",
    "set", "learn", "change", "lead", "understand", "watch", "follow", "stop", "create", "speak",
    "read", "allow", "add", "spend", "grow", "open", "walk", "win", "offer", "remember", "love",
    "consider", "appear", "buy", "wait", "serve", "die", "send", "expect", "build", "stay",
    "fall", "cut", "reach", "kill", "remain", "eat", "drink", "sleep", "own", "say", "visit",
    "drive", "fly", "swim", "sing", "sell", "catch", "teach", "fight", "hit", "travel", "jump",
    "climb", "carry", "close", "cook", "clean", "dance", "draw", "explain", "hate", "hope",
    "hurt", "laugh", "listen", "marry", "miss", "plan", "pull", "push", "rain", "rest",
    "return", "shop", "smile", "study", "thank", "throw", "touch", "wash", "wish",
    "worry", "bark", "fix", "sail", "ride", "wear", "choose", "break", "feed",
];

/// Irregular past and participle forms
const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("went", "VBD"), ("gone", "VBN"), ("saw", "VBD"), ("seen", "VBN"), ("took", "VBD"),
    ("taken", "VBN"), ("made", "VBD"), ("said", "VBD"), ("got", "VBD"), ("gotten", "VBN"),
    ("gave", "VBD"), ("given", "VBN"), ("came", "VBD"), ("knew", "VBD"), ("known", "VBN"),
    ("thought", "VBD"), ("told", "VBD"), ("found", "VBD"), ("became", "VBD"), ("left", "VBD"),
    ("felt", "VBD"), ("brought", "VBD"), ("began", "VBD"), ("begun", "VBN"), ("kept", "VBD"),
    ("held", "VBD"), ("wrote", "VBD"), ("written", "VBN"), ("stood", "VBD"), ("heard", "VBD"),
    ("meant", "VBD"), ("met", "VBD"), ("ran", "VBD"), ("paid", "VBD"), ("sat", "VBD"),
    ("spoke", "VBD"), ("spoken", "VBN"), ("led", "VBD"), ("grew", "VBD"), ("grown", "VBN"),
    ("lost", "VBD"), ("fell", "VBD"), ("fallen", "VBN"), ("sent", "VBD"), ("built", "VBD"),
    ("understood", "VBD"), ("drew", "VBD"), ("drawn", "VBN"), ("broke", "VBD"),
    ("broken", "VBN"), ("spent", "VBD"), ("rose", "VBD"), ("risen", "VBN"), ("drove", "VBD"),
    ("driven", "VBN"), ("bought", "VBD"), ("wore", "VBD"), ("worn", "VBN"), ("chose", "VBD"),
    ("chosen", "VBN"), ("ate", "VBD"), ("eaten", "VBN"), ("flew", "VBD"), ("flown", "VBN"),
    ("swam", "VBD"), ("sang", "VBD"), ("sold", "VBD"), ("caught", "VBD"), ("taught", "VBD"),
    ("fought", "VBD"), ("won", "VBD"), ("rode", "VBD"), ("ridden", "VBN"), ("fed", "VBD"),
];

const ADJECTIVES: &[&str] = &[
    "good", "new", "first", "last", "long", "great", "little", "own", "other", "old", "right",
    "big", "high", "different", "small", "large", "next", "early", "young", "important", "few",
    "public", "bad", "same", "able", "happy", "sad", "red", "blue", "green", "black", "white",
    "yellow", "brown", "grey", "gray", "hot", "cold", "warm", "cool", "nice", "fine", "free",
    "full", "real", "sure", "true", "whole", "clear", "late", "hard", "easy", "strong", "short",
    "low", "main", "many", "much", "several", "certain", "fast", "slow", "tall", "rich", "poor",
    "wild", "domestic", "tiny", "huge", "quiet", "loud", "dark", "bright", "empty",
];

const NOUN_EXCEPTIONS: &[&str] = &[
    "thing", "things", "king", "ring", "spring", "string", "wing", "morning", "evening",
    "nothing", "something", "anything", "everything", "ceiling", "everyone", "someone",
    "anyone", "nobody", "everybody", "somebody", "species", "news", "series", "bus", "gas",
    "seed", "speed", "bed",
];

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ism", "ist", "ance", "ence", "ship", "hood",
];
const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ical", "ish"];
const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify"];

/// Lower-cases a word and folds typographic apostrophes
pub fn normalize(word: &str) -> String {
    word.to_lowercase().replace('’', "'")
}

fn closed_class(word: &str) -> Option<&'static str> {
    let tag = match word {
        "the" | "a" | "an" | "this" | "that" | "these" | "those" | "every" | "each" | "some"
        | "any" | "no" | "another" | "either" | "neither" | "all" | "both" | "half" => "DT",
        "my" | "your" | "his" | "its" | "our" | "their" | "her" => "PRP$",
        "who" | "whom" | "what" => "WP",
        "whose" => "WP$",
        "which" => "WDT",
        "where" | "when" | "why" | "how" => "WRB",
        "to" => "TO",
        "and" | "or" | "but" | "nor" => "CC",
        "can" | "could" | "may" | "might" | "must" | "shall" | "should" | "will" | "would"
        | "ca" | "wo" | "'ll" | "'d" => "MD",
        "there" => "EX",
        "more" | "less" | "better" | "worse" => "JJR",
        "most" | "least" | "best" | "worst" => "JJS",
        "am" | "'m" | "are" | "'re" | "have" | "'ve" | "do" => "VBP",
        "is" | "has" | "does" => "VBZ",
        "was" | "were" | "had" | "did" => "VBD",
        "be" => "VB",
        "been" | "done" => "VBN",
        "being" | "having" | "doing" => "VBG",
        "'s" => "POS",
        w if PERSONAL_PRONOUNS.contains(&w) => "PRP",
        w if PREPOSITIONS.contains(&w) => "IN",
        w if ADVERBS.contains(&w) => "RB",
        w if INTERJECTIONS.contains(&w) => "UH",
        w if NUMBER_WORDS.contains(&w) => "CD",
        _ => return None,
    };
    Some(tag)
}

fn irregular_verb(word: &str) -> Option<&'static str> {
    IRREGULAR_VERBS
        .iter()
        .find(|(form, _)| *form == word)
        .map(|(_, tag)| *tag)
}

pub fn is_base_verb(word: &str) -> bool {
    BASE_VERBS.contains(&word)
}

fn ends_with_longer(word: &str, suffix: &str, margin: usize) -> bool {
    word.ends_with(suffix) && word.chars().count() > suffix.chars().count() + margin
}

/// Guess a tag for an unknown lower-case word from its ending
fn by_suffix(word: &str) -> &'static str {
    if word.contains('-') {
        return "JJ";
    }
    if ends_with_longer(word, "ly", 2) {
        return "RB";
    }
    if ends_with_longer(word, "ing", 1) {
        return "VBG";
    }
    if ends_with_longer(word, "ed", 1) && !word.ends_with("eed") {
        return "VBD";
    }
    if NOUN_SUFFIXES.iter().any(|s| ends_with_longer(word, s, 1)) {
        return "NN";
    }
    if ADJECTIVE_SUFFIXES.iter().any(|s| ends_with_longer(word, s, 2)) {
        return "JJ";
    }
    if VERB_SUFFIXES.iter().any(|s| ends_with_longer(word, s, 2)) {
        return "VB";
    }
    if ends_with_longer(word, "s", 2)
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
    {
        return "NNS";
    }
    "NN"
}

fn word_tag(text: &str, sentence_initial: bool) -> &'static str {
    let lower = normalize(text);
    if let Some(tag) = closed_class(&lower) {
        return tag;
    }
    if let Some(tag) = irregular_verb(&lower) {
        return tag;
    }

    let capitalized = text.chars().next().is_some_and(char::is_uppercase);
    let acronym = text.chars().count() > 1
        && text.chars().all(|c| !c.is_alphabetic() || c.is_uppercase());
    if (capitalized && !sentence_initial) || acronym {
        return "NNP";
    }
    if is_base_verb(&lower) {
        return "VB";
    }
    if ADJECTIVES.contains(&lower.as_str()) {
        return "JJ";
    }
    if NOUN_EXCEPTIONS.contains(&lower.as_str()) {
        return "NN";
    }

    match by_suffix(&lower) {
        "NN" if capitalized => "NNP",
        tag => tag,
    }
}

fn punctuation_tag(text: &str, quote_open: &mut bool) -> &'static str {
    match text {
        "." | "!" | "?" => ".",
        "," => ",",
        ":" | ";" | "..." | "--" | "–" | "—" => ":",
        "-" => "HYPH",
        "(" | "[" | "{" => "-LRB-",
        ")" | "]" | "}" => "-RRB-",
        "“" | "‘" | "`" | "``" => "``",
        "”" | "’" | "''" | "'" => "''",
        "\"" => {
            *quote_open = !*quote_open;
            if *quote_open { "``" } else { "''" }
        }
        "$" | "£" | "€" => "$",
        "#" => "#",
        "%" => "NN",
        "&" => "CC",
        _ => "SYM",
    }
}

/// Previous non-adverb word position, used to see through "not", "then", ...
fn previous_skipping_adverbs(words: &[usize], k: usize, tags: &[&str]) -> Option<usize> {
    words[..k]
        .iter()
        .rev()
        .copied()
        .find(|&i| tags[i] != "RB")
}

/// Assigns a Penn Treebank tag to every token of one sentence
pub fn tag_sentence(tokens: &[RawToken]) -> Vec<&'static str> {
    let words: Vec<usize> = (0..tokens.len())
        .filter(|&i| !tokens[i].is_whitespace())
        .collect();
    let lower: Vec<String> = tokens.iter().map(|t| normalize(&t.text)).collect();

    // Lexical tags
    let mut quote_open = false;
    let mut tags: Vec<&'static str> = tokens
        .iter()
        .enumerate()
        .map(|(i, token)| match token.kind {
            TokenKind::Whitespace => WHITESPACE_TAG,
            TokenKind::Number => "CD",
            TokenKind::Punctuation => punctuation_tag(&token.text, &mut quote_open),
            TokenKind::Word => word_tag(&token.text, words.first() == Some(&i)),
        })
        .collect();

    // Left context
    for k in 0..words.len() {
        let i = words[k];
        let word = lower[i].as_str();
        let prev = if k > 0 { Some(words[k - 1]) } else { None };
        let prev_tag = prev.map(|p| tags[p]);
        let governor = previous_skipping_adverbs(&words, k, &tags);
        let governor_tag = governor.map(|p| tags[p]);

        if word == "'s" {
            let after_pronoun = prev.is_some_and(|p| {
                matches!(tags[p], "PRP" | "WP" | "EX")
                    || matches!(lower[p].as_str(), "that" | "here" | "there")
            });
            tags[i] = if after_pronoun { "VBZ" } else { "POS" };
            continue;
        }

        let singular = word.strip_suffix('s').unwrap_or(word);
        match tags[i] {
            "VB" | "VBP" | "NN" | "NNS" if is_base_verb(word)
                && matches!(governor_tag, Some("TO" | "MD")) =>
            {
                tags[i] = "VB";
            }
            "VB" if matches!(
                prev_tag,
                Some("DT" | "PRP$" | "JJ" | "JJR" | "JJS" | "POS" | "CD" | "IN")
            ) =>
            {
                tags[i] = "NN";
            }
            "VB" if governor_tag.is_some_and(|t| {
                matches!(t, "PRP" | "WP" | "WDT") || is_noun(t)
            }) =>
            {
                tags[i] = "VBP";
            }
            "NNS" if is_base_verb(singular)
                && governor.is_some_and(|p| {
                    matches!(tags[p], "NN" | "NNP" | "WP" | "WDT")
                        || matches!(lower[p].as_str(), "he" | "she" | "it")
                }) =>
            {
                tags[i] = "VBZ";
            }
            // "that" before a verb is a relative pronoun, settled below
            "VBD" if matches!(prev_tag, Some("DT" | "PRP$"))
                && prev.is_some_and(|p| lower[p] != "that") =>
            {
                tags[i] = "JJ";
            }
            "VBD" if governor.is_some_and(|p| {
                HAVE_FORMS.contains(&lower[p].as_str()) || BE_FORMS.contains(&lower[p].as_str())
            }) =>
            {
                tags[i] = "VBN";
            }
            "IN" | "RB"
                if matches!(word, "up" | "out" | "off" | "away" | "back" | "down")
                    && prev_tag.is_some_and(is_verb) =>
            {
                tags[i] = "RP";
            }
            _ => {}
        }
    }

    // Right context
    for k in 0..words.len() {
        let i = words[k];
        let next_tag = words.get(k + 1).map(|&n| tags[n]);
        let next_word = words.get(k + 1).map(|&n| lower[n].as_str());
        match lower[i].as_str() {
            "her" => {
                let owns = next_tag.is_some_and(|t| is_noun(t) || is_adjective(t) || t == "CD");
                tags[i] = if owns { "PRP$" } else { "PRP" };
            }
            "that" => {
                tags[i] = match next_tag {
                    Some("DT" | "PRP" | "NNP" | "EX") => "IN",
                    Some(t) if is_verb(t) || t == "MD" => "WDT",
                    _ => "DT",
                };
            }
            "there" => {
                let existential = next_word.is_some_and(|w| BE_FORMS.contains(&w));
                tags[i] = if existential { "EX" } else { "RB" };
            }
            "all" | "both" | "half" if matches!(next_tag, Some("DT" | "PRP$")) => {
                tags[i] = "PDT";
            }
            _ => {}
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::penn::is_penn_tag;
    use crate::parser::tokenizer::tokenize;

    fn tags_of(text: &str) -> Vec<&'static str> {
        tag_sentence(&tokenize(text))
    }

    #[test]
    fn test_simple_sentence() {
        assert_eq!(
            tags_of("Peter de Vocht was here."),
            vec!["NNP", "NN", "NNP", "VBD", "RB", "."]
        );
        assert_eq!(
            tags_of("He then moved to Wellington."),
            vec!["PRP", "RB", "VBD", "TO", "NNP", "."]
        );
    }

    #[test]
    fn test_nouns_determiners_and_adjectives() {
        assert_eq!(
            tags_of("The big dog chased two cats"),
            vec!["DT", "JJ", "NN", "VBD", "CD", "NNS"]
        );
    }

    #[test]
    fn test_modal_and_infinitive() {
        assert_eq!(tags_of("I will go"), vec!["PRP", "MD", "VB"]);
        assert_eq!(tags_of("They want to eat"), vec!["PRP", "VBP", "TO", "VB"]);
    }

    #[test]
    fn test_third_person_verb() {
        assert_eq!(tags_of("the dog runs"), vec!["DT", "NN", "VBZ"]);
    }

    #[test]
    fn test_participle_after_have() {
        assert_eq!(tags_of("she has eaten"), vec!["PRP", "VBZ", "VBN"]);
        assert_eq!(tags_of("they have moved"), vec!["PRP", "VBP", "VBN"]);
    }

    #[test]
    fn test_possessive_and_copula_clitic() {
        assert_eq!(tags_of("John's boat"), vec!["NNP", "POS", "NN"]);
        assert_eq!(tags_of("it's big"), vec!["PRP", "VBZ", "JJ"]);
    }

    #[test]
    fn test_her_and_there() {
        assert_eq!(tags_of("I saw her"), vec!["PRP", "VBD", "PRP"]);
        assert_eq!(tags_of("her boat"), vec!["PRP$", "NN"]);
        assert_eq!(tags_of("there is a boat"), vec!["EX", "VBZ", "DT", "NN"]);
    }

    #[test]
    fn test_noun_use_of_verb() {
        assert_eq!(tags_of("a walk"), vec!["DT", "NN"]);
    }

    #[test]
    fn test_punctuation_tags() {
        assert_eq!(
            tags_of("(\"yes\", $5)"),
            vec!["-LRB-", "``", "UH", "''", ",", "$", "CD", "-RRB-"]
        );
    }

    #[test]
    fn test_whitespace_tag() {
        let tags = tags_of("here.  He");
        assert_eq!(tags[2], WHITESPACE_TAG);
    }

    #[test]
    fn test_every_tag_is_penn() {
        let text = "Mr. Smith's 3 dogs quickly ran off; however, there were (maybe) 1,000 \
                    others -- who knows? -- at #5 & 50% which she'll never see";
        for tag in tags_of(text) {
            assert!(is_penn_tag(tag), "{} is not a Penn tag", tag);
        }
    }
}
