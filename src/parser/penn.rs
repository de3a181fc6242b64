// src/parser/penn.rs

/// Penn Treebank part-of-speech tags and phrase labels, lower case
const PENN_TAGS: &[&str] = &[
    "cc", "cd", "dt", "ex", "fw", "in", "jj", "jjr", "jjs", "ls", "md", "nn", "nns", "nnp",
    "nnps", "pdt", "pos", "prp", "prp$", "prps", "rb", "rbr", "rbs", "rp", "sym", "to", "intj",
    "uh", "vb", "vbd", "vbg", "vbn", "vbp", "vbz", "wdt", "wp", "wp$", "wps", "wrb", "rsb",
    "-rsb-", "rcb", "-rcb-", "rrb", "-rrb-", "-lsb-", "lsb", "-lcb-", "lcb", "lrb", "-lrb-",
    "np-tmp", "pun", "hyph", ".", ",", ":", "``", "''", "$", "#", "sqt", "eqt", "x", "xx", "sp",
    "_sp", "adjp", "advp", "conjp", "np", "vp", "pp", "qp", "s", "sq", "sbarq", "sbar", "sinv",
    "ucp", "whadjp", "whadvp", "whnp", "whpp", "root", "prn", "frag", "prt", "rrc", "nx", "nac",
    "lst", "add", "afx", "gw", "bes", "hvs", "nfp",
];

/// Returns true if `tag` (case insensitive) is a known Penn tag or phrase label
pub fn is_penn_tag(tag: &str) -> bool {
    let lower = tag.to_lowercase();
    PENN_TAGS.contains(&lower.as_str())
}

pub fn is_noun(tag: &str) -> bool {
    matches!(tag, "NN" | "NNS" | "NNP" | "NNPS")
}

pub fn is_verb(tag: &str) -> bool {
    tag.starts_with("VB")
}

pub fn is_adjective(tag: &str) -> bool {
    matches!(tag, "JJ" | "JJR" | "JJS")
}

pub fn is_adverb(tag: &str) -> bool {
    matches!(tag, "RB" | "RBR" | "RBS")
}
