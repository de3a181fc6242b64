// src/parser/dependency.rs
//
// Heuristic dependency attachment over a tagged sentence. Verb groups and
// noun phrases are chunked first, then clauses, arguments and modifiers are
// hooked up to their heads. Every head lies inside the sentence and every
// chain of heads ends at the root.

use std::collections::HashSet;

use crate::parser::penn::{is_adjective, is_adverb, is_noun, is_verb};
use crate::parser::tagger::{normalize, BE_FORMS, DO_FORMS, HAVE_FORMS};
use crate::parser::tokenizer::RawToken;

pub const ROOT_LABEL: &str = "ROOT";

/// Head and label chosen for one token; the root has no head
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attachment {
    pub head: Option<usize>,
    pub label: &'static str,
}

const SUBORDINATORS: &[&str] = &[
    "because", "although", "though", "if", "unless", "whether", "while", "since", "until",
    "before", "after", "as", "that",
];
const NEGATIONS: &[&str] = &["not", "n't", "never"];
const PUNCTUATION_TAGS: &[&str] = &[
    ".", ",", ":", "``", "''", "-LRB-", "-RRB-", "HYPH", "SYM", "#", "NFP",
];

#[derive(Debug)]
struct VerbGroup {
    /// Word positions, auxiliaries first and the main verb last
    members: Vec<usize>,
}

impl VerbGroup {
    fn first(&self) -> usize {
        self.members[0]
    }

    fn main(&self) -> usize {
        self.members[self.members.len() - 1]
    }
}

#[derive(Debug)]
struct Phrase {
    start: usize,
    end: usize,
    head: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Clause {
    Main,
    Conj { cc: usize },
    Xcomp { to: usize },
    Wh { wh: usize, antecedent: Option<usize> },
    Advcl { marker: usize },
    Ccomp { marker: usize },
}

struct Attacher {
    tags: Vec<&'static str>,
    lower: Vec<String>,
    head: Vec<Option<usize>>,
    label: Vec<&'static str>,
    assigned: Vec<bool>,
    groups: Vec<VerbGroup>,
    group_of: Vec<Option<usize>>,
    phrases: Vec<Phrase>,
    phrase_of: Vec<Option<usize>>,
    markers: HashSet<usize>,
}

impl Attacher {
    fn new(words: &[&RawToken], tags: Vec<&'static str>) -> Self {
        let n = words.len();
        Self {
            tags,
            lower: words.iter().map(|t| normalize(&t.text)).collect(),
            head: vec![None; n],
            label: vec!["dep"; n],
            assigned: vec![false; n],
            groups: Vec::new(),
            group_of: vec![None; n],
            phrases: Vec::new(),
            phrase_of: vec![None; n],
            markers: HashSet::new(),
        }
    }

    fn len(&self) -> usize {
        self.tags.len()
    }

    fn set(&mut self, word: usize, head: usize, label: &'static str) {
        if word == head {
            return;
        }
        self.head[word] = Some(head);
        self.label[word] = label;
        self.assigned[word] = true;
    }

    fn is_verbal(&self, k: usize) -> bool {
        let tag = self.tags[k];
        if tag == "MD" {
            return true;
        }
        if !is_verb(tag) {
            return false;
        }
        if matches!(tag, "VBG" | "VBN") {
            let prev = k.checked_sub(1).map(|p| self.tags[p]);
            let next = self.tags.get(k + 1).copied();
            // "the running water" is a noun phrase
            if matches!(prev, Some("DT" | "PRP$" | "JJ" | "POS")) && next.is_some_and(is_noun) {
                return false;
            }
        }
        true
    }

    fn is_auxiliary(&self, k: usize) -> bool {
        let word = self.lower[k].as_str();
        self.tags[k] == "MD"
            || BE_FORMS.contains(&word)
            || HAVE_FORMS.contains(&word)
            || DO_FORMS.contains(&word)
    }

    fn chunk_verb_groups(&mut self) {
        let n = self.len();
        let mut k = 0;
        while k < n {
            if !self.is_verbal(k) {
                k += 1;
                continue;
            }
            let mut members = vec![k];
            let mut next = k + 1;
            loop {
                let mut m = next;
                while m < n && is_adverb(self.tags[m]) {
                    m += 1;
                }
                let last = members[members.len() - 1];
                if m < n && self.is_verbal(m) && self.is_auxiliary(last) {
                    members.push(m);
                    next = m + 1;
                } else {
                    break;
                }
            }
            self.groups.push(VerbGroup { members });
            k = next;
        }
    }

    fn starts_phrase(&self, k: usize) -> bool {
        let tag = self.tags[k];
        matches!(tag, "DT" | "PDT" | "PRP$" | "WP$" | "CD" | "$" | "VBG" | "VBN")
            || is_noun(tag)
            || is_adjective(tag)
    }

    fn continues_phrase(&self, k: usize) -> bool {
        let tag = self.tags[k];
        match tag {
            "DT" | "PRP$" => self.tags[k - 1] == "PDT",
            "CD" | "POS" | "$" | "HYPH" | "VBG" | "VBN" => true,
            t => is_noun(t) || is_adjective(t),
        }
    }

    fn chunk_phrases(&mut self) {
        let n = self.len();
        let mut k = 0;
        while k < n {
            if self.group_of[k].is_some() {
                k += 1;
                continue;
            }
            let end = if matches!(self.tags[k], "PRP" | "WP" | "WDT" | "EX") {
                k + 1
            } else if self.starts_phrase(k) {
                let mut m = k + 1;
                while m < n && self.group_of[m].is_none() && self.continues_phrase(m) {
                    m += 1;
                }
                m
            } else {
                k += 1;
                continue;
            };
            self.attach_phrase(k, end);
            k = end;
        }
    }

    fn segment_head(&self, start: usize, end: usize) -> usize {
        (start..end)
            .rev()
            .find(|&m| is_noun(self.tags[m]) || matches!(self.tags[m], "PRP" | "WP" | "WDT" | "EX"))
            .or_else(|| (start..end).rev().find(|&m| self.tags[m] == "CD"))
            .unwrap_or(end - 1)
    }

    fn modifier_label(tag: &str) -> &'static str {
        match tag {
            "DT" => "det",
            "PDT" => "predet",
            "PRP$" | "WP$" => "poss",
            "CD" => "nummod",
            "$" => "nmod",
            "HYPH" => "punct",
            t if is_adjective(t) || t == "VBG" || t == "VBN" => "amod",
            t if is_noun(t) => "compound",
            _ => "dep",
        }
    }

    /// Registers a phrase, splitting possessives: in "John 's boat", "John"
    /// is a `poss` of "boat" and "'s" is a `case` of "John".
    fn attach_phrase(&mut self, start: usize, end: usize) {
        let mut segments: Vec<(usize, usize)> = Vec::new();
        let mut seg_start = start;
        for m in start..end {
            if self.tags[m] == "POS" {
                if m > seg_start {
                    segments.push((seg_start, m));
                }
                seg_start = m + 1;
            }
        }
        if seg_start < end {
            segments.push((seg_start, end));
        }

        let mut owner: Option<usize> = None;
        for &(s, e) in &segments {
            let head = self.segment_head(s, e);
            for m in s..e {
                if m != head {
                    let label = Self::modifier_label(self.tags[m]);
                    self.set(m, head, label);
                }
            }
            if let Some(o) = owner {
                self.set(o, head, "poss");
            }
            owner = Some(head);
        }
        for m in start..end {
            if self.tags[m] == "POS" {
                // the possessor is the segment head just before the marker
                if let Some(&(s, e)) = segments.iter().rev().find(|&&(_, e)| e <= m) {
                    let possessor = self.segment_head(s, e);
                    self.set(m, possessor, "case");
                }
            }
        }

        let head = owner.unwrap_or(end - 1);
        let index = self.phrases.len();
        for m in start..end {
            self.phrase_of[m] = Some(index);
        }
        self.phrases.push(Phrase { start, end, head });
    }

    /// "Did you see", "Can you help": pull the auxiliary into the verb group
    /// that follows the inverted subject.
    fn merge_inverted_groups(&mut self, question: bool) {
        let mut g = 0;
        while g + 1 < self.groups.len() {
            let aux = self.groups[g].main();
            let word = self.lower[aux].as_str();
            let invertible = self.groups[g].members.len() == 1
                && (self.tags[aux] == "MD"
                    || DO_FORMS.contains(&word)
                    || (question && (BE_FORMS.contains(&word) || HAVE_FORMS.contains(&word))));
            let next_first = self.groups[g + 1].first();
            let between: Vec<usize> = (aux + 1..next_first).collect();
            let only_subject = !between.is_empty()
                && between
                    .iter()
                    .all(|&m| self.phrase_of[m].is_some() || is_adverb(self.tags[m]))
                && between.iter().any(|&m| self.phrase_of[m].is_some());
            if invertible
                && only_subject
                && matches!(self.tags[next_first], "VB" | "VBP" | "VBN" | "VBG")
            {
                let next = self.groups.remove(g + 1);
                self.groups[g].members.extend(next.members);
            } else {
                g += 1;
            }
        }
        self.group_of = vec![None; self.len()];
        for (g, group) in self.groups.iter().enumerate() {
            for &m in &group.members {
                self.group_of[m] = Some(g);
            }
        }
    }

    fn phrase_ending_at(&self, last: usize) -> Option<usize> {
        self.phrase_of[last].filter(|&p| self.phrases[p].end == last + 1)
    }

    fn classify(&self, g: usize) -> Clause {
        let first = self.groups[g].first();
        let span_start = if g > 0 { self.groups[g - 1].main() + 1 } else { 0 };
        let span: Vec<usize> = (span_start..first).collect();
        let before = span.iter().rev().copied().find(|&p| !is_adverb(self.tags[p]));

        if let Some(p) = before {
            if self.tags[p] == "TO" {
                return Clause::Xcomp { to: p };
            }
            if self.tags[p] == "CC" && g > 0 {
                return Clause::Conj { cc: p };
            }
        }
        if let Some(&p) = span
            .iter()
            .find(|&&p| matches!(self.tags[p], "WDT" | "WP" | "WP$"))
        {
            let antecedent = p
                .checked_sub(1)
                .and_then(|q| self.phrase_ending_at(q))
                .filter(|&q| self.phrase_of[p] != Some(q));
            if antecedent.is_some() || g > 0 {
                return Clause::Wh { wh: p, antecedent };
            }
            return Clause::Main;
        }
        if let Some(&p) = span.iter().find(|&&p| self.tags[p] == "WRB") {
            if p > 0 {
                return Clause::Advcl { marker: p };
            }
            return Clause::Main;
        }
        let subordinator = span
            .iter()
            .copied()
            .find(|&p| self.tags[p] == "IN" && SUBORDINATORS.contains(&self.lower[p].as_str()));
        if let Some(p) = subordinator {
            let between: Vec<usize> = (p + 1..first).collect();
            let phrases: HashSet<usize> = between.iter().filter_map(|&m| self.phrase_of[m]).collect();
            let clause_like = between
                .iter()
                .all(|&m| self.phrase_of[m].is_some() || is_adverb(self.tags[m]))
                && phrases.len() <= 1;
            if clause_like {
                return match self.lower[p].as_str() {
                    "that" | "whether" if g > 0 => Clause::Ccomp { marker: p },
                    _ => Clause::Advcl { marker: p },
                };
            }
        }
        Clause::Main
    }

    fn preceding_main(&self, k: usize) -> Option<usize> {
        self.groups.iter().map(VerbGroup::main).filter(|&m| m < k).last()
    }

    fn following_main(&self, k: usize) -> Option<usize> {
        self.groups.iter().map(VerbGroup::main).find(|&m| m > k)
    }

    fn nearest_main(&self, k: usize) -> Option<usize> {
        self.groups
            .iter()
            .map(VerbGroup::main)
            .min_by_key(|&m| (m.abs_diff(k), m > k))
    }

    fn is_passive(&self, g: usize) -> bool {
        let group = &self.groups[g];
        group.members.len() > 1
            && self.tags[group.main()] == "VBN"
            && group
                .members
                .iter()
                .any(|&m| BE_FORMS.contains(&self.lower[m].as_str()))
    }

    fn attach_prepositional_objects(&mut self) {
        for p in 0..self.phrases.len() {
            let (start, head) = (self.phrases[p].start, self.phrases[p].head);
            if let Some(q) = start.checked_sub(1) {
                if matches!(self.tags[q], "IN" | "TO") && !self.markers.contains(&q) {
                    self.set(head, q, "pobj");
                }
            }
        }
    }

    fn attach_coordinated_phrases(&mut self) {
        for p in 0..self.phrases.len() {
            let (start, head) = (self.phrases[p].start, self.phrases[p].head);
            if start < 2 || self.tags[start - 1] != "CC" || self.assigned[head] {
                continue;
            }
            if let Some(q) = self.phrase_ending_at(start - 2) {
                let first = self.phrases[q].head;
                self.set(head, first, "conj");
                self.set(start - 1, first, "cc");
            }
        }
    }

    fn attach_subjects(&mut self, clauses: &[Clause]) {
        for g in 0..self.groups.len() {
            let first = self.groups[g].first();
            let main = self.groups[g].main();

            let inverted = self
                .phrases
                .iter()
                .find(|p| p.start > first && p.end <= main && !self.assigned[p.head])
                .map(|p| p.head);

            let candidate = inverted.or_else(|| {
                let mut pos = first;
                while pos > 0 {
                    pos -= 1;
                    if !is_adverb(self.tags[pos]) {
                        break;
                    }
                }
                if pos == first || is_adverb(self.tags[pos]) {
                    return None;
                }
                if let Some(q) = self.phrase_ending_at(pos) {
                    return Some(self.phrases[q].head);
                }
                // "The dog that barked ran": skip back over a relative clause
                match self.group_of[pos].map(|h| clauses[h]) {
                    Some(Clause::Wh {
                        antecedent: Some(q),
                        ..
                    }) => Some(self.phrases[q].head),
                    _ => None,
                }
            });

            let Some(mut subject) = candidate else {
                continue;
            };
            while self.label[subject] == "conj" {
                match self.head[subject] {
                    Some(h) => subject = h,
                    None => break,
                }
            }
            if self.assigned[subject] {
                continue;
            }
            let label = if self.tags[subject] == "EX" {
                "expl"
            } else if self.is_passive(g) {
                "nsubjpass"
            } else {
                "nsubj"
            };
            self.set(subject, main, label);
        }
    }

    fn attach_objects(&mut self) {
        let n = self.len();
        for g in 0..self.groups.len() {
            let main = self.groups[g].main();
            let mut pos = main + 1;
            while pos < n && (is_adverb(self.tags[pos]) || self.tags[pos] == "RP") {
                pos += 1;
            }
            let Some(p) = (pos < n).then(|| self.phrase_of[pos]).flatten() else {
                continue;
            };
            let (start, end, head) = (
                self.phrases[p].start,
                self.phrases[p].end,
                self.phrases[p].head,
            );
            if start != pos || self.assigned[head] {
                continue;
            }
            let label = if is_adjective(self.tags[head]) {
                "acomp"
            } else if BE_FORMS.contains(&self.lower[main].as_str()) {
                "attr"
            } else {
                "dobj"
            };
            self.set(head, main, label);

            // "gave Mary a book": the first of two bare objects is the dative
            if label == "dobj" && end < n {
                if let Some(q) = self.phrase_of[end] {
                    let second = self.phrases[q].head;
                    if self.phrases[q].start == end && !self.assigned[second] {
                        self.label[head] = "dative";
                        self.set(second, main, "dobj");
                    }
                }
            }
        }
    }

    fn attach_clauses(&mut self, clauses: &[Clause], root_group: usize) {
        let root_main = self.groups[root_group].main();
        for g in 0..self.groups.len() {
            let main = self.groups[g].main();
            let members = self.groups[g].members.clone();
            let passive = self.is_passive(g);
            for &m in &members[..members.len() - 1] {
                let label = if passive && BE_FORMS.contains(&self.lower[m].as_str()) {
                    "auxpass"
                } else {
                    "aux"
                };
                self.set(m, main, label);
            }

            let is_root = g == root_group;
            let governor = if g < root_group || g == 0 {
                root_main
            } else {
                self.groups[g - 1].main()
            };

            match clauses[g] {
                Clause::Main => {
                    if !is_root {
                        self.set(main, governor, "ccomp");
                    }
                }
                Clause::Conj { cc } => {
                    self.set(cc, governor, "cc");
                    if !is_root {
                        self.set(main, governor, "conj");
                    }
                }
                Clause::Xcomp { to } => {
                    self.set(to, main, "aux");
                    if !is_root {
                        self.set(main, governor, "xcomp");
                    }
                }
                Clause::Wh { wh, antecedent } => {
                    if !is_root {
                        match antecedent {
                            Some(q) => {
                                let target = self.phrases[q].head;
                                self.set(main, target, "relcl");
                            }
                            None => self.set(main, governor, "ccomp"),
                        }
                    }
                    if !self.assigned[wh] {
                        let label = if self.tags[wh] == "WRB" { "advmod" } else { "dobj" };
                        self.set(wh, main, label);
                    }
                }
                Clause::Advcl { marker } => {
                    let label = if self.tags[marker] == "WRB" { "advmod" } else { "mark" };
                    self.set(marker, main, label);
                    if !is_root {
                        self.set(main, governor, "advcl");
                    }
                }
                Clause::Ccomp { marker } => {
                    self.set(marker, main, "mark");
                    if !is_root {
                        self.set(main, governor, "ccomp");
                    }
                }
            }
        }
    }

    fn attach_remaining_phrases(&mut self, root: usize) {
        for p in 0..self.phrases.len() {
            let (start, head) = (self.phrases[p].start, self.phrases[p].head);
            if self.assigned[head] || head == root {
                continue;
            }
            let apposed = (start >= 2 && self.tags[start - 1] == ",")
                .then(|| self.phrase_ending_at(start - 2))
                .flatten();
            match apposed {
                Some(q) => {
                    let target = self.phrases[q].head;
                    self.set(head, target, "appos");
                }
                None if matches!(self.tags[head], "WP" | "WDT") => {
                    let target = self.following_main(head).unwrap_or(root);
                    self.set(head, target, "dobj");
                }
                None => self.set(head, root, "dep"),
            }
        }
    }

    fn attach_singles(&mut self, root: usize) {
        let n = self.len();
        for k in 0..n {
            if self.assigned[k] || k == root {
                continue;
            }
            let tag = self.tags[k];
            let (target, label) = match tag {
                "IN" | "TO" => {
                    let of_noun = (self.lower[k] == "of" && k > 0)
                        .then(|| self.phrase_ending_at(k - 1))
                        .flatten()
                        .map(|q| self.phrases[q].head);
                    let target = of_noun
                        .or_else(|| self.preceding_main(k))
                        .or_else(|| self.following_main(k))
                        .or_else(|| {
                            k.checked_sub(1)
                                .and_then(|q| self.phrase_ending_at(q))
                                .map(|q| self.phrases[q].head)
                        })
                        .unwrap_or(root);
                    (target, "prep")
                }
                "RP" => (self.preceding_main(k).unwrap_or(root), "prt"),
                t if is_adverb(t) => {
                    if NEGATIONS.contains(&self.lower[k].as_str()) {
                        (self.nearest_main(k).unwrap_or(root), "neg")
                    } else if self
                        .tags
                        .get(k + 1)
                        .is_some_and(|&next| is_adjective(next) || is_adverb(next))
                    {
                        (k + 1, "advmod")
                    } else {
                        (self.nearest_main(k).unwrap_or(root), "advmod")
                    }
                }
                "UH" => (root, "intj"),
                "CC" => {
                    let target = k
                        .checked_sub(1)
                        .and_then(|q| self.phrase_ending_at(q))
                        .map(|q| self.phrases[q].head)
                        .unwrap_or(root);
                    (target, "cc")
                }
                "WRB" => (self.following_main(k).unwrap_or(root), "advmod"),
                t if PUNCTUATION_TAGS.contains(&t) => (root, "punct"),
                _ => (root, "dep"),
            };
            self.set(k, target, label);
        }
    }

    /// Reattaches any word whose head chain does not reach the root
    fn break_cycles(&mut self, root: usize) {
        let n = self.len();
        self.head[root] = None;
        self.label[root] = ROOT_LABEL;
        for k in 0..n {
            if k == root {
                continue;
            }
            let mut current = k;
            let mut steps = 0;
            let reaches_root = loop {
                match self.head[current] {
                    None => break current == root,
                    Some(h) => {
                        current = h;
                        steps += 1;
                        if steps > n {
                            break false;
                        }
                    }
                }
            };
            if !reaches_root {
                self.head[k] = Some(root);
                self.label[k] = "dep";
            }
        }
    }

    fn run(&mut self) {
        let question = self.tags.last() == Some(&".") && self.lower.last().map(String::as_str) == Some("?");

        self.chunk_verb_groups();
        for (g, group) in self.groups.iter().enumerate() {
            for &m in &group.members {
                self.group_of[m] = Some(g);
            }
        }
        self.chunk_phrases();
        self.merge_inverted_groups(question);

        let clauses: Vec<Clause> = (0..self.groups.len()).map(|g| self.classify(g)).collect();
        for clause in &clauses {
            match *clause {
                Clause::Advcl { marker } | Clause::Ccomp { marker } => {
                    self.markers.insert(marker);
                }
                _ => {}
            }
        }

        let root_group = clauses
            .iter()
            .position(|c| *c == Clause::Main)
            .or_else(|| (!self.groups.is_empty()).then_some(0));
        let root = match root_group {
            Some(g) => self.groups[g].main(),
            None => self.phrases.first().map(|p| p.head).unwrap_or(0),
        };

        self.attach_prepositional_objects();
        self.attach_coordinated_phrases();
        self.attach_subjects(&clauses);
        self.attach_objects();
        if let Some(g) = root_group {
            self.attach_clauses(&clauses, g);
        }
        self.attach_remaining_phrases(root);
        self.attach_singles(root);
        self.break_cycles(root);
    }
}

/// Chooses a head and dependency label for every token of one sentence.
///
/// Heads are indices into `tokens`. Whitespace tokens hang off the word
/// before them (or the first word) with label `dep`.
pub fn attach(tokens: &[RawToken], tags: &[&'static str]) -> Vec<Attachment> {
    let words: Vec<usize> = (0..tokens.len())
        .filter(|&i| !tokens[i].is_whitespace())
        .collect();

    if words.is_empty() {
        return (0..tokens.len())
            .map(|i| Attachment {
                head: (i > 0).then_some(0),
                label: if i == 0 { ROOT_LABEL } else { "dep" },
            })
            .collect();
    }

    let word_tokens: Vec<&RawToken> = words.iter().map(|&i| &tokens[i]).collect();
    let word_tags: Vec<&'static str> = words.iter().map(|&i| tags[i]).collect();
    let mut attacher = Attacher::new(&word_tokens, word_tags);
    attacher.run();

    let mut result = vec![
        Attachment {
            head: None,
            label: "dep",
        };
        tokens.len()
    ];
    for (k, &i) in words.iter().enumerate() {
        result[i] = Attachment {
            head: attacher.head[k].map(|h| words[h]),
            label: attacher.label[k],
        };
    }
    for i in 0..tokens.len() {
        if tokens[i].is_whitespace() {
            let anchor = words.iter().rev().find(|&&w| w < i).unwrap_or(&words[0]);
            result[i] = Attachment {
                head: Some(*anchor),
                label: "dep",
            };
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tagger::tag_sentence;
    use crate::parser::tokenizer::tokenize;

    /// (text, label, head text) triples for a sentence
    fn parse(text: &str) -> Vec<(String, &'static str, Option<String>)> {
        let tokens = tokenize(text);
        let tags = tag_sentence(&tokens);
        let arcs = attach(&tokens, &tags);
        tokens
            .iter()
            .zip(arcs)
            .map(|(t, a)| (t.text.clone(), a.label, a.head.map(|h| tokens[h].text.clone())))
            .collect()
    }

    fn arc(parsed: &[(String, &'static str, Option<String>)], word: &str) -> (&'static str, Option<String>) {
        let (_, label, head) = parsed
            .iter()
            .find(|(t, _, _)| t == word)
            .unwrap_or_else(|| panic!("{} not in sentence", word));
        (*label, head.clone())
    }

    fn has(parsed: &[(String, &'static str, Option<String>)], word: &str, label: &str, head: Option<&str>) {
        let (l, h) = arc(parsed, word);
        assert_eq!(l, label, "label of {}", word);
        assert_eq!(h.as_deref(), head, "head of {}", word);
    }

    #[test]
    fn test_copula_sentence() {
        let p = parse("Peter de Vocht was here.");
        has(&p, "was", ROOT_LABEL, None);
        has(&p, "Vocht", "nsubj", Some("was"));
        has(&p, "Peter", "compound", Some("Vocht"));
        has(&p, "de", "compound", Some("Vocht"));
        has(&p, "here", "advmod", Some("was"));
        has(&p, ".", "punct", Some("was"));
    }

    #[test]
    fn test_prepositional_phrase() {
        let p = parse("He then moved to Wellington.");
        has(&p, "moved", ROOT_LABEL, None);
        has(&p, "He", "nsubj", Some("moved"));
        has(&p, "then", "advmod", Some("moved"));
        has(&p, "to", "prep", Some("moved"));
        has(&p, "Wellington", "pobj", Some("to"));
    }

    #[test]
    fn test_subject_object_and_modifiers() {
        let p = parse("The big dog chased two cats.");
        has(&p, "chased", ROOT_LABEL, None);
        has(&p, "dog", "nsubj", Some("chased"));
        has(&p, "The", "det", Some("dog"));
        has(&p, "big", "amod", Some("dog"));
        has(&p, "cats", "dobj", Some("chased"));
        has(&p, "two", "nummod", Some("cats"));
    }

    #[test]
    fn test_possessive() {
        let p = parse("John's boat is in the harbour.");
        has(&p, "is", ROOT_LABEL, None);
        has(&p, "boat", "nsubj", Some("is"));
        has(&p, "John", "poss", Some("boat"));
        has(&p, "'s", "case", Some("John"));
        has(&p, "harbour", "pobj", Some("in"));
        has(&p, "in", "prep", Some("is"));
    }

    #[test]
    fn test_auxiliary_and_coordinated_clause() {
        let p = parse("I will go to the market and buy some bread.");
        has(&p, "go", ROOT_LABEL, None);
        has(&p, "will", "aux", Some("go"));
        has(&p, "I", "nsubj", Some("go"));
        has(&p, "buy", "conj", Some("go"));
        has(&p, "and", "cc", Some("go"));
        has(&p, "bread", "dobj", Some("buy"));
    }

    #[test]
    fn test_open_clausal_complement() {
        let p = parse("They want to eat.");
        has(&p, "want", ROOT_LABEL, None);
        has(&p, "eat", "xcomp", Some("want"));
        has(&p, "to", "aux", Some("eat"));
    }

    #[test]
    fn test_relative_clause() {
        let p = parse("The dog that barked ran away.");
        has(&p, "ran", ROOT_LABEL, None);
        has(&p, "barked", "relcl", Some("dog"));
        has(&p, "that", "nsubj", Some("barked"));
        has(&p, "dog", "nsubj", Some("ran"));
    }

    #[test]
    fn test_inverted_question() {
        let p = parse("Did you see the boat?");
        has(&p, "see", ROOT_LABEL, None);
        has(&p, "Did", "aux", Some("see"));
        has(&p, "you", "nsubj", Some("see"));
        has(&p, "boat", "dobj", Some("see"));
    }

    #[test]
    fn test_copula_with_adjective() {
        let p = parse("It is big.");
        has(&p, "big", "acomp", Some("is"));
    }

    #[test]
    fn test_verbless_fragment() {
        let p = parse("A small note");
        has(&p, "note", ROOT_LABEL, None);
        has(&p, "A", "det", Some("note"));
        has(&p, "small", "amod", Some("note"));
    }

    #[test]
    fn test_whitespace_hangs_off_previous_word() {
        let tokens = tokenize("here.  ");
        let tags = tag_sentence(&tokens);
        let arcs = attach(&tokens, &tags);
        assert_eq!(arcs[2].head, Some(1));
    }

    #[test]
    fn test_single_root_and_acyclic() {
        let texts = [
            "When he arrived, we left because it rained.",
            "Mr. Smith's 3 dogs quickly ran off; however, there were (maybe) 1,000 others.",
            "What did you see?",
            "The man who I saw gave Mary a book and the keys.",
        ];
        for text in texts {
            let tokens = tokenize(text);
            let tags = tag_sentence(&tokens);
            let arcs = attach(&tokens, &tags);
            let roots = arcs.iter().filter(|a| a.head.is_none()).count();
            assert_eq!(roots, 1, "{}", text);
            for start in 0..arcs.len() {
                let mut current = start;
                let mut steps = 0;
                while let Some(h) = arcs[current].head {
                    current = h;
                    steps += 1;
                    assert!(steps <= arcs.len(), "cycle in {}", text);
                }
            }
        }
    }
}
