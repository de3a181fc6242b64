// src/semantics/graph.rs

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{debug, info};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::semantics::category::Category;
use crate::semantics::relation::{Relation, RelationFilter};
use crate::semantics::SemanticsError;

/// Relations kept from a relationship file. An edge runs from word1 to
/// word2 ("poodle" -> "dog"); edge order is file order.
#[derive(Debug, Default)]
pub struct RelationGraph {
    graph: DiGraph<String, ()>,
    nodes: HashMap<String, NodeIndex>,
}

impl RelationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path, filter: &RelationFilter) -> Result<Self, SemanticsError> {
        let file = File::open(path).map_err(|source| SemanticsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let graph = Self::from_reader(BufReader::new(file), filter).map_err(|source| {
            SemanticsError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;
        info!(
            "Loaded {} relations over {} words from {}",
            graph.relation_count(),
            graph.word_count(),
            path.display()
        );
        Ok(graph)
    }

    pub fn from_reader<R: BufRead>(reader: R, filter: &RelationFilter) -> io::Result<Self> {
        let mut graph = Self::new();
        let mut skipped = 0usize;
        for line in reader.lines() {
            match Relation::parse_line(&line?) {
                Some(relation) if filter.accepts(&relation) => {
                    graph.add(&relation.word1, &relation.word2)
                }
                _ => skipped += 1,
            }
        }
        debug!("Skipped {} lines that did not match the relation filter", skipped);
        Ok(graph)
    }

    fn node(&mut self, word: &str) -> NodeIndex {
        if let Some(&node) = self.nodes.get(word) {
            return node;
        }
        let node = self.graph.add_node(word.to_string());
        self.nodes.insert(word.to_string(), node);
        node
    }

    /// Records "word1 is related to word2"
    pub fn add(&mut self, word1: &str, word2: &str) {
        let from = self.node(word1);
        let to = self.node(word2);
        self.graph.add_edge(from, to, ());
    }

    pub fn word_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn relation_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Words directly related to `word`, e.g. the hyponyms of a hypernym
    pub fn related_to(&self, word: &str) -> Vec<&str> {
        let Some(&node) = self.nodes.get(word) else {
            return Vec::new();
        };
        let mut words: Vec<&str> = self
            .graph
            .neighbors_directed(node, Direction::Incoming)
            .map(|n| self.graph[n].as_str())
            .collect();
        words.sort_unstable();
        words.dedup();
        words
    }

    /// Grows a category for `category.levels` rounds.
    ///
    /// The result starts with the seeds. Each round appends, in file order,
    /// every word1 whose word2 was in the result when the round began,
    /// unless word2 is a negative word or word1 is already present.
    pub fn expand(&self, category: &Category) -> Vec<String> {
        let mut result: Vec<String> = Vec::new();
        let mut exists: HashSet<&str> = HashSet::new();
        for seed in &category.seeds {
            if exists.insert(seed.as_str()) {
                result.push(seed.clone());
            }
        }
        let negative: HashSet<&str> = category.negative.iter().map(String::as_str).collect();

        for round in 0..category.levels {
            let frontier: HashSet<String> = result.iter().cloned().collect();
            let before = result.len();

            for edge in self.graph.edge_references() {
                let word1 = self.graph[edge.source()].as_str();
                let word2 = self.graph[edge.target()].as_str();
                if frontier.contains(word2) && !negative.contains(word2) && exists.insert(word1) {
                    result.push(word1.to_string());
                }
            }

            debug!(
                "Category {} round {}: {} words added",
                category.name,
                round + 1,
                result.len() - before
            );
            if result.len() == before {
                break;
            }
        }
        result
    }
}
