// src/parser/tree.rs

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;
use petgraph::Direction;
use thiserror::Error;

use crate::parser::types::Token;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("token {token} names ancestor {ancestor}, which is not in the sentence")]
    UnknownAncestor { token: usize, ancestor: usize },
}

/// Dependency tree of one sentence, edges run from head to dependent
#[derive(Debug)]
pub struct DependencyTree {
    graph: DiGraph<Token, ()>,
    nodes: HashMap<usize, NodeIndex>,
    root: Option<NodeIndex>,
}

impl DependencyTree {
    /// Builds the tree from each token's nearest ancestor. A token whose
    /// ancestor list is empty (or only names itself) is a root candidate; the
    /// first one wins.
    pub fn from_sentence(sentence: &[Token]) -> Result<Self, TreeError> {
        let mut graph = DiGraph::new();
        let mut nodes = HashMap::new();
        for token in sentence {
            let node = graph.add_node(token.clone());
            nodes.insert(token.index, node);
        }

        let mut root = None;
        for token in sentence {
            let child = nodes[&token.index];
            match token.ancestor_list.iter().find(|&&a| a != token.index) {
                Some(&ancestor) => {
                    let parent = nodes.get(&ancestor).ok_or(TreeError::UnknownAncestor {
                        token: token.index,
                        ancestor,
                    })?;
                    graph.add_edge(*parent, child, ());
                }
                None => {
                    if root.is_none() {
                        root = Some(child);
                    }
                }
            }
        }

        Ok(Self { graph, nodes, root })
    }

    pub fn root(&self) -> Option<&Token> {
        self.root.map(|n| &self.graph[n])
    }

    /// Direct dependents of the token at document position `index`, in order
    pub fn children(&self, index: usize) -> Vec<&Token> {
        let Some(&node) = self.nodes.get(&index) else {
            return Vec::new();
        };
        let mut children: Vec<&Token> = self
            .graph
            .neighbors_directed(node, Direction::Outgoing)
            .map(|n| &self.graph[n])
            .collect();
        children.sort_by_key(|t| t.index);
        children
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Renders the tokens reachable from the root in sentence order, e.g.
    /// `[Craig{person}:nsubj] [has:ROOT] [a:det] [boat{vehicle}:dobj]`
    pub fn to_bracketed(&self) -> String {
        let Some(root) = self.root else {
            return String::new();
        };
        let mut reachable = Vec::new();
        let mut dfs = Dfs::new(&self.graph, root);
        while let Some(node) = dfs.next(&self.graph) {
            reachable.push(&self.graph[node]);
        }
        reachable.sort_by_key(|t| t.index);

        reachable
            .iter()
            .map(|t| {
                if t.semantic.is_empty() {
                    format!("[{}:{}]", t.text, t.dep)
                } else {
                    format!("[{}{{{}}}:{}]", t.text, t.semantic, t.dep)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
