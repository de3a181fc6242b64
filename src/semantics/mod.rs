// src/semantics/mod.rs
//
// Offline expansion of seed word lists into semantic categories, and the
// lexicon that reads the resulting files back.

pub mod category;
pub mod graph;
pub mod lexicon;
pub mod relation;
pub mod writer;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use category::{builtin_categories, load_categories, select_categories, Category};
pub use graph::RelationGraph;
pub use lexicon::Lexicon;
pub use relation::{Relation, RelationFilter};
pub use writer::write_category;

#[derive(Debug, Error)]
pub enum SemanticsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid category file {path}: {source}")]
    Categories {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid category {name}: {reason}")]
    InvalidCategory { name: String, reason: String },

    #[error("unknown category: {0}")]
    UnknownCategory(String),
}
