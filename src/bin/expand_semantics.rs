// src/bin/expand_semantics.rs
//
// Usage: expand_semantics [category ...]
// Expands the named categories (all of them when none are given) over the
// relationship file and writes <category>.txt files.

use anyhow::{Context, Result};
use log::info;
use std::env;
use std::path::Path;

use kai_parser_lib::config::SemanticsConfig;
use kai_parser_lib::semantics::{
    builtin_categories, load_categories, select_categories, write_category, RelationFilter,
    RelationGraph,
};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Try to load .env file if it exists
    let env_paths = [".env", ".env.local", "../.env"];
    match env_paths.iter().find(|p| Path::new(p).exists()) {
        Some(path) => {
            dotenv::from_path(path)
                .with_context(|| format!("Failed to load environment from {}", path))?;
            info!("Loaded environment variables from {}", path);
        }
        None => info!("No .env file found, using environment variables from system"),
    }

    let config = SemanticsConfig::from_env()?;
    let names: Vec<String> = env::args().skip(1).collect();

    let categories = match &config.categories_file {
        Some(path) => load_categories(path)
            .with_context(|| format!("Failed to load categories from {}", path.display()))?,
        None => builtin_categories(),
    };
    let categories = select_categories(categories, &names)?;

    let filter = RelationFilter::new(&config.relation_code, &config.relation_pos);
    let graph = RelationGraph::load(&config.relationship_graph_path, &filter)
        .context("Failed to load relationship graph")?;

    for category in &categories {
        let words = graph.expand(category);
        let path = write_category(&config.output_dir, &category.name, &words)
            .with_context(|| format!("Failed to write category {}", category.name))?;
        info!(
            "Category {}: {} seeds expanded to {} words in {} rounds -> {}",
            category.name,
            category.seeds.len(),
            words.len(),
            category.levels,
            path.display()
        );
    }

    info!("Expanded {} categories", categories.len());
    Ok(())
}
