// src/semantics/category.rs

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::semantics::SemanticsError;

/// A seed list to expand and write out as `<name>.txt`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub seeds: Vec<String>,
    /// Words that must not be expanded from
    #[serde(default)]
    pub negative: Vec<String>,
    /// Number of expansion rounds
    #[serde(default = "default_levels")]
    pub levels: usize,
}

fn default_levels() -> usize {
    1
}

impl Category {
    pub fn new(name: &str, seeds: &[&str], negative: &[&str], levels: usize) -> Self {
        Self {
            name: name.to_string(),
            seeds: seeds.iter().map(|s| s.to_string()).collect(),
            negative: negative.iter().map(|s| s.to_string()).collect(),
            levels,
        }
    }

    fn validate(&self) -> Result<(), SemanticsError> {
        let invalid = |reason: &str| SemanticsError::InvalidCategory {
            name: self.name.clone(),
            reason: reason.to_string(),
        };
        if self.name.is_empty()
            || self.name.contains(['/', '\\', ':'])
            || self.name.starts_with('.')
        {
            return Err(invalid("name must be a plain file name"));
        }
        if self.seeds.is_empty() {
            return Err(invalid("no seed words"));
        }
        Ok(())
    }
}

/// The categories KAI ships with
pub fn builtin_categories() -> Vec<Category> {
    vec![
        Category::new(
            "person",
            &[
                "person", "mother", "male_parent", "pal", "comrade", "faculty_member", "academic",
                "officer", "lawman", "man", "woman", "old_person",
            ],
            &[],
            1,
        ),
        Category::new(
            "location",
            &[
                "location", "workplace", "room", "area", "dwell", "business", "home", "domicile",
            ],
            &[],
            1,
        ),
        Category::new("vehicle", &["vehicle"], &["craft", "booster"], 2),
        Category::new("aircraft", &["aircraft"], &["plane"], 3),
        Category::new("container", &["container"], &[], 1),
        Category::new(
            "plant",
            &[
                "vascular_plant", "fungus", "crop", "pot_plant", "perennial", "hygrophyte",
                "monocarpic_plant", "monocarpous_plant", "sporophyte", "shrub",
            ],
            &[],
            1,
        ),
        Category::new(
            "animal",
            &[
                "canine", "feline", "cattle", "eutherian", "eutherian_mammal", "saltwater_fish",
                "freshwater_fish", "elasmobranch", "food_fish", "salmonid", "big_cat", "spider",
                "ant", "insect", "dipteran", "dipteron", "arthropod", "worm", "hoofed_mammal",
                "even-toed_ungulate", "artiodactyl", "artiodactyl_mammal", "dinocerate",
                "odd-toed_ungulate", "perissodactyl", "perissodactyl_mammal", "ungulate", "thrips",
                "louse",
            ],
            &[],
            1,
        ),
    ]
}

/// Reads a JSON array of categories, replacing the built-in set
pub fn load_categories(path: &Path) -> Result<Vec<Category>, SemanticsError> {
    let data = fs::read_to_string(path).map_err(|source| SemanticsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let categories: Vec<Category> =
        serde_json::from_str(&data).map_err(|source| SemanticsError::Categories {
            path: path.to_path_buf(),
            source,
        })?;
    for category in &categories {
        category.validate()?;
    }
    Ok(categories)
}

/// Picks categories by name, keeping the order of `names`. No names selects all.
pub fn select_categories(
    categories: Vec<Category>,
    names: &[String],
) -> Result<Vec<Category>, SemanticsError> {
    if names.is_empty() {
        return Ok(categories);
    }
    names
        .iter()
        .map(|name| {
            categories
                .iter()
                .find(|c| &c.name == name)
                .cloned()
                .ok_or_else(|| SemanticsError::UnknownCategory(name.clone()))
        })
        .collect()
}
