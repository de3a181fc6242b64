// tests/semantics_tests.rs
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use kai_parser_lib::parser::{DependencyTree, Parser, RuleModel};
use kai_parser_lib::semantics::{
    load_categories, select_categories, write_category, Category, Lexicon, RelationFilter,
    RelationGraph,
};
use uuid::Uuid;

const RELATIONS: &str = "\
poodle:n|2|dog:n
dog:n|2|animal:n
cat:n|2|animal:n
hound:n|2|dog:n
run:v|2|move:v
boat:n|2|vessel:n
yacht:n|2|boat:n
kayak:n|23|boat:n
";

fn scratch_dir() -> PathBuf {
    env::temp_dir().join(format!("kai-semantics-{}", Uuid::new_v4()))
}

#[test]
fn test_expand_write_and_load_lexicon() {
    let dir = scratch_dir();
    fs::create_dir_all(&dir).unwrap();
    let relations = dir.join("relationships.txt");
    fs::write(&relations, RELATIONS).unwrap();

    let graph = RelationGraph::load(&relations, &RelationFilter::default()).unwrap();
    // the verb line is filtered out
    assert_eq!(graph.relation_count(), 7);

    let animal = Category::new("animal", &["animal"], &[], 2);
    let words = graph.expand(&animal);
    assert_eq!(words, vec!["animal", "dog", "cat", "poodle", "hound"]);

    let vehicle = Category::new("vehicle", &["vessel"], &[], 2);
    let words = graph.expand(&vehicle);
    assert_eq!(words, vec!["vessel", "boat", "yacht", "kayak"]);

    let out = dir.join("semantics");
    write_category(&out, "animal", &graph.expand(&animal)).unwrap();
    write_category(&out, "vehicle", &graph.expand(&vehicle)).unwrap();

    let content = fs::read_to_string(out.join("animal.txt")).unwrap();
    assert_eq!(
        content,
        "animal:animal\ncat:animal\ndog:animal\nhound:animal\npoodle:animal\n"
    );

    let lexicon = Lexicon::load_dir(&out).unwrap();
    assert_eq!(lexicon.len(), 9);
    assert_eq!(lexicon.lookup("Poodles"), Some("animal"));
    assert_eq!(lexicon.lookup("yacht"), Some("vehicle"));
    assert_eq!(lexicon.lookup("Wellington"), None);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_negative_words_stop_expansion() {
    let mut graph = RelationGraph::new();
    graph.add("poodle", "dog");
    graph.add("dog", "animal");
    graph.add("cat", "animal");

    let category = Category::new("pet", &["animal"], &["dog"], 3);
    assert_eq!(graph.expand(&category), vec!["animal", "dog", "cat"]);
}

#[test]
fn test_category_file_selection() {
    let dir = scratch_dir();
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("categories.json");
    fs::write(
        &path,
        r#"[
            {"name": "animal", "seeds": ["animal"]},
            {"name": "vehicle", "seeds": ["vessel"], "negative": ["ship"], "levels": 3}
        ]"#,
    )
    .unwrap();

    let categories = load_categories(&path).unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].levels, 1);

    let selected = select_categories(categories.clone(), &["vehicle".to_string()]).unwrap();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].negative, vec!["ship"]);

    assert!(select_categories(categories, &["plant".to_string()]).is_err());

    fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_parser_annotates_with_written_lexicon() {
    let dir = scratch_dir();
    let words: Vec<String> = ["boat", "yacht"].iter().map(|s| s.to_string()).collect();
    write_category(&dir, "vehicle", &words).unwrap();
    let people: Vec<String> = vec!["craig".to_string()];
    write_category(&dir, "person", &people).unwrap();

    let lexicon = Lexicon::load_dir(&dir).unwrap();
    let parser = Parser::new(Arc::new(RuleModel::new())).with_lexicon(Arc::new(lexicon));

    let sentences = parser.parse_document("Craig has a boat.").await.unwrap();
    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences[0][0].semantic, "person");
    assert_eq!(sentences[0][3].semantic, "vehicle");
    assert!(sentences[0][1].semantic.is_empty());

    let tree = DependencyTree::from_sentence(&sentences[0]).unwrap();
    assert_eq!(
        tree.to_bracketed(),
        "[Craig{person}:nsubj] [has:ROOT] [a:det] [boat{vehicle}:dobj] [.:punct]"
    );

    fs::remove_dir_all(&dir).unwrap();
}
