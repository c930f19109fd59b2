//! Golden file tests for ingredient matching.
//!
//! Each JSON file in `fixtures/matching/` lists the ingredients a user has
//! and the ranked results expected against the built-in seed recipes.
//!
//! Test format:
//! ```json
//! {
//!   "available": ["garlic", "soy sauce"],
//!   "expected": [{ "id": "1", "matchCount": 2, "matchPercentage": 100 }]
//! }
//! ```

use glob::glob;
use pantry_core::{match_recipes, MatchOutcome, SeedData};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A test case loaded from a JSON fixture file
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TestCase {
    available: Vec<String>,
    #[serde(default)]
    nothing_to_search: bool,
    expected: Vec<ExpectedMatch>,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct ExpectedMatch {
    id: String,
    match_count: usize,
    match_percentage: u8,
}

fn fixture_paths() -> Vec<PathBuf> {
    let pattern = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/matching/*.json")
        .to_string_lossy()
        .into_owned();

    let paths: Vec<PathBuf> = glob(&pattern)
        .expect("Failed to read glob pattern")
        .filter_map(Result::ok)
        .collect();

    assert!(!paths.is_empty(), "No fixtures found for {}", pattern);
    paths
}

#[test]
fn test_matching_golden_files() {
    let recipes = SeedData::builtin().recipes;
    let mut failures = Vec::new();

    for path in fixture_paths() {
        let name = path.file_stem().unwrap().to_string_lossy().into_owned();
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
        let case: TestCase = serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e));

        let outcome = match_recipes(&recipes, &case.available);
        let nothing_to_search = matches!(outcome, MatchOutcome::NothingToSearch);
        let actual: Vec<ExpectedMatch> = outcome
            .into_matches()
            .into_iter()
            .map(|m| ExpectedMatch {
                id: m.recipe.id.clone(),
                match_count: m.match_count,
                match_percentage: m.match_percentage,
            })
            .collect();

        if nothing_to_search != case.nothing_to_search || actual != case.expected {
            failures.push(format!(
                "{}: expected {:?} (nothing_to_search={}), got {:?} (nothing_to_search={})",
                name, case.expected, case.nothing_to_search, actual, nothing_to_search
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "{} fixture(s) failed:\n{}",
        failures.len(),
        failures.join("\n")
    );
}

#[test]
fn test_ranked_output_properties() {
    let recipes = SeedData::builtin().recipes;
    let inputs: &[&[&str]] = &[
        &["oil"],
        &["milk", "egg", "garlic"],
        &["tbsp", "cup", "tsp", "large"],
        &["x", "y", "z", "oil"],
        &["chicken", "", "tomatoes", "coconut"],
    ];

    for &available in inputs {
        let matches = match_recipes(&recipes, available).into_matches();

        assert!(matches.iter().all(|m| m.match_percentage > 0));
        assert!(matches
            .windows(2)
            .all(|w| w[0].match_percentage >= w[1].match_percentage));

        // Equal scores keep seed order
        for w in matches.windows(2) {
            if w[0].match_percentage == w[1].match_percentage {
                let a = recipes.iter().position(|r| r.id == w[0].recipe.id).unwrap();
                let b = recipes.iter().position(|r| r.id == w[1].recipe.id).unwrap();
                assert!(a < b, "tie between {} and {} out of order", a, b);
            }
        }
    }
}
