//! Evaluating placements against reference data loaded from a file.

#![allow(missing_docs)]

use std::io::Write;

use zoo::{MatchError, Matcher, ZooConfig};

const RIVER_ZOO: &str = r#"_version = "1"

[species.HIPOPOTAMO]
size = 4
biomes = ["savana", "rio"]

[species.CROCODILO]
size = 3
biomes = ["rio"]
carnivore = true

[[enclosures]]
number = 10
biomes = ["rio"]
capacity = 20
occupants = [{ species = "CROCODILO", count = 2 }]

[[enclosures]]
number = 2
biomes = ["savana", "rio"]
capacity = 20
occupants = [{ species = "HIPOPOTAMO", count = 1 }]

[[enclosures]]
number = 7
biomes = ["rio"]
capacity = 20
"#;

fn river_zoo() -> Matcher {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(RIVER_ZOO.as_bytes()).unwrap();
    Matcher::from(ZooConfig::load(file.path()).unwrap())
}

#[test]
fn hippopotamus_joins_hippopotamus_in_mixed_habitat() {
    let matches = river_zoo().evaluate("HIPOPOTAMO", 2).unwrap();
    let rendered: Vec<String> = matches.iter().map(ToString::to_string).collect();

    assert_eq!(rendered, vec!["Recinto 2 (espaço livre: 8 total: 20)"]);
}

#[test]
fn crocodiles_sorted_by_number() {
    let matches = river_zoo().evaluate_input("CROCODILO", "3").unwrap();
    let numbers: Vec<u32> = matches.iter().map(|m| m.enclosure).collect();

    // 10: 6 used, 14 free; 7: empty
    assert_eq!(numbers, vec![7, 10]);
    assert_eq!(matches[1].free_space, 5);
}

#[test]
fn species_outside_custom_catalog_is_invalid() {
    assert_eq!(
        river_zoo().evaluate("MACACO", 2),
        Err(MatchError::InvalidSpecies)
    );
}

#[test]
fn file_overrides_only_listed_tables() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"_version = "1"

[[enclosures]]
number = 1
biomes = ["floresta"]
capacity = 3
"#,
    )
    .unwrap();
    let matcher = Matcher::from(ZooConfig::load(file.path()).unwrap());

    // The catalog falls back to the reference species.
    assert_eq!(matcher.catalog().len(), 6);
    assert_eq!(
        matcher.evaluate("MACACO", 3),
        Err(MatchError::NoViableEnclosure)
    );
    assert_eq!(matcher.evaluate("MACACO", 2).unwrap()[0].free_space, 1);
}
