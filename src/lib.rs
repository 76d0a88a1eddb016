//! Zoo Enclosure Matching
//!
//! Given a species and a number of animals, find the enclosures that can
//! legally house them under the zoo's biome, space, predator and comfort rules.
//!
//! ```
//! use zoo::Matcher;
//!
//! let matcher = Matcher::default();
//! let matches = matcher.evaluate("MACACO", 2).unwrap();
//!
//! assert_eq!(matches[0].to_string(), "Recinto 1 (espaço livre: 5 total: 10)");
//! ```

pub mod domain;
pub use domain::{
    Biome, Enclosure, EnclosureInventory, Occupant, Quantity, Species, SpeciesCatalog,
    SpeciesProfile, ZooConfig,
};

/// The rule-evaluation engine.
pub mod matcher;
pub use matcher::{Assessment, MatchError, MatchResult, Matcher, Query, Rejection, Verdict};
