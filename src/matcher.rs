//! The enclosure matching engine.
//!
//! A [`Matcher`] holds a species catalog and an enclosure inventory and answers
//! one question: where could these animals go? Every evaluation is
//! hypothetical. The inventory is never modified.

use std::fmt;

use serde::Serialize;
use tracing::instrument;

use crate::domain::{
    config::ValidationError, EnclosureInventory, Quantity, Species, SpeciesCatalog, ZooConfig,
};

pub mod occupancy;
pub mod rules;

pub use occupancy::occupied_space;

/// Errors returned by an evaluation.
///
/// They are checked in declaration order: an unknown species is reported even
/// if the quantity is also invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// The species id is unknown, or not in the catalog.
    #[error("Animal inválido")]
    InvalidSpecies,

    /// The count is not a strictly positive integer.
    #[error("Quantidade inválida")]
    InvalidQuantity,

    /// The request is valid but no enclosure passes every rule.
    #[error("Não há recinto viável")]
    NoViableEnclosure,
}

/// A validated request for a place to house animals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    /// The species to place.
    pub species: Species,
    /// How many individuals to place.
    pub quantity: Quantity,
}

/// An enclosure that can take the requested animals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// The enclosure number.
    pub enclosure: u32,
    /// Space units left after the animals move in.
    pub free_space: u64,
    /// The enclosure's total capacity.
    pub capacity: u32,
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Recinto {} (espaço livre: {} total: {})",
            self.enclosure, self.free_space, self.capacity
        )
    }
}

/// Why an enclosure cannot take the requested animals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// None of the enclosure's biomes suit the species.
    BiomeMismatch,
    /// The animals would not fit with space to spare.
    InsufficientSpace,
    /// Carnivores would share space with other species.
    CarnivoreConflict,
    /// A hippopotamus would live without both savana and river.
    HippopotamusHabitat,
    /// A lone monkey would move into an empty enclosure.
    MonkeyAlone,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BiomeMismatch => "biome not suitable",
            Self::InsufficientSpace => "not enough space",
            Self::CarnivoreConflict => "carnivores must live with their own species",
            Self::HippopotamusHabitat => "hippopotamus needs savana and river",
            Self::MonkeyAlone => "monkeys will not move in alone",
        })
    }
}

/// The outcome of evaluating a placement against one enclosure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    /// The enclosure can take the animals.
    Accepted {
        /// Space units left after the animals move in.
        free_space: u64,
    },
    /// The enclosure was ruled out.
    Rejected {
        /// The first rule that failed.
        reason: Rejection,
    },
}

/// Per-enclosure detail of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Assessment {
    /// The enclosure number.
    pub enclosure: u32,
    /// The enclosure's total capacity.
    pub capacity: u32,
    /// Space units in use, including any cohabitation overhead.
    pub occupied: u64,
    /// Whether the placement is admissible.
    #[serde(flatten)]
    pub verdict: Verdict,
}

impl Assessment {
    /// Converts an accepted assessment into a match.
    #[must_use]
    pub const fn into_match(self) -> Option<MatchResult> {
        match self.verdict {
            Verdict::Accepted { free_space } => Some(MatchResult {
                enclosure: self.enclosure,
                free_space,
                capacity: self.capacity,
            }),
            Verdict::Rejected { .. } => None,
        }
    }
}

/// Decides which enclosures can legally house a group of animals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    catalog: SpeciesCatalog,
    inventory: EnclosureInventory,
}

impl Default for Matcher {
    /// A matcher over the built-in reference zoo.
    fn default() -> Self {
        Self::from(ZooConfig::default())
    }
}

impl From<ZooConfig> for Matcher {
    fn from(config: ZooConfig) -> Self {
        let (catalog, inventory) = config.into_parts();
        Self { catalog, inventory }
    }
}

impl Matcher {
    /// Creates a matcher over the given reference tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the tables are inconsistent, for example if an
    /// enclosure houses a species missing from the catalog.
    pub fn new(
        catalog: SpeciesCatalog,
        inventory: EnclosureInventory,
    ) -> Result<Self, ValidationError> {
        ZooConfig::new(catalog, inventory).map(Self::from)
    }

    /// The species catalog.
    #[must_use]
    pub const fn catalog(&self) -> &SpeciesCatalog {
        &self.catalog
    }

    /// The enclosure inventory.
    #[must_use]
    pub const fn inventory(&self) -> &EnclosureInventory {
        &self.inventory
    }

    /// Finds the enclosures that can take `count` animals of `species`.
    ///
    /// Matches are sorted by enclosure number.
    ///
    /// # Errors
    ///
    /// - [`MatchError::InvalidSpecies`] if `species` is not a species id in the
    ///   catalog
    /// - [`MatchError::InvalidQuantity`] if `count` is not positive
    /// - [`MatchError::NoViableEnclosure`] if no enclosure is suitable
    pub fn evaluate(&self, species: &str, count: i64) -> Result<Vec<MatchResult>, MatchError> {
        let species = self.resolve_species(species)?;
        let quantity = Quantity::try_from(count).map_err(|_| MatchError::InvalidQuantity)?;
        self.matches(Query { species, quantity })
    }

    /// Like [`Matcher::evaluate`], but with the count given as text.
    ///
    /// Anything that is not a positive whole number, including fractions such
    /// as `"1.5"`, is an invalid quantity. `"2.0"` counts as two.
    ///
    /// # Errors
    ///
    /// See [`Matcher::evaluate`].
    pub fn evaluate_input(&self, species: &str, count: &str) -> Result<Vec<MatchResult>, MatchError> {
        self.query(species, count).and_then(|query| self.matches(query))
    }

    /// Validates textual input into a [`Query`].
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidSpecies`] or [`MatchError::InvalidQuantity`],
    /// in that order of priority.
    pub fn query(&self, species: &str, count: &str) -> Result<Query, MatchError> {
        let species = self.resolve_species(species)?;
        let quantity = count
            .parse::<Quantity>()
            .map_err(|_| MatchError::InvalidQuantity)?;
        Ok(Query { species, quantity })
    }

    /// Finds the enclosures that can take the queried animals.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidSpecies`] if the species is not in the
    /// catalog, or [`MatchError::NoViableEnclosure`] if nothing matches.
    pub fn matches(&self, query: Query) -> Result<Vec<MatchResult>, MatchError> {
        let matches: Vec<MatchResult> = self
            .assess(query)?
            .into_iter()
            .filter_map(Assessment::into_match)
            .collect();

        if matches.is_empty() {
            tracing::debug!(species = %query.species, quantity = %query.quantity, "No viable enclosure");
            return Err(MatchError::NoViableEnclosure);
        }

        Ok(matches)
    }

    /// Evaluates the query against every enclosure and reports each verdict,
    /// sorted by enclosure number.
    ///
    /// Unlike [`Matcher::matches`], an evaluation where nothing fits is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidSpecies`] if the species is not in the
    /// catalog.
    #[instrument(level = "debug", skip(self, query), fields(species = %query.species, quantity = %query.quantity))]
    pub fn assess(&self, query: Query) -> Result<Vec<Assessment>, MatchError> {
        let Query { species, quantity } = query;
        let profile = self
            .catalog
            .get(species)
            .ok_or(MatchError::InvalidSpecies)?;

        let mut assessments: Vec<Assessment> = self
            .inventory
            .iter()
            .map(|enclosure| {
                let occupied = occupied_space(enclosure, species, &self.catalog);
                let free_space = u64::from(enclosure.capacity).saturating_sub(occupied);
                tracing::trace!(enclosure = enclosure.number, occupied, free_space);

                let placement = rules::Placement {
                    enclosure,
                    species,
                    profile,
                    quantity,
                    catalog: &self.catalog,
                    free_space,
                };

                let verdict = match rules::check(&placement) {
                    Ok(()) => Verdict::Accepted {
                        free_space: profile
                            .footprint(quantity.get())
                            .map_or(0, |needed| free_space.saturating_sub(needed)),
                    },
                    Err(reason) => {
                        tracing::debug!(enclosure = enclosure.number, %reason, "Enclosure rejected");
                        Verdict::Rejected { reason }
                    }
                };

                Assessment {
                    enclosure: enclosure.number,
                    capacity: enclosure.capacity,
                    occupied,
                    verdict,
                }
            })
            .collect();

        assessments.sort_by_key(|assessment| assessment.enclosure);
        Ok(assessments)
    }

    fn resolve_species(&self, id: &str) -> Result<Species, MatchError> {
        id.parse::<Species>()
            .ok()
            .filter(|species| self.catalog.contains(*species))
            .ok_or(MatchError::InvalidSpecies)
    }
}
