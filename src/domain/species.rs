use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    num::NonZeroU32,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::domain::{units, Biome};

/// The species the zoo knows how to house.
///
/// The upper-case identifiers (`LEAO`, `MACACO`, ...) are the ids accepted on
/// the command line and in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Species {
    /// Lion.
    Leao,
    /// Leopard.
    Leopardo,
    /// Crocodile.
    Crocodilo,
    /// Monkey.
    Macaco,
    /// Gazelle.
    Gazela,
    /// Hippopotamus.
    Hipopotamo,
}

impl Species {
    /// All species, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Leao,
        Self::Leopardo,
        Self::Crocodilo,
        Self::Macaco,
        Self::Gazela,
        Self::Hipopotamo,
    ];

    /// Returns the upper-case identifier of the species.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Leao => "LEAO",
            Self::Leopardo => "LEOPARDO",
            Self::Crocodilo => "CROCODILO",
            Self::Macaco => "MACACO",
            Self::Gazela => "GAZELA",
            Self::Hipopotamo => "HIPOPOTAMO",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Species {
    type Err = UnknownSpeciesError;

    /// Parses a species id.
    ///
    /// Matching is exact: `"macaco"` is not a species id. Callers that accept
    /// free-form input should normalise it first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|species| species.id() == s)
            .ok_or_else(|| UnknownSpeciesError(s.to_string()))
    }
}

/// Error returned when a string is not a known species id.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown species '{0}'")]
pub struct UnknownSpeciesError(String);

/// The traits of a species that the placement rules depend on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesProfile {
    /// Space units occupied by one individual.
    pub size: NonZeroU32,

    /// Biomes the species can live in.
    pub biomes: BTreeSet<Biome>,

    /// Whether the species eats other animals.
    #[serde(default)]
    pub carnivore: bool,
}

impl SpeciesProfile {
    /// Creates a new profile.
    #[must_use]
    pub fn new(size: NonZeroU32, biomes: impl IntoIterator<Item = Biome>, carnivore: bool) -> Self {
        Self {
            size,
            biomes: biomes.into_iter().collect(),
            carnivore,
        }
    }

    /// Space units needed for `count` individuals.
    ///
    /// Returns `None` if the footprint does not fit in a `u64`.
    #[must_use]
    pub fn footprint(&self, count: u64) -> Option<u64> {
        u64::from(self.size.get()).checked_mul(count)
    }
}

/// The immutable table of species profiles a matcher evaluates against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpeciesCatalog {
    profiles: BTreeMap<Species, SpeciesProfile>,
}

impl SpeciesCatalog {
    /// Looks up the profile of a species.
    #[must_use]
    pub fn get(&self, species: Species) -> Option<&SpeciesProfile> {
        self.profiles.get(&species)
    }

    /// Whether the catalog has a profile for the species.
    #[must_use]
    pub fn contains(&self, species: Species) -> bool {
        self.profiles.contains_key(&species)
    }

    /// Iterates over the catalog in species order.
    pub fn iter(&self) -> impl Iterator<Item = (Species, &SpeciesProfile)> {
        self.profiles.iter().map(|(species, profile)| (*species, profile))
    }

    /// The number of species in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Whether the species is in the catalog and marked as a carnivore.
    #[must_use]
    pub fn is_carnivore(&self, species: Species) -> bool {
        self.get(species).is_some_and(|profile| profile.carnivore)
    }

    /// The catalog of the reference zoo.
    #[must_use]
    pub fn zoo() -> Self {
        let profile = |size: u32, biomes: &[Biome], carnivore: bool| {
            SpeciesProfile::new(units(size), biomes.iter().copied(), carnivore)
        };

        [
            (Species::Leao, profile(3, &[Biome::Savana], true)),
            (Species::Leopardo, profile(2, &[Biome::Savana], true)),
            (Species::Crocodilo, profile(3, &[Biome::Rio], true)),
            (
                Species::Macaco,
                profile(1, &[Biome::Savana, Biome::Floresta], false),
            ),
            (Species::Gazela, profile(2, &[Biome::Savana], false)),
            (
                Species::Hipopotamo,
                profile(4, &[Biome::Savana, Biome::Rio], false),
            ),
        ]
        .into_iter()
        .collect()
    }
}

impl FromIterator<(Species, SpeciesProfile)> for SpeciesCatalog {
    fn from_iter<T: IntoIterator<Item = (Species, SpeciesProfile)>>(iter: T) -> Self {
        Self {
            profiles: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn ids_round_trip_through_from_str() {
        for species in Species::ALL {
            assert_eq!(species.id().parse::<Species>().unwrap(), species);
        }
    }

    #[test_case("UNICORNIO"; "unknown id")]
    #[test_case("macaco"; "lower case")]
    #[test_case(""; "empty")]
    #[test_case(" LEAO"; "leading whitespace")]
    fn unknown_ids_are_rejected(input: &str) {
        assert!(input.parse::<Species>().is_err());
    }

    #[test_case(Species::Leao, 3, true)]
    #[test_case(Species::Leopardo, 2, true)]
    #[test_case(Species::Crocodilo, 3, true)]
    #[test_case(Species::Macaco, 1, false)]
    #[test_case(Species::Gazela, 2, false)]
    #[test_case(Species::Hipopotamo, 4, false)]
    fn zoo_catalog_profiles(species: Species, size: u32, carnivore: bool) {
        let catalog = SpeciesCatalog::zoo();
        let profile = catalog.get(species).unwrap();
        assert_eq!(profile.size.get(), size);
        assert_eq!(profile.carnivore, carnivore);
        assert_eq!(catalog.is_carnivore(species), carnivore);
    }

    #[test]
    fn zoo_catalog_covers_every_species() {
        let catalog = SpeciesCatalog::zoo();
        assert_eq!(catalog.len(), Species::ALL.len());
        assert!(Species::ALL.iter().all(|s| catalog.contains(*s)));
    }

    #[test]
    fn footprint_scales_with_count() {
        let catalog = SpeciesCatalog::zoo();
        let hippo = catalog.get(Species::Hipopotamo).unwrap();
        assert_eq!(hippo.footprint(3), Some(12));
    }

    #[test]
    fn footprint_overflow_is_none() {
        let profile = SpeciesProfile::new(NonZeroU32::MAX, [Biome::Rio], false);
        assert_eq!(
            profile.footprint(u64::from(u32::MAX)),
            Some(u64::from(u32::MAX) * u64::from(u32::MAX))
        );
        assert_eq!(profile.footprint(u64::MAX), None);
    }
}
