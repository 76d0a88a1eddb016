use std::{collections::BTreeSet, num::NonZeroU32};

use serde::{Deserialize, Serialize};

use crate::domain::{units, Biome, Species};

/// A group of animals of one species already living in an enclosure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    /// The species of the group.
    pub species: Species,
    /// How many individuals the group has.
    pub count: NonZeroU32,
}

impl Occupant {
    /// Creates a new occupant group.
    #[must_use]
    pub const fn new(species: Species, count: NonZeroU32) -> Self {
        Self { species, count }
    }
}

/// A space in the zoo that can house animals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enclosure {
    /// Identifying number, unique within an inventory.
    pub number: u32,

    /// Biomes the enclosure offers. An enclosure may offer several at once.
    pub biomes: BTreeSet<Biome>,

    /// Total space units.
    pub capacity: u32,

    /// Animals currently living in the enclosure.
    #[serde(default)]
    pub occupants: Vec<Occupant>,
}

impl Enclosure {
    /// Creates an empty enclosure.
    #[must_use]
    pub fn new(number: u32, biomes: impl IntoIterator<Item = Biome>, capacity: u32) -> Self {
        Self {
            number,
            biomes: biomes.into_iter().collect(),
            capacity,
            occupants: Vec::new(),
        }
    }

    /// Adds an occupant group, builder style.
    #[must_use]
    pub fn with_occupant(mut self, species: Species, count: NonZeroU32) -> Self {
        self.occupants.push(Occupant::new(species, count));
        self
    }

    /// Whether nothing lives in the enclosure.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    /// Whether the enclosure offers the given biome.
    #[must_use]
    pub fn offers(&self, biome: Biome) -> bool {
        self.biomes.contains(&biome)
    }

    /// Whether any occupant group is of the given species.
    #[must_use]
    pub fn houses(&self, species: Species) -> bool {
        self.occupants.iter().any(|o| o.species == species)
    }

    /// The distinct species living in the enclosure.
    #[must_use]
    pub fn resident_species(&self) -> BTreeSet<Species> {
        self.occupants.iter().map(|o| o.species).collect()
    }
}

/// The immutable set of enclosures a matcher evaluates against.
///
/// Enclosures keep the order they were supplied in; matches are sorted by
/// number independently of that order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnclosureInventory {
    enclosures: Vec<Enclosure>,
}

impl EnclosureInventory {
    /// Iterates over the enclosures in inventory order.
    pub fn iter(&self) -> std::slice::Iter<'_, Enclosure> {
        self.enclosures.iter()
    }

    /// Finds an enclosure by number.
    #[must_use]
    pub fn get(&self, number: u32) -> Option<&Enclosure> {
        self.enclosures.iter().find(|e| e.number == number)
    }

    /// The number of enclosures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.enclosures.len()
    }

    /// Whether the inventory has no enclosures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enclosures.is_empty()
    }

    /// The inventory of the reference zoo.
    #[must_use]
    pub fn zoo() -> Self {
        [
            Enclosure::new(1, [Biome::Savana], 10).with_occupant(Species::Macaco, units(3)),
            Enclosure::new(2, [Biome::Floresta], 5),
            Enclosure::new(3, [Biome::Savana, Biome::Rio], 7)
                .with_occupant(Species::Gazela, units(1)),
            Enclosure::new(4, [Biome::Rio], 8),
            Enclosure::new(5, [Biome::Savana], 9).with_occupant(Species::Leao, units(1)),
        ]
        .into_iter()
        .collect()
    }
}

impl FromIterator<Enclosure> for EnclosureInventory {
    fn from_iter<T: IntoIterator<Item = Enclosure>>(iter: T) -> Self {
        Self {
            enclosures: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EnclosureInventory {
    type Item = &'a Enclosure;
    type IntoIter = std::slice::Iter<'a, Enclosure>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
