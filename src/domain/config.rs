use std::{
    collections::{BTreeMap, BTreeSet},
    io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::domain::{
    Enclosure, EnclosureInventory, Species, SpeciesCatalog, SpeciesProfile, UnknownSpeciesError,
};

/// The reference data of a zoo: which species it knows about and which
/// enclosures it has.
///
/// The default configuration is the built-in reference zoo. A configuration
/// file only needs to list the tables it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Versions", into = "Versions")]
pub struct ZooConfig {
    catalog: SpeciesCatalog,
    inventory: EnclosureInventory,
}

impl Default for ZooConfig {
    fn default() -> Self {
        Self {
            catalog: SpeciesCatalog::zoo(),
            inventory: EnclosureInventory::zoo(),
        }
    }
}

impl ZooConfig {
    /// Builds a configuration from explicit tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the tables are inconsistent; see
    /// [`ValidationError`].
    pub fn new(
        catalog: SpeciesCatalog,
        inventory: EnclosureInventory,
    ) -> Result<Self, ValidationError> {
        validate(&catalog, &inventory)?;
        Ok(Self { catalog, inventory })
    }

    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, if the TOML content is
    /// invalid, or if the tables it describes are inconsistent.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let versions: Versions = toml::from_str(&content)?;
        let config = Self::try_from(versions)?;

        tracing::info!(
            species = config.catalog.len(),
            enclosures = config.inventory.len(),
            "Loaded zoo configuration from {}",
            path.display()
        );

        Ok(config)
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), LoadError> {
        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|source| LoadError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Renders the configuration as a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, LoadError> {
        Ok(toml::to_string_pretty(self)?)
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

    /// Splits the configuration into its tables.
    #[must_use]
    pub fn into_parts(self) -> (SpeciesCatalog, EnclosureInventory) {
        (self.catalog, self.inventory)
    }
}

fn validate(catalog: &SpeciesCatalog, inventory: &EnclosureInventory) -> Result<(), ValidationError> {
    if let Some((species, _)) = catalog.iter().find(|(_, p)| p.biomes.is_empty()) {
        return Err(ValidationError::SpeciesWithoutBiomes(species));
    }

    let mut seen = BTreeSet::new();
    for enclosure in inventory {
        if !seen.insert(enclosure.number) {
            return Err(ValidationError::DuplicateEnclosure(enclosure.number));
        }
        if enclosure.biomes.is_empty() {
            return Err(ValidationError::EnclosureWithoutBiomes(enclosure.number));
        }
        if let Some(occupant) = enclosure
            .occupants
            .iter()
            .find(|o| !catalog.contains(o.species))
        {
            return Err(ValidationError::UnknownOccupant {
                enclosure: enclosure.number,
                species: occupant.species,
            });
        }
    }

    Ok(())
}

/// The reference tables are inconsistent.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// A species table key is not a known species id.
    #[error(transparent)]
    UnknownSpecies(#[from] UnknownSpeciesError),

    /// A species lists no biomes it can live in.
    #[error("Species {0} has no biomes")]
    SpeciesWithoutBiomes(Species),

    /// Two enclosures share a number.
    #[error("Enclosure {0} is defined more than once")]
    DuplicateEnclosure(u32),

    /// An enclosure offers no biomes.
    #[error("Enclosure {0} has no biomes")]
    EnclosureWithoutBiomes(u32),

    /// An enclosure houses a species missing from the catalog.
    #[error("Enclosure {enclosure} houses {species}, which is not in the species catalog")]
    UnknownOccupant {
        /// The enclosure number.
        enclosure: u32,
        /// The species missing from the catalog.
        species: Species,
    },
}

/// Errors that can occur while reading or writing a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        /// The path that was read.
        path: PathBuf,
        /// The underlying IO error.
        source: io::Error,
    },

    /// The file is not valid TOML or does not match the expected shape.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The file parsed, but the tables are inconsistent.
    #[error("Invalid config: {0}")]
    Invalid(#[from] ValidationError),

    /// The configuration could not be rendered as TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The file could not be written.
    #[error("Failed to write config file {}: {source}", path.display())]
    Write {
        /// The path that was written.
        path: PathBuf,
        /// The underlying IO error.
        source: io::Error,
    },
}

fn default_species() -> BTreeMap<String, SpeciesProfile> {
    SpeciesCatalog::zoo()
        .iter()
        .map(|(species, profile)| (species.id().to_string(), profile.clone()))
        .collect()
}

fn default_enclosures() -> Vec<Enclosure> {
    EnclosureInventory::zoo().iter().cloned().collect()
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        /// Species profiles, keyed by species id.
        #[serde(default = "default_species")]
        species: BTreeMap<String, SpeciesProfile>,

        #[serde(default = "default_enclosures")]
        enclosures: Vec<Enclosure>,
    },
}

impl TryFrom<Versions> for ZooConfig {
    type Error = ValidationError;

    fn try_from(versions: Versions) -> Result<Self, Self::Error> {
        match versions {
            Versions::V1 {
                species,
                enclosures,
            } => {
                let catalog = species
                    .into_iter()
                    .map(|(id, profile)| Ok((id.parse::<Species>()?, profile)))
                    .collect::<Result<SpeciesCatalog, UnknownSpeciesError>>()?;
                Self::new(catalog, enclosures.into_iter().collect())
            }
        }
    }
}

impl From<ZooConfig> for Versions {
    fn from(config: ZooConfig) -> Self {
        Self::V1 {
            species: config
                .catalog
                .iter()
                .map(|(species, profile)| (species.id().to_string(), profile.clone()))
                .collect(),
            enclosures: config.inventory.iter().cloned().collect(),
        }
    }
}
