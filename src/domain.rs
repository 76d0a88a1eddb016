//! Domain models for enclosure matching.
//!
//! This module contains the reference data the matcher evaluates against: the
//! species catalog, the enclosure inventory, and the configuration file they
//! are loaded from.

use std::num::NonZeroU32;

mod biome;
pub use biome::{Biome, UnknownBiomeError};

/// Versioned TOML configuration for the reference data.
pub mod config;
pub use config::ZooConfig;

mod enclosure;
pub use enclosure::{Enclosure, EnclosureInventory, Occupant};

mod quantity;
pub use quantity::{InvalidQuantityError, Quantity};

mod species;
pub use species::{Species, SpeciesCatalog, SpeciesProfile, UnknownSpeciesError};

/// Non-zero literal for the built-in reference tables.
///
/// # Panics
///
/// Panics if `n` is zero.
pub(crate) const fn units(n: u32) -> NonZeroU32 {
    match NonZeroU32::new(n) {
        Some(n) => n,
        None => panic!("reference data counts must be non-zero"),
    }
}
