use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A habitat type an enclosure can provide and a species can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Biome {
    /// Open grassland.
    Savana,
    /// Woodland.
    Floresta,
    /// River or riverbank.
    Rio,
}

impl Biome {
    /// All biomes, in declaration order.
    pub const ALL: [Self; 3] = [Self::Savana, Self::Floresta, Self::Rio];

    /// Returns the lower-case identifier used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Savana => "savana",
            Self::Floresta => "floresta",
            Self::Rio => "rio",
        }
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Biome {
    type Err = UnknownBiomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|biome| biome.as_str() == s)
            .ok_or_else(|| UnknownBiomeError(s.to_string()))
    }
}

/// Error returned when a string does not name a known biome.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown biome '{0}'")]
pub struct UnknownBiomeError(String);

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("savana", Biome::Savana)]
    #[test_case("floresta", Biome::Floresta)]
    #[test_case("rio", Biome::Rio)]
    fn parses_known_biomes(input: &str, expected: Biome) {
        assert_eq!(input.parse::<Biome>().unwrap(), expected);
        assert_eq!(expected.to_string(), input);
    }

    #[test_case(""; "empty")]
    #[test_case("Savana"; "capitalised")]
    #[test_case("deserto"; "unknown")]
    fn rejects_unknown_biomes(input: &str) {
        assert_eq!(
            input.parse::<Biome>(),
            Err(UnknownBiomeError(input.to_string()))
        );
    }
}
