use std::{
    fmt,
    num::{IntErrorKind, NonZeroU32, NonZeroU64},
    ops::Deref,
    str::FromStr,
};

/// A validated, strictly positive number of animals.
///
/// Any positive integer is a valid quantity, however large. Whether that many
/// animals fit anywhere is for the placement rules to decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(NonZeroU64);

impl Quantity {
    /// Creates a quantity from a pre-validated count.
    #[must_use]
    pub const fn new(count: NonZeroU64) -> Self {
        Self(count)
    }

    /// Returns the count as a plain integer.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl Deref for Quantity {
    type Target = NonZeroU64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<NonZeroU64> for Quantity {
    fn from(count: NonZeroU64) -> Self {
        Self(count)
    }
}

impl From<NonZeroU32> for Quantity {
    fn from(count: NonZeroU32) -> Self {
        Self(count.into())
    }
}

impl TryFrom<i64> for Quantity {
    type Error = InvalidQuantityError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .ok()
            .and_then(NonZeroU64::new)
            .map(Self)
            .ok_or_else(|| InvalidQuantityError(value.to_string()))
    }
}

impl FromStr for Quantity {
    type Err = InvalidQuantityError;

    /// Parses a decimal integer count.
    ///
    /// A whole number written with a zero fraction (`"2.0"`) is accepted.
    /// Other fractions (`"1.5"`), signs other than a leading `+`, zero and
    /// negative numbers are rejected. Counts too large for a `u64` saturate,
    /// since no enclosure could take them either way.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidQuantityError(s.to_string());

        let whole = match s.split_once('.') {
            Some((whole, fraction)) if fraction.bytes().all(|b| b == b'0') => whole,
            Some(_) => return Err(invalid()),
            None => s,
        };

        match whole.parse::<NonZeroU64>() {
            Ok(count) => Ok(Self(count)),
            Err(error) if *error.kind() == IntErrorKind::PosOverflow => Ok(Self(NonZeroU64::MAX)),
            Err(_) => Err(invalid()),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a count is not a strictly positive integer.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid quantity '{0}': expected a positive integer")]
pub struct InvalidQuantityError(String);
