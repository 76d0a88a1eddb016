//! Space already taken up in an enclosure.

use crate::domain::{Enclosure, Species, SpeciesCatalog};

/// Extra space units charged when different species share an enclosure.
pub const COHABITATION_OVERHEAD: u64 = 1;

/// Computes the space units already in use in `enclosure`, from the point of
/// view of a request to add `requested` animals.
///
/// This is the sum of `count × size` over the current occupants, plus
/// [`COHABITATION_OVERHEAD`] if the enclosure already mixes species, or if its
/// only resident species differs from the requested one. An empty enclosure,
/// or one holding only the requested species, carries no overhead.
///
/// The result depends only on the multiset of occupants, not their order.
#[must_use]
pub fn occupied_space(enclosure: &Enclosure, requested: Species, catalog: &SpeciesCatalog) -> u64 {
    let animals = enclosure
        .occupants
        .iter()
        .map(|occupant| {
            catalog.get(occupant.species).map_or(0, |profile| {
                profile
                    .footprint(occupant.count.get().into())
                    .unwrap_or(u64::MAX)
            })
        })
        .fold(0u64, u64::saturating_add);

    let residents = enclosure.resident_species();
    let shared = residents.len() > 1
        || residents
            .first()
            .is_some_and(|&resident| resident != requested);

    if shared {
        animals.saturating_add(COHABITATION_OVERHEAD)
    } else {
        animals
    }
}
