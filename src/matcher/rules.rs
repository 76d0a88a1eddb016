//! The admissibility rules a placement must pass.
//!
//! Each rule is an independent predicate. [`check`] composes them into a single
//! verdict for one enclosure.

use std::collections::BTreeSet;

use crate::{
    domain::{Biome, Enclosure, Quantity, Species, SpeciesCatalog, SpeciesProfile},
    matcher::Rejection,
};

/// A hypothetical placement of animals into one enclosure.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Placement<'a> {
    pub enclosure: &'a Enclosure,
    pub species: Species,
    pub profile: &'a SpeciesProfile,
    pub quantity: Quantity,
    pub catalog: &'a SpeciesCatalog,
    pub free_space: u64,
}

/// Runs every rule against the placement and returns the first failure.
pub(crate) fn check(placement: &Placement<'_>) -> Result<(), Rejection> {
    let Placement {
        enclosure,
        species,
        profile,
        quantity,
        catalog,
        free_space,
    } = *placement;

    if !biome_compatible(&enclosure.biomes, &profile.biomes) {
        return Err(Rejection::BiomeMismatch);
    }
    if !has_room(free_space, profile, quantity) {
        return Err(Rejection::InsufficientSpace);
    }
    if !carnivores_segregated(enclosure, species, catalog) {
        return Err(Rejection::CarnivoreConflict);
    }
    if !hippopotamus_comfortable(enclosure, species) {
        return Err(Rejection::HippopotamusHabitat);
    }
    if !monkeys_comfortable(enclosure, species, quantity) {
        return Err(Rejection::MonkeyAlone);
    }
    Ok(())
}

/// Whether the enclosure offers at least one biome the species can live in.
#[must_use]
pub fn biome_compatible(enclosure: &BTreeSet<Biome>, species: &BTreeSet<Biome>) -> bool {
    !enclosure.is_disjoint(species)
}

/// Whether `free_space` strictly exceeds the footprint of the new animals.
///
/// A footprint that exactly fills the free space does not fit, and neither does
/// one too large to count.
#[must_use]
pub fn has_room(free_space: u64, profile: &SpeciesProfile, quantity: Quantity) -> bool {
    profile
        .footprint(quantity.get())
        .is_some_and(|needed| free_space > needed)
}

/// Carnivore segregation.
///
/// A carnivore only moves into an empty enclosure or one holding nothing but
/// carnivores of its own species. Anything else only moves into an enclosure
/// with no carnivores at all.
#[must_use]
pub fn carnivores_segregated(enclosure: &Enclosure, species: Species, catalog: &SpeciesCatalog) -> bool {
    if catalog.is_carnivore(species) {
        enclosure
            .occupants
            .iter()
            .all(|o| o.species == species && catalog.is_carnivore(o.species))
    } else {
        !enclosure
            .occupants
            .iter()
            .any(|o| catalog.is_carnivore(o.species))
    }
}

/// Hippopotamuses only share space in an enclosure offering both savana and
/// river.
///
/// Applies when a hippopotamus is being placed, and also when one already lives
/// in the enclosure.
#[must_use]
pub fn hippopotamus_comfortable(enclosure: &Enclosure, species: Species) -> bool {
    let involved = species == Species::Hipopotamo || enclosure.houses(Species::Hipopotamo);
    !involved || (enclosure.offers(Biome::Savana) && enclosure.offers(Biome::Rio))
}

/// A lone monkey will not move into an empty enclosure.
#[must_use]
pub fn monkeys_comfortable(enclosure: &Enclosure, species: Species, quantity: Quantity) -> bool {
    !(species == Species::Macaco && enclosure.is_empty() && quantity.get() < 2)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use std::num::NonZeroU64;

    use super::*;
    use crate::domain::units;

    fn quantity(n: u32) -> Quantity {
        Quantity::from(units(n))
    }

    fn biomes(list: &[Biome]) -> BTreeSet<Biome> {
        list.iter().copied().collect()
    }

    #[test_case(&[Biome::Savana], &[Biome::Savana], true; "same single biome")]
    #[test_case(&[Biome::Savana, Biome::Rio], &[Biome::Rio], true; "one of several")]
    #[test_case(&[Biome::Floresta], &[Biome::Savana, Biome::Floresta], true; "species has several")]
    #[test_case(&[Biome::Rio], &[Biome::Savana], false; "disjoint")]
    fn biome_intersection(enclosure: &[Biome], species: &[Biome], expected: bool) {
        assert_eq!(biome_compatible(&biomes(enclosure), &biomes(species)), expected);
    }

    #[test_case(7, 6, true; "room to spare")]
    #[test_case(7, 7, false; "exact fit is rejected")]
    #[test_case(7, 8, false; "too many")]
    #[test_case(0, 1, false; "no free space")]
    fn room_is_strict(free_space: u64, monkeys: u32, expected: bool) {
        let catalog = SpeciesCatalog::zoo();
        let monkey = catalog.get(Species::Macaco).unwrap();
        assert_eq!(has_room(free_space, monkey, quantity(monkeys)), expected);
    }

    #[test]
    fn overflowing_footprint_has_no_room() {
        let catalog = SpeciesCatalog::zoo();
        let hippo = catalog.get(Species::Hipopotamo).unwrap();
        let herd = Quantity::new(NonZeroU64::MAX);

        assert!(!has_room(u64::MAX, hippo, herd));
    }

    #[test_case(Species::Leao, 5, true; "lion joins lion")]
    #[test_case(Species::Leopardo, 5, false; "leopard rejected by lion")]
    #[test_case(Species::Leao, 1, false; "lion rejected by monkeys")]
    #[test_case(Species::Leao, 2, true; "lion into empty enclosure")]
    #[test_case(Species::Crocodilo, 4, true; "crocodile into empty enclosure")]
    #[test_case(Species::Macaco, 5, false; "monkey rejected by lion")]
    #[test_case(Species::Gazela, 3, true; "herbivores coexist")]
    #[test_case(Species::Gazela, 1, true; "herbivore joins other herbivore")]
    fn carnivore_segregation(species: Species, number: u32, expected: bool) {
        let inventory = crate::domain::EnclosureInventory::zoo();
        let enclosure = inventory.get(number).unwrap();
        assert_eq!(
            carnivores_segregated(enclosure, species, &SpeciesCatalog::zoo()),
            expected
        );
    }

    #[test]
    fn carnivore_never_joins_mixed_carnivores() {
        let enclosure = Enclosure::new(1, [Biome::Savana], 50)
            .with_occupant(Species::Leao, units(1))
            .with_occupant(Species::Leopardo, units(1));
        let catalog = SpeciesCatalog::zoo();

        assert!(!carnivores_segregated(&enclosure, Species::Leao, &catalog));
        assert!(!carnivores_segregated(&enclosure, Species::Leopardo, &catalog));
    }

    #[test_case(&[Biome::Savana, Biome::Rio], true; "savana and river")]
    #[test_case(&[Biome::Rio], false; "river only")]
    #[test_case(&[Biome::Savana], false; "savana only")]
    #[test_case(&[Biome::Savana, Biome::Floresta], false; "savana and forest")]
    fn hippopotamus_needs_savana_and_river(offered: &[Biome], expected: bool) {
        let enclosure = Enclosure::new(1, offered.iter().copied(), 30);
        assert_eq!(
            hippopotamus_comfortable(&enclosure, Species::Hipopotamo),
            expected
        );
    }

    #[test]
    fn resident_hippopotamus_constrains_other_species() {
        let river = Enclosure::new(1, [Biome::Rio], 30).with_occupant(Species::Hipopotamo, units(1));
        let both = Enclosure::new(2, [Biome::Savana, Biome::Rio], 30)
            .with_occupant(Species::Hipopotamo, units(1));

        assert!(!hippopotamus_comfortable(&river, Species::Crocodilo));
        assert!(hippopotamus_comfortable(&both, Species::Gazela));
    }

    #[test]
    fn hippopotamus_rule_ignores_unrelated_placements() {
        let savana = Enclosure::new(1, [Biome::Savana], 30);
        assert!(hippopotamus_comfortable(&savana, Species::Gazela));
    }

    #[test_case(Species::Macaco, 1, true, false; "lone monkey into empty")]
    #[test_case(Species::Macaco, 2, true, true; "pair of monkeys into empty")]
    #[test_case(Species::Macaco, 1, false, true; "lone monkey joins others")]
    #[test_case(Species::Gazela, 1, true, true; "rule only applies to monkeys")]
    fn monkey_minimum_group(species: Species, count: u32, empty: bool, expected: bool) {
        let mut enclosure = Enclosure::new(1, [Biome::Floresta], 10);
        if !empty {
            enclosure = enclosure.with_occupant(Species::Macaco, units(1));
        }
        assert_eq!(
            monkeys_comfortable(&enclosure, species, quantity(count)),
            expected
        );
    }
}
