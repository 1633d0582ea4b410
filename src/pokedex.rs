//! Pokedex Module
//!
//! The caught-creature collection and the catch roll.

use std::collections::BTreeMap;

use rand::Rng;

use crate::models::Pokemon;

// == Catch Probability ==
/// Percent chance of catching a creature with the given base experience.
///
/// | base experience | chance |
/// |-----------------|--------|
/// | < 100           | 95     |
/// | < 200           | 80     |
/// | < 300           | 60     |
/// | < 400           | 35     |
/// | otherwise       | 20     |
pub fn catch_probability(base_experience: u32) -> u32 {
    match base_experience {
        0..=99 => 95,
        100..=199 => 80,
        200..=299 => 60,
        300..=399 => 35,
        _ => 20,
    }
}

/// Whether a `roll` in `0..100` catches a creature with the given base experience.
pub fn is_caught(base_experience: u32, roll: u32) -> bool {
    catch_probability(base_experience) > roll
}

/// Rolls once against `pokemon`'s catch probability.
///
/// A missing base experience is treated as zero.
pub fn attempt_catch<R: Rng + ?Sized>(pokemon: &Pokemon, rng: &mut R) -> bool {
    let roll = rng.gen_range(0..100);
    is_caught(pokemon.base_experience.unwrap_or(0), roll)
}

// == Pokedex ==
/// Creatures the user has caught, keyed by name.
#[derive(Debug, Default)]
pub struct Pokedex {
    caught: BTreeMap<String, Pokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a catch. Catching the same creature again replaces the entry.
    pub fn insert(&mut self, pokemon: Pokemon) {
        self.caught.insert(pokemon.name.clone(), pokemon);
    }

    pub fn get(&self, name: &str) -> Option<&Pokemon> {
        self.caught.get(name)
    }

    /// Caught creatures in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Pokemon> {
        self.caught.values()
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn pokemon(name: &str, base_experience: Option<u32>) -> Pokemon {
        Pokemon {
            id: 1,
            name: name.to_string(),
            base_experience,
            height: 0,
            weight: 0,
            stats: Vec::new(),
            types: Vec::new(),
        }
    }

    #[test]
    fn test_catch_probability_tiers() {
        assert_eq!(catch_probability(0), 95);
        assert_eq!(catch_probability(99), 95);
        assert_eq!(catch_probability(100), 80);
        assert_eq!(catch_probability(199), 80);
        assert_eq!(catch_probability(200), 60);
        assert_eq!(catch_probability(300), 35);
        assert_eq!(catch_probability(399), 35);
        assert_eq!(catch_probability(400), 20);
        assert_eq!(catch_probability(608), 20);
    }

    #[test]
    fn test_is_caught_boundary() {
        // 80% chance: rolls 0..=79 succeed, 80 and up fail
        assert!(is_caught(150, 0));
        assert!(is_caught(150, 79));
        assert!(!is_caught(150, 80));
        assert!(!is_caught(150, 99));
    }

    #[test]
    fn test_attempt_catch_lowest_roll_always_succeeds() {
        // A zero word maps to the bottom of the range
        let mut rng = StepRng::new(0, 0);

        assert!(attempt_catch(&pokemon("mewtwo", Some(340)), &mut rng));
        assert!(attempt_catch(&pokemon("deoxys-attack", None), &mut rng));
    }

    #[test]
    fn test_pokedex_sorted_and_replaces() {
        let mut pokedex = Pokedex::new();
        assert!(pokedex.is_empty());

        pokedex.insert(pokemon("pidgey", Some(50)));
        pokedex.insert(pokemon("caterpie", Some(39)));
        pokedex.insert(pokemon("pidgey", Some(51)));

        let names: Vec<&str> = pokedex.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["caterpie", "pidgey"]);
        assert_eq!(pokedex.len(), 2);
        assert_eq!(pokedex.get("pidgey").unwrap().base_experience, Some(51));
        assert!(pokedex.get("mew").is_none());
    }
}
