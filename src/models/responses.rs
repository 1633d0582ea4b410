//! Response DTOs for the PokeAPI
//!
//! Only the fields the client reads are modelled; everything else in the
//! payload is ignored by serde.

use serde::Deserialize;

/// A `{ name, url }` pair, PokeAPI's generic link to another resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of `GET /location-area?offset=..&limit=..`
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas
    #[serde(default)]
    pub count: u32,
    /// URL of the next page, absent on the last page
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, absent on the first page
    #[serde(default)]
    pub previous: Option<String>,
    /// Areas on this page
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

impl LocationAreaPage {
    /// Returns true if the API reports another page after this one.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Body of `GET /location-area/{name}`
#[derive(Debug, Clone, Deserialize)]
pub struct LocationArea {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

impl LocationArea {
    /// Names of every creature that can be met in this area, in API order.
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

/// Body of `GET /pokemon/{name}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Drives the catch probability; null for some alternate forms
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonType {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
