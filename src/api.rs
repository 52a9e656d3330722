//! Wire types for the subset of PokeAPI responses the aggregators read.
//! Fields that are not consumed are ignored by serde.

use serde::Deserialize;

/// `GET /pokemon?limit=N`
#[derive(Debug, Deserialize, Clone)]
pub struct ApiResourceList {
    #[serde(default)]
    pub results: Vec<ApiNamedResource>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApiNamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// `GET /pokemon/{name}`
#[derive(Debug, Deserialize, Clone)]
pub struct ApiPokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: ApiSprites,
    #[serde(default)]
    pub types: Vec<ApiTypeSlot>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<ApiStat>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApiSprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: ApiOtherSprites,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApiOtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: ApiArtwork,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApiArtwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiTypeSlot {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: ApiNamedResource,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiStat {
    pub base_stat: u32,
    pub stat: ApiNamedResource,
}

/// `GET /pokemon-species/{id}`
#[derive(Debug, Deserialize, Clone)]
pub struct ApiSpecies {
    #[serde(default)]
    pub flavor_text_entries: Vec<ApiFlavorText>,
    #[serde(default)]
    pub varieties: Vec<ApiVariety>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiFlavorText {
    pub flavor_text: String,
    pub language: ApiNamedResource,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiVariety {
    #[serde(default)]
    pub is_default: bool,
    pub pokemon: ApiNamedResource,
}

impl ApiSprites {
    /// Official artwork when present, otherwise the default sprite.
    /// Empty strings count as absent.
    pub fn display_image(&self) -> Option<String> {
        self.other
            .official_artwork
            .front_default
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.front_default.as_deref().filter(|s| !s.is_empty()))
            .map(str::to_string)
    }
}

impl ApiPokemon {
    /// Type names in slot order, primary type first.
    pub fn type_names(&self) -> Vec<String> {
        let mut slots: Vec<&ApiTypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|t| t.slot);
        slots.into_iter().map(|t| t.kind.name.clone()).collect()
    }
}

impl ApiSpecies {
    /// First English flavor text with form feeds and newlines turned
    /// into spaces. Empty when no English entry exists.
    pub fn english_flavor_text(&self) -> String {
        self.flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == "en")
            .map(|entry| normalize_flavor_text(&entry.flavor_text))
            .unwrap_or_default()
    }
}

pub fn normalize_flavor_text(raw: &str) -> String {
    raw.replace(['\u{c}', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULBASAUR: &str = r#"{
        "id": 1,
        "name": "bulbasaur",
        "height": 7,
        "weight": 69,
        "base_experience": 64,
        "sprites": {
            "front_default": "https://img/sprites/1.png",
            "other": {
                "official-artwork": { "front_default": "https://img/artwork/1.png" },
                "home": { "front_default": null }
            }
        },
        "types": [
            { "slot": 1, "type": { "name": "grass", "url": "https://pokeapi.co/api/v2/type/12/" } },
            { "slot": 2, "type": { "name": "poison", "url": "https://pokeapi.co/api/v2/type/4/" } }
        ],
        "stats": [
            { "base_stat": 45, "effort": 0, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 49, "effort": 0, "stat": { "name": "attack", "url": "" } }
        ]
    }"#;

    #[test]
    fn decodes_pokemon() {
        let p: ApiPokemon = serde_json::from_str(BULBASAUR).unwrap();
        assert_eq!(p.id, 1);
        assert_eq!(p.type_names(), vec!["grass", "poison"]);
        assert_eq!(p.stats[1].stat.name, "attack");
        assert_eq!(p.stats[1].base_stat, 49);
        assert_eq!(
            p.sprites.display_image().as_deref(),
            Some("https://img/artwork/1.png")
        );
    }

    #[test]
    fn types_follow_slot_order() {
        let p: ApiPokemon = serde_json::from_str(
            r#"{ "id": 6, "name": "charizard", "types": [
                    { "slot": 2, "type": { "name": "flying" } },
                    { "slot": 1, "type": { "name": "fire" } }
                ] }"#,
        )
        .unwrap();
        assert_eq!(p.type_names(), vec!["fire", "flying"]);
    }

    #[test]
    fn image_falls_back_to_default_sprite() {
        let sprites: ApiSprites = serde_json::from_str(
            r#"{ "front_default": "https://img/sprites/10.png",
                 "other": { "official-artwork": { "front_default": null } } }"#,
        )
        .unwrap();
        assert_eq!(
            sprites.display_image().as_deref(),
            Some("https://img/sprites/10.png")
        );

        let bare: ApiSprites = serde_json::from_str(r#"{ "front_default": "" }"#).unwrap();
        assert_eq!(bare.display_image(), None);
    }

    #[test]
    fn english_flavor_text_is_normalized() {
        let species: ApiSpecies = serde_json::from_str(
            r#"{
                "flavor_text_entries": [
                    { "flavor_text": "Une graine", "language": { "name": "fr", "url": "" } },
                    { "flavor_text": "Leaf\fblade\nglows", "language": { "name": "en", "url": "" } },
                    { "flavor_text": "second", "language": { "name": "en", "url": "" } }
                ],
                "varieties": []
            }"#,
        )
        .unwrap();
        assert_eq!(species.english_flavor_text(), "Leaf blade glows");
    }

    #[test]
    fn missing_english_entry_yields_empty_text() {
        let species: ApiSpecies = serde_json::from_str(
            r#"{ "flavor_text_entries": [
                    { "flavor_text": "Eine Knospe", "language": { "name": "de", "url": "" } }
                ] }"#,
        )
        .unwrap();
        assert_eq!(species.english_flavor_text(), "");
        assert!(species.varieties.is_empty());
    }

    #[test]
    fn each_control_char_becomes_one_space() {
        assert_eq!(normalize_flavor_text("a\n\u{c}b"), "a  b");
    }
}
