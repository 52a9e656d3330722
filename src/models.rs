use serde::Serialize;

use crate::api::{ApiNamedResource, ApiPokemon, ApiSpecies};

/// One row of the catalog list: a summary record merged with its detail.
#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct CatalogEntry {
    pub name: String,
    pub source_url: String,
    pub image_url: Option<String>,
    pub id: u32,
    pub primary_type: String,
    pub types: Vec<String>,
}

impl CatalogEntry {
    pub fn from_api(summary: &ApiNamedResource, detail: &ApiPokemon) -> Self {
        let types = detail.type_names();
        Self {
            name: summary.name.clone(),
            source_url: summary.url.clone(),
            image_url: detail.sprites.display_image(),
            id: detail.id,
            primary_type: types.first().cloned().unwrap_or_default(),
            types,
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct EntityDetail {
    pub id: u32,
    pub name: String,
    pub image_url: Option<String>,
    pub types: Vec<String>,
    pub height_decimeters: u32,
    pub weight_hectograms: u32,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct Stat {
    pub name: String,
    pub base: u32,
}

impl EntityDetail {
    pub fn from_api(p: &ApiPokemon) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            image_url: p.sprites.display_image(),
            types: p.type_names(),
            height_decimeters: p.height,
            weight_hectograms: p.weight,
            stats: p
                .stats
                .iter()
                .map(|s| Stat {
                    name: s.stat.name.clone(),
                    base: s.base_stat,
                })
                .collect(),
        }
    }

    pub fn height_meters(&self) -> f32 {
        self.height_decimeters as f32 / 10.0
    }

    pub fn weight_kilograms(&self) -> f32 {
        self.weight_hectograms as f32 / 10.0
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct SpeciesInfo {
    /// URL the species record was fetched from.
    pub source_url: String,
    pub flavor_text: String,
    pub variants: Vec<VariantRef>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct VariantRef {
    pub name: String,
    pub detail_url: String,
    pub is_default: bool,
}

impl SpeciesInfo {
    pub fn from_api(source_url: &str, s: &ApiSpecies) -> Self {
        Self {
            source_url: source_url.to_string(),
            flavor_text: s.english_flavor_text(),
            variants: s
                .varieties
                .iter()
                .map(|v| VariantRef {
                    name: v.pokemon.name.clone(),
                    detail_url: v.pokemon.url.clone(),
                    is_default: v.is_default,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct VariantView {
    pub name: String,
    pub image_url: Option<String>,
    pub is_default: bool,
}

impl VariantView {
    pub fn label(&self) -> &'static str {
        if self.is_default {
            "Default"
        } else {
            "Mega/Variation"
        }
    }
}

/// Result of a catalog fetch. `skipped` names the summary records whose
/// detail request failed and were left out of `entries`.
#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct Catalog {
    pub entries: Vec<CatalogEntry>,
    pub skipped: Vec<String>,
}

/// Everything the detail screen renders for one entity.
#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct EntityProfile {
    pub entity: EntityDetail,
    pub species: SpeciesInfo,
    pub variants: Vec<VariantView>,
    pub skipped_variants: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pokemon(json: &str) -> ApiPokemon {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn catalog_entry_merges_summary_and_detail() {
        let summary = ApiNamedResource {
            name: "charmander".into(),
            url: "https://pokeapi.co/api/v2/pokemon/4/".into(),
        };
        let detail = pokemon(
            r#"{ "id": 4, "name": "charmander",
                 "sprites": { "front_default": "https://img/4.png" },
                 "types": [ { "slot": 1, "type": { "name": "fire" } } ] }"#,
        );
        let entry = CatalogEntry::from_api(&summary, &detail);
        assert_eq!(entry.id, 4);
        assert_eq!(entry.source_url, "https://pokeapi.co/api/v2/pokemon/4/");
        assert_eq!(entry.image_url.as_deref(), Some("https://img/4.png"));
        assert_eq!(entry.primary_type, "fire");
        assert_eq!(entry.types, vec!["fire"]);
    }

    #[test]
    fn typeless_record_has_empty_primary_type() {
        let summary = ApiNamedResource {
            name: "glitch".into(),
            url: String::new(),
        };
        let entry = CatalogEntry::from_api(&summary, &pokemon(r#"{ "id": 0, "name": "glitch" }"#));
        assert_eq!(entry.primary_type, "");
        assert!(entry.types.is_empty());
        assert_eq!(entry.image_url, None);
    }

    #[test]
    fn detail_units() {
        let detail = EntityDetail::from_api(&pokemon(
            r#"{ "id": 25, "name": "pikachu", "height": 4, "weight": 60,
                 "stats": [ { "base_stat": 90, "stat": { "name": "speed" } } ] }"#,
        ));
        assert_eq!(detail.height_meters(), 0.4);
        assert_eq!(detail.weight_kilograms(), 6.0);
        assert_eq!(
            detail.stats,
            vec![Stat {
                name: "speed".into(),
                base: 90
            }]
        );
    }

    #[test]
    fn variant_labels() {
        let mut v = VariantView {
            name: "venusaur".into(),
            image_url: None,
            is_default: true,
        };
        assert_eq!(v.label(), "Default");
        v.is_default = false;
        assert_eq!(v.label(), "Mega/Variation");
    }
}
