use std::time::Duration;

use futures::future::join_all;
use tracing::{info, warn};

use crate::api::{ApiPokemon, ApiResourceList, ApiSpecies};
use crate::client::PokeClient;
use crate::error::FetchError;
use crate::models::{Catalog, CatalogEntry, EntityDetail, EntityProfile, SpeciesInfo, VariantView};

/// Fetch one page of `page_size` summaries and resolve each into a
/// `CatalogEntry`.
///
/// The detail requests run concurrently; an entry whose detail request
/// fails is dropped and its name recorded in `Catalog::skipped`. The whole
/// operation, summary request included, must finish within `deadline`,
/// otherwise every outstanding request is abandoned and
/// `FetchError::Timeout` is returned.
pub async fn fetch_catalog(
    client: &PokeClient,
    page_size: usize,
    deadline: Duration,
) -> Result<Catalog, FetchError> {
    match tokio::time::timeout(deadline, collect_catalog(client, page_size)).await {
        Ok(result) => result,
        Err(_) => {
            warn!(?deadline, "catalog fetch timed out");
            Err(FetchError::Timeout(deadline))
        }
    }
}

async fn collect_catalog(client: &PokeClient, page_size: usize) -> Result<Catalog, FetchError> {
    let list: ApiResourceList = client.get_json(&client.pokemon_list_url(page_size)).await?;

    let details = join_all(
        list.results
            .iter()
            .map(|summary| client.get_json::<ApiPokemon>(&summary.url)),
    )
    .await;

    let mut catalog = Catalog::default();
    for (summary, detail) in list.results.iter().zip(details) {
        match detail {
            Ok(detail) => catalog.entries.push(CatalogEntry::from_api(summary, &detail)),
            Err(e) => {
                warn!(name = %summary.name, error = %e, "dropping catalog entry");
                catalog.skipped.push(summary.name.clone());
            }
        }
    }

    info!(
        loaded = catalog.entries.len(),
        skipped = catalog.skipped.len(),
        "catalog fetched"
    );
    Ok(catalog)
}

/// Fetch the entity called `name`, its species record and the image of
/// every listed variant.
///
/// The entity and species requests are required; a failure in either
/// aborts the operation. Variant lookups run concurrently and failed ones
/// are left out of `EntityProfile::variants`.
pub async fn fetch_entity_detail(
    client: &PokeClient,
    name: &str,
) -> Result<EntityProfile, FetchError> {
    let pokemon: ApiPokemon = client
        .get_json(&client.pokemon_url(name))
        .await
        .map_err(|e| e.or_not_found(|| format!("Pokémon '{}'", name)))?;
    let entity = EntityDetail::from_api(&pokemon);

    let species_url = client.species_url(entity.id);
    let species: ApiSpecies = client
        .get_json(&species_url)
        .await
        .map_err(|e| e.or_not_found(|| format!("species #{}", entity.id)))?;
    let species = SpeciesInfo::from_api(&species_url, &species);

    let lookups = join_all(species.variants.iter().map(|v| async move {
        let detail = client.get_json::<ApiPokemon>(&v.detail_url).await?;
        Ok::<_, FetchError>(VariantView {
            name: v.name.clone(),
            image_url: detail.sprites.display_image(),
            is_default: v.is_default,
        })
    }))
    .await;

    let mut variants = Vec::with_capacity(lookups.len());
    let mut skipped_variants = Vec::new();
    for (variant, lookup) in species.variants.iter().zip(lookups) {
        match lookup {
            Ok(view) => variants.push(view),
            Err(e) => {
                warn!(variant = %variant.name, error = %e, "dropping variant");
                skipped_variants.push(variant.name.clone());
            }
        }
    }

    info!(name = %entity.name, id = entity.id, forms = variants.len(), "profile fetched");
    Ok(EntityProfile {
        entity,
        species,
        variants,
        skipped_variants,
    })
}
