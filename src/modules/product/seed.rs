//! Random sample catalog

use super::gateway::{GatewayResult, ProductGateway};
use super::model::{CreateProductRequest, ProductId};
use chrono::{DateTime, TimeZone, Utc};
use rand::Rng;
use rand::seq::IteratorRandom;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Origin {
    Brazil,
    Colombia,
    Ethiopia,
    Vietnam,
    Indonesia,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum CoffeeType {
    Arabica,
    Robusta,
    Liberica,
    Excelsa,
}

/// Earliest `dateAdded` a sample product can get.
pub fn catalog_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// Build `count` random coffee products; the i-th is meant for id `i + 1`.
pub fn sample_products<R: Rng + ?Sized>(
    count: u32,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Vec<CreateProductRequest> {
    let start = catalog_epoch().timestamp();
    let end = now.timestamp().max(start);

    (0..count)
        .map(|i| {
            let added_at = rng.random_range(start..=end);
            CreateProductRequest {
                name: format!("Coffee {i}"),
                description: format!("Description for Coffee {i}"),
                price: rng.random_range(5.0..15.0),
                origin: Origin::iter().choose(rng).map(|o| o.to_string()),
                coffee_type: CoffeeType::iter().choose(rng).map(|t| t.to_string()),
                weight: Some(rng.random_range(0.25..1.5)),
                stock: Some(rng.random_range(10..=100)),
                date_added: Some(DateTime::from_timestamp(added_at, 0).unwrap_or(now)),
                availability: Some(rng.random_bool(0.8)),
                average_rating: Some(rng.random::<f64>() * 5.0),
            }
        })
        .collect()
}

/// Make sure ids `1..=samples.len()` exist, creating the missing ones from
/// the matching sample. Existing rows are left as they are.
///
/// Returns how many products were created.
pub async fn seed_products(
    gateway: &dyn ProductGateway,
    samples: Vec<CreateProductRequest>,
) -> GatewayResult<usize> {
    let mut created = 0;
    for (i, sample) in samples.into_iter().enumerate() {
        let id = ProductId::try_from(i + 1).unwrap_or(ProductId::MAX);
        if gateway.find_unique(id).await?.is_some() {
            tracing::debug!(id, "Product already present, skipping");
            continue;
        }

        let product = gateway.create(sample).await?;
        tracing::info!(id = product.id, name = %product.name, "Seeded product");
        created += 1;
    }
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::product::memory::InMemoryProductGateway;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn samples_stay_within_ranges() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(7);
        let samples = sample_products(50, &mut rng, now);
        assert_eq!(samples.len(), 50);

        let origins: Vec<String> = Origin::iter().map(|o| o.to_string()).collect();
        let types: Vec<String> = CoffeeType::iter().map(|t| t.to_string()).collect();

        for (i, sample) in samples.iter().enumerate() {
            assert_eq!(sample.name, format!("Coffee {i}"));
            assert_eq!(sample.description, format!("Description for Coffee {i}"));
            assert!((5.0..15.0).contains(&sample.price));

            let weight = sample.weight.unwrap();
            assert!((0.25..1.5).contains(&weight));
            let stock = sample.stock.unwrap();
            assert!((10..=100).contains(&stock));
            let rating = sample.average_rating.unwrap();
            assert!((0.0..5.0).contains(&rating));

            let added = sample.date_added.unwrap();
            assert!(added >= catalog_epoch() && added <= now);

            assert!(origins.contains(sample.origin.as_ref().unwrap()));
            assert!(types.contains(sample.coffee_type.as_ref().unwrap()));
        }
    }

    #[test]
    fn same_seed_same_catalog() {
        let now = Utc::now();
        let a = sample_products(10, &mut StdRng::seed_from_u64(42), now);
        let b = sample_products(10, &mut StdRng::seed_from_u64(42), now);
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn seeding_twice_only_inserts_once() {
        let gateway = InMemoryProductGateway::new();
        let mut rng = StdRng::seed_from_u64(1);

        let first = seed_products(&gateway, sample_products(10, &mut rng, Utc::now()))
            .await
            .unwrap();
        assert_eq!(first, 10);

        let second = seed_products(&gateway, sample_products(10, &mut rng, Utc::now()))
            .await
            .unwrap();
        assert_eq!(second, 0);
        assert_eq!(gateway.find_many().await.unwrap().len(), 10);
    }

    #[tokio::test]
    async fn seeding_fills_gaps_only() {
        let gateway = InMemoryProductGateway::new();
        let mut rng = StdRng::seed_from_u64(3);
        seed_products(&gateway, sample_products(3, &mut rng, Utc::now()))
            .await
            .unwrap();

        let created = seed_products(&gateway, sample_products(5, &mut rng, Utc::now()))
            .await
            .unwrap();
        assert_eq!(created, 2);

        let names: Vec<String> = gateway
            .find_many()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(
            names,
            vec!["Coffee 0", "Coffee 1", "Coffee 2", "Coffee 3", "Coffee 4"]
        );
    }
}
