use super::error::GatewayError;
use super::gateway::{GatewayResult, ProductGateway};
use super::model::{CreateProductRequest, Product, ProductChanges, ProductId};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Process-local [`ProductGateway`] with the same id and timestamp rules as
/// the database-backed one. Ids start at 1 and are never reused.
#[derive(Default)]
pub struct InMemoryProductGateway {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    rows: BTreeMap<ProductId, Product>,
    last_id: ProductId,
}

impl InMemoryProductGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductGateway for InMemoryProductGateway {
    async fn create(&self, data: CreateProductRequest) -> GatewayResult<Product> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let product = data.into_product(state.last_id, Utc::now());
        state.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn find_many(&self) -> GatewayResult<Vec<Product>> {
        let state = self.state.read().await;
        Ok(state.rows.values().cloned().collect())
    }

    async fn find_unique(&self, id: ProductId) -> GatewayResult<Option<Product>> {
        let state = self.state.read().await;
        Ok(state.rows.get(&id).cloned())
    }

    async fn update(&self, id: ProductId, changes: ProductChanges) -> GatewayResult<Product> {
        let mut state = self.state.write().await;
        let row = state
            .rows
            .get_mut(&id)
            .ok_or(GatewayError::RecordNotFound { id })?;
        changes.apply_to(row);
        row.date_modified = Utc::now();
        Ok(row.clone())
    }

    async fn delete(&self, id: ProductId) -> GatewayResult<Product> {
        let mut state = self.state.write().await;
        state
            .rows
            .remove(&id)
            .ok_or(GatewayError::RecordNotFound { id })
    }
}
