use super::error::{ServiceError, ServiceResult};
use super::gateway::ProductGateway;
use super::model::{CreateProductRequest, Product, ProductChanges, ProductId, UpdateProductRequest};
use crate::di::{Container, Injectable};
use std::sync::Arc;

/// Product lifecycle rules on top of a [`ProductGateway`].
///
/// Mutating or deleting a product first checks that it exists, so a missing
/// id always surfaces as [`ServiceError::NotFound`]. Nothing is cached between
/// calls; every operation reads from the gateway.
pub struct ProductService {
    gateway: Arc<dyn ProductGateway>,
}

impl Injectable for ProductService {
    fn inject(container: &Container) -> crate::Result<Self> {
        Ok(Self::new(container.resolve_trait::<dyn ProductGateway>()?))
    }
}

impl ProductService {
    pub fn new(gateway: Arc<dyn ProductGateway>) -> Self {
        Self { gateway }
    }

    pub async fn create(&self, req: CreateProductRequest) -> ServiceResult<Product> {
        tracing::info!(name = %req.name, "Creating product");
        let product = self.gateway.create(req).await?;
        Ok(product)
    }

    pub async fn find_all(&self) -> ServiceResult<Vec<Product>> {
        tracing::info!("Listing products");
        let products = self.gateway.find_many().await?;
        Ok(products)
    }

    pub async fn find_one(&self, id: ProductId) -> ServiceResult<Product> {
        tracing::info!(id, "Fetching product");
        match self.gateway.find_unique(id).await? {
            Some(product) => Ok(product),
            None => {
                tracing::warn!(id, "Product not found");
                Err(ServiceError::NotFound { id })
            }
        }
    }

    /// Merge `patch` over an existing product.
    ///
    /// `id` and `dateAdded` in the patch are discarded.
    pub async fn update(&self, id: ProductId, patch: UpdateProductRequest) -> ServiceResult<Product> {
        self.find_one(id).await?;

        let ignored = patch.creation_owned_fields();
        if !ignored.is_empty() {
            tracing::warn!(id, fields = ?ignored, "Ignoring creation-owned fields in product patch");
        }

        tracing::info!(id, "Updating product");
        let product = self
            .gateway
            .update(id, ProductChanges::from(patch))
            .await?;
        Ok(product)
    }

    /// Delete a product, returning its value from just before deletion.
    pub async fn remove(&self, id: ProductId) -> ServiceResult<Product> {
        self.find_one(id).await?;

        tracing::info!(id, "Removing product");
        let product = self.gateway.delete(id).await?;
        Ok(product)
    }
}
