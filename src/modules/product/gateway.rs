use super::entity;
use super::error::GatewayError;
use super::model::{CreateProductRequest, Product, ProductChanges, ProductId};
use crate::di::{Container, Injectable};
use crate::infrastructure::Database;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, QueryOrder, TransactionTrait};
use std::sync::Arc;

pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

/// Record access for products, keyed by id equality.
///
/// The store owns id assignment and both timestamps: `create` sets
/// `date_added` (unless supplied) and `date_modified`, `update` refreshes
/// `date_modified`.
#[async_trait]
pub trait ProductGateway: Send + Sync {
    async fn create(&self, data: CreateProductRequest) -> GatewayResult<Product>;

    async fn find_many(&self) -> GatewayResult<Vec<Product>>;

    async fn find_unique(&self, id: ProductId) -> GatewayResult<Option<Product>>;

    /// Fails with [`GatewayError::RecordNotFound`] when `id` is absent.
    async fn update(&self, id: ProductId, changes: ProductChanges) -> GatewayResult<Product>;

    /// Returns the row as it was just before deletion.
    async fn delete(&self, id: ProductId) -> GatewayResult<Product>;
}

/// [`ProductGateway`] backed by sea-orm.
pub struct SeaOrmProductGateway {
    db: Arc<Database>,
}

impl SeaOrmProductGateway {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

impl Injectable for SeaOrmProductGateway {
    fn inject(container: &Container) -> crate::Result<Self> {
        Ok(Self::new(container.resolve::<Database>()?))
    }
}

#[async_trait]
impl ProductGateway for SeaOrmProductGateway {
    async fn create(&self, data: CreateProductRequest) -> GatewayResult<Product> {
        let now = Utc::now();
        let row = entity::ActiveModel {
            id: NotSet,
            name: Set(data.name),
            description: Set(data.description),
            price: Set(data.price),
            origin: Set(data.origin.unwrap_or_default()),
            coffee_type: Set(data.coffee_type.unwrap_or_default()),
            weight: Set(data.weight.unwrap_or_default()),
            stock: Set(data.stock.unwrap_or_default()),
            date_added: Set(data.date_added.unwrap_or(now)),
            date_modified: Set(now),
            availability: Set(data.availability.unwrap_or(true)),
            average_rating: Set(data.average_rating.unwrap_or_default()),
        };

        let model = row.insert(self.db.connection()).await?;
        Ok(model.into())
    }

    async fn find_many(&self) -> GatewayResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(self.db.connection())
            .await?;
        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_unique(&self, id: ProductId) -> GatewayResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id)
            .one(self.db.connection())
            .await?;
        Ok(model.map(Product::from))
    }

    async fn update(&self, id: ProductId, changes: ProductChanges) -> GatewayResult<Product> {
        let mut row = entity::ActiveModel {
            id: Unchanged(id),
            date_modified: Set(Utc::now()),
            ..Default::default()
        };
        if let Some(name) = changes.name {
            row.name = Set(name);
        }
        if let Some(description) = changes.description {
            row.description = Set(description);
        }
        if let Some(price) = changes.price {
            row.price = Set(price);
        }
        if let Some(origin) = changes.origin {
            row.origin = Set(origin);
        }
        if let Some(coffee_type) = changes.coffee_type {
            row.coffee_type = Set(coffee_type);
        }
        if let Some(weight) = changes.weight {
            row.weight = Set(weight);
        }
        if let Some(stock) = changes.stock {
            row.stock = Set(stock);
        }
        if let Some(availability) = changes.availability {
            row.availability = Set(availability);
        }
        if let Some(average_rating) = changes.average_rating {
            row.average_rating = Set(average_rating);
        }

        match row.update(self.db.connection()).await {
            Ok(model) => Ok(model.into()),
            Err(DbErr::RecordNotUpdated) => Err(GatewayError::RecordNotFound { id }),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: ProductId) -> GatewayResult<Product> {
        // Read and delete in one transaction so the returned snapshot is the deleted row.
        let txn = self.db.connection().begin().await?;

        let model = entity::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(GatewayError::RecordNotFound { id })?;
        entity::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(model.into())
    }
}
