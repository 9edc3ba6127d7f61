//! sea-orm mapping of the `products` table

use super::model::Product;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub origin: String,
    #[sea_orm(column_name = "type")]
    pub coffee_type: String,
    pub weight: f64,
    pub stock: i32,
    pub date_added: ChronoDateTimeUtc,
    pub date_modified: ChronoDateTimeUtc,
    pub availability: bool,
    pub average_rating: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            origin: model.origin,
            coffee_type: model.coffee_type,
            weight: model.weight,
            stock: model.stock,
            date_added: model.date_added,
            date_modified: model.date_modified,
            availability: model.availability,
            average_rating: model.average_rating,
        }
    }
}
