use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ProductId = i32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub origin: String,
    #[serde(rename = "type")]
    pub coffee_type: String,
    /// Kilograms
    pub weight: f64,
    pub stock: i32,
    pub date_added: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
    pub availability: bool,
    pub average_rating: f64,
}

/// Creation payload. Anything left out falls back to the store defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub coffee_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
}

impl CreateProductRequest {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            origin: None,
            coffee_type: None,
            weight: None,
            stock: None,
            date_added: None,
            availability: None,
            average_rating: None,
        }
    }

    /// Materialize the row a store would persist, given its assigned id and clock.
    pub fn into_product(self, id: ProductId, now: DateTime<Utc>) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            origin: self.origin.unwrap_or_default(),
            coffee_type: self.coffee_type.unwrap_or_default(),
            weight: self.weight.unwrap_or_default(),
            stock: self.stock.unwrap_or_default(),
            date_added: self.date_added.unwrap_or(now),
            date_modified: now,
            availability: self.availability.unwrap_or(true),
            average_rating: self.average_rating.unwrap_or_default(),
        }
    }
}

/// Partial update as it arrives over the wire.
///
/// `id` and `dateAdded` are parsed so that a caller sending them is noticed,
/// but they belong to creation time. [`ProductChanges`] is what reaches the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub coffee_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
}

impl UpdateProductRequest {
    /// Names of creation-owned fields present in this patch.
    pub fn creation_owned_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.id.is_some() {
            fields.push("id");
        }
        if self.date_added.is_some() {
            fields.push("dateAdded");
        }
        fields
    }
}

/// The mutable subset of a product. Fields left as `None` are untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub origin: Option<String>,
    pub coffee_type: Option<String>,
    pub weight: Option<f64>,
    pub stock: Option<i32>,
    pub availability: Option<bool>,
    pub average_rating: Option<f64>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge the supplied fields over `product`.
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(origin) = self.origin {
            product.origin = origin;
        }
        if let Some(coffee_type) = self.coffee_type {
            product.coffee_type = coffee_type;
        }
        if let Some(weight) = self.weight {
            product.weight = weight;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(availability) = self.availability {
            product.availability = availability;
        }
        if let Some(average_rating) = self.average_rating {
            product.average_rating = average_rating;
        }
    }
}

impl From<UpdateProductRequest> for ProductChanges {
    /// Drops `id` and `date_added`.
    fn from(patch: UpdateProductRequest) -> Self {
        Self {
            name: patch.name,
            description: patch.description,
            price: patch.price,
            origin: patch.origin,
            coffee_type: patch.coffee_type,
            weight: patch.weight,
            stock: patch.stock,
            availability: patch.availability,
            average_rating: patch.average_rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_serializes_with_camel_case_keys() {
        let now = Utc::now();
        let product = CreateProductRequest::new("Coffee 1", "Description for Coffee 1", 9.5)
            .into_product(1, now);

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["type"], "");
        assert_eq!(value["availability"], true);
        assert!(value.get("dateAdded").is_some());
        assert!(value.get("averageRating").is_some());
        assert!(value.get("coffee_type").is_none());
    }

    #[test]
    fn creation_payload_applies_store_defaults() {
        let now = Utc::now();
        let req: CreateProductRequest = serde_json::from_value(json!({
            "name": "Test Product",
            "price": 100,
            "description": "A test product",
            "stock": 10
        }))
        .unwrap();

        let product = req.into_product(1, now);
        assert_eq!(product.stock, 10);
        assert_eq!(product.origin, "");
        assert_eq!(product.weight, 0.0);
        assert_eq!(product.date_added, now);
        assert_eq!(product.date_modified, now);
    }

    #[test]
    fn creation_payload_requires_name_price_description() {
        let missing_price = serde_json::from_value::<CreateProductRequest>(json!({
            "name": "Test Product",
            "description": "A test product"
        }));
        assert!(missing_price.is_err());
    }

    #[test]
    fn patch_drops_creation_owned_fields() {
        let patch: UpdateProductRequest = serde_json::from_value(json!({
            "id": 42,
            "dateAdded": "2020-01-01T00:00:00Z",
            "type": "Robusta"
        }))
        .unwrap();
        assert_eq!(patch.creation_owned_fields(), vec!["id", "dateAdded"]);

        let changes = ProductChanges::from(patch);
        assert_eq!(changes.coffee_type.as_deref(), Some("Robusta"));
        assert_eq!(
            changes,
            ProductChanges {
                coffee_type: Some("Robusta".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn changes_merge_only_supplied_fields() {
        let now = Utc::now();
        let mut product = CreateProductRequest::new("Coffee 2", "Dark roast", 12.0)
            .into_product(2, now);
        let before = product.clone();

        ProductChanges {
            stock: Some(0),
            availability: Some(false),
            ..Default::default()
        }
        .apply_to(&mut product);

        assert_eq!(product.stock, 0);
        assert!(!product.availability);
        assert_eq!(product.name, before.name);
        assert_eq!(product.price, before.price);
        assert_eq!(product.date_added, before.date_added);
        assert!(ProductChanges::default().is_empty());
    }
}
