//! # Coffee Catalog
//!
//! A CRUD HTTP service for a catalog of coffee products.
//!
//! Requests flow `ProductController → ProductService → ProductGateway → store`.
//! The service owns the one business rule: touching a product that does not
//! exist fails with [`ServiceError::NotFound`](modules::product::ServiceError),
//! while store failures pass through as `Infrastructure`.
//!
//! ## Wiring
//!
//! ```rust
//! use coffee_catalog::di::Container;
//! use coffee_catalog::module::Module;
//! use coffee_catalog::modules::product::{InMemoryProductGateway, ProductModule};
//! use coffee_catalog::AppModule;
//!
//! let mut container = Container::new();
//! ProductModule::provide_gateway(&mut container, InMemoryProductGateway::new());
//! ProductModule::register(&mut container).unwrap();
//!
//! let router = AppModule::router(&container).unwrap();
//! # let _ = router;
//! ```
//!
//! In production the container is seeded with a
//! [`Database`](infrastructure::Database) and [`AppModule`] binds the sea-orm
//! gateway over it.

pub mod app_module;
pub mod config;
pub mod di;
pub mod error;
pub mod exception;
pub mod infrastructure;
pub mod interceptor;
pub mod lifecycle;
pub mod module;
pub mod modules;
pub mod pipe;

pub use app_module::AppModule;
pub use error::{AppError, Result};
