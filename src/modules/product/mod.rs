use crate::di::{Container, Injectable};
use crate::module::Module;
use std::sync::Arc;

pub mod controller;
pub mod entity;
pub mod error;
pub mod gateway;
pub mod memory;
pub mod model;
pub mod seed;
pub mod service;

pub use controller::ProductController;
pub use error::{GatewayError, ServiceError, ServiceResult};
pub use gateway::{GatewayResult, ProductGateway, SeaOrmProductGateway};
pub use memory::InMemoryProductGateway;
pub use model::{CreateProductRequest, Product, ProductChanges, ProductId, UpdateProductRequest};
pub use service::ProductService;

/// Registers [`ProductService`] and [`ProductController`].
///
/// Expects `dyn ProductGateway` to be bound already, see
/// [`ProductModule::provide_gateway`].
pub struct ProductModule;

impl ProductModule {
    /// Register `gateway` and bind it as the container's `dyn ProductGateway`.
    pub fn provide_gateway<G>(container: &mut Container, gateway: G)
    where
        G: ProductGateway + 'static,
    {
        container.register(gateway);
        container.register_trait::<dyn ProductGateway, G, _>(|g| g as Arc<dyn ProductGateway>);
    }
}

impl Module for ProductModule {
    fn register(container: &mut Container) -> crate::Result<()> {
        let service = ProductService::inject(container)?;
        container.register(service);

        let controller = ProductController::inject(container)?;
        container.register(controller);
        Ok(())
    }
}
