use crate::di::{Container, Injectable};
use crate::interceptor::{LoggingInterceptor, SharedInterceptorLayer};
use crate::module::Module;
use crate::modules::product::{ProductController, ProductModule, SeaOrmProductGateway};
use axum::Router;

/// Root application module
///
/// Binds the sea-orm gateway over the registered [`Database`](crate::infrastructure::Database)
/// and pulls in every feature module.
pub struct AppModule;

impl Module for AppModule {
    fn register(container: &mut Container) -> crate::Result<()> {
        let gateway = SeaOrmProductGateway::inject(container)?;
        ProductModule::provide_gateway(container, gateway);
        ProductModule::register(container)
    }
}

impl AppModule {
    /// Mount every controller found in `container` behind the request logger.
    pub fn router(container: &Container) -> crate::Result<Router> {
        let products = container.resolve::<ProductController>()?;

        Ok(Router::new()
            .merge(ProductController::router(products))
            .layer(SharedInterceptorLayer::new(vec![Box::new(LoggingInterceptor)])))
    }
}
