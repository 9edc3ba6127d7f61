use crate::di::Container;
use crate::error::Result;

/// Trait for types that can be built from the DI container
///
/// Services and controllers resolve their collaborators from the container
/// instead of reaching for process-wide globals.
///
/// # Example
/// ```
/// use coffee_catalog::di::{Container, Injectable};
/// use coffee_catalog::modules::product::{InMemoryProductGateway, ProductModule, ProductService};
///
/// let mut container = Container::new();
/// ProductModule::provide_gateway(&mut container, InMemoryProductGateway::new());
/// let service = ProductService::inject(&container).unwrap();
/// # let _ = service;
/// ```
pub trait Injectable: Sized + Send + Sync + 'static {
    /// Create an instance by resolving dependencies from the container
    ///
    /// # Errors
    /// Returns an error if any required dependency is not found in the container.
    fn inject(container: &Container) -> Result<Self>;
}
