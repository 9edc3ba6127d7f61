use crate::di::Container;
use crate::error::Result;

/// Trait for application modules
///
/// A module registers its providers and controllers into the container.
/// Providers it depends on but does not own (a gateway binding, a database
/// handle) must already be present when `register` runs.
///
/// # Example
/// ```
/// use coffee_catalog::di::Container;
/// use coffee_catalog::module::Module;
/// use coffee_catalog::modules::product::{InMemoryProductGateway, ProductController, ProductModule};
///
/// let mut container = Container::new();
/// ProductModule::provide_gateway(&mut container, InMemoryProductGateway::new());
/// ProductModule::register(&mut container).unwrap();
/// assert!(container.contains::<ProductController>());
/// ```
pub trait Module {
    /// Register all providers and controllers in this module
    fn register(container: &mut Container) -> Result<()>;
}
