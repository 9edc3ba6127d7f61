use crate::di::{Container, Injectable};
use crate::error::Result;
use crate::module::Module;

/// Assembles the application container in dependency order
///
/// Infrastructure goes in with [`register`](Self::register), then
/// [`provide`](Self::provide) and [`import`](Self::import) build everything
/// that resolves from it. Each step sees what the previous ones added.
///
/// # Example
/// ```
/// use coffee_catalog::di::ContainerBuilder;
/// use coffee_catalog::modules::product::{InMemoryProductGateway, ProductController, ProductModule};
///
/// let container = ContainerBuilder::new()
///     .with(|c| ProductModule::provide_gateway(c, InMemoryProductGateway::new()))
///     .import::<ProductModule>()
///     .unwrap()
///     .build();
/// assert!(container.contains::<ProductController>());
/// ```
#[derive(Default)]
pub struct ContainerBuilder {
    container: Container,
}

impl ContainerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an already-built instance, typically infrastructure such as the database
    pub fn register<T: 'static + Send + Sync>(mut self, instance: T) -> Self {
        self.container.register(instance);
        self
    }

    /// Build `T` from what is registered so far and add it
    pub fn provide<T: Injectable>(mut self) -> Result<Self> {
        let instance = T::inject(&self.container)?;
        self.container.register(instance);
        Ok(self)
    }

    /// Run a module's registration against the container
    pub fn import<M: Module>(mut self) -> Result<Self> {
        M::register(&mut self.container)?;
        Ok(self)
    }

    /// Apply a registration helper that works on the container directly
    pub fn with(mut self, f: impl FnOnce(&mut Container)) -> Self {
        f(&mut self.container);
        self
    }

    pub fn build(self) -> Container {
        self.container
    }
}
