//! Fluent builder for declaring handlers inline.
//!
//! [`RegistryBuilder`] is what a builder closure receives from
//! [`Reflector::reflect_with`](crate::Reflector::reflect_with).

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::HandlerRegistry;

/// Builder adding name/handler pairs to a [`HandlerRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder<'a> {
    registry: HandlerRegistry<'a>,
}

impl<'a> RegistryBuilder<'a> {
    /// Create a builder over a new empty registry.
    pub fn new() -> Self {
        Self::from_registry(HandlerRegistry::new())
    }

    /// Wrap a pre-existing registry.
    pub fn from_registry(registry: HandlerRegistry<'a>) -> Self {
        Self { registry }
    }

    /// Add a handler receiving the property value converted to `T`.
    ///
    /// See [`HandlerRegistry::add_typed_handler`].
    pub fn named<T, F>(&mut self, name: &str, handler: F) -> &mut Self
    where
        T: DeserializeOwned + 'a,
        F: FnMut(T) + 'a,
    {
        self.registry.add_typed_handler(name, handler);
        self
    }

    /// Add a handler receiving the raw property value.
    ///
    /// See [`HandlerRegistry::add_handler`].
    pub fn named_value<F>(&mut self, name: &str, handler: F) -> &mut Self
    where
        F: FnMut(&Value) + 'a,
    {
        self.registry.add_handler(name, handler);
        self
    }

    /// Finish building and return the registry.
    pub fn finish(self) -> HandlerRegistry<'a> {
        self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_registers_handlers() {
        let mut builder = RegistryBuilder::new();

        builder
            .named("firstName", |_v: String| {})
            .named("isCitizen", |_v: bool| {})
            .named_value("email", |_v| {});

        let registry = builder.finish();
        assert_eq!(registry.len(), 3);
        assert!(registry.contains("firstName"));
        assert!(registry.contains("isCitizen"));
        assert!(registry.contains("email"));
    }

    #[test]
    fn test_empty_name_registered() {
        let mut builder = RegistryBuilder::new();

        builder.named("", |_v: String| {}).named("key", |_v: String| {});

        let registry = builder.finish();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains(""));
    }

    #[test]
    fn test_from_registry_keeps_existing_handlers() {
        let mut registry = HandlerRegistry::new();
        registry.add_handler("existing", |_v| {});

        let mut builder = RegistryBuilder::from_registry(registry);
        builder.named("added", |_v: i64| {});

        let registry = builder.finish();
        assert!(registry.contains("existing"));
        assert!(registry.contains("added"));
    }

    #[test]
    fn test_named_overwrites_same_name() {
        let mut builder = RegistryBuilder::new();

        builder
            .named("key", |_v: String| {})
            .named_value("key", |_v| {});

        assert_eq!(builder.finish().len(), 1);
    }
}
