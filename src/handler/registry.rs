//! Handler registry mapping property names to handlers.
//!
//! Names are stored exactly as given. Case folding happens at dispatch time,
//! so `"key"` and `"KEY"` are two distinct entries here that may both fire
//! against the same property when the reflector is case-insensitive.
//!
//! # Example
//!
//! ```
//! use argreflect::handler::HandlerRegistry;
//!
//! let mut first_name = String::from("default");
//! let mut page = 1u32;
//!
//! let mut registry = HandlerRegistry::new();
//! registry.add_typed_handler("firstName", |v: String| first_name = v);
//! registry.add_typed_handler("page", |v: u32| page = v);
//!
//! assert_eq!(registry.len(), 2);
//! assert!(registry.contains("page"));
//! ```

use std::any::type_name;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ReflectError, Result};

/// Result type for handler invocations.
pub type HandlerResult = Result<()>;

/// Trait for property value handlers.
pub trait Handler {
    /// Handle the value of the property named `property`.
    fn call(&mut self, property: &str, value: &Value) -> HandlerResult;
}

/// Wrapper that converts the raw value to `T` before calling the handler.
pub struct TypedHandler<F, T>
where
    F: FnMut(T),
    T: DeserializeOwned,
{
    handler: F,
    _phantom: PhantomData<fn(T)>,
}

impl<F, T> TypedHandler<F, T>
where
    F: FnMut(T),
    T: DeserializeOwned,
{
    /// Create a new typed handler.
    pub fn new(handler: F) -> Self {
        Self {
            handler,
            _phantom: PhantomData,
        }
    }
}

impl<F, T> Handler for TypedHandler<F, T>
where
    F: FnMut(T),
    T: DeserializeOwned,
{
    fn call(&mut self, property: &str, value: &Value) -> HandlerResult {
        let parsed = T::deserialize(value).map_err(|source| ReflectError::TypeMismatch {
            property: property.to_string(),
            expected: type_name::<T>(),
            source,
        })?;

        (self.handler)(parsed);
        Ok(())
    }
}

/// Wrapper passing the raw value through untouched.
pub struct UntypedHandler<F>
where
    F: FnMut(&Value),
{
    handler: F,
}

impl<F> UntypedHandler<F>
where
    F: FnMut(&Value),
{
    /// Create a new untyped handler.
    pub fn new(handler: F) -> Self {
        Self { handler }
    }
}

impl<F> Handler for UntypedHandler<F>
where
    F: FnMut(&Value),
{
    fn call(&mut self, _property: &str, value: &Value) -> HandlerResult {
        (self.handler)(value);
        Ok(())
    }
}

/// Registry mapping property names to handlers.
///
/// The `'a` lifetime is the lifetime of whatever the handlers borrow, which
/// lets a handler assign straight into a caller's local variable.
pub struct HandlerRegistry<'a> {
    /// Handlers by exact property name.
    handlers: HashMap<String, Box<dyn Handler + 'a>>,
}

impl<'a> HandlerRegistry<'a> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler receiving the raw property value.
    ///
    /// Replaces any handler already stored under exactly the same name.
    pub fn add_handler<F>(&mut self, name: &str, handler: F)
    where
        F: FnMut(&Value) + 'a,
    {
        self.insert(name, Box::new(UntypedHandler::new(handler)))
    }

    /// Register a handler receiving the property value converted to `T`.
    ///
    /// Conversion happens at dispatch time. A value that cannot be converted
    /// fails the dispatch with [`ReflectError::TypeMismatch`].
    pub fn add_typed_handler<T, F>(&mut self, name: &str, handler: F)
    where
        T: DeserializeOwned + 'a,
        F: FnMut(T) + 'a,
    {
        self.insert(name, Box::new(TypedHandler::new(handler)))
    }

    fn insert(&mut self, name: &str, handler: Box<dyn Handler + 'a>) {
        if self.handlers.insert(name.to_string(), handler).is_some() {
            tracing::debug!("Replaced handler for property '{}'", name);
        }
    }

    /// Check if a handler is stored under exactly this name.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Remove the handler stored under exactly this name.
    ///
    /// Returns `true` if a handler was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.handlers.remove(name).is_some()
    }

    /// Iterate over the registered names (unordered).
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.handlers.keys().map(String::as_str)
    }

    /// Number of registered handlers.
    #[inline]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if the registry is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Mutable access to every handler, for dispatch.
    pub(crate) fn handlers_mut(
        &mut self,
    ) -> impl Iterator<Item = (&str, &mut (dyn Handler + 'a))> + '_ {
        self.handlers
            .iter_mut()
            .map(|(name, handler)| (name.as_str(), &mut **handler))
    }
}

impl Default for HandlerRegistry<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HandlerRegistry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("names", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
