//! Handler module - property handlers and their registration.
//!
//! Provides:
//! - [`HandlerRegistry`] - maps property names to handlers
//! - [`RegistryBuilder`] - fluent, inline handler declaration
//! - [`TypedHandler`] / [`UntypedHandler`] - adapters behind the [`Handler`] trait
//!
//! # Example
//!
//! ```
//! use argreflect::handler::{HandlerRegistry, RegistryBuilder};
//!
//! let mut registry = HandlerRegistry::new();
//!
//! // Raw value, inspect it yourself
//! registry.add_handler("email", |v| println!("email = {}", v));
//!
//! // Converted value
//! registry.add_typed_handler("page", |n: u32| println!("page = {}", n));
//!
//! // The same thing through the builder
//! let mut builder = RegistryBuilder::from_registry(registry);
//! builder.named("query", |q: String| println!("query = {}", q));
//! let registry = builder.finish();
//!
//! assert_eq!(registry.len(), 3);
//! ```

mod builder;
mod registry;

pub use builder::RegistryBuilder;
pub use registry::{Handler, HandlerRegistry, HandlerResult, TypedHandler, UntypedHandler};
