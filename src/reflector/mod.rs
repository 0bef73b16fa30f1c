//! Reflector module - matches a target's properties against handlers.
//!
//! The [`Reflector`] owns the properties read from a target and dispatches
//! them to a [`HandlerRegistry`](crate::handler::HandlerRegistry):
//! 1. Fold every property name and handler name per [`CaseSensitivity`]
//! 2. Call each handler whose folded name equals a property's folded name
//! 3. Skip everything else
//!
//! # Example
//!
//! ```
//! use argreflect::Reflector;
//! use serde_json::json;
//!
//! let mut email = String::from("some email address");
//! let slot = &mut email;
//!
//! Reflector::new(&json!({ "Email": "john@john.com" }))
//!     .unwrap()
//!     .reflect_with(move |prop| {
//!         prop.named("email", move |v: String| *slot = v);
//!     })
//!     .unwrap();
//!
//! assert_eq!(email, "john@john.com");
//! ```

mod case;
mod config;
mod dispatch;

pub use case::CaseSensitivity;
pub use config::{ReflectorConfig, DEFAULT_CASE_SENSITIVITY};
pub use dispatch::Reflector;

pub(crate) use dispatch::dispatch_properties;
