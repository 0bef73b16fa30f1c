//! # argreflect
//!
//! Named, optional arguments for Rust functions.
//!
//! A function takes a lightly-structured value (a small `#[derive(Serialize)]`
//! struct, a `serde_json::json!` object, a string-keyed map) and picks out the
//! properties it cares about by registering a handler per property name.
//! Every property whose name matches a handler is passed to it; everything
//! else is ignored.
//!
//! ## Architecture
//!
//! - **Inspect**: target → [`PropertySet`] of `(name, value)` pairs via `Serialize`
//! - **Handlers**: [`HandlerRegistry`] of untyped (`&Value`) or typed (`T: Deserialize`) callbacks
//! - **Dispatch**: [`Reflector`] matches names under a [`CaseSensitivity`] rule
//!   (case-insensitive by default) and calls each match in turn
//!
//! ## Example
//!
//! ```
//! use argreflect::Reflect;
//! use serde::Serialize;
//!
//! fn set_up_user<O: Serialize>(options: &O) -> argreflect::Result<(String, bool)> {
//!     let mut first_name = String::from("some first name");
//!     let mut is_citizen = false;
//!     let (f, c) = (&mut first_name, &mut is_citizen);
//!
//!     options.reflect_with(move |prop| {
//!         prop.named("firstname", move |v: String| *f = v)
//!             .named("iscitizen", move |v: bool| *c = v);
//!     })?;
//!
//!     Ok((first_name, is_citizen))
//! }
//!
//! #[derive(Serialize)]
//! #[serde(rename_all = "camelCase")]
//! struct Options {
//!     first_name: &'static str,
//!     is_citizen: bool,
//! }
//!
//! let user = set_up_user(&Options { first_name: "John", is_citizen: true }).unwrap();
//! assert_eq!(user, ("John".to_string(), true));
//! ```

pub mod error;
pub mod handler;
pub mod inspect;
pub mod reflector;

mod ext;

pub use error::{ReflectError, Result};
pub use ext::{reflect, reflect_with, Reflect};
pub use handler::{HandlerRegistry, RegistryBuilder};
pub use inspect::{Property, PropertySet};
pub use reflector::{CaseSensitivity, Reflector, ReflectorConfig};
