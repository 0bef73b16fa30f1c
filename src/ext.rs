//! Convenience forms that skip building a [`Reflector`] by hand.
//!
//! Unlike [`Reflector::new`], these treat a null target as "no arguments":
//! nothing is dispatched and `Ok(())` is returned.
//!
//! # Example
//!
//! ```
//! use argreflect::Reflect;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Search<'a> {
//!     query: &'a str,
//!     page: u32,
//! }
//!
//! let mut query = String::new();
//! let mut page = 1;
//! let (q, p) = (&mut query, &mut page);
//!
//! Search { query: "rust", page: 2 }
//!     .reflect_with(move |prop| {
//!         prop.named("Query", move |v: String| *q = v)
//!             .named("Page", move |v: u32| *p = v);
//!     })
//!     .unwrap();
//!
//! assert_eq!(query, "rust");
//! assert_eq!(page, 2);
//! ```

use serde::Serialize;

use crate::error::Result;
use crate::handler::{HandlerRegistry, RegistryBuilder};
use crate::inspect::inspect;
use crate::reflector::{dispatch_properties, CaseSensitivity, Reflector};

/// Reflect directly on any serializable value.
pub trait Reflect {
    /// Dispatch this value's properties to `registry`, case-insensitively.
    ///
    /// # Errors
    ///
    /// See [`Reflector::reflect`]. Also fails if the value cannot be serialized.
    fn reflect(&self, registry: HandlerRegistry<'_>) -> Result<()> {
        self.reflect_cased(CaseSensitivity::default(), registry)
    }

    /// Dispatch this value's properties to `registry` under `case_sensitivity`.
    ///
    /// # Errors
    ///
    /// See [`Reflect::reflect`].
    fn reflect_cased(
        &self,
        case_sensitivity: CaseSensitivity,
        registry: HandlerRegistry<'_>,
    ) -> Result<()>;

    /// Build a registry with `build`, then dispatch to it case-insensitively.
    ///
    /// # Errors
    ///
    /// See [`Reflector::reflect_with`]. Also fails if the value cannot be
    /// serialized.
    fn reflect_with<'a, F>(&self, build: F) -> Result<()>
    where
        F: FnOnce(&mut RegistryBuilder<'a>),
    {
        self.reflect_with_cased(CaseSensitivity::default(), build)
    }

    /// Build a registry with `build`, then dispatch to it under
    /// `case_sensitivity`.
    ///
    /// # Errors
    ///
    /// See [`Reflect::reflect_with`].
    fn reflect_with_cased<'a, F>(&self, case_sensitivity: CaseSensitivity, build: F) -> Result<()>
    where
        F: FnOnce(&mut RegistryBuilder<'a>);
}

impl<T: Serialize + ?Sized> Reflect for T {
    fn reflect_cased(
        &self,
        case_sensitivity: CaseSensitivity,
        mut registry: HandlerRegistry<'_>,
    ) -> Result<()> {
        match inspect(self)? {
            Some(properties) => dispatch_properties(&properties, case_sensitivity, &mut registry),
            None => {
                tracing::debug!("Target is null, skipping {} handlers", registry.len());
                Ok(())
            }
        }
    }

    fn reflect_with_cased<'a, F>(&self, case_sensitivity: CaseSensitivity, build: F) -> Result<()>
    where
        F: FnOnce(&mut RegistryBuilder<'a>),
    {
        match inspect(self)? {
            Some(properties) => {
                Reflector::from_properties(properties, case_sensitivity).reflect_with(build)
            }
            None => {
                tracing::debug!("Target is null, skipping handler builder");
                Ok(())
            }
        }
    }
}

/// Dispatch the properties of an optional target to `registry`.
///
/// `None` is a no-op.
///
/// # Errors
///
/// See [`Reflect::reflect`].
pub fn reflect<T: Serialize + ?Sized>(
    target: Option<&T>,
    case_sensitivity: CaseSensitivity,
    registry: HandlerRegistry<'_>,
) -> Result<()> {
    match target {
        Some(target) => target.reflect_cased(case_sensitivity, registry),
        None => Ok(()),
    }
}

/// Build a registry with `build` and dispatch an optional target to it.
///
/// `None` is a no-op and `build` is never called.
///
/// # Errors
///
/// See [`Reflect::reflect_with`].
pub fn reflect_with<'a, T, F>(
    target: Option<&T>,
    case_sensitivity: CaseSensitivity,
    build: F,
) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&mut RegistryBuilder<'a>),
{
    match target {
        Some(target) => target.reflect_with_cased(case_sensitivity, build),
        None => Ok(()),
    }
}
