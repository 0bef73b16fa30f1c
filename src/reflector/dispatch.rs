//! The reflector and its dispatch loop.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use super::{CaseSensitivity, ReflectorConfig};
use crate::error::{ReflectError, Result};
use crate::handler::{Handler, HandlerRegistry, RegistryBuilder};
use crate::inspect::{inspect, PropertySet};

/// Where a reflector reads its properties from.
enum Source<'t, T: ?Sized> {
    /// Re-inspected on every dispatch.
    Target(&'t T),
    /// Caller-supplied, used as is.
    Properties(PropertySet),
}

/// Dispatches the properties of one target to handlers.
///
/// The target is borrowed, and its properties are read again at the start
/// of every [`reflect`](Reflector::reflect) call, so handlers always see
/// current values.
pub struct Reflector<'t, T: ?Sized = PropertySet> {
    source: Source<'t, T>,
    /// Name comparison rule.
    case_sensitivity: CaseSensitivity,
}

impl<'t, T: Serialize + ?Sized> Reflector<'t, T> {
    /// Create a case-insensitive reflector over `target`.
    ///
    /// # Errors
    ///
    /// - [`ReflectError::InvalidArgument`] if `target` serializes to `null`
    /// - [`ReflectError::Inspect`] if `target` cannot be serialized
    pub fn new(target: &'t T) -> Result<Self> {
        Self::with_config(target, ReflectorConfig::default())
    }

    /// Create a reflector over `target` with the given comparison rule.
    ///
    /// # Errors
    ///
    /// Same as [`Reflector::new`].
    pub fn with_case_sensitivity(target: &'t T, case_sensitivity: CaseSensitivity) -> Result<Self> {
        if inspect(target)?.is_none() {
            return Err(ReflectError::InvalidArgument("target"));
        }

        Ok(Self {
            source: Source::Target(target),
            case_sensitivity,
        })
    }

    /// Create a reflector over `target` from a config.
    ///
    /// # Errors
    ///
    /// Same as [`Reflector::new`].
    pub fn with_config(target: &'t T, config: ReflectorConfig) -> Result<Self> {
        Self::with_case_sensitivity(target, config.case_sensitivity)
    }

    /// Get the name comparison rule.
    #[inline]
    pub fn case_sensitivity(&self) -> CaseSensitivity {
        self.case_sensitivity
    }

    /// Read the target's properties as they are now.
    ///
    /// # Errors
    ///
    /// - [`ReflectError::InvalidArgument`] if the target has become `null`
    ///   (possible behind interior mutability)
    /// - [`ReflectError::Inspect`] if the target cannot be serialized
    pub fn properties(&self) -> Result<Cow<'_, PropertySet>> {
        match &self.source {
            Source::Target(target) => inspect(*target)?
                .map(Cow::Owned)
                .ok_or(ReflectError::InvalidArgument("target")),
            Source::Properties(properties) => Ok(Cow::Borrowed(properties)),
        }
    }

    /// Read the target's properties and dispatch each match to its handlers.
    ///
    /// The registry is consumed, so any borrows its handlers hold are
    /// released when this returns.
    ///
    /// # Errors
    ///
    /// - [`ReflectError::TypeMismatch`] from the first typed handler that
    ///   cannot accept its value. Handlers after it are not called.
    /// - Anything [`Reflector::properties`] returns.
    pub fn reflect(&self, mut registry: HandlerRegistry<'_>) -> Result<()> {
        let properties = self.properties()?;
        dispatch_properties(&properties, self.case_sensitivity, &mut registry)
    }

    /// Build a registry with `build`, then dispatch to it.
    ///
    /// # Errors
    ///
    /// Same as [`Reflector::reflect`].
    pub fn reflect_with<'a, F>(&self, build: F) -> Result<()>
    where
        F: FnOnce(&mut RegistryBuilder<'a>),
    {
        let mut builder = RegistryBuilder::new();
        build(&mut builder);
        self.reflect(builder.finish())
    }
}

impl Reflector<'static> {
    /// Create a reflector over caller-supplied properties.
    pub fn from_properties(properties: PropertySet, case_sensitivity: CaseSensitivity) -> Self {
        Self {
            source: Source::Properties(properties),
            case_sensitivity,
        }
    }
}

impl<T: ?Sized> fmt::Debug for Reflector<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match self.source {
            Source::Target(_) => "target",
            Source::Properties(_) => "properties",
        };
        f.debug_struct("Reflector")
            .field("source", &source)
            .field("case_sensitivity", &self.case_sensitivity)
            .finish()
    }
}

/// Call the handlers in `registry` that match a property in `properties`.
pub(crate) fn dispatch_properties(
    properties: &PropertySet,
    case_sensitivity: CaseSensitivity,
    registry: &mut HandlerRegistry<'_>,
) -> Result<()> {
    tracing::debug!(
        "Reflecting {} properties against {} handlers",
        properties.len(),
        registry.len()
    );

    // Several stored names may fold to the same key.
    let mut lookup: HashMap<Cow<'_, str>, Vec<_>> = HashMap::new();
    for (name, handler) in registry.handlers_mut() {
        lookup
            .entry(case_sensitivity.fold(name))
            .or_default()
            .push(handler);
    }

    for property in properties {
        let key = case_sensitivity.fold(&property.name);
        let Some(handlers) = lookup.get_mut(&*key) else {
            continue;
        };

        for handler in handlers.iter_mut() {
            tracing::trace!("Dispatching property '{}'", property.name);
            handler.call(&property.name, &property.value)?;
        }
    }

    Ok(())
}
