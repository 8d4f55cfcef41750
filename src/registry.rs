//! Registered types as seen from generic code, and the manifest of a set of
//! registrations for the downstream binding generator.

use crate::predicate::Predicates;
use crate::profile::Profile;
use crate::vtable::BridgeVTable;

#[cfg(feature = "alloc")]
use alloc::{borrow::ToOwned, string::String, vec::Vec};
#[cfg(feature = "alloc")]
use crate::vtable::Operation;

/// A type registered with `bridge!` or `#[derive(Bridge)]`.
///
/// Implemented by the `Registration` marker in each registration module.
/// Detection only works on concrete types; this trait carries its results
/// into generic code.
pub trait Registered {
    type Target;

    /// Canonical alias.
    const NAME: &'static str;
    /// The Rust type as written at registration.
    const RUST_TYPE: &'static str;
    /// Name of the exported vtable accessor.
    const SYMBOL: &'static str;
    const PREDICATES: Predicates;
    const PROFILE: Profile;
    const VTABLE: BridgeVTable<Self::Target>;

    #[cfg(feature = "alloc")]
    fn manifest() -> TypeManifest
    where
        Self: Sized,
    {
        TypeManifest::of::<Self>()
    }
}

/// Everything the binding generator needs to know about one type.
#[cfg(feature = "alloc")]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "manifest", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeManifest {
    pub name: String,
    pub rust_type: String,
    pub symbol: String,
    pub size: usize,
    pub align: usize,
    pub predicates: Predicates,
    pub profile: Profile,
    /// Filled vtable slots.
    pub operations: Vec<Operation>,
}

#[cfg(feature = "alloc")]
impl TypeManifest {
    pub fn of<R: Registered>() -> Self {
        let vtable = R::VTABLE;
        TypeManifest {
            name: R::NAME.to_owned(),
            rust_type: R::RUST_TYPE.to_owned(),
            symbol: R::SYMBOL.to_owned(),
            size: vtable.size,
            align: vtable.align,
            predicates: R::PREDICATES,
            profile: R::PROFILE,
            operations: vtable.operations().collect(),
        }
    }

    pub fn has(&self, op: Operation) -> bool {
        self.operations.contains(&op)
    }
}

#[cfg(feature = "alloc")]
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("type `{name}` is already registered")]
    DuplicateName { name: String },

    #[error("symbol `{symbol}` is exported by both `{first}` and `{second}`")]
    DuplicateSymbol {
        symbol: String,
        first: String,
        second: String,
    },

    #[cfg(feature = "manifest")]
    #[error("manifest serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// An ordered set of manifests with unique names and symbols.
#[cfg(feature = "alloc")]
#[derive(Clone, Debug, Default)]
pub struct Registry {
    entries: Vec<TypeManifest>,
}

#[cfg(feature = "alloc")]
impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the manifest of `R`.
    pub fn register<R: Registered>(&mut self) -> Result<&mut Self, RegistryError> {
        self.insert(R::manifest())?;
        Ok(self)
    }

    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn insert(&mut self, manifest: TypeManifest) -> Result<(), RegistryError> {
        if self.entries.iter().any(|e| e.name == manifest.name) {
            return Err(RegistryError::DuplicateName {
                name: manifest.name,
            });
        }
        if let Some(first) = self.entries.iter().find(|e| e.symbol == manifest.symbol) {
            return Err(RegistryError::DuplicateSymbol {
                symbol: manifest.symbol,
                first: first.name.clone(),
                second: manifest.name,
            });
        }

        self.entries.push(manifest);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&TypeManifest> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeManifest> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pretty-printed JSON array of manifests, in registration order.
    #[cfg(feature = "manifest")]
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn to_json(&self) -> Result<String, RegistryError> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    /// Parse a JSON array of manifests, applying the same uniqueness checks.
    #[cfg(feature = "manifest")]
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let entries: Vec<TypeManifest> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for manifest in entries {
            registry.insert(manifest)?;
        }

        Ok(registry)
    }
}

#[cfg(feature = "alloc")]
impl<'a> IntoIterator for &'a Registry {
    type Item = &'a TypeManifest;
    type IntoIter = core::slice::Iter<'a, TypeManifest>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
