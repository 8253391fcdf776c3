//! Mapping from native Rust types to descriptors.
//!
//! The registry is an injected service: callers construct one, register
//! their message types, and hand it to whatever needs to describe native
//! types. Nothing here is global.

use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::sync::Arc;

use crate::Result;
use crate::descriptor::Descriptor;
use crate::error::Error;
use crate::sequence::TypeSequence;

/// Identity of a native type, plus its name for diagnostics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NativeType {
    /// The type's identity.
    pub id: TypeId,
    /// The type's Rust name, as reported by [`std::any::type_name`].
    pub name: &'static str,
}

impl NativeType {
    /// Returns the native type of `T`.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }
}

/// Looks up the descriptor of a native type.
pub trait TypeRegistry {
    /// Returns the descriptor registered for `id`, if any.
    fn describe(&self, id: TypeId) -> Option<Descriptor>;

    /// Describes each type in order.
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` naming the first type with no descriptor.
    fn describe_all(&self, types: &[NativeType]) -> Result<TypeSequence> {
        types
            .iter()
            .map(|t| {
                self.describe(t.id)
                    .ok_or_else(|| Error::unknown_type(t.name).in_operation("describe_all"))
            })
            .collect()
    }
}

/// Metadata recorded for a registered type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeInfo {
    /// Human-readable name (the registered name, not the Rust path).
    pub name: Arc<str>,
    /// The descriptor produced when this type is described.
    pub descriptor: Descriptor,
}

/// A [`TypeRegistry`] backed by hash maps.
///
/// Built-in scalar types are registered up front at fixed positions. User
/// types are registered by name and described as [`Descriptor::Named`].
#[derive(Clone, Debug, Default)]
pub struct Registry {
    /// Registered entries, in registration order.
    entries: Vec<TypeInfo>,
    /// Map from type identity to entry index.
    by_id: HashMap<TypeId, usize>,
    /// Map from registered name to entry index.
    by_name: HashMap<Arc<str>, usize>,
}

impl Registry {
    /// Number of built-in entries registered by [`Registry::new`].
    pub const BUILTIN_COUNT: usize = 15;

    /// Creates a registry with the built-in scalar types pre-registered.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::default();

        registry.register_builtin::<()>("void", Descriptor::Void);
        registry.register_builtin::<bool>("bool", Descriptor::Bool);
        registry.register_builtin::<i8>("i8", Descriptor::Int);
        registry.register_builtin::<i16>("i16", Descriptor::Int);
        registry.register_builtin::<i32>("i32", Descriptor::Int);
        registry.register_builtin::<i64>("i64", Descriptor::Int);
        registry.register_builtin::<u8>("u8", Descriptor::Int);
        registry.register_builtin::<u16>("u16", Descriptor::Int);
        registry.register_builtin::<u32>("u32", Descriptor::Int);
        registry.register_builtin::<u64>("u64", Descriptor::Int);
        registry.register_builtin::<usize>("usize", Descriptor::Int);
        registry.register_builtin::<f32>("f32", Descriptor::Float);
        registry.register_builtin::<f64>("f64", Descriptor::Float);
        registry.register_builtin::<String>("String", Descriptor::String);
        registry.register_builtin::<&'static str>("str", Descriptor::String);

        debug_assert_eq!(registry.entries.len(), Self::BUILTIN_COUNT);
        registry
    }

    fn register_builtin<T: 'static>(&mut self, name: &str, descriptor: Descriptor) {
        self.insert(TypeId::of::<T>(), name, descriptor);
    }

    fn insert(&mut self, id: TypeId, name: &str, descriptor: Descriptor) -> Descriptor {
        let idx = self.entries.len();
        let name: Arc<str> = name.into();
        self.entries.push(TypeInfo {
            name: name.clone(),
            descriptor: descriptor.clone(),
        });
        self.by_id.insert(id, idx);
        self.by_name.insert(name, idx);
        descriptor
    }

    /// Registers `T` under `name`, returning its descriptor.
    ///
    /// Registering a type twice returns the descriptor from the first
    /// registration; the new name is ignored.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateName` if `name` already belongs to another type,
    /// built-ins included.
    pub fn register<T: ?Sized + 'static>(&mut self, name: &str) -> Result<Descriptor> {
        let id = TypeId::of::<T>();
        if let Some(&idx) = self.by_id.get(&id) {
            return Ok(self.entries[idx].descriptor.clone());
        }
        if self.by_name.contains_key(name) {
            return Err(Error::duplicate_name(name).in_operation("register"));
        }
        Ok(self.insert(id, name, Descriptor::named(name)))
    }

    /// Returns the metadata registered for `id`.
    #[must_use]
    pub fn info(&self, id: TypeId) -> Option<&TypeInfo> {
        self.by_id.get(&id).map(|&idx| &self.entries[idx])
    }

    /// Returns the metadata registered under `name`.
    #[must_use]
    pub fn info_by_name(&self, name: &str) -> Option<&TypeInfo> {
        self.by_name.get(name).map(|&idx| &self.entries[idx])
    }

    /// Returns the number of registered types, built-ins included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered (only for `Registry::default()`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TypeRegistry for Registry {
    fn describe(&self, id: TypeId) -> Option<Descriptor> {
        self.info(id).map(|info| info.descriptor.clone())
    }
}
