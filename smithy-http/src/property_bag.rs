/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A typemap used to store configuration for a single call.
//!
//! Each type can be stored at most once. Middleware stages read and write it to pass state
//! (region, credentials, signing time...) down the stack.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::fmt::Debug;
use std::hash::{BuildHasherDefault, Hasher};
use std::sync::{Arc, Mutex, MutexGuard};

type AnyMap = HashMap<TypeId, NamedType, BuildHasherDefault<IdHasher>>;

struct NamedType {
    name: &'static str,
    value: Box<dyn Any + Send + Sync>,
}

impl NamedType {
    fn as_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.value.downcast_mut()
    }

    fn into_value<T: 'static>(self) -> Option<T> {
        self.value.downcast().map(|t| *t).ok()
    }
}

// With TypeIds as keys, there's no need to hash them. They are already hashes
// themselves, coming from the compiler. The IdHasher just holds the u64 of
// the TypeId, and then returns it, instead of doing any bit fiddling.
#[derive(Default)]
struct IdHasher(u64);

impl Hasher for IdHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.0 = self.0.rotate_left(8) ^ u64::from(*byte);
        }
    }

    #[inline]
    fn write_u64(&mut self, id: u64) {
        self.0 = id;
    }
}

/// A type map of protocol extensions.
///
/// `PropertyBag` can be used by `Request` and `Response` to store
/// extra data derived from the underlying protocol.
#[derive(Default)]
pub struct PropertyBag {
    map: AnyMap,
}

impl PropertyBag {
    /// Create an empty `PropertyBag`.
    #[inline]
    pub fn new() -> PropertyBag {
        PropertyBag {
            map: AnyMap::default(),
        }
    }

    /// Insert a type into this `PropertyBag`.
    ///
    /// If a value of this type already existed, it will be returned.
    pub fn insert<T: 'static + Send + Sync>(&mut self, val: T) -> Option<T> {
        self.map
            .insert(
                TypeId::of::<T>(),
                NamedType {
                    name: std::any::type_name::<T>(),
                    value: Box::new(val),
                },
            )
            .and_then(|val| val.into_value())
    }

    /// Get a reference to a type previously inserted on this `PropertyBag`.
    pub fn get<T: 'static + Send + Sync>(&self) -> Option<&T> {
        self.map
            .get(&TypeId::of::<T>())
            .and_then(|val| val.value.downcast_ref())
    }

    /// Get a mutable reference to a type previously inserted on this `PropertyBag`.
    pub fn get_mut<T: 'static + Send + Sync>(&mut self) -> Option<&mut T> {
        self.map
            .get_mut(&TypeId::of::<T>())
            .and_then(|val| val.as_mut())
    }

    /// Remove a type from this `PropertyBag`.
    ///
    /// If a value of this type existed, it will be returned.
    pub fn remove<T: 'static + Send + Sync>(&mut self) -> Option<T> {
        self.map
            .remove(&TypeId::of::<T>())
            .and_then(|tbox| tbox.into_value())
    }

    /// Returns `true` if a value of type `T` is present.
    pub fn contains<T: 'static + Send + Sync>(&self) -> bool {
        self.map.contains_key(&TypeId::of::<T>())
    }

    /// Clear the `PropertyBag` of all inserted extensions.
    #[inline]
    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl Debug for PropertyBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("PropertyBag");
        let mut names: Vec<_> = self.map.values().map(|v| v.name).collect();
        names.sort_unstable();
        fmt.field("contents", &names);
        fmt.finish()
    }
}

/// A wrapper of [`PropertyBag`] that can be safely shared across threads and cheaply cloned.
///
/// Clones share the same underlying bag.
#[derive(Clone, Debug, Default)]
pub struct SharedPropertyBag(Arc<Mutex<PropertyBag>>);

impl SharedPropertyBag {
    pub fn new() -> Self {
        SharedPropertyBag(Arc::new(Mutex::new(PropertyBag::new())))
    }

    /// Get read access to the property bag.
    ///
    /// The guard must not be held across an `.await`.
    pub fn acquire(&self) -> MutexGuard<'_, PropertyBag> {
        // A panic while the lock was held cannot leave the map itself in a torn state
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Get write access to the property bag.
    pub fn acquire_mut(&self) -> MutexGuard<'_, PropertyBag> {
        self.acquire()
    }
}

impl From<PropertyBag> for SharedPropertyBag {
    fn from(bag: PropertyBag) -> Self {
        SharedPropertyBag(Arc::new(Mutex::new(bag)))
    }
}
