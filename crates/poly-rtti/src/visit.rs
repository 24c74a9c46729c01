// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Property visitation and lookup.
//!
//! Visitation order is part of the contract: own properties come in
//! declaration order, and recursive walks go from the root of the chain down
//! to the requested type. Serializers and property grids rely on it.

use std::any::Any;

use crate::error::ReflectError;
use crate::hash::fnv1a_str;
use crate::name::CtStr;
use crate::property::{Property, PropertyInfo, TypedProperty};
use crate::reflect::{Reflect, ReflectBase};

/// Receives the properties of a whole inheritance chain.
///
/// The owner type changes from one level to the next, hence the generic
/// method. Any `FnMut(&PropertyInfo)` closure is a visitor that only needs
/// the owner-agnostic metadata.
pub trait PropertyVisitor {
    /// Called once per property.
    fn visit<O: Reflect>(&mut self, property: &'static Property<O>);
}

impl<F: FnMut(&'static PropertyInfo)> PropertyVisitor for F {
    fn visit<O: Reflect>(&mut self, property: &'static Property<O>) {
        self(property.info())
    }
}

/// Receives each property of an instance together with the sub-object that
/// owns it.
pub trait ValueVisitor {
    /// Called once per property. `owner` is the instance itself or one of
    /// its base sub-objects.
    fn visit<O: Reflect>(&mut self, property: &'static Property<O>, owner: &O);
}

/// Mutable variant of [`ValueVisitor`].
pub trait ValueVisitorMut {
    /// Called once per property with mutable access to its owner.
    fn visit<O: Reflect>(&mut self, property: &'static Property<O>, owner: &mut O);
}

/// Calls `visitor` for each property declared directly by `T`, in
/// declaration order.
pub fn for_each_own_property<T: Reflect>(visitor: impl FnMut(&'static Property<T>)) {
    T::properties().iter().for_each(visitor);
}

/// Calls `visitor` for every property of `T` and its ancestors, root first.
///
/// A type without a reflected base visits only its own properties.
pub fn for_each_property_recursive<T: Reflect, V: PropertyVisitor>(visitor: &mut V) {
    <T as ReflectBase>::visit_chain(visitor);
}

/// Visits every property of `instance`, root first, handing the visitor the
/// sub-object each property belongs to.
pub fn for_each_property_value<T: Reflect, V: ValueVisitor>(instance: &T, visitor: &mut V) {
    instance.visit_chain_values(visitor);
}

/// Mutable variant of [`for_each_property_value`].
pub fn for_each_property_value_mut<T: Reflect, V: ValueVisitorMut>(
    instance: &mut T,
    visitor: &mut V,
) {
    instance.visit_chain_values_mut(visitor);
}

/// Looks up a property declared directly by `T`.
///
/// Base types are not searched. The hash of `name` only pre-selects
/// candidates; the match is confirmed by comparing the full name.
pub fn find_property<T: Reflect>(name: &str) -> Option<&'static Property<T>> {
    let found = find_by_name(T::properties(), name, |property| property.info().ct_name());
    if found.is_none() {
        log::debug!("Type `{}` has no property `{name}`", T::NAME);
    }
    found
}

/// Looks up a property of `T` holding a `V`.
///
/// A property with the right name but another value type counts as not
/// found.
pub fn find_typed_property<T: Reflect, V: Any>(name: &str) -> Option<TypedProperty<T, V>> {
    let property = find_property::<T>(name)?;
    let typed = property.typed::<V>();
    if typed.is_none() {
        log::debug!(
            "Property `{}::{name}` holds `{}`, not `{}`",
            T::NAME,
            property.value_type().name(),
            std::any::type_name::<V>()
        );
    }
    typed
}

/// Strict form of [`find_typed_property`] for callers that expect the
/// property to exist.
pub fn require_property<T: Reflect, V: Any>(name: &str) -> Result<TypedProperty<T, V>, ReflectError> {
    let Some(property) = find_property::<T>(name) else {
        log::warn!("Required property `{}::{name}` is not declared", T::NAME);
        return Err(ReflectError::PropertyNotFound {
            type_name: T::NAME.as_str(),
            property: name.to_owned(),
        });
    };

    property.typed::<V>().ok_or_else(|| {
        log::warn!("Required property `{}::{name}` has the wrong type", T::NAME);
        ReflectError::TypeMismatch {
            type_name: T::NAME.as_str(),
            property: name.to_owned(),
            expected: std::any::type_name::<V>(),
            found: property.value_type().name(),
        }
    })
}

/// Finds the entry whose name is `name`: hash comparison first, then an
/// exact text comparison.
pub(crate) fn find_by_name<'a, E>(
    entries: &'a [E],
    name: &str,
    key: impl Fn(&E) -> CtStr,
) -> Option<&'a E> {
    let hash = fnv1a_str(name);
    entries.iter().find(|&entry| key(entry).matches(name, hash))
}
