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

//! Property descriptors: metadata plus a member accessor for one field.
//!
//! Three levels of typing are available:
//!
//! - [`PropertyInfo`] knows neither the owner nor the value type. It is what a
//!   [`TypeNode`](crate::TypeNode) stores and what owner-agnostic tooling reads.
//! - [`Property<O>`] knows its owner and exposes the value as `dyn Any`.
//!   A type's registry is a `static` array of these, returned by
//!   [`Reflect::properties`].
//! - [`TypedProperty<O, V>`] knows both. It can only be obtained once the value
//!   type has been checked, so its accessors return `&V` directly.

use std::any::{Any, TypeId};
use std::fmt;
use std::marker::PhantomData;

use crate::cast::{polymorphic_cast, polymorphic_cast_mut};
use crate::error::ReflectError;
use crate::flags::PropertyFlags;
use crate::name::CtStr;
use crate::object::Object;
use crate::reflect::Reflect;

/// Identity of a property's value type.
///
/// Stored as function pointers so that it can be built in `const` context.
#[derive(Clone, Copy)]
pub struct ValueType {
    id: fn() -> TypeId,
    name: fn() -> &'static str,
}

impl ValueType {
    /// Describes the value type `V`.
    pub const fn of<V: Any>() -> Self {
        Self {
            id: TypeId::of::<V>,
            name: std::any::type_name::<V>,
        }
    }

    /// The [`TypeId`] of the value type.
    pub fn id(&self) -> TypeId {
        (self.id)()
    }

    /// The Rust name of the value type, for diagnostics only.
    pub fn name(&self) -> &'static str {
        (self.name)()
    }

    /// Returns `true` if the value type is exactly `V`.
    pub fn is<V: Any>(&self) -> bool {
        self.id() == TypeId::of::<V>()
    }
}

impl PartialEq for ValueType {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for ValueType {}

impl fmt::Debug for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Owner-agnostic metadata of a property: name, hash, flags and value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyInfo {
    name: CtStr,
    flags: PropertyFlags,
    value: ValueType,
}

impl PropertyInfo {
    /// Creates the metadata record. The hash comes from `name`.
    pub const fn new(name: CtStr, flags: PropertyFlags, value: ValueType) -> Self {
        Self { name, flags, value }
    }

    /// The property name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name.as_str()
    }

    /// The FNV-1a hash of the name.
    #[inline]
    pub const fn hash(&self) -> u64 {
        self.name.hash()
    }

    /// The name together with its hash.
    #[inline]
    pub const fn ct_name(&self) -> CtStr {
        self.name
    }

    /// The property flags.
    #[inline]
    pub const fn flags(&self) -> PropertyFlags {
        self.flags
    }

    /// The value type of the property.
    #[inline]
    pub const fn value_type(&self) -> ValueType {
        self.value
    }
}

/// A property of the owner type `O`, with its value exposed as `dyn Any`.
///
/// The accessors are plain function pointers, so a `Property` is built in
/// `const` context and the registry of a type is a `static` array that costs
/// no runtime initialization. `#[derive(Reflect)]` generates these.
pub struct Property<O: 'static> {
    info: PropertyInfo,
    get: fn(&O) -> &dyn Any,
    get_mut: fn(&mut O) -> &mut dyn Any,
}

impl<O: 'static> Property<O> {
    /// Binds a pair of accessors to a name, flags and value type.
    ///
    /// For hand-written [`Reflect`] impls. `info.value_type()` must describe
    /// the member both accessors return; the registry must live in a `static`
    /// so that lookups hand out stable references.
    ///
    /// # Panics
    ///
    /// Never panics itself, but a descriptor whose value type disagrees with
    /// its accessors makes [`TypedProperty::get`] and
    /// [`TypedProperty::get_mut`] panic. Descriptors generated by
    /// `#[derive(Reflect)]` always agree.
    pub const fn new(
        info: PropertyInfo,
        get: fn(&O) -> &dyn Any,
        get_mut: fn(&mut O) -> &mut dyn Any,
    ) -> Self {
        Self { info, get, get_mut }
    }

    /// The owner-agnostic metadata of this property.
    #[inline]
    pub const fn info(&self) -> &PropertyInfo {
        &self.info
    }

    /// The property name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.info.name()
    }

    /// The FNV-1a hash of the name.
    #[inline]
    pub const fn hash(&self) -> u64 {
        self.info.hash()
    }

    /// The property flags.
    #[inline]
    pub const fn flags(&self) -> PropertyFlags {
        self.info.flags()
    }

    /// The value type of the property.
    #[inline]
    pub const fn value_type(&self) -> ValueType {
        self.info.value_type()
    }

    /// Reads the member off `owner`.
    #[inline]
    pub fn get<'a>(&self, owner: &'a O) -> &'a dyn Any {
        (self.get)(owner)
    }

    /// Mutable access to the member, ignoring [`PropertyFlags::READ_ONLY`].
    #[inline]
    pub fn get_mut<'a>(&self, owner: &'a mut O) -> &'a mut dyn Any {
        (self.get_mut)(owner)
    }

    /// Reads the member as a `V`, or `None` if the property holds another type.
    pub fn get_as<'a, V: Any>(&self, owner: &'a O) -> Option<&'a V> {
        self.get(owner).downcast_ref::<V>()
    }

    /// Mutable variant of [`get_as`](Self::get_as).
    pub fn get_as_mut<'a, V: Any>(&self, owner: &'a mut O) -> Option<&'a mut V> {
        self.get_mut(owner).downcast_mut::<V>()
    }

    /// Narrows this property to a [`TypedProperty`] if it holds a `V`.
    pub fn typed<V: Any>(&'static self) -> Option<TypedProperty<O, V>> {
        self.value_type().is::<V>().then_some(TypedProperty {
            property: self,
            _value: PhantomData,
        })
    }
}

impl<O: Reflect> Property<O> {
    /// Writes `value` into the member and returns the previous value.
    ///
    /// Fails on a `READ_ONLY` property or when `V` is not the value type.
    pub fn set<V: Any>(&self, owner: &mut O, value: V) -> Result<V, ReflectError> {
        if self.flags().contains(PropertyFlags::READ_ONLY) {
            return Err(ReflectError::ReadOnly {
                type_name: O::NAME.as_str(),
                property: self.name(),
            });
        }
        match self.get_as_mut::<V>(owner) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(ReflectError::TypeMismatch {
                type_name: O::NAME.as_str(),
                property: self.name().to_owned(),
                expected: std::any::type_name::<V>(),
                found: self.value_type().name(),
            }),
        }
    }
}

impl<O: 'static> fmt::Debug for Property<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name())
            .field("hash", &format_args!("{:#018x}", self.hash()))
            .field("flags", &self.flags())
            .field("value_type", &self.value_type())
            .finish()
    }
}

/// A property of owner `O` whose value type is statically known to be `V`.
///
/// Obtained from [`Property::typed`] or the lookup functions in
/// [`visit`](crate::visit).
pub struct TypedProperty<O: 'static, V: 'static> {
    property: &'static Property<O>,
    _value: PhantomData<fn() -> V>,
}

impl<O: 'static, V: Any> TypedProperty<O, V> {
    /// The underlying value-erased descriptor.
    #[inline]
    pub fn erased(&self) -> &'static Property<O> {
        self.property
    }

    /// The property name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.property.name()
    }

    /// The FNV-1a hash of the name.
    #[inline]
    pub fn hash(&self) -> u64 {
        self.property.hash()
    }

    /// The property flags.
    #[inline]
    pub fn flags(&self) -> PropertyFlags {
        self.property.flags()
    }

    /// Reads the member off `owner`.
    ///
    /// # Panics
    ///
    /// Panics if the descriptor was built by hand with a value type that
    /// disagrees with its accessor (see [`Property::new`]).
    pub fn get<'a>(&self, owner: &'a O) -> &'a V {
        match self.property.get_as::<V>(owner) {
            Some(value) => value,
            None => panic!("accessor of `{}` disagrees with its value type", self.name()),
        }
    }

    /// Mutable access to the member, ignoring [`PropertyFlags::READ_ONLY`].
    ///
    /// # Panics
    ///
    /// Same condition as [`get`](Self::get).
    pub fn get_mut<'a>(&self, owner: &'a mut O) -> &'a mut V {
        let name = self.name();
        match self.property.get_as_mut::<V>(owner) {
            Some(value) => value,
            None => panic!("accessor of `{name}` disagrees with its value type"),
        }
    }
}

impl<O: 'static, V: Any + Clone> TypedProperty<O, V> {
    /// Reads a copy of the member off `owner`.
    pub fn get_cloned(&self, owner: &O) -> V {
        self.get(owner).clone()
    }
}

impl<O: Reflect, V: Any> TypedProperty<O, V> {
    /// Reads the member off any instance whose dynamic type is `O` or
    /// derives from it, reaching the `O` sub-object through the base chain.
    ///
    /// Returns `None` when `O` is not on the chain of `instance`.
    pub fn get_in<'a>(&self, instance: &'a dyn Object) -> Option<&'a V> {
        polymorphic_cast::<O>(instance).map(|owner| self.get(owner))
    }

    /// Mutable variant of [`get_in`](Self::get_in), ignoring
    /// [`PropertyFlags::READ_ONLY`].
    pub fn get_in_mut<'a>(&self, instance: &'a mut dyn Object) -> Option<&'a mut V> {
        polymorphic_cast_mut::<O>(instance).map(|owner| self.get_mut(owner))
    }

    /// Writes `value` into the member and returns the previous value.
    ///
    /// Fails only on a `READ_ONLY` property.
    pub fn set(&self, owner: &mut O, value: V) -> Result<V, ReflectError> {
        self.property.set(owner, value)
    }
}

impl<O: 'static, V: 'static> Clone for TypedProperty<O, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O: 'static, V: 'static> Copy for TypedProperty<O, V> {}

impl<O: 'static, V: 'static> fmt::Debug for TypedProperty<O, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypedProperty").field(self.property).finish()
    }
}
