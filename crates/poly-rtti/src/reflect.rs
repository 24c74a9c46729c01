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

//! The [`Reflect`] trait: the compile-time type descriptor of a reflected type.

use std::any::Any;

use crate::name::CtStr;
use crate::object::Object;
use crate::property::Property;
use crate::type_node::TypeNode;
use crate::visit::{PropertyVisitor, ValueVisitor, ValueVisitorMut};

/// A type that declares its name, its single reflected base and its properties.
///
/// Implement it with `#[derive(Reflect)]`:
///
/// ```rust
/// use poly_rtti::{PropertyFlags, Reflect};
///
/// #[derive(Reflect)]
/// struct Base {
///     #[reflect(property)]
///     count: i32,
/// }
///
/// #[derive(Reflect)]
/// struct Derived {
///     #[reflect(base)]
///     base: Base,
///     #[reflect(property(flags(DONT_SERIALIZE)))]
///     label: String,
/// }
///
/// assert_eq!(Derived::NAME.as_str(), "Derived");
/// assert!(std::ptr::eq(
///     Derived::type_node().base().unwrap(),
///     Base::type_node(),
/// ));
/// assert_eq!(Derived::properties()[0].flags(), PropertyFlags::DONT_SERIALIZE);
/// ```
///
/// Inheritance is modelled by composition: the derived type embeds its base
/// as a field, and [`base`](Reflect::base) hands that field out. Because the
/// base must be reachable from `&self`, a type cannot claim a base it does not
/// contain; such a declaration does not compile.
///
/// # Rejected declarations
///
/// A base field whose type is not reflected:
///
/// ```compile_fail
/// use poly_rtti::Reflect;
///
/// struct Plain {
///     x: i32,
/// }
///
/// #[derive(Reflect)]
/// struct Wrapper {
///     #[reflect(base)]
///     inner: Plain,
/// }
/// ```
///
/// Two base fields:
///
/// ```compile_fail
/// use poly_rtti::Reflect;
///
/// #[derive(Reflect)]
/// struct Left {
///     #[reflect(property)]
///     l: i32,
/// }
///
/// #[derive(Reflect)]
/// struct Right {
///     #[reflect(property)]
///     r: i32,
/// }
///
/// #[derive(Reflect)]
/// struct Both {
///     #[reflect(base)]
///     left: Left,
///     #[reflect(base)]
///     right: Right,
/// }
/// ```
///
/// Two properties with the same reflected name:
///
/// ```compile_fail
/// use poly_rtti::Reflect;
///
/// #[derive(Reflect)]
/// struct Twice {
///     #[reflect(property)]
///     speed: f32,
///     #[reflect(property(rename = "speed"))]
///     max_speed: f32,
/// }
/// ```
///
/// Enums, generic structs, and tuple fields without a reflected name:
///
/// ```compile_fail
/// use poly_rtti::Reflect;
///
/// #[derive(Reflect)]
/// enum Shape {
///     Circle,
///     Square,
/// }
/// ```
///
/// ```compile_fail
/// use poly_rtti::Reflect;
///
/// #[derive(Reflect)]
/// struct Slot<T: 'static> {
///     #[reflect(property)]
///     value: T,
/// }
/// ```
///
/// ```compile_fail
/// use poly_rtti::Reflect;
///
/// #[derive(Reflect)]
/// struct Meters(#[reflect(property)] f32);
/// ```
///
/// The same tuple field with a `rename` is accepted:
///
/// ```rust
/// use poly_rtti::Reflect;
///
/// #[derive(Reflect)]
/// struct Meters(#[reflect(property(rename = "value"))] f32);
///
/// assert_eq!(Meters::properties()[0].get_as::<f32>(&Meters(2.5)), Some(&2.5));
/// ```
pub trait Reflect: Any + Sized {
    /// The reflected parent type, or [`NoBase`].
    type Base: ReflectBase;

    /// The reflected name and its hash.
    const NAME: CtStr;

    /// Properties declared by this type itself, in declaration order.
    ///
    /// Inherited properties are not repeated here. The slice is a `static`:
    /// every call returns the same descriptors at the same addresses.
    fn properties() -> &'static [Property<Self>];

    /// The process-wide node of this type.
    ///
    /// Built on first access behind a once-initialization guard and never
    /// dropped. The returned address identifies the type.
    fn type_node() -> &'static TypeNode;

    /// The embedded base sub-object, or `None` when `Base` is [`NoBase`].
    fn base(&self) -> Option<&Self::Base>;

    /// Mutable variant of [`base`](Reflect::base).
    fn base_mut(&mut self) -> Option<&mut Self::Base>;
}

/// The "no reflected base" sentinel.
///
/// It has no values, so `Option<&NoBase>` is always `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoBase {}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::NoBase {}
    impl<T: super::Reflect> Sealed for T {}
}

/// Anything that can stand as a [`Reflect::Base`]: every reflected type, and
/// [`NoBase`].
///
/// This trait is sealed. Its methods drive the walks over an inheritance
/// chain; call the functions in [`visit`](crate::visit) instead.
pub trait ReflectBase: sealed::Sealed + Any + Sized {
    /// The node of this level, `None` for [`NoBase`].
    fn node() -> Option<&'static TypeNode>;

    /// Visits the properties of this level and all its ancestors, base first.
    fn visit_chain<V: PropertyVisitor>(visitor: &mut V);

    /// Visits the property values of `self` and its base sub-objects, base first.
    fn visit_chain_values<V: ValueVisitor>(&self, visitor: &mut V);

    /// Mutable variant of [`visit_chain_values`](ReflectBase::visit_chain_values).
    fn visit_chain_values_mut<V: ValueVisitorMut>(&mut self, visitor: &mut V);

    /// Views this level as a polymorphic [`Object`].
    fn as_object(&self) -> &dyn Object;

    /// Mutable variant of [`as_object`](ReflectBase::as_object).
    fn as_object_mut(&mut self) -> &mut dyn Object;
}

impl ReflectBase for NoBase {
    fn node() -> Option<&'static TypeNode> {
        None
    }

    fn visit_chain<V: PropertyVisitor>(_visitor: &mut V) {}

    fn visit_chain_values<V: ValueVisitor>(&self, _visitor: &mut V) {
        match *self {}
    }

    fn visit_chain_values_mut<V: ValueVisitorMut>(&mut self, _visitor: &mut V) {
        match *self {}
    }

    fn as_object(&self) -> &dyn Object {
        match *self {}
    }

    fn as_object_mut(&mut self) -> &mut dyn Object {
        match *self {}
    }
}

impl<T: Reflect> ReflectBase for T {
    fn node() -> Option<&'static TypeNode> {
        Some(T::type_node())
    }

    fn visit_chain<V: PropertyVisitor>(visitor: &mut V) {
        T::Base::visit_chain(visitor);
        for property in T::properties() {
            visitor.visit(property);
        }
    }

    fn visit_chain_values<V: ValueVisitor>(&self, visitor: &mut V) {
        if let Some(base) = self.base() {
            base.visit_chain_values(visitor);
        }
        for property in T::properties() {
            visitor.visit(property, self);
        }
    }

    fn visit_chain_values_mut<V: ValueVisitorMut>(&mut self, visitor: &mut V) {
        if let Some(base) = self.base_mut() {
            base.visit_chain_values_mut(visitor);
        }
        for property in T::properties() {
            visitor.visit(property, &mut *self);
        }
    }

    fn as_object(&self) -> &dyn Object {
        self
    }

    fn as_object_mut(&mut self) -> &mut dyn Object {
        self
    }
}
