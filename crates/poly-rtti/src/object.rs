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

//! The polymorphic view of a reflected instance.

use std::any::Any;

use crate::reflect::{Reflect, ReflectBase};
use crate::type_node::TypeNode;

mod sealed {
    pub trait Sealed {}

    impl<T: crate::Reflect> Sealed for T {}
}

/// A reflected instance seen through its dynamic type.
///
/// Every [`Reflect`] type implements `Object`, so `&dyn Object` reports the
/// node of the concrete type behind the reference, whatever level of the
/// chain it was created from. The trait is sealed.
pub trait Object: sealed::Sealed + Any {
    /// The node of the concrete type of `self`.
    fn dynamic_type(&self) -> &'static TypeNode;

    /// Upcast to `dyn Any`, for checked downcasts.
    fn as_any(&self) -> &dyn Any;

    /// Mutable variant of [`as_any`](Object::as_any).
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// The embedded base sub-object, if the type has a reflected base.
    fn base_object(&self) -> Option<&dyn Object>;

    /// Mutable variant of [`base_object`](Object::base_object).
    fn base_object_mut(&mut self) -> Option<&mut dyn Object>;
}

impl<T: Reflect> Object for T {
    fn dynamic_type(&self) -> &'static TypeNode {
        T::type_node()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn base_object(&self) -> Option<&dyn Object> {
        self.base().map(ReflectBase::as_object)
    }

    fn base_object_mut(&mut self) -> Option<&mut dyn Object> {
        self.base_mut().map(ReflectBase::as_object_mut)
    }
}

impl dyn Object {
    /// See [`instance_of`](crate::instance_of).
    pub fn instance_of<T: Reflect>(&self) -> bool {
        crate::cast::instance_of::<T>(self)
    }

    /// See [`is_a`](crate::is_a).
    pub fn is_a<T: Reflect>(&self) -> bool {
        crate::cast::is_a::<T>(self)
    }

    /// See [`polymorphic_cast`](crate::polymorphic_cast).
    pub fn cast<T: Reflect>(&self) -> Option<&T> {
        crate::cast::polymorphic_cast::<T>(self)
    }

    /// See [`polymorphic_cast_mut`](crate::polymorphic_cast_mut).
    pub fn cast_mut<T: Reflect>(&mut self) -> Option<&mut T> {
        crate::cast::polymorphic_cast_mut::<T>(self)
    }
}
