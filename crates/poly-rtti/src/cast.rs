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

//! Dynamic type queries over the node chain.
//!
//! These work on `&dyn Object`; any `&T` with `T: Reflect` coerces to it at
//! the call site.

use crate::object::Object;
use crate::reflect::Reflect;

/// Returns `true` iff the dynamic type of `instance` is exactly `T`.
///
/// This is an identity test on type nodes, not a subtype test: an instance
/// of a type derived from `T` is not an instance of `T`. Use [`is_a`] for
/// the subtype relation.
pub fn instance_of<T: Reflect>(instance: &dyn Object) -> bool {
    std::ptr::eq(instance.dynamic_type(), T::type_node())
}

/// Returns `true` iff `T` lies on the chain from the dynamic type of
/// `instance` to its root.
pub fn is_a<T: Reflect>(instance: &dyn Object) -> bool {
    steps_to::<T>(instance).is_some()
}

/// Casts `instance` to `T` if `T` lies on its dynamic-type chain.
///
/// Succeeds for the dynamic type itself and for every ancestor, returning
/// the matching base sub-object; fails for siblings and unrelated types.
/// The final step is a checked `Any` downcast, so a failed cast never
/// reinterprets memory.
pub fn polymorphic_cast<T: Reflect>(instance: &dyn Object) -> Option<&T> {
    let Some(steps) = steps_to::<T>(instance) else {
        log::trace!(
            "Rejected cast of `{}` to `{}`",
            instance.dynamic_type(),
            T::NAME
        );
        return None;
    };

    let mut object = instance;
    for _ in 0..steps {
        object = object.base_object()?;
    }
    object.as_any().downcast_ref::<T>()
}

/// Mutable variant of [`polymorphic_cast`].
pub fn polymorphic_cast_mut<T: Reflect>(instance: &mut dyn Object) -> Option<&mut T> {
    let steps = steps_to::<T>(instance)?;

    let mut object = instance;
    for _ in 0..steps {
        object = object.base_object_mut()?;
    }
    object.as_any_mut().downcast_mut::<T>()
}

/// Distance from the dynamic type of `instance` up to `T`, if `T` is on the chain.
fn steps_to<T: Reflect>(instance: &dyn Object) -> Option<usize> {
    let target = T::type_node();
    instance
        .dynamic_type()
        .ancestors()
        .position(|node| std::ptr::eq(node, target))
}
