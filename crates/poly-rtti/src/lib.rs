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

//! # Poly RTTI
//!
//! Compile-time type reflection for engine types.
//!
//! A type opts in with `#[derive(Reflect)]`, naming at most one reflected
//! base and an ordered list of properties. Names, hashes and accessors are
//! built in `const` context; the only runtime state is one lazily built
//! [`TypeNode`] per type, used for dynamic type identity and casts.
//!
//! ```rust
//! use poly_rtti::{polymorphic_cast, instance_of, visit, Reflect};
//!
//! #[derive(Reflect)]
//! struct Base {
//!     #[reflect(property)]
//!     count: i32,
//! }
//!
//! #[derive(Reflect)]
//! struct Derived {
//!     #[reflect(base)]
//!     base: Base,
//!     #[reflect(property)]
//!     label: String,
//! }
//!
//! let d = Derived { base: Base { count: 3 }, label: "three".into() };
//!
//! assert!(instance_of::<Derived>(&d));
//! assert!(!instance_of::<Base>(&d));
//! assert_eq!(polymorphic_cast::<Base>(&d).map(|b| b.count), Some(3));
//! assert!(polymorphic_cast::<Derived>(&d.base).is_none());
//!
//! let count = visit::find_typed_property::<Base, i32>("count").unwrap();
//! assert_eq!(*count.get(&d.base), 3);
//! ```

#![warn(missing_docs)]

extern crate self as poly_rtti;

pub mod cast;
#[cfg(feature = "serde")]
pub mod describe;
pub mod error;
pub mod flags;
pub mod hash;
pub mod name;
pub mod object;
pub mod property;
pub mod reflect;
pub mod registry;
pub mod type_node;
pub mod visit;

#[cfg(test)]
mod test_types;

pub use cast::{instance_of, is_a, polymorphic_cast, polymorphic_cast_mut};
pub use error::ReflectError;
pub use flags::PropertyFlags;
pub use name::CtStr;
pub use object::Object;
pub use property::{Property, PropertyInfo, TypedProperty, ValueType};
pub use reflect::{NoBase, Reflect, ReflectBase};
pub use type_node::TypeNode;

/// Derives [`Reflect`] for a struct.
pub use poly_rtti_macros::Reflect;

#[doc(hidden)]
pub use inventory;
