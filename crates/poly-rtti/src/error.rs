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

//! Errors reported by the reflection layer.

use thiserror::Error;

/// An error raised by a strict property lookup or a reflected write.
///
/// A wrong base type is not represented here: it is rejected when the type
/// is declared and never reaches runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReflectError {
    /// The type declares no property with this name at its own level.
    #[error("type `{type_name}` has no property named `{property}`")]
    PropertyNotFound {
        /// Reflected name of the queried type.
        type_name: &'static str,
        /// The requested property name.
        property: String,
    },
    /// A property with this name exists but holds a different value type.
    #[error("property `{type_name}::{property}` holds `{found}`, not `{expected}`")]
    TypeMismatch {
        /// Reflected name of the owning type.
        type_name: &'static str,
        /// The property name.
        property: String,
        /// The value type requested by the caller.
        expected: &'static str,
        /// The value type the property actually holds.
        found: &'static str,
    },
    /// The property is flagged `READ_ONLY` and cannot be written through reflection.
    #[error("property `{type_name}::{property}` is read-only")]
    ReadOnly {
        /// Reflected name of the owning type.
        type_name: &'static str,
        /// The property name.
        property: &'static str,
    },
}
