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

//! This crate provides the `Reflect` derive for `poly_rtti`.

mod attributes;
mod expand;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

use attributes::ReflectInput;

/// A derive macro that implements the `poly_rtti::Reflect` trait.
///
/// Attributes:
///
/// - `#[reflect(name = "...")]` on the struct overrides the reflected name.
/// - `#[reflect(base)]` on one field makes that field's type the reflected base.
/// - `#[reflect(property)]` on a field registers it as a property, in field
///   order. `#[reflect(property(rename = "...", flags(DONT_SERIALIZE, bits = 8)))]`
///   sets the reflected name and flags.
///
/// The declaration is rejected at compile time for generic types, enums and
/// unions, for a second base field, for duplicate property names, and for a
/// base type that does not implement `Reflect`.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    // Parse the input tokens into a syntax tree.
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match ReflectInput::from_derive_input(&input) {
        Ok(reflect) => expand::expand(&reflect),
        Err(err) => err.into_compile_error(),
    };

    // Hand the output tokens back to the compiler.
    TokenStream::from(expanded)
}
