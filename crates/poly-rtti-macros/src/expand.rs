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

//! Code generation for `#[derive(Reflect)]`.

use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;

use crate::attributes::{Flag, PropertyField, ReflectInput};

pub(crate) fn expand(input: &ReflectInput<'_>) -> TokenStream {
    let ident = input.ident;
    let name = &input.name;

    let (base_ty, base_ref, base_mut, base_check) = match &input.base {
        Some(base) => {
            let ty = base.ty;
            let member = &base.member;
            // Points the "not a reflected type" error at the base field.
            let check = quote_spanned! {ty.span()=>
                const _: fn() = || {
                    fn assert_reflected_base<T: ::poly_rtti::Reflect>() {}
                    assert_reflected_base::<#ty>();
                };
            };
            (
                quote!(#ty),
                quote!(::core::option::Option::Some(&self.#member)),
                quote!(::core::option::Option::Some(&mut self.#member)),
                check,
            )
        }
        None => (
            quote!(::poly_rtti::NoBase),
            quote!(::core::option::Option::None),
            quote!(::core::option::Option::None),
            TokenStream::new(),
        ),
    };

    let count = input.properties.len();
    let properties = input.properties.iter().map(|property| expand_property(ident, property));

    quote! {
        #base_check

        impl ::poly_rtti::Reflect for #ident {
            type Base = #base_ty;

            const NAME: ::poly_rtti::CtStr = ::poly_rtti::CtStr::new(#name);

            fn properties() -> &'static [::poly_rtti::Property<Self>] {
                static PROPERTIES: [::poly_rtti::Property<#ident>; #count] = [#(#properties),*];
                &PROPERTIES
            }

            fn type_node() -> &'static ::poly_rtti::TypeNode {
                static NODE: ::std::sync::OnceLock<::poly_rtti::TypeNode> =
                    ::std::sync::OnceLock::new();
                NODE.get_or_init(::poly_rtti::TypeNode::new::<Self>)
            }

            fn base(&self) -> ::core::option::Option<&Self::Base> {
                #base_ref
            }

            fn base_mut(&mut self) -> ::core::option::Option<&mut Self::Base> {
                #base_mut
            }
        }

        ::poly_rtti::inventory::submit! {
            ::poly_rtti::registry::TypeRegistration::of::<#ident>()
        }
    }
}

fn expand_property(owner: &syn::Ident, property: &PropertyField<'_>) -> TokenStream {
    let PropertyField {
        member,
        ty,
        name,
        flags,
    } = property;

    let flags = flags.iter().fold(
        quote!(::poly_rtti::PropertyFlags::NONE),
        |acc, flag| match flag {
            Flag::Named(ident) => quote!(#acc.union(::poly_rtti::PropertyFlags::#ident)),
            Flag::Bits(bits) => quote!(#acc.union(::poly_rtti::PropertyFlags::from_bits(#bits))),
        },
    );

    quote! {
        {
            fn get(owner: &#owner) -> &dyn ::core::any::Any {
                &owner.#member
            }
            fn get_mut(owner: &mut #owner) -> &mut dyn ::core::any::Any {
                &mut owner.#member
            }
            ::poly_rtti::Property::new(
                ::poly_rtti::PropertyInfo::new(
                    ::poly_rtti::CtStr::new(#name),
                    #flags,
                    ::poly_rtti::ValueType::of::<#ty>(),
                ),
                get,
                get_mut,
            )
        }
    }
}
