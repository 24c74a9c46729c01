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

//! Parsing of `#[reflect(...)]` attributes into a [`ReflectInput`].

use std::collections::HashSet;

use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Attribute, Data, DeriveInput, Field, Ident, LitInt, LitStr, Member, Type};

const REFLECT_ATTR: &str = "reflect";

/// Everything the code generator needs to know about one struct.
pub(crate) struct ReflectInput<'a> {
    pub ident: &'a Ident,
    pub name: LitStr,
    pub base: Option<BaseField<'a>>,
    pub properties: Vec<PropertyField<'a>>,
}

/// The field marked `#[reflect(base)]`.
pub(crate) struct BaseField<'a> {
    pub member: Member,
    pub ty: &'a Type,
}

/// A field marked `#[reflect(property)]`.
pub(crate) struct PropertyField<'a> {
    pub member: Member,
    pub ty: &'a Type,
    pub name: LitStr,
    pub flags: Vec<Flag>,
}

/// One entry of `flags(...)`.
pub(crate) enum Flag {
    /// A named constant of `PropertyFlags`, e.g. `DONT_SERIALIZE`.
    Named(Ident),
    /// `bits = N`, for engine-specific bits.
    Bits(LitInt),
}

#[derive(Default)]
struct FieldAttrs {
    base: bool,
    property: Option<PropertyAttrs>,
}

#[derive(Default)]
struct PropertyAttrs {
    rename: Option<LitStr>,
    flags: Vec<Flag>,
}

impl<'a> ReflectInput<'a> {
    pub(crate) fn from_derive_input(input: &'a DeriveInput) -> syn::Result<Self> {
        if !input.generics.params.is_empty() {
            return Err(syn::Error::new(
                input.generics.span(),
                "`Reflect` cannot be derived for generic types",
            ));
        }

        let fields = match &input.data {
            Data::Struct(data) => &data.fields,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`Reflect` can only be derived for structs",
                ))
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`Reflect` can only be derived for structs",
                ))
            }
        };

        let name = parse_type_name(&input.attrs)?
            .unwrap_or_else(|| LitStr::new(&input.ident.unraw().to_string(), input.ident.span()));

        let mut base: Option<BaseField<'a>> = None;
        let mut properties = Vec::new();
        let mut seen = HashSet::new();

        for (index, field) in fields.iter().enumerate() {
            let attrs = parse_field_attrs(field)?;
            let member = match &field.ident {
                Some(ident) => Member::Named(ident.clone()),
                None => Member::Unnamed(index.into()),
            };

            if attrs.base {
                if base.is_some() {
                    return Err(syn::Error::new(
                        field.span(),
                        "a reflected type has at most one `#[reflect(base)]` field",
                    ));
                }
                base = Some(BaseField {
                    member: member.clone(),
                    ty: &field.ty,
                });
            }

            if let Some(property) = attrs.property {
                let name = match (property.rename, &field.ident) {
                    (Some(rename), _) => rename,
                    (None, Some(ident)) => LitStr::new(&ident.unraw().to_string(), ident.span()),
                    (None, None) => {
                        return Err(syn::Error::new(
                            field.span(),
                            "tuple fields need `#[reflect(property(rename = \"...\"))]`",
                        ))
                    }
                };
                if !seen.insert(name.value()) {
                    return Err(syn::Error::new(
                        name.span(),
                        format!("duplicate reflected property `{}`", name.value()),
                    ));
                }
                properties.push(PropertyField {
                    member,
                    ty: &field.ty,
                    name,
                    flags: property.flags,
                });
            }
        }

        Ok(Self {
            ident: &input.ident,
            name,
            base,
            properties,
        })
    }
}

fn reflect_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident(REFLECT_ATTR))
}

/// Parses `#[reflect(name = "...")]` on the struct itself.
fn parse_type_name(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut name = None;
    for attr in reflect_attrs(attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                if value.value().is_empty() {
                    return Err(meta.error("reflected name cannot be empty"));
                }
                name = Some(value);
                Ok(())
            } else {
                Err(meta.error("unknown `reflect` attribute on a type, expected `name`"))
            }
        })?;
    }
    Ok(name)
}

/// Parses `#[reflect(base)]` and `#[reflect(property(...))]` on a field.
fn parse_field_attrs(field: &Field) -> syn::Result<FieldAttrs> {
    let mut attrs = FieldAttrs::default();
    for attr in reflect_attrs(&field.attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("base") {
                attrs.base = true;
                Ok(())
            } else if meta.path.is_ident("property") {
                let mut property = PropertyAttrs::default();
                if meta.input.peek(syn::token::Paren) {
                    meta.parse_nested_meta(|inner| {
                        if inner.path.is_ident("rename") {
                            property.rename = Some(inner.value()?.parse()?);
                            Ok(())
                        } else if inner.path.is_ident("flags") {
                            inner.parse_nested_meta(|flag| {
                                if flag.path.is_ident("bits") {
                                    property.flags.push(Flag::Bits(flag.value()?.parse()?));
                                } else if let Some(ident) = flag.path.get_ident() {
                                    property.flags.push(Flag::Named(ident.clone()));
                                } else {
                                    return Err(flag.error("expected a `PropertyFlags` constant"));
                                }
                                Ok(())
                            })
                        } else {
                            Err(inner.error("unknown property option, expected `rename` or `flags`"))
                        }
                    })?;
                }
                attrs.property = Some(property);
                Ok(())
            } else {
                Err(meta.error("unknown `reflect` attribute on a field, expected `base` or `property`"))
            }
        })?;
    }

    if attrs.base && attrs.property.is_some() {
        return Err(syn::Error::new(
            field.span(),
            "a `#[reflect(base)]` field cannot also be a property",
        ));
    }
    Ok(attrs)
}
