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

//! Link-time collection of every reflected type.
//!
//! `#[derive(Reflect)]` submits a [`TypeRegistration`] for each type through
//! `inventory`. The set is fixed when the program is linked; there is no
//! way to add or remove a type at runtime.

use crate::hash::fnv1a_str;
use crate::reflect::Reflect;
use crate::type_node::TypeNode;

/// A link-time entry pointing at the `type_node()` singleton of one type.
pub struct TypeRegistration {
    node: fn() -> &'static TypeNode,
}

impl TypeRegistration {
    /// The registration of `T`.
    pub const fn of<T: Reflect>() -> Self {
        Self {
            node: T::type_node,
        }
    }

    /// The node of the registered type, built on first access.
    pub fn node(&self) -> &'static TypeNode {
        (self.node)()
    }
}

inventory::collect!(TypeRegistration);

/// Iterates the nodes of all reflected types linked into the program.
///
/// Iteration order is unspecified.
pub fn types() -> impl Iterator<Item = &'static TypeNode> {
    inventory::iter::<TypeRegistration>
        .into_iter()
        .map(TypeRegistration::node)
}

/// Iterates every registered type whose reflected name is `name`.
///
/// Compares hashes first and confirms with the full name. The reflected name
/// defaults to the bare struct identifier, so types declared in different
/// modules may share one.
pub fn types_named(name: &str) -> impl Iterator<Item = &'static TypeNode> + '_ {
    let hash = fnv1a_str(name);
    types().filter(move |node| node.ct_name().matches(name, hash))
}

/// Finds the reflected type with this reflected name.
///
/// Returns `None` when no type has the name, and also when several do: an
/// ambiguous name resolves to nothing rather than to whichever type the
/// linker happened to place first. Give such types distinct names with
/// `#[reflect(name = "...")]`.
pub fn find_type(name: &str) -> Option<&'static TypeNode> {
    let mut candidates = types_named(name);
    let found = candidates.next();
    match found {
        None => log::debug!("No reflected type is named `{name}`"),
        Some(_) => {
            let others = candidates.count();
            if others > 0 {
                log::warn!(
                    "{} reflected types are named `{name}`, refusing to pick one",
                    others + 1
                );
                return None;
            }
        }
    }
    found
}

/// Returns every registered type that has `base` on its chain, `base` included.
pub fn subtypes_of(base: &'static TypeNode) -> impl Iterator<Item = &'static TypeNode> {
    types().filter(move |node| node.is_subtype_of(base))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_types::{Base, Derived, Leaf, Unrelated};

    #[test]
    fn test_derived_types_are_registered() {
        let names: Vec<_> = types().map(TypeNode::name).collect();
        for expected in ["Base", "Derived", "game::Leaf", "Unrelated"] {
            assert!(names.contains(&expected), "`{expected}` missing from {names:?}");
        }
    }

    #[test]
    fn test_find_type_returns_singleton() {
        assert!(std::ptr::eq(find_type("Derived").unwrap(), Derived::type_node()));
        assert!(std::ptr::eq(find_type("game::Leaf").unwrap(), Leaf::type_node()));
        assert!(find_type("Leaf").is_none());
    }

    mod shadow {
        use crate::Reflect;

        // Same identifier as the fixture in `test_types`, in another module.
        #[derive(Debug, Reflect)]
        pub(crate) struct Unrelated {
            #[reflect(property)]
            pub(crate) visible: bool,
        }

        #[derive(Debug, Reflect)]
        #[reflect(name = "shadow::Unrelated")]
        pub(crate) struct Qualified {
            #[reflect(property)]
            pub(crate) visible: bool,
        }
    }

    #[test]
    fn test_ambiguous_name_is_not_resolved() {
        // --- 1. ARRANGE ---
        let _ = env_logger::builder().is_test(true).try_init();

        // --- 2. ACT ---
        let named: Vec<_> = types_named("Unrelated").collect();

        // --- 3. ASSERT ---
        assert_eq!(named.len(), 2);
        assert!(named.iter().any(|node| std::ptr::eq(*node, Unrelated::type_node())));
        assert!(named.iter().any(|node| std::ptr::eq(*node, shadow::Unrelated::type_node())));
        assert!(find_type("Unrelated").is_none());
    }

    #[test]
    fn test_qualified_name_disambiguates() {
        let found = find_type("shadow::Unrelated").expect("explicit name is unique");
        assert!(std::ptr::eq(found, shadow::Qualified::type_node()));
    }

    #[test]
    fn test_subtypes_of_base() {
        let mut names: Vec<_> = subtypes_of(Base::type_node()).map(TypeNode::name).collect();
        names.sort_unstable();
        assert!(names.contains(&"Base"));
        assert!(names.contains(&"Derived"));
        assert!(names.contains(&"game::Leaf"));
        assert!(!names.contains(&Unrelated::NAME.as_str()));
    }
}
