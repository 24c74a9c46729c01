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

//! The runtime node of a reflected type.

use std::any::TypeId;
use std::fmt;

use crate::name::CtStr;
use crate::property::PropertyInfo;
use crate::reflect::{Reflect, ReflectBase};
use crate::visit::find_by_name;

/// Process-wide metadata record for one reflected type.
///
/// There is exactly one node per type, reached through
/// [`Reflect::type_node`]. Nodes are compared by address: two references to
/// the same node denote the same type. The base link is a plain `'static`
/// reference; nodes own nothing but their property metadata and live until
/// the process exits.
pub struct TypeNode {
    name: CtStr,
    base: Option<&'static TypeNode>,
    properties: Box<[PropertyInfo]>,
    type_id: TypeId,
}

impl TypeNode {
    /// Builds the node of `T`.
    ///
    /// This is the initializer behind the `type_node()` singleton generated by
    /// `#[derive(Reflect)]`; calling it directly creates a detached node that
    /// does not share identity with the singleton.
    pub fn new<T: Reflect>() -> Self {
        let base = <T::Base as ReflectBase>::node();
        let properties: Box<[PropertyInfo]> =
            T::properties().iter().map(|property| *property.info()).collect();

        log::trace!(
            "Built type node `{}` ({:#018x}), base: {}, {} own properties",
            T::NAME,
            T::NAME.hash(),
            base.map_or("<none>", TypeNode::name),
            properties.len()
        );

        Self {
            name: T::NAME,
            base,
            properties,
            type_id: TypeId::of::<T>(),
        }
    }

    /// The reflected name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name.as_str()
    }

    /// The FNV-1a hash of the reflected name.
    #[inline]
    pub fn hash(&self) -> u64 {
        self.name.hash()
    }

    /// The reflected name together with its hash.
    #[inline]
    pub fn ct_name(&self) -> CtStr {
        self.name
    }

    /// The node of the reflected base type, if any.
    #[inline]
    pub fn base(&self) -> Option<&'static TypeNode> {
        self.base
    }

    /// The Rust [`TypeId`] of the described type.
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Properties declared at this level, in declaration order.
    #[inline]
    pub fn own_properties(&self) -> &[PropertyInfo] {
        &self.properties
    }

    /// Iterates this node, then its base, up to the root.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            next: Some(self),
        }
    }

    /// Number of reflected ancestors. A root has depth 0.
    pub fn depth(&self) -> usize {
        self.ancestors().count() - 1
    }

    /// The top of the chain (the node itself for a root).
    pub fn root(&self) -> &TypeNode {
        self.ancestors().last().unwrap_or(self)
    }

    /// Returns `true` if `other` is this node or one of its ancestors.
    pub fn is_subtype_of(&self, other: &TypeNode) -> bool {
        self.ancestors().any(|node| std::ptr::eq(node, other))
    }

    /// Looks up a property declared at this level only.
    ///
    /// The hash of `name` selects candidates; the match is confirmed by
    /// comparing the full name.
    pub fn find_property(&self, name: &str) -> Option<&PropertyInfo> {
        find_by_name(&self.properties[..], name, |info| info.ct_name())
    }

    /// Looks up a property on this level, then on each ancestor in turn.
    ///
    /// The most derived declaration wins when a name is reused.
    pub fn find_property_recursive(&self, name: &str) -> Option<(&TypeNode, &PropertyInfo)> {
        self.ancestors()
            .find_map(|node| node.find_property(name).map(|info| (node, info)))
    }

    /// Calls `visitor` for each property of this level, in declaration order.
    pub fn for_each_own_property<F: FnMut(&PropertyInfo)>(&self, visitor: F) {
        self.properties.iter().for_each(visitor);
    }

    /// Calls `visitor` for every property of the chain, root first.
    pub fn for_each_property_recursive<F: FnMut(&TypeNode, &PropertyInfo)>(&self, mut visitor: F) {
        self.visit_recursive(&mut visitor);
    }

    fn visit_recursive<F: FnMut(&TypeNode, &PropertyInfo)>(&self, visitor: &mut F) {
        if let Some(base) = self.base {
            base.visit_recursive(visitor);
        }
        for info in self.properties.iter() {
            visitor(self, info);
        }
    }
}

impl PartialEq for TypeNode {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for TypeNode {}

impl fmt::Debug for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeNode")
            .field("name", &self.name)
            .field("base", &self.base.map(TypeNode::name))
            .field("properties", &self.properties)
            .finish()
    }
}

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Iterator over a node and its ancestors. See [`TypeNode::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    next: Option<&'a TypeNode>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a TypeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.base;
        Some(current)
    }
}
