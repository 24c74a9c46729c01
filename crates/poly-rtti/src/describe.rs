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

//! Serializable snapshots of type metadata, for editor tooling and debugging.

use serde::Serialize;

use crate::flags::PropertyFlags;
use crate::property::PropertyInfo;
use crate::type_node::TypeNode;

/// A snapshot of one [`TypeNode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDescription {
    /// Reflected name.
    pub name: &'static str,
    /// FNV-1a hash of the name.
    pub hash: u64,
    /// Reflected name of the direct base, if any.
    pub base: Option<&'static str>,
    /// Names from the type itself up to the root.
    pub chain: Vec<&'static str>,
    /// Properties declared at this level, in declaration order.
    pub properties: Vec<PropertyDescription>,
}

/// A snapshot of one [`PropertyInfo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDescription {
    /// Property name.
    pub name: &'static str,
    /// FNV-1a hash of the name.
    pub hash: u64,
    /// Raw flag bits.
    pub flags: PropertyFlags,
    /// Rust name of the value type.
    pub value_type: &'static str,
}

impl From<&PropertyInfo> for PropertyDescription {
    fn from(info: &PropertyInfo) -> Self {
        Self {
            name: info.name(),
            hash: info.hash(),
            flags: info.flags(),
            value_type: info.value_type().name(),
        }
    }
}

impl TypeNode {
    /// Takes a serializable snapshot of this node.
    pub fn describe(&self) -> TypeDescription {
        TypeDescription {
            name: self.name(),
            hash: self.hash(),
            base: self.base().map(TypeNode::name),
            chain: self.ancestors().map(TypeNode::name).collect(),
            properties: self.own_properties().iter().map(Into::into).collect(),
        }
    }
}
