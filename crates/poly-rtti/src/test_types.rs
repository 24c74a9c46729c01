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

// --- DUMMY REFLECTED TYPES FOR UNIT TESTS ---
//
// Base <- Derived <- Leaf, plus a root that shares nothing with them.

use crate::Reflect;

#[derive(Debug, Reflect)]
pub(crate) struct Base {
    #[reflect(property)]
    pub(crate) count: i32,
}

impl Base {
    pub(crate) fn new(count: i32) -> Self {
        Self { count }
    }
}

#[derive(Debug, Reflect)]
pub(crate) struct Derived {
    #[reflect(base)]
    pub(crate) base: Base,
    #[reflect(property)]
    pub(crate) label: String,
    #[reflect(property(flags(READ_ONLY)))]
    pub(crate) id: u64,
}

impl Derived {
    pub(crate) fn new(count: i32, label: &str) -> Self {
        Self {
            base: Base::new(count),
            label: label.to_owned(),
            id: 7,
        }
    }
}

#[derive(Debug, Reflect)]
#[reflect(name = "game::Leaf")]
pub(crate) struct Leaf {
    #[reflect(base)]
    pub(crate) base: Derived,
    #[reflect(property(flags(DONT_SERIALIZE)))]
    pub(crate) weight: f32,
}

impl Leaf {
    pub(crate) fn new(weight: f32) -> Self {
        Self {
            base: Derived::new(0, "leaf"),
            weight,
        }
    }
}

#[derive(Debug, Reflect)]
pub(crate) struct Unrelated {
    #[reflect(property)]
    pub(crate) enabled: bool,
}
