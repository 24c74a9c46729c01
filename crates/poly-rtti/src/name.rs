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

//! Compile-time names: a string literal paired with its precomputed hash.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::hash::fnv1a_str;

/// A name known at build time, carried together with its FNV-1a hash.
///
/// `CtStr::new` is a `const fn`, so a `const NAME: CtStr = CtStr::new("x")`
/// costs nothing at runtime: the characters live in the binary's read-only
/// data and the hash is folded by the compiler.
///
/// Equality compares the hash first and then the full text, so two names
/// whose hashes collide are still distinct.
#[derive(Clone, Copy)]
pub struct CtStr {
    text: &'static str,
    hash: u64,
}

impl CtStr {
    /// The empty name.
    pub const EMPTY: Self = Self::new("");

    /// Builds a name from a literal, hashing it at compile time when used in
    /// a `const` context.
    pub const fn new(text: &'static str) -> Self {
        Self {
            text,
            hash: fnv1a_str(text),
        }
    }

    /// Returns the name as a string slice.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.text
    }

    /// Returns the raw UTF-8 bytes of the name.
    #[inline]
    pub const fn as_bytes(&self) -> &'static [u8] {
        self.text.as_bytes()
    }

    /// Length of the name in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` for the empty name.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The precomputed FNV-1a hash of the name.
    #[inline]
    pub const fn hash(&self) -> u64 {
        self.hash
    }

    /// Checks this name against a runtime string whose hash the caller has
    /// already computed.
    ///
    /// The hash is only a pre-filter; a match is confirmed by comparing the
    /// text.
    #[inline]
    pub fn matches(&self, text: &str, hash: u64) -> bool {
        self.hash == hash && self.text == text
    }

    /// Builds a name with an arbitrary hash, to simulate collisions.
    #[cfg(test)]
    pub(crate) const fn with_hash(text: &'static str, hash: u64) -> Self {
        Self { text, hash }
    }
}

impl PartialEq for CtStr {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other.text, other.hash)
    }
}

impl Eq for CtStr {}

impl Hash for CtStr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl PartialEq<str> for CtStr {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for CtStr {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl AsRef<str> for CtStr {
    fn as_ref(&self) -> &str {
        self.text
    }
}

impl fmt::Debug for CtStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}#{:016x}", self.text, self.hash)
    }
}

impl fmt::Display for CtStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CtStr {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.text)
    }
}
