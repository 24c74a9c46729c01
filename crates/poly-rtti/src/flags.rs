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

//! Flags attached to a reflected property.

use std::fmt;

/// A bit set describing how consumers should treat a property.
///
/// The library only interprets [`READ_ONLY`](Self::READ_ONLY); the other bits
/// are conventions for serializers and editors. Bits not named here are free
/// for engine-specific use through [`from_bits`](Self::from_bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PropertyFlags {
    bits: u32,
}

impl PropertyFlags {
    /// No flags.
    pub const NONE: Self = Self { bits: 0 };
    /// Serializers must skip this property.
    pub const DONT_SERIALIZE: Self = Self { bits: 1 << 1 };
    /// Writes through the reflection layer are rejected.
    pub const READ_ONLY: Self = Self { bits: 1 << 2 };
    /// Property grids should not display this property.
    pub const HIDDEN: Self = Self { bits: 1 << 4 };

    /// Creates a set of flags from raw bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self { bits }
    }

    /// Returns the raw bits.
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Combines two sets of flags.
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Checks if every bit of `other` is set in `self`.
    pub const fn contains(&self, other: Self) -> bool {
        (self.bits & other.bits) == other.bits
    }

    /// Checks if no flag is set.
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Shorthand for "not flagged [`DONT_SERIALIZE`](Self::DONT_SERIALIZE)".
    pub const fn is_serialized(&self) -> bool {
        !self.contains(Self::DONT_SERIALIZE)
    }
}

impl std::ops::BitOr for PropertyFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl std::ops::BitOrAssign for PropertyFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl fmt::Display for PropertyFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMED: [(PropertyFlags, &str); 3] = [
            (PropertyFlags::DONT_SERIALIZE, "DONT_SERIALIZE"),
            (PropertyFlags::READ_ONLY, "READ_ONLY"),
            (PropertyFlags::HIDDEN, "HIDDEN"),
        ];

        if self.is_empty() {
            return f.write_str("NONE");
        }

        let mut rest = self.bits;
        let mut first = true;
        for (flag, name) in NAMED {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                rest &= !flag.bits;
                first = false;
            }
        }
        if rest != 0 {
            if !first {
                f.write_str(" | ")?;
            }
            write!(f, "{rest:#b}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_and_contains() {
        let flags = PropertyFlags::DONT_SERIALIZE | PropertyFlags::READ_ONLY;
        assert!(flags.contains(PropertyFlags::DONT_SERIALIZE));
        assert!(flags.contains(PropertyFlags::READ_ONLY));
        assert!(!flags.contains(PropertyFlags::HIDDEN));
        assert!(!flags.is_serialized());
    }

    #[test]
    fn test_default_is_none() {
        let flags = PropertyFlags::default();
        assert!(flags.is_empty());
        assert!(flags.is_serialized());
        assert_eq!(flags, PropertyFlags::NONE);
    }

    #[test]
    fn test_custom_bits_round_trip_through_display() {
        let mut flags = PropertyFlags::from_bits(0b1000);
        flags |= PropertyFlags::DONT_SERIALIZE;
        assert_eq!(flags.bits(), 0b1010);
        assert_eq!(flags.to_string(), "DONT_SERIALIZE | 0b1000");
        assert_eq!(PropertyFlags::NONE.to_string(), "NONE");
    }
}
