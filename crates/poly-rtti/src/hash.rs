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

//! Deterministic 64-bit string hashing (FNV-1a).
//!
//! Every function here is a `const fn`, so names written as literals are
//! hashed by the compiler and embedded directly in the generated metadata.

/// The 64-bit FNV offset basis. Hashing an empty input returns this value.
pub const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

/// The 64-bit FNV prime.
pub const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Hashes a byte sequence with 64-bit FNV-1a.
///
/// For each byte, in order: `h = (h ^ byte) * FNV_PRIME`, starting from
/// [`FNV_OFFSET_BASIS`]. The function is total and pure.
///
/// # Example
///
/// ```rust
/// use poly_rtti::hash::{fnv1a, FNV_OFFSET_BASIS};
///
/// const COUNT: u64 = fnv1a(b"count");
/// assert_eq!(COUNT, fnv1a("count".as_bytes()));
/// assert_eq!(fnv1a(b""), FNV_OFFSET_BASIS);
/// ```
pub const fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

/// Hashes the UTF-8 bytes of a string slice. See [`fnv1a`].
#[inline]
pub const fn fnv1a_str(text: &str) -> u64 {
    fnv1a(text.as_bytes())
}
