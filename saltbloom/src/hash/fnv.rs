// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::hash::Hasher;

const OFFSET_BASIS: u32 = 0x811c9dc5;
const PRIME: u32 = 0x01000193;

/// The 32-bit Fowler-Noll-Vo hash, variant 1: multiply by the prime, then xor in the byte.
///
/// It is fast and non-cryptographic. Every salted digest must start from a fresh hasher; use
/// [`Fnv32::new`] or [`Fnv32::reset`] between salts.
#[derive(Debug, Clone, Copy)]
pub struct Fnv32 {
    state: u32,
}

impl Fnv32 {
    pub fn new() -> Self {
        Fnv32 {
            state: OFFSET_BASIS,
        }
    }

    /// Returns the hasher to its initial state.
    pub fn reset(&mut self) {
        self.state = OFFSET_BASIS;
    }

    pub fn finish32(&self) -> u32 {
        self.state
    }
}

impl Default for Fnv32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv32 {
    fn finish(&self) -> u64 {
        u64::from(self.state)
    }

    fn write(&mut self, bytes: &[u8]) {
        let mut h = self.state;
        for &b in bytes {
            h = h.wrapping_mul(PRIME);
            h ^= u32::from(b);
        }
        self.state = h;
    }
}
