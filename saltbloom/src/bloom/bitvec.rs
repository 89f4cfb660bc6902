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

/// Number of bits held by one storage word.
pub(super) const WORD_BITS: u64 = u32::BITS as u64;

/// A packed array of 32-bit words addressed by a flat bit index.
///
/// Bit `i` lives in word `i / 32` at shift `i % 32`. Indices beyond the backing words panic
/// on slice access; the filter reduces every index modulo its width before calling in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct BitVector {
    words: Vec<u32>,
}

impl BitVector {
    /// Allocates `ceil(num_bits / 32)` zeroed words.
    pub fn with_bits(num_bits: u64) -> Self {
        let num_words = num_bits.div_ceil(WORD_BITS) as usize;
        BitVector {
            words: vec![0u32; num_words],
        }
    }

    pub fn from_words(words: Vec<u32>) -> Self {
        BitVector { words }
    }

    pub fn words(&self) -> &[u32] {
        &self.words
    }

    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    pub fn get(&self, bit_index: u64) -> bool {
        let word_index = (bit_index / WORD_BITS) as usize;
        let shift = bit_index % WORD_BITS;
        (self.words[word_index] >> shift) & 1 == 1
    }

    pub fn set(&mut self, bit_index: u64) {
        let word_index = (bit_index / WORD_BITS) as usize;
        let shift = bit_index % WORD_BITS;
        self.words[word_index] |= 1u32 << shift;
    }

    /// Number of bits set to 1.
    pub fn count_ones(&self) -> u64 {
        self.words.iter().map(|w| u64::from(w.count_ones())).sum()
    }

    /// ORs `other` into `self` word by word. Both vectors must have the same length.
    pub fn union_with(&mut self, other: &BitVector) {
        debug_assert_eq!(self.words.len(), other.words.len());
        for (word, other_word) in self.words.iter_mut().zip(&other.words) {
            *word |= *other_word;
        }
    }

    /// Returns a vector of half the length where word `j` is `words[j] | words[j + half]`.
    ///
    /// A fresh allocation is returned so the old storage is released once replaced.
    pub fn fold_in_half(&self) -> BitVector {
        let half = self.words.len() / 2;
        let (low, high) = self.words.split_at(half);
        let words = low.iter().zip(high).map(|(l, h)| l | h).collect();
        BitVector { words }
    }
}
