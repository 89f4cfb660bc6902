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

use super::bitvec::BitVector;
use super::BloomFilter;
use crate::hash::salt_bytes;

/// Smallest bit width a filter is ever sized to.
pub const MIN_NUM_BITS: u64 = 1024;
/// Largest bit width the sizing functions return.
///
/// Widths anywhere near this ceiling describe a filter that cannot be allocated; sizing saturates
/// here rather than overflowing.
pub const MAX_NUM_BITS: u64 = 1 << 62;
/// Fewest salts a filter is ever sized to.
pub const MIN_NUM_SALTS: usize = 2;

// Approximates ln(2); kept as-is so salt counts stay reproducible across versions.
const SALT_FACTOR: f32 = 0.7;

/// Builder for creating [`BloomFilter`] instances.
///
/// The builder derives the bit width and the salt count from a capacity and a target false
/// positive probability. Salts may be supplied explicitly with [`salts()`](Self::salts); when
/// they are not, [`build()`](Self::build) draws [`required_salts()`](Self::required_salts)
/// random ones.
#[derive(Debug, Clone)]
pub struct BloomFilterBuilder {
    capacity: u32,
    num_bits: u64,
    num_salts: usize,
    salts: Option<Vec<u32>>,
}

impl BloomFilterBuilder {
    /// Creates a builder sized for `capacity` elements at false positive probability `fpp`.
    ///
    /// # Panics
    ///
    /// Panics if `fpp` is not in (0.0, 1.0).
    ///
    /// A `capacity` of 0 is accepted: the filter gets the minimum width and salt count, and every
    /// insert reports the capacity as reached.
    ///
    /// The width is bounded only by [`MAX_NUM_BITS`], not by available memory, and
    /// [`build()`](Self::build) allocates `num_bits / 8` bytes up front. Extreme accuracy targets
    /// such as `with_accuracy(u32::MAX, 1e-300)` (2^43 bits) or `fpp` near 0 (2^62 bits) request
    /// allocations that can abort the process.
    ///
    /// # Examples
    ///
    /// ```
    /// # use saltbloom::bloom::BloomFilterBuilder;
    /// let filter = BloomFilterBuilder::with_accuracy(1000, 0.01).build();
    /// assert_eq!(filter.num_bits(), 16384);
    /// assert_eq!(filter.num_salts(), 11);
    /// ```
    pub fn with_accuracy(capacity: u32, fpp: f64) -> Self {
        assert!(
            fpp > 0.0 && fpp < 1.0,
            "fpp must be between 0.0 and 1.0 (exclusive)"
        );

        BloomFilterBuilder {
            capacity,
            num_bits: Self::required_bits(capacity, fpp),
            num_salts: Self::required_salts(capacity, fpp),
            salts: None,
        }
    }

    /// Uses the given 32-bit salt values, in order, instead of random ones.
    ///
    /// Each value is stored as its 4-byte big-endian form. The count is not checked against
    /// [`required_salts()`](Self::required_salts): fewer or duplicate salts quietly weaken the
    /// false positive bound.
    ///
    /// **Important**: filters built with different salts cannot be merged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use saltbloom::bloom::BloomFilterBuilder;
    /// let filter = BloomFilterBuilder::with_accuracy(100, 0.01)
    ///     .salts([11, 22, 33])
    ///     .build();
    /// assert_eq!(filter.num_salts(), 3);
    /// ```
    pub fn salts(mut self, salts: impl IntoIterator<Item = u32>) -> Self {
        self.salts = Some(salts.into_iter().collect());
        self
    }

    /// Builds the Bloom filter.
    pub fn build(self) -> BloomFilter {
        let salts = match self.salts {
            Some(salts) => salts,
            None => random_salts(self.num_salts),
        };

        BloomFilter {
            capacity: self.capacity,
            elements: 0,
            num_bits: self.num_bits,
            bit_vector: BitVector::with_bits(self.num_bits),
            salts: salts.into_iter().map(salt_bytes).collect(),
        }
    }

    /// Returns the bit width needed for `capacity` elements at false positive probability `fpp`.
    ///
    /// Formula: `m = -n * ln(p) / (ln(2)^2)`, truncated, rounded up to the next power of two and
    /// clamped to [`MIN_NUM_BITS`]. Never panics; an `fpp` outside (0, 1) yields the minimum.
    /// Results above [`MAX_NUM_BITS`] saturate to it instead of being rounded up.
    ///
    /// # Examples
    ///
    /// ```
    /// # use saltbloom::bloom::BloomFilterBuilder;
    /// // ~9585 bits, rounded up to a power of two
    /// assert_eq!(BloomFilterBuilder::required_bits(1000, 0.01), 16384);
    /// assert_eq!(BloomFilterBuilder::required_bits(10, 0.5), 1024);
    /// ```
    pub fn required_bits(capacity: u32, fpp: f64) -> u64 {
        let ln2_squared = std::f64::consts::LN_2 * std::f64::consts::LN_2;
        let bits = f64::from(capacity) * -fpp.ln() / ln2_squared;

        // Float to int casts saturate: NaN and negatives become 0, infinity becomes u64::MAX.
        let bits = (bits as u64)
            .checked_next_power_of_two()
            .unwrap_or(MAX_NUM_BITS);

        bits.clamp(MIN_NUM_BITS, MAX_NUM_BITS)
    }

    /// Returns the number of salts needed for `capacity` elements at false positive
    /// probability `fpp`.
    ///
    /// Formula: `k = floor(0.7 * m / n)` with `m` from [`required_bits()`](Self::required_bits),
    /// clamped to [`MIN_NUM_SALTS`]. The product is taken in single precision.
    ///
    /// # Examples
    ///
    /// ```
    /// # use saltbloom::bloom::BloomFilterBuilder;
    /// assert_eq!(BloomFilterBuilder::required_salts(1000, 0.01), 11); // 0.7 * 16.384
    /// assert_eq!(BloomFilterBuilder::required_salts(100, 0.01), 7); // 0.7 * 10.24
    /// ```
    pub fn required_salts(capacity: u32, fpp: f64) -> usize {
        if capacity == 0 {
            return MIN_NUM_SALTS;
        }

        let bits = Self::required_bits(capacity, fpp);
        let ratio = (bits as f64 / f64::from(capacity)) as f32;
        let salts = (SALT_FACTOR * ratio) as usize;

        salts.max(MIN_NUM_SALTS)
    }
}

/// Draws `count` random 32-bit salts from the thread-local generator.
pub fn random_salts(count: usize) -> Vec<u32> {
    (0..count).map(|_| rand::random::<u32>()).collect()
}
