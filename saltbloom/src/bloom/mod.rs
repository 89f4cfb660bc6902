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

//! Salted Bloom filter for probabilistic set membership testing.
//!
//! A Bloom filter is a space-efficient probabilistic data structure used to test whether
//! an element is a member of a set. False positive matches are possible, but false negatives
//! are not. In other words, a query returns either "possibly in set" or "definitely not in set".
//!
//! # Properties
//!
//! - **No false negatives**: If an element was inserted, `exists()` will always return `true`
//! - **Possible false positives**: `exists()` may return `true` for elements never inserted
//! - **Insert only**: There is no removal; the element count only grows
//! - **Compressible**: The bit vector can be halved in place, trading accuracy for space
//!
//! # Usage
//!
//! ```rust
//! use saltbloom::bloom::BloomFilterBuilder;
//!
//! // Size a filter for 1000 elements at a 1% false positive rate
//! let salt_count = BloomFilterBuilder::required_salts(1000, 0.01);
//! let salts: Vec<u32> = (0..salt_count as u32).map(|i| i.wrapping_mul(0x9E37_79B9)).collect();
//! let mut filter = BloomFilterBuilder::with_accuracy(1000, 0.01)
//!     .salts(salts)
//!     .build();
//!
//! // Insert elements
//! filter.insert("apple");
//! filter.insert(b"banana");
//!
//! // Check membership
//! assert!(filter.exists("apple")); // true - definitely inserted
//! assert!(!filter.exists("grape")); // false - never inserted (probably)
//!
//! // Get statistics
//! println!("Width: {} bits", filter.num_bits());
//! println!("Inserted: {}", filter.len());
//! println!("Est. FPP: {:.4}%", filter.estimated_fpp() * 100.0);
//! ```
//!
//! # Sizing
//!
//! The width is `m = -n * ln(p) / ln(2)^2` rounded up to a power of two, at least 1024 bits.
//! The salt count is `floor(0.7 * m / n)`, at least 2. Salts are 32-bit values stored in
//! big-endian byte order; when none are supplied the builder draws random ones.
//!
//! # Merging and Compressing
//!
//! ```rust
//! # use saltbloom::bloom::BloomFilter;
//! let mut filter1 = BloomFilter::new(100, 0.01, &[1, 2, 3, 4, 5, 6, 7]);
//! let mut filter2 = BloomFilter::new(100, 0.01, &[1, 2, 3, 4, 5, 6, 7]);
//!
//! filter1.insert("a");
//! filter2.insert("b");
//!
//! // Union: recognizes elements from either filter
//! filter1.merge(&filter2).unwrap();
//! assert!(filter1.exists("a"));
//! assert!(filter1.exists("b"));
//!
//! // Halve the storage; both elements are still recognized
//! filter1.compress().unwrap();
//! assert_eq!(filter1.num_bits(), 512);
//! assert!(filter1.exists("a"));
//! assert!(filter1.exists("b"));
//! ```
//!
//! # Implementation Details
//!
//! - Each salt is hashed together with the element using 32-bit FNV-1
//! - Bits packed in `u32` words
//! - Merge and compress check the shape of the vector and report an error instead of
//!   corrupting it
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/time trade-offs in hash coding with allowable errors"

mod bitvec;
mod builder;
mod filter;
mod membership;

pub use self::builder::random_salts;
pub use self::builder::BloomFilterBuilder;
pub use self::builder::MAX_NUM_BITS;
pub use self::builder::MIN_NUM_BITS;
pub use self::builder::MIN_NUM_SALTS;
pub use self::filter::BloomFilter;
pub use self::membership::MembershipFilter;
