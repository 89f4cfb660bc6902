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

use std::path::Path;

use super::BloomFilter;
use crate::error::Error;

/// The operations a probabilistic membership filter offers its callers.
///
/// Code written against this trait does not depend on how the filter stores its bits.
///
/// # Examples
///
/// ```
/// # use saltbloom::bloom::BloomFilter;
/// # use saltbloom::bloom::MembershipFilter;
/// fn load<F: MembershipFilter>(filter: &mut F, elements: &[&str]) -> bool {
///     elements.iter().all(|e| filter.insert(e.as_bytes()))
/// }
///
/// let mut filter = BloomFilter::new(10, 0.01, &[1, 2, 3]);
/// assert!(load(&mut filter, &["a", "b"]));
/// assert_eq!(MembershipFilter::len(&filter), 2);
/// ```
pub trait MembershipFilter {
    /// Inserts an element, returning `false` once capacity has been reached.
    fn insert(&mut self, element: &[u8]) -> bool;

    /// Returns `false` if the element was definitely never inserted.
    fn exists(&self, element: &[u8]) -> bool;

    /// Returns the number of insert calls made so far.
    fn len(&self) -> u32;

    /// Returns whether nothing was ever inserted.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Merges another filter of identical shape into this one.
    fn merge(&mut self, other: &Self) -> Result<(), Error>
    where
        Self: Sized;

    /// Halves the storage, raising the false positive rate.
    fn compress(&mut self) -> Result<(), Error>;

    /// Persists the filter to `path`.
    fn serialize_to_path(&self, path: &Path) -> Result<(), Error>;
}

impl MembershipFilter for BloomFilter {
    fn insert(&mut self, element: &[u8]) -> bool {
        BloomFilter::insert(self, element)
    }

    fn exists(&self, element: &[u8]) -> bool {
        BloomFilter::exists(self, element)
    }

    fn len(&self) -> u32 {
        BloomFilter::len(self)
    }

    fn merge(&mut self, other: &Self) -> Result<(), Error> {
        BloomFilter::merge(self, other)
    }

    fn compress(&mut self) -> Result<(), Error> {
        BloomFilter::compress(self)
    }

    fn serialize_to_path(&self, path: &Path) -> Result<(), Error> {
        BloomFilter::serialize_to_path(self, path)
    }
}
