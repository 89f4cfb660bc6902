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

use tracing::debug;

use super::bitvec::BitVector;
use super::bitvec::WORD_BITS;
use super::BloomFilterBuilder;
use crate::codec::family::Family;
use crate::codec::FilterBytes;
use crate::codec::FilterSlice;
use crate::error::Error;
use crate::hash::salted_hash;
use crate::hash::Fnv32;

// Serialization constants
const SERIAL_VERSION: u8 = 1;
const EMPTY_FLAG_MASK: u8 = 1 << 2;
const HEADER_BYTES: usize = 4 + 4 + 4 + 8;

/// A salted Bloom filter for probabilistic set membership testing.
///
/// Provides membership queries over byte strings with:
/// - No false negatives (inserted elements always report present)
/// - A false positive rate bounded by the configured probability up to `capacity` elements
/// - Lossy halving of its storage with [`compress()`](Self::compress)
///
/// Each salt simulates one hash function: an element's bit for a salt is
/// `fnv1_32(salt ++ element) mod num_bits`.
///
/// Use [`super::BloomFilterBuilder`] or [`BloomFilter::new`] to construct instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloomFilter {
    /// Number of elements the filter was sized for
    pub(super) capacity: u32,
    /// Number of insert calls so far
    pub(super) elements: u32,
    /// Logical width of the bit vector; always a power of two
    pub(super) num_bits: u64,
    /// Length = ceil(num_bits / 32) words
    pub(super) bit_vector: BitVector,
    /// Salt byte strings, fixed at construction
    pub(super) salts: Vec<Vec<u8>>,
}

impl BloomFilter {
    /// Creates a filter sized for `capacity` elements at false positive probability `fpp`,
    /// hashing with the given salts in order.
    ///
    /// Supply at least [`BloomFilterBuilder::required_salts`] independent random values; the
    /// count is not validated.
    ///
    /// # Panics
    ///
    /// Panics if `fpp` is not in (0.0, 1.0).
    ///
    /// A `capacity` of 0 builds a minimum-size filter whose inserts all return `false`. The width
    /// is capped at [`MAX_NUM_BITS`](super::MAX_NUM_BITS); accuracy targets that size the vector
    /// beyond available memory abort on allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use saltbloom::bloom::BloomFilter;
    /// let filter = BloomFilter::new(1000, 0.01, &[1, 2, 3]);
    /// assert_eq!(filter.num_bits(), 16384);
    /// assert!(filter.is_empty());
    /// ```
    pub fn new(capacity: u32, fpp: f64, salts: &[u32]) -> Self {
        BloomFilterBuilder::with_accuracy(capacity, fpp)
            .salts(salts.iter().copied())
            .build()
    }

    /// Inserts an element into the filter.
    ///
    /// Returns `false` once the number of inserts has reached the capacity. The element is
    /// still inserted, but the false positive rate is no longer bounded by the configured
    /// probability.
    ///
    /// # Examples
    ///
    /// ```
    /// # use saltbloom::bloom::BloomFilter;
    /// let mut filter = BloomFilter::new(2, 0.01, &[1, 2, 3]);
    /// assert!(filter.insert("apple"));
    /// assert!(!filter.insert("banana")); // capacity reached
    /// assert!(filter.exists("banana"));
    /// ```
    pub fn insert(&mut self, element: impl AsRef<[u8]>) -> bool {
        let element = element.as_ref();
        self.elements = self.elements.saturating_add(1);

        let mut hasher = Fnv32::new();
        for salt in &self.salts {
            let hash = salted_hash(&mut hasher, salt, element);
            self.bit_vector.set(u64::from(hash) % self.num_bits);
        }

        self.elements < self.capacity
    }

    /// Tests whether an element is possibly in the set.
    ///
    /// Returns:
    /// - `true`: Element was **possibly** inserted (or false positive)
    /// - `false`: Element was **definitely not** inserted
    ///
    /// # Examples
    ///
    /// ```
    /// # use saltbloom::bloom::BloomFilter;
    /// let mut filter = BloomFilter::new(100, 0.01, &[1, 2, 3, 4, 5, 6, 7]);
    /// filter.insert(b"apple");
    ///
    /// assert!(filter.exists(b"apple"));
    /// assert!(!filter.exists(b"grape"));
    /// ```
    pub fn exists(&self, element: impl AsRef<[u8]>) -> bool {
        let element = element.as_ref();

        let mut hasher = Fnv32::new();
        self.salts.iter().all(|salt| {
            let hash = salted_hash(&mut hasher, salt, element);
            self.bit_vector.get(u64::from(hash) % self.num_bits)
        })
    }

    /// Returns the number of insert calls made so far.
    ///
    /// Repeated inserts of the same element are counted each time, and [`merge()`](Self::merge)
    /// does not add the other filter's count.
    pub fn len(&self) -> u32 {
        self.elements
    }

    /// Returns whether nothing was ever inserted.
    pub fn is_empty(&self) -> bool {
        self.elements == 0
    }

    /// Merges another filter into this one via bitwise OR (union).
    ///
    /// After merging, this filter recognizes elements from either filter. The element count is
    /// left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IncompatibleFilters`](crate::error::ErrorKind::IncompatibleFilters)
    /// when the filters differ in bit width or salts; `self` is not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// # use saltbloom::bloom::BloomFilter;
    /// let mut f1 = BloomFilter::new(100, 0.01, &[5, 6, 7]);
    /// let mut f2 = BloomFilter::new(100, 0.01, &[5, 6, 7]);
    /// f1.insert("a");
    /// f2.insert("b");
    ///
    /// f1.merge(&f2).unwrap();
    /// assert!(f1.exists("a"));
    /// assert!(f1.exists("b"));
    ///
    /// let other = BloomFilter::new(100, 0.01, &[8, 9, 10]);
    /// assert!(f1.merge(&other).is_err());
    /// ```
    pub fn merge(&mut self, other: &BloomFilter) -> Result<(), Error> {
        if !self.is_compatible(other) {
            return Err(Error::incompatible(
                "cannot merge filters with different widths or salts",
            )
            .with_context("bits", self.num_bits)
            .with_context("other_bits", other.num_bits)
            .with_context("salts", self.salts.len())
            .with_context("other_salts", other.salts.len()));
        }

        self.bit_vector.union_with(&other.bit_vector);
        debug!(
            bits = self.num_bits,
            other_elements = other.elements,
            "merged bloom filter"
        );
        Ok(())
    }

    /// Halves the storage of the filter at the cost of a higher false positive rate.
    ///
    /// Word `j` of the new vector is `old[j] | old[j + half]`, so every previously inserted
    /// element still reports present. Each call roughly doubles the false positive rate.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IncompatibleFilters`](crate::error::ErrorKind::IncompatibleFilters)
    /// when the vector is down to a single word or its word count is not a power of two; the
    /// filter is not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// # use saltbloom::bloom::BloomFilter;
    /// let mut filter = BloomFilter::new(100, 0.01, &[1, 2]);
    /// filter.insert("apple");
    ///
    /// filter.compress().unwrap();
    /// assert_eq!(filter.num_bits(), 512);
    /// assert!(filter.exists("apple"));
    /// ```
    pub fn compress(&mut self) -> Result<(), Error> {
        let num_words = self.bit_vector.num_words();
        if num_words < 2 || !num_words.is_power_of_two() {
            return Err(Error::incompatible(
                "cannot compress: word count must be a power of two greater than one",
            )
            .with_context("words", num_words)
            .with_context("bits", self.num_bits));
        }

        self.bit_vector = self.bit_vector.fold_in_half();
        self.num_bits /= 2;
        debug!(bits = self.num_bits, "compressed bloom filter");
        Ok(())
    }

    /// Returns the number of elements the filter was sized for.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the current width of the bit vector in bits.
    pub fn num_bits(&self) -> u64 {
        self.num_bits
    }

    /// Returns the number of salts, i.e. the number of simulated hash functions.
    pub fn num_salts(&self) -> usize {
        self.salts.len()
    }

    /// Returns the salt byte strings in hashing order.
    pub fn salts(&self) -> &[Vec<u8>] {
        &self.salts
    }

    /// Returns the number of bits set to 1.
    ///
    /// Useful for monitoring filter saturation.
    pub fn bits_used(&self) -> u64 {
        self.bit_vector.count_ones()
    }

    /// Returns the current load factor (fraction of bits set).
    pub fn load_factor(&self) -> f64 {
        self.bits_used() as f64 / self.num_bits as f64
    }

    /// Estimates the current false positive probability as `load_factor^k`, where `k` is
    /// the number of salts.
    pub fn estimated_fpp(&self) -> f64 {
        self.load_factor().powf(self.salts.len() as f64)
    }

    /// Checks if two filters are compatible for merging.
    ///
    /// Filters are compatible if they have the same bit width and the same salts in the same
    /// order.
    pub fn is_compatible(&self, other: &BloomFilter) -> bool {
        self.num_bits == other.num_bits
            && self.bit_vector.num_words() == other.bit_vector.num_words()
            && self.salts == other.salts
    }

    /// Serializes the filter to a byte vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use saltbloom::bloom::BloomFilter;
    /// let mut filter = BloomFilter::new(100, 0.01, &[1, 2, 3]);
    /// filter.insert("test");
    ///
    /// let bytes = filter.serialize();
    /// let restored = BloomFilter::deserialize(&bytes).unwrap();
    /// assert_eq!(filter, restored);
    /// ```
    pub fn serialize(&self) -> Vec<u8> {
        let words = self.bit_vector.words();
        let salt_bytes: usize = self.salts.iter().map(|s| 4 + s.len()).sum();
        let capacity = HEADER_BYTES + 4 + words.len() * 4 + 4 + salt_bytes;
        let mut bytes = FilterBytes::with_capacity(capacity);

        // Preamble
        bytes.write_u8(SERIAL_VERSION); // Byte 0
        bytes.write_u8(Family::SALTBLOOM.id); // Byte 1
        bytes.write_u8(if self.is_empty() { EMPTY_FLAG_MASK } else { 0 }); // Byte 2: flags
        bytes.write_u8(0); // Byte 3: unused

        bytes.write_u32_le(self.capacity);
        bytes.write_u32_le(self.elements);
        bytes.write_u64_le(self.num_bits);

        // Both counts fit in u32 for any filter that could be allocated.
        bytes.write_u32_le(words.len() as u32);
        for &word in words {
            bytes.write_u32_le(word);
        }

        bytes.write_u32_le(self.salts.len() as u32);
        for salt in &self.salts {
            bytes.write_len_prefixed(salt);
        }

        bytes.into_bytes()
    }

    /// Deserializes a filter from bytes.
    ///
    /// The salts are restored byte for byte, so the restored filter hashes exactly like the
    /// original.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorKind::InvalidData`](crate::error::ErrorKind::InvalidData) error if:
    /// - The data is truncated or has trailing bytes
    /// - The family ID doesn't match (not a saltbloom filter)
    /// - The serial version is unsupported
    /// - The bit width is not a power of two or disagrees with the word count
    pub fn deserialize(bytes: &[u8]) -> Result<Self, Error> {
        let mut cursor = FilterSlice::new(bytes);

        // Read preamble
        let serial_version = cursor
            .read_u8()
            .map_err(|_| Error::insufficient_data("serial_version"))?;
        let family_id = cursor
            .read_u8()
            .map_err(|_| Error::insufficient_data("family_id"))?;
        let flags = cursor
            .read_u8()
            .map_err(|_| Error::insufficient_data("flags"))?;
        let _unused = cursor
            .read_u8()
            .map_err(|_| Error::insufficient_data("unused_header"))?;

        // Validate
        Family::SALTBLOOM.validate_id(family_id)?;
        if serial_version != SERIAL_VERSION {
            return Err(Error::unsupported_serial_version(
                SERIAL_VERSION,
                serial_version,
            ));
        }

        let capacity = cursor
            .read_u32_le()
            .map_err(|_| Error::insufficient_data("capacity"))?;
        let elements = cursor
            .read_u32_le()
            .map_err(|_| Error::insufficient_data("elements"))?;
        if (flags & EMPTY_FLAG_MASK) != 0 && elements != 0 {
            return Err(Error::deserial("empty flag set on a non-empty filter")
                .with_context("elements", elements));
        }

        let num_bits = cursor
            .read_u64_le()
            .map_err(|_| Error::insufficient_data("num_bits"))?;
        if !num_bits.is_power_of_two() || num_bits < WORD_BITS {
            return Err(Error::deserial(
                "bit width must be a power of two of at least one word",
            )
            .with_context("num_bits", num_bits));
        }

        let num_words = cursor
            .read_u32_le()
            .map_err(|_| Error::insufficient_data("num_words"))? as usize;
        let expected_words = num_bits.div_ceil(WORD_BITS);
        if num_words as u64 != expected_words {
            return Err(Error::deserial("word count does not match bit width")
                .with_context("num_words", num_words)
                .with_context("expected", expected_words));
        }
        if num_words > cursor.remaining() / 4 {
            return Err(Error::insufficient_data("bit_vector"));
        }
        let mut words = Vec::with_capacity(num_words);
        for _ in 0..num_words {
            let word = cursor
                .read_u32_le()
                .map_err(|_| Error::insufficient_data("bit_vector"))?;
            words.push(word);
        }

        let num_salts = cursor
            .read_u32_le()
            .map_err(|_| Error::insufficient_data("num_salts"))? as usize;
        if num_salts > cursor.remaining() / 4 {
            return Err(Error::insufficient_data("salts"));
        }
        let mut salts = Vec::with_capacity(num_salts);
        for _ in 0..num_salts {
            let salt = cursor
                .read_len_prefixed()
                .map_err(|_| Error::insufficient_data("salts"))?;
            salts.push(salt);
        }

        if cursor.remaining() != 0 {
            return Err(Error::deserial("trailing bytes after filter")
                .with_context("remaining", cursor.remaining()));
        }

        Ok(BloomFilter {
            capacity,
            elements,
            num_bits,
            bit_vector: BitVector::from_words(words),
            salts,
        })
    }

    /// Writes the serialized filter to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorKind::Io`](crate::error::ErrorKind::Io) error if the file cannot be
    /// created or written.
    ///
    /// # Examples
    ///
    /// ```
    /// # use saltbloom::bloom::BloomFilter;
    /// let dir = tempfile::tempdir().unwrap();
    /// let path = dir.path().join("filter.bin");
    ///
    /// let mut filter = BloomFilter::new(100, 0.01, &[1, 2, 3]);
    /// filter.insert("persisted");
    /// filter.serialize_to_path(&path).unwrap();
    ///
    /// let restored = BloomFilter::deserialize_from_path(&path).unwrap();
    /// assert!(restored.exists("persisted"));
    /// assert_eq!(restored.len(), 1);
    /// ```
    pub fn serialize_to_path(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let bytes = self.serialize();
        std::fs::write(path, &bytes).map_err(|err| {
            Error::io("failed to write bloom filter", err).with_context("path", path.display())
        })?;

        debug!(path = %path.display(), size = bytes.len(), "persisted bloom filter");
        Ok(())
    }

    /// Reads a filter previously written by [`serialize_to_path()`](Self::serialize_to_path).
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorKind::Io`](crate::error::ErrorKind::Io) error if the file cannot be
    /// read, or an [`ErrorKind::InvalidData`](crate::error::ErrorKind::InvalidData) error if
    /// its contents are not a valid filter.
    pub fn deserialize_from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|err| {
            Error::io("failed to read bloom filter", err).with_context("path", path.display())
        })?;
        let filter =
            Self::deserialize(&bytes).map_err(|err| err.with_context("path", path.display()))?;

        debug!(
            path = %path.display(),
            bits = filter.num_bits,
            elements = filter.elements,
            "restored bloom filter"
        );
        Ok(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::BloomFilter;
    use crate::bloom::BloomFilterBuilder;
    use crate::error::ErrorKind;

    const SALTS: [u32; 3] = [1, 2, 3];

    #[test]
    fn test_new_filter_layout() {
        let filter = BloomFilter::new(1000, 0.01, &SALTS);
        assert_eq!(filter.capacity(), 1000);
        assert_eq!(filter.num_bits(), 16384);
        assert_eq!(filter.num_salts(), 3);
        assert_eq!(filter.bit_vector.num_words(), 512);
        assert_eq!(filter.len(), 0);
        assert_eq!(filter.bits_used(), 0);
    }

    #[test]
    fn test_insert_sets_golden_bits() {
        // fnv1_32(be(salt) ++ "hello") % 16384 for salts 1, 2, 3
        let mut filter = BloomFilter::new(1000, 0.01, &SALTS);
        filter.insert(b"hello");
        for bit in [11156, 15417, 4174] {
            assert!(filter.bit_vector.get(bit), "bit {bit} not set");
        }
        assert_eq!(filter.bits_used(), 3);
    }

    #[test]
    fn test_insert_and_exists() {
        let mut filter = BloomFilter::new(100, 0.01, &SALTS);
        assert!(!filter.exists("apple"));
        filter.insert("apple");
        assert!(filter.exists("apple"));
        assert!(filter.exists(b"apple"));
        assert!(!filter.is_empty());
    }

    #[test]
    fn test_empty_element() {
        let mut filter = BloomFilter::new(100, 0.01, &SALTS);
        filter.insert(b"");
        assert!(filter.exists(b""));
    }

    #[test]
    fn test_zero_capacity() {
        let mut filter = BloomFilter::new(0, 0.01, &[1, 2]);
        assert_eq!(filter.num_bits(), 1024);
        assert!(!filter.insert("a"));
        assert!(!filter.insert("b"));
        assert_eq!(filter.len(), 2);
        assert!(filter.exists("a"));
        assert!(filter.exists("b"));
    }

    #[test]
    fn test_insert_reports_capacity() {
        let mut filter = BloomFilter::new(3, 0.01, &SALTS);
        assert!(filter.insert("a"));
        assert!(filter.insert("b"));
        assert!(!filter.insert("c"));
        assert!(!filter.insert("d"));
        assert_eq!(filter.len(), 4);
        for e in ["a", "b", "c", "d"] {
            assert!(filter.exists(e));
        }
    }

    #[test]
    fn test_repeated_insert_counts_each_call() {
        let mut filter = BloomFilter::new(100, 0.01, &SALTS);
        filter.insert("same");
        filter.insert("same");
        assert_eq!(filter.len(), 2);
        assert_eq!(filter.bits_used(), 3);
    }

    #[test]
    fn test_merge() {
        let mut f1 = BloomFilter::new(100, 0.01, &SALTS);
        let mut f2 = BloomFilter::new(100, 0.01, &SALTS);
        f1.insert("a");
        f2.insert("b");
        f2.insert("c");

        f1.merge(&f2).unwrap();
        assert!(f1.exists("a"));
        assert!(f1.exists("b"));
        assert!(f1.exists("c"));
        // element count is not carried over
        assert_eq!(f1.len(), 1);
    }

    #[test]
    fn test_merge_rejects_different_salts() {
        let mut f1 = BloomFilter::new(100, 0.01, &[1, 2, 3]);
        let f2 = BloomFilter::new(100, 0.01, &[3, 2, 1]);
        f1.insert("a");
        let before = f1.clone();

        let err = f1.merge(&f2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IncompatibleFilters);
        assert_eq!(f1, before);
    }

    #[test]
    fn test_merge_rejects_different_widths() {
        let mut f1 = BloomFilter::new(100, 0.01, &SALTS);
        let f2 = BloomFilter::new(10_000, 0.01, &SALTS);
        let err = f1.merge(&f2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IncompatibleFilters);

        let mut f3 = BloomFilter::new(1000, 0.01, &SALTS);
        f3.compress().unwrap();
        assert!(!f3.is_compatible(&BloomFilter::new(1000, 0.01, &SALTS)));
    }

    #[test]
    fn test_compress_until_one_word() {
        let mut filter = BloomFilter::new(100, 0.01, &SALTS);
        filter.insert("kept");

        let mut expected_bits = 1024;
        while expected_bits > 32 {
            filter.compress().unwrap();
            expected_bits /= 2;
            assert_eq!(filter.num_bits(), expected_bits);
            assert!(filter.num_bits().is_power_of_two());
            assert_eq!(filter.bit_vector.num_words() as u64, expected_bits / 32);
            assert!(filter.exists("kept"));
        }

        let before = filter.clone();
        let err = filter.compress().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IncompatibleFilters);
        assert_eq!(filter, before);
    }

    #[test]
    fn test_compress_rejects_non_power_of_two_words() {
        let mut filter = BloomFilter::new(100, 0.01, &SALTS);
        filter.bit_vector = super::BitVector::from_words(vec![0; 3]);
        let err = filter.compress().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IncompatibleFilters);
    }

    #[test]
    fn test_compressed_filters_still_merge() {
        let mut f1 = BloomFilter::new(100, 0.01, &SALTS);
        let mut f2 = BloomFilter::new(100, 0.01, &SALTS);
        f1.insert("x");
        f2.insert("y");
        f1.compress().unwrap();
        f2.compress().unwrap();
        f1.merge(&f2).unwrap();
        assert!(f1.exists("x"));
        assert!(f1.exists("y"));
    }

    #[test]
    fn test_statistics() {
        let mut filter = BloomFilterBuilder::with_accuracy(100, 0.01)
            .salts([1, 2])
            .build();
        assert_eq!(filter.load_factor(), 0.0);
        assert_eq!(filter.estimated_fpp(), 0.0);

        filter.insert("test");
        assert!(filter.bits_used() > 0 && filter.bits_used() <= 2);
        assert!(filter.load_factor() > 0.0);
        assert!(filter.estimated_fpp() > 0.0);
    }

    #[test]
    fn test_serialize_deserialize_empty() {
        let filter = BloomFilter::new(100, 0.01, &SALTS);
        let bytes = filter.serialize();
        assert_eq!(bytes[2], super::EMPTY_FLAG_MASK);
        let restored = BloomFilter::deserialize(&bytes).unwrap();
        assert_eq!(filter, restored);
    }

    #[test]
    fn test_serialize_layout() {
        let mut filter = BloomFilter::new(100, 0.01, &[0x0A0B_0C0D]);
        filter.insert("x");
        let bytes = filter.serialize();

        assert_eq!(&bytes[..4], &[1, 0x5B, 0, 0]);
        assert_eq!(&bytes[4..8], &100u32.to_le_bytes());
        assert_eq!(&bytes[8..12], &1u32.to_le_bytes());
        assert_eq!(&bytes[12..20], &1024u64.to_le_bytes());
        assert_eq!(&bytes[20..24], &32u32.to_le_bytes());
        let salts_at = 24 + 32 * 4;
        assert_eq!(&bytes[salts_at..salts_at + 4], &1u32.to_le_bytes());
        assert_eq!(
            &bytes[salts_at + 4..],
            &[4, 0, 0, 0, 0x0A, 0x0B, 0x0C, 0x0D]
        );
    }

    #[test]
    fn test_deserialize_rejects_inconsistent_empty_flag() {
        let mut filter = BloomFilter::new(100, 0.01, &SALTS);
        filter.insert("x");
        let mut bytes = filter.serialize();
        bytes[2] = super::EMPTY_FLAG_MASK;
        let err = BloomFilter::deserialize(&bytes).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_deserialize_rejects_bad_width() {
        let filter = BloomFilter::new(100, 0.01, &SALTS);
        let mut bytes = filter.serialize();
        bytes[12..20].copy_from_slice(&1000u64.to_le_bytes());
        let err = BloomFilter::deserialize(&bytes).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);

        bytes[12..20].copy_from_slice(&2048u64.to_le_bytes());
        let err = BloomFilter::deserialize(&bytes).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert!(err.message().contains("word count"));
    }

    #[test]
    fn test_deserialize_rejects_sub_word_width() {
        let filter = BloomFilter::new(100, 0.01, &SALTS);
        let mut bytes = filter.serialize();
        // one word holding a 1-bit filter
        let mut short = bytes[..12].to_vec();
        short.extend_from_slice(&1u64.to_le_bytes());
        short.extend_from_slice(&1u32.to_le_bytes());
        short.extend_from_slice(&u32::MAX.to_le_bytes());
        short.extend_from_slice(&bytes[24 + 32 * 4..]);
        let err = BloomFilter::deserialize(&short).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert!(err.message().contains("at least one word"));

        // the one-word floor reached by compress still loads
        let mut compressed = filter.clone();
        while compressed.compress().is_ok() {}
        assert_eq!(compressed.num_bits(), 32);
        bytes = compressed.serialize();
        assert_eq!(BloomFilter::deserialize(&bytes).unwrap(), compressed);
    }
}
