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

use byteorder::ByteOrder;
use byteorder::LE;

/// A simple wrapper around a `Vec<u8>` that appends little-endian encoded fields.
pub struct FilterBytes {
    bytes: Vec<u8>,
}

impl FilterBytes {
    /// Constructs an empty `FilterBytes` with at least the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Consumes the `FilterBytes` and returns the underlying `Vec<u8>`.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Writes the given byte slice verbatim.
    pub fn write(&mut self, buf: &[u8]) {
        self.bytes.extend_from_slice(buf);
    }

    /// Writes a single byte.
    pub fn write_u8(&mut self, n: u8) {
        self.bytes.push(n);
    }

    /// Writes a 32-bit unsigned integer in little-endian byte order.
    pub fn write_u32_le(&mut self, n: u32) {
        let mut buf = [0u8; 4];
        LE::write_u32(&mut buf, n);
        self.write(&buf);
    }

    /// Writes a 64-bit unsigned integer in little-endian byte order.
    pub fn write_u64_le(&mut self, n: u64) {
        let mut buf = [0u8; 8];
        LE::write_u64(&mut buf, n);
        self.write(&buf);
    }

    /// Writes a `u32` length prefix followed by the bytes themselves.
    ///
    /// # Panics
    ///
    /// Panics if `buf` is longer than `u32::MAX` bytes.
    pub fn write_len_prefixed(&mut self, buf: &[u8]) {
        let len = u32::try_from(buf.len()).expect("length-prefixed field exceeds u32::MAX");
        self.write_u32_le(len);
        self.write(buf);
    }
}
