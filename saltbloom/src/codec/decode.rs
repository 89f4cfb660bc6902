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

use std::io;
use std::io::Cursor;
use std::io::Read;

use byteorder::ReadBytesExt;
use byteorder::LE;

/// A wrapper around a byte slice that reads little-endian encoded fields from it.
pub struct FilterSlice<'a> {
    slice: Cursor<&'a [u8]>,
}

impl FilterSlice<'_> {
    /// Creates a new `FilterSlice` from the given byte slice.
    pub fn new(slice: &[u8]) -> FilterSlice<'_> {
        FilterSlice {
            slice: Cursor::new(slice),
        }
    }

    /// Returns the number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        let len = self.slice.get_ref().len() as u64;
        len.saturating_sub(self.slice.position()) as usize
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> io::Result<u8> {
        self.slice.read_u8()
    }

    /// Reads a 32-bit unsigned integer in little-endian byte order.
    pub fn read_u32_le(&mut self) -> io::Result<u32> {
        self.slice.read_u32::<LE>()
    }

    /// Reads a 64-bit unsigned integer in little-endian byte order.
    pub fn read_u64_le(&mut self) -> io::Result<u64> {
        self.slice.read_u64::<LE>()
    }

    /// Reads a `u32` length prefix followed by that many bytes.
    ///
    /// The length is checked against the remaining input before allocating, so a corrupt
    /// prefix cannot trigger a huge allocation.
    pub fn read_len_prefixed(&mut self) -> io::Result<Vec<u8>> {
        let len = self.read_u32_le()? as usize;
        if len > self.remaining() {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof));
        }
        let mut buf = vec![0u8; len];
        self.slice.read_exact(&mut buf)?;
        Ok(buf)
    }
}
