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

mod fnv;

use std::hash::Hasher;

pub(crate) use self::fnv::Fnv32;

/// Hashes `salt` followed by `element` as one continuous input.
///
/// The hasher is reset first, so digests for different salts are independent. Filters persisted
/// by earlier runs depend on this exact byte order; once you have a history of stored filters you
/// are stuck with it.
pub(crate) fn salted_hash(hasher: &mut Fnv32, salt: &[u8], element: &[u8]) -> u32 {
    hasher.reset();
    hasher.write(salt);
    hasher.write(element);
    hasher.finish32()
}

/// Expands a 32-bit salt value into its big-endian byte form.
pub(crate) fn salt_bytes(salt: u32) -> Vec<u8> {
    salt.to_be_bytes().to_vec()
}
