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

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// A generator with a fixed seed so query sets are reproducible between runs.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws `count` salts from `rng`.
pub fn random_salts(rng: &mut StdRng, count: usize) -> Vec<u32> {
    (0..count).map(|_| rng.random::<u32>()).collect()
}

/// Draws `count` random byte strings of exactly `len` bytes.
pub fn random_elements(rng: &mut StdRng, count: usize, len: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|_| {
            let mut element = vec![0u8; len];
            rng.fill(&mut element[..]);
            element
        })
        .collect()
}
