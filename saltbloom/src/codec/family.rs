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

use crate::error::Error;

/// Identifies the persisted format a byte stream claims to hold.
pub struct Family {
    /// The byte ID for this family.
    pub id: u8,
    /// The name for this family.
    pub name: &'static str,
}

impl Family {
    /// Salted Bloom filter.
    pub const SALTBLOOM: Family = Family {
        id: 0x5B,
        name: "SALTBLOOM",
    };
}

impl Family {
    pub fn validate_id(&self, family_id: u8) -> Result<(), Error> {
        if family_id != self.id {
            Err(Error::invalid_family(self.id, family_id, self.name))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Family;
    use crate::error::ErrorKind;

    #[test]
    fn test_validate_id() {
        assert!(Family::SALTBLOOM.validate_id(0x5B).is_ok());
        let err = Family::SALTBLOOM.validate_id(21).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }
}
