// Copyright 2024-2026 Contributors to the supplier-daemon project
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use diesel::{pg::PgConnection, prelude::*, update};

use crate::addresses::store::diesel::models::AddressChangesetModel;
use crate::addresses::store::AddressStoreError;
use crate::suppliers::store::diesel::schema::supplier_address;

use super::AddressStoreOperations;

pub(in crate::addresses::store::diesel) trait AddressStoreUpdateAddressOperation {
    fn update_address(
        &self,
        address_id: i64,
        changes: AddressChangesetModel,
    ) -> Result<usize, AddressStoreError>;
}

impl<'a> AddressStoreUpdateAddressOperation for AddressStoreOperations<'a, PgConnection> {
    fn update_address(
        &self,
        address_id: i64,
        changes: AddressChangesetModel,
    ) -> Result<usize, AddressStoreError> {
        update(supplier_address::table.filter(supplier_address::address_id.eq(address_id)))
            .set(&changes)
            .execute(self.conn)
            .map_err(AddressStoreError::from)
    }
}
