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

use diesel::{insert_into, pg::PgConnection, prelude::*};

use crate::addresses::store::diesel::{append_address_id, make_address_models};
use crate::addresses::store::{AddressStoreError, NewAddress};
use crate::suppliers::store::diesel::schema::supplier_address;

use super::AddressStoreOperations;

pub(in crate::addresses::store::diesel) trait AddressStoreAddAddressOperation {
    fn add_address(
        &self,
        supplier_id: i64,
        address: NewAddress,
    ) -> Result<i64, AddressStoreError>;
}

impl<'a> AddressStoreAddAddressOperation for AddressStoreOperations<'a, PgConnection> {
    fn add_address(
        &self,
        supplier_id: i64,
        address: NewAddress,
    ) -> Result<i64, AddressStoreError> {
        self.conn.transaction::<_, AddressStoreError, _>(|| {
            let mut models = make_address_models(supplier_id, vec![address]);
            // make_address_models returns exactly one model per input
            let model = models.remove(0);

            let address_id: i64 = insert_into(supplier_address::table)
                .values(&model)
                .returning(supplier_address::address_id)
                .get_result(self.conn)?;

            append_address_id(self.conn, supplier_id, &model.address_kind, address_id)?;

            Ok(address_id)
        })
    }
}
