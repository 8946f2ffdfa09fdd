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
use crate::addresses::store::NewAddress;
use crate::suppliers::store::diesel::models::NewSupplierModel;
use crate::suppliers::store::diesel::schema::{supplier_address, suppliers};
use crate::suppliers::store::SupplierStoreError;

use super::SupplierStoreOperations;

pub(in crate::suppliers::store::diesel) trait SupplierStoreAddSupplierOperation {
    fn add_supplier(
        &self,
        supplier: NewSupplierModel,
        addresses: Vec<NewAddress>,
    ) -> Result<i64, SupplierStoreError>;
}

impl<'a> SupplierStoreAddSupplierOperation for SupplierStoreOperations<'a, PgConnection> {
    fn add_supplier(
        &self,
        supplier: NewSupplierModel,
        addresses: Vec<NewAddress>,
    ) -> Result<i64, SupplierStoreError> {
        self.conn.transaction::<_, SupplierStoreError, _>(|| {
            let supplier_id: i64 = insert_into(suppliers::table)
                .values(&supplier)
                .returning(suppliers::supplier_id)
                .get_result(self.conn)?;

            // Address rows are written inside the same transaction so a
            // failed address insert rolls the supplier back as well.
            for address in make_address_models(supplier_id, addresses) {
                let address_id: i64 = insert_into(supplier_address::table)
                    .values(&address)
                    .returning(supplier_address::address_id)
                    .get_result(self.conn)?;

                append_address_id(self.conn, supplier_id, &address.address_kind, address_id)?;
            }

            Ok(supplier_id)
        })
    }
}
