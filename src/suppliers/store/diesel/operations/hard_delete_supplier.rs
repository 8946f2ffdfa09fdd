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

use diesel::{delete, pg::PgConnection, prelude::*};

use crate::suppliers::store::diesel::schema::suppliers;
use crate::suppliers::store::SupplierStoreError;

use super::SupplierStoreOperations;

pub(in crate::suppliers::store::diesel) trait SupplierStoreHardDeleteSupplierOperation {
    fn hard_delete_supplier(&self, supplier_id: i64) -> Result<usize, SupplierStoreError>;
}

impl<'a> SupplierStoreHardDeleteSupplierOperation for SupplierStoreOperations<'a, PgConnection> {
    fn hard_delete_supplier(&self, supplier_id: i64) -> Result<usize, SupplierStoreError> {
        // Only deactivated suppliers may be removed for good; the cascade
        // on supplier_address takes their addresses with them.
        delete(
            suppliers::table.filter(
                suppliers::supplier_id
                    .eq(supplier_id)
                    .and(suppliers::is_active.eq(false)),
            ),
        )
        .execute(self.conn)
        .map_err(SupplierStoreError::from)
    }
}
