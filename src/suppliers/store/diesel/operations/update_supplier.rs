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

use crate::suppliers::store::diesel::models::SupplierChangesetModel;
use crate::suppliers::store::diesel::schema::suppliers;
use crate::suppliers::store::SupplierStoreError;

use super::SupplierStoreOperations;

pub(in crate::suppliers::store::diesel) trait SupplierStoreUpdateSupplierOperation {
    fn update_supplier(
        &self,
        supplier_id: i64,
        changes: SupplierChangesetModel,
    ) -> Result<usize, SupplierStoreError>;
}

impl<'a> SupplierStoreUpdateSupplierOperation for SupplierStoreOperations<'a, PgConnection> {
    fn update_supplier(
        &self,
        supplier_id: i64,
        changes: SupplierChangesetModel,
    ) -> Result<usize, SupplierStoreError> {
        // Soft-deleted suppliers are not updatable; they have to be
        // restored first.
        update(
            suppliers::table.filter(
                suppliers::supplier_id
                    .eq(supplier_id)
                    .and(suppliers::deleted_at.is_null()),
            ),
        )
        .set(&changes)
        .execute(self.conn)
        .map_err(SupplierStoreError::from)
    }
}
