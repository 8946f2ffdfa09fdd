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

use chrono::{NaiveDateTime, Utc};
use diesel::{pg::PgConnection, prelude::*, result::Error::NotFound, update};

use crate::suppliers::store::diesel::schema::suppliers;
use crate::suppliers::store::SupplierStoreError;

use super::SupplierStoreOperations;

pub(in crate::suppliers::store::diesel) trait SupplierStoreSoftDeleteSupplierOperation {
    fn toggle_soft_delete(&self, supplier_id: i64) -> Result<usize, SupplierStoreError>;
}

impl<'a> SupplierStoreSoftDeleteSupplierOperation for SupplierStoreOperations<'a, PgConnection> {
    fn toggle_soft_delete(&self, supplier_id: i64) -> Result<usize, SupplierStoreError> {
        self.conn.transaction::<_, SupplierStoreError, _>(|| {
            let deleted_at = suppliers::table
                .select(suppliers::deleted_at)
                .filter(suppliers::supplier_id.eq(supplier_id))
                .first::<Option<NaiveDateTime>>(self.conn)
                .map(Some)
                .or_else(|err| if err == NotFound { Ok(None) } else { Err(err) })?;

            let now = Utc::now().naive_utc();

            match deleted_at {
                None => Ok(0),
                // Not yet deleted: mark deleted and deactivate
                Some(None) => update(
                    suppliers::table.filter(suppliers::supplier_id.eq(supplier_id)),
                )
                .set((
                    suppliers::deleted_at.eq(Some(now)),
                    suppliers::is_active.eq(false),
                    suppliers::updated_at.eq(now),
                ))
                .execute(self.conn)
                .map_err(SupplierStoreError::from),
                // Already deleted: restore and reactivate
                Some(Some(_)) => update(
                    suppliers::table.filter(suppliers::supplier_id.eq(supplier_id)),
                )
                .set((
                    suppliers::deleted_at.eq(None::<NaiveDateTime>),
                    suppliers::is_active.eq(true),
                    suppliers::updated_at.eq(now),
                ))
                .execute(self.conn)
                .map_err(SupplierStoreError::from),
            }
        })
    }
}
