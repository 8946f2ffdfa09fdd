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

use diesel::{pg::PgConnection, prelude::*, result::Error::NotFound};

use crate::addresses::store::diesel::models::AddressModel;
use crate::addresses::store::Address;
use crate::error::InternalError;
use crate::suppliers::store::diesel::models::SupplierModel;
use crate::suppliers::store::diesel::schema::{supplier_address, suppliers};
use crate::suppliers::store::{Supplier, SupplierStoreError};

use super::SupplierStoreOperations;

pub(in crate::suppliers::store::diesel) trait SupplierStoreFetchSupplierOperation {
    fn fetch_supplier(&self, supplier_id: i64) -> Result<Option<Supplier>, SupplierStoreError>;
}

impl<'a> SupplierStoreFetchSupplierOperation for SupplierStoreOperations<'a, PgConnection> {
    fn fetch_supplier(&self, supplier_id: i64) -> Result<Option<Supplier>, SupplierStoreError> {
        let model = suppliers::table
            .filter(
                suppliers::supplier_id
                    .eq(supplier_id)
                    .and(suppliers::is_active.eq(true))
                    .and(suppliers::deleted_at.is_null()),
            )
            .first::<SupplierModel>(self.conn)
            .map(Some)
            .or_else(|err| if err == NotFound { Ok(None) } else { Err(err) })
            .map_err(|err| {
                SupplierStoreError::InternalError(InternalError::from_source(Box::new(err)))
            })?;

        let model = match model {
            Some(model) => model,
            None => return Ok(None),
        };

        let addresses = supplier_address::table
            .filter(supplier_address::supplier_id.eq(supplier_id))
            .order((
                supplier_address::is_primary.desc(),
                supplier_address::created_at.asc(),
            ))
            .load::<AddressModel>(self.conn)
            .map_err(|err| {
                SupplierStoreError::InternalError(InternalError::from_source(Box::new(err)))
            })?;

        let mut supplier = Supplier::from(model);
        supplier.addresses = addresses.into_iter().map(Address::from).collect();

        Ok(Some(supplier))
    }
}
