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

use diesel::{pg::PgConnection, prelude::*};

use crate::addresses::store::diesel::models::AddressModel;
use crate::error::InternalError;
use crate::paging::Paging;
use crate::suppliers::store::diesel::models::SupplierModel;
use crate::suppliers::store::diesel::schema::{supplier_address, suppliers};
use crate::suppliers::store::diesel::collect_suppliers;
use crate::suppliers::store::{SupplierList, SupplierListFilters, SupplierStoreError};

use super::SupplierStoreOperations;

pub(in crate::suppliers::store::diesel) trait SupplierStoreListSuppliersOperation {
    fn list_suppliers(
        &self,
        filters: SupplierListFilters,
        search: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> Result<SupplierList, SupplierStoreError>;
}

impl<'a> SupplierStoreListSuppliersOperation for SupplierStoreOperations<'a, PgConnection> {
    fn list_suppliers(
        &self,
        filters: SupplierListFilters,
        search: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> Result<SupplierList, SupplierStoreError> {
        let search = search.map(str::trim).filter(|s| !s.is_empty());

        let mut query = suppliers::table
            .left_join(supplier_address::table)
            .select((
                suppliers::all_columns,
                supplier_address::all_columns.nullable(),
            ))
            .into_boxed()
            .order(suppliers::created_at.desc())
            .offset(offset)
            .limit(limit);

        let mut count_query = suppliers::table.into_boxed().select(suppliers::all_columns);

        // The search OR-group has to be installed before the filter
        // predicates so `or_filter` does not swallow them.
        if let Some(search) = search {
            let pattern = format!("%{}%", search);
            query = query
                .filter(
                    suppliers::company_name
                        .like(pattern.clone())
                        .or(suppliers::display_company_name.like(pattern.clone()))
                        .or(suppliers::email.like(pattern.clone()))
                        .or(suppliers::first_name.like(pattern.clone()))
                        .or(suppliers::last_name.like(pattern.clone())),
                )
                .or_filter(suppliers::work_phone.like(pattern.clone()))
                .or_filter(suppliers::mobile_phone.like(pattern.clone()));
            count_query = count_query
                .filter(
                    suppliers::company_name
                        .like(pattern.clone())
                        .or(suppliers::display_company_name.like(pattern.clone()))
                        .or(suppliers::email.like(pattern.clone()))
                        .or(suppliers::first_name.like(pattern.clone()))
                        .or(suppliers::last_name.like(pattern.clone())),
                )
                .or_filter(suppliers::work_phone.like(pattern.clone()))
                .or_filter(suppliers::mobile_phone.like(pattern));
        }

        if filters.inactive {
            query = query
                .filter(suppliers::is_active.eq(false))
                .filter(suppliers::deleted_at.is_not_null());
            count_query = count_query
                .filter(suppliers::is_active.eq(false))
                .filter(suppliers::deleted_at.is_not_null());
        } else {
            query = query
                .filter(suppliers::is_active.eq(true))
                .filter(suppliers::deleted_at.is_null());
            count_query = count_query
                .filter(suppliers::is_active.eq(true))
                .filter(suppliers::deleted_at.is_null());
        }

        if filters.msme_registered {
            query = query.filter(suppliers::is_msme_registered.eq(true));
            count_query = count_query.filter(suppliers::is_msme_registered.eq(true));
        }

        if filters.not_msme_registered {
            query = query.filter(suppliers::is_msme_registered.eq(false));
            count_query = count_query.filter(suppliers::is_msme_registered.eq(false));
        }

        let rows = query
            .load::<(SupplierModel, Option<AddressModel>)>(self.conn)
            .map_err(|err| {
                SupplierStoreError::InternalError(InternalError::from_source(Box::new(err)))
            })?;

        let total = count_query.count().get_result(self.conn).map_err(|err| {
            SupplierStoreError::InternalError(InternalError::from_source(Box::new(err)))
        })?;

        Ok(SupplierList::new(
            collect_suppliers(rows),
            Paging::new(offset, limit, total),
        ))
    }
}
