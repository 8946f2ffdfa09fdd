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
use crate::addresses::store::{Address, AddressList, AddressListFilters, AddressStoreError};
use crate::error::InternalError;
use crate::paging::Paging;
use crate::suppliers::store::diesel::schema::supplier_address;

use super::AddressStoreOperations;

pub(in crate::addresses::store::diesel) trait AddressStoreListAddressesOperation {
    fn list_addresses(
        &self,
        filters: AddressListFilters,
        search: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> Result<AddressList, AddressStoreError>;
}

impl<'a> AddressStoreListAddressesOperation for AddressStoreOperations<'a, PgConnection> {
    fn list_addresses(
        &self,
        filters: AddressListFilters,
        search: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> Result<AddressList, AddressStoreError> {
        let search = search.map(str::trim).filter(|s| !s.is_empty());

        let mut query = supplier_address::table
            .into_boxed()
            .select(supplier_address::all_columns)
            .order(supplier_address::created_at.desc())
            .offset(offset)
            .limit(limit);

        // The count runs under the same predicates as the page so the
        // reported total matches what is actually listable.
        let mut count_query = supplier_address::table
            .into_boxed()
            .select(supplier_address::all_columns);

        if let Some(search) = search {
            let pattern = format!("%{}%", search);
            query = query.filter(
                supplier_address::city
                    .like(pattern.clone())
                    .or(supplier_address::state.like(pattern.clone()))
                    .or(supplier_address::country.like(pattern.clone()))
                    .or(supplier_address::postal_code.like(pattern.clone())),
            );
            count_query = count_query.filter(
                supplier_address::city
                    .like(pattern.clone())
                    .or(supplier_address::state.like(pattern.clone()))
                    .or(supplier_address::country.like(pattern.clone()))
                    .or(supplier_address::postal_code.like(pattern)),
            );
        }

        if filters.primary {
            query = query.filter(supplier_address::is_primary.eq(true));
            count_query = count_query.filter(supplier_address::is_primary.eq(true));
        }

        if filters.shipping {
            query = query.filter(supplier_address::address_kind.eq("shipping"));
            count_query = count_query.filter(supplier_address::address_kind.eq("shipping"));
        }

        if filters.billing {
            query = query.filter(supplier_address::address_kind.eq("billing"));
            count_query = count_query.filter(supplier_address::address_kind.eq("billing"));
        }

        let models = query.load::<AddressModel>(self.conn).map_err(|err| {
            AddressStoreError::InternalError(InternalError::from_source(Box::new(err)))
        })?;

        let total = count_query.count().get_result(self.conn).map_err(|err| {
            AddressStoreError::InternalError(InternalError::from_source(Box::new(err)))
        })?;

        Ok(AddressList::new(
            models.into_iter().map(Address::from).collect(),
            Paging::new(offset, limit, total),
        ))
    }
}
