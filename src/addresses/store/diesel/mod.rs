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

//! Database-backed implementation of the [AddressStore], powered by
//! [diesel].

pub(in crate) mod models;
mod operations;

use chrono::Utc;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::{pg::PgConnection, prelude::*, update};
use serde_json::Value as JsonValue;

use crate::error::{
    ConstraintViolationError, ConstraintViolationType, InternalError,
    ResourceTemporarilyUnavailableError,
};
use crate::suppliers::store::diesel::schema::suppliers;

use super::{
    Address, AddressChanges, AddressList, AddressListFilters, AddressStore, AddressStoreError,
    NewAddress,
};

use models::{AddressChangesetModel, AddressModel, NewAddressModel};
use operations::add_address::AddressStoreAddAddressOperation as _;
use operations::list_addresses::AddressStoreListAddressesOperation as _;
use operations::update_address::AddressStoreUpdateAddressOperation as _;
use operations::AddressStoreOperations;

/// Manages creating supplier addresses in the database
#[derive(Clone)]
pub struct DieselAddressStore<C: diesel::Connection + 'static> {
    connection_pool: Pool<ConnectionManager<C>>,
}

impl<C: diesel::Connection> DieselAddressStore<C> {
    /// Creates a new DieselAddressStore
    ///
    /// # Arguments
    ///
    ///  * `connection_pool`: connection pool to the database
    pub fn new(connection_pool: Pool<ConnectionManager<C>>) -> Self {
        DieselAddressStore { connection_pool }
    }
}

impl AddressStore for DieselAddressStore<PgConnection> {
    fn add_address(
        &self,
        supplier_id: i64,
        address: NewAddress,
    ) -> Result<i64, AddressStoreError> {
        AddressStoreOperations::new(&*self.connection_pool.get().map_err(|err| {
            AddressStoreError::ResourceTemporarilyUnavailableError(
                ResourceTemporarilyUnavailableError::from_source(Box::new(err)),
            )
        })?)
        .add_address(supplier_id, address)
    }

    fn list_addresses(
        &self,
        filters: AddressListFilters,
        search: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> Result<AddressList, AddressStoreError> {
        AddressStoreOperations::new(&*self.connection_pool.get().map_err(|err| {
            AddressStoreError::ResourceTemporarilyUnavailableError(
                ResourceTemporarilyUnavailableError::from_source(Box::new(err)),
            )
        })?)
        .list_addresses(filters, search, offset, limit)
    }

    fn update_address(
        &self,
        address_id: i64,
        changes: AddressChanges,
    ) -> Result<usize, AddressStoreError> {
        if changes.is_empty() {
            return Ok(0);
        }
        AddressStoreOperations::new(&*self.connection_pool.get().map_err(|err| {
            AddressStoreError::ResourceTemporarilyUnavailableError(
                ResourceTemporarilyUnavailableError::from_source(Box::new(err)),
            )
        })?)
        .update_address(address_id, changes.into())
    }

    fn delete_address(&self, _address_id: i64) -> Result<(), AddressStoreError> {
        Err(AddressStoreError::NotImplemented(
            "deleting addresses".to_string(),
        ))
    }
}

impl From<diesel::result::Error> for AddressStoreError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            ) => AddressStoreError::ConstraintViolationError(
                ConstraintViolationError::from_source_with_violation_type(
                    ConstraintViolationType::Unique,
                    Box::new(err),
                ),
            ),
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                _,
            ) => AddressStoreError::ConstraintViolationError(
                ConstraintViolationError::from_source_with_violation_type(
                    ConstraintViolationType::ForeignKey,
                    Box::new(err),
                ),
            ),
            _ => AddressStoreError::InternalError(InternalError::from_source(Box::new(err))),
        }
    }
}

impl From<AddressModel> for Address {
    fn from(model: AddressModel) -> Self {
        Self {
            address_id: model.address_id,
            supplier_id: model.supplier_id,
            address_kind: model.address_kind,
            address_type: model.address_type,
            address_line1: model.address_line1,
            address_line2: model.address_line2,
            city: model.city,
            state: model.state,
            postal_code: model.postal_code,
            country: model.country,
            phone_dial_code: model.phone_dial_code,
            phone_number: model.phone_number,
            is_primary: model.is_primary,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<AddressChanges> for AddressChangesetModel {
    fn from(changes: AddressChanges) -> Self {
        Self {
            address_kind: changes.address_kind,
            address_type: changes.address_type,
            address_line1: changes.address_line1,
            address_line2: changes.address_line2,
            city: changes.city,
            state: changes.state,
            postal_code: changes.postal_code,
            country: changes.country,
            phone_dial_code: changes.phone_dial_code,
            phone_number: changes.phone_number,
            is_primary: changes.is_primary,
            updated_at: Utc::now().naive_utc(),
        }
    }
}

pub(in crate) fn make_address_models(
    supplier_id: i64,
    addresses: Vec<NewAddress>,
) -> Vec<NewAddressModel> {
    addresses
        .into_iter()
        .map(|address| NewAddressModel {
            supplier_id,
            address_kind: address.address_kind,
            address_type: address.address_type,
            address_line1: address.address_line1,
            address_line2: address.address_line2,
            city: address.city,
            state: address.state,
            postal_code: address.postal_code,
            country: address.country,
            phone_dial_code: address.phone_dial_code,
            phone_number: address.phone_number,
            is_primary: address.is_primary,
        })
        .collect()
}

/// Appends `address_id` to the supplier's billing or shipping id list,
/// depending on `address_kind`. Must run inside the caller's transaction.
pub(in crate) fn append_address_id(
    conn: &PgConnection,
    supplier_id: i64,
    address_kind: &str,
    address_id: i64,
) -> Result<(), diesel::result::Error> {
    if address_kind == "billing" {
        let current: Option<JsonValue> = suppliers::table
            .select(suppliers::billing_address_ids)
            .filter(suppliers::supplier_id.eq(supplier_id))
            .first(conn)?;
        update(suppliers::table.filter(suppliers::supplier_id.eq(supplier_id)))
            .set(suppliers::billing_address_ids.eq(push_id(current, address_id)))
            .execute(conn)?;
    } else {
        let current: Option<JsonValue> = suppliers::table
            .select(suppliers::shipping_address_ids)
            .filter(suppliers::supplier_id.eq(supplier_id))
            .first(conn)?;
        update(suppliers::table.filter(suppliers::supplier_id.eq(supplier_id)))
            .set(suppliers::shipping_address_ids.eq(push_id(current, address_id)))
            .execute(conn)?;
    }
    Ok(())
}

fn push_id(current: Option<JsonValue>, address_id: i64) -> JsonValue {
    let mut ids = match current {
        Some(JsonValue::Array(ids)) => ids,
        _ => Vec::new(),
    };
    ids.push(JsonValue::from(address_id));
    JsonValue::Array(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn push_id_appends_to_existing_array() {
        let current = Some(serde_json::json!([3, 4]));
        assert_eq!(push_id(current, 9), serde_json::json!([3, 4, 9]));
    }

    #[test]
    fn push_id_starts_a_fresh_array() {
        assert_eq!(push_id(None, 9), serde_json::json!([9]));
        assert_eq!(
            push_id(Some(serde_json::json!("corrupt")), 9),
            serde_json::json!([9])
        );
    }

    #[test]
    fn address_models_carry_the_supplier_id() {
        let addresses = vec![NewAddress {
            address_kind: "shipping".to_string(),
            address_type: "warehouse".to_string(),
            address_line1: "Plot 4, Export Zone".to_string(),
            address_line2: None,
            city: "Chennai".to_string(),
            state: "Tamil Nadu".to_string(),
            postal_code: "600001".to_string(),
            country: "India".to_string(),
            phone_dial_code: None,
            phone_number: None,
            is_primary: true,
        }];

        let models = make_address_models(42, addresses);

        assert_eq!(models.len(), 1);
        assert_eq!(models[0].supplier_id, 42);
        assert_eq!(models[0].address_kind, "shipping");
        assert!(models[0].is_primary);
    }
}
