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

//! Database-backed implementation of the [SupplierStore], powered by
//! [diesel].

pub(in crate) mod models;
mod operations;
pub(in crate) mod schema;

use chrono::Utc;
use diesel::r2d2::{ConnectionManager, Pool};
use serde_json::Value as JsonValue;

use crate::addresses::store::diesel::models::AddressModel;
use crate::addresses::store::{Address, NewAddress};
use crate::error::{
    ConstraintViolationError, ConstraintViolationType, InternalError,
    ResourceTemporarilyUnavailableError,
};

use super::{
    NewSupplier, Supplier, SupplierChanges, SupplierList, SupplierListFilters, SupplierStore,
    SupplierStoreError,
};

use models::{NewSupplierModel, SupplierChangesetModel, SupplierModel};
use operations::add_supplier::SupplierStoreAddSupplierOperation as _;
use operations::check_duplicate::SupplierStoreCheckDuplicateOperation as _;
use operations::fetch_supplier::SupplierStoreFetchSupplierOperation as _;
use operations::hard_delete_supplier::SupplierStoreHardDeleteSupplierOperation as _;
use operations::list_suppliers::SupplierStoreListSuppliersOperation as _;
use operations::soft_delete_supplier::SupplierStoreSoftDeleteSupplierOperation as _;
use operations::update_supplier::SupplierStoreUpdateSupplierOperation as _;
use operations::SupplierStoreOperations;

/// Manages creating suppliers in the database
#[derive(Clone)]
pub struct DieselSupplierStore<C: diesel::Connection + 'static> {
    connection_pool: Pool<ConnectionManager<C>>,
}

impl<C: diesel::Connection> DieselSupplierStore<C> {
    /// Creates a new DieselSupplierStore
    ///
    /// # Arguments
    ///
    ///  * `connection_pool`: connection pool to the database
    pub fn new(connection_pool: Pool<ConnectionManager<C>>) -> Self {
        DieselSupplierStore { connection_pool }
    }
}

impl SupplierStore for DieselSupplierStore<diesel::pg::PgConnection> {
    fn check_duplicate(
        &self,
        email: Option<&str>,
        work_phone: Option<&str>,
        company_name: Option<&str>,
        display_company_name: Option<&str>,
    ) -> Result<Vec<Supplier>, SupplierStoreError> {
        SupplierStoreOperations::new(&*self.connection_pool.get().map_err(|err| {
            SupplierStoreError::ResourceTemporarilyUnavailableError(
                ResourceTemporarilyUnavailableError::from_source(Box::new(err)),
            )
        })?)
        .check_duplicate(email, work_phone, company_name, display_company_name)
    }

    fn add_supplier(
        &self,
        supplier: NewSupplier,
        addresses: Vec<NewAddress>,
    ) -> Result<i64, SupplierStoreError> {
        SupplierStoreOperations::new(&*self.connection_pool.get().map_err(|err| {
            SupplierStoreError::ResourceTemporarilyUnavailableError(
                ResourceTemporarilyUnavailableError::from_source(Box::new(err)),
            )
        })?)
        .add_supplier(supplier.into(), addresses)
    }

    fn list_suppliers(
        &self,
        filters: SupplierListFilters,
        search: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> Result<SupplierList, SupplierStoreError> {
        SupplierStoreOperations::new(&*self.connection_pool.get().map_err(|err| {
            SupplierStoreError::ResourceTemporarilyUnavailableError(
                ResourceTemporarilyUnavailableError::from_source(Box::new(err)),
            )
        })?)
        .list_suppliers(filters, search, offset, limit)
    }

    fn fetch_supplier(&self, supplier_id: i64) -> Result<Option<Supplier>, SupplierStoreError> {
        SupplierStoreOperations::new(&*self.connection_pool.get().map_err(|err| {
            SupplierStoreError::ResourceTemporarilyUnavailableError(
                ResourceTemporarilyUnavailableError::from_source(Box::new(err)),
            )
        })?)
        .fetch_supplier(supplier_id)
    }

    fn update_supplier(
        &self,
        supplier_id: i64,
        changes: SupplierChanges,
    ) -> Result<usize, SupplierStoreError> {
        if changes.is_empty() {
            return Ok(0);
        }
        SupplierStoreOperations::new(&*self.connection_pool.get().map_err(|err| {
            SupplierStoreError::ResourceTemporarilyUnavailableError(
                ResourceTemporarilyUnavailableError::from_source(Box::new(err)),
            )
        })?)
        .update_supplier(supplier_id, changes.into())
    }

    fn toggle_soft_delete(&self, supplier_id: i64) -> Result<usize, SupplierStoreError> {
        SupplierStoreOperations::new(&*self.connection_pool.get().map_err(|err| {
            SupplierStoreError::ResourceTemporarilyUnavailableError(
                ResourceTemporarilyUnavailableError::from_source(Box::new(err)),
            )
        })?)
        .toggle_soft_delete(supplier_id)
    }

    fn hard_delete_supplier(&self, supplier_id: i64) -> Result<usize, SupplierStoreError> {
        SupplierStoreOperations::new(&*self.connection_pool.get().map_err(|err| {
            SupplierStoreError::ResourceTemporarilyUnavailableError(
                ResourceTemporarilyUnavailableError::from_source(Box::new(err)),
            )
        })?)
        .hard_delete_supplier(supplier_id)
    }
}

impl From<diesel::result::Error> for SupplierStoreError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            ) => SupplierStoreError::ConstraintViolationError(
                ConstraintViolationError::from_source_with_violation_type(
                    ConstraintViolationType::Unique,
                    Box::new(err),
                ),
            ),
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                _,
            ) => SupplierStoreError::ConstraintViolationError(
                ConstraintViolationError::from_source_with_violation_type(
                    ConstraintViolationType::ForeignKey,
                    Box::new(err),
                ),
            ),
            _ => SupplierStoreError::InternalError(InternalError::from_source(Box::new(err))),
        }
    }
}

impl From<SupplierModel> for Supplier {
    fn from(model: SupplierModel) -> Self {
        Self {
            supplier_id: model.supplier_id,
            salutation: model.salutation,
            first_name: model.first_name,
            last_name: model.last_name,
            company_name: model.company_name,
            display_company_name: model.display_company_name,
            email: model.email,
            work_phone_country_code: model.work_phone_country_code,
            work_phone: model.work_phone,
            mobile_phone_country_code: model.mobile_phone_country_code,
            mobile_phone: model.mobile_phone,
            gst: model.gst,
            pan: model.pan,
            is_msme_registered: model.is_msme_registered,
            tds_tax_code: model.tds_tax_code,
            currency: model.currency,
            payment_terms: model.payment_terms,
            billing_address_ids: json_ids(model.billing_address_ids),
            shipping_address_ids: json_ids(model.shipping_address_ids),
            is_active: model.is_active,
            deleted_at: model.deleted_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
            addresses: Vec::new(),
        }
    }
}

impl From<NewSupplier> for NewSupplierModel {
    fn from(supplier: NewSupplier) -> Self {
        Self {
            salutation: supplier.salutation,
            first_name: supplier.first_name,
            last_name: supplier.last_name,
            company_name: supplier.company_name,
            display_company_name: supplier.display_company_name,
            email: supplier.email,
            work_phone_country_code: supplier.work_phone_country_code,
            work_phone: supplier.work_phone,
            mobile_phone_country_code: supplier.mobile_phone_country_code,
            mobile_phone: supplier.mobile_phone,
            gst: supplier.gst,
            pan: supplier.pan,
            is_msme_registered: supplier.is_msme_registered,
            tds_tax_code: supplier.tds_tax_code,
            currency: supplier.currency,
            payment_terms: supplier.payment_terms,
            is_active: supplier.is_active,
        }
    }
}

impl From<SupplierChanges> for SupplierChangesetModel {
    fn from(changes: SupplierChanges) -> Self {
        Self {
            salutation: changes.salutation,
            first_name: changes.first_name,
            last_name: changes.last_name,
            company_name: changes.company_name,
            display_company_name: changes.display_company_name,
            email: changes.email,
            work_phone_country_code: changes.work_phone_country_code,
            work_phone: changes.work_phone,
            mobile_phone_country_code: changes.mobile_phone_country_code,
            mobile_phone: changes.mobile_phone,
            gst: changes.gst,
            pan: changes.pan,
            is_msme_registered: changes.is_msme_registered,
            tds_tax_code: changes.tds_tax_code,
            currency: changes.currency,
            payment_terms: changes.payment_terms,
            is_active: changes.is_active,
            updated_at: Utc::now().naive_utc(),
        }
    }
}

fn json_ids(value: Option<JsonValue>) -> Vec<i64> {
    match value {
        Some(JsonValue::Array(values)) => values.iter().filter_map(JsonValue::as_i64).collect(),
        _ => Vec::new(),
    }
}

/// Folds joined supplier/address rows into suppliers with their addresses
/// attached. Suppliers keep the order of their first row; addresses keep
/// row order within a supplier.
pub(in crate::suppliers) fn collect_suppliers(
    rows: Vec<(SupplierModel, Option<AddressModel>)>,
) -> Vec<Supplier> {
    let mut suppliers: Vec<Supplier> = Vec::new();
    for (supplier_model, address_model) in rows {
        let address = address_model.map(Address::from);
        match suppliers
            .iter_mut()
            .find(|supplier| supplier.supplier_id == supplier_model.supplier_id)
        {
            Some(supplier) => {
                if let Some(address) = address {
                    supplier.addresses.push(address);
                }
            }
            None => {
                let mut supplier = Supplier::from(supplier_model);
                if let Some(address) = address {
                    supplier.addresses.push(address);
                }
                suppliers.push(supplier);
            }
        }
    }
    suppliers
}
