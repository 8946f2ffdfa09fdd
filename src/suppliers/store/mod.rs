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

//! The supplier store provides querying and persistence of suppliers and
//! their embedded addresses.

pub mod diesel;
mod error;

use chrono::NaiveDateTime;

use crate::addresses::store::{Address, NewAddress};
use crate::paging::Paging;

pub use error::SupplierStoreError;

/// Represents a supplier and its associated addresses
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Supplier {
    pub supplier_id: i64,
    pub salutation: String,
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub display_company_name: String,
    pub email: String,
    pub work_phone_country_code: Option<String>,
    pub work_phone: Option<String>,
    pub mobile_phone_country_code: Option<String>,
    pub mobile_phone: Option<String>,
    pub gst: Option<String>,
    pub pan: Option<String>,
    pub is_msme_registered: bool,
    pub tds_tax_code: Option<String>,
    pub currency: String,
    pub payment_terms: Option<String>,
    pub billing_address_ids: Vec<i64>,
    pub shipping_address_ids: Vec<i64>,
    pub is_active: bool,
    pub deleted_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub addresses: Vec<Address>,
}

/// A supplier that has not yet been written to the backing store
#[derive(Clone, Debug, PartialEq)]
pub struct NewSupplier {
    pub salutation: String,
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub display_company_name: String,
    pub email: String,
    pub work_phone_country_code: Option<String>,
    pub work_phone: Option<String>,
    pub mobile_phone_country_code: Option<String>,
    pub mobile_phone: Option<String>,
    pub gst: Option<String>,
    pub pan: Option<String>,
    pub is_msme_registered: bool,
    pub tds_tax_code: Option<String>,
    pub currency: String,
    pub payment_terms: Option<String>,
    pub is_active: bool,
}

/// The fields of a supplier that may be changed by an update. Fields left
/// as `None` are not touched by the update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SupplierChanges {
    pub salutation: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company_name: Option<String>,
    pub display_company_name: Option<String>,
    pub email: Option<String>,
    pub work_phone_country_code: Option<String>,
    pub work_phone: Option<String>,
    pub mobile_phone_country_code: Option<String>,
    pub mobile_phone: Option<String>,
    pub gst: Option<String>,
    pub pan: Option<String>,
    pub is_msme_registered: Option<bool>,
    pub tds_tax_code: Option<String>,
    pub currency: Option<String>,
    pub payment_terms: Option<String>,
    pub is_active: Option<bool>,
}

impl SupplierChanges {
    pub fn is_empty(&self) -> bool {
        self.salutation.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.company_name.is_none()
            && self.display_company_name.is_none()
            && self.email.is_none()
            && self.work_phone_country_code.is_none()
            && self.work_phone.is_none()
            && self.mobile_phone_country_code.is_none()
            && self.mobile_phone.is_none()
            && self.gst.is_none()
            && self.pan.is_none()
            && self.is_msme_registered.is_none()
            && self.tds_tax_code.is_none()
            && self.currency.is_none()
            && self.payment_terms.is_none()
            && self.is_active.is_none()
    }
}

/// Filters applied to a supplier listing. Unknown keywords are ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SupplierListFilters {
    pub inactive: bool,
    pub msme_registered: bool,
    pub not_msme_registered: bool,
}

impl SupplierListFilters {
    pub fn from_keywords(keywords: &[String]) -> Self {
        let mut filters = SupplierListFilters::default();
        for keyword in keywords {
            match keyword.as_str() {
                "inactive" => filters.inactive = true,
                "msme_registered" => filters.msme_registered = true,
                "not_msme_registered" => filters.not_msme_registered = true,
                _ => (),
            }
        }
        filters
    }
}

/// A paged listing of suppliers
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SupplierList {
    pub data: Vec<Supplier>,
    pub paging: Paging,
}

impl SupplierList {
    pub fn new(data: Vec<Supplier>, paging: Paging) -> Self {
        Self { data, paging }
    }
}

pub trait SupplierStore: Send + Sync {
    /// Fetches all suppliers that collide with the given identifying
    /// values. Returns an empty list when every value is `None`.
    fn check_duplicate(
        &self,
        email: Option<&str>,
        work_phone: Option<&str>,
        company_name: Option<&str>,
        display_company_name: Option<&str>,
    ) -> Result<Vec<Supplier>, SupplierStoreError>;

    /// Adds a supplier and its addresses in a single transaction, returning
    /// the id of the new supplier.
    fn add_supplier(
        &self,
        supplier: NewSupplier,
        addresses: Vec<NewAddress>,
    ) -> Result<i64, SupplierStoreError>;

    /// Lists a page of suppliers matching the given filters and search
    /// term, newest first, with each supplier's addresses attached.
    fn list_suppliers(
        &self,
        filters: SupplierListFilters,
        search: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> Result<SupplierList, SupplierStoreError>;

    /// Fetches a single active, non-deleted supplier with its addresses
    fn fetch_supplier(&self, supplier_id: i64) -> Result<Option<Supplier>, SupplierStoreError>;

    /// Applies the given changes to a non-deleted supplier, returning the
    /// number of rows affected. An empty change set affects zero rows.
    fn update_supplier(
        &self,
        supplier_id: i64,
        changes: SupplierChanges,
    ) -> Result<usize, SupplierStoreError>;

    /// Flips the supplier between deleted and restored states, returning
    /// the number of rows affected
    fn toggle_soft_delete(&self, supplier_id: i64) -> Result<usize, SupplierStoreError>;

    /// Permanently removes a supplier, but only if it has been deactivated
    /// first. Returns the number of rows affected.
    fn hard_delete_supplier(&self, supplier_id: i64) -> Result<usize, SupplierStoreError>;
}

impl<SS> SupplierStore for Box<SS>
where
    SS: SupplierStore + ?Sized,
{
    fn check_duplicate(
        &self,
        email: Option<&str>,
        work_phone: Option<&str>,
        company_name: Option<&str>,
        display_company_name: Option<&str>,
    ) -> Result<Vec<Supplier>, SupplierStoreError> {
        (**self).check_duplicate(email, work_phone, company_name, display_company_name)
    }

    fn add_supplier(
        &self,
        supplier: NewSupplier,
        addresses: Vec<NewAddress>,
    ) -> Result<i64, SupplierStoreError> {
        (**self).add_supplier(supplier, addresses)
    }

    fn list_suppliers(
        &self,
        filters: SupplierListFilters,
        search: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> Result<SupplierList, SupplierStoreError> {
        (**self).list_suppliers(filters, search, offset, limit)
    }

    fn fetch_supplier(&self, supplier_id: i64) -> Result<Option<Supplier>, SupplierStoreError> {
        (**self).fetch_supplier(supplier_id)
    }

    fn update_supplier(
        &self,
        supplier_id: i64,
        changes: SupplierChanges,
    ) -> Result<usize, SupplierStoreError> {
        (**self).update_supplier(supplier_id, changes)
    }

    fn toggle_soft_delete(&self, supplier_id: i64) -> Result<usize, SupplierStoreError> {
        (**self).toggle_soft_delete(supplier_id)
    }

    fn hard_delete_supplier(&self, supplier_id: i64) -> Result<usize, SupplierStoreError> {
        (**self).hard_delete_supplier(supplier_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn filters_default_to_active_listing() {
        let filters = SupplierListFilters::from_keywords(&[]);
        assert_eq!(
            filters,
            SupplierListFilters {
                inactive: false,
                msme_registered: false,
                not_msme_registered: false,
            }
        );
    }

    #[test]
    fn filters_recognize_known_keywords() {
        let keywords = vec!["inactive".to_string(), "msme_registered".to_string()];
        let filters = SupplierListFilters::from_keywords(&keywords);
        assert_eq!(
            filters,
            SupplierListFilters {
                inactive: true,
                msme_registered: true,
                not_msme_registered: false,
            }
        );
    }

    #[test]
    fn filters_ignore_unknown_keywords() {
        let keywords = vec!["bogus".to_string(), "not_msme_registered".to_string()];
        let filters = SupplierListFilters::from_keywords(&keywords);
        assert_eq!(
            filters,
            SupplierListFilters {
                inactive: false,
                msme_registered: false,
                not_msme_registered: true,
            }
        );
    }

    #[test]
    fn empty_change_set_is_detected() {
        assert!(SupplierChanges::default().is_empty());
        let changes = SupplierChanges {
            email: Some("procurement@acme.test".to_string()),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }
}
