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

//! The address store provides querying and persistence of supplier
//! addresses.

pub mod diesel;
mod error;

use chrono::NaiveDateTime;

use crate::paging::Paging;

pub use error::AddressStoreError;

/// Represents a billing or shipping address attached to a supplier
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Address {
    pub address_id: i64,
    pub supplier_id: i64,
    pub address_kind: String,
    pub address_type: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub phone_dial_code: Option<String>,
    pub phone_number: Option<String>,
    pub is_primary: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// An address that has not yet been written to the backing store. The
/// owning supplier id is supplied by the operation that persists it.
#[derive(Clone, Debug, PartialEq)]
pub struct NewAddress {
    pub address_kind: String,
    pub address_type: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub phone_dial_code: Option<String>,
    pub phone_number: Option<String>,
    pub is_primary: bool,
}

/// The fields of an address that may be changed by an update. Fields left
/// as `None` are not touched by the update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AddressChanges {
    pub address_kind: Option<String>,
    pub address_type: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub phone_dial_code: Option<String>,
    pub phone_number: Option<String>,
    pub is_primary: Option<bool>,
}

impl AddressChanges {
    pub fn is_empty(&self) -> bool {
        self.address_kind.is_none()
            && self.address_type.is_none()
            && self.address_line1.is_none()
            && self.address_line2.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.postal_code.is_none()
            && self.country.is_none()
            && self.phone_dial_code.is_none()
            && self.phone_number.is_none()
            && self.is_primary.is_none()
    }
}

/// Filters applied to an address listing. Unknown keywords are ignored;
/// recognized keywords are ANDed together.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AddressListFilters {
    pub primary: bool,
    pub shipping: bool,
    pub billing: bool,
}

impl AddressListFilters {
    pub fn from_keywords(keywords: &[String]) -> Self {
        let mut filters = AddressListFilters::default();
        for keyword in keywords {
            match keyword.as_str() {
                "primary" => filters.primary = true,
                "shipping" => filters.shipping = true,
                "billing" => filters.billing = true,
                _ => (),
            }
        }
        filters
    }
}

/// A paged listing of addresses
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct AddressList {
    pub data: Vec<Address>,
    pub paging: Paging,
}

impl AddressList {
    pub fn new(data: Vec<Address>, paging: Paging) -> Self {
        Self { data, paging }
    }
}

pub trait AddressStore: Send + Sync {
    /// Adds an address to an existing supplier and records its id on the
    /// supplier's matching address id list, returning the new address id
    fn add_address(
        &self,
        supplier_id: i64,
        address: NewAddress,
    ) -> Result<i64, AddressStoreError>;

    /// Lists a page of addresses matching the given filters and search
    /// term, newest first
    fn list_addresses(
        &self,
        filters: AddressListFilters,
        search: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> Result<AddressList, AddressStoreError>;

    /// Applies the given changes to an address, returning the number of
    /// rows affected. An empty change set affects zero rows.
    fn update_address(
        &self,
        address_id: i64,
        changes: AddressChanges,
    ) -> Result<usize, AddressStoreError>;

    /// Removes an address. No backend currently supports this; it always
    /// returns [AddressStoreError::NotImplemented].
    fn delete_address(&self, address_id: i64) -> Result<(), AddressStoreError>;
}

impl<AS> AddressStore for Box<AS>
where
    AS: AddressStore + ?Sized,
{
    fn add_address(
        &self,
        supplier_id: i64,
        address: NewAddress,
    ) -> Result<i64, AddressStoreError> {
        (**self).add_address(supplier_id, address)
    }

    fn list_addresses(
        &self,
        filters: AddressListFilters,
        search: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> Result<AddressList, AddressStoreError> {
        (**self).list_addresses(filters, search, offset, limit)
    }

    fn update_address(
        &self,
        address_id: i64,
        changes: AddressChanges,
    ) -> Result<usize, AddressStoreError> {
        (**self).update_address(address_id, changes)
    }

    fn delete_address(&self, address_id: i64) -> Result<(), AddressStoreError> {
        (**self).delete_address(address_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn filters_recognize_known_keywords() {
        let keywords = vec!["primary".to_string(), "billing".to_string()];
        let filters = AddressListFilters::from_keywords(&keywords);
        assert_eq!(
            filters,
            AddressListFilters {
                primary: true,
                shipping: false,
                billing: true,
            }
        );
    }

    #[test]
    fn filters_ignore_unknown_keywords() {
        let keywords = vec!["warehouse".to_string()];
        assert_eq!(
            AddressListFilters::from_keywords(&keywords),
            AddressListFilters::default()
        );
    }

    #[test]
    fn empty_change_set_is_detected() {
        assert!(AddressChanges::default().is_empty());
        let changes = AddressChanges {
            city: Some("Chennai".to_string()),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }
}
