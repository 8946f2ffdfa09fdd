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

use std::sync::Arc;

use crate::addresses::store::{AddressListFilters, AddressStore, AddressStoreError};
use crate::error::ConstraintViolationType;
use crate::filtering::parse_filters;
use crate::rest_api::resources::{offset_for_page, ErrorResponse, Meta, StatusSlice, DEFAULT_PAGE_SIZE};

use super::payloads::{
    AddressCreatedSlice, AddressIdSlice, AddressListSlice, AddressPayload, AddressSlice,
    UpdateAddressPayload,
};

pub fn add_address(
    store: Arc<dyn AddressStore>,
    supplier_id: i64,
    payload: AddressPayload,
) -> Result<AddressCreatedSlice, ErrorResponse> {
    if supplier_id <= 0 {
        return Err(ErrorResponse::new(400, "Invalid Supplier ID"));
    }

    let address = payload.validate()?;

    let address_id = store
        .add_address(supplier_id, address)
        .map_err(|err| match err {
            AddressStoreError::ConstraintViolationError(err)
                if err.violation_type() == &ConstraintViolationType::ForeignKey =>
            {
                ErrorResponse::new(404, "Supplier not found")
            }
            err => store_error_response(err, "Failed to add address"),
        })?;

    Ok(AddressCreatedSlice {
        success: true,
        message: "Address added successfully".to_string(),
        data: AddressIdSlice { address_id },
    })
}

pub fn list_addresses(
    store: Arc<dyn AddressStore>,
    filter: Option<&str>,
    search: Option<&str>,
    page: i64,
) -> Result<AddressListSlice, ErrorResponse> {
    let filters = AddressListFilters::from_keywords(&parse_filters(filter));

    let list = store
        .list_addresses(filters, search, offset_for_page(page), DEFAULT_PAGE_SIZE)
        .map_err(|err| store_error_response(err, "Failed to get all addresses"))?;

    Ok(AddressListSlice {
        success: true,
        meta: Meta::new(&list.paging),
        data: list.data.into_iter().map(AddressSlice::from).collect(),
    })
}

pub fn update_address(
    store: Arc<dyn AddressStore>,
    address_id: i64,
    payload: UpdateAddressPayload,
) -> Result<StatusSlice, ErrorResponse> {
    if address_id <= 0 {
        return Err(ErrorResponse::new(400, "Invalid Address ID"));
    }

    let changes = payload.into_changes()?;
    if changes.is_empty() {
        return Err(ErrorResponse::new(
            400,
            "Address Id and update data are required",
        ));
    }

    let affected = store
        .update_address(address_id, changes)
        .map_err(|err| store_error_response(err, "Failed to update address"))?;

    if affected == 0 {
        return Err(ErrorResponse::new(404, "Address not found"));
    }

    Ok(StatusSlice::new("Address updated successfully"))
}

pub fn delete_address(
    store: Arc<dyn AddressStore>,
    address_id: i64,
) -> Result<StatusSlice, ErrorResponse> {
    if address_id <= 0 {
        return Err(ErrorResponse::new(400, "Invalid Address ID"));
    }

    store
        .delete_address(address_id)
        .map_err(|err| store_error_response(err, "Failed to delete address"))?;

    Ok(StatusSlice::new("Address deleted successfully"))
}

fn store_error_response(err: AddressStoreError, message: &str) -> ErrorResponse {
    match err {
        AddressStoreError::NotImplemented(_) => {
            ErrorResponse::new(501, "Address delete is not supported yet")
        }
        AddressStoreError::ConstraintViolationError(err) => {
            ErrorResponse::new(409, &format!("{}", err))
        }
        AddressStoreError::ResourceTemporarilyUnavailableError(err) => {
            ErrorResponse::internal_error(message, &format!("{}", err))
        }
        AddressStoreError::InternalError(err) => {
            ErrorResponse::internal_error(message, &format!("{}", err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::addresses::store::{AddressChanges, AddressList, NewAddress};
    use crate::paging::Paging;

    use pretty_assertions::assert_eq;

    struct StubAddressStore {
        update_affects: usize,
    }

    impl AddressStore for StubAddressStore {
        fn add_address(
            &self,
            _supplier_id: i64,
            _address: NewAddress,
        ) -> Result<i64, AddressStoreError> {
            Ok(77)
        }

        fn list_addresses(
            &self,
            _filters: AddressListFilters,
            _search: Option<&str>,
            offset: i64,
            limit: i64,
        ) -> Result<AddressList, AddressStoreError> {
            Ok(AddressList::new(Vec::new(), Paging::new(offset, limit, 0)))
        }

        fn update_address(
            &self,
            _address_id: i64,
            _changes: AddressChanges,
        ) -> Result<usize, AddressStoreError> {
            Ok(self.update_affects)
        }

        fn delete_address(&self, _address_id: i64) -> Result<(), AddressStoreError> {
            Err(AddressStoreError::NotImplemented(
                "deleting addresses".to_string(),
            ))
        }
    }

    #[test]
    fn delete_reports_not_implemented() {
        let store = Arc::new(StubAddressStore { update_affects: 0 });
        let err = delete_address(store, 3).expect_err("expected a rejection");
        assert_eq!(err.status_code(), 501);
        assert_eq!(err.message(), "Address delete is not supported yet");
    }

    #[test]
    fn update_without_changes_is_rejected() {
        let store = Arc::new(StubAddressStore { update_affects: 1 });
        let err = update_address(store, 3, UpdateAddressPayload::default())
            .expect_err("expected a rejection");
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn update_of_missing_address_is_a_404() {
        let store = Arc::new(StubAddressStore { update_affects: 0 });
        let payload = UpdateAddressPayload {
            city: Some("Pune".to_string()),
            ..Default::default()
        };
        let err = update_address(store, 3, payload).expect_err("expected a rejection");
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn created_address_id_is_echoed_back() {
        let store = Arc::new(StubAddressStore { update_affects: 0 });
        let payload = AddressPayload {
            address_kind: Some("shipping".to_string()),
            address_type: Some("warehouse".to_string()),
            address_line1: Some("Plot 4, Export Zone".to_string()),
            address_line2: None,
            city: Some("Chennai".to_string()),
            state: Some("Tamil Nadu".to_string()),
            postal_code: Some("600001".to_string()),
            country: Some("India".to_string()),
            phone_dial_code: None,
            phone_number: None,
            is_primary: Some(true),
        };
        let slice = add_address(store, 42, payload).expect("expected a created address");
        assert_eq!(slice.data.address_id, 77);
        assert!(slice.success);
    }
}
