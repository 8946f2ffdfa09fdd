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

use crate::filtering::parse_filters;
use crate::rest_api::resources::{
    offset_for_page, ErrorResponse, Meta, StatusSlice, DEFAULT_PAGE_SIZE,
};
use crate::suppliers::store::{
    NewSupplier, Supplier, SupplierListFilters, SupplierStore, SupplierStoreError,
};

use super::payloads::{
    CreateSupplierPayload, SupplierCreatedSlice, SupplierFetchSlice, SupplierIdSlice,
    SupplierListSlice, SupplierSlice, UpdateSupplierPayload,
};

pub fn create_supplier(
    store: Arc<dyn SupplierStore>,
    payload: CreateSupplierPayload,
) -> Result<SupplierCreatedSlice, ErrorResponse> {
    // An empty address list is allowed; only an absent key is malformed
    let (supplier, addresses) = match (payload.supplier, payload.addresses) {
        (Some(supplier), Some(addresses)) => (supplier, addresses),
        _ => return Err(ErrorResponse::new(400, "Supplier and address are required")),
    };

    let supplier = supplier.validate()?;
    let addresses = addresses
        .into_iter()
        .map(|address| address.validate())
        .collect::<Result<Vec<_>, _>>()?;

    let duplicates = store
        .check_duplicate(
            Some(&supplier.email),
            supplier.work_phone.as_deref(),
            Some(&supplier.company_name),
            Some(&supplier.display_company_name),
        )
        .map_err(|err| store_error_response(err, "Failed to create supplier"))?;

    if let Some(existing) = duplicates.first() {
        return Err(ErrorResponse::new(
            409,
            &format!("{} already exists", conflicting_field(existing, &supplier)),
        ));
    }

    let supplier_id = store
        .add_supplier(supplier, addresses)
        .map_err(|err| match err {
            // A concurrent insert can still trip the unique constraints
            // after the duplicate check passed
            SupplierStoreError::ConstraintViolationError(_) => {
                ErrorResponse::new(409, "Supplier already exists")
            }
            err => store_error_response(err, "Failed to create supplier"),
        })?;

    Ok(SupplierCreatedSlice {
        success: true,
        message: "Supplier Created Successfully".to_string(),
        data: SupplierIdSlice { supplier_id },
    })
}

pub fn list_suppliers(
    store: Arc<dyn SupplierStore>,
    filter: Option<&str>,
    search: Option<&str>,
    page: i64,
) -> Result<SupplierListSlice, ErrorResponse> {
    let filters = SupplierListFilters::from_keywords(&parse_filters(filter));

    let list = store
        .list_suppliers(filters, search, offset_for_page(page), DEFAULT_PAGE_SIZE)
        .map_err(|err| store_error_response(err, "Failed to get all suppliers"))?;

    Ok(SupplierListSlice {
        success: true,
        meta: Meta::new(&list.paging),
        data: list.data.into_iter().map(SupplierSlice::from).collect(),
    })
}

pub fn fetch_supplier(
    store: Arc<dyn SupplierStore>,
    supplier_id: i64,
) -> Result<SupplierFetchSlice, ErrorResponse> {
    if supplier_id <= 0 {
        return Err(ErrorResponse::new(400, "Invalid Supplier ID"));
    }

    match store
        .fetch_supplier(supplier_id)
        .map_err(|err| store_error_response(err, "Failed to get supplier"))?
    {
        Some(supplier) => Ok(SupplierFetchSlice {
            success: true,
            data: SupplierSlice::from(supplier),
        }),
        None => Err(ErrorResponse::new(404, "Supplier not found")),
    }
}

pub fn update_supplier(
    store: Arc<dyn SupplierStore>,
    supplier_id: i64,
    payload: UpdateSupplierPayload,
) -> Result<StatusSlice, ErrorResponse> {
    if supplier_id <= 0 {
        return Err(ErrorResponse::new(400, "Invalid Supplier ID"));
    }

    let changes = payload.into_changes()?;
    if changes.is_empty() {
        return Err(ErrorResponse::new(
            400,
            "Supplier Id and update data are required",
        ));
    }

    let affected = store
        .update_supplier(supplier_id, changes)
        .map_err(|err| match err {
            SupplierStoreError::ConstraintViolationError(_) => {
                ErrorResponse::new(409, "Supplier already exists")
            }
            err => store_error_response(err, "Failed to update supplier"),
        })?;

    if affected == 0 {
        return Err(ErrorResponse::new(
            404,
            "Supplier not found or already deleted",
        ));
    }

    Ok(StatusSlice::new("Supplier updated successfully"))
}

pub fn toggle_soft_delete(
    store: Arc<dyn SupplierStore>,
    supplier_id: i64,
) -> Result<StatusSlice, ErrorResponse> {
    if supplier_id <= 0 {
        return Err(ErrorResponse::new(400, "Invalid Supplier ID"));
    }

    let affected = store
        .toggle_soft_delete(supplier_id)
        .map_err(|err| store_error_response(err, "Failed to update supplier status"))?;

    if affected == 0 {
        return Err(ErrorResponse::new(404, "Supplier not found"));
    }

    Ok(StatusSlice::new("Supplier status updated successfully"))
}

pub fn hard_delete_supplier(
    store: Arc<dyn SupplierStore>,
    supplier_id: i64,
) -> Result<StatusSlice, ErrorResponse> {
    if supplier_id <= 0 {
        return Err(ErrorResponse::new(400, "Invalid Supplier ID"));
    }

    let affected = store
        .hard_delete_supplier(supplier_id)
        .map_err(|err| store_error_response(err, "Failed to delete supplier"))?;

    if affected == 0 {
        return Err(ErrorResponse::new(
            404,
            "Supplier not found or not soft deleted",
        ));
    }

    Ok(StatusSlice::new("Supplier permanently deleted"))
}

/// Names the field responsible for a duplicate collision. Email wins over
/// the company names, which win over the work phone.
fn conflicting_field(existing: &Supplier, candidate: &NewSupplier) -> &'static str {
    if existing.email == candidate.email {
        "Email"
    } else if existing.company_name == candidate.company_name {
        "Company Name"
    } else if existing.display_company_name == candidate.display_company_name {
        "Display Company Name"
    } else {
        "Work Phone"
    }
}

fn store_error_response(err: SupplierStoreError, message: &str) -> ErrorResponse {
    match err {
        SupplierStoreError::ConstraintViolationError(err) => {
            ErrorResponse::new(409, &format!("{}", err))
        }
        SupplierStoreError::ResourceTemporarilyUnavailableError(err) => {
            ErrorResponse::internal_error(message, &format!("{}", err))
        }
        SupplierStoreError::InternalError(err) => {
            ErrorResponse::internal_error(message, &format!("{}", err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    use crate::addresses::store::NewAddress;
    use crate::paging::Paging;
    use crate::rest_api::resources::addresses::payloads::AddressPayload;
    use crate::rest_api::resources::suppliers::payloads::SupplierPayload;
    use crate::suppliers::store::{SupplierChanges, SupplierList};

    use pretty_assertions::assert_eq;

    struct StubSupplierStore {
        duplicates: Vec<Supplier>,
    }

    impl SupplierStore for StubSupplierStore {
        fn check_duplicate(
            &self,
            _email: Option<&str>,
            _work_phone: Option<&str>,
            _company_name: Option<&str>,
            _display_company_name: Option<&str>,
        ) -> Result<Vec<Supplier>, SupplierStoreError> {
            Ok(self.duplicates.clone())
        }

        fn add_supplier(
            &self,
            _supplier: NewSupplier,
            _addresses: Vec<NewAddress>,
        ) -> Result<i64, SupplierStoreError> {
            Ok(11)
        }

        fn list_suppliers(
            &self,
            _filters: SupplierListFilters,
            _search: Option<&str>,
            offset: i64,
            limit: i64,
        ) -> Result<SupplierList, SupplierStoreError> {
            Ok(SupplierList::new(Vec::new(), Paging::new(offset, limit, 0)))
        }

        fn fetch_supplier(
            &self,
            _supplier_id: i64,
        ) -> Result<Option<Supplier>, SupplierStoreError> {
            Ok(None)
        }

        fn update_supplier(
            &self,
            _supplier_id: i64,
            _changes: SupplierChanges,
        ) -> Result<usize, SupplierStoreError> {
            Ok(0)
        }

        fn toggle_soft_delete(&self, _supplier_id: i64) -> Result<usize, SupplierStoreError> {
            Ok(1)
        }

        fn hard_delete_supplier(&self, _supplier_id: i64) -> Result<usize, SupplierStoreError> {
            Ok(0)
        }
    }

    fn existing_supplier(email: &str, company_name: &str, display: &str) -> Supplier {
        let timestamp = NaiveDate::from_ymd(2026, 2, 3).and_hms(10, 30, 0);
        Supplier {
            supplier_id: 1,
            salutation: "Mr".to_string(),
            first_name: "Ravi".to_string(),
            last_name: "Iyer".to_string(),
            company_name: company_name.to_string(),
            display_company_name: display.to_string(),
            email: email.to_string(),
            work_phone_country_code: None,
            work_phone: Some("080-1234".to_string()),
            mobile_phone_country_code: None,
            mobile_phone: None,
            gst: None,
            pan: None,
            is_msme_registered: false,
            tds_tax_code: None,
            currency: "INR".to_string(),
            payment_terms: None,
            billing_address_ids: Vec::new(),
            shipping_address_ids: Vec::new(),
            is_active: true,
            deleted_at: None,
            created_at: timestamp,
            updated_at: timestamp,
            addresses: Vec::new(),
        }
    }

    fn create_payload() -> CreateSupplierPayload {
        CreateSupplierPayload {
            supplier: Some(SupplierPayload {
                salutation: Some("Ms".to_string()),
                first_name: Some("Asha".to_string()),
                last_name: Some("Rao".to_string()),
                company_name: Some("Acme Industries".to_string()),
                display_company_name: Some("Acme".to_string()),
                email: Some("procurement@acme.test".to_string()),
                work_phone_country_code: None,
                work_phone: Some("080-1234".to_string()),
                mobile_phone_country_code: None,
                mobile_phone: None,
                gst: None,
                pan: None,
                is_msme_registered: None,
                tds_tax_code: None,
                currency: None,
                payment_terms: None,
                is_active: None,
            }),
            addresses: Some(vec![AddressPayload {
                address_kind: Some("billing".to_string()),
                address_type: Some("office".to_string()),
                address_line1: Some("12 Industrial Estate".to_string()),
                address_line2: None,
                city: Some("Bengaluru".to_string()),
                state: Some("Karnataka".to_string()),
                postal_code: Some("560001".to_string()),
                country: Some("India".to_string()),
                phone_dial_code: None,
                phone_number: None,
                is_primary: Some(true),
            }]),
        }
    }

    #[test]
    fn create_without_address_key_is_rejected() {
        let store = Arc::new(StubSupplierStore { duplicates: vec![] });
        let mut payload = create_payload();
        payload.addresses = None;
        let err = create_supplier(store, payload).expect_err("expected a rejection");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "Supplier and address are required");
    }

    #[test]
    fn create_with_an_empty_address_list_succeeds() {
        let store = Arc::new(StubSupplierStore { duplicates: vec![] });
        let mut payload = create_payload();
        payload.addresses = Some(Vec::new());
        let slice = create_supplier(store, payload).expect("expected a created supplier");
        assert_eq!(slice.data.supplier_id, 11);
    }

    #[test]
    fn create_returns_the_new_supplier_id() {
        let store = Arc::new(StubSupplierStore { duplicates: vec![] });
        let slice = create_supplier(store, create_payload()).expect("expected a created supplier");
        assert_eq!(slice.data.supplier_id, 11);
        assert_eq!(slice.message, "Supplier Created Successfully");
    }

    #[test]
    fn duplicate_email_wins_over_other_collisions() {
        // The existing supplier collides on every field; email is the
        // one that gets reported.
        let store = Arc::new(StubSupplierStore {
            duplicates: vec![existing_supplier(
                "procurement@acme.test",
                "Acme Industries",
                "Acme",
            )],
        });
        let err = create_supplier(store, create_payload()).expect_err("expected a conflict");
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.message(), "Email already exists");
    }

    #[test]
    fn duplicate_company_name_is_reported_when_email_differs() {
        let store = Arc::new(StubSupplierStore {
            duplicates: vec![existing_supplier(
                "other@acme.test",
                "Acme Industries",
                "Acme Corp",
            )],
        });
        let err = create_supplier(store, create_payload()).expect_err("expected a conflict");
        assert_eq!(err.message(), "Company Name already exists");
    }

    #[test]
    fn duplicate_work_phone_is_the_last_resort() {
        let store = Arc::new(StubSupplierStore {
            duplicates: vec![existing_supplier(
                "other@acme.test",
                "Globex Industries",
                "Globex",
            )],
        });
        let err = create_supplier(store, create_payload()).expect_err("expected a conflict");
        assert_eq!(err.message(), "Work Phone already exists");
    }

    #[test]
    fn fetch_of_missing_supplier_is_a_404() {
        let store = Arc::new(StubSupplierStore { duplicates: vec![] });
        let err = fetch_supplier(store, 9).expect_err("expected a rejection");
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message(), "Supplier not found");
    }

    #[test]
    fn non_positive_ids_are_rejected() {
        let store = Arc::new(StubSupplierStore { duplicates: vec![] });
        let err = fetch_supplier(store.clone(), 0).expect_err("expected a rejection");
        assert_eq!(err.status_code(), 400);
        let err = hard_delete_supplier(store, -4).expect_err("expected a rejection");
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn hard_delete_of_active_supplier_is_a_404() {
        let store = Arc::new(StubSupplierStore { duplicates: vec![] });
        let err = hard_delete_supplier(store, 5).expect_err("expected a rejection");
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message(), "Supplier not found or not soft deleted");
    }

    #[test]
    fn update_without_changes_is_rejected() {
        let store = Arc::new(StubSupplierStore { duplicates: vec![] });
        let err = update_supplier(store, 5, UpdateSupplierPayload::default())
            .expect_err("expected a rejection");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "Supplier Id and update data are required");
    }

    #[test]
    fn toggle_reports_success() {
        let store = Arc::new(StubSupplierStore { duplicates: vec![] });
        let slice = toggle_soft_delete(store, 5).expect("expected a toggled supplier");
        assert_eq!(slice.message, "Supplier status updated successfully");
    }
}
