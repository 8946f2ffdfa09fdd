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

use actix_web::{web, HttpResponse};

use crate::rest_api::actix::StoreState;
use crate::rest_api::resources::addresses::handler;
use crate::rest_api::resources::addresses::payloads::{AddressPayload, UpdateAddressPayload};
use crate::rest_api::resources::ErrorResponse;

use super::{error_response, ListQuery};

/// POST /api/addresses/{id} attaches an address to the supplier named by
/// the path id
pub async fn add_address(
    store_state: web::Data<StoreState>,
    path: web::Path<i64>,
    body: web::Json<AddressPayload>,
) -> HttpResponse {
    let store = store_state.address_store.clone();
    let supplier_id = path.into_inner();
    let payload = body.into_inner();
    match web::block(move || handler::add_address(store, supplier_id, payload)).await {
        Ok(Ok(slice)) => HttpResponse::Created().json(slice),
        Ok(Err(err)) => error_response(err),
        Err(err) => error_response(ErrorResponse::internal_error(
            "Failed to add address",
            &err.to_string(),
        )),
    }
}

pub async fn list_addresses(
    store_state: web::Data<StoreState>,
    query: web::Query<ListQuery>,
) -> HttpResponse {
    let store = store_state.address_store.clone();
    let query = query.into_inner();
    match web::block(move || {
        handler::list_addresses(
            store,
            query.filter.as_deref(),
            query.search.as_deref(),
            query.page.unwrap_or(1),
        )
    })
    .await
    {
        Ok(Ok(slice)) => HttpResponse::Ok().json(slice),
        Ok(Err(err)) => error_response(err),
        Err(err) => error_response(ErrorResponse::internal_error(
            "Failed to get all addresses",
            &err.to_string(),
        )),
    }
}

pub async fn update_address(
    store_state: web::Data<StoreState>,
    path: web::Path<i64>,
    body: web::Json<UpdateAddressPayload>,
) -> HttpResponse {
    let store = store_state.address_store.clone();
    let address_id = path.into_inner();
    let payload = body.into_inner();
    match web::block(move || handler::update_address(store, address_id, payload)).await {
        Ok(Ok(slice)) => HttpResponse::Ok().json(slice),
        Ok(Err(err)) => error_response(err),
        Err(err) => error_response(ErrorResponse::internal_error(
            "Failed to update address",
            &err.to_string(),
        )),
    }
}

pub async fn delete_address(
    store_state: web::Data<StoreState>,
    path: web::Path<i64>,
) -> HttpResponse {
    let store = store_state.address_store.clone();
    let address_id = path.into_inner();
    match web::block(move || handler::delete_address(store, address_id)).await {
        Ok(Ok(slice)) => HttpResponse::Ok().json(slice),
        Ok(Err(err)) => error_response(err),
        Err(err) => error_response(ErrorResponse::internal_error(
            "Failed to delete address",
            &err.to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use actix_web::{test, App};

    use crate::addresses::store::{
        AddressChanges, AddressList, AddressListFilters, AddressStore, AddressStoreError,
        NewAddress,
    };
    use crate::paging::Paging;
    use crate::rest_api::actix::StoreState;
    use crate::suppliers::store::{
        NewSupplier, Supplier, SupplierChanges, SupplierList, SupplierListFilters, SupplierStore,
        SupplierStoreError,
    };

    use pretty_assertions::assert_eq;

    struct EmptySupplierStore;

    impl SupplierStore for EmptySupplierStore {
        fn check_duplicate(
            &self,
            _email: Option<&str>,
            _work_phone: Option<&str>,
            _company_name: Option<&str>,
            _display_company_name: Option<&str>,
        ) -> Result<Vec<Supplier>, SupplierStoreError> {
            Ok(Vec::new())
        }

        fn add_supplier(
            &self,
            _supplier: NewSupplier,
            _addresses: Vec<NewAddress>,
        ) -> Result<i64, SupplierStoreError> {
            Ok(1)
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
            Ok(0)
        }

        fn hard_delete_supplier(&self, _supplier_id: i64) -> Result<usize, SupplierStoreError> {
            Ok(0)
        }
    }

    struct UnsupportedDeleteStore;

    impl AddressStore for UnsupportedDeleteStore {
        fn add_address(
            &self,
            _supplier_id: i64,
            _address: NewAddress,
        ) -> Result<i64, AddressStoreError> {
            Ok(1)
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
            Ok(0)
        }

        fn delete_address(&self, _address_id: i64) -> Result<(), AddressStoreError> {
            Err(AddressStoreError::NotImplemented(
                "deleting addresses".to_string(),
            ))
        }
    }

    #[actix_web::test]
    async fn delete_maps_to_a_501_response() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(StoreState {
                    supplier_store: Arc::new(EmptySupplierStore),
                    address_store: Arc::new(UnsupportedDeleteStore),
                }))
                .route("/api/addresses/{id}", web::delete().to(delete_address)),
        )
        .await;

        let req = test::TestRequest::delete().uri("/api/addresses/9").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 501);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], serde_json::json!(false));
        assert_eq!(
            body["message"],
            serde_json::json!("Address delete is not supported yet")
        );
    }
}
