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
use crate::rest_api::resources::suppliers::handler;
use crate::rest_api::resources::suppliers::payloads::{
    CreateSupplierPayload, UpdateSupplierPayload,
};
use crate::rest_api::resources::ErrorResponse;

use super::{error_response, ListQuery};

pub async fn create_supplier(
    store_state: web::Data<StoreState>,
    body: web::Json<CreateSupplierPayload>,
) -> HttpResponse {
    let store = store_state.supplier_store.clone();
    let payload = body.into_inner();
    match web::block(move || handler::create_supplier(store, payload)).await {
        Ok(Ok(slice)) => HttpResponse::Ok().json(slice),
        Ok(Err(err)) => error_response(err),
        Err(err) => error_response(ErrorResponse::internal_error(
            "Failed to create supplier",
            &err.to_string(),
        )),
    }
}

pub async fn list_suppliers(
    store_state: web::Data<StoreState>,
    query: web::Query<ListQuery>,
) -> HttpResponse {
    let store = store_state.supplier_store.clone();
    let query = query.into_inner();
    match web::block(move || {
        handler::list_suppliers(
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
            "Failed to get all suppliers",
            &err.to_string(),
        )),
    }
}

pub async fn fetch_supplier(
    store_state: web::Data<StoreState>,
    path: web::Path<i64>,
) -> HttpResponse {
    let store = store_state.supplier_store.clone();
    let supplier_id = path.into_inner();
    match web::block(move || handler::fetch_supplier(store, supplier_id)).await {
        Ok(Ok(slice)) => HttpResponse::Ok().json(slice),
        Ok(Err(err)) => error_response(err),
        Err(err) => error_response(ErrorResponse::internal_error(
            "Failed to get supplier",
            &err.to_string(),
        )),
    }
}

pub async fn update_supplier(
    store_state: web::Data<StoreState>,
    path: web::Path<i64>,
    body: web::Json<UpdateSupplierPayload>,
) -> HttpResponse {
    let store = store_state.supplier_store.clone();
    let supplier_id = path.into_inner();
    let payload = body.into_inner();
    match web::block(move || handler::update_supplier(store, supplier_id, payload)).await {
        Ok(Ok(slice)) => HttpResponse::Ok().json(slice),
        Ok(Err(err)) => error_response(err),
        Err(err) => error_response(ErrorResponse::internal_error(
            "Failed to update supplier",
            &err.to_string(),
        )),
    }
}

pub async fn toggle_soft_delete(
    store_state: web::Data<StoreState>,
    path: web::Path<i64>,
) -> HttpResponse {
    let store = store_state.supplier_store.clone();
    let supplier_id = path.into_inner();
    match web::block(move || handler::toggle_soft_delete(store, supplier_id)).await {
        Ok(Ok(slice)) => HttpResponse::Ok().json(slice),
        Ok(Err(err)) => error_response(err),
        Err(err) => error_response(ErrorResponse::internal_error(
            "Failed to update supplier status",
            &err.to_string(),
        )),
    }
}

pub async fn hard_delete_supplier(
    store_state: web::Data<StoreState>,
    path: web::Path<i64>,
) -> HttpResponse {
    let store = store_state.supplier_store.clone();
    let supplier_id = path.into_inner();
    match web::block(move || handler::hard_delete_supplier(store, supplier_id)).await {
        Ok(Ok(slice)) => HttpResponse::Ok().json(slice),
        Ok(Err(err)) => error_response(err),
        Err(err) => error_response(ErrorResponse::internal_error(
            "Failed to delete supplier",
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

    struct EmptyAddressStore;

    impl AddressStore for EmptyAddressStore {
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

    fn store_state() -> StoreState {
        StoreState {
            supplier_store: Arc::new(EmptySupplierStore),
            address_store: Arc::new(EmptyAddressStore),
        }
    }

    #[actix_web::test]
    async fn listing_returns_a_paged_envelope() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store_state()))
                .route("/api/suppliers", web::get().to(list_suppliers)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/suppliers?page=2")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], serde_json::json!(true));
        assert_eq!(body["meta"]["current_page"], serde_json::json!(2));
        assert_eq!(body["meta"]["per_page"], serde_json::json!(10));
        assert_eq!(body["data"], serde_json::json!([]));
    }

    #[actix_web::test]
    async fn missing_supplier_maps_to_a_404_response() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store_state()))
                .route("/api/suppliers/{id}", web::get().to(fetch_supplier)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/suppliers/42").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], serde_json::json!(false));
        assert_eq!(body["message"], serde_json::json!("Supplier not found"));
    }
}
