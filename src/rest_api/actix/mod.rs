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

mod routes;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

use crate::addresses::store::diesel::DieselAddressStore;
use crate::addresses::store::AddressStore;
use crate::error::InternalError;
use crate::suppliers::store::diesel::DieselSupplierStore;
use crate::suppliers::store::SupplierStore;

/// The stores handed to every route handler
#[derive(Clone)]
pub struct StoreState {
    pub supplier_store: Arc<dyn SupplierStore>,
    pub address_store: Arc<dyn AddressStore>,
}

impl StoreState {
    pub fn with_pg_pool(connection_pool: Pool<ConnectionManager<PgConnection>>) -> Self {
        Self {
            supplier_store: Arc::new(DieselSupplierStore::new(connection_pool.clone())),
            address_store: Arc::new(DieselAddressStore::new(connection_pool)),
        }
    }
}

/// Starts the REST API on the given bind endpoint and blocks until the
/// server shuts down
pub async fn run(bind: &str, store_state: StoreState) -> Result<(), InternalError> {
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(store_state.clone()))
            .route(
                "/api/suppliers",
                web::post().to(routes::suppliers::create_supplier),
            )
            .route(
                "/api/suppliers",
                web::get().to(routes::suppliers::list_suppliers),
            )
            .route(
                "/api/suppliers/{id}",
                web::get().to(routes::suppliers::fetch_supplier),
            )
            .route(
                "/api/suppliers/{id}",
                web::put().to(routes::suppliers::update_supplier),
            )
            .route(
                "/api/suppliers/{id}",
                web::patch().to(routes::suppliers::toggle_soft_delete),
            )
            .route(
                "/api/suppliers/{id}",
                web::delete().to(routes::suppliers::hard_delete_supplier),
            )
            .route(
                "/api/addresses",
                web::get().to(routes::addresses::list_addresses),
            )
            .route(
                "/api/addresses/{id}",
                web::post().to(routes::addresses::add_address),
            )
            .route(
                "/api/addresses/{id}",
                web::patch().to(routes::addresses::update_address),
            )
            .route(
                "/api/addresses/{id}",
                web::delete().to(routes::addresses::delete_address),
            )
    })
    .bind(bind)
    .map_err(|err| InternalError::from_source(Box::new(err)))?
    .run()
    .await
    .map_err(|err| InternalError::from_source(Box::new(err)))
}
