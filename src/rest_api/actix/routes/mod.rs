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

pub mod addresses;
pub mod suppliers;

use actix_web::{http::StatusCode, HttpResponse};

use crate::rest_api::resources::ErrorResponse;

/// Common query string for listing endpoints
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub search: Option<String>,
    pub filter: Option<String>,
}

pub(in crate::rest_api::actix) fn error_response(err: ErrorResponse) -> HttpResponse {
    HttpResponse::build(
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
    )
    .json(err)
}
