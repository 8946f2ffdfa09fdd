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

//! Provides [SupplierStoreOperations] implemented for a diesel backend

pub(super) mod add_supplier;
pub(super) mod check_duplicate;
pub(super) mod fetch_supplier;
pub(super) mod hard_delete_supplier;
pub(super) mod list_suppliers;
pub(super) mod soft_delete_supplier;
pub(super) mod update_supplier;

pub(super) struct SupplierStoreOperations<'a, C> {
    conn: &'a C,
}

impl<'a, C: diesel::Connection> SupplierStoreOperations<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        SupplierStoreOperations { conn }
    }
}
