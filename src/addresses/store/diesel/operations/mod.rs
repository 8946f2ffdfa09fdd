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

//! Provides [AddressStoreOperations] implemented for a diesel backend

pub(super) mod add_address;
pub(super) mod list_addresses;
pub(super) mod update_address;

pub(super) struct AddressStoreOperations<'a, C> {
    conn: &'a C,
}

impl<'a, C: diesel::Connection> AddressStoreOperations<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        AddressStoreOperations { conn }
    }
}
