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

use chrono::NaiveDateTime;

use crate::suppliers::store::diesel::schema::supplier_address;

#[derive(Queryable, PartialEq, Debug)]
pub struct AddressModel {
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

#[derive(Insertable, PartialEq, Debug)]
#[table_name = "supplier_address"]
pub struct NewAddressModel {
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
}

/// Typed change set for address updates. `None` fields are left out of
/// the generated `SET` clause; `updated_at` is always written.
#[derive(AsChangeset, Debug)]
#[table_name = "supplier_address"]
pub struct AddressChangesetModel {
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
    pub updated_at: NaiveDateTime,
}
