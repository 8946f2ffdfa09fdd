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
use serde_json::Value as JsonValue;

use super::schema::suppliers;

#[derive(Queryable, PartialEq, Debug)]
pub struct SupplierModel {
    pub supplier_id: i64,
    pub salutation: String,
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub display_company_name: String,
    pub email: String,
    pub work_phone_country_code: Option<String>,
    pub work_phone: Option<String>,
    pub mobile_phone_country_code: Option<String>,
    pub mobile_phone: Option<String>,
    pub gst: Option<String>,
    pub pan: Option<String>,
    pub is_msme_registered: bool,
    pub tds_tax_code: Option<String>,
    pub currency: String,
    pub payment_terms: Option<String>,
    pub billing_address_ids: Option<JsonValue>,
    pub shipping_address_ids: Option<JsonValue>,
    pub is_active: bool,
    pub deleted_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, PartialEq, Debug)]
#[table_name = "suppliers"]
pub struct NewSupplierModel {
    pub salutation: String,
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub display_company_name: String,
    pub email: String,
    pub work_phone_country_code: Option<String>,
    pub work_phone: Option<String>,
    pub mobile_phone_country_code: Option<String>,
    pub mobile_phone: Option<String>,
    pub gst: Option<String>,
    pub pan: Option<String>,
    pub is_msme_registered: bool,
    pub tds_tax_code: Option<String>,
    pub currency: String,
    pub payment_terms: Option<String>,
    pub is_active: bool,
}

/// Typed change set for supplier updates. `None` fields are left out of
/// the generated `SET` clause; `updated_at` is always written.
#[derive(AsChangeset, Debug)]
#[table_name = "suppliers"]
pub struct SupplierChangesetModel {
    pub salutation: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company_name: Option<String>,
    pub display_company_name: Option<String>,
    pub email: Option<String>,
    pub work_phone_country_code: Option<String>,
    pub work_phone: Option<String>,
    pub mobile_phone_country_code: Option<String>,
    pub mobile_phone: Option<String>,
    pub gst: Option<String>,
    pub pan: Option<String>,
    pub is_msme_registered: Option<bool>,
    pub tds_tax_code: Option<String>,
    pub currency: Option<String>,
    pub payment_terms: Option<String>,
    pub is_active: Option<bool>,
    pub updated_at: NaiveDateTime,
}
