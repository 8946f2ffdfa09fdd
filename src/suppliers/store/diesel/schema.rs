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

table! {
    suppliers (supplier_id) {
        supplier_id -> Int8,
        salutation -> Varchar,
        first_name -> Varchar,
        last_name -> Varchar,
        company_name -> Varchar,
        display_company_name -> Varchar,
        email -> Varchar,
        work_phone_country_code -> Nullable<Varchar>,
        work_phone -> Nullable<Varchar>,
        mobile_phone_country_code -> Nullable<Varchar>,
        mobile_phone -> Nullable<Varchar>,
        gst -> Nullable<Varchar>,
        pan -> Nullable<Varchar>,
        is_msme_registered -> Bool,
        tds_tax_code -> Nullable<Varchar>,
        currency -> Varchar,
        payment_terms -> Nullable<Varchar>,
        billing_address_ids -> Nullable<Jsonb>,
        shipping_address_ids -> Nullable<Jsonb>,
        is_active -> Bool,
        deleted_at -> Nullable<Timestamp>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    supplier_address (address_id) {
        address_id -> Int8,
        supplier_id -> Int8,
        address_kind -> Varchar,
        address_type -> Varchar,
        address_line1 -> Varchar,
        address_line2 -> Nullable<Varchar>,
        city -> Varchar,
        state -> Varchar,
        postal_code -> Varchar,
        country -> Varchar,
        phone_dial_code -> Nullable<Varchar>,
        phone_number -> Nullable<Varchar>,
        is_primary -> Bool,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

joinable!(supplier_address -> suppliers (supplier_id));

allow_tables_to_appear_in_same_query!(suppliers, supplier_address);
