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

use crate::rest_api::resources::addresses::payloads::{AddressPayload, AddressSlice};
use crate::rest_api::resources::{ErrorResponse, Meta};
use crate::suppliers::store::{NewSupplier, Supplier, SupplierChanges};

pub const CURRENCIES: &[&str] = &["INR", "USD", "EUR", "GBP"];

/// A supplier as it appears on the wire
#[derive(Debug, Serialize, PartialEq)]
pub struct SupplierSlice {
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
    pub billing_address_ids: Vec<i64>,
    pub shipping_address_ids: Vec<i64>,
    pub is_active: bool,
    pub deleted_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub addresses: Vec<AddressSlice>,
}

impl From<Supplier> for SupplierSlice {
    fn from(supplier: Supplier) -> Self {
        Self {
            supplier_id: supplier.supplier_id,
            salutation: supplier.salutation,
            first_name: supplier.first_name,
            last_name: supplier.last_name,
            company_name: supplier.company_name,
            display_company_name: supplier.display_company_name,
            email: supplier.email,
            work_phone_country_code: supplier.work_phone_country_code,
            work_phone: supplier.work_phone,
            mobile_phone_country_code: supplier.mobile_phone_country_code,
            mobile_phone: supplier.mobile_phone,
            gst: supplier.gst,
            pan: supplier.pan,
            is_msme_registered: supplier.is_msme_registered,
            tds_tax_code: supplier.tds_tax_code,
            currency: supplier.currency,
            payment_terms: supplier.payment_terms,
            billing_address_ids: supplier.billing_address_ids,
            shipping_address_ids: supplier.shipping_address_ids,
            is_active: supplier.is_active,
            deleted_at: supplier.deleted_at.map(|t| t.to_string()),
            created_at: supplier.created_at.to_string(),
            updated_at: supplier.updated_at.to_string(),
            addresses: supplier.addresses.into_iter().map(AddressSlice::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct SupplierListSlice {
    pub success: bool,
    pub meta: Meta,
    pub data: Vec<SupplierSlice>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct SupplierFetchSlice {
    pub success: bool,
    pub data: SupplierSlice,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct SupplierCreatedSlice {
    pub success: bool,
    pub message: String,
    pub data: SupplierIdSlice,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct SupplierIdSlice {
    pub supplier_id: i64,
}

/// Inbound body for supplier creation: the supplier itself plus its
/// initial set of addresses
#[derive(Debug, Deserialize, PartialEq)]
pub struct CreateSupplierPayload {
    pub supplier: Option<SupplierPayload>,
    pub addresses: Option<Vec<AddressPayload>>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct SupplierPayload {
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
}

impl SupplierPayload {
    /// Validates the payload, producing a supplier ready for the store.
    /// Currency defaults to INR when absent.
    pub fn validate(self) -> Result<NewSupplier, ErrorResponse> {
        let currency = match self.currency {
            Some(currency) if CURRENCIES.contains(&currency.as_str()) => currency,
            Some(_) => {
                return Err(ErrorResponse::new(
                    400,
                    "Currency must be one of INR, USD, EUR, GBP",
                ))
            }
            None => "INR".to_string(),
        };

        Ok(NewSupplier {
            salutation: required(self.salutation, "Salutation is required")?,
            first_name: required(self.first_name, "First name is required")?,
            last_name: required(self.last_name, "Last name is required")?,
            company_name: required(self.company_name, "Company name is required")?,
            display_company_name: required(
                self.display_company_name,
                "Display company name is required",
            )?,
            email: required(self.email, "Email is required")?,
            work_phone_country_code: self.work_phone_country_code,
            work_phone: self.work_phone,
            mobile_phone_country_code: self.mobile_phone_country_code,
            mobile_phone: self.mobile_phone,
            gst: self.gst,
            pan: self.pan,
            is_msme_registered: self.is_msme_registered.unwrap_or(false),
            tds_tax_code: self.tds_tax_code,
            currency,
            payment_terms: self.payment_terms,
            is_active: self.is_active.unwrap_or(true),
        })
    }
}

/// Inbound payload for supplier updates; every field is optional
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct UpdateSupplierPayload {
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
}

impl UpdateSupplierPayload {
    pub fn into_changes(self) -> Result<SupplierChanges, ErrorResponse> {
        if let Some(ref currency) = self.currency {
            if !CURRENCIES.contains(&currency.as_str()) {
                return Err(ErrorResponse::new(
                    400,
                    "Currency must be one of INR, USD, EUR, GBP",
                ));
            }
        }

        Ok(SupplierChanges {
            salutation: self.salutation,
            first_name: self.first_name,
            last_name: self.last_name,
            company_name: self.company_name,
            display_company_name: self.display_company_name,
            email: self.email,
            work_phone_country_code: self.work_phone_country_code,
            work_phone: self.work_phone,
            mobile_phone_country_code: self.mobile_phone_country_code,
            mobile_phone: self.mobile_phone,
            gst: self.gst,
            pan: self.pan,
            is_msme_registered: self.is_msme_registered,
            tds_tax_code: self.tds_tax_code,
            currency: self.currency,
            payment_terms: self.payment_terms,
            is_active: self.is_active,
        })
    }
}

fn required(value: Option<String>, message: &str) -> Result<String, ErrorResponse> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ErrorResponse::new(400, message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn payload() -> SupplierPayload {
        SupplierPayload {
            salutation: Some("Ms".to_string()),
            first_name: Some("Asha".to_string()),
            last_name: Some("Rao".to_string()),
            company_name: Some("Acme Industries".to_string()),
            display_company_name: Some("Acme".to_string()),
            email: Some("procurement@acme.test".to_string()),
            work_phone_country_code: None,
            work_phone: None,
            mobile_phone_country_code: None,
            mobile_phone: None,
            gst: None,
            pan: None,
            is_msme_registered: None,
            tds_tax_code: None,
            currency: None,
            payment_terms: None,
            is_active: None,
        }
    }

    #[test]
    fn currency_defaults_to_inr() {
        let supplier = payload().validate().expect("expected a valid payload");
        assert_eq!(supplier.currency, "INR");
        assert!(supplier.is_active);
        assert!(!supplier.is_msme_registered);
    }

    #[test]
    fn unsupported_currency_is_rejected() {
        let mut invalid = payload();
        invalid.currency = Some("JPY".to_string());
        let err = invalid.validate().expect_err("expected a rejection");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "Currency must be one of INR, USD, EUR, GBP");
    }

    #[test]
    fn missing_email_is_rejected() {
        let mut invalid = payload();
        invalid.email = None;
        let err = invalid.validate().expect_err("expected a rejection");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "Email is required");
    }

    #[test]
    fn update_payload_rejects_bad_currency() {
        let payload = UpdateSupplierPayload {
            currency: Some("AUD".to_string()),
            ..Default::default()
        };
        let err = payload.into_changes().expect_err("expected a rejection");
        assert_eq!(err.status_code(), 400);
    }
}
