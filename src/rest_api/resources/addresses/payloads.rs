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

use crate::addresses::store::{Address, AddressChanges, NewAddress};
use crate::rest_api::resources::{ErrorResponse, Meta};

pub const ADDRESS_KINDS: &[&str] = &["billing", "shipping"];
pub const ADDRESS_TYPES: &[&str] = &["billing", "shipping", "warehouse", "office"];

/// An address as it appears on the wire
#[derive(Debug, Serialize, PartialEq)]
pub struct AddressSlice {
    pub address_id: i64,
    pub supplier_id: i64,
    #[serde(rename = "type")]
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
    pub created_at: String,
    pub updated_at: String,
}

impl From<Address> for AddressSlice {
    fn from(address: Address) -> Self {
        Self {
            address_id: address.address_id,
            supplier_id: address.supplier_id,
            address_kind: address.address_kind,
            address_type: address.address_type,
            address_line1: address.address_line1,
            address_line2: address.address_line2,
            city: address.city,
            state: address.state,
            postal_code: address.postal_code,
            country: address.country,
            phone_dial_code: address.phone_dial_code,
            phone_number: address.phone_number,
            is_primary: address.is_primary,
            created_at: address.created_at.to_string(),
            updated_at: address.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct AddressListSlice {
    pub success: bool,
    pub meta: Meta,
    pub data: Vec<AddressSlice>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct AddressCreatedSlice {
    pub success: bool,
    pub message: String,
    pub data: AddressIdSlice,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct AddressIdSlice {
    pub address_id: i64,
}

/// Inbound address payload, shared by supplier creation and the
/// standalone address endpoint
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AddressPayload {
    #[serde(rename = "type")]
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
}

impl AddressPayload {
    /// Validates the payload, producing an address ready for the store
    pub fn validate(self) -> Result<NewAddress, ErrorResponse> {
        let address_kind = match self.address_kind {
            Some(kind) if ADDRESS_KINDS.contains(&kind.as_str()) => kind,
            Some(_) => {
                return Err(ErrorResponse::new(
                    400,
                    "Address type must be one of billing, shipping",
                ))
            }
            None => return Err(ErrorResponse::new(400, "Address type is required")),
        };
        let address_type = match self.address_type {
            Some(address_type) if ADDRESS_TYPES.contains(&address_type.as_str()) => address_type,
            Some(_) => {
                return Err(ErrorResponse::new(
                    400,
                    "Address category must be one of billing, shipping, warehouse, office",
                ))
            }
            None => return Err(ErrorResponse::new(400, "Address category is required")),
        };

        Ok(NewAddress {
            address_kind,
            address_type,
            address_line1: required(self.address_line1, "Address line 1 is required")?,
            address_line2: self.address_line2,
            city: required(self.city, "City is required")?,
            state: required(self.state, "State is required")?,
            postal_code: required(self.postal_code, "Postal code is required")?,
            country: required(self.country, "Country is required")?,
            phone_dial_code: self.phone_dial_code,
            phone_number: self.phone_number,
            is_primary: self.is_primary.unwrap_or(false),
        })
    }
}

/// Inbound payload for address updates; every field is optional
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct UpdateAddressPayload {
    #[serde(rename = "type")]
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
}

impl UpdateAddressPayload {
    pub fn into_changes(self) -> Result<AddressChanges, ErrorResponse> {
        if let Some(ref kind) = self.address_kind {
            if !ADDRESS_KINDS.contains(&kind.as_str()) {
                return Err(ErrorResponse::new(
                    400,
                    "Address type must be one of billing, shipping",
                ));
            }
        }
        if let Some(ref address_type) = self.address_type {
            if !ADDRESS_TYPES.contains(&address_type.as_str()) {
                return Err(ErrorResponse::new(
                    400,
                    "Address category must be one of billing, shipping, warehouse, office",
                ));
            }
        }

        Ok(AddressChanges {
            address_kind: self.address_kind,
            address_type: self.address_type,
            address_line1: self.address_line1,
            address_line2: self.address_line2,
            city: self.city,
            state: self.state,
            postal_code: self.postal_code,
            country: self.country,
            phone_dial_code: self.phone_dial_code,
            phone_number: self.phone_number,
            is_primary: self.is_primary,
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

    fn payload() -> AddressPayload {
        AddressPayload {
            address_kind: Some("billing".to_string()),
            address_type: Some("office".to_string()),
            address_line1: Some("12 Industrial Estate".to_string()),
            address_line2: None,
            city: Some("Bengaluru".to_string()),
            state: Some("Karnataka".to_string()),
            postal_code: Some("560001".to_string()),
            country: Some("India".to_string()),
            phone_dial_code: None,
            phone_number: None,
            is_primary: None,
        }
    }

    #[test]
    fn valid_payload_passes_validation() {
        let address = payload().validate().expect("expected a valid payload");
        assert_eq!(address.address_kind, "billing");
        assert!(!address.is_primary);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let mut invalid = payload();
        invalid.address_kind = Some("postal".to_string());
        let err = invalid.validate().expect_err("expected a rejection");
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let mut invalid = payload();
        invalid.city = Some("   ".to_string());
        let err = invalid.validate().expect_err("expected a rejection");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "City is required");
    }

    #[test]
    fn wire_name_for_kind_is_type() {
        let parsed: AddressPayload = serde_json::from_value(serde_json::json!({
            "type": "shipping",
            "address_type": "warehouse",
        }))
        .expect("failed to deserialize");
        assert_eq!(parsed.address_kind.as_deref(), Some("shipping"));
    }
}
