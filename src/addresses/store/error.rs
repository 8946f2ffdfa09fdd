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

use std::error::Error;
use std::fmt;

use crate::error::{
    ConstraintViolationError, InternalError, ResourceTemporarilyUnavailableError,
};

/// Represents AddressStore errors
#[derive(Debug)]
pub enum AddressStoreError {
    InternalError(InternalError),
    ConstraintViolationError(ConstraintViolationError),
    ResourceTemporarilyUnavailableError(ResourceTemporarilyUnavailableError),
    NotImplemented(String),
}

impl Error for AddressStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AddressStoreError::InternalError(err) => Some(err),
            AddressStoreError::ConstraintViolationError(err) => Some(err),
            AddressStoreError::ResourceTemporarilyUnavailableError(err) => Some(err),
            AddressStoreError::NotImplemented(_) => None,
        }
    }
}

impl fmt::Display for AddressStoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AddressStoreError::InternalError(err) => err.fmt(f),
            AddressStoreError::ConstraintViolationError(err) => err.fmt(f),
            AddressStoreError::ResourceTemporarilyUnavailableError(err) => err.fmt(f),
            AddressStoreError::NotImplemented(ref s) => write!(f, "Not implemented: {}", s),
        }
    }
}
