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

use diesel::{pg::PgConnection, prelude::*};

use crate::error::InternalError;
use crate::suppliers::store::diesel::models::SupplierModel;
use crate::suppliers::store::diesel::schema::suppliers;
use crate::suppliers::store::{Supplier, SupplierStoreError};

use super::SupplierStoreOperations;

pub(in crate::suppliers::store::diesel) trait SupplierStoreCheckDuplicateOperation {
    fn check_duplicate(
        &self,
        email: Option<&str>,
        work_phone: Option<&str>,
        company_name: Option<&str>,
        display_company_name: Option<&str>,
    ) -> Result<Vec<Supplier>, SupplierStoreError>;
}

impl<'a> SupplierStoreCheckDuplicateOperation for SupplierStoreOperations<'a, PgConnection> {
    fn check_duplicate(
        &self,
        email: Option<&str>,
        work_phone: Option<&str>,
        company_name: Option<&str>,
        display_company_name: Option<&str>,
    ) -> Result<Vec<Supplier>, SupplierStoreError> {
        if email.is_none()
            && work_phone.is_none()
            && company_name.is_none()
            && display_company_name.is_none()
        {
            return Ok(Vec::new());
        }

        let mut query = suppliers::table
            .into_boxed()
            .select(suppliers::all_columns);

        // Candidate fields are ORed so a single collision on any of them
        // surfaces an existing supplier.
        let mut filtered = false;
        if let Some(email) = email {
            query = query.filter(suppliers::email.eq(email.to_string()));
            filtered = true;
        }
        if let Some(work_phone) = work_phone {
            query = if filtered {
                query.or_filter(suppliers::work_phone.eq(work_phone.to_string()))
            } else {
                query.filter(suppliers::work_phone.eq(work_phone.to_string()))
            };
            filtered = true;
        }
        if let Some(company_name) = company_name {
            query = if filtered {
                query.or_filter(suppliers::company_name.eq(company_name.to_string()))
            } else {
                query.filter(suppliers::company_name.eq(company_name.to_string()))
            };
            filtered = true;
        }
        if let Some(display_company_name) = display_company_name {
            query = if filtered {
                query.or_filter(suppliers::display_company_name.eq(display_company_name.to_string()))
            } else {
                query.filter(suppliers::display_company_name.eq(display_company_name.to_string()))
            };
        }

        let models = query
            .load::<SupplierModel>(self.conn)
            .map_err(|err| {
                SupplierStoreError::InternalError(InternalError::from_source(Box::new(err)))
            })?;

        Ok(models.into_iter().map(Supplier::from).collect())
    }
}
