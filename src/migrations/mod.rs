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

//! Embedded database migrations for the supplier tables.

use std::error::Error;
use std::fmt;

use diesel::pg::PgConnection;

use crate::error::ResourceTemporarilyUnavailableError;

embed_migrations!("./src/migrations/diesel/postgres/migrations");

/// Run database migrations to create the supplier tables
///
/// # Arguments
///
/// * `conn` - Connection to database
pub fn run_migrations(conn: &PgConnection) -> Result<(), MigrationsError> {
    embedded_migrations::run(conn).map_err(|err| {
        MigrationsError::ResourceTemporarilyUnavailableError(
            ResourceTemporarilyUnavailableError::from_source(Box::new(err)),
        )
    })?;

    info!("Successfully applied supplier migrations");

    Ok(())
}

#[derive(Debug)]
pub enum MigrationsError {
    ResourceTemporarilyUnavailableError(ResourceTemporarilyUnavailableError),
}

impl Error for MigrationsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MigrationsError::ResourceTemporarilyUnavailableError(err) => Some(err),
        }
    }
}

impl fmt::Display for MigrationsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MigrationsError::ResourceTemporarilyUnavailableError(err) => err.fmt(f),
        }
    }
}
