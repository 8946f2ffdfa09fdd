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

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use std::error::Error;
use std::fmt;
use std::process;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use flexi_logger::{FlexiLoggerError, LogSpecBuilder, Logger};

use supplier_daemon::config::{ConfigurationError, SupplierConfigBuilder};
use supplier_daemon::error::InternalError;
use supplier_daemon::migrations::{self, MigrationsError};
use supplier_daemon::rest_api::actix::{run as run_rest_api, StoreState};

const APP_NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[actix_web::main]
async fn main() {
    if let Err(err) = run().await {
        error!("{}", err);
        process::exit(1);
    }
}

async fn run() -> Result<(), DaemonError> {
    let matches = clap_app!(supplierd =>
        (name: APP_NAME)
        (version: VERSION)
        (about: "Daemon for the supplier management REST API")
        (@arg verbose: -v +multiple "Log verbosely")
        (@arg database_url: --("database-url") +takes_value
         "specifies the database URL to connect to")
        (@arg bind: -b --bind +takes_value
         "connection endpoint for the REST API"))
    .get_matches();

    let log_level = match matches.occurrences_of("verbose") {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    let mut log_spec_builder = LogSpecBuilder::new();
    log_spec_builder.default(log_level);
    log_spec_builder.module("hyper", log::LevelFilter::Warn);
    log_spec_builder.module("mio", log::LevelFilter::Warn);

    Logger::with(log_spec_builder.build()).start()?;

    let config = SupplierConfigBuilder::default()
        .with_cli_args(&matches)
        .build()?;

    let connection_pool: Pool<ConnectionManager<PgConnection>> =
        Pool::new(ConnectionManager::new(config.database_url()))
            .map_err(|err| DaemonError::StartUpError(Box::new(err)))?;

    {
        let conn = connection_pool
            .get()
            .map_err(|err| DaemonError::StartUpError(Box::new(err)))?;
        migrations::run_migrations(&conn)?;
    }

    info!("Starting {} on {}", APP_NAME, config.bind());

    run_rest_api(config.bind(), StoreState::with_pg_pool(connection_pool)).await?;

    Ok(())
}

#[derive(Debug)]
enum DaemonError {
    LoggingError(FlexiLoggerError),
    ConfigurationError(ConfigurationError),
    MigrationsError(MigrationsError),
    RestApiError(InternalError),
    StartUpError(Box<dyn Error>),
}

impl Error for DaemonError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DaemonError::LoggingError(err) => Some(err),
            DaemonError::ConfigurationError(err) => Some(err),
            DaemonError::MigrationsError(err) => Some(err),
            DaemonError::RestApiError(err) => Some(err),
            DaemonError::StartUpError(err) => Some(&**err),
        }
    }
}

impl fmt::Display for DaemonError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DaemonError::LoggingError(err) => write!(f, "Failed to initialize logging: {}", err),
            DaemonError::ConfigurationError(err) => write!(f, "Invalid configuration: {}", err),
            DaemonError::MigrationsError(err) => write!(f, "Failed to run migrations: {}", err),
            DaemonError::RestApiError(err) => write!(f, "REST API failed: {}", err),
            DaemonError::StartUpError(err) => write!(f, "Failed to start daemon: {}", err),
        }
    }
}

impl From<FlexiLoggerError> for DaemonError {
    fn from(err: FlexiLoggerError) -> Self {
        DaemonError::LoggingError(err)
    }
}

impl From<ConfigurationError> for DaemonError {
    fn from(err: ConfigurationError) -> Self {
        DaemonError::ConfigurationError(err)
    }
}

impl From<MigrationsError> for DaemonError {
    fn from(err: MigrationsError) -> Self {
        DaemonError::MigrationsError(err)
    }
}

impl From<InternalError> for DaemonError {
    fn from(err: InternalError) -> Self {
        DaemonError::RestApiError(err)
    }
}
