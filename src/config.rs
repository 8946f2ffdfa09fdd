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

pub struct SupplierConfig {
    database_url: String,
    bind: String,
}

impl SupplierConfig {
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn bind(&self) -> &str {
        &self.bind
    }
}

pub struct SupplierConfigBuilder {
    database_url: Option<String>,
    bind: Option<String>,
}

impl Default for SupplierConfigBuilder {
    fn default() -> Self {
        Self {
            database_url: Some("postgres://localhost:5432/supplier_management".to_owned()),
            bind: Some("127.0.0.1:5000".to_owned()),
        }
    }
}

impl SupplierConfigBuilder {
    pub fn with_cli_args(&mut self, matches: &clap::ArgMatches<'_>) -> Self {
        Self {
            database_url: matches
                .value_of("database_url")
                .map(ToOwned::to_owned)
                .or_else(|| self.database_url.take()),
            bind: matches
                .value_of("bind")
                .map(ToOwned::to_owned)
                .or_else(|| self.bind.take()),
        }
    }

    pub fn build(mut self) -> Result<SupplierConfig, ConfigurationError> {
        Ok(SupplierConfig {
            database_url: self
                .database_url
                .take()
                .ok_or_else(|| ConfigurationError::MissingValue("database_url".to_owned()))?,
            bind: self
                .bind
                .take()
                .ok_or_else(|| ConfigurationError::MissingValue("bind".to_owned()))?,
        })
    }
}

#[derive(Debug)]
pub enum ConfigurationError {
    MissingValue(String),
}

impl Error for ConfigurationError {}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigurationError::MissingValue(config_field_name) => {
                write!(f, "Missing configuration for {}", config_field_name)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn build_with_args() {
        let matches = clap::App::new("testapp")
            .arg(
                clap::Arg::with_name("database_url")
                    .long("database-url")
                    .takes_value(true),
            )
            .arg(clap::Arg::with_name("bind").short("b").takes_value(true))
            .get_matches_from(vec![
                "testapp",
                "--database-url",
                "postgres://db:5432/suppliers",
                "-b",
                "0.0.0.0:8080",
            ]);

        let config = SupplierConfigBuilder::default()
            .with_cli_args(&matches)
            .build()
            .expect("Unable to build configuration");

        assert_eq!("postgres://db:5432/suppliers", config.database_url());
        assert_eq!("0.0.0.0:8080", config.bind());
    }

    #[test]
    fn build_with_missing_args() {
        let matches = clap::App::new("testapp")
            .arg(
                clap::Arg::with_name("database_url")
                    .long("database-url")
                    .takes_value(true),
            )
            .arg(clap::Arg::with_name("bind").short("b").takes_value(true))
            .get_matches_from(vec!["testapp"]);

        let config = SupplierConfigBuilder::default()
            .with_cli_args(&matches)
            .build()
            .expect("Unable to build configuration");

        assert_eq!(
            "postgres://localhost:5432/supplier_management",
            config.database_url()
        );
        assert_eq!("127.0.0.1:5000", config.bind());
    }
}
