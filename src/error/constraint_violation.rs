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

//! Module containing ConstraintViolationError implementation.

use std::error;
use std::fmt;

/// The type of database constraint that was violated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstraintViolationType {
    Unique,
    ForeignKey,
}

impl fmt::Display for ConstraintViolationType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConstraintViolationType::Unique => write!(f, "Unique"),
            ConstraintViolationType::ForeignKey => write!(f, "ForeignKey"),
        }
    }
}

/// An error which is returned when an operation would violate a database
/// constraint, such as a unique or foreign-key constraint.
#[derive(Debug)]
pub struct ConstraintViolationError {
    violation_type: ConstraintViolationType,
    source: Option<Box<dyn error::Error>>,
}

impl ConstraintViolationError {
    /// Constructs a new `ConstraintViolationError` with a specified violation
    /// type.
    pub fn with_violation_type(violation_type: ConstraintViolationType) -> Self {
        Self {
            violation_type,
            source: None,
        }
    }

    /// Constructs a new `ConstraintViolationError` from a specified source
    /// error and violation type.
    pub fn from_source_with_violation_type(
        violation_type: ConstraintViolationType,
        source: Box<dyn error::Error>,
    ) -> Self {
        Self {
            violation_type,
            source: Some(source),
        }
    }

    /// Returns the type of constraint that was violated.
    pub fn violation_type(&self) -> &ConstraintViolationType {
        &self.violation_type
    }
}

impl error::Error for ConstraintViolationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.source.as_ref().map(|s| s.as_ref())
    }
}

impl fmt::Display for ConstraintViolationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source {
            Some(s) => write!(f, "{}", s),
            None => write!(
                f,
                "{} constraint violated",
                match self.violation_type {
                    ConstraintViolationType::Unique => "unique",
                    ConstraintViolationType::ForeignKey => "foreign key",
                }
            ),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// Tests that errors constructed with
    /// `ConstraintViolationError::with_violation_type` display a message
    /// naming the violated constraint.
    #[test]
    fn test_display_with_violation_type() {
        let err =
            ConstraintViolationError::with_violation_type(ConstraintViolationType::Unique);
        assert_eq!(format!("{}", err), "unique constraint violated");
        assert_eq!(err.violation_type(), &ConstraintViolationType::Unique);
    }

    /// Tests that errors constructed with
    /// `ConstraintViolationError::from_source_with_violation_type` pass the
    /// source display through unmodified.
    #[test]
    fn test_display_from_source() {
        let source = crate::error::InternalError::with_message("db failure".to_string());
        let err = ConstraintViolationError::from_source_with_violation_type(
            ConstraintViolationType::ForeignKey,
            Box::new(source),
        );
        assert_eq!(format!("{}", err), "db failure");
    }
}
