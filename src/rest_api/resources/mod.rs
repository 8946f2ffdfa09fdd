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

pub mod addresses;
mod error;
mod meta;
pub mod suppliers;

pub use error::ErrorResponse;
pub use meta::Meta;

/// Number of records returned per page
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Envelope for mutations that carry no payload beyond their outcome
#[derive(Debug, Serialize, PartialEq)]
pub struct StatusSlice {
    pub success: bool,
    pub message: String,
}

impl StatusSlice {
    pub fn new(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}

/// Converts a one-based page number into a record offset. Page numbers
/// below one are clamped to the first page.
pub fn offset_for_page(page: i64) -> i64 {
    (page.max(1) - 1) * DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn page_numbers_map_to_offsets() {
        assert_eq!(offset_for_page(1), 0);
        assert_eq!(offset_for_page(3), 20);
    }

    #[test]
    fn low_page_numbers_clamp_to_the_first_page() {
        assert_eq!(offset_for_page(0), 0);
        assert_eq!(offset_for_page(-7), 0);
    }
}
