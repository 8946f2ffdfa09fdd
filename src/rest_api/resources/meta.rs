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

use crate::paging::Paging;

/// Pagination block included in listing envelopes
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Meta {
    pub current_page: i64,
    pub per_page: i64,
    pub total_records: i64,
    pub total_pages: i64,
}

impl Meta {
    pub fn new(paging: &Paging) -> Self {
        let per_page = paging.limit;
        let current_page = if per_page > 0 {
            paging.offset / per_page + 1
        } else {
            1
        };
        let total_pages = if per_page > 0 {
            (paging.total + per_page - 1) / per_page
        } else {
            0
        };
        Self {
            current_page,
            per_page,
            total_records: paging.total,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn meta_describes_a_middle_page() {
        let meta = Meta::new(&Paging::new(10, 10, 25));
        assert_eq!(
            meta,
            Meta {
                current_page: 2,
                per_page: 10,
                total_records: 25,
                total_pages: 3,
            }
        );
    }

    #[test]
    fn meta_handles_an_empty_listing() {
        let meta = Meta::new(&Paging::new(0, 10, 0));
        assert_eq!(
            meta,
            Meta {
                current_page: 1,
                per_page: 10,
                total_records: 0,
                total_pages: 0,
            }
        );
    }

    #[test]
    fn meta_handles_an_exact_page_boundary() {
        let meta = Meta::new(&Paging::new(0, 10, 20));
        assert_eq!(meta.total_pages, 2);
    }
}
