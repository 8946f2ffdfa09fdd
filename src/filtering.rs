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

//! Parsing for the `filter` query parameter accepted by the list endpoints.
//!
//! The raw value is a comma-delimited keyword list. Parsing only trims and
//! drops empty tokens; unrecognized keywords are ignored by the stores when
//! the keyword set is turned into list filters.

/// Splits a raw `filter` query value into trimmed, non-empty keywords.
pub fn parse_filters(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(value) => value
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(String::from)
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn parse_keywords_trims_and_splits() {
        assert_eq!(
            parse_filters(Some("inactive, msme_registered")),
            vec!["inactive".to_string(), "msme_registered".to_string()]
        );
    }

    #[test]
    fn parse_empty_value_yields_no_keywords() {
        assert_eq!(parse_filters(Some("")), Vec::<String>::new());
        assert_eq!(parse_filters(None), Vec::<String>::new());
    }

    #[test]
    fn parse_drops_empty_tokens() {
        assert_eq!(
            parse_filters(Some(" , primary,, billing , ")),
            vec!["primary".to_string(), "billing".to_string()]
        );
    }
}
