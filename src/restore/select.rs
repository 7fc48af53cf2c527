/*
 * Copyright 2021 Wren Powell
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::collections::HashSet;

use regex::Regex;

use super::options::IndicesOptions;

/// Resolve the index patterns in `patterns` against the index names in `available`.
///
/// Entries are applied in order, so later entries override earlier ones. An entry may be an exact
/// index name or a `*` wildcard expression, either of which adds its matches to the selection. An
/// entry prefixed with `-` removes its matches instead; an exclusion in first position removes
/// from the full index set. A leading `+` marks an entry as an explicit include and is otherwise
/// equivalent to no prefix. An empty pattern list and the single pattern `_all` both select every
/// available index.
///
/// The returned names are in the order they appear in `available`, not the order the patterns
/// mention them.
///
/// # Errors
/// - `Error::IndexNotFound`: An exact name is not in `available` and `options` doesn't have
/// [`IGNORE_UNAVAILABLE`] set, or a wildcard entry matched nothing and `options` doesn't have
/// [`ALLOW_NO_INDICES`] set.
/// - `Error::InvalidPattern`: A wildcard entry could not be compiled.
///
/// [`IGNORE_UNAVAILABLE`]: crate::restore::IndicesOptions::IGNORE_UNAVAILABLE
/// [`ALLOW_NO_INDICES`]: crate::restore::IndicesOptions::ALLOW_NO_INDICES
pub fn select_indices(
    available: &[String],
    patterns: &[String],
    options: IndicesOptions,
) -> crate::Result<Vec<String>> {
    if patterns.is_empty() || (patterns.len() == 1 && patterns[0] == "_all") {
        return Ok(available.to_vec());
    }

    let mut selected = HashSet::new();
    for (position, entry) in patterns.iter().enumerate() {
        let (pattern, include) = match entry.strip_prefix('-') {
            Some(rest) => {
                // An exclusion in first position subtracts from the full index set.
                if position == 0 {
                    selected.extend(available.iter().map(String::as_str));
                }
                (rest, false)
            }
            None => (entry.strip_prefix('+').unwrap_or(entry), true),
        };

        if is_wildcard(pattern) {
            let matcher = wildcard_matcher(pattern)?;
            let mut matched = false;
            for name in available {
                if matcher.is_match(name) {
                    matched = true;
                    if include {
                        selected.insert(name.as_str());
                    } else {
                        selected.remove(name.as_str());
                    }
                }
            }
            if !matched && !options.contains(IndicesOptions::ALLOW_NO_INDICES) {
                return Err(crate::Error::IndexNotFound(entry.clone()));
            }
        } else if available.iter().any(|name| name == pattern) {
            if include {
                selected.insert(pattern);
            } else {
                selected.remove(pattern);
            }
        } else if !options.contains(IndicesOptions::IGNORE_UNAVAILABLE) {
            return Err(crate::Error::IndexNotFound(pattern.to_owned()));
        }
    }

    Ok(available
        .iter()
        .filter(|name| selected.contains(name.as_str()))
        .cloned()
        .collect())
}

/// Whether `pattern` contains wildcard syntax rather than naming an index exactly.
fn is_wildcard(pattern: &str) -> bool {
    pattern.contains('*')
}

/// Compile a `*` wildcard expression into an anchored regex.
fn wildcard_matcher(pattern: &str) -> crate::Result<Regex> {
    let mut expression = String::with_capacity(pattern.len() + 4);
    expression.push('^');
    for (position, literal) in pattern.split('*').enumerate() {
        if position > 0 {
            expression.push_str(".*");
        }
        expression.push_str(&regex::escape(literal));
    }
    expression.push('$');
    Ok(Regex::new(&expression)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<String> {
        ["kibana", "logs-2020-01", "logs-2020-02", "metrics-2020"]
            .iter()
            .map(|name| String::from(*name))
            .collect()
    }

    fn patterns(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|entry| String::from(*entry)).collect()
    }

    #[test]
    fn empty_pattern_list_selects_everything() {
        let selected =
            select_indices(&available(), &[], IndicesOptions::strict()).unwrap();
        assert_eq!(selected, available());
    }

    #[test]
    fn all_keyword_selects_everything() {
        let selected =
            select_indices(&available(), &patterns(&["_all"]), IndicesOptions::strict()).unwrap();
        assert_eq!(selected, available());
    }

    #[test]
    fn exact_names_select_in_available_order() {
        let selected = select_indices(
            &available(),
            &patterns(&["metrics-2020", "kibana"]),
            IndicesOptions::strict(),
        )
        .unwrap();
        assert_eq!(selected, ["kibana", "metrics-2020"]);
    }

    #[test]
    fn wildcard_expands_against_available() {
        let selected = select_indices(
            &available(),
            &patterns(&["logs-*"]),
            IndicesOptions::strict(),
        )
        .unwrap();
        assert_eq!(selected, ["logs-2020-01", "logs-2020-02"]);
    }

    #[test]
    fn leading_exclusion_subtracts_from_everything() {
        let selected = select_indices(
            &available(),
            &patterns(&["-logs-*"]),
            IndicesOptions::strict(),
        )
        .unwrap();
        assert_eq!(selected, ["kibana", "metrics-2020"]);
    }

    #[test]
    fn exclusion_after_include_removes_matches() {
        let selected = select_indices(
            &available(),
            &patterns(&["logs-*", "-logs-2020-02"]),
            IndicesOptions::strict(),
        )
        .unwrap();
        assert_eq!(selected, ["logs-2020-01"]);
    }

    #[test]
    fn explicit_include_overrides_exclusion() {
        let selected = select_indices(
            &available(),
            &patterns(&["-logs-2020*", "+logs-2020-01"]),
            IndicesOptions::strict(),
        )
        .unwrap();
        assert_eq!(selected, ["kibana", "logs-2020-01", "metrics-2020"]);
    }

    #[test]
    fn missing_name_errs_when_strict() {
        let result = select_indices(
            &available(),
            &patterns(&["traces-2020"]),
            IndicesOptions::strict(),
        );
        assert!(matches!(result, Err(crate::Error::IndexNotFound(name)) if name == "traces-2020"));
    }

    #[test]
    fn missing_name_is_skipped_when_ignoring_unavailable() {
        let selected = select_indices(
            &available(),
            &patterns(&["traces-2020", "kibana"]),
            IndicesOptions::IGNORE_UNAVAILABLE,
        )
        .unwrap();
        assert_eq!(selected, ["kibana"]);
    }

    #[test]
    fn empty_wildcard_errs_when_strict() {
        let result = select_indices(
            &available(),
            &patterns(&["traces-*"]),
            IndicesOptions::strict(),
        );
        assert!(matches!(result, Err(crate::Error::IndexNotFound(name)) if name == "traces-*"));
    }

    #[test]
    fn empty_wildcard_is_fine_when_allowing_no_indices() {
        let selected = select_indices(
            &available(),
            &patterns(&["traces-*"]),
            IndicesOptions::ALLOW_NO_INDICES,
        )
        .unwrap();
        assert!(selected.is_empty());
    }

    #[test]
    fn wildcard_escapes_regex_metacharacters() {
        let available = vec![String::from("logs.2020"), String::from("logsx2020")];
        let selected =
            select_indices(&available, &patterns(&["logs.*"]), IndicesOptions::strict()).unwrap();
        assert_eq!(selected, ["logs.2020"]);
    }

    #[test]
    fn selection_is_deterministic_across_pattern_order() {
        let forward = select_indices(
            &available(),
            &patterns(&["kibana", "logs-*"]),
            IndicesOptions::strict(),
        )
        .unwrap();
        let backward = select_indices(
            &available(),
            &patterns(&["logs-*", "kibana"]),
            IndicesOptions::strict(),
        )
        .unwrap();
        assert_eq!(forward, backward);
    }
}
