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

use std::collections::BTreeMap;

use serde_json::Value;

use crate::Error;

/// A serialized representation of settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceFormat {
    /// A JSON document with an object at the top level.
    Json,

    /// A YAML document with a mapping at the top level.
    Yaml,

    /// Flat `key=value` lines.
    Properties,
}

/// Guess the format of the serialized settings in `source`.
///
/// A document starting with `{` is JSON and one starting with `---` is YAML. Otherwise the first
/// line which isn't blank or a comment decides: a `: ` separator (or a trailing `:`) before any
/// `=` means YAML, anything else is read as flat properties.
fn detect_format(source: &str) -> SourceFormat {
    let trimmed = source.trim_start();
    if trimmed.starts_with('{') {
        return SourceFormat::Json;
    }
    if trimmed.starts_with("---") {
        return SourceFormat::Yaml;
    }

    for line in source.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let colon = match line.find(": ") {
            Some(position) => Some(position),
            None if line.ends_with(':') => Some(line.len() - 1),
            None => None,
        };
        return match (colon, line.find('=')) {
            (Some(colon), Some(equals)) if colon < equals => SourceFormat::Yaml,
            (Some(_), None) => SourceFormat::Yaml,
            _ => SourceFormat::Properties,
        };
    }

    SourceFormat::Properties
}

/// Parse serialized settings from `source` into a flat map of dotted keys.
pub(super) fn parse_source(source: &str) -> crate::Result<BTreeMap<String, String>> {
    match detect_format(source) {
        SourceFormat::Json => {
            let root = serde_json::from_str(source)
                .map_err(|error| Error::ParseSettings(error.to_string()))?;
            flatten_root(root)
        }
        SourceFormat::Yaml => {
            let root = serde_yaml::from_str(source)
                .map_err(|error| Error::ParseSettings(error.to_string()))?;
            flatten_root(root)
        }
        SourceFormat::Properties => Ok(parse_properties(source)),
    }
}

/// Flatten a parsed document into dotted keys.
///
/// The top level of the document must be a mapping. An empty or null document is an empty map.
fn flatten_root(root: Value) -> crate::Result<BTreeMap<String, String>> {
    let mut settings = BTreeMap::new();
    match root {
        Value::Null => {}
        Value::Object(fields) => {
            for (key, value) in &fields {
                flatten_value(key, value, &mut settings);
            }
        }
        _ => {
            return Err(Error::ParseSettings(String::from(
                "the top level of the settings source must be a key-value mapping",
            )))
        }
    }
    Ok(settings)
}

/// Record `value` under the dotted key `path`, recursing into mappings and sequences.
///
/// Null values are omitted. Sequence elements get their position as a path segment.
pub(super) fn flatten_value(path: &str, value: &Value, settings: &mut BTreeMap<String, String>) {
    match value {
        Value::Null => {}
        Value::Bool(value) => {
            settings.insert(path.to_owned(), value.to_string());
        }
        Value::Number(value) => {
            settings.insert(path.to_owned(), value.to_string());
        }
        Value::String(value) => {
            settings.insert(path.to_owned(), value.clone());
        }
        Value::Array(elements) => {
            for (position, element) in elements.iter().enumerate() {
                flatten_value(&format!("{}.{}", path, position), element, settings);
            }
        }
        Value::Object(fields) => {
            for (name, field) in fields {
                flatten_value(&format!("{}.{}", path, name), field, settings);
            }
        }
    }
}

/// Parse flat `key=value` lines.
///
/// Blank lines and lines starting with `#` or `!` are skipped. A line without a `=` is a key with
/// an empty value. Keys and values are trimmed.
fn parse_properties(source: &str) -> BTreeMap<String, String> {
    let mut settings = BTreeMap::new();
    for line in source.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        match line.split_once('=') {
            Some((key, value)) => {
                settings.insert(key.trim().to_owned(), value.trim().to_owned());
            }
            None => {
                settings.insert(line.to_owned(), String::new());
            }
        }
    }
    settings
}
