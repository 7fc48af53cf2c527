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

use serde::{Deserialize, Serialize};

use super::builder::SettingsBuilder;
use super::parse;

/// A canonical collection of settings.
///
/// Settings are a flat map of dotted string keys to string values. Nested structures in serialized
/// input are flattened into dotted key paths, so the JSON document `{"index": {"refresh": "1s"}}`
/// and the properties line `index.refresh=1s` describe the same settings.
///
/// Values are stored as text regardless of how they were written in the source document. The typed
/// accessors ([`get_bool`] and [`get_u64`]) parse values on demand and return `None` for values
/// that don't parse.
///
/// # Examples
/// ```
/// use snap_restore::settings::Settings;
///
/// let settings = Settings::from_source(r#"{"index": {"number_of_replicas": 0}}"#).unwrap();
/// assert_eq!(settings.get("index.number_of_replicas"), Some("0"));
/// assert_eq!(settings.get_u64("index.number_of_replicas"), Some(0));
/// ```
///
/// [`get_bool`]: crate::settings::Settings::get_bool
/// [`get_u64`]: crate::settings::Settings::get_u64
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings {
    map: BTreeMap<String, String>,
}

impl Settings {
    /// Create a new empty `Settings`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`SettingsBuilder`].
    ///
    /// [`SettingsBuilder`]: crate::settings::SettingsBuilder
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::new()
    }

    /// Parse settings from the serialized text in `source`.
    ///
    /// The format of `source` is detected automatically: a document starting with `{` is JSON, a
    /// document starting with `---` or whose first content line is a `key: value` mapping is YAML,
    /// and anything else is read as flat `key=value` properties. The top level of a JSON or YAML
    /// document must be a mapping; nested mappings and sequences are flattened into dotted keys
    /// and null values are omitted.
    ///
    /// # Examples
    /// ```
    /// use snap_restore::settings::Settings;
    ///
    /// let from_json = Settings::from_source(r#"{"a": "b"}"#).unwrap();
    /// let from_yaml = Settings::from_source("a: b").unwrap();
    /// let from_properties = Settings::from_source("a=b").unwrap();
    ///
    /// assert_eq!(from_json, from_yaml);
    /// assert_eq!(from_json, from_properties);
    /// ```
    ///
    /// # Errors
    /// - `Error::ParseSettings`: The source could not be parsed in the detected format.
    pub fn from_source(source: &str) -> crate::Result<Self> {
        Ok(Settings {
            map: parse::parse_source(source)?,
        })
    }

    pub(crate) fn from_map(map: BTreeMap<String, String>) -> Self {
        Settings { map }
    }

    /// Return the value of the setting with the given `key`, or `None` if it is unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    /// Return the setting with the given `key` parsed as a boolean.
    ///
    /// This returns `None` if the setting is unset or its value is not `true` or `false`.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key)?.parse().ok()
    }

    /// Return the setting with the given `key` parsed as an unsigned integer.
    ///
    /// This returns `None` if the setting is unset or its value is not an unsigned integer.
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key)?.parse().ok()
    }

    /// Return whether a setting with the given `key` exists.
    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// The number of settings in this collection.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Return whether this collection is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over the setting keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    /// Iterate over the settings as key-value pairs in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}
