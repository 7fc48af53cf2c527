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

use super::parse;
use super::settings::Settings;

/// Assemble a [`Settings`] collection.
///
/// This type is a builder used to construct settings incrementally. Typically you'll create one
/// with [`Settings::builder`], chain calls to add values, and then call [`build`]. Unlike the
/// setters on a restore request, the methods on this builder merge: later calls override earlier
/// values for the same key but leave everything else in place, so serialized sources and
/// individual values can be layered.
///
/// # Examples
/// ```
/// use snap_restore::settings::Settings;
///
/// let mut builder = Settings::builder();
/// builder
///     .load_source(r#"{"index": {"number_of_replicas": 1}}"#)
///     .unwrap()
///     .put("index.number_of_replicas", 0)
///     .put("index.refresh_interval", "30s");
/// let settings = builder.build();
///
/// assert_eq!(settings.get("index.number_of_replicas"), Some("0"));
/// assert_eq!(settings.get("index.refresh_interval"), Some("30s"));
/// ```
///
/// [`Settings::builder`]: crate::settings::Settings::builder
/// [`build`]: crate::settings::SettingsBuilder::build
#[derive(Debug, Clone, Default)]
pub struct SettingsBuilder {
    map: BTreeMap<String, String>,
}

impl SettingsBuilder {
    /// Create a new empty `SettingsBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the setting `key` to `value`, replacing any previous value.
    ///
    /// The value is stored as text; any type which implements [`ToString`] can be passed.
    pub fn put(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.map.insert(key.into(), value.to_string());
        self
    }

    /// Copy every setting in `entries` into this builder, replacing previous values.
    pub fn put_all<I, K, V>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        for (key, value) in entries {
            self.map.insert(key.into(), value.to_string());
        }
        self
    }

    /// Remove the setting with the given `key` if it is set.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.map.remove(key);
        self
    }

    /// Parse the serialized settings in `source` and merge them into this builder.
    ///
    /// The format of `source` is detected the same way as in [`Settings::from_source`]. Keys
    /// parsed from `source` replace previous values; keys not mentioned in `source` are left in
    /// place.
    ///
    /// # Errors
    /// - `Error::ParseSettings`: The source could not be parsed in the detected format.
    ///
    /// [`Settings::from_source`]: crate::settings::Settings::from_source
    pub fn load_source(&mut self, source: &str) -> crate::Result<&mut Self> {
        let parsed = parse::parse_source(source)?;
        self.map.extend(parsed);
        Ok(self)
    }

    /// Build the settings accumulated so far.
    ///
    /// This does not consume the builder, so more values can be added afterwards.
    pub fn build(&self) -> Settings {
        Settings::from_map(self.map.clone())
    }
}
