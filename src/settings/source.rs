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

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use super::builder::SettingsBuilder;
use super::parse;
use super::settings::Settings;

/// A value which can be converted into canonical [`Settings`].
///
/// This trait unifies the representations a caller may hold settings in when handing them to a
/// restore request:
///
/// - A [`Settings`] collection, passed through unchanged.
/// - A [`SettingsBuilder`], finalized with [`SettingsBuilder::build`].
/// - Serialized text (`&str` or `String`), parsed with [`Settings::from_source`]. This is the
///   only conversion that can fail.
/// - A `HashMap<String, serde_json::Value>` of loosely typed values, flattened into dotted keys
///   the same way a parsed document is.
///
/// [`Settings`]: crate::settings::Settings
/// [`SettingsBuilder`]: crate::settings::SettingsBuilder
/// [`SettingsBuilder::build`]: crate::settings::SettingsBuilder::build
/// [`Settings::from_source`]: crate::settings::Settings::from_source
pub trait SettingsSource {
    /// Convert this value into canonical settings.
    ///
    /// # Errors
    /// - `Error::ParseSettings`: This value is serialized text which could not be parsed.
    fn into_settings(self) -> crate::Result<Settings>;
}

impl SettingsSource for Settings {
    fn into_settings(self) -> crate::Result<Settings> {
        Ok(self)
    }
}

impl SettingsSource for &Settings {
    fn into_settings(self) -> crate::Result<Settings> {
        Ok(self.clone())
    }
}

impl SettingsSource for SettingsBuilder {
    fn into_settings(self) -> crate::Result<Settings> {
        Ok(self.build())
    }
}

impl SettingsSource for &SettingsBuilder {
    fn into_settings(self) -> crate::Result<Settings> {
        Ok(self.build())
    }
}

impl SettingsSource for &str {
    fn into_settings(self) -> crate::Result<Settings> {
        Settings::from_source(self)
    }
}

impl SettingsSource for String {
    fn into_settings(self) -> crate::Result<Settings> {
        Settings::from_source(&self)
    }
}

impl SettingsSource for HashMap<String, Value> {
    fn into_settings(self) -> crate::Result<Settings> {
        let mut map = BTreeMap::new();
        for (key, value) in &self {
            parse::flatten_value(key, value, &mut map);
        }
        Ok(Settings::from_map(map))
    }
}
