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

//! Repository and index settings.
//!
//! This module provides the canonical [`Settings`] representation used by restore requests.
//! Settings are a flat map of dotted string keys to string values, but callers rarely hold them
//! that way, so this module accepts them in four forms: an existing [`Settings`] collection, a
//! fluent [`SettingsBuilder`], serialized text in JSON, YAML, or flat properties format with the
//! format detected automatically, and a loosely typed key-value map. The [`SettingsSource`] trait
//! unifies these forms; anything which implements it can be passed to
//! [`RestoreRequest::set_settings`].
//!
//! [`Settings`]: crate::settings::Settings
//! [`SettingsBuilder`]: crate::settings::SettingsBuilder
//! [`SettingsSource`]: crate::settings::SettingsSource
//! [`RestoreRequest::set_settings`]: crate::restore::RestoreRequest::set_settings

pub use self::builder::SettingsBuilder;
pub use self::settings::Settings;
pub use self::source::SettingsSource;

mod builder;
mod parse;
mod settings;
mod source;
