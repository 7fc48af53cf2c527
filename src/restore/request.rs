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

use crate::settings::{Settings, SettingsSource};

use super::options::IndicesOptions;

/// A request to restore indices from a snapshot.
///
/// A request names the repository and snapshot to restore from and describes which indices to
/// materialize, how to rename them, which settings to override, and whether the caller wants to
/// wait for the restore to complete. Requests are usually assembled through a
/// [`RestoreRequestBuilder`] rather than mutated directly, and are frozen once they are handed to
/// a [`ClusterAdmin`] for execution.
///
/// Every mutator overwrites the previous value and returns the request for chaining. None of them
/// validate: an incomplete or inconsistent request builds fine and is rejected when it is
/// executed. The one exception is [`set_settings`], which must parse serialized input and
/// therefore fails synchronously on malformed text. See [`validate`] for the completeness check
/// executing services perform.
///
/// # Examples
/// ```
/// use snap_restore::restore::RestoreRequest;
///
/// let mut request = RestoreRequest::with_snapshot("backups", "nightly");
/// request
///     .set_indices(["logs-*", "-logs-2020-12"])
///     .set_wait_for_completion(true);
///
/// assert_eq!(request.repository(), "backups");
/// assert_eq!(request.indices(), ["logs-*", "-logs-2020-12"]);
/// ```
///
/// [`RestoreRequestBuilder`]: crate::restore::RestoreRequestBuilder
/// [`ClusterAdmin`]: crate::cluster::ClusterAdmin
/// [`set_settings`]: crate::restore::RestoreRequest::set_settings
/// [`validate`]: crate::restore::RestoreRequest::validate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreRequest {
    repository: String,
    snapshot: String,
    indices: Vec<String>,
    indices_options: IndicesOptions,
    rename_pattern: Option<String>,
    rename_replacement: Option<String>,
    settings: Settings,
    wait_for_completion: bool,
    restore_global_state: bool,
}

impl Default for RestoreRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl RestoreRequest {
    /// Create a new empty `RestoreRequest`.
    ///
    /// The repository and snapshot names start out empty and must be set before the request is
    /// executed.
    pub fn new() -> Self {
        RestoreRequest {
            repository: String::new(),
            snapshot: String::new(),
            indices: Vec::new(),
            indices_options: IndicesOptions::default(),
            rename_pattern: None,
            rename_replacement: None,
            settings: Settings::new(),
            wait_for_completion: false,
            restore_global_state: false,
        }
    }

    /// Create a new `RestoreRequest` for the snapshot `snapshot` in `repository`.
    pub fn with_snapshot(repository: impl Into<String>, snapshot: impl Into<String>) -> Self {
        let mut request = Self::new();
        request.set_repository(repository).set_snapshot(snapshot);
        request
    }

    /// Set the name of the repository to restore from.
    pub fn set_repository(&mut self, repository: impl Into<String>) -> &mut Self {
        self.repository = repository.into();
        self
    }

    /// Set the name of the snapshot to restore.
    pub fn set_snapshot(&mut self, snapshot: impl Into<String>) -> &mut Self {
        self.snapshot = snapshot.into();
        self
    }

    /// Set the list of index patterns to restore.
    ///
    /// This replaces the previous list entirely. Entries are kept in the given order and resolved
    /// in that order at execution time: an entry may be an exact index name, a `*` wildcard
    /// expression, or an exclusion prefixed with `-`; a leading `+` marks an explicit include. An
    /// empty list restores every index in the snapshot, as does the single pattern `_all`.
    pub fn set_indices<I, S>(&mut self, patterns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.indices = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the policy for index patterns which don't resolve cleanly.
    ///
    /// If this is not specified, the default policy is [`IndicesOptions::lenient`].
    ///
    /// [`IndicesOptions::lenient`]: crate::restore::IndicesOptions::lenient
    pub fn set_indices_options(&mut self, options: IndicesOptions) -> &mut Self {
        self.indices_options = options;
        self
    }

    /// Set the regular expression applied to the names of the selected indices.
    ///
    /// The pattern is stored verbatim and only compiled at execution time, so an invalid
    /// expression is not rejected here. Renaming only happens when a replacement is also set with
    /// [`set_rename_replacement`].
    ///
    /// [`set_rename_replacement`]: crate::restore::RestoreRequest::set_rename_replacement
    pub fn set_rename_pattern(&mut self, pattern: impl Into<String>) -> &mut Self {
        self.rename_pattern = Some(pattern.into());
        self
    }

    /// Set the replacement text for the rename pattern.
    ///
    /// The replacement may reference capture groups of the rename pattern as `$1`, `$2`, and so
    /// on. Setting a replacement without a pattern is fine and renames nothing.
    pub fn set_rename_replacement(&mut self, replacement: impl Into<String>) -> &mut Self {
        self.rename_replacement = Some(replacement.into());
        self
    }

    /// Set the repository-specific settings for the restore, replacing any previous settings.
    ///
    /// Settings can be passed in any form which implements [`SettingsSource`]: a [`Settings`]
    /// collection, a [`SettingsBuilder`], serialized JSON, YAML, or properties text, or a loosely
    /// typed map. Whatever the form, the previous settings on the request are replaced wholesale;
    /// to layer sources, merge them in a [`SettingsBuilder`] first.
    ///
    /// # Errors
    /// - `Error::ParseSettings`: The source is serialized text which could not be parsed. The
    /// request keeps its previous settings.
    ///
    /// [`SettingsSource`]: crate::settings::SettingsSource
    /// [`Settings`]: crate::settings::Settings
    /// [`SettingsBuilder`]: crate::settings::SettingsBuilder
    pub fn set_settings(&mut self, source: impl SettingsSource) -> crate::Result<&mut Self> {
        self.settings = source.into_settings()?;
        Ok(self)
    }

    /// Set whether the caller wants to wait for the restore to complete.
    ///
    /// If this is `true`, the response delivered to the listener carries a [`RestoreInfo`]. If
    /// this is `false`, the default, the response is delivered as soon as the restore has started.
    ///
    /// [`RestoreInfo`]: crate::restore::RestoreInfo
    pub fn set_wait_for_completion(&mut self, wait: bool) -> &mut Self {
        self.wait_for_completion = wait;
        self
    }

    /// Set whether cluster-wide state stored in the snapshot should be restored as well.
    pub fn set_restore_global_state(&mut self, restore: bool) -> &mut Self {
        self.restore_global_state = restore;
        self
    }

    /// The name of the repository to restore from, or `""` if unset.
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// The name of the snapshot to restore, or `""` if unset.
    pub fn snapshot(&self) -> &str {
        &self.snapshot
    }

    /// The index patterns to restore, in the order they were given.
    pub fn indices(&self) -> &[String] {
        &self.indices
    }

    /// The policy for index patterns which don't resolve cleanly.
    pub fn indices_options(&self) -> IndicesOptions {
        self.indices_options
    }

    /// The rename pattern, if one is set.
    pub fn rename_pattern(&self) -> Option<&str> {
        self.rename_pattern.as_deref()
    }

    /// The rename replacement, if one is set.
    pub fn rename_replacement(&self) -> Option<&str> {
        self.rename_replacement.as_deref()
    }

    /// The repository-specific settings for the restore.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether the caller wants to wait for the restore to complete.
    pub fn wait_for_completion(&self) -> bool {
        self.wait_for_completion
    }

    /// Whether cluster-wide state stored in the snapshot should be restored as well.
    pub fn restore_global_state(&self) -> bool {
        self.restore_global_state
    }

    /// Check that the request is complete enough to execute.
    ///
    /// Executing services call this when a request is handed to them; the request builder never
    /// does.
    ///
    /// # Errors
    /// - `Error::MissingRepository`: The request does not name a repository.
    /// - `Error::MissingSnapshot`: The request does not name a snapshot.
    pub fn validate(&self) -> crate::Result<()> {
        if self.repository.is_empty() {
            return Err(crate::Error::MissingRepository);
        }
        if self.snapshot.is_empty() {
            return Err(crate::Error::MissingSnapshot);
        }
        Ok(())
    }
}
