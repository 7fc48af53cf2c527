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

use crate::cluster::RequestBuilder;
use crate::settings::SettingsSource;

use super::options::IndicesOptions;
use super::request::RestoreRequest;

/// Assemble and submit a [`RestoreRequest`].
///
/// This type is a thin fluent front-end over [`RestoreRequest`]: each setter forwards to the
/// corresponding mutator on the request, and [`execute`] hands the finished request to the admin
/// service the builder was created with. Construction comes in two forms: [`new`] starts from an
/// empty request, and [`with_snapshot`] pre-seeds the repository and snapshot names.
///
/// The builder performs no validation. A request missing its repository or snapshot name, or
/// naming indices the snapshot doesn't contain, builds fine here and is rejected by the admin
/// service when executed. The one synchronous failure is [`settings`], which must parse
/// serialized text.
///
/// # Examples
/// ```
/// use snap_restore::cluster::{MemoryCluster, Snapshot};
/// use snap_restore::restore::RestoreRequestBuilder;
///
/// let mut cluster = MemoryCluster::new();
/// cluster.add_snapshot("backups", "nightly", Snapshot::new().index("logs-2020-01", 1));
///
/// RestoreRequestBuilder::with_snapshot(&mut cluster, "backups", "nightly")
///     .indices(["logs-*"])
///     .wait_for_completion(true)
///     .execute(|outcome| {
///         let response = outcome.unwrap();
///         assert!(response.info().is_some());
///     });
/// ```
///
/// [`RestoreRequest`]: crate::restore::RestoreRequest
/// [`execute`]: crate::cluster::RequestBuilder::execute
/// [`new`]: crate::restore::RestoreRequestBuilder::new
/// [`with_snapshot`]: crate::restore::RestoreRequestBuilder::with_snapshot
/// [`settings`]: crate::restore::RestoreRequestBuilder::settings
pub type RestoreRequestBuilder<'a, A> = RequestBuilder<'a, A, RestoreRequest>;

impl<'a, A> RequestBuilder<'a, A, RestoreRequest> {
    /// Create a builder with an empty request, targeted at `admin`.
    pub fn new(admin: &'a mut A) -> Self {
        RequestBuilder::from_request(admin, RestoreRequest::new())
    }

    /// Create a builder pre-seeded with the `repository` and `snapshot` to restore from.
    pub fn with_snapshot(
        admin: &'a mut A,
        repository: impl Into<String>,
        snapshot: impl Into<String>,
    ) -> Self {
        RequestBuilder::from_request(admin, RestoreRequest::with_snapshot(repository, snapshot))
    }

    /// Set the name of the repository to restore from.
    pub fn repository(mut self, repository: impl Into<String>) -> Self {
        self.request_mut().set_repository(repository);
        self
    }

    /// Set the name of the snapshot to restore.
    pub fn snapshot(mut self, snapshot: impl Into<String>) -> Self {
        self.request_mut().set_snapshot(snapshot);
        self
    }

    /// Set the list of index patterns to restore, replacing the previous list.
    ///
    /// See [`RestoreRequest::set_indices`] for the pattern syntax.
    ///
    /// [`RestoreRequest::set_indices`]: crate::restore::RestoreRequest::set_indices
    pub fn indices<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request_mut().set_indices(patterns);
        self
    }

    /// Set the policy for index patterns which don't resolve cleanly.
    pub fn indices_options(mut self, options: IndicesOptions) -> Self {
        self.request_mut().set_indices_options(options);
        self
    }

    /// Set the regular expression applied to the names of the selected indices.
    pub fn rename_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.request_mut().set_rename_pattern(pattern);
        self
    }

    /// Set the replacement text for the rename pattern.
    pub fn rename_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.request_mut().set_rename_replacement(replacement);
        self
    }

    /// Set the repository-specific settings for the restore, replacing any previous settings.
    ///
    /// # Errors
    /// - `Error::ParseSettings`: The source is serialized text which could not be parsed.
    pub fn settings(mut self, source: impl SettingsSource) -> crate::Result<Self> {
        self.request_mut().set_settings(source)?;
        Ok(self)
    }

    /// Set whether the caller wants to wait for the restore to complete.
    pub fn wait_for_completion(mut self, wait: bool) -> Self {
        self.request_mut().set_wait_for_completion(wait);
        self
    }

    /// Set whether cluster-wide state stored in the snapshot should be restored as well.
    pub fn restore_global_state(mut self, restore: bool) -> Self {
        self.request_mut().set_restore_global_state(restore);
        self
    }
}
