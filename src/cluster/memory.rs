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

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::restore::{rename_indices, select_indices, RestoreInfo, RestoreRequest, RestoreResponse};
use crate::settings::Settings;

use super::admin::{ClusterAdmin, Listener};

/// The contents of a snapshot held by a [`MemoryCluster`].
///
/// A snapshot records the indices it contains with their shard counts, and optionally the
/// cluster-wide persistent settings that were captured with it.
///
/// # Examples
/// ```
/// use snap_restore::cluster::Snapshot;
/// use snap_restore::settings::Settings;
///
/// let snapshot = Snapshot::new()
///     .index("logs-2020-01", 2)
///     .index("logs-2020-02", 2)
///     .global_state(Settings::new());
/// ```
///
/// [`MemoryCluster`]: crate::cluster::MemoryCluster
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    indices: BTreeMap<String, u32>,
    global_state: Option<Settings>,
}

impl Snapshot {
    /// Create a new empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an index with the given number of `shards` to the snapshot.
    pub fn index(mut self, name: impl Into<String>, shards: u32) -> Self {
        self.indices.insert(name.into(), shards);
        self
    }

    /// Include cluster-wide persistent settings in the snapshot.
    pub fn global_state(mut self, settings: Settings) -> Self {
        self.global_state = Some(settings);
        self
    }
}

/// A `ClusterAdmin` which executes restores against in-memory state.
///
/// Unlike a real cluster, a `MemoryCluster` holds its repositories, snapshots, and indices in
/// memory and executes every restore synchronously on the calling thread, invoking the listener
/// before [`restore`] returns. This admin service is useful for testing.
///
/// Restoring runs the full deferred-validation pipeline: the request is [`validate`]d, the
/// repository and snapshot are looked up, the index patterns are resolved with
/// [`select_indices`], renames are applied with [`rename_indices`], and the resulting names are
/// checked against the live indices. On success the restored indices become live, the snapshot's
/// global state replaces the cluster's persistent settings if the request asked for it, and the
/// response carries a [`RestoreInfo`] when the request waits for completion.
///
/// [`restore`]: crate::cluster::ClusterAdmin::restore
/// [`validate`]: crate::restore::RestoreRequest::validate
/// [`select_indices`]: crate::restore::select_indices
/// [`rename_indices`]: crate::restore::rename_indices
/// [`RestoreInfo`]: crate::restore::RestoreInfo
#[derive(Debug, Default)]
pub struct MemoryCluster {
    repositories: HashMap<String, HashMap<String, Snapshot>>,
    indices: BTreeSet<String>,
    persistent_settings: Settings,
}

impl MemoryCluster {
    /// Create a new cluster with no repositories or indices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an empty repository named `name`.
    pub fn add_repository(&mut self, name: impl Into<String>) {
        self.repositories.entry(name.into()).or_default();
    }

    /// Add the snapshot `name` to `repository`, registering the repository if necessary.
    pub fn add_snapshot(
        &mut self,
        repository: impl Into<String>,
        name: impl Into<String>,
        snapshot: Snapshot,
    ) {
        self.repositories
            .entry(repository.into())
            .or_default()
            .insert(name.into(), snapshot);
    }

    /// Create a live index named `name`.
    pub fn create_index(&mut self, name: impl Into<String>) {
        self.indices.insert(name.into());
    }

    /// The names of the live indices in the cluster.
    pub fn indices(&self) -> &BTreeSet<String> {
        &self.indices
    }

    /// The cluster-wide persistent settings.
    pub fn persistent_settings(&self) -> &Settings {
        &self.persistent_settings
    }

    /// Run the restore pipeline and mutate the cluster state.
    fn restore_snapshot(&mut self, request: &RestoreRequest) -> crate::Result<RestoreResponse> {
        request.validate()?;

        let snapshots = self
            .repositories
            .get(request.repository())
            .ok_or_else(|| crate::Error::RepositoryNotFound(request.repository().to_owned()))?;
        let snapshot = snapshots
            .get(request.snapshot())
            .ok_or_else(|| crate::Error::SnapshotNotFound(request.snapshot().to_owned()))?;

        let available: Vec<String> = snapshot.indices.keys().cloned().collect();
        let selected = select_indices(&available, request.indices(), request.indices_options())?;
        let renamed = rename_indices(
            &selected,
            request.rename_pattern(),
            request.rename_replacement(),
        )?;

        let total_shards: u32 = selected
            .iter()
            .filter_map(|name| snapshot.indices.get(name))
            .sum();
        let global_state = snapshot.global_state.clone();

        let targets: Vec<String> = renamed.into_iter().map(|(_, target)| target).collect();
        for target in &targets {
            if self.indices.contains(target) {
                return Err(crate::Error::IndexAlreadyExists(target.clone()));
            }
        }

        self.indices.extend(targets.iter().cloned());
        if request.restore_global_state() {
            if let Some(settings) = global_state {
                self.persistent_settings = settings;
            }
        }

        if request.wait_for_completion() {
            Ok(RestoreResponse::completed(RestoreInfo::new(
                request.snapshot(),
                targets,
                total_shards,
                total_shards,
            )))
        } else {
            Ok(RestoreResponse::accepted())
        }
    }
}

impl ClusterAdmin for MemoryCluster {
    fn restore(&mut self, request: RestoreRequest, listener: Listener<RestoreResponse>) {
        listener(self.restore_snapshot(&request));
    }
}
