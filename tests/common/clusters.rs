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

use std::sync::{Arc, Mutex};

use rstest::fixture;

use snap_restore::cluster::{ClusterAdmin, Listener, MemoryCluster, Snapshot};
use snap_restore::restore::{RestoreRequest, RestoreRequestBuilder, RestoreResponse};
use snap_restore::settings::Settings;

/// The cluster-wide settings captured in the test snapshot's global state.
pub fn snapshot_global_state() -> Settings {
    let mut builder = Settings::builder();
    builder.put("cluster.routing.allocation.enable", "all");
    builder.build()
}

/// A cluster with one repository `repo1` holding one snapshot `snap1`.
///
/// The snapshot contains the indices `logs-2020-01` through `logs-2020-03` with two shards each,
/// `metrics-2020` with one shard, and global state.
#[fixture]
pub fn cluster() -> MemoryCluster {
    let mut cluster = MemoryCluster::new();
    cluster.add_snapshot(
        "repo1",
        "snap1",
        Snapshot::new()
            .index("logs-2020-01", 2)
            .index("logs-2020-02", 2)
            .index("logs-2020-03", 2)
            .index("metrics-2020", 1)
            .global_state(snapshot_global_state()),
    );
    cluster
}

/// A `ClusterAdmin` which records the requests handed to it and accepts them all.
#[derive(Debug, Default)]
pub struct RecordingAdmin {
    pub requests: Vec<RestoreRequest>,
}

impl ClusterAdmin for RecordingAdmin {
    fn restore(&mut self, request: RestoreRequest, listener: Listener<RestoreResponse>) {
        self.requests.push(request);
        listener(Ok(RestoreResponse::accepted()));
    }
}

/// A `ClusterAdmin` which fails every request with an opaque service error.
#[derive(Debug)]
pub struct FailingAdmin;

impl ClusterAdmin for FailingAdmin {
    fn restore(&mut self, _request: RestoreRequest, listener: Listener<RestoreResponse>) {
        let error = snap_restore::cluster::Error::msg("connection refused")
            .context("could not reach the master node");
        listener(Err(error.into()));
    }
}

/// Submit the builder's request and return the outcome delivered to the listener.
pub fn execute_restore<A: ClusterAdmin>(
    builder: RestoreRequestBuilder<'_, A>,
) -> snap_restore::Result<RestoreResponse> {
    let slot = Arc::new(Mutex::new(None));
    let captured = Arc::clone(&slot);
    builder.execute(move |outcome| {
        *captured.lock().unwrap() = Some(outcome);
    });
    let outcome = slot.lock().unwrap().take();
    outcome.expect("the listener was not invoked")
}
