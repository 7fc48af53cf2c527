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

/// Details about a completed restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreInfo {
    snapshot: String,
    indices: Vec<String>,
    total_shards: u32,
    successful_shards: u32,
}

impl RestoreInfo {
    /// Create a new `RestoreInfo` for the restore of `snapshot`.
    pub fn new(
        snapshot: impl Into<String>,
        indices: Vec<String>,
        total_shards: u32,
        successful_shards: u32,
    ) -> Self {
        RestoreInfo {
            snapshot: snapshot.into(),
            indices,
            total_shards,
            successful_shards,
        }
    }

    /// The name of the snapshot that was restored.
    pub fn snapshot(&self) -> &str {
        &self.snapshot
    }

    /// The names the restored indices were created under, after renaming.
    pub fn indices(&self) -> &[String] {
        &self.indices
    }

    /// The number of shards that were restored.
    pub fn total_shards(&self) -> u32 {
        self.total_shards
    }

    /// The number of shards that restored successfully.
    pub fn successful_shards(&self) -> u32 {
        self.successful_shards
    }

    /// The number of shards that failed to restore.
    pub fn failed_shards(&self) -> u32 {
        self.total_shards - self.successful_shards
    }
}

/// The outcome delivered to a listener when a restore request succeeds.
///
/// Whether a response carries a [`RestoreInfo`] depends on the request: if the caller asked to
/// wait for completion, [`info`] describes the finished restore; otherwise the response only
/// means the restore was accepted and is running in the background.
///
/// [`RestoreInfo`]: crate::restore::RestoreInfo
/// [`info`]: crate::restore::RestoreResponse::info
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreResponse {
    info: Option<RestoreInfo>,
}

impl RestoreResponse {
    /// Create a response for a restore which was accepted and continues in the background.
    pub fn accepted() -> Self {
        RestoreResponse { info: None }
    }

    /// Create a response for a restore which ran to completion.
    pub fn completed(info: RestoreInfo) -> Self {
        RestoreResponse { info: Some(info) }
    }

    /// Details about the completed restore, or `None` if the caller didn't wait for completion.
    pub fn info(&self) -> Option<&RestoreInfo> {
        self.info.as_ref()
    }
}
