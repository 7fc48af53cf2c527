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

//! `snap-restore` is a library for assembling, normalizing, and submitting snapshot restore
//! requests.
//!
//! A restore request names a snapshot in a repository and describes which of its indices to bring
//! back into the cluster, how to rename them on the way in, which settings to override, and
//! whether the caller wants to wait for completion. This crate provides:
//! - [`RestoreRequest`] and its fluent [`RestoreRequestBuilder`], which accumulate those fields
//! without validating them. Validation is deliberately deferred to the executing service, so an
//! incomplete request is rejected where it can be diagnosed, not where it was built.
//! - Canonical [`Settings`] with a single normalization path for the four forms callers hold
//! settings in: a settings collection, a [`SettingsBuilder`], serialized JSON, YAML, or
//! properties text with the format auto-detected, and a loosely typed map.
//! - The request-shaping semantics executing services share: ordered multi-pattern index
//! selection with [`select_indices`] and rename application with collision detection with
//! [`rename_indices`].
//! - The [`ClusterAdmin`] seam those services implement, and [`MemoryCluster`], an in-memory
//! implementation useful for testing.
//!
//! # Examples
//! ```
//! use snap_restore::cluster::{MemoryCluster, Snapshot};
//! use snap_restore::restore::RestoreRequestBuilder;
//!
//! fn main() -> snap_restore::Result<()> {
//!     // Build a cluster holding one snapshot of two log indices.
//!     let mut cluster = MemoryCluster::new();
//!     cluster.add_snapshot(
//!         "backups",
//!         "nightly",
//!         Snapshot::new().index("logs-2020-01", 2).index("logs-2020-02", 2),
//!     );
//!
//!     // Restore the logs under new names, overriding a setting while we're at it.
//!     RestoreRequestBuilder::with_snapshot(&mut cluster, "backups", "nightly")
//!         .indices(["logs-*"])
//!         .rename_pattern("logs-(.+)")
//!         .rename_replacement("restored-$1")
//!         .settings(r#"{"index": {"number_of_replicas": 0}}"#)?
//!         .wait_for_completion(true)
//!         .execute(|outcome| {
//!             let response = outcome.expect("restore failed");
//!             let info = response.info().expect("restore did not wait for completion");
//!             assert_eq!(info.indices(), ["restored-2020-01", "restored-2020-02"]);
//!         });
//!
//!     assert!(cluster.indices().contains("restored-2020-01"));
//!     Ok(())
//! }
//! ```
//!
//! [`RestoreRequest`]: crate::restore::RestoreRequest
//! [`RestoreRequestBuilder`]: crate::restore::RestoreRequestBuilder
//! [`Settings`]: crate::settings::Settings
//! [`SettingsBuilder`]: crate::settings::SettingsBuilder
//! [`select_indices`]: crate::restore::select_indices
//! [`rename_indices`]: crate::restore::rename_indices
//! [`ClusterAdmin`]: crate::cluster::ClusterAdmin
//! [`MemoryCluster`]: crate::cluster::MemoryCluster

pub use error::{Error, Result};

pub mod cluster;
mod error;
pub mod restore;
pub mod settings;
