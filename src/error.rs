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

use std::result;

use thiserror::Error as DeriveError;

use crate::cluster;

/// The error type for operations on restore requests.
#[derive(Debug, DeriveError)]
#[non_exhaustive]
pub enum Error {
    /// The request does not name a repository.
    #[error("The request does not name a repository.")]
    MissingRepository,

    /// The request does not name a snapshot.
    #[error("The request does not name a snapshot.")]
    MissingSnapshot,

    /// There is no repository with the given name.
    #[error("There is no repository named `{0}`.")]
    RepositoryNotFound(String),

    /// There is no snapshot with the given name in the repository.
    #[error("There is no snapshot named `{0}` in the repository.")]
    SnapshotNotFound(String),

    /// An index expression did not resolve to any index in the snapshot.
    #[error("The index expression `{0}` does not match any index in the snapshot.")]
    IndexNotFound(String),

    /// A restored index would collide with an index that already exists in the cluster.
    #[error("The index `{0}` already exists in the cluster.")]
    IndexAlreadyExists(String),

    /// Renaming the selected indices would give two of them the same name.
    #[error("The indices `{first}` and `{second}` would both be restored as `{target}`.")]
    RenameConflict {
        /// The first index which renames to `target`.
        first: String,

        /// The second index which renames to `target`.
        second: String,

        /// The name both indices would be restored under.
        target: String,
    },

    /// A rename pattern is not a valid regular expression.
    #[error("{0}")]
    InvalidPattern(#[from] regex::Error),

    /// A serialized settings source could not be parsed.
    #[error("The settings source could not be parsed: {0}")]
    ParseSettings(String),

    /// An error occurred in the cluster admin service.
    #[error("An error occurred in the cluster admin service: {0}")]
    Cluster(cluster::Error),
}

impl From<cluster::Error> for Error {
    fn from(error: cluster::Error) -> Self {
        Error::Cluster(error)
    }
}

/// The result type for operations on restore requests.
pub type Result<T> = result::Result<T, Error>;
