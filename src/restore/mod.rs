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

//! Restore requests and their execution semantics.
//!
//! A restore materializes indices from a snapshot back into a cluster. This module provides the
//! [`RestoreRequest`] describing such a restore and the [`RestoreRequestBuilder`] for assembling
//! one fluently. Requests accumulate without validation: completeness and consistency are only
//! checked when a request is handed to a [`ClusterAdmin`], so a half-built request is never an
//! error and the service rejecting it reports exactly what is wrong.
//!
//! The parts of execution that are pure request semantics live here too, for admin services to
//! share: [`select_indices`] resolves a request's ordered index patterns against the contents of
//! a snapshot under its [`IndicesOptions`] policy, and [`rename_indices`] applies the request's
//! rename pattern to the selected names and rejects collisions. Successful execution is reported
//! as a [`RestoreResponse`], which carries a [`RestoreInfo`] when the request asked to wait for
//! completion.
//!
//! [`RestoreRequest`]: crate::restore::RestoreRequest
//! [`RestoreRequestBuilder`]: crate::restore::RestoreRequestBuilder
//! [`ClusterAdmin`]: crate::cluster::ClusterAdmin
//! [`select_indices`]: crate::restore::select_indices
//! [`IndicesOptions`]: crate::restore::IndicesOptions
//! [`rename_indices`]: crate::restore::rename_indices
//! [`RestoreResponse`]: crate::restore::RestoreResponse
//! [`RestoreInfo`]: crate::restore::RestoreInfo

pub use self::builder::RestoreRequestBuilder;
pub use self::options::IndicesOptions;
pub use self::rename::rename_indices;
pub use self::request::RestoreRequest;
pub use self::response::{RestoreInfo, RestoreResponse};
pub use self::select::select_indices;

mod builder;
mod options;
mod rename;
mod request;
mod response;
mod select;
