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

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// The policy for resolving index patterns which don't match cleanly.
    ///
    /// These flags decide what happens when an entry in the index pattern list of a
    /// [`RestoreRequest`] doesn't resolve against the contents of the snapshot. They are carried
    /// by the request unmodified and only consulted when the request is executed.
    ///
    /// [`RestoreRequest`]: crate::restore::RestoreRequest
    #[derive(Serialize, Deserialize)]
    pub struct IndicesOptions: u32 {
        /// Skip a concrete index name which isn't in the snapshot instead of failing.
        const IGNORE_UNAVAILABLE = 1 << 0;

        /// Treat a wildcard pattern which matches nothing as empty instead of failing.
        const ALLOW_NO_INDICES = 1 << 1;
    }
}

impl IndicesOptions {
    /// A policy where every pattern entry must resolve to at least one index.
    pub fn strict() -> Self {
        Self::empty()
    }

    /// A policy where missing names are skipped and empty wildcards are fine.
    pub fn lenient() -> Self {
        Self::IGNORE_UNAVAILABLE | Self::ALLOW_NO_INDICES
    }
}

impl Default for IndicesOptions {
    fn default() -> Self {
        Self::lenient()
    }
}
