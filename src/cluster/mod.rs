//! The cluster admin service seam.
//!
//! This module separates assembling a restore request from executing it. Executing a restore
//! means resolving index patterns against a real snapshot, applying renames, and moving cluster
//! state, none of which a request builder can or should do, so those responsibilities live behind
//! the [`ClusterAdmin`] trait and a builder only hands finished requests across it.
//!
//! The builder machinery itself is shared: [`RequestBuilder`] accumulates a request of any type
//! and submits it through the [`Submit`] capability, and each concrete operation contributes its
//! own setters and a `Submit` impl. Outcomes are delivered through a [`Listener`] callback;
//! failures inside an admin service are carried opaquely as [`Error`] values.
//!
//! [`MemoryCluster`] is a `ClusterAdmin` backed by in-memory state, useful for testing.
//!
//! [`ClusterAdmin`]: crate::cluster::ClusterAdmin
//! [`RequestBuilder`]: crate::cluster::RequestBuilder
//! [`Submit`]: crate::cluster::Submit
//! [`Listener`]: crate::cluster::Listener
//! [`Error`]: crate::cluster::Error
//! [`MemoryCluster`]: crate::cluster::MemoryCluster

pub use self::admin::{ClusterAdmin, Listener, RequestBuilder, Submit};
pub use self::error::{Error, Result};
pub use self::memory::{MemoryCluster, Snapshot};

mod admin;
mod error;
mod memory;
