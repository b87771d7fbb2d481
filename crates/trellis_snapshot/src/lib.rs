// SPDX-License-Identifier: MIT OR Apache-2.0
//! Snapshot interchange for Trellis.
//!
//! This crate flattens a node tree into JSON records and back:
//! - One record per node, with flat input and output socket lists
//! - Links stored by node name and socket identifier on both ends
//! - Type-dependent extras for math, vector-math and fillet nodes
//!
//! ## Architecture
//!
//! The document is a plain array of [`NodeRecord`]s. Export walks the
//! tree in insertion order and never mutates it; import rebuilds a
//! tree from the records, trusting the input-side link lists.

pub mod export;
pub mod import;
pub mod record;

pub use export::{snapshot_tree, write_snapshot, write_snapshot_pretty, SnapshotError};
pub use import::{read_snapshot, resolve};
pub use record::{LinkRecord, NodeRecord, SocketRecord, ValueRecord};
