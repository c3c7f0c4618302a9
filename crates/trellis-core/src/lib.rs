//! Trellis Core Types and Definitions
//!
//! This crate provides the foundational types for the Trellis class-model
//! toolchain. It includes:
//!
//! - **Model**: The entity model for UML-like class graphs ([`model`] module)
//! - **Snapshot**: Flat configuration snapshots and their deltas ([`snapshot`] module)
//!
//! All types here are plain immutable values with no I/O and no parsing
//! logic; building a [`model::ModelGraph`] from markup lives in the
//! `trellis-parser` crate, and everything that renders or diffs these values
//! lives in the `trellis` crate.

pub mod model;
pub mod snapshot;
