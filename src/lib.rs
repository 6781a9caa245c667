//! paypoint-rs: workspace facade over [`paypoint_core`].
//!
//! Hosts the demos under `demos/` and re-exports the core crate so they can
//! `use paypoint_rs::prelude::*;`.

pub use paypoint_core::*;
