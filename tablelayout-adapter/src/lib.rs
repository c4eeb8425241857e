//! Host-container driver utilities for the `tablelayout` crate.
//!
//! The `tablelayout` engine is UI-agnostic and focuses on the core math and
//! state. This crate provides the small, framework-neutral glue a host
//! container typically needs:
//!
//! - a [`Controller`] that polls the container's bounds provider, runs
//!   preparation passes, and serves viewport queries
//! - mapping of the container's structural change signals onto engine
//!   invalidation
//!
//! This crate is intentionally framework-agnostic (no concrete view or
//! cell types).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;


pub use controller::{BoundsProvider, Controller, HostBounds};
