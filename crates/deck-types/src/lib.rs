//! Shared types, adapter traits, and core utilities for Deck board settings.
//!
//! This crate contains the foundational types that are shared between the
//! settings router and all adapter implementations. Keeping them separate lets
//! storage adapters compile without pulling in the router.

#![forbid(unsafe_code)]

pub mod config_adapter;
pub mod error;
pub mod group_adapter;
pub mod perm_adapter;
pub mod prelude;
pub mod types;

// vim: ts=4
