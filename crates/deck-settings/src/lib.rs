//! Deck settings router.
//!
//! Reads and writes scoped Deck settings through the host platform's
//! configuration store:
//!
//! - `calendar`: per-user calendar toggle, optionally overridden per board
//! - `groupLimit`: admin-managed, app-wide allow-list of groups
//! - `board:<id>:<subkey>`: per-user board settings, e.g. the due date
//!   notification policy (`notify-due`)
//!
//! Storage, group lookup, and admin checks are delegated to adapters from
//! `deck-types`.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod prelude;
pub mod settings;

pub use settings::{
	AllSettings, BoardKey, NotifyDue, SettingKey, SettingValue, SettingsBuilder, SettingsOpts,
	SettingsRouter,
};

// vim: ts=4
