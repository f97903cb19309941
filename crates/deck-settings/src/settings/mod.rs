//! Settings subsystem: key routing, validation, and storage coercion
//!
//! # Architecture
//!
//! - **Key** (`key.rs`): parses `scope:remainder` keys into [`SettingKey`]
//! - **Codec** (`codec.rs`): the only place where values become strings and back
//! - **Types** (`types.rs`): value types, options
//! - **Service** (`service.rs`): [`SettingsRouter`] and its builder
//!
//! # Storage layout
//!
//! All values live under the configured app id:
//! - `calendar` (user value): default calendar toggle, `"1"`/`"0"`
//! - `board:<id>:<subkey>` (user value): per-board settings, stored verbatim
//! - `groupLimit` (app value): comma-joined group ids

pub mod codec;
pub mod key;
pub mod service;
pub mod types;

pub use key::{BoardKey, SettingKey};
pub use service::{SettingsBuilder, SettingsRouter};
pub use types::{AllSettings, NotifyDue, SettingValue, SettingsOpts};

// vim: ts=4
