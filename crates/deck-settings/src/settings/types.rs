//! Settings value types and options

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::{fmt, str::FromStr};

use crate::prelude::*;

pub const DEFAULT_APP_ID: &str = "deck";
pub const APP_ID_ENV: &str = "DECK_APP_ID";

/// Due date notification policy of a board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyDue {
	/// No due date notifications
	Off,
	/// Only for cards assigned to the user
	#[default]
	Assigned,
	/// For every card on the board
	All,
}

impl NotifyDue {
	pub fn as_str(&self) -> &'static str {
		match self {
			NotifyDue::Off => "off",
			NotifyDue::Assigned => "assigned",
			NotifyDue::All => "all",
		}
	}
}

impl fmt::Display for NotifyDue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for NotifyDue {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"off" => Ok(NotifyDue::Off),
			"assigned" => Ok(NotifyDue::Assigned),
			"all" => Ok(NotifyDue::All),
			_ => Err(Error::InvalidValue(
				"Board notification option must be one of: off, assigned, all".into(),
			)),
		}
	}
}

/// Result of a settings read or write
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
	Bool(bool),
	/// Resolved group limit
	Groups(Vec<GroupInfo>),
	/// Group ids as persisted by a group limit write
	GroupIds(Vec<Box<str>>),
	/// Value echoed back from a write
	Json(serde_json::Value),
}

impl SettingValue {
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			SettingValue::Bool(b) => Some(*b),
			_ => None,
		}
	}
}

/// Everything the acting user may read in one go
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllSettings {
	pub calendar: bool,
	/// Only present for administrators
	#[serde(rename = "groupLimit")]
	pub group_limit: Option<Vec<GroupInfo>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsOpts {
	/// Namespace of every stored value
	pub app_id: Box<str>,
}

impl Default for SettingsOpts {
	fn default() -> Self {
		Self { app_id: DEFAULT_APP_ID.into() }
	}
}

impl SettingsOpts {
	/// Defaults, overridden by `DECK_APP_ID` if set and non-empty
	pub fn from_env() -> Self {
		match std::env::var(APP_ID_ENV) {
			Ok(app_id) if !app_id.trim().is_empty() => Self { app_id: app_id.trim().into() },
			_ => Self::default(),
		}
	}
}


// vim: ts=4
