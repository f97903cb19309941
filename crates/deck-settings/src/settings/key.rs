//! Settings key parsing

use crate::prelude::*;

pub const SCOPE_CALENDAR: &str = "calendar";
pub const SCOPE_GROUP_LIMIT: &str = "groupLimit";
pub const SCOPE_BOARD: &str = "board";

/// Board subkey holding the due date notification policy
pub const BOARD_NOTIFY_DUE: &str = "notify-due";
/// Board subkey overriding the calendar toggle
pub const BOARD_CALENDAR: &str = "calendar";

/// `<board_id>:<subkey>` part of a board key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardKey<'a> {
	pub board_id: &'a str,
	pub subkey: &'a str,
}

impl<'a> BoardKey<'a> {
	/// Both parts non-empty, no further `:` in the subkey
	fn parse(remainder: &'a str) -> Option<Self> {
		match remainder.split_once(':') {
			Some((board_id, subkey))
				if !board_id.is_empty() && !subkey.is_empty() && !subkey.contains(':') =>
			{
				Some(BoardKey { board_id, subkey })
			}
			_ => None,
		}
	}
}

/// A parsed settings key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey<'a> {
	/// `calendar` or `calendar:<anything>`
	Calendar,
	/// `groupLimit` or `groupLimit:<anything>`
	GroupLimit,
	/// `board:<remainder>`. `None` if the remainder is not `<board_id>:<subkey>`.
	Board(Option<BoardKey<'a>>),
	/// Any other scope. Reads and writes are no-ops.
	Unknown(&'a str),
}

impl<'a> SettingKey<'a> {
	/// Parse a `scope:remainder` key.
	///
	/// The bare scopes `calendar` and `groupLimit` are accepted without a
	/// separator. Any other key without one is malformed.
	pub fn parse(key: &'a str) -> DeckResult<Self> {
		let Some((scope, remainder)) = key.split_once(':') else {
			return match key {
				SCOPE_CALENDAR => Ok(SettingKey::Calendar),
				SCOPE_GROUP_LIMIT => Ok(SettingKey::GroupLimit),
				_ => Err(Error::MalformedKey(key.into())),
			};
		};

		match scope {
			SCOPE_CALENDAR => Ok(SettingKey::Calendar),
			SCOPE_GROUP_LIMIT => Ok(SettingKey::GroupLimit),
			SCOPE_BOARD => Ok(SettingKey::Board(BoardKey::parse(remainder))),
			_ => Ok(SettingKey::Unknown(scope)),
		}
	}

	/// Board part of a key that must be `board:<board_id>:<subkey>`
	pub fn require_board(key: &'a str) -> DeckResult<BoardKey<'a>> {
		match SettingKey::parse(key)? {
			SettingKey::Board(Some(board)) => Ok(board),
			_ => Err(Error::MalformedKey(key.into())),
		}
	}
}

/// Storage key of a per-board setting
pub fn board_key(board_id: &str, subkey: &str) -> String {
	format!("{}:{}:{}", SCOPE_BOARD, board_id, subkey)
}


// vim: ts=4
