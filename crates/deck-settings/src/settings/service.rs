//! Settings router: dispatches settings keys to their handlers, enforces admin
//! access and value validation, and delegates storage to the config adapter.

use serde_json::Value;
use std::sync::Arc;

use deck_types::config_adapter::ConfigAdapter;
use deck_types::group_adapter::GroupAdapter;

use crate::prelude::*;

use super::codec;
use super::key::{
	BOARD_CALENDAR, BOARD_NOTIFY_DUE, BoardKey, SCOPE_CALENDAR, SCOPE_GROUP_LIMIT, SettingKey,
	board_key,
};
use super::types::{AllSettings, NotifyDue, SettingValue, SettingsOpts};

/// Builder for [`SettingsRouter`]
#[derive(Debug, Default)]
pub struct SettingsBuilder {
	opts: SettingsOpts,
	config_adapter: Option<Arc<dyn ConfigAdapter>>,
	group_adapter: Option<Arc<dyn GroupAdapter>>,
}

impl SettingsBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	// Opts
	pub fn opts(&mut self, opts: SettingsOpts) -> &mut Self {
		self.opts = opts;
		self
	}
	pub fn app_id(&mut self, app_id: impl Into<Box<str>>) -> &mut Self {
		self.opts.app_id = app_id.into();
		self
	}

	// Adapters
	pub fn config_adapter(&mut self, config_adapter: Arc<dyn ConfigAdapter>) -> &mut Self {
		self.config_adapter = Some(config_adapter);
		self
	}
	pub fn group_adapter(&mut self, group_adapter: Arc<dyn GroupAdapter>) -> &mut Self {
		self.group_adapter = Some(group_adapter);
		self
	}

	pub fn build(&self) -> DeckResult<SettingsRouter> {
		if self.opts.app_id.is_empty() {
			return Err(Error::ConfigError("app_id must not be empty".into()));
		}
		let config = self
			.config_adapter
			.clone()
			.ok_or_else(|| Error::ConfigError("config adapter is required".into()))?;
		let groups = self
			.group_adapter
			.clone()
			.ok_or_else(|| Error::ConfigError("group adapter is required".into()))?;

		debug!("Settings router built for app '{}'", self.opts.app_id);
		Ok(SettingsRouter { opts: self.opts.clone(), config, groups })
	}
}

/// Settings router - main interface for reading and writing Deck settings
#[derive(Debug)]
pub struct SettingsRouter {
	opts: SettingsOpts,
	config: Arc<dyn ConfigAdapter>,
	groups: Arc<dyn GroupAdapter>,
}

impl SettingsRouter {
	pub fn builder() -> SettingsBuilder {
		SettingsBuilder::new()
	}

	pub fn app_id(&self) -> &str {
		&self.opts.app_id
	}

	/// Calendar toggle, plus the group limit for administrators.
	///
	/// A failing admin check only omits the group limit.
	pub async fn get_all(&self, ctx: &UserCtx) -> DeckResult<AllSettings> {
		let calendar = self.calendar_enabled(ctx, None).await?;
		let is_admin = ctx.is_admin().await.unwrap_or_else(|err| {
			warn!(user = %ctx.user_id, "Admin check failed, omitting group limit: {}", err);
			false
		});
		let group_limit = if is_admin { Some(self.load_group_limit().await?) } else { None };

		Ok(AllSettings { calendar, group_limit })
	}

	/// Read a setting. Unknown scopes and any `board:` key read as `None`.
	pub async fn get(&self, ctx: &UserCtx, key: &str) -> DeckResult<Option<SettingValue>> {
		let parsed = SettingKey::parse(key)?;
		debug!(user = %ctx.user_id, "Get setting: {:?}", parsed);

		match parsed {
			SettingKey::GroupLimit => Ok(Some(SettingValue::Groups(self.group_limit(ctx).await?))),
			SettingKey::Calendar => {
				Ok(Some(SettingValue::Bool(self.calendar_enabled(ctx, None).await?)))
			}
			SettingKey::Board(_) | SettingKey::Unknown(_) => Ok(None),
		}
	}

	/// Write a setting and return the stored value. Unknown scopes are a no-op
	/// returning `None`.
	pub async fn set(
		&self,
		ctx: &UserCtx,
		key: &str,
		value: Value,
	) -> DeckResult<Option<SettingValue>> {
		match SettingKey::parse(key)? {
			SettingKey::GroupLimit => {
				ctx.require_admin().await?;
				let groups: Vec<GroupRef> = serde_json::from_value(value)?;
				let ids = self.store_group_limit(ctx, &groups).await?;
				Ok(Some(SettingValue::GroupIds(ids)))
			}
			SettingKey::Calendar => {
				self.set_calendar_enabled(ctx, codec::to_int_bool(&value)).await?;
				Ok(Some(SettingValue::Json(value)))
			}
			SettingKey::Board(None) => Err(Error::MalformedKey(key.into())),
			SettingKey::Board(Some(BoardKey { board_id, subkey })) => {
				if subkey == BOARD_NOTIFY_DUE {
					let policy = value.as_str().ok_or_else(|| {
						Error::InvalidValue(
							"Board notification option must be one of: off, assigned, all".into(),
						)
					});
					if let Err(err) = policy.and_then(str::parse::<NotifyDue>) {
						warn!(user = %ctx.user_id, board = board_id, "Rejected notify-due value {}", value);
						return Err(err);
					}
				}
				self.write_user(ctx, key, &codec::encode_verbatim(&value)).await?;
				info!(user = %ctx.user_id, board = board_id, "Board setting '{}' updated", subkey);
				Ok(Some(SettingValue::Json(value)))
			}
			SettingKey::Unknown(scope) => {
				debug!(user = %ctx.user_id, "Ignoring write to unknown scope '{}'", scope);
				Ok(None)
			}
		}
	}

	/// Calendar toggle of the user, or of one of their boards.
	///
	/// A board without its own override inherits the user's toggle.
	pub async fn calendar_enabled(&self, ctx: &UserCtx, board_id: Option<&str>) -> DeckResult<bool> {
		let default_state = self.read_user_bool(ctx, SCOPE_CALENDAR, true).await?;
		match board_id {
			None => Ok(default_state),
			Some(board_id) => {
				self.read_user_bool(ctx, &board_key(board_id, BOARD_CALENDAR), default_state).await
			}
		}
	}

	pub async fn set_calendar_enabled(&self, ctx: &UserCtx, enabled: bool) -> DeckResult<()> {
		self.write_user(ctx, SCOPE_CALENDAR, codec::encode_bool(enabled)).await?;
		info!(user = %ctx.user_id, "Calendar {}", if enabled { "enabled" } else { "disabled" });
		Ok(())
	}

	/// Due date notification policy of a board, `assigned` if unset
	pub async fn board_notify_due(&self, ctx: &UserCtx, board_id: &str) -> DeckResult<NotifyDue> {
		let key = board_key(board_id, BOARD_NOTIFY_DUE);
		let Some(stored) = self.read_user(ctx, &key).await? else {
			return Ok(NotifyDue::default());
		};
		Ok(stored.parse().unwrap_or_else(|_| {
			warn!(user = %ctx.user_id, "Invalid stored value for '{}': {}", key, stored);
			NotifyDue::default()
		}))
	}

	/// Remove a per-board override so reads fall back to defaults
	pub async fn reset_board_setting(
		&self,
		ctx: &UserCtx,
		board_id: &str,
		subkey: &str,
	) -> DeckResult<()> {
		let key = board_key(board_id, subkey);
		SettingKey::require_board(&key)?;
		self.config.delete_user_value(&ctx.user_id, &self.opts.app_id, &key).await?;
		info!(user = %ctx.user_id, board = board_id, "Board setting '{}' reset", subkey);
		Ok(())
	}

	/// Resolved group limit. Administrators only.
	pub async fn group_limit(&self, ctx: &UserCtx) -> DeckResult<Vec<GroupInfo>> {
		ctx.require_admin().await?;
		self.load_group_limit().await
	}

	/// Replace the group limit and return the persisted ids. Administrators only.
	pub async fn set_group_limit(
		&self,
		ctx: &UserCtx,
		groups: &[GroupRef],
	) -> DeckResult<Vec<Box<str>>> {
		ctx.require_admin().await?;
		self.store_group_limit(ctx, groups).await
	}

	// Internal helpers
	//******************
	async fn store_group_limit(
		&self,
		ctx: &UserCtx,
		groups: &[GroupRef],
	) -> DeckResult<Vec<Box<str>>> {
		if let Some(group) = groups.iter().find(|g| !codec::is_storable_group_id(&g.id)) {
			return Err(Error::InvalidValue(format!("Invalid group id: '{}'", group.id)));
		}
		let ids: Vec<Box<str>> = groups.iter().map(|g| g.id.clone()).collect();
		self.config
			.write_app_value(&self.opts.app_id, SCOPE_GROUP_LIMIT, &codec::encode_group_ids(&ids))
			.await?;

		info!(user = %ctx.user_id, "Group limit set to {} group(s)", ids.len());
		Ok(ids)
	}

	async fn load_group_limit(&self) -> DeckResult<Vec<GroupInfo>> {
		let stored =
			self.config.read_app_value(&self.opts.app_id, SCOPE_GROUP_LIMIT).await?.unwrap_or_default();

		let mut groups = Vec::new();
		for group_id in codec::decode_group_ids(&stored) {
			match self.groups.read_group(group_id).await? {
				Some(group) => groups.push(group),
				None => warn!("Group limit: dropping missing group '{}'", group_id),
			}
		}
		Ok(groups)
	}

	async fn read_user(&self, ctx: &UserCtx, key: &str) -> DeckResult<Option<Box<str>>> {
		self.config.read_user_value(&ctx.user_id, &self.opts.app_id, key).await
	}

	async fn read_user_bool(&self, ctx: &UserCtx, key: &str, default: bool) -> DeckResult<bool> {
		Ok(self.read_user(ctx, key).await?.map_or(default, |stored| codec::decode_bool(&stored)))
	}

	async fn write_user(&self, ctx: &UserCtx, key: &str, value: &str) -> DeckResult<()> {
		self.config.write_user_value(&ctx.user_id, &self.opts.app_id, key, value).await
	}
}

// vim: ts=4
