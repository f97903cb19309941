//! Common test utilities and helpers
//!
//! In-memory collaborators and a router fixture shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use deck_settings::SettingsRouter;
use deck_types::config_adapter::ConfigAdapter;
use deck_types::error::{DeckResult, Error};
use deck_types::group_adapter::GroupAdapter;
use deck_types::perm_adapter::PermissionAdapter;
use deck_types::types::{GroupInfo, UserCtx};

pub const ADMIN: &str = "admin";
pub const USER: &str = "alice";

// Config store //
//**************//
#[derive(Debug, Default)]
pub struct MemConfig {
	user_values: RwLock<HashMap<(String, String, String), String>>,
	app_values: RwLock<HashMap<(String, String), String>>,
	fail: RwLock<bool>,
}

impl MemConfig {
	pub fn user_value(&self, user_id: &str, app_id: &str, key: &str) -> Option<String> {
		self.user_values.read().get(&(user_id.into(), app_id.into(), key.into())).cloned()
	}

	pub fn app_value(&self, app_id: &str, key: &str) -> Option<String> {
		self.app_values.read().get(&(app_id.into(), key.into())).cloned()
	}

	pub fn put_app_value(&self, app_id: &str, key: &str, value: &str) {
		self.app_values.write().insert((app_id.into(), key.into()), value.into());
	}

	pub fn put_user_value(&self, user_id: &str, app_id: &str, key: &str, value: &str) {
		self.user_values.write().insert((user_id.into(), app_id.into(), key.into()), value.into());
	}

	/// Make every subsequent call fail with `DbError`
	pub fn fail(&self) {
		*self.fail.write() = true;
	}

	fn check(&self) -> DeckResult<()> {
		if *self.fail.read() { Err(Error::DbError) } else { Ok(()) }
	}
}

#[async_trait]
impl ConfigAdapter for MemConfig {
	async fn read_user_value(
		&self,
		user_id: &str,
		app_id: &str,
		key: &str,
	) -> DeckResult<Option<Box<str>>> {
		self.check()?;
		Ok(self.user_value(user_id, app_id, key).map(Into::into))
	}

	async fn write_user_value(
		&self,
		user_id: &str,
		app_id: &str,
		key: &str,
		value: &str,
	) -> DeckResult<()> {
		self.check()?;
		self.put_user_value(user_id, app_id, key, value);
		Ok(())
	}

	async fn delete_user_value(&self, user_id: &str, app_id: &str, key: &str) -> DeckResult<()> {
		self.check()?;
		self.user_values.write().remove(&(user_id.into(), app_id.into(), key.into()));
		Ok(())
	}

	async fn read_app_value(&self, app_id: &str, key: &str) -> DeckResult<Option<Box<str>>> {
		self.check()?;
		Ok(self.app_value(app_id, key).map(Into::into))
	}

	async fn write_app_value(&self, app_id: &str, key: &str, value: &str) -> DeckResult<()> {
		self.check()?;
		self.put_app_value(app_id, key, value);
		Ok(())
	}
}

// Group directory //
//*****************//
#[derive(Debug, Default)]
pub struct MemGroups {
	groups: RwLock<HashMap<String, String>>,
}

impl MemGroups {
	pub fn with_groups(groups: &[(&str, &str)]) -> Self {
		let this = Self::default();
		for (id, name) in groups {
			this.add(id, name);
		}
		this
	}

	pub fn add(&self, id: &str, displayname: &str) {
		self.groups.write().insert(id.into(), displayname.into());
	}

	pub fn remove(&self, id: &str) {
		self.groups.write().remove(id);
	}
}

#[async_trait]
impl GroupAdapter for MemGroups {
	async fn read_group(&self, group_id: &str) -> DeckResult<Option<GroupInfo>> {
		Ok(self
			.groups
			.read()
			.get(group_id)
			.map(|name| GroupInfo { id: group_id.into(), displayname: name.as_str().into() }))
	}
}

// Permission oracle //
//*******************//
#[derive(Debug, Default)]
pub struct StaticPerm {
	admins: HashSet<String>,
	broken: bool,
}

impl StaticPerm {
	pub fn admins(admins: &[&str]) -> Self {
		Self { admins: admins.iter().map(|a| (*a).to_string()).collect(), broken: false }
	}

	/// Oracle whose every check fails
	pub fn broken() -> Self {
		Self { admins: HashSet::new(), broken: true }
	}
}

#[async_trait]
impl PermissionAdapter for StaticPerm {
	async fn is_admin(&self, user_id: &str) -> DeckResult<bool> {
		if self.broken {
			return Err(Error::Internal("permission backend unavailable".into()));
		}
		Ok(self.admins.contains(user_id))
	}
}

// Fixture //
//*********//
pub struct Fixture {
	pub router: SettingsRouter,
	pub config: Arc<MemConfig>,
	pub groups: Arc<MemGroups>,
	pub perm: Arc<StaticPerm>,
}

impl Fixture {
	pub fn new() -> Self {
		Self::with_groups(&[])
	}

	pub fn with_groups(groups: &[(&str, &str)]) -> Self {
		let _ = tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_test_writer()
			.try_init();

		let config = Arc::new(MemConfig::default());
		let groups = Arc::new(MemGroups::with_groups(groups));
		let perm = Arc::new(StaticPerm::admins(&[ADMIN]));
		let router = SettingsRouter::builder()
			.config_adapter(config.clone())
			.group_adapter(groups.clone())
			.build()
			.expect("Failed to build settings router");

		Self { router, config, groups, perm }
	}

	pub fn ctx(&self, user_id: &str) -> UserCtx {
		UserCtx::new(user_id, self.perm.clone())
	}

	pub fn admin(&self) -> UserCtx {
		self.ctx(ADMIN)
	}

	pub fn user(&self) -> UserCtx {
		self.ctx(USER)
	}
}

// vim: ts=4
