//! Adapter that stores configuration values owned by the host platform.
//!
//! Values are plain strings at this boundary. Two keyspaces exist:
//! - **user values**: keyed by `(user_id, app_id, key)`
//! - **app values**: keyed by `(app_id, key)`, shared by every user
//!
//! Reads return `None` for unset keys; callers apply their own defaults.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

#[async_trait]
pub trait ConfigAdapter: Debug + Send + Sync {
	// User values
	//*************
	async fn read_user_value(
		&self,
		user_id: &str,
		app_id: &str,
		key: &str,
	) -> DeckResult<Option<Box<str>>>;
	async fn write_user_value(
		&self,
		user_id: &str,
		app_id: &str,
		key: &str,
		value: &str,
	) -> DeckResult<()>;
	async fn delete_user_value(&self, user_id: &str, app_id: &str, key: &str) -> DeckResult<()>;

	// App values
	//************
	async fn read_app_value(&self, app_id: &str, key: &str) -> DeckResult<Option<Box<str>>>;
	async fn write_app_value(&self, app_id: &str, key: &str, value: &str) -> DeckResult<()>;
}

// vim: ts=4
