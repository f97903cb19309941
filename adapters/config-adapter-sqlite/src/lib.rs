//! SQLite-backed config adapter for Deck settings.
//!
//! Stores per-user preferences and app-wide values in a single database file.

#![forbid(unsafe_code)]

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::path::Path;

use deck_types::{config_adapter::ConfigAdapter, prelude::*};

mod app_value;
mod preference;
mod schema;

fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

#[derive(Debug)]
pub struct ConfigAdapterSqlite {
	db: SqlitePool,
}

impl ConfigAdapterSqlite {
	/// Open (or create) the database at `path` and make sure the schema exists
	pub async fn new(path: impl AsRef<Path>) -> DeckResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(inspect)
			.or(Err(Error::DbError))?;

		schema::init_db(&db).await.inspect_err(inspect).or(Err(Error::DbError))?;

		info!("Config database opened: {}", path.as_ref().display());
		Ok(Self { db })
	}
}

#[async_trait]
impl ConfigAdapter for ConfigAdapterSqlite {
	// User values
	//*************
	async fn read_user_value(
		&self,
		user_id: &str,
		app_id: &str,
		key: &str,
	) -> DeckResult<Option<Box<str>>> {
		preference::read(&self.db, user_id, app_id, key).await
	}

	async fn write_user_value(
		&self,
		user_id: &str,
		app_id: &str,
		key: &str,
		value: &str,
	) -> DeckResult<()> {
		preference::write(&self.db, user_id, app_id, key, value).await
	}

	async fn delete_user_value(&self, user_id: &str, app_id: &str, key: &str) -> DeckResult<()> {
		preference::delete(&self.db, user_id, app_id, key).await
	}

	// App values
	//************
	async fn read_app_value(&self, app_id: &str, key: &str) -> DeckResult<Option<Box<str>>> {
		app_value::read(&self.db, app_id, key).await
	}

	async fn write_app_value(&self, app_id: &str, key: &str, value: &str) -> DeckResult<()> {
		app_value::write(&self.db, app_id, key, value).await
	}
}

// vim: ts=4
