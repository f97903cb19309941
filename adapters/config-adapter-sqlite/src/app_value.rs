//! App-wide value storage

use sqlx::{Row, SqlitePool};

use crate::inspect;
use deck_types::prelude::*;

pub(crate) async fn read(db: &SqlitePool, app_id: &str, key: &str) -> DeckResult<Option<Box<str>>> {
	let row = sqlx::query("SELECT value FROM app_config WHERE app_id = ? AND key = ?")
		.bind(app_id)
		.bind(key)
		.fetch_optional(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(row.map(|r| r.get::<String, _>("value").into_boxed_str()))
}

pub(crate) async fn write(db: &SqlitePool, app_id: &str, key: &str, value: &str) -> DeckResult<()> {
	sqlx::query("INSERT OR REPLACE INTO app_config (app_id, key, value) VALUES (?, ?, ?)")
		.bind(app_id)
		.bind(key)
		.bind(value)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(())
}

// vim: ts=4
