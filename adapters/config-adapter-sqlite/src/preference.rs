//! Per-user preference storage

use sqlx::{Row, SqlitePool};

use crate::inspect;
use deck_types::prelude::*;

/// Read a single user value
pub(crate) async fn read(
	db: &SqlitePool,
	user_id: &str,
	app_id: &str,
	key: &str,
) -> DeckResult<Option<Box<str>>> {
	let row = sqlx::query("SELECT value FROM preferences WHERE user_id = ? AND app_id = ? AND key = ?")
		.bind(user_id)
		.bind(app_id)
		.bind(key)
		.fetch_optional(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(row.map(|r| r.get::<String, _>("value").into_boxed_str()))
}

/// Create or replace a user value
pub(crate) async fn write(
	db: &SqlitePool,
	user_id: &str,
	app_id: &str,
	key: &str,
	value: &str,
) -> DeckResult<()> {
	sqlx::query("INSERT OR REPLACE INTO preferences (user_id, app_id, key, value) VALUES (?, ?, ?, ?)")
		.bind(user_id)
		.bind(app_id)
		.bind(key)
		.bind(value)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(())
}

pub(crate) async fn delete(db: &SqlitePool, user_id: &str, app_id: &str, key: &str) -> DeckResult<()> {
	sqlx::query("DELETE FROM preferences WHERE user_id = ? AND app_id = ? AND key = ?")
		.bind(user_id)
		.bind(app_id)
		.bind(key)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(())
}

// vim: ts=4
