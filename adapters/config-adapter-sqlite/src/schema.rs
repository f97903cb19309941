//! Database schema initialization

use sqlx::SqlitePool;

/// Initialize the database schema with all required tables
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Per-user values
	//*****************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS preferences (
		user_id text NOT NULL,
		app_id text NOT NULL,
		key text NOT NULL,
		value text NOT NULL,
		PRIMARY KEY(user_id, app_id, key)
	)",
	)
	.execute(&mut *tx)
	.await?;

	// App-wide values
	//*****************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS app_config (
		app_id text NOT NULL,
		key text NOT NULL,
		value text NOT NULL,
		PRIMARY KEY(app_id, key)
	)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
