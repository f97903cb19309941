//! Adapter that answers authorization questions about a user.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

#[async_trait]
pub trait PermissionAdapter: Debug + Send + Sync {
	/// Whether the user is an administrator of the host platform
	async fn is_admin(&self, user_id: &str) -> DeckResult<bool>;
}

// vim: ts=4
