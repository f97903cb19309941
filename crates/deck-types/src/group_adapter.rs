//! Adapter that resolves group ids through the host's group directory.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

#[async_trait]
pub trait GroupAdapter: Debug + Send + Sync {
	/// Resolves a group id. Returns `None` if the group does not exist (anymore).
	async fn read_group(&self, group_id: &str) -> DeckResult<Option<GroupInfo>>;
}

// vim: ts=4
