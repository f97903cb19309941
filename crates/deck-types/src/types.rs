//! Common types used throughout Deck settings.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::perm_adapter::PermissionAdapter;
use crate::prelude::*;

// UserCtx //
//*********//
/// Acting user of a settings request, together with the oracle that decides
/// whether that user is an administrator.
#[derive(Clone, Debug)]
pub struct UserCtx {
	pub user_id: Box<str>,
	perm: Arc<dyn PermissionAdapter>,
}

impl UserCtx {
	pub fn new(user_id: impl Into<Box<str>>, perm: Arc<dyn PermissionAdapter>) -> Self {
		Self { user_id: user_id.into(), perm }
	}

	pub async fn is_admin(&self) -> DeckResult<bool> {
		self.perm.is_admin(&self.user_id).await
	}

	/// Fails with `PermissionDenied` unless the user is an administrator
	pub async fn require_admin(&self) -> DeckResult<()> {
		if self.is_admin().await? {
			Ok(())
		} else {
			warn!(user = %self.user_id, "Admin permission denied");
			Err(Error::PermissionDenied)
		}
	}
}

// Groups //
//********//
/// Group record as submitted by a client. Only `id` is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRef {
	pub id: Box<str>,
}

impl GroupRef {
	pub fn new(id: impl Into<Box<str>>) -> Self {
		Self { id: id.into() }
	}
}

/// Group resolved through the group directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupInfo {
	pub id: Box<str>,
	pub displayname: Box<str>,
}


// vim: ts=4
