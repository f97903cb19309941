pub use crate::error::{DeckResult, Error};
pub use crate::types::{GroupInfo, GroupRef, UserCtx};

pub use tracing::{debug, error, info, warn};

// vim: ts=4
