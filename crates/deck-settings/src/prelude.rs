pub use deck_types::error::{DeckResult, Error};
pub use deck_types::types::{GroupInfo, GroupRef, UserCtx};

pub use tracing::{debug, error, info, warn};

// vim: ts=4
