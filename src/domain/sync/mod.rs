//! Cross-referencing saved models against registry artifacts

mod failure;
mod identifier;
mod matcher;
mod report;

pub use failure::{SyncFailure, WANDB_SECRET_KEY};
pub use identifier::{ModelIdentifier, DEFAULT_IDENTIFIER_PREFIX};
pub use matcher::find_matches;
pub use report::{ModelCheck, SyncOutcome, SyncReport};
