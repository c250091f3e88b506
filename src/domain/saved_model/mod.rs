//! Saved model domain

mod entity;
mod provider;

pub use entity::{active_version, SavedModel, SavedModelVersion};
pub use provider::SavedModelProvider;

#[cfg(test)]
pub use provider::MockSavedModelProvider;
