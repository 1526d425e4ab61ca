//! Test helpers shared across Pillminder crates.

pub mod completion;
pub mod store;

pub use completion::{FailingCompletion, FixedCompletion, GatedCompletion, RecordingCompletion};
pub use store::FailingReminderStore;
