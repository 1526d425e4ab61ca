//! Quota-limited access to a remote text completion service.
//!
//! `CompletionProxy` pairs a `CompletionProvider` with a per-caller
//! `UsageLedger`. Counters live in process memory only and reset on restart.

pub mod error;
pub mod ledger;
pub mod provider;
pub mod proxy;

/// Upstream error type.
pub use error::UpstreamError;
/// Per-caller usage accounting.
pub use ledger::{Reservation, UsageLedger};
/// Completion provider interface and the Gemini implementation.
pub use provider::{CompletionProvider, GeminiProvider};
/// Quota-limited proxy.
pub use proxy::{CompletionProxy, CompletionReply, NO_RESPONSE_FALLBACK};
