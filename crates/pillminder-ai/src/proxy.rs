//! Rate-limited access to a completion provider.

use crate::ledger::UsageLedger;
use crate::provider::CompletionProvider;
use log::{info, warn};
use std::sync::Arc;

/// Answer used when the provider replied without any text.
pub const NO_RESPONSE_FALLBACK: &str = "No response from AI.";

/// Outcome of one proxied prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionReply {
    /// The provider answered (possibly with the no-response fallback).
    Answered(String),
    /// The caller has used up its allowance; no call was made.
    LimitReached(String),
    /// The provider call failed and was not counted.
    Failed(String),
}

impl CompletionReply {
    /// Text shown to the user.
    pub fn text(&self) -> &str {
        match self {
            Self::Answered(text) | Self::LimitReached(text) | Self::Failed(text) => text,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Forwards prompts to a provider while enforcing a per-caller ceiling.
#[derive(Clone)]
pub struct CompletionProxy {
    provider: Arc<dyn CompletionProvider>,
    ledger: Arc<UsageLedger>,
}

impl CompletionProxy {
    pub fn new(provider: Arc<dyn CompletionProvider>, max_messages: u32) -> Self {
        Self {
            provider,
            ledger: Arc::new(UsageLedger::new(max_messages)),
        }
    }

    pub fn max_messages(&self) -> u32 {
        self.ledger.max_messages()
    }

    /// Successful prompts recorded for `caller_key`.
    pub fn usage(&self, caller_key: &str) -> u32 {
        self.ledger.used(caller_key)
    }

    pub fn remaining(&self, caller_key: &str) -> u32 {
        self.ledger.remaining(caller_key)
    }

    /// Send `prompt` on behalf of `caller_key`.
    ///
    /// The provider call and its bookkeeping run on their own task, so an
    /// abandoned request still settles the caller's count.
    pub async fn complete(&self, caller_key: &str, prompt: &str) -> CompletionReply {
        let Some(reservation) = self.ledger.try_reserve(caller_key) else {
            info!("completion limit reached (caller={caller_key})");
            return CompletionReply::LimitReached(limit_message(self.max_messages()));
        };

        let provider = Arc::clone(&self.provider);
        let prompt = prompt.to_string();
        let caller = caller_key.to_string();
        let task = tokio::spawn(async move {
            match provider.complete(&prompt).await {
                Ok(text) => {
                    reservation.commit();
                    info!(
                        "completion answered (caller={caller}, reply_len={})",
                        text.len()
                    );
                    if text.trim().is_empty() {
                        CompletionReply::Answered(NO_RESPONSE_FALLBACK.to_string())
                    } else {
                        CompletionReply::Answered(text)
                    }
                }
                Err(err) => {
                    drop(reservation);
                    warn!("completion failed (caller={caller}, error={err})");
                    CompletionReply::Failed(format!("AI request failed: {err}"))
                }
            }
        });

        match task.await {
            Ok(reply) => reply,
            Err(err) => {
                warn!("completion task aborted (caller={caller_key}, error={err})");
                CompletionReply::Failed(format!("AI request failed: {err}"))
            }
        }
    }
}

fn limit_message(max_messages: u32) -> String {
    format!(
        "You've reached the demo limit of {max_messages} AI messages. Please try again later."
    )
}
