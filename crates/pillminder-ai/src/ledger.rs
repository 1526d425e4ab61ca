//! Per-caller usage accounting for the completion proxy.

use log::debug;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Default, Clone, Copy)]
struct Usage {
    /// Prompts that completed successfully.
    used: u32,
    /// Prompts currently in flight.
    reserved: u32,
}

/// Counts accepted prompts per caller key against a fixed ceiling.
///
/// A call first reserves a slot, so concurrent requests from one caller can
/// never push `used` past `max_messages`. The slot is committed on success
/// and released otherwise. `used` never decreases.
#[derive(Debug)]
pub struct UsageLedger {
    max_messages: u32,
    counts: Mutex<HashMap<String, Usage>>,
}

impl UsageLedger {
    pub fn new(max_messages: u32) -> Self {
        Self {
            max_messages,
            counts: Mutex::new(HashMap::new()),
        }
    }

    pub fn max_messages(&self) -> u32 {
        self.max_messages
    }

    /// Successful prompts recorded for the caller.
    pub fn used(&self, caller_key: &str) -> u32 {
        self.counts
            .lock()
            .get(caller_key)
            .map_or(0, |usage| usage.used)
    }

    /// Slots still available to the caller, counting in-flight calls as taken.
    pub fn remaining(&self, caller_key: &str) -> u32 {
        let counts = self.counts.lock();
        let usage = counts.get(caller_key).copied().unwrap_or_default();
        self.max_messages
            .saturating_sub(usage.used)
            .saturating_sub(usage.reserved)
    }

    /// Claim a slot for one outbound call, or `None` when the caller is at
    /// the ceiling.
    pub fn try_reserve(self: &Arc<Self>, caller_key: &str) -> Option<Reservation> {
        let mut counts = self.counts.lock();
        let usage = counts.entry(caller_key.to_string()).or_default();
        if usage.used.saturating_add(usage.reserved) >= self.max_messages {
            return None;
        }
        usage.reserved += 1;
        debug!(
            "reserved completion slot (caller={caller_key}, used={}, reserved={})",
            usage.used, usage.reserved
        );
        Some(Reservation {
            ledger: Arc::clone(self),
            caller_key: caller_key.to_string(),
            settled: false,
        })
    }

    fn settle(&self, caller_key: &str, success: bool) {
        let mut counts = self.counts.lock();
        if let Some(usage) = counts.get_mut(caller_key) {
            usage.reserved = usage.reserved.saturating_sub(1);
            if success {
                usage.used = usage.used.saturating_add(1);
            }
        }
    }
}

/// An in-flight slot. Dropping it without `commit` releases the slot.
#[derive(Debug)]
pub struct Reservation {
    ledger: Arc<UsageLedger>,
    caller_key: String,
    settled: bool,
}

impl Reservation {
    /// Count the call against the caller's quota.
    pub fn commit(mut self) {
        self.ledger.settle(&self.caller_key, true);
        self.settled = true;
    }
}

impl Drop for Reservation {
    fn drop(&mut self) {
        if !self.settled {
            self.ledger.settle(&self.caller_key, false);
        }
    }
}
