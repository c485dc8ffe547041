//! `CallQueue` — calls waiting for an elevator.
//!
//! Calls generated on a minute boundary are appended here and stay until a
//! dispatch pass consumes them.  When no car is free the queue is left
//! untouched and retried on the next tick; whatever is still queued when the
//! window closes is dropped.

use std::collections::VecDeque;

use crate::{CallRequest, Sequence};

/// FIFO queue of pending calls.
#[derive(Default, Debug, Clone)]
pub struct CallQueue {
    inner: VecDeque<CallRequest>,
    /// Total calls ever enqueued, for run summaries.
    enqueued: u64,
}

impl CallQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, call: CallRequest) {
        self.inner.push_back(call);
        self.enqueued += 1;
    }

    /// Enqueue every call produced by one firing of `sequence`.
    pub fn push_firing(&mut self, sequence: &Sequence) {
        for call in sequence.calls() {
            self.push(call);
        }
    }

    /// The oldest pending call, if any.
    pub fn front(&self) -> Option<&CallRequest> {
        self.inner.front()
    }

    /// Remove and return the oldest pending call.
    pub fn pop_front(&mut self) -> Option<CallRequest> {
        self.inner.pop_front()
    }

    /// All pending calls, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &CallRequest> {
        self.inner.iter()
    }

    /// Pending calls as a contiguous vector, oldest first.
    pub fn to_vec(&self) -> Vec<CallRequest> {
        self.inner.iter().copied().collect()
    }

    /// Discard every pending call.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of calls enqueued since the queue was created.
    pub fn total_enqueued(&self) -> u64 {
        self.enqueued
    }
}
