//! Request lifecycle tracking for a mounted form
//!
//! - [`SubmitGate`] admits one submission at a time (`idle -> pending -> done`)
//! - [`CancelToken`] is flipped when the owning component is torn down so a
//!   late response can be dropped instead of touching dead state

use derive_more::Display;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Where the form's request currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum RequestPhase {
    #[default]
    #[display("idle")]
    Idle,
    #[display("pending")]
    Pending,
    #[display("done")]
    Done,
}

/// Admits at most one in-flight submission
#[derive(Debug, Clone, Default)]
pub struct SubmitGate {
    phase: Arc<Mutex<RequestPhase>>,
}

impl SubmitGate {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, RequestPhase> {
        // The phase is a plain Copy value, a poisoned lock still holds a usable one.
        self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn phase(&self) -> RequestPhase {
        *self.lock()
    }

    pub fn is_pending(&self) -> bool {
        self.phase() == RequestPhase::Pending
    }

    /// Move to `Pending` unless a request is already pending.
    ///
    /// The returned ticket moves the gate to `Done` when dropped.
    pub fn try_begin(&self) -> Option<SubmitTicket> {
        let mut phase = self.lock();
        if *phase == RequestPhase::Pending {
            return None;
        }
        *phase = RequestPhase::Pending;
        Some(SubmitTicket {
            phase: Arc::clone(&self.phase),
        })
    }
}

/// Proof that the holder owns the pending slot of a [`SubmitGate`]
#[derive(Debug)]
pub struct SubmitTicket {
    phase: Arc<Mutex<RequestPhase>>,
}

impl Drop for SubmitTicket {
    fn drop(&mut self) {
        let mut phase = self.phase.lock().unwrap_or_else(PoisonError::into_inner);
        *phase = RequestPhase::Done;
    }
}

/// Cancellation flag shared between a component and its spawned tasks
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_starts_idle() {
        let gate = SubmitGate::new();
        assert_eq!(gate.phase(), RequestPhase::Idle);
        assert!(!gate.is_pending());
    }

    #[test]
    fn test_gate_rejects_while_pending() {
        let gate = SubmitGate::new();
        let ticket = gate.try_begin();
        assert!(ticket.is_some());
        assert!(gate.is_pending());
        assert!(gate.try_begin().is_none());
    }

    #[test]
    fn test_dropping_ticket_marks_done_and_reopens() {
        let gate = SubmitGate::new();
        let ticket = gate.try_begin().unwrap();
        drop(ticket);

        assert_eq!(gate.phase(), RequestPhase::Done);
        assert!(gate.try_begin().is_some());
    }

    #[test]
    fn test_cloned_gate_shares_phase() {
        let gate = SubmitGate::new();
        let other = gate.clone();
        let _ticket = gate.try_begin().unwrap();
        assert!(other.try_begin().is_none());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(RequestPhase::Idle.to_string(), "idle");
        assert_eq!(RequestPhase::Pending.to_string(), "pending");
        assert_eq!(RequestPhase::Done.to_string(), "done");
    }

    #[test]
    fn test_cancel_token_is_shared_between_clones() {
        let token = CancelToken::new();
        let task_side = token.clone();
        assert!(!task_side.is_cancelled());

        token.cancel();
        assert!(task_side.is_cancelled());
    }
}
