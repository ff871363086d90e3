//! Lifecycle of a single summarization request.
//!
//! `Idle -> Validating -> Processing -> Responding`, or
//! `Idle -> Validating -> Rejected`.

use strum::Display;
use thiserror::Error;
use tracing::debug;

/// Phase of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum RequestPhase {
    Idle,
    Validating,
    Rejected,
    Processing,
    Responding,
}

impl RequestPhase {
    /// Whether `next` may follow `self`.
    pub fn can_transition_to(self, next: RequestPhase) -> bool {
        use RequestPhase::*;
        matches!(
            (self, next),
            (Idle, Validating)
                | (Validating, Rejected)
                | (Validating, Processing)
                | (Processing, Responding)
        )
    }

    /// Rejected and Responding are final.
    pub fn is_terminal(self) -> bool {
        matches!(self, RequestPhase::Rejected | RequestPhase::Responding)
    }
}

/// A transition that the lifecycle does not allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid request phase transition: {from} -> {to}")]
pub struct InvalidTransition {
    pub from: RequestPhase,
    pub to: RequestPhase,
}

/// Tracks the phase of one request.
#[derive(Debug)]
pub struct PhaseTracker {
    phase: RequestPhase,
}

impl Default for PhaseTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseTracker {
    pub fn new() -> Self {
        Self {
            phase: RequestPhase::Idle,
        }
    }

    pub fn phase(&self) -> RequestPhase {
        self.phase
    }

    /// Move to `next`, logging the transition.
    pub fn advance(&mut self, next: RequestPhase) -> Result<(), InvalidTransition> {
        if !self.phase.can_transition_to(next) {
            return Err(InvalidTransition {
                from: self.phase,
                to: next,
            });
        }
        debug!(from = %self.phase, to = %next, "Request phase transition");
        self.phase = next;
        Ok(())
    }
}
