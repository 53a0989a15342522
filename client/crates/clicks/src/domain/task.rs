//! Click Task State Machine
//!
//! Pure, synchronous core of the workflow. The engine drives it from
//! periodic callbacks; everything here is deterministic and tested
//! without timers.
//!
//! States: a task is created in `Started` (the idle condition is the
//! absence of a task) and leaves it exactly once, to `Verified` when
//! the engagement timer reaches the required duration or to
//! `Abandoned` when the auxiliary window closes first. `Verified` is
//! terminal for the watcher: a window-closed observation that loses
//! the same-tick race against the timer cannot revoke a satisfied
//! engagement.

use exchange::domain::offer::Offer;

use crate::domain::record::ClickRecord;

/// Lifecycle state of the active click task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Offer opened, engagement timer running
    Started,
    /// Required dwell time reached; confirmation enabled
    Verified,
    /// Auxiliary window closed before verification
    Abandoned,
}

/// Outcome of one timer tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Still engaging; elapsed seconds so far
    Running { elapsed_secs: u32 },
    /// This tick reached the required duration
    JustVerified,
    /// The task already left `Started`; nothing was counted
    Ignored,
}

/// Ephemeral client-side engagement session for one offer
///
/// Lives only for the duration of one engagement; destroyed on
/// confirmation or abandonment. The required duration is fixed at
/// start and never changes while the task runs.
#[derive(Debug, Clone)]
pub struct ClickTask {
    offer: Offer,
    elapsed_secs: u32,
    required_secs: u32,
    state: TaskState,
}

impl ClickTask {
    /// Begin an engagement session for the offer
    pub fn start(offer: Offer, required_secs: u32) -> Self {
        Self {
            offer,
            elapsed_secs: 0,
            required_secs,
            state: TaskState::Started,
        }
    }

    pub fn offer(&self) -> &Offer {
        &self.offer
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn required_secs(&self) -> u32 {
        self.required_secs
    }

    /// Apply one engagement second.
    ///
    /// Counts only in `Started`; reaching the required duration
    /// transitions to `Verified` exactly once and caps the elapsed
    /// time there, so a straggling tick can never over-count.
    pub fn tick(&mut self) -> Tick {
        if self.state != TaskState::Started {
            return Tick::Ignored;
        }

        self.elapsed_secs += 1;
        if self.elapsed_secs >= self.required_secs {
            self.elapsed_secs = self.required_secs;
            self.state = TaskState::Verified;
            return Tick::JustVerified;
        }

        Tick::Running {
            elapsed_secs: self.elapsed_secs,
        }
    }

    /// The watcher saw the auxiliary window closed.
    ///
    /// Succeeds only from `Started`; returns false (and changes
    /// nothing) once the task is `Verified` - the documented tie-break
    /// gives the timer precedence when both fire in the same tick.
    pub fn abandon(&mut self) -> bool {
        if self.state != TaskState::Started {
            return false;
        }
        self.state = TaskState::Abandoned;
        true
    }

    /// Confirmation is available only in `Verified`
    pub fn can_confirm(&self) -> bool {
        self.state == TaskState::Verified
    }

    /// The submission payload, available once verified
    pub fn record(&self) -> Option<ClickRecord> {
        if !self.can_confirm() {
            return None;
        }
        Some(ClickRecord {
            offer_id: self.offer.id,
            duration: self.elapsed_secs,
            verified: true,
        })
    }
}
