//! Click Workflow Engine
//!
//! Drives the task state machine with two periodic callbacks per
//! active task: the engagement ticker and the window-liveness watcher.
//! Both loops serialize on the workflow lock, check the task epoch,
//! and exit as soon as the task leaves `Started`; the join-handle
//! guards abort whatever is left when the workflow is dropped, so no
//! interval callback ever outlives its task.

use crate::application::config::EngagementConfig;
use crate::domain::record::ClickReceipt;
use crate::domain::repository::ClickGateway;
use crate::domain::surface::OfferSurface;
use crate::domain::task::{ClickTask, TaskState, Tick};
use crate::error::{ClickError, ClickResult};
use cache::FetchCache;
use exchange::domain::offer::Offer;
use session::store::SessionStore;
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// What the task card renders right now
#[derive(Debug, Clone)]
pub enum TaskSnapshot {
    /// No task running
    Idle,
    /// A task is engaging or awaiting confirmation
    Active {
        offer: Offer,
        state: TaskState,
        elapsed_secs: u32,
        required_secs: u32,
    },
    /// The last task ended because the offer window closed early
    Abandoned { offer: Offer },
}

struct Inner {
    task: Option<ClickTask>,
    handle: Option<Box<dyn crate::domain::surface::SurfaceHandle>>,
    /// Bumped on every install/clear; stale periodic loops see the
    /// bump and exit instead of touching a newer task
    epoch: u64,
}

/// Aborts both periodic loops when dropped
struct TimerGuards {
    ticker: JoinHandle<()>,
    watcher: JoinHandle<()>,
}

impl Drop for TimerGuards {
    fn drop(&mut self) {
        self.ticker.abort();
        self.watcher.abort();
    }
}

/// The click-task workflow engine
///
/// At most one task is active at a time; starting a second one while
/// the first is running is rejected. Dropping the workflow aborts the
/// periodic loops of whatever task was active.
pub struct ClickWorkflow<G>
where
    G: ClickGateway,
{
    inner: Arc<Mutex<Inner>>,
    timers: StdMutex<Option<TimerGuards>>,
    surface: Arc<dyn OfferSurface>,
    gateway: Arc<G>,
    cache: Arc<FetchCache>,
    session: Arc<SessionStore>,
    config: EngagementConfig,
    snapshots: watch::Sender<TaskSnapshot>,
}

fn snapshot_of(task: Option<&ClickTask>) -> TaskSnapshot {
    match task {
        None => TaskSnapshot::Idle,
        Some(task) => TaskSnapshot::Active {
            offer: task.offer().clone(),
            state: task.state(),
            elapsed_secs: task.elapsed_secs(),
            required_secs: task.required_secs(),
        },
    }
}

impl<G> ClickWorkflow<G>
where
    G: ClickGateway,
{
    pub fn new(
        surface: Arc<dyn OfferSurface>,
        gateway: Arc<G>,
        cache: Arc<FetchCache>,
        session: Arc<SessionStore>,
        config: EngagementConfig,
    ) -> Self {
        let (snapshots, _) = watch::channel(TaskSnapshot::Idle);
        Self {
            inner: Arc::new(Mutex::new(Inner {
                task: None,
                handle: None,
                epoch: 0,
            })),
            timers: StdMutex::new(None),
            surface,
            gateway,
            cache,
            session,
            config,
            snapshots,
        }
    }

    /// Subscribe to task snapshots
    pub fn subscribe(&self) -> watch::Receiver<TaskSnapshot> {
        self.snapshots.subscribe()
    }

    /// The snapshot as last published
    pub fn snapshot(&self) -> TaskSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Start engaging with an offer.
    ///
    /// Opens the auxiliary window first: if the browser blocks it the
    /// workflow stays idle and reports [`ClickError::PopupBlocked`].
    pub async fn start(&self, offer: Offer) -> ClickResult<()> {
        let mut inner = self.inner.lock().await;
        if inner.task.is_some() {
            return Err(ClickError::TaskAlreadyActive);
        }

        let handle = self.surface.open(&offer.link).map_err(|_| {
            tracing::warn!(offer_id = %offer.id, "Popup blocked, task not started");
            ClickError::PopupBlocked
        })?;

        let required_secs = self.config.required_secs();
        tracing::info!(
            offer_id = %offer.id,
            required_secs = required_secs,
            "Click task started"
        );

        inner.task = Some(ClickTask::start(offer, required_secs));
        inner.handle = Some(handle);
        inner.epoch += 1;
        let epoch = inner.epoch;
        let snapshot = snapshot_of(inner.task.as_ref());
        drop(inner);

        let guards = TimerGuards {
            ticker: self.spawn_ticker(epoch),
            watcher: self.spawn_watcher(epoch),
        };
        *self.timers.lock().expect("timer guard poisoned") = Some(guards);

        let _ = self.snapshots.send(snapshot);
        Ok(())
    }

    /// Re-visit the offer page of the active task.
    ///
    /// Focuses the existing window while it is still open; re-opens it
    /// (replacing the handle) when it is not.
    pub async fn visit_offer(&self) -> ClickResult<()> {
        let mut inner = self.inner.lock().await;
        let link = match inner.task.as_ref() {
            Some(task) => task.offer().link.clone(),
            None => return Err(ClickError::NoActiveTask),
        };

        if let Some(handle) = inner.handle.as_ref() {
            if !handle.is_closed() {
                handle.focus();
                return Ok(());
            }
        }

        let handle = self
            .surface
            .open(&link)
            .map_err(|_| ClickError::PopupBlocked)?;
        inner.handle = Some(handle);
        Ok(())
    }

    /// Submit the verified engagement.
    ///
    /// A no-op unless the task is `Verified`. On success the reward is
    /// reflected optimistically and the task clears back to idle; on
    /// failure the task stays `Verified` so no engagement time is
    /// lost and the submission can be retried as-is.
    pub async fn confirm(&self) -> ClickResult<ClickReceipt> {
        // The lock is held across the submission: the single-task
        // invariant must hold until the outcome is known.
        let mut inner = self.inner.lock().await;

        let record = match inner.task.as_ref() {
            None => return Err(ClickError::NoActiveTask),
            Some(task) => task.record().ok_or(ClickError::TaskNotVerified)?,
        };
        let epc = inner
            .task
            .as_ref()
            .map(|t| t.offer().epc)
            .unwrap_or_default();

        match self.gateway.submit(&record).await {
            Ok(receipt) => {
                tracing::info!(
                    offer_id = %record.offer_id,
                    duration = record.duration,
                    "Click confirmed"
                );
                inner.task = None;
                inner.handle = None;
                inner.epoch += 1;
                drop(inner);

                *self.timers.lock().expect("timer guard poisoned") = None;
                let _ = self.snapshots.send(TaskSnapshot::Idle);

                // Optimistic reward, then explicit re-reads of what it
                // changed
                let reward = receipt.reward.unwrap_or(epc);
                if let Err(e) = self.session.credit_balance(reward).await {
                    tracing::debug!(error = %e, "No session to credit reward to");
                }
                self.cache.invalidate_prefix("/api/user").await;
                self.cache.invalidate_prefix("/api/transactions").await;

                Ok(receipt)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    offer_id = %record.offer_id,
                    "Verification submission failed, task preserved"
                );
                Err(ClickError::SubmitFailed(Box::new(e)))
            }
        }
    }

    /// Abandon whatever is running (navigation away / unmount)
    pub async fn cancel(&self) {
        let mut inner = self.inner.lock().await;
        if inner.task.take().is_some() {
            inner.handle = None;
            inner.epoch += 1;
            tracing::info!("Click task cancelled");
        }
        drop(inner);

        *self.timers.lock().expect("timer guard poisoned") = None;
        let _ = self.snapshots.send(TaskSnapshot::Idle);
    }

    fn spawn_ticker(&self, epoch: u64) -> JoinHandle<()> {
        let inner = self.inner.clone();
        let tx = self.snapshots.clone();
        let period = self.config.tick_period;

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // interval fires immediately once; the first engagement
            // second lands one period later
            interval.tick().await;

            loop {
                interval.tick().await;
                let mut guard = inner.lock().await;
                if guard.epoch != epoch {
                    break;
                }
                let outcome = match guard.task.as_mut() {
                    Some(task) => task.tick(),
                    None => break,
                };
                match outcome {
                    Tick::Running { .. } => {
                        let _ = tx.send(snapshot_of(guard.task.as_ref()));
                    }
                    Tick::JustVerified => {
                        if let Some(task) = guard.task.as_ref() {
                            tracing::info!(
                                offer_id = %task.offer().id,
                                "Engagement verified"
                            );
                        }
                        let _ = tx.send(snapshot_of(guard.task.as_ref()));
                        break;
                    }
                    Tick::Ignored => break,
                }
            }
        })
    }

    fn spawn_watcher(&self, epoch: u64) -> JoinHandle<()> {
        let inner = self.inner.clone();
        let tx = self.snapshots.clone();
        let period = self.config.watcher_period;

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            interval.tick().await;

            loop {
                interval.tick().await;
                let mut guard = inner.lock().await;
                if guard.epoch != epoch {
                    break;
                }
                match guard.task.as_ref().map(|t| t.state()) {
                    Some(TaskState::Started) => {}
                    // Verified or gone: the watcher's job is over.
                    // Timer precedence on the same-tick race falls out
                    // of this check running under the same lock.
                    _ => break,
                }

                let closed = guard
                    .handle
                    .as_ref()
                    .map(|h| h.is_closed())
                    .unwrap_or(true);
                if !closed {
                    continue;
                }

                let offer = {
                    let task = guard.task.as_mut().expect("checked above");
                    task.abandon();
                    task.offer().clone()
                };
                tracing::warn!(
                    offer_id = %offer.id,
                    "Offer window closed before verification, task abandoned"
                );
                guard.task = None;
                guard.handle = None;
                guard.epoch += 1;
                let _ = tx.send(TaskSnapshot::Abandoned { offer });
                break;
            }
        })
    }
}
