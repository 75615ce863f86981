//! Holds the current snapshot and decides which load results may replace it.
//!
//! Every load is tagged with a [`Ticket`] before it starts. Only the result
//! of the most recently issued ticket is applied, so a slow response can
//! never overwrite the outcome of a newer request.

use std::sync::{
    Arc, PoisonError, RwLock,
    atomic::{AtomicU64, Ordering},
};

use tracing::{debug, warn};

use crate::{feed, repository::LoadedData};

/// Sequence number of one load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The snapshot was replaced and observers were told.
    Replaced,
    /// The result equals the current snapshot, nothing to refresh.
    Unchanged,
    /// A newer ticket was issued meanwhile, the result was dropped.
    Stale,
    /// Loading failed, the previous snapshot stays in place.
    Failed,
}

/// Receives the results the store accepts.
pub trait Observer {
    fn refreshed(&self, data: &Arc<LoadedData>);
    fn failed(&self, error: &feed::Error);
}

/// Observer that ignores everything.
impl Observer for () {
    fn refreshed(&self, _: &Arc<LoadedData>) {}
    fn failed(&self, _: &feed::Error) {}
}

#[derive(Debug, Clone, Default)]
pub struct StoreStatus {
    /// Sequence of the last applied ticket, 0 before any.
    pub applied: u64,
    pub current: Option<Arc<LoadedData>>,
    /// Kind and message of the last failure, cleared by the next success.
    pub last_error: Option<(&'static str, String)>,
}

#[derive(Debug, Default)]
pub struct SnapshotStore {
    issued: AtomicU64,
    slot: RwLock<StoreStatus>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Default::default()
    }

    /// A store that already holds `data`.
    pub fn with_data(data: LoadedData) -> Self {
        Self {
            issued: AtomicU64::new(0),
            slot: RwLock::new(StoreStatus {
                current: Some(Arc::new(data)),
                ..Default::default()
            }),
        }
    }

    /// Issues the ticket for a load that is about to start.
    pub fn begin(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn latest_issued(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }

    pub fn current(&self) -> Option<Arc<LoadedData>> {
        self.read().current.clone()
    }

    pub fn status(&self) -> StoreStatus {
        self.read().clone()
    }

    /// Applies the result of the load started with `ticket`.
    pub fn apply<O>(
        &self,
        ticket: Ticket,
        result: Result<LoadedData, feed::Error>,
        observer: &O,
    ) -> Outcome
    where
        O: Observer + ?Sized,
    {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        if ticket.0 != self.latest_issued() || ticket.0 <= slot.applied {
            warn!(
                "Dropping result of load #{}, latest is #{}",
                ticket.0,
                self.latest_issued()
            );
            return Outcome::Stale;
        }
        slot.applied = ticket.0;

        let data = match result {
            Ok(data) => data,
            Err(err) => {
                warn!("Load #{} failed: {err}", ticket.0);
                slot.last_error = Some((err.kind(), err.to_string()));
                drop(slot);
                observer.failed(&err);
                return Outcome::Failed;
            }
        };
        slot.last_error = None;

        if slot.current.as_deref() == Some(&data) {
            debug!("Load #{} is unchanged", ticket.0);
            return Outcome::Unchanged;
        }

        let data = Arc::new(data);
        slot.current = Some(data.clone());
        drop(slot);
        debug!("Load #{} replaced the snapshot", ticket.0);
        observer.refreshed(&data);
        Outcome::Replaced
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, StoreStatus> {
        self.slot.read().unwrap_or_else(PoisonError::into_inner)
    }
}
