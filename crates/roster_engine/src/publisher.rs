use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use roster_core::{prepare_roster, RosterSnapshot, Version};
use roster_logging::{roster_debug, roster_info};
use tokio::sync::watch;

use crate::{FetchError, Fetcher};

/// Outcome of one completed [`RosterPublisher::refresh`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The refreshed roster became the current snapshot.
    Installed { version: Version },
    /// A newer refresh published first; this result was discarded.
    Superseded { version: Version },
}

/// Holds the current [`RosterSnapshot`] and fans new snapshots out to
/// observers.
///
/// The snapshot lives in a `watch` channel: a single writer replaces it
/// wholesale, any number of observers read it without ever seeing a torn
/// value. Before the first successful refresh the snapshot is the default
/// one (version 0, no rows).
pub struct RosterPublisher {
    fetcher: Arc<dyn Fetcher>,
    snapshot_tx: watch::Sender<RosterSnapshot>,
    next_version: AtomicU64,
}

impl RosterPublisher {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        let (snapshot_tx, _) = watch::channel(RosterSnapshot::default());
        Self {
            fetcher,
            snapshot_tx,
            next_version: AtomicU64::new(0),
        }
    }

    /// Registers a new observer.
    ///
    /// The observer starts with the currently installed snapshot marked as
    /// seen: read it with [`RosterObserver::current`], await the next
    /// install with [`RosterObserver::changed`].
    pub fn observe(&self) -> RosterObserver {
        RosterObserver {
            rx: self.snapshot_tx.subscribe(),
        }
    }

    /// Clones the currently installed snapshot.
    pub fn current(&self) -> RosterSnapshot {
        self.snapshot_tx.borrow().clone()
    }

    /// Runs one fetch → prepare → publish cycle.
    ///
    /// Every call claims the next version up front. After the fetch, the
    /// prepared roster is installed only if no newer call has published in
    /// the meantime, so a slow stale response can never overwrite a fresher
    /// snapshot; observers therefore see versions in non-decreasing order.
    ///
    /// On fetch failure the installed snapshot stays untouched and the error
    /// is returned to the caller. Dropping the returned future cancels the
    /// in-flight request without publishing or notifying anything.
    pub async fn refresh(&self) -> Result<RefreshOutcome, FetchError> {
        let version = self.next_version.fetch_add(1, Ordering::Relaxed) + 1;
        roster_debug!("refresh v{} started", version);

        let items = self.fetcher.fetch_items().await?;
        let rows = prepare_roster(items);
        let row_count = rows.len();

        let installed = self.snapshot_tx.send_if_modified(|current| {
            if version > current.version {
                *current = RosterSnapshot { version, rows };
                true
            } else {
                false
            }
        });

        if installed {
            roster_info!("published roster v{} ({} rows)", version, row_count);
            Ok(RefreshOutcome::Installed { version })
        } else {
            roster_debug!(
                "refresh v{} superseded by v{}",
                version,
                self.snapshot_tx.borrow().version
            );
            Ok(RefreshOutcome::Superseded { version })
        }
    }
}

/// Read-only subscription handle to the published roster.
pub struct RosterObserver {
    rx: watch::Receiver<RosterSnapshot>,
}

impl RosterObserver {
    /// Clones the snapshot that is current right now.
    pub fn current(&self) -> RosterSnapshot {
        self.rx.borrow().clone()
    }

    /// Waits for the next installed snapshot.
    ///
    /// Returns `None` once the publisher has been dropped. Installs that
    /// outpace the observer are coalesced: only the newest snapshot is
    /// delivered, never an older one.
    pub async fn changed(&mut self) -> Option<RosterSnapshot> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}
