//! Load lifecycle for the currently visible index
//!
//! A [`Session`] owns at most one [`TweetIndex`]. Loading a new export replaces
//! it wholesale once the new index is fully built; readers keep whichever
//! `Arc` they already hold. When loads overlap, the most recently started load
//! that completes wins and older results arriving later are dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, info};

use crate::archive::ArchiveReader;
use crate::error::Result;
use crate::indexer::{TweetIndex, build_index};

/// Identifies one in-flight load; later tickets supersede earlier ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The new index is now the visible one
    Installed,
    /// A newer load finished first; this result was discarded
    Superseded,
}

#[derive(Debug, Default)]
struct Published {
    index: Option<Arc<TweetIndex>>,
    ticket: u64,
}

#[derive(Debug, Default)]
pub struct Session {
    next_ticket: AtomicU64,
    published: RwLock<Published>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The visible index, if any export has been loaded
    pub fn current(&self) -> Option<Arc<TweetIndex>> {
        self.published.read().unwrap_or_else(PoisonError::into_inner).index.clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.published.read().unwrap_or_else(PoisonError::into_inner).index.is_some()
    }

    /// Reserve a ticket for a load that is about to start
    pub fn begin_load(&self) -> LoadTicket {
        LoadTicket(self.next_ticket.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Publish the result of a load.
    ///
    /// A failed load returns its error and leaves the current index in place. A
    /// successful one is installed unless a load with a newer ticket already was.
    pub fn complete_load(
        &self,
        ticket: LoadTicket,
        result: Result<TweetIndex>,
    ) -> Result<LoadOutcome> {
        let index = result?;
        let mut published = self.published.write().unwrap_or_else(PoisonError::into_inner);

        if ticket.0 <= published.ticket {
            debug!(ticket = ticket.0, installed = published.ticket, "discarding superseded load");
            return Ok(LoadOutcome::Superseded);
        }

        info!(ticket = ticket.0, records = index.count(), "installed new index");
        published.index = Some(Arc::new(index));
        published.ticket = ticket.0;
        Ok(LoadOutcome::Installed)
    }

    /// Load an export and install it
    pub fn load<A: ArchiveReader + ?Sized>(&self, archive: &A) -> Result<LoadOutcome> {
        let ticket = self.begin_load();
        self.complete_load(ticket, build_index(archive))
    }

    /// Drop the visible index
    pub fn clear(&self) {
        let mut published = self.published.write().unwrap_or_else(PoisonError::into_inner);
        published.index = None;
    }
}
