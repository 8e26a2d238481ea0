use std::time::Duration;

use futures_util::future::try_join_all;
use tokio::time::Instant;

use recfetch_api::error::FetchError;
use recfetch_api::record::Record;
use recfetch_api::roster::Roster;

use crate::latency::LatencyModel;

/// Records produced by a timed orchestration run, with the wall time
/// the run took. Elapsed is measured on the tokio clock, so tests
/// running under a paused clock observe logical time.
#[derive(Debug)]
pub struct Gathered {
    pub records: Vec<Record>,
    pub elapsed: Duration,
}

/// Simulated record source.
///
/// Fetches never touch real I/O: each call suspends on a timer for
/// the modeled latency, then resolves from the roster. A fetch is
/// pending until its timer fires, then terminally resolved or
/// rejected — no retries, no cancellation.
pub struct FetchSimulator {
    roster: Roster,
    latency: LatencyModel,
}

impl FetchSimulator {
    /// Simulator over the built-in demo roster.
    pub fn new(latency: LatencyModel) -> Self {
        Self::with_roster(latency, Roster::default())
    }

    pub fn with_roster(latency: LatencyModel, roster: Roster) -> Self {
        Self { roster, latency }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Fetch a record by id.
    ///
    /// Suspends the calling task for the modeled delay without
    /// blocking the thread; other tasks progress during the wait.
    /// Resolves to a record whose `id` equals the input, or fails
    /// with [`FetchError::NotFound`] when the roster has no entry.
    pub async fn fetch_record(&self, id: u64) -> Result<Record, FetchError> {
        tracing::info!(id, "fetching record");
        tokio::time::sleep(self.latency.next_delay()).await;
        self.roster.resolve(id).ok_or(FetchError::NotFound { id })
    }

    /// Await each id in turn. Total latency is the sum of the
    /// per-fetch delays; the first failure stops the walk.
    pub async fn fetch_sequential(&self, ids: &[u64]) -> Result<Vec<Record>, FetchError> {
        let mut records = Vec::with_capacity(ids.len());
        for &id in ids {
            records.push(self.fetch_record(id).await?);
        }
        Ok(records)
    }

    /// Issue all fetches before the first suspension, then await the
    /// group at once.
    ///
    /// Results come back in initiation order regardless of completion
    /// order. A single failing member fails the whole group with that
    /// member's error; the other results are discarded. Total latency
    /// is one delay, not the sum.
    pub async fn fetch_concurrent(&self, ids: &[u64]) -> Result<Vec<Record>, FetchError> {
        try_join_all(ids.iter().map(|&id| self.fetch_record(id))).await
    }

    /// [`fetch_sequential`](Self::fetch_sequential) plus elapsed wall time.
    pub async fn fetch_sequential_timed(&self, ids: &[u64]) -> Result<Gathered, FetchError> {
        let started = Instant::now();
        let records = self.fetch_sequential(ids).await?;
        Ok(Gathered {
            records,
            elapsed: started.elapsed(),
        })
    }

    /// [`fetch_concurrent`](Self::fetch_concurrent) plus elapsed wall time.
    pub async fn fetch_concurrent_timed(&self, ids: &[u64]) -> Result<Gathered, FetchError> {
        let started = Instant::now();
        let records = self.fetch_concurrent(ids).await?;
        Ok(Gathered {
            records,
            elapsed: started.elapsed(),
        })
    }
}
