use recfetch_engine::{FetchSimulator, LatencyModel};

use super::config::Effective;

// ═══════════════════════════════════════════════════════════════
//  Main dispatch
// ═══════════════════════════════════════════════════════════════

/// One full demonstration run: the sequential task, then the
/// concurrent one. Fetch errors are recovered inside the tasks, so
/// this never fails.
pub async fn run(eff: &Effective) {
    let latency = if eff.jitter.is_zero() {
        LatencyModel::fixed(eff.delay)
    } else {
        LatencyModel::with_jitter(eff.delay, eff.jitter, eff.seed)
    };
    let sim = FetchSimulator::with_roster(latency, eff.roster.clone());

    show_record_details(&sim, eff.ids[0]).await;
    run_parallel_tasks(&sim, &eff.ids).await;
}

// ═══════════════════════════════════════════════════════════════
//  Sequential task
// ═══════════════════════════════════════════════════════════════

/// Fetch one record and report its name. Failure is reported and
/// recovered here — the caller never sees it.
async fn show_record_details(sim: &FetchSimulator, id: u64) {
    tracing::info!("sequential task started");
    match sim.fetch_record(id).await {
        Ok(record) => tracing::info!(name = %record.name, "record fetched"),
        Err(e) => tracing::warn!(error = %e, "fetch failed"),
    }
    tracing::info!("sequential task finished");
}

// ═══════════════════════════════════════════════════════════════
//  Concurrent task
// ═══════════════════════════════════════════════════════════════

/// Fetch all configured ids at once; report names in call order and
/// the elapsed wall time. One failing member fails the group — the
/// error names it, and no partial list is reported.
async fn run_parallel_tasks(sim: &FetchSimulator, ids: &[u64]) {
    tracing::info!("concurrent task started");
    match sim.fetch_concurrent_timed(ids).await {
        Ok(gathered) => {
            let names: Vec<&str> = gathered.records.iter().map(|r| r.name.as_str()).collect();
            tracing::info!(names = ?names, "all records fetched");
            tracing::info!(
                elapsed_ms = gathered.elapsed.as_millis() as u64,
                "concurrent task finished"
            );
        }
        Err(e) => tracing::warn!(error = %e, "concurrent fetch failed"),
    }
}
