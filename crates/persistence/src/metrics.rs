//! Query and pool metrics.
//!
//! Repositories time each statement with a [`QueryTimer`]; the health
//! endpoint snapshots pool occupancy via [`record_pool_metrics`].

use metrics::{gauge, histogram};
use sqlx::PgPool;
use std::time::Instant;

/// Times a named query and records its duration into the
/// `db_query_duration_seconds` histogram.
///
/// Dropping the timer without calling [`record`](QueryTimer::record)
/// discards the measurement, so error paths are not counted.
pub struct QueryTimer {
    query: &'static str,
    start: Instant,
}

impl QueryTimer {
    pub fn new(query: &'static str) -> Self {
        Self {
            query,
            start: Instant::now(),
        }
    }

    pub fn record(self) {
        histogram!("db_query_duration_seconds", "query" => self.query)
            .record(self.start.elapsed().as_secs_f64());
    }
}

/// Snapshot connection-pool occupancy into labeled gauges.
pub fn record_pool_metrics(pool: &PgPool) {
    let size = pool.size() as usize;
    let idle = pool.num_idle();

    gauge!("db_pool_connections", "state" => "active").set(size.saturating_sub(idle) as f64);
    gauge!("db_pool_connections", "state" => "idle").set(idle as f64);
    gauge!("db_pool_connections", "state" => "total").set(size as f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_timer_tracks_elapsed_time() {
        let timer = QueryTimer::new("list_campaigns");
        assert_eq!(timer.query, "list_campaigns");
        assert!(timer.start.elapsed().as_secs() < 1);
        timer.record();
    }
}
