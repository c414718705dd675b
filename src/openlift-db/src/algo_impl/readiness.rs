use chrono::{NaiveDateTime, TimeDelta};
use openlift_algos::{ReadinessEngine, ReadinessSummary, RecoveryState};

use crate::DatabaseHandler;

impl DatabaseHandler {
    /// Load the session window and the feedback log, then run the
    /// readiness computation at `now`. Either load failing aborts the
    /// call, so the engine never sees partial data.
    pub async fn readiness(
        &self,
        now: NaiveDateTime,
        lookback: TimeDelta,
    ) -> anyhow::Result<(Vec<RecoveryState>, ReadinessSummary)> {
        let engine = ReadinessEngine::new(lookback);
        let sessions = self.recent_sessions(now - lookback).await?;
        let feedback = self.feedback_history().await?;

        Ok(engine.compute(&sessions, &feedback, now))
    }
}
