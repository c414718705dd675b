use chrono::{NaiveDateTime, TimeDelta};
use openlift_algos::{ReadinessSummary, RecoveryState};
use openlift_db::DatabaseHandler;
use openlift_types::{NewFeedback, NewSession};
use uuid::Uuid;

pub struct OpenLift {
    pub database: DatabaseHandler,
}

impl OpenLift {
    /// Default window of history feeding the readiness computation.
    pub const LOOKBACK: TimeDelta = TimeDelta::days(30);

    pub fn new(database: DatabaseHandler) -> Self {
        Self { database }
    }

    pub async fn log_session(&self, session: NewSession) -> anyhow::Result<Uuid> {
        let id = self.database.create_session(session).await?;
        info!("recorded session {id}");
        Ok(id)
    }

    pub async fn log_feedback(&self, entries: Vec<NewFeedback>) -> anyhow::Result<Vec<Uuid>> {
        let ids = self.database.record_feedback(entries).await?;
        info!("recorded {} feedback entries", ids.len());
        Ok(ids)
    }

    pub async fn readiness(
        &self,
        now: NaiveDateTime,
    ) -> anyhow::Result<(Vec<RecoveryState>, ReadinessSummary)> {
        self.database.readiness(now, Self::LOOKBACK).await
    }

    pub async fn readiness_within(
        &self,
        now: NaiveDateTime,
        lookback: TimeDelta,
    ) -> anyhow::Result<(Vec<RecoveryState>, ReadinessSummary)> {
        self.database.readiness(now, lookback).await
    }
}
