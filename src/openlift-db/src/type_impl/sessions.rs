use chrono::NaiveDateTime;
use openlift_entities::{session_exercises, sessions};
use openlift_types::{ExerciseEntry, TrainingSession};
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, LoaderTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::DatabaseHandler;

#[derive(Default, Debug)]
pub struct SearchSessions {
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
    pub include_archived: bool,
    pub limit: Option<u64>,
}

impl SearchSessions {
    pub fn since(mut self, from: NaiveDateTime) -> Self {
        self.from = Some(from);
        self
    }

    pub(crate) fn conditions(self) -> Condition {
        // The window check matches the effective time (end if set,
        // else start), so filter on either column being recent enough;
        // the engine re-filters exactly.
        let mut condition = Condition::all()
            .add_option(self.from.map(|from| {
                Condition::any()
                    .add(sessions::Column::EndedAt.gte(from))
                    .add(sessions::Column::StartedAt.gte(from))
            }))
            .add_option(self.to.map(|to| sessions::Column::StartedAt.lt(to)));

        if !self.include_archived {
            condition = condition.add(sessions::Column::Archived.eq(false));
        }

        condition
    }
}

impl DatabaseHandler {
    pub async fn search_sessions(
        &self,
        options: SearchSessions,
    ) -> anyhow::Result<Vec<TrainingSession>> {
        let limit = options.limit;
        let session_rows = sessions::Entity::find()
            .filter(options.conditions())
            .order_by_asc(sessions::Column::StartedAt)
            .limit(limit)
            .all(&self.db)
            .await?;

        let exercise_rows = session_rows
            .load_many(session_exercises::Entity, &self.db)
            .await?;

        Ok(session_rows
            .into_iter()
            .zip(exercise_rows)
            .map(|(session, exercises)| map_session(session, exercises))
            .collect())
    }

    /// The readiness window: non-archived sessions whose effective
    /// time can still fall inside the lookback.
    pub async fn recent_sessions(
        &self,
        since: NaiveDateTime,
    ) -> anyhow::Result<Vec<TrainingSession>> {
        self.search_sessions(SearchSessions::default().since(since))
            .await
    }
}

fn map_session(
    model: sessions::Model,
    mut exercises: Vec<session_exercises::Model>,
) -> TrainingSession {
    exercises.sort_by_key(|e| e.position);

    TrainingSession {
        id: model.id,
        title: model.title,
        started_at: model.started_at,
        ended_at: model.ended_at,
        archived: model.archived,
        exercises: exercises.into_iter().map(map_exercise).collect(),
    }
}

fn map_exercise(model: session_exercises::Model) -> ExerciseEntry {
    ExerciseEntry {
        name: model.name,
        body_parts: serde_json::from_str(&model.body_parts).unwrap_or_default(),
        completed_sets: model.completed_sets.map(|s| s.max(0) as u32),
        planned_sets: model.planned_sets.map(|s| s.max(0) as u32),
    }
}
