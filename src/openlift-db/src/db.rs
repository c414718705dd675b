use chrono::Utc;
use openlift_entities::{feedback, session_exercises, sessions};
use openlift_migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait,
    QueryFilter, Set, sea_query::Expr,
};
use uuid::Uuid;

use openlift_types::{NewFeedback, NewSession};

#[derive(Clone)]
pub struct DatabaseHandler {
    pub(crate) db: DatabaseConnection,
}

impl DatabaseHandler {
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn new<C>(path: C) -> Self
    where
        C: Into<ConnectOptions>,
    {
        let db = Database::connect(path)
            .await
            .expect("Unable to connect to db");

        Migrator::up(&db, None)
            .await
            .expect("Error running migrations");

        Self { db }
    }

    pub async fn create_session(&self, session: NewSession) -> anyhow::Result<Uuid> {
        let id = Uuid::new_v4();
        let model = sessions::ActiveModel {
            id: Set(id),
            title: Set(session.title),
            started_at: Set(session.started_at),
            ended_at: Set(session.ended_at),
            archived: Set(false),
        };

        sessions::Entity::insert(model).exec(&self.db).await?;

        if !session.exercises.is_empty() {
            let rows = session
                .exercises
                .into_iter()
                .enumerate()
                .map(|(position, exercise)| {
                    Ok(session_exercises::ActiveModel {
                        id: NotSet,
                        session_id: Set(id),
                        position: Set(position as i32),
                        name: Set(exercise.name),
                        body_parts: Set(serde_json::to_string(&exercise.body_parts)?),
                        completed_sets: Set(exercise.completed_sets.map(|s| s as i32)),
                        planned_sets: Set(exercise.planned_sets.map(|s| s as i32)),
                    })
                })
                .collect::<anyhow::Result<Vec<_>>>()?;

            session_exercises::Entity::insert_many(rows)
                .exec(&self.db)
                .await?;
        }

        Ok(id)
    }

    /// Soft delete: archived sessions stay in the table but stop
    /// feeding searches and the readiness computation.
    pub async fn archive_session(&self, id: Uuid) -> anyhow::Result<bool> {
        let result = sessions::Entity::update_many()
            .col_expr(sessions::Column::Archived, Expr::value(true))
            .filter(sessions::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Append feedback entries. The batch is all-or-nothing: every
    /// entry is validated before any row is written, so one bad entry
    /// rejects the whole call.
    pub async fn record_feedback(
        &self,
        mut entries: Vec<NewFeedback>,
    ) -> anyhow::Result<Vec<Uuid>> {
        for entry in entries.iter_mut() {
            entry.validate()?;
        }

        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let created_at = Utc::now().naive_utc();
        let mut ids = Vec::with_capacity(entries.len());
        let rows = entries
            .into_iter()
            .map(|entry| {
                let id = Uuid::new_v4();
                ids.push(id);
                feedback::ActiveModel {
                    id: Set(id),
                    body_part: Set(entry.body_part),
                    feeling: Set(entry.feeling.to_string()),
                    intensity: Set(entry.intensity.map(i16::from)),
                    note: Set(entry.note),
                    created_at: Set(created_at),
                }
            })
            .collect::<Vec<_>>();

        feedback::Entity::insert_many(rows).exec(&self.db).await?;

        Ok(ids)
    }
}
