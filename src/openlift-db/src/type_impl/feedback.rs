use openlift_entities::feedback;
use openlift_types::FeedbackEntry;
use sea_orm::{EntityTrait, QueryOrder};

use crate::DatabaseHandler;

impl DatabaseHandler {
    /// The full append-only feedback log, oldest first. The engine
    /// reduces it to the latest entry per body part itself.
    pub async fn feedback_history(&self) -> anyhow::Result<Vec<FeedbackEntry>> {
        feedback::Entity::find()
            .order_by_asc(feedback::Column::CreatedAt)
            .all(&self.db)
            .await?
            .into_iter()
            .map(map_feedback)
            .collect()
    }
}

fn map_feedback(model: feedback::Model) -> anyhow::Result<FeedbackEntry> {
    let feeling = model
        .feeling
        .parse()
        .map_err(|_| anyhow::anyhow!("unknown feeling `{}` in entry {}", model.feeling, model.id))?;

    Ok(FeedbackEntry {
        id: model.id,
        body_part: model.body_part,
        feeling,
        intensity: model.intensity.map(|i| i.clamp(0, 10) as u8),
        note: model.note,
        created_at: model.created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use openlift_types::Feeling;
    use uuid::Uuid;

    fn model(feeling: &str) -> feedback::Model {
        feedback::Model {
            id: Uuid::new_v4(),
            body_part: "chest".to_string(),
            feeling: feeling.to_string(),
            intensity: Some(6),
            note: None,
            created_at: chrono::NaiveDate::from_ymd_opt(2025, 3, 30)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn map_feedback_parses_stored_feeling() {
        let entry = map_feedback(model("SORE")).unwrap();
        assert_eq!(entry.feeling, Feeling::Sore);
        assert_eq!(entry.intensity, Some(6));
    }

    #[test]
    fn map_feedback_rejects_unknown_feeling() {
        assert!(map_feedback(model("MEH")).is_err());
    }

    #[tokio::test]
    async fn history_comes_back_oldest_first() {
        let db = DatabaseHandler::new("sqlite::memory:").await;

        db.record_feedback(vec![openlift_types::NewFeedback {
            body_part: "chest".to_string(),
            feeling: Feeling::Tight,
            intensity: None,
            note: None,
        }])
        .await
        .unwrap();

        db.record_feedback(vec![openlift_types::NewFeedback {
            body_part: "chest".to_string(),
            feeling: Feeling::Good,
            intensity: None,
            note: None,
        }])
        .await
        .unwrap();

        let history = db.feedback_history().await.unwrap();
        assert_eq!(history.len(), 2);
        assert!(history[0].created_at <= history[1].created_at);
        assert_eq!(history[0].feeling, Feeling::Tight);
    }
}
