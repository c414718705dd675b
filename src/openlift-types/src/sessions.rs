use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded workout session with the exercises performed, in order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingSession {
    pub id: Uuid,
    pub title: Option<String>,
    pub started_at: Option<NaiveDateTime>,
    pub ended_at: Option<NaiveDateTime>,
    pub archived: bool,
    pub exercises: Vec<ExerciseEntry>,
}

impl TrainingSession {
    /// End time when the session was closed out, else the start time.
    /// Sessions with neither are unusable for recency calculations.
    pub fn effective_time(&self) -> Option<NaiveDateTime> {
        self.ended_at.or(self.started_at)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub name: String,
    pub body_parts: Vec<String>,
    pub completed_sets: Option<u32>,
    pub planned_sets: Option<u32>,
}

impl ExerciseEntry {
    /// Recorded sets win over the plan; an exercise with neither still
    /// counts as one set of load.
    pub fn set_count(&self) -> u32 {
        self.completed_sets.or(self.planned_sets).unwrap_or(1)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewSession {
    pub title: Option<String>,
    pub started_at: Option<NaiveDateTime>,
    pub ended_at: Option<NaiveDateTime>,
    pub exercises: Vec<ExerciseEntry>,
}
