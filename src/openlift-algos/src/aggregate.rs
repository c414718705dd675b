use std::collections::{BTreeMap, BTreeSet};

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use openlift_types::{FeedbackEntry, TrainingSession};
use uuid::Uuid;

use crate::body_part::BodyPart;
use crate::helpers::time_math::round1;

/// Bounded per-part session list kept for display.
const RECENT_SESSIONS_CAP: usize = 5;

/// Everything the lookback window says about one body part, folded
/// from the raw session history.
#[derive(Clone, Debug)]
pub struct BodyPartAggregate {
    pub body_part: BodyPart,
    pub last_trained: Option<NaiveDateTime>,
    pub total_sets: u32,
    pub session_ids: BTreeSet<Uuid>,
    pub sessions_last_week: u32,
    pub daily_trend: BTreeMap<NaiveDate, u32>,
    pub recent_sessions: Vec<Uuid>,
    pub feedback: Option<FeedbackEntry>,
}

impl BodyPartAggregate {
    pub(crate) fn empty(body_part: BodyPart) -> Self {
        Self {
            body_part,
            last_trained: None,
            total_sets: 0,
            session_ids: BTreeSet::new(),
            sessions_last_week: 0,
            daily_trend: BTreeMap::new(),
            recent_sessions: Vec::new(),
            feedback: None,
        }
    }

    pub fn session_count(&self) -> usize {
        self.session_ids.len()
    }

    pub fn avg_sets_per_session(&self) -> f64 {
        if self.session_ids.is_empty() {
            return 0.0;
        }
        round1(f64::from(self.total_sets) / self.session_ids.len() as f64)
    }
}

pub struct SessionAggregator {
    pub lookback: TimeDelta,
}

impl Default for SessionAggregator {
    fn default() -> Self {
        Self {
            lookback: TimeDelta::days(30),
        }
    }
}

impl SessionAggregator {
    const TRAILING_WEEK: TimeDelta = TimeDelta::days(7);

    pub fn new(lookback: TimeDelta) -> Self {
        Self { lookback }
    }

    /// Fold sessions into one aggregate per canonical body part. A
    /// session fans out to every distinct part it touches, but counts
    /// only once per part no matter how many of its exercises repeat
    /// that part. Order-independent apart from the bounded
    /// `recent_sessions` display list.
    pub fn aggregate(
        &self,
        sessions: &[TrainingSession],
        now: NaiveDateTime,
    ) -> BTreeMap<String, BodyPartAggregate> {
        let mut usable = sessions
            .iter()
            .filter(|s| !s.archived)
            .filter_map(|s| s.effective_time().map(|t| (t, s)))
            .filter(|(t, _)| now - *t <= self.lookback)
            .collect::<Vec<_>>();

        // Most-recent-first so the per-part session lists come out in
        // display order.
        usable.sort_by_key(|(t, _)| std::cmp::Reverse(*t));

        let mut aggregates = BTreeMap::new();

        for (time, session) in usable {
            for (part, sets) in Self::fan_out(session) {
                let entry = aggregates
                    .entry(part.key.clone())
                    .or_insert_with(|| BodyPartAggregate::empty(part));

                if !entry.session_ids.insert(session.id) {
                    continue;
                }

                entry.last_trained = Some(entry.last_trained.map_or(time, |t| t.max(time)));
                entry.total_sets += sets;
                if now - time <= Self::TRAILING_WEEK {
                    entry.sessions_last_week += 1;
                }
                if entry.recent_sessions.len() < RECENT_SESSIONS_CAP {
                    entry.recent_sessions.push(session.id);
                }
                *entry.daily_trend.entry(time.date()).or_insert(0) += sets;
            }
        }

        aggregates
    }

    /// The distinct body parts one session touches, each with the
    /// session's summed set count for that part. Untagged exercises
    /// land on the general full-body key; a part that only saw
    /// zero-set exercises still registers one set of load.
    fn fan_out(session: &TrainingSession) -> Vec<(BodyPart, u32)> {
        let mut by_part: BTreeMap<String, (BodyPart, u32)> = BTreeMap::new();

        for exercise in &session.exercises {
            let sets = exercise.set_count();
            let parts = if exercise.body_parts.is_empty() {
                vec![BodyPart::general()]
            } else {
                exercise
                    .body_parts
                    .iter()
                    .map(|raw| BodyPart::parse(raw))
                    .collect()
            };

            let mut seen = BTreeSet::new();
            for part in parts {
                if !seen.insert(part.key.clone()) {
                    continue;
                }
                by_part.entry(part.key.clone()).or_insert((part, 0)).1 += sets;
            }
        }

        by_part
            .into_values()
            .map(|(part, sets)| (part, sets.max(1)))
            .collect()
    }
}
