use std::collections::BTreeMap;
use std::fmt::Display;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use openlift_types::{FeedbackEntry, TrainingSession};
use uuid::Uuid;

use crate::aggregate::{BodyPartAggregate, SessionAggregator};
use crate::body_part::BodyPart;
use crate::feedback::attach_feedback;
use crate::helpers::format_hm::FormatHM;
use crate::helpers::time_math::{hours_between, round1};
use crate::rest_windows::rest_window_hours;
use crate::status::{classify, Status};

/// At most this many ready parts are suggested as the day's focus.
const SUGGESTED_FOCUS_CAP: usize = 5;

/// The readiness verdict for one body part plus everything that went
/// into it.
#[derive(Clone, Debug)]
pub struct RecoveryState {
    pub body_part: BodyPart,
    pub status: Status,
    pub last_trained: Option<NaiveDateTime>,
    pub hours_since_last: Option<f64>,
    pub rest_window_hours: f64,
    pub total_sets: u32,
    pub session_count: usize,
    pub sessions_last_week: u32,
    pub avg_sets_per_session: f64,
    pub daily_trend: BTreeMap<NaiveDate, u32>,
    pub recent_sessions: Vec<Uuid>,
    pub feedback: Option<FeedbackEntry>,
}

impl RecoveryState {
    fn from_aggregate(aggregate: BodyPartAggregate, now: NaiveDateTime) -> Self {
        let hours_since_last = aggregate.last_trained.map(|t| hours_between(t, now));
        let rest_window = rest_window_hours(&aggregate.body_part.key);
        let signal = aggregate.feedback.as_ref().map(|f| f.feeling);

        Self {
            status: classify(hours_since_last, rest_window, signal),
            hours_since_last,
            rest_window_hours: rest_window,
            last_trained: aggregate.last_trained,
            total_sets: aggregate.total_sets,
            session_count: aggregate.session_count(),
            sessions_last_week: aggregate.sessions_last_week,
            avg_sets_per_session: aggregate.avg_sets_per_session(),
            daily_trend: aggregate.daily_trend,
            recent_sessions: aggregate.recent_sessions,
            feedback: aggregate.feedback,
            body_part: aggregate.body_part,
        }
    }

    /// Hours left until the rest window has fully elapsed.
    pub fn hours_until_eligible(&self) -> f64 {
        let elapsed = self.hours_since_last.unwrap_or(self.rest_window_hours);
        round1((self.rest_window_hours - elapsed).max(0.0))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NextEligible {
    pub key: String,
    pub hours_remaining: f64,
}

/// Aggregate view over all per-part verdicts for one computation.
#[derive(Clone, Debug)]
pub struct ReadinessSummary {
    pub computed_at: NaiveDateTime,
    pub ready: usize,
    pub caution: usize,
    pub rest: usize,
    pub pain: usize,
    pub suggested_focus: Vec<String>,
    pub pain_alerts: Vec<String>,
    pub next_eligible: Vec<NextEligible>,
}

/// Order the states for presentation and derive the summary. Least
/// urgent status first; within a status the longer-idle part sorts
/// first, with never-trained counting as the most idle.
pub fn summarize(
    mut states: Vec<RecoveryState>,
    computed_at: NaiveDateTime,
) -> (Vec<RecoveryState>, ReadinessSummary) {
    states.sort_by(|a, b| {
        a.status
            .severity()
            .cmp(&b.status.severity())
            .then_with(|| {
                let a_hours = a.hours_since_last.unwrap_or(f64::INFINITY);
                let b_hours = b.hours_since_last.unwrap_or(f64::INFINITY);
                b_hours.total_cmp(&a_hours)
            })
            .then_with(|| a.body_part.key.cmp(&b.body_part.key))
    });

    let count = |status: Status| states.iter().filter(|s| s.status == status).count();

    let suggested_focus = states
        .iter()
        .filter(|s| s.status == Status::Ready)
        .take(SUGGESTED_FOCUS_CAP)
        .map(|s| s.body_part.key.clone())
        .collect();

    let pain_alerts = states
        .iter()
        .filter(|s| s.status == Status::Pain && s.feedback.is_some())
        .map(|s| s.body_part.key.clone())
        .collect();

    let mut next_eligible = states
        .iter()
        .filter(|s| matches!(s.status, Status::Rest | Status::Caution))
        .map(|s| NextEligible {
            key: s.body_part.key.clone(),
            hours_remaining: s.hours_until_eligible(),
        })
        .collect::<Vec<_>>();
    next_eligible.sort_by(|a, b| a.hours_remaining.total_cmp(&b.hours_remaining));

    let summary = ReadinessSummary {
        computed_at,
        ready: count(Status::Ready),
        caution: count(Status::Caution),
        rest: count(Status::Rest),
        pain: count(Status::Pain),
        suggested_focus,
        pain_alerts,
        next_eligible,
    };

    (states, summary)
}

/// The engine entry point: a pure function from the loaded history,
/// the feedback log and a fixed `now` to the per-part verdicts and
/// their summary. Builds everything fresh on every call.
#[derive(Default)]
pub struct ReadinessEngine {
    pub aggregator: SessionAggregator,
}

impl ReadinessEngine {
    pub fn new(lookback: TimeDelta) -> Self {
        Self {
            aggregator: SessionAggregator::new(lookback),
        }
    }

    pub fn compute(
        &self,
        sessions: &[TrainingSession],
        feedback: &[FeedbackEntry],
        now: NaiveDateTime,
    ) -> (Vec<RecoveryState>, ReadinessSummary) {
        let mut aggregates = self.aggregator.aggregate(sessions, now);
        attach_feedback(&mut aggregates, feedback);

        let states = aggregates
            .into_values()
            .map(|aggregate| RecoveryState::from_aggregate(aggregate, now))
            .collect();

        summarize(states, now)
    }
}

impl Display for RecoveryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{:<16} {:<8}",
            self.body_part.label, self.status
        ))?;

        match self.hours_since_last {
            Some(hours) => f.write_fmt(format_args!(
                " trained {} ago (window {}h)",
                hours.format_hm(),
                self.rest_window_hours
            ))?,
            None => f.write_str(" not trained in window")?,
        }

        f.write_fmt(format_args!(
            ", {} sessions ({} this week), avg {:.1} sets",
            self.session_count, self.sessions_last_week, self.avg_sets_per_session
        ))?;

        if let Some(feedback) = &self.feedback {
            f.write_fmt(format_args!(", feels {}", feedback.feeling))?;
        }

        Ok(())
    }
}

impl Display for ReadinessSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Readiness at {}", self.computed_at)?;
        writeln!(
            f,
            "Ready: {} | Caution: {} | Rest: {} | Pain: {}",
            self.ready, self.caution, self.rest, self.pain
        )?;

        if !self.suggested_focus.is_empty() {
            writeln!(f, "Focus today: {}", self.suggested_focus.join(", "))?;
        }
        if !self.pain_alerts.is_empty() {
            writeln!(f, "Pain alerts: {}", self.pain_alerts.join(", "))?;
        }

        write!(f, "Next eligible:")?;
        if self.next_eligible.is_empty() {
            write!(f, " -")?;
        }
        for entry in &self.next_eligible {
            write!(
                f,
                "\n  {:<16} in {}",
                entry.key,
                entry.hours_remaining.format_hm()
            )?;
        }

        Ok(())
    }
}
