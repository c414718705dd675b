use std::collections::BTreeMap;

use openlift_types::FeedbackEntry;

use crate::aggregate::BodyPartAggregate;
use crate::body_part::BodyPart;

/// Attach the authoritative feedback entry to each aggregate. A body
/// part that only has feedback (never trained in the window) still
/// gets an aggregate so it shows up in the readiness output.
pub fn attach_feedback(
    aggregates: &mut BTreeMap<String, BodyPartAggregate>,
    entries: &[FeedbackEntry],
) {
    for entry in latest_by_part(entries) {
        let part = BodyPart::parse(&entry.body_part);
        aggregates
            .entry(part.key.clone())
            .or_insert_with(|| BodyPartAggregate::empty(part))
            .feedback = Some(entry);
    }
}

/// Reduce a feedback history to the most recent entry per canonical
/// body part. Equal timestamps are broken by entry id so the result
/// is deterministic.
pub fn latest_by_part(entries: &[FeedbackEntry]) -> Vec<FeedbackEntry> {
    let mut latest: BTreeMap<String, &FeedbackEntry> = BTreeMap::new();

    for entry in entries {
        let key = BodyPart::parse(&entry.body_part).key;
        match latest.get(&key) {
            Some(current) if (current.created_at, current.id) >= (entry.created_at, entry.id) => {}
            _ => {
                latest.insert(key, entry);
            }
        }
    }

    latest.into_values().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
    use openlift_types::Feeling;
    use uuid::Uuid;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 30)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn entry(body_part: &str, feeling: Feeling, created_at: NaiveDateTime) -> FeedbackEntry {
        FeedbackEntry {
            id: Uuid::new_v4(),
            body_part: body_part.to_string(),
            feeling,
            intensity: None,
            note: None,
            created_at,
        }
    }

    #[test]
    fn newest_entry_wins_per_part() {
        let entries = vec![
            entry("shoulders", Feeling::Good, at(8)),
            entry("shoulders", Feeling::Sore, at(9)),
            entry("quads", Feeling::Tight, at(7)),
        ];

        let latest = latest_by_part(&entries);
        assert_eq!(latest.len(), 2);

        let shoulders = latest
            .iter()
            .find(|e| BodyPart::parse(&e.body_part).key == "shoulders")
            .unwrap();
        assert_eq!(shoulders.feeling, Feeling::Sore);
    }

    #[test]
    fn name_variants_reduce_to_one_part() {
        let entries = vec![
            entry("Lower_Back", Feeling::Good, at(8)),
            entry("lower back", Feeling::Tight, at(9)),
        ];

        let latest = latest_by_part(&entries);
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].feeling, Feeling::Tight);
    }

    #[test]
    fn equal_timestamps_break_ties_by_id() {
        let mut first = entry("chest", Feeling::Good, at(8));
        let mut second = entry("chest", Feeling::Sore, at(8));
        first.id = Uuid::from_u128(1);
        second.id = Uuid::from_u128(2);

        let latest = latest_by_part(&[first.clone(), second.clone()]);
        assert_eq!(latest[0].id, second.id);

        // Input order must not matter.
        let latest = latest_by_part(&[second.clone(), first]);
        assert_eq!(latest[0].id, second.id);
    }

    #[test]
    fn feedback_only_part_gets_an_aggregate() {
        let mut aggregates = BTreeMap::new();
        let entries = vec![entry("hamstrings", Feeling::Tight, at(8))];

        attach_feedback(&mut aggregates, &entries);

        let hamstrings = &aggregates["hamstrings"];
        assert!(hamstrings.last_trained.is_none());
        assert_eq!(hamstrings.total_sets, 0);
        assert_eq!(
            hamstrings.feedback.as_ref().unwrap().feeling,
            Feeling::Tight
        );
    }

    #[test]
    fn attached_entry_is_verbatim() {
        let mut aggregates = BTreeMap::new();
        let mut entry = entry("calves", Feeling::Sore, at(8));
        entry.intensity = Some(7);
        entry.note = Some("cramped on the last set".to_string());

        attach_feedback(&mut aggregates, std::slice::from_ref(&entry));

        let attached = aggregates["calves"].feedback.as_ref().unwrap();
        assert_eq!(attached, &entry);
        assert!(attached.has_negative_signal());
    }

    #[test]
    fn older_entries_do_not_disturb_attachment() {
        let mut aggregates = BTreeMap::new();
        let entries = vec![
            entry("chest", Feeling::Sore, at(9)),
            entry("chest", Feeling::Good, at(8) - TimeDelta::days(1)),
        ];

        attach_feedback(&mut aggregates, &entries);
        assert_eq!(
            aggregates["chest"].feedback.as_ref().unwrap().feeling,
            Feeling::Sore
        );
    }
}
