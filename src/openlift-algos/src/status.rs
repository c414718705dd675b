use std::fmt::Display;

use openlift_types::Feeling;

/// Readiness verdict for one body part, least urgent first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    Ready,
    Caution,
    Rest,
    Pain,
}

impl Status {
    pub fn severity(self) -> u8 {
        match self {
            Status::Ready => 0,
            Status::Caution => 1,
            Status::Rest => 2,
            Status::Pain => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ready => "ready",
            Status::Caution => "caution",
            Status::Rest => "rest",
            Status::Pain => "pain",
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Combine elapsed rest against the policy window with the latest
/// subjective signal. Sore and injured reports win outright. A tight
/// report caps the verdict at caution: it never reads as pain, and it
/// keeps a time-wise ready part out of the ready tier.
pub fn classify(
    hours_since_last: Option<f64>,
    rest_window_hours: f64,
    signal: Option<Feeling>,
) -> Status {
    if matches!(signal, Some(Feeling::Sore | Feeling::Injured)) {
        return Status::Pain;
    }

    let by_time = match hours_since_last {
        None => Status::Ready,
        Some(h) if h >= rest_window_hours => Status::Ready,
        Some(h) if h >= rest_window_hours * 0.5 => Status::Caution,
        Some(_) => Status::Rest,
    };

    if by_time == Status::Ready && matches!(signal, Some(Feeling::Tight)) {
        return Status::Caution;
    }

    by_time
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recently_trained_part_rests() {
        // 10h into a 48h window is below the halfway mark.
        assert_eq!(classify(Some(10.0), 48.0, None), Status::Rest);
    }

    #[test]
    fn halfway_through_window_is_caution() {
        assert_eq!(classify(Some(24.0), 48.0, None), Status::Caution);
        assert_eq!(classify(Some(47.9), 48.0, None), Status::Caution);
    }

    #[test]
    fn full_window_elapsed_is_ready() {
        assert_eq!(classify(Some(48.0), 48.0, None), Status::Ready);
        assert_eq!(classify(Some(200.0), 48.0, None), Status::Ready);
    }

    #[test]
    fn never_trained_is_ready() {
        assert_eq!(classify(None, 48.0, None), Status::Ready);
        assert_eq!(classify(None, 48.0, Some(Feeling::Good)), Status::Ready);
    }

    #[test]
    fn sore_or_injured_forces_pain_regardless_of_rest() {
        for hours in [None, Some(1.0), Some(500.0)] {
            assert_eq!(classify(hours, 48.0, Some(Feeling::Sore)), Status::Pain);
            assert_eq!(classify(hours, 48.0, Some(Feeling::Injured)), Status::Pain);
        }
    }

    #[test]
    fn tight_caps_a_ready_part_at_caution() {
        // 72h into a 48h window would be ready on time alone.
        assert_eq!(classify(Some(72.0), 48.0, Some(Feeling::Tight)), Status::Caution);
        assert_eq!(classify(None, 48.0, Some(Feeling::Tight)), Status::Caution);
    }

    #[test]
    fn tight_does_not_soften_rest() {
        assert_eq!(classify(Some(10.0), 48.0, Some(Feeling::Tight)), Status::Rest);
        assert_eq!(
            classify(Some(24.0), 48.0, Some(Feeling::Tight)),
            Status::Caution
        );
    }

    #[test]
    fn good_feedback_changes_nothing() {
        assert_eq!(classify(Some(72.0), 48.0, Some(Feeling::Good)), Status::Ready);
        assert_eq!(classify(Some(10.0), 48.0, Some(Feeling::Good)), Status::Rest);
    }

    #[test]
    fn classification_is_pure() {
        let first = classify(Some(30.0), 48.0, Some(Feeling::Tight));
        let second = classify(Some(30.0), 48.0, Some(Feeling::Tight));
        assert_eq!(first, second);
    }

    #[test]
    fn more_rest_never_regresses_the_verdict() {
        let mut best = 0;
        let mut hours = 0.0;
        while hours <= 96.0 {
            let severity = match classify(Some(hours), 48.0, None) {
                Status::Ready => 2,
                Status::Caution => 1,
                Status::Rest => 0,
                Status::Pain => unreachable!("no signal given"),
            };
            assert!(severity >= best, "regressed at {hours}h");
            best = severity;
            hours += 0.25;
        }
    }

    #[test]
    fn severity_orders_least_urgent_first() {
        assert!(Status::Ready.severity() < Status::Caution.severity());
        assert!(Status::Caution.severity() < Status::Rest.severity());
        assert!(Status::Rest.severity() < Status::Pain.severity());
    }
}
