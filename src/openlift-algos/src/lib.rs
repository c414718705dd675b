pub(crate) mod body_part;
pub use body_part::{BodyPart, GENERAL_KEY};

pub(crate) mod rest_windows;
pub use rest_windows::{rest_window_hours, DEFAULT_REST_WINDOW_HOURS};

pub(crate) mod aggregate;
pub use aggregate::{BodyPartAggregate, SessionAggregator};

pub(crate) mod feedback;
pub use feedback::{attach_feedback, latest_by_part};

pub(crate) mod status;
pub use status::{classify, Status};

pub(crate) mod readiness;
pub use readiness::{
    summarize, NextEligible, ReadinessEngine, ReadinessSummary, RecoveryState,
};

pub mod helpers;
