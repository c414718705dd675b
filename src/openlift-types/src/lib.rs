pub mod feedback;
pub use feedback::{FeedbackEntry, FeedbackError, Feeling, NewFeedback};

pub mod sessions;
pub use sessions::{ExerciseEntry, NewSession, TrainingSession};
