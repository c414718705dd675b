use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub const NOTE_MAX_LEN: usize = 300;
pub const INTENSITY_MAX: u8 = 10;

/// How a body part feels, as reported by the user. Stored and
/// serialized in the uppercase wire form (`GOOD`, `TIGHT`, ...).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Feeling {
    Good,
    Tight,
    Sore,
    Injured,
}

impl Feeling {
    pub fn is_negative(self) -> bool {
        !matches!(self, Feeling::Good)
    }
}

/// One persisted feedback report. History is append-only; entries are
/// superseded for classification by newer entries on the same body
/// part, never overwritten.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub id: Uuid,
    pub body_part: String,
    pub feeling: Feeling,
    pub intensity: Option<u8>,
    pub note: Option<String>,
    pub created_at: NaiveDateTime,
}

impl FeedbackEntry {
    pub fn has_negative_signal(&self) -> bool {
        self.feeling.is_negative()
    }
}

/// Write-path payload, validated at the boundary before anything is
/// persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewFeedback {
    pub body_part: String,
    pub feeling: Feeling,
    pub intensity: Option<u8>,
    pub note: Option<String>,
}

#[derive(Debug, Error)]
#[error("{self:?}")]
pub enum FeedbackError {
    EmptyBodyPart,
    IntensityOutOfRange(u8),
    NoteTooLong(usize),
}

impl NewFeedback {
    /// Trims the note in place and checks the boundary constraints.
    pub fn validate(&mut self) -> Result<(), FeedbackError> {
        if self.body_part.trim().is_empty() {
            return Err(FeedbackError::EmptyBodyPart);
        }

        if let Some(intensity) = self.intensity {
            if intensity > INTENSITY_MAX {
                return Err(FeedbackError::IntensityOutOfRange(intensity));
            }
        }

        if let Some(note) = self.note.as_mut() {
            let trimmed = note.trim().to_string();
            if trimmed.len() > NOTE_MAX_LEN {
                return Err(FeedbackError::NoteTooLong(trimmed.len()));
            }
            *note = trimmed;
        }

        Ok(())
    }
}
