//! Expected command failures, returned to the caller for narration.
//!
//! None of these represent programming errors; every variant carries the
//! context needed to explain the rejection.

use persistence::SaveError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("not enough cash: need {required}, have {available}")]
    InsufficientFunds { required: i64, available: i64 },
    #[error("office is full at {capacity} staff")]
    CapacityExceeded { capacity: usize },
    #[error("no such entry at index {index}")]
    InvalidIndex { index: usize },
    #[error("feature '{name}' is already unlocked")]
    AlreadyUnlocked { name: String },
    #[error("feature '{name}' is not unlocked")]
    FeatureNotUnlocked { name: String },
    #[error("no such feature: '{name}'")]
    UnknownFeature { name: String },
    #[error("an engine needs at least one feature")]
    EmptySelection,
    #[error("no save data in slot {slot}")]
    NoSaveData { slot: u8 },
    #[error("save storage failed: {reason}")]
    Storage { reason: String },
    #[error("the company is bankrupt")]
    Bankrupt,
    #[error("draft is missing {missing}")]
    DraftIncomplete { missing: &'static str },
    #[error("this size needs {required} staff, you have {available}")]
    TeamTooSmall { required: usize, available: usize },
    #[error("slider value {value} for {domain} is outside 0..=10")]
    InvalidSliderValue { domain: String, value: u32 },
    #[error("allocated {allocated} slider points, budget is {budget}")]
    SliderBudgetExceeded { budget: u32, allocated: u32 },
    #[error("the game has no open bugs")]
    NothingToPatch,
    #[error("the office is already at the top tier")]
    OfficeMaxed,
}

impl From<SaveError> for CommandError {
    fn from(e: SaveError) -> Self {
        match e {
            SaveError::NoData(slot) => CommandError::NoSaveData { slot },
            other => CommandError::Storage {
                reason: other.to_string(),
            },
        }
    }
}
