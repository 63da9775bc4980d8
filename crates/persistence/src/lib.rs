#![deny(warnings)]

//! Save-slot persistence for Studio Tycoon.
//!
//! Each slot is one pretty-printed JSON document on disk holding the full
//! [`CompanyState`]. Documents are human-diffable and forward-compatible:
//! optional fields missing from older saves default on load.

use sim_core::{validate_state, CompanyState};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

/// Number of independently addressable save slots.
pub const SLOT_COUNT: u8 = 3;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("slot {0} is out of range 1..={SLOT_COUNT}")]
    InvalidSlot(u8),
    #[error("no save data in slot {0}")]
    NoData(u8),
    #[error("slot {slot} is malformed: {reason}")]
    Malformed { slot: u8, reason: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// What a slot currently holds, for the load menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotStatus {
    Empty,
    Corrupt,
    Occupied {
        company_name: String,
        week: u64,
        cash: i64,
    },
}

/// Reads and writes save slots under a root directory.
pub struct SaveManager {
    root: PathBuf,
}

impl SaveManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// File backing a slot: `save_slot_<n>.json`.
    pub fn slot_path(&self, slot: u8) -> PathBuf {
        self.root.join(format!("save_slot_{slot}.json"))
    }

    fn check_slot(slot: u8) -> Result<(), SaveError> {
        if (1..=SLOT_COUNT).contains(&slot) {
            Ok(())
        } else {
            Err(SaveError::InvalidSlot(slot))
        }
    }

    /// Serialize the full state into a slot, replacing any previous save.
    pub fn save(&self, slot: u8, state: &CompanyState) -> Result<(), SaveError> {
        Self::check_slot(slot)?;
        fs::create_dir_all(&self.root)?;
        let document = serde_json::to_vec_pretty(state).map_err(|e| SaveError::Malformed {
            slot,
            reason: e.to_string(),
        })?;
        let path = self.slot_path(slot);
        fs::write(&path, document)?;
        info!(slot, path = %path.display(), "saved game");
        Ok(())
    }

    /// Reconstruct a state from a slot. Missing slots are reported as
    /// [`SaveError::NoData`]; the caller keeps its current state.
    pub fn load(&self, slot: u8) -> Result<CompanyState, SaveError> {
        Self::check_slot(slot)?;
        let path = self.slot_path(slot);
        if !path.exists() {
            return Err(SaveError::NoData(slot));
        }
        let content = fs::read_to_string(&path)?;
        let mut state: CompanyState =
            serde_json::from_str(&content).map_err(|e| SaveError::Malformed {
                slot,
                reason: e.to_string(),
            })?;
        validate_state(&state).map_err(|e| SaveError::Malformed {
            slot,
            reason: e.to_string(),
        })?;
        state.reset_draft();
        info!(slot, company = %state.company_name, week = state.week, "loaded game");
        Ok(state)
    }

    pub fn slot_exists(&self, slot: u8) -> bool {
        Self::check_slot(slot).is_ok() && self.slot_path(slot).exists()
    }

    /// Status of every slot, for narration in the load menu.
    pub fn slot_summaries(&self) -> Vec<(u8, SlotStatus)> {
        (1..=SLOT_COUNT)
            .map(|slot| {
                let path = self.slot_path(slot);
                if !path.exists() {
                    return (slot, SlotStatus::Empty);
                }
                match fs::read_to_string(&path)
                    .ok()
                    .and_then(|text| serde_json::from_str::<CompanyState>(&text).ok())
                {
                    Some(state) => (
                        slot,
                        SlotStatus::Occupied {
                            company_name: state.company_name,
                            week: state.week,
                            cash: state.cash,
                        },
                    ),
                    None => {
                        warn!(slot, path = %path.display(), "unreadable save slot");
                        (slot, SlotStatus::Corrupt)
                    }
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn populated_state() -> CompanyState {
        let mut state = CompanyState::new("Pixel Forge");
        state.cash = 123_456;
        state.fans = 4_200;
        state.week = 37;
        state.high_score = 8.25;
        state.games_made = 2;
        state.office_tier = 1;
        state.current_trend = Some(sim_core::Trend {
            topic: "Zombies".into(),
            genre: "Action".into(),
            text: "Zombies are trending right now!".into(),
            week_started: 30,
        });
        state.last_trend_week = 30;
        state.last_event_week = 25;
        state.inbox.push(sim_core::Message::bug_report(
            "Complaint about Mars Run".into(),
            "It keeps crashing.".into(),
            33,
            "Mars Run".into(),
        ));
        state
    }

    #[test]
    fn save_load_round_trip_is_exact() {
        let dir = tempdir().unwrap();
        let manager = SaveManager::new(dir.path());
        let state = populated_state();

        manager.save(2, &state).unwrap();
        let loaded = manager.load(2).unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn loading_empty_slot_is_a_reported_failure() {
        let dir = tempdir().unwrap();
        let manager = SaveManager::new(dir.path());
        assert!(matches!(manager.load(1), Err(SaveError::NoData(1))));
        assert!(!manager.slot_exists(1));
    }

    #[test]
    fn slots_are_independent() {
        let dir = tempdir().unwrap();
        let manager = SaveManager::new(dir.path());

        let mut first = populated_state();
        first.company_name = "First".into();
        let mut second = populated_state();
        second.company_name = "Second".into();

        manager.save(1, &first).unwrap();
        manager.save(3, &second).unwrap();

        assert_eq!(manager.load(1).unwrap().company_name, "First");
        assert_eq!(manager.load(3).unwrap().company_name, "Second");
        assert!(matches!(manager.load(2), Err(SaveError::NoData(2))));
    }

    #[test]
    fn out_of_range_slot_is_rejected() {
        let dir = tempdir().unwrap();
        let manager = SaveManager::new(dir.path());
        assert!(matches!(
            manager.save(0, &populated_state()),
            Err(SaveError::InvalidSlot(0))
        ));
        assert!(matches!(manager.load(4), Err(SaveError::InvalidSlot(4))));
    }

    #[test]
    fn summaries_report_all_slot_states() {
        let dir = tempdir().unwrap();
        let manager = SaveManager::new(dir.path());
        manager.save(1, &populated_state()).unwrap();
        std::fs::write(manager.slot_path(2), "{ not json").unwrap();

        let summaries = manager.slot_summaries();
        assert_eq!(summaries.len(), SLOT_COUNT as usize);
        assert!(matches!(
            &summaries[0].1,
            SlotStatus::Occupied { company_name, week: 37, .. } if company_name == "Pixel Forge"
        ));
        assert_eq!(summaries[1].1, SlotStatus::Corrupt);
        assert_eq!(summaries[2].1, SlotStatus::Empty);
    }

    #[test]
    fn corrupt_document_is_malformed_not_panic() {
        let dir = tempdir().unwrap();
        let manager = SaveManager::new(dir.path());
        std::fs::write(manager.slot_path(1), "[1, 2, 3]").unwrap();
        assert!(matches!(
            manager.load(1),
            Err(SaveError::Malformed { slot: 1, .. })
        ));
    }
}
