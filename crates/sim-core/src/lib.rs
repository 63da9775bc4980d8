#![deny(warnings)]

//! Core domain models and static catalogue for Studio Tycoon.
//!
//! This crate defines the serializable entity model (projects, staff,
//! engines, mail, the `CompanyState` aggregate) together with the immutable
//! reference tables the simulation draws from, plus validation helpers to
//! guarantee basic invariants.

pub mod catalogue;
pub mod mail;
pub mod project;
pub mod staff;
pub mod state;
pub mod tech;

pub use mail::Message;
pub use project::{Draft, Project, ReviewOutcome};
pub use staff::{Specialization, StaffMember};
pub use state::{validate_state, CompanyState, Settings, Trend, ValidationError};
pub use state::{BANKRUPTCY_FLOOR, STARTING_CASH};
pub use tech::{EngineFeature, GameEngine};
