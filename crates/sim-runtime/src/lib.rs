//! The headless simulation engine.
//!
//! [`Studio`] wraps one [`sim_core::CompanyState`] together with a seeded
//! random stream and a save-slot manager, and exposes every command a
//! presentation layer can issue. Commands validate before they mutate, so
//! a rejected command leaves the state untouched.

#![deny(warnings)]

mod error;
mod studio;

pub use error::CommandError;
pub use studio::{Notice, ReleaseReport, SimConfig, Studio};
