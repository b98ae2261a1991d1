//! seatplan-core - Domain model for the seatplan seating engine
//!
//! This crate provides the data the engine operates on:
//! - Students with separations, pairings, zone locks, and fixed seats
//! - Room configuration with void seats and soft-rule toggles
//! - Seating layouts and the evaluator's violation reports
//! - The error type for malformed rooms and rosters
//!
//! The algorithms live in `seatplan-solver`; this crate stays free of
//! randomness and policy so editors and storage layers can depend on it
//! alone. Enable the `serde` feature to serialize the whole model.

pub mod domain;
pub mod error;

pub use domain::{
    AcademicLevel, Evaluation, Gender, Layout, RoomConfig, RowZone, SeatIndex, Student, StudentId,
    Violation, ViolationKind,
};
pub use error::{Result, SeatingError};
