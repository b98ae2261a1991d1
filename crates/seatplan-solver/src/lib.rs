//! seatplan Solver Engine
//!
//! This crate provides the two components of the seating engine:
//! - The constraint evaluator: a pure pass that reports violations and a
//!   display score for any chart
//! - The placement generator: greedy construction by constraint
//!   precedence, followed by a bounded randomized repair loop
//!
//! The generator only ever calls the public evaluator, so a caller sees
//! the same numbers the repair loop steered by.
//!
//! ```
//! use seatplan_core::{RoomConfig, Student, StudentId};
//! use seatplan_solver::{evaluate, SeatingGenerator};
//!
//! let roster = vec![
//!     Student::new(StudentId::new(1), "Nora").separated_from(StudentId::new(2)),
//!     Student::new(StudentId::new(2), "Filip"),
//!     Student::new(StudentId::new(3), "Ada"),
//! ];
//! let room = RoomConfig::new(2, 3);
//!
//! let mut generator = SeatingGenerator::with_seed(7);
//! let layout = generator.generate(&roster, &room)?;
//! let report = evaluate(&layout, &room);
//! assert!(report.score <= 100);
//! # Ok::<(), seatplan_core::SeatingError>(())
//! ```

pub mod evaluator;
pub mod generator;
pub mod grid;

#[cfg(test)]
mod evaluator_tests;

pub use evaluator::evaluate;
pub use generator::{generate, SeatingGenerator, DEFAULT_REPAIR_BUDGET};
