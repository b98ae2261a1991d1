//! Shared test fixtures for seatplan crates.
//!
//! This crate provides rosters and rooms for testing. It depends only on
//! `seatplan-core`, so the solver crate can use it as a dev-dependency
//! without a cycle.
//!
//! - [`classroom`] - sample rosters and the standard demo room
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! seatplan-test = { workspace = true }
//! ```

pub mod classroom;

pub use classroom::{sample_roster, standard_room};
