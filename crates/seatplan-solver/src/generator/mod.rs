//! Seating generation: greedy construction plus randomized repair
//!
//! The generator seats a roster in two phases:
//! - Construction places students by constraint precedence (fixed seats,
//!   zone locks, then a shuffled pool)
//! - Repair runs a bounded loop of randomized swaps, keeping only those
//!   that do not increase the violation count
//!
//! Both phases draw from one seeded ChaCha stream, so a generator built
//! with [`SeatingGenerator::with_seed`] replays the exact same layout.

mod construction;
mod repair;
mod validate;


use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use seatplan_core::{Layout, Result, RoomConfig, Student};
use tracing::{debug, info};

/// Repair iterations granted when the caller does not override the budget.
pub const DEFAULT_REPAIR_BUDGET: u64 = 2000;

/// Seating generator carrying its own random source and repair budget.
///
/// Construction order and repair targeting are driven by the carried RNG;
/// everything else is deterministic, so seed plus inputs fully determine
/// the output.
///
/// # Examples
///
/// ```
/// use seatplan_core::{RoomConfig, Student, StudentId};
/// use seatplan_solver::SeatingGenerator;
///
/// let roster = vec![
///     Student::new(StudentId::new(1), "Ada"),
///     Student::new(StudentId::new(2), "Emil"),
/// ];
/// let room = RoomConfig::new(2, 2);
///
/// let mut generator = SeatingGenerator::with_seed(42);
/// let layout = generator.generate(&roster, &room)?;
/// assert_eq!(layout.occupied_count(), 2);
/// # Ok::<(), seatplan_core::SeatingError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SeatingGenerator {
    rng: ChaCha8Rng,
    repair_budget: u64,
}

impl SeatingGenerator {
    /// Creates a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(ChaCha8Rng::from_os_rng())
    }

    /// Creates a generator with a fixed seed. Identical seeds, roster,
    /// and room reproduce the identical layout.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(rng: ChaCha8Rng) -> Self {
        SeatingGenerator {
            rng,
            repair_budget: DEFAULT_REPAIR_BUDGET,
        }
    }

    /// Replaces the repair iteration budget. Zero disables repair and
    /// returns the constructed chart as-is.
    pub fn repair_budget(mut self, budget: u64) -> Self {
        self.repair_budget = budget;
        self
    }

    /// Seats the roster in the room.
    ///
    /// Fails fast on malformed rooms and rosters (see
    /// [`SeatingError`](seatplan_core::SeatingError)); past validation a
    /// layout always comes back, violation-free or not. Callers learn the
    /// true state by running [`evaluate`](crate::evaluate) on the result.
    pub fn generate(&mut self, roster: &[Student], config: &RoomConfig) -> Result<Layout> {
        validate::validate(roster, config)?;

        debug!(
            event = "generate_start",
            students = roster.len(),
            rows = config.rows,
            cols = config.cols,
            void_seats = config.void_seats.len(),
        );

        let mut layout = construction::build_initial(roster, config, &mut self.rng);
        debug!(event = "construction_end", placed = layout.occupied_count());

        let outcome = repair::repair(&mut layout, config, &mut self.rng, self.repair_budget);
        info!(
            event = "repair_end",
            iterations = outcome.iterations,
            budget = self.repair_budget,
            remaining_violations = outcome.remaining,
        );

        Ok(layout)
    }
}

impl Default for SeatingGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Seats the roster with a fresh entropy-seeded generator and the default
/// repair budget. The convenience form of [`SeatingGenerator`] for callers
/// that do not need reproducibility.
pub fn generate(roster: &[Student], config: &RoomConfig) -> Result<Layout> {
    let mut generator = SeatingGenerator::new();
    generator.generate(roster, config)
}
