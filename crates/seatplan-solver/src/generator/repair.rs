//! Randomized repair of the constructed chart

use rand::Rng;
use seatplan_core::{Layout, RoomConfig};
use tracing::trace;

use crate::evaluator::evaluate;

/// What the repair loop did, for the generator's closing log event.
pub(crate) struct RepairOutcome {
    pub iterations: u64,
    pub remaining: usize,
}

/// Runs up to `budget` randomized swap attempts against the chart.
///
/// Each iteration picks one current violation uniformly at random, tries
/// to swap its student with a uniformly chosen target seat, and keeps the
/// swap only if the violation count did not grow; a worsening swap is
/// undone. Illegal candidates consume their iteration without touching
/// the chart: a void or identical target, a fixed-seat student on either
/// side, or a zone lock the swap would break.
pub(crate) fn repair(
    layout: &mut Layout,
    config: &RoomConfig,
    rng: &mut impl Rng,
    budget: u64,
) -> RepairOutcome {
    let mut current = evaluate(layout, config);
    let mut iterations = 0u64;

    for _ in 0..budget {
        if current.is_clean() {
            break;
        }
        iterations += 1;

        let pick = rng.random_range(0..current.violations.len());
        let violation = current.violations[pick];

        let Some(src) = layout.seat_of(violation.student) else {
            continue;
        };
        let Some(mover) = layout.student_at(src) else {
            continue;
        };
        if mover.fixed_seat.is_some() {
            continue;
        }
        let mover_zone = mover.zone_lock;

        let dst = rng.random_range(0..layout.seat_count());
        if dst == src || config.is_void(dst) {
            continue;
        }
        let occupant = layout.student_at(dst);
        if occupant.is_some_and(|s| s.fixed_seat.is_some()) {
            continue;
        }
        if mover_zone.is_some_and(|zone| !config.in_zone(dst, zone)) {
            continue;
        }
        if occupant
            .and_then(|s| s.zone_lock)
            .is_some_and(|zone| !config.in_zone(src, zone))
        {
            continue;
        }

        layout.swap_seats(src, dst);
        let candidate = evaluate(layout, config);
        if candidate.violations.len() > current.violations.len() {
            layout.swap_seats(src, dst);
        } else {
            trace!(
                event = "swap_accepted",
                from = src,
                to = dst,
                violations_before = current.violations.len(),
                violations_after = candidate.violations.len(),
            );
            current = candidate;
        }
    }

    RepairOutcome {
        iterations,
        remaining: current.violations.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use seatplan_core::{RowZone, Student, StudentId};

    fn sid(n: u32) -> StudentId {
        StudentId::new(n)
    }

    fn student(n: u32) -> Student {
        Student::new(sid(n), format!("s{n}"))
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(11)
    }

    #[test]
    fn test_clean_chart_spends_no_iterations() {
        let room = RoomConfig::new(2, 2);
        let mut layout = Layout::empty(room.capacity());
        layout.place(0, student(1));

        let outcome = repair(&mut layout, &room, &mut rng(), 2000);
        assert_eq!(outcome.iterations, 0);
        assert_eq!(outcome.remaining, 0);
    }

    #[test]
    fn test_resolves_an_adjacent_separation() {
        // A and B start side by side in a room with spare seats.
        let room = RoomConfig::new(2, 3);
        let mut layout = Layout::empty(room.capacity());
        layout.place(0, student(1).separated_from(sid(2)));
        layout.place(1, student(2));
        layout.place(4, student(3));

        let outcome = repair(&mut layout, &room, &mut rng(), 2000);
        assert_eq!(outcome.remaining, 0);
        assert!(evaluate(&layout, &room).is_clean());
    }

    #[test]
    fn test_never_worsens_the_chart() {
        let room = RoomConfig::new(2, 3).with_gender_balance(true);
        let mut layout = Layout::empty(room.capacity());
        layout.place(0, student(1).separated_from(sid(2)));
        layout.place(1, student(2).separated_from(sid(1)));
        layout.place(2, student(3));

        let before = evaluate(&layout, &room).violations.len();
        let outcome = repair(&mut layout, &room, &mut rng(), 50);
        assert!(outcome.remaining <= before);
        assert_eq!(evaluate(&layout, &room).violations.len(), outcome.remaining);
    }

    #[test]
    fn test_fixed_students_never_move() {
        // The only violation belongs to a fixed student, so every
        // iteration is skipped and the chart survives untouched.
        let room = RoomConfig::new(2, 2);
        let mut layout = Layout::empty(room.capacity());
        layout.place(0, student(1).fixed_at(0).separated_from(sid(2)));
        layout.place(1, student(2));
        let before = layout.clone();

        let outcome = repair(&mut layout, &room, &mut rng(), 200);
        assert_eq!(layout, before);
        assert_eq!(outcome.iterations, 200);
        assert_eq!(outcome.remaining, 1);
    }

    #[test]
    fn test_zone_locked_students_stay_in_their_row() {
        let room = RoomConfig::new(3, 3);
        let mut layout = Layout::empty(room.capacity());
        layout.place(0, student(1).locked_to(RowZone::Front).separated_from(sid(2)));
        layout.place(1, student(2));
        layout.place(4, student(3));

        repair(&mut layout, &room, &mut rng(), 2000);
        let seat = layout.seat_of(sid(1)).unwrap();
        assert_eq!(room.row_of(seat), 0);
    }

    #[test]
    fn test_voids_stay_empty_through_repair() {
        let room = RoomConfig::new(2, 3).with_void_seat(5);
        let mut layout = Layout::empty(room.capacity());
        layout.place(0, student(1).separated_from(sid(2)));
        layout.place(1, student(2));

        repair(&mut layout, &room, &mut rng(), 2000);
        assert_eq!(layout.student_at(5), None);
    }
}
