//! Pure constraint evaluation over a seating chart

use seatplan_core::{Evaluation, Layout, RoomConfig, SeatIndex, StudentId, Violation, ViolationKind};

use crate::grid;

/// Evaluates a chart against the room's rules.
///
/// Pure and infallible: identical input yields identical output, empty
/// seats are skipped, constraint ids that match no occupant are ignored,
/// and a layout that does not match the room shape is read as far as its
/// seats go. Never panics.
///
/// For every occupied seat, in scan order:
/// 1. each separation found in the eight surrounding seats
/// 2. each pairing absent from both side seats
/// 3. each same-gender side neighbor, when `gender_balance` is on and the
///    student's gender is specified
/// 4. each side neighbor sharing an extreme academic level, when
///    `academic_diversity` is on
///
/// # Examples
///
/// ```
/// use seatplan_core::{Layout, RoomConfig, Student, StudentId};
/// use seatplan_solver::evaluate;
///
/// let room = RoomConfig::new(1, 3);
/// let a = StudentId::new(1);
/// let b = StudentId::new(2);
///
/// let mut layout = Layout::empty(room.capacity());
/// layout.place(0, Student::new(a, "A").paired_with(b));
/// layout.place(2, Student::new(b, "B"));
///
/// // B sits in the same row but not directly beside A.
/// let result = evaluate(&layout, &room);
/// assert_eq!(result.score, 99);
/// assert_eq!(result.violations.len(), 1);
/// ```
pub fn evaluate(layout: &Layout, config: &RoomConfig) -> Evaluation {
    let mut violations = Vec::new();
    if config.rows == 0 || config.cols == 0 {
        return Evaluation::from_violations(violations);
    }

    for (seat, student) in layout.occupied() {
        let around = grid::king_neighbors(config, seat);
        for &enemy in &student.separations {
            for &neighbor in &around {
                if occupant_is(layout, neighbor, enemy) {
                    violations.push(Violation {
                        student: student.id,
                        kind: ViolationKind::Separation,
                        related: Some(enemy),
                    });
                }
            }
        }

        let beside = grid::side_neighbors(config, seat);
        for &buddy in &student.pairings {
            let satisfied = beside.iter().any(|&n| occupant_is(layout, n, buddy));
            if !satisfied {
                violations.push(Violation {
                    student: student.id,
                    kind: ViolationKind::Pairing,
                    related: Some(buddy),
                });
            }
        }

        if config.gender_balance && student.gender.is_specified() {
            for &n in &beside {
                if let Some(other) = layout.student_at(n) {
                    if other.gender == student.gender {
                        violations.push(Violation {
                            student: student.id,
                            kind: ViolationKind::GenderClash,
                            related: Some(other.id),
                        });
                    }
                }
            }
        }

        if config.academic_diversity && student.level.is_extreme() {
            for &n in &beside {
                if let Some(other) = layout.student_at(n) {
                    if other.level == student.level {
                        violations.push(Violation {
                            student: student.id,
                            kind: ViolationKind::LevelClumping,
                            related: Some(other.id),
                        });
                    }
                }
            }
        }
    }

    Evaluation::from_violations(violations)
}

#[inline]
fn occupant_is(layout: &Layout, seat: SeatIndex, id: StudentId) -> bool {
    layout.student_at(seat).is_some_and(|s| s.id == id)
}
