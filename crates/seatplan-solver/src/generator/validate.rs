//! Fail-fast room and roster checks

use std::collections::{HashMap, HashSet};

use seatplan_core::{Result, RoomConfig, SeatIndex, SeatingError, Student, StudentId};

/// Rejects rooms and rosters the generator could not seat faithfully:
/// degenerate or fully-void rooms, duplicate ids, fixed seats outside the
/// grid or claimed twice, and rosters larger than the usable capacity.
///
/// Runs before any placement so a bad configuration surfaces as an error
/// instead of silently unseated students. Checks follow roster order, so
/// the reported id is stable.
pub(crate) fn validate(roster: &[Student], config: &RoomConfig) -> Result<()> {
    config.validate()?;

    let mut seen: HashSet<StudentId> = HashSet::with_capacity(roster.len());
    for student in roster {
        if !seen.insert(student.id) {
            return Err(SeatingError::DuplicateStudentId { id: student.id });
        }
    }

    let capacity = config.capacity();
    let mut claimed: HashMap<SeatIndex, StudentId> = HashMap::new();
    for student in roster {
        if let Some(seat) = student.fixed_seat {
            if seat >= capacity {
                return Err(SeatingError::FixedSeatOutOfBounds {
                    student: student.id,
                    seat,
                    capacity,
                });
            }
            // Two students fixed to one void seat both fall back to free
            // placement, so only usable seats can conflict.
            if !config.is_void(seat) {
                if let Some(&first) = claimed.get(&seat) {
                    return Err(SeatingError::FixedSeatConflict {
                        seat,
                        first,
                        second: student.id,
                    });
                }
                claimed.insert(seat, student.id);
            }
        }
    }

    let usable = config.usable_seats();
    if roster.len() > usable {
        return Err(SeatingError::RosterTooLarge {
            students: roster.len(),
            usable,
        });
    }

    Ok(())
}
