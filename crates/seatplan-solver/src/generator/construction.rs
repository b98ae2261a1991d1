//! Greedy construction of the starting chart

use rand::seq::SliceRandom;
use rand::Rng;
use seatplan_core::{Layout, RoomConfig, RowZone, SeatIndex, Student};

/// Builds the initial layout in strict precedence order: fixed seats
/// first, then front and back zone locks onto shuffled in-zone seats,
/// then everyone else onto shuffled free seats.
///
/// A fixed seat that is void demotes its student to the pool, as does a
/// zone whose row fills up; each student is placed exactly once.
/// Validation has already guaranteed the pool fits the remaining seats.
pub(crate) fn build_initial(
    roster: &[Student],
    config: &RoomConfig,
    rng: &mut impl Rng,
) -> Layout {
    let mut layout = Layout::empty(config.capacity());
    let mut placed = vec![false; roster.len()];

    for (i, student) in roster.iter().enumerate() {
        if let Some(seat) = student.fixed_seat {
            if !config.is_void(seat) {
                layout.place(seat, student.clone());
                placed[i] = true;
            }
        }
    }

    place_zone(roster, config, rng, &mut layout, &mut placed, RowZone::Front);
    place_zone(roster, config, rng, &mut layout, &mut placed, RowZone::Back);

    let mut pool: Vec<usize> = (0..roster.len()).filter(|&i| !placed[i]).collect();
    pool.shuffle(rng);

    let mut free: Vec<SeatIndex> = (0..config.capacity())
        .filter(|&seat| !config.is_void(seat) && layout.student_at(seat).is_none())
        .collect();
    free.shuffle(rng);

    for (i, seat) in pool.into_iter().zip(free) {
        layout.place(seat, roster[i].clone());
    }

    layout
}

/// Seats every unplaced student locked to `zone` onto that row's usable
/// empty seats, in a freshly shuffled seat order. Students beyond the
/// zone's capacity stay unplaced and fall through to the pool.
fn place_zone(
    roster: &[Student],
    config: &RoomConfig,
    rng: &mut impl Rng,
    layout: &mut Layout,
    placed: &mut [bool],
    zone: RowZone,
) {
    let mut candidates: Vec<SeatIndex> = config
        .row_seats(config.zone_row(zone))
        .filter(|&seat| !config.is_void(seat) && layout.student_at(seat).is_none())
        .collect();
    candidates.shuffle(rng);
    let mut candidates = candidates.into_iter();

    for (i, student) in roster.iter().enumerate() {
        if placed[i] || student.zone_lock != Some(zone) {
            continue;
        }
        match candidates.next() {
            Some(seat) => {
                layout.place(seat, student.clone());
                placed[i] = true;
            }
            None => break,
        }
    }
}
