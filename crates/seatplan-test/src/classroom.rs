//! Classroom fixtures: sample rosters and the standard room.

use seatplan_core::{AcademicLevel, Gender, RoomConfig, Student, StudentId};

/// First names used for generated rosters, recycled with a numeric
/// suffix past twenty students.
pub const NAMES: [&str; 20] = [
    "Emma", "Oliver", "Ada", "William", "Sofie", "Lucas", "Nora", "Filip", "Ella", "Oskar", "Maja",
    "Emil", "Frida", "Theo", "Selma", "Jonas", "Ingrid", "Aksel", "Tuva", "Mikkel",
];

/// The 5x6 classroom the demo and most tests run against.
pub fn standard_room() -> RoomConfig {
    RoomConfig::new(5, 6)
}

/// Builds `n` unconstrained students with ids `1..=n`, names cycled from
/// [`NAMES`], and genders and levels spread deterministically so the soft
/// rules have material to work on.
pub fn sample_roster(n: usize) -> Vec<Student> {
    (0..n)
        .map(|i| {
            let name = if i < NAMES.len() {
                NAMES[i].to_string()
            } else {
                format!("{}-{}", NAMES[i % NAMES.len()], i / NAMES.len() + 1)
            };
            let gender = if i % 2 == 0 {
                Gender::Female
            } else {
                Gender::Male
            };
            let level = match i % 3 {
                0 => AcademicLevel::Support,
                1 => AcademicLevel::Average,
                _ => AcademicLevel::Strong,
            };
            Student::new(StudentId::new(i as u32 + 1), name)
                .with_gender(gender)
                .with_level(level)
        })
        .collect()
}
